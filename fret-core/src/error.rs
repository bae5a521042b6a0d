//! Error types shared by every calculation in the crate.

/// Errors raised when a caller hands the engine values it cannot work with.
///
/// Lookups that simply find nothing (an unknown gauge-set id, for example)
/// are not errors and come back as `None` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FretError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FretError>;

impl FretError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        FretError::InvalidArgument(message.into())
    }
}

/// Rejects lengths that are NaN, infinite, zero or negative.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FretError::invalid(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Like [`ensure_positive`] but lets zero through.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FretError::invalid(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}
