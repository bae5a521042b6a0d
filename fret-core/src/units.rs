//! # Units Module
//!
//! Linear measurement units and conversions between them. Every engine
//! function takes its unit explicitly; nothing here keeps ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FretError, Result};

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// A linear unit a measurement can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "inches")]
    Inches,
    #[serde(rename = "mm")]
    Millimeters,
}

impl Unit {
    /// Label used in generated text and table headers ("inches" or "mm").
    pub fn label(self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Millimeters => "mm",
        }
    }

    /// Number of decimals shown when a value in this unit is displayed.
    pub fn display_precision(self) -> usize {
        match self {
            Unit::Inches => 4,
            Unit::Millimeters => 2,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "inches" | "inch" | "in" | "\"" => Ok(Unit::Inches),
            "mm" | "millimeters" | "millimetres" => Ok(Unit::Millimeters),
            other => Err(FretError::invalid(format!("unsupported unit `{other}`"))),
        }
    }
}

/// Converts a value between two units.
///
/// Converting to the same unit returns the value untouched rather than
/// going through a multiply/divide round trip.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Inches, Unit::Millimeters) => value * MM_PER_INCH,
        (Unit::Millimeters, Unit::Inches) => value / MM_PER_INCH,
        _ => value,
    }
}

/// String-identifier flavour of [`convert`], for callers holding raw unit names.
pub fn convert_named(value: f64, from: &str, to: &str) -> Result<f64> {
    Ok(convert(value, from.parse()?, to.parse()?))
}

/// Formats a value with the display precision of its unit.
pub fn format_measurement(value: f64, unit: Unit) -> String {
    format!("{:.*}", unit.display_precision(), value)
}
