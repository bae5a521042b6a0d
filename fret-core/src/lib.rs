// fret-core/src/lib.rs

//! The core logic for the fret template calculator.
//! This crate is responsible for fret placement, string spacing,
//! instrument classification and bridge compensation. It is completely
//! headless and contains no drawing or form code: callers pass plain
//! numbers in and get plain structures back.

pub mod compensation;
pub mod error;
pub mod frets;
pub mod gauges;
pub mod instrument;
pub mod presets;
pub mod units;

pub use compensation::{
    compute_recommendation, compute_recommendation_with, BridgeRecommendation, CompensationModel,
    CompensationRange, StringCompensation, StringKind,
};
pub use error::{FretError, Result};
pub use frets::{
    build_fret_table, compute_fret_positions, string_spacing_at_fret, FretPosition, FretTableRow,
    NeckParams, RowMarker,
};
pub use gauges::StringGaugeSet;
pub use instrument::{classify, InstrumentCategory};
pub use units::{convert, Unit};

/// Everything a template needs for one set of inputs.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeckLayout {
    pub params: NeckParams,
    pub table: Vec<FretTableRow>,
    pub bridge: BridgeRecommendation,
}

/// Recomputes the fret table and bridge recommendation for `params`.
///
/// `gauge_set_id` selects a set from the classified family's catalog; an id
/// that family does not offer falls back to its default set.
pub fn layout(params: &NeckParams, gauge_set_id: Option<&str>) -> Result<NeckLayout> {
    let table = build_fret_table(params)?;

    let inches = convert(params.scale_length, params.unit, Unit::Inches);
    let category = classify(inches, params.fret_count);
    let set = gauge_set_id
        .and_then(|id| gauges::set_by_id(category, id))
        .unwrap_or_else(|| gauges::default_set(category));

    let bridge = compute_recommendation(
        params.scale_length,
        params.fret_count,
        params.unit,
        Some(set.gauges),
    )?;

    Ok(NeckLayout {
        params: *params,
        table,
        bridge,
    })
}
