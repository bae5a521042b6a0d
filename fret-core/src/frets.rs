//! # Fret Layout Module
//!
//! Equal-tempered fret placement and string-spread interpolation along the neck.
//!
//! ## Features
//! - Fret distances from the nut using the twelfth-root-of-two ratio
//! - Incremental spacing between neighbouring frets
//! - Linear string-spacing interpolation between nut and bridge
//! - A complete nut-to-bridge table for templates and printouts

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, Result};
use crate::units::{convert, Unit};

/// Fret number of the octave, where the vibrating length is halved.
pub const OCTAVE_FRET: u32 = 12;

/// Decimal places kept for the distances stored in a fret table.
const DISTANCE_DECIMALS: i32 = 4;

/// Position of a single fret, in the same unit as the scale length it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    /// Fret number, starting at 1 for the fret closest to the nut.
    pub fret_number: u32,
    /// Distance from the nut, rounded to 4 decimals.
    pub distance_from_nut: f64,
    /// Distance from the previous fret (from the nut for fret 1).
    pub distance_from_previous: f64,
}

fn round_distance(value: f64) -> f64 {
    let scale = 10f64.powi(DISTANCE_DECIMALS);
    (value * scale).round() / scale
}

/// Computes the distance of every fret from the nut.
///
/// For fret `n` the distance is `L - L / 2^(n/12)`, rounded to 4 decimals.
/// Each fret's distance is computed from the scale length directly, never
/// from a neighbouring fret, so rounding does not accumulate along the neck.
///
/// The incremental distance is taken between the unrounded distance of the
/// fret and the *rounded* distance already stored for the previous one,
/// which keeps the displayed table consistent with existing templates.
///
/// # Arguments
/// * `scale_length` - Nut-to-bridge distance, in any unit
/// * `fret_count` - Number of frets to place; zero yields an empty table
///
/// # Returns
/// * `Ok(positions)` - One entry per fret, ordered from fret 1 upward
/// * `Err(InvalidArgument)` - The scale length is not a positive finite number
pub fn compute_fret_positions(scale_length: f64, fret_count: u32) -> Result<Vec<FretPosition>> {
    ensure_positive("scale length", scale_length)?;

    let factor = 2f64.powf(1.0 / 12.0);
    let mut positions: Vec<FretPosition> = Vec::with_capacity(fret_count as usize);

    for fret_number in 1..=fret_count {
        let distance = scale_length - scale_length / factor.powf(fret_number as f64);
        let distance_from_previous = match positions.last() {
            Some(previous) => distance - previous.distance_from_nut,
            None => distance,
        };
        trace!("fret {fret_number}: {distance} from nut");
        positions.push(FretPosition {
            fret_number,
            distance_from_nut: round_distance(distance),
            distance_from_previous,
        });
    }

    Ok(positions)
}

/// Interpolates the spread of the strings at a given fret.
///
/// Fret 0 is the nut and returns `nut_width` exactly. Any other fret is placed
/// linearly between the nut and bridge widths according to how far along the
/// scale it sits. A fret beyond the end of `fret_positions` falls back to the
/// nut width instead of failing.
pub fn string_spacing_at_fret(
    fret_number: u32,
    nut_width: f64,
    bridge_width: f64,
    scale_length: f64,
    fret_positions: &[FretPosition],
) -> f64 {
    if fret_number == 0 {
        return nut_width;
    }

    let ratio = fret_positions
        .get(fret_number as usize - 1)
        .map(|position| position.distance_from_nut / scale_length)
        .filter(|ratio| ratio.is_finite())
        .unwrap_or(0.0);

    nut_width + (bridge_width - nut_width) * ratio
}

/// The measurements a fret template is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeckParams {
    pub scale_length: f64,
    /// Outer-string spread at the nut.
    pub nut_width: f64,
    /// Outer-string spread at the bridge.
    pub bridge_width: f64,
    pub fret_count: u32,
    pub unit: Unit,
}

impl Default for NeckParams {
    fn default() -> Self {
        Self {
            scale_length: 25.5,
            nut_width: 1.375,
            bridge_width: 2.0625,
            fret_count: 24,
            unit: Unit::Inches,
        }
    }
}

impl NeckParams {
    /// Re-expresses every length in `unit`. The fret count is unit-free and stays as is.
    pub fn to_unit(&self, unit: Unit) -> Self {
        Self {
            scale_length: convert(self.scale_length, self.unit, unit),
            nut_width: convert(self.nut_width, self.unit, unit),
            bridge_width: convert(self.bridge_width, self.unit, unit),
            fret_count: self.fret_count,
            unit,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("scale length", self.scale_length)?;
        ensure_non_negative("nut width", self.nut_width)?;
        ensure_non_negative("bridge width", self.bridge_width)?;
        Ok(())
    }
}

/// What a row of the fret table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowMarker {
    Nut,
    Fret(u32),
    Bridge,
}

/// One line of the printed fret table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretTableRow {
    pub marker: RowMarker,
    pub distance_from_nut: f64,
    pub string_spacing: f64,
    /// Absent for the nut and bridge rows.
    pub from_previous: Option<f64>,
    /// Set on the octave fret, which templates highlight.
    pub is_octave: bool,
}

/// Builds the full nut-to-bridge table for a neck.
///
/// The first row is the nut, followed by one row per fret, and the last row is
/// the bridge at the full scale length. All values are in `params.unit`.
pub fn build_fret_table(params: &NeckParams) -> Result<Vec<FretTableRow>> {
    params.validate()?;
    let positions = compute_fret_positions(params.scale_length, params.fret_count)?;

    let mut rows = Vec::with_capacity(positions.len() + 2);
    rows.push(FretTableRow {
        marker: RowMarker::Nut,
        distance_from_nut: 0.0,
        string_spacing: params.nut_width,
        from_previous: None,
        is_octave: false,
    });

    rows.extend(positions.iter().map(|position| FretTableRow {
        marker: RowMarker::Fret(position.fret_number),
        distance_from_nut: position.distance_from_nut,
        string_spacing: string_spacing_at_fret(
            position.fret_number,
            params.nut_width,
            params.bridge_width,
            params.scale_length,
            &positions,
        ),
        from_previous: Some(position.distance_from_previous),
        is_octave: position.fret_number == OCTAVE_FRET,
    }));

    rows.push(FretTableRow {
        marker: RowMarker::Bridge,
        distance_from_nut: params.scale_length,
        string_spacing: params.bridge_width,
        from_previous: None,
        is_octave: false,
    });

    Ok(rows)
}
