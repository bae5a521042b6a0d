//! # Bridge Compensation Module
//!
//! Estimates how far behind the theoretical bridge line each saddle should
//! sit so that fretted notes play in tune.
//!
//! ## Model
//! The estimate is empirical: half the string gauge, scaled up for wound
//! strings, by the square root of the relative string tension, and by the
//! scale length relative to a 25.5" reference neck. The reference length
//! is applied to every instrument family alike.
//!
//! All gauges are in inches, so the model works in inches internally and
//! converts results back into the caller's unit at the end.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, FretError, Result};
use crate::gauges::default_set;
use crate::instrument::{classify, InstrumentCategory};
use crate::units::{convert, Unit};

/// Whether a string has a metal winding around its core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringKind {
    Wound,
    Plain,
}

impl StringKind {
    /// Decides wound or plain from the gauge, with a threshold per family.
    ///
    /// Steel-string guitars wind everything from 0.024" up, classical guitars
    /// from 0.029", basses wind every string and ukuleles none.
    pub fn classify(gauge: f64, category: InstrumentCategory) -> Self {
        let wound = match category {
            InstrumentCategory::ElectricGuitar | InstrumentCategory::AcousticGuitar => gauge >= 0.024,
            InstrumentCategory::ClassicalGuitar => gauge >= 0.029,
            InstrumentCategory::BassGuitar => true,
            InstrumentCategory::Ukulele => false,
        };
        if wound { StringKind::Wound } else { StringKind::Plain }
    }

    pub fn label(self) -> &'static str {
        match self {
            StringKind::Wound => "Wound",
            StringKind::Plain => "Plain",
        }
    }
}

/// Shorthand for `StringKind::classify(gauge, category) == StringKind::Wound`.
pub fn is_wound_string(gauge: f64, category: InstrumentCategory) -> bool {
    StringKind::classify(gauge, category) == StringKind::Wound
}

/// Coefficients of the compensation estimate.
///
/// The defaults are the calibrated values; [`compute_recommendation`] always
/// uses them. Tension is relative (1.0 = nominal) since no tension input is
/// collected yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompensationModel {
    /// Fraction of the gauge used as the base compensation.
    pub base_factor: f64,
    pub wound_multiplier: f64,
    pub plain_multiplier: f64,
    pub tension: f64,
    /// Scale length, in inches, at which the scale factor is 1.
    pub reference_scale_inches: f64,
}

impl Default for CompensationModel {
    fn default() -> Self {
        Self {
            base_factor: 0.5,
            wound_multiplier: 2.5,
            plain_multiplier: 1.0,
            tension: 1.0,
            reference_scale_inches: 25.5,
        }
    }
}

impl CompensationModel {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("base factor", self.base_factor)?;
        ensure_non_negative("wound multiplier", self.wound_multiplier)?;
        ensure_non_negative("plain multiplier", self.plain_multiplier)?;
        ensure_non_negative("tension", self.tension)?;
        ensure_positive("reference scale length", self.reference_scale_inches)?;
        Ok(())
    }

    /// Compensation for one string, in inches.
    pub fn string_compensation(&self, gauge: f64, kind: StringKind, scale_length_inches: f64) -> f64 {
        let multiplier = match kind {
            StringKind::Wound => self.wound_multiplier,
            StringKind::Plain => self.plain_multiplier,
        };
        gauge * self.base_factor
            * multiplier
            * self.tension.sqrt()
            * (scale_length_inches / self.reference_scale_inches)
    }
}

/// Compensation for one string, in inches, with the calibrated coefficients
/// and an explicit relative tension.
pub fn string_compensation(gauge: f64, kind: StringKind, scale_length_inches: f64, tension: f64) -> f64 {
    CompensationModel {
        tension,
        ..CompensationModel::default()
    }
    .string_compensation(gauge, kind, scale_length_inches)
}

/// Saddle offset recommended for a single string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCompensation {
    /// 1-based position of the string within the gauge set.
    pub string_index: u32,
    /// Gauge in inches.
    pub gauge: f64,
    pub kind: StringKind,
    /// Offset behind the theoretical bridge line, in the display unit.
    pub compensation_amount: f64,
    pub explanation_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompensationRange {
    pub min: f64,
    pub max: f64,
}

/// Everything needed to place a bridge and set its saddles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRecommendation {
    pub category: InstrumentCategory,
    /// Unit of every length in this recommendation.
    pub unit: Unit,
    /// Distance from the nut at which to start the bridge.
    pub recommended_bridge_position: f64,
    pub compensations: Vec<StringCompensation>,
    pub compensation_range: CompensationRange,
    pub explanation_text: String,
    pub tips: Vec<String>,
}

impl BridgeRecommendation {
    /// Setup advice for the instrument family this recommendation was made for.
    pub fn category_tips(&self) -> &'static [&'static str] {
        self.category.tips()
    }
}

/// Computes bridge placement and per-string compensation with the calibrated model.
///
/// # Arguments
/// * `scale_length` - Nut-to-bridge distance, in `unit`
/// * `fret_count` - Number of frets, used to tell electric from acoustic guitars
/// * `unit` - Unit of `scale_length`, and of every length in the result
/// * `gauges` - String gauges in inches; `None` uses the family's default set
///
/// # Returns
/// * `Ok(recommendation)` - One compensation per gauge, plus range, bridge position and tips
/// * `Err(InvalidArgument)` - Non-positive scale length, empty gauge list or a bad gauge
pub fn compute_recommendation(
    scale_length: f64,
    fret_count: u32,
    unit: Unit,
    gauges: Option<&[f64]>,
) -> Result<BridgeRecommendation> {
    compute_recommendation_with(&CompensationModel::default(), scale_length, fret_count, unit, gauges)
}

/// [`compute_recommendation`] with caller-supplied coefficients.
pub fn compute_recommendation_with(
    model: &CompensationModel,
    scale_length: f64,
    fret_count: u32,
    unit: Unit,
    gauges: Option<&[f64]>,
) -> Result<BridgeRecommendation> {
    model.validate()?;
    ensure_positive("scale length", scale_length)?;

    let scale_length_inches = convert(scale_length, unit, Unit::Inches);
    let category = classify(scale_length_inches, fret_count);
    debug!("classified {scale_length_inches:.3}\" with {fret_count} frets as {category}");

    let gauges = gauges.unwrap_or(default_set(category).gauges);
    if gauges.is_empty() {
        return Err(FretError::invalid("gauge set must contain at least one string"));
    }
    for &gauge in gauges {
        ensure_positive("string gauge", gauge)?;
    }

    let label = unit.label();
    let compensations: Vec<StringCompensation> = gauges
        .iter()
        .enumerate()
        .map(|(i, &gauge)| {
            let kind = StringKind::classify(gauge, category);
            let inches = model.string_compensation(gauge, kind, scale_length_inches);
            let amount = convert(inches, Unit::Inches, unit);
            trace!("string {}: {gauge}\" {kind:?} -> {amount}{label}", i + 1);

            StringCompensation {
                string_index: i as u32 + 1,
                gauge,
                kind,
                compensation_amount: amount,
                explanation_text: format!(
                    "{} string ({gauge}\" gauge) requires {amount:.3}{label} compensation",
                    kind.label()
                ),
            }
        })
        .collect();

    let amounts = compensations.iter().map(|c| c.compensation_amount);
    let min = amounts.clone().fold(f64::INFINITY, f64::min);
    let max = amounts.clone().fold(f64::NEG_INFINITY, f64::max);
    let average = amounts.sum::<f64>() / compensations.len() as f64;

    let position = scale_length + average;
    debug!("bridge at {position:.3}{label}, saddles {min:.3}-{max:.3}{label}");

    let explanation_text = format!(
        "For optimal intonation, individual bridge saddles should be positioned with \
         compensation ranging from {min:.3}{label} to {max:.3}{label} behind the \
         theoretical bridge position."
    );

    let tips = vec![
        format!("Start with the bridge positioned at {position:.3}{label} from the nut"),
        "Adjust individual saddles: plain strings need less compensation, wound strings need more".to_string(),
        "Use a tuner to fine-tune each string's intonation at the 12th fret".to_string(),
        "The thickest strings typically need the most compensation".to_string(),
        "Check intonation after any string gauge changes".to_string(),
    ];

    Ok(BridgeRecommendation {
        category,
        unit,
        recommended_bridge_position: position,
        compensations,
        compensation_range: CompensationRange { min, max },
        explanation_text,
        tips,
    })
}
