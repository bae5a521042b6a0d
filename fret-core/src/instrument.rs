//! # Instrument Module
//!
//! Classifies a neck into an instrument family from its scale length and fret
//! count. The family picks the default string gauges and the wound/plain rule
//! used by bridge compensation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FretError, Result};
use crate::units::MM_PER_INCH;

/// Any scale length above this is assumed to have been given in millimeters.
pub const MM_DETECTION_THRESHOLD: f64 = 100.0;

/// Fret count from which a 24"-26" neck counts as an electric guitar.
const ELECTRIC_MIN_FRETS: u32 = 22;

/// The instrument families the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstrumentCategory {
    ElectricGuitar,
    AcousticGuitar,
    BassGuitar,
    ClassicalGuitar,
    Ukulele,
}

impl InstrumentCategory {
    /// All categories in canonical order.
    pub const ALL: [InstrumentCategory; 5] = [
        InstrumentCategory::ElectricGuitar,
        InstrumentCategory::AcousticGuitar,
        InstrumentCategory::BassGuitar,
        InstrumentCategory::ClassicalGuitar,
        InstrumentCategory::Ukulele,
    ];

    /// Stable identifier, e.g. `"electricGuitar"`.
    pub fn id(self) -> &'static str {
        match self {
            InstrumentCategory::ElectricGuitar => "electricGuitar",
            InstrumentCategory::AcousticGuitar => "acousticGuitar",
            InstrumentCategory::BassGuitar => "bassGuitar",
            InstrumentCategory::ClassicalGuitar => "classicalGuitar",
            InstrumentCategory::Ukulele => "ukulele",
        }
    }

    /// Setup advice specific to this family, three lines each.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            InstrumentCategory::ElectricGuitar => &[
                "Electric guitars typically need 1-3mm of compensation",
                "Tremolo bridges may require additional setup considerations",
                "Check intonation after adjusting string height or pickup height",
            ],
            InstrumentCategory::AcousticGuitar => &[
                "Acoustic guitars often need slightly more compensation than electrics",
                "Consider the bridge saddle angle for optimal intonation",
                "Heavier string gauges will require more compensation",
            ],
            InstrumentCategory::ClassicalGuitar => &[
                "Classical guitars with nylon strings need minimal compensation",
                "Wound bass strings still require more compensation than treble strings",
                "Temperature and humidity can affect nylon string intonation",
            ],
            InstrumentCategory::BassGuitar => &[
                "Bass guitars typically need 3-6mm of compensation",
                "All strings are wound and require significant compensation",
                "Longer scale lengths may need proportionally more compensation",
            ],
            InstrumentCategory::Ukulele => &[
                "Ukuleles need minimal compensation due to plain strings",
                "Compensation is usually less than 1mm per string",
                "Re-entrant tuning (high G) may affect compensation needs",
            ],
        }
    }
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InstrumentCategory {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        InstrumentCategory::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| FretError::invalid(format!("unknown instrument category `{s}`")))
    }
}

/// Classifies an instrument from its scale length and fret count.
///
/// The scale length carries no unit: anything above 100 is taken to be
/// millimeters and converted to inches first. The checks then run in a fixed
/// order, so a 25.6" neck is always classical whatever its fret count:
///
/// 1. 30" and longer: bass guitar
/// 2. 17" and shorter: ukulele
/// 3. 25.55"-25.65": classical guitar (the 650mm standard)
/// 4. 24"-26": electric with 22+ frets, acoustic otherwise
/// 5. anything else: electric guitar
pub fn classify(scale_length: f64, fret_count: u32) -> InstrumentCategory {
    let inches = if scale_length > MM_DETECTION_THRESHOLD {
        scale_length / MM_PER_INCH
    } else {
        scale_length
    };

    if inches >= 30.0 {
        InstrumentCategory::BassGuitar
    } else if inches <= 17.0 {
        InstrumentCategory::Ukulele
    } else if (25.55..=25.65).contains(&inches) {
        InstrumentCategory::ClassicalGuitar
    } else if (24.0..=26.0).contains(&inches) {
        if fret_count >= ELECTRIC_MIN_FRETS {
            InstrumentCategory::ElectricGuitar
        } else {
            InstrumentCategory::AcousticGuitar
        }
    } else {
        InstrumentCategory::ElectricGuitar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifies_electric_guitars() {
        assert_eq!(classify(25.5, 24), InstrumentCategory::ElectricGuitar);
        assert_eq!(classify(24.75, 22), InstrumentCategory::ElectricGuitar);
    }

    #[test]
    fn identifies_acoustic_guitars() {
        assert_eq!(classify(25.4, 20), InstrumentCategory::AcousticGuitar);
        assert_eq!(classify(24.9, 20), InstrumentCategory::AcousticGuitar);
        assert_eq!(classify(24.0, 21), InstrumentCategory::AcousticGuitar);
        assert_eq!(classify(26.0, 19), InstrumentCategory::AcousticGuitar);
    }

    #[test]
    fn identifies_bass_and_ukulele_at_their_bounds() {
        assert_eq!(classify(34.0, 24), InstrumentCategory::BassGuitar);
        assert_eq!(classify(30.0, 20), InstrumentCategory::BassGuitar);
        assert_eq!(classify(17.0, 15), InstrumentCategory::Ukulele);
        assert_eq!(classify(13.0, 12), InstrumentCategory::Ukulele);
    }

    #[test]
    fn classical_check_runs_before_the_guitar_band() {
        assert_eq!(classify(25.6, 24), InstrumentCategory::ClassicalGuitar);
        assert_eq!(classify(25.6, 19), InstrumentCategory::ClassicalGuitar);
        assert_eq!(classify(25.55, 22), InstrumentCategory::ClassicalGuitar);
        assert_eq!(classify(25.65, 22), InstrumentCategory::ClassicalGuitar);
        assert_eq!(classify(650.0, 19), InstrumentCategory::ClassicalGuitar);
    }

    #[test]
    fn outside_every_band_defaults_to_electric() {
        assert_eq!(classify(22.5, 19), InstrumentCategory::ElectricGuitar);
        assert_eq!(classify(28.0, 24), InstrumentCategory::ElectricGuitar);
        assert_eq!(classify(f64::NAN, 22), InstrumentCategory::ElectricGuitar);
    }

    #[test]
    fn millimeter_input_is_detected_by_magnitude() {
        assert_eq!(classify(647.7, 24), classify(25.5, 24));
        assert_eq!(classify(431.8, 15), InstrumentCategory::Ukulele);
        assert_eq!(classify(863.6, 20), InstrumentCategory::BassGuitar);
        // 100 itself is still read as inches.
        assert_eq!(classify(100.0, 20), InstrumentCategory::BassGuitar);
    }

    #[test]
    fn every_category_has_three_tips() {
        for category in InstrumentCategory::ALL {
            assert_eq!(category.tips().len(), 3, "{category}");
        }
        assert_eq!(
            InstrumentCategory::BassGuitar.tips()[0],
            "Bass guitars typically need 3-6mm of compensation"
        );
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for category in InstrumentCategory::ALL {
            assert_eq!(category.id().parse::<InstrumentCategory>(), Ok(category));
        }
        assert!("banjo".parse::<InstrumentCategory>().is_err());
    }
}
