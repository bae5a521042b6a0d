//! # Presets Module
//!
//! Data model for catalogs of named instrument configurations (a Strat, a
//! tenor ukulele, a 34" bass...). Catalogs are supplied by the front end as
//! JSON with every length in inches. The calculation modules never read them;
//! a preset is resolved into plain [`NeckParams`] first.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::frets::NeckParams;
use crate::units::{convert, Unit};

/// A named instrument configuration. Lengths are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub scale_length: f64,
    pub nut_width: f64,
    pub bridge_width: f64,
    pub frets: u32,
    #[serde(default)]
    pub description: String,
}

/// The groups a catalog is organised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetFamily {
    ElectricGuitars,
    AcousticGuitars,
    BassGuitars,
    Classical,
    Ukuleles,
}

impl PresetFamily {
    pub const ALL: [PresetFamily; 5] = [
        PresetFamily::ElectricGuitars,
        PresetFamily::AcousticGuitars,
        PresetFamily::BassGuitars,
        PresetFamily::Classical,
        PresetFamily::Ukuleles,
    ];

    /// Key of this family in catalog JSON.
    pub fn key(self) -> &'static str {
        match self {
            PresetFamily::ElectricGuitars => "electricGuitars",
            PresetFamily::AcousticGuitars => "acousticGuitars",
            PresetFamily::BassGuitars => "bassGuitars",
            PresetFamily::Classical => "classical",
            PresetFamily::Ukuleles => "ukuleles",
        }
    }
}

/// All presets, grouped by family and keyed by preset id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetCatalog {
    pub electric_guitars: BTreeMap<String, Preset>,
    pub acoustic_guitars: BTreeMap<String, Preset>,
    pub bass_guitars: BTreeMap<String, Preset>,
    pub classical: BTreeMap<String, Preset>,
    pub ukuleles: BTreeMap<String, Preset>,
}

impl PresetCatalog {
    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: PresetCatalog =
            serde_json::from_str(json).context("Failed to parse preset catalog JSON")?;
        for family in PresetFamily::ALL {
            if catalog.family(family).is_empty() {
                warn!("preset catalog has no {} entries", family.key());
            }
        }
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset catalog {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid preset catalog {}", path.display()))
    }

    pub fn family(&self, family: PresetFamily) -> &BTreeMap<String, Preset> {
        match family {
            PresetFamily::ElectricGuitars => &self.electric_guitars,
            PresetFamily::AcousticGuitars => &self.acoustic_guitars,
            PresetFamily::BassGuitars => &self.bass_guitars,
            PresetFamily::Classical => &self.classical,
            PresetFamily::Ukuleles => &self.ukuleles,
        }
    }

    /// Finds a preset by id in any family. Families are searched in
    /// [`PresetFamily::ALL`] order and the first match wins.
    pub fn get(&self, key: &str) -> Option<(PresetFamily, &Preset)> {
        PresetFamily::ALL
            .into_iter()
            .find_map(|family| self.family(family).get(key).map(|preset| (family, preset)))
    }

    pub fn len(&self) -> usize {
        PresetFamily::ALL.into_iter().map(|family| self.family(family).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A preset expressed in the display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPreset {
    pub name: String,
    pub description: String,
    pub scale_length: f64,
    pub nut_width: f64,
    pub bridge_width: f64,
    pub frets: u32,
    pub unit: Unit,
    /// Short scale-length label for menus: `25.5"` or `648mm`.
    pub display_length: String,
}

impl Preset {
    /// Converts the preset's lengths from inches into `unit`.
    pub fn resolve(&self, unit: Unit) -> ResolvedPreset {
        let display_length = match unit {
            Unit::Inches => format!("{}\"", self.scale_length),
            Unit::Millimeters => format!("{:.0}mm", convert(self.scale_length, Unit::Inches, unit)),
        };

        ResolvedPreset {
            name: self.name.clone(),
            description: self.description.clone(),
            scale_length: convert(self.scale_length, Unit::Inches, unit),
            nut_width: convert(self.nut_width, Unit::Inches, unit),
            bridge_width: convert(self.bridge_width, Unit::Inches, unit),
            frets: self.frets,
            unit,
            display_length,
        }
    }
}

impl ResolvedPreset {
    pub fn neck_params(&self) -> NeckParams {
        NeckParams {
            scale_length: self.scale_length,
            nut_width: self.nut_width,
            bridge_width: self.bridge_width,
            fret_count: self.frets,
            unit: self.unit,
        }
    }
}
