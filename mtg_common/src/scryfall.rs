//! Scryfall bulk-data record types
//!
//! Only the fields the identity engine reads are modelled; everything else in
//! the bulk file is ignored on deserialization.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One Scryfall card object (a single printing in a single language)
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Printing {
    /// Scryfall id; empty when the record is missing one
    #[serde(default)]
    pub id: String,
    /// Absent for reversible layouts, which carry it per face instead
    #[serde(default)]
    pub oracle_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub collector_number: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub layout: String,
    /// For multi-faced cards, per-face overrides live here
    #[serde(default)]
    pub card_faces: Option<Vec<FaceData>>,
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedPart>>,
    #[serde(default)]
    pub finishes: Vec<String>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub frame: Option<String>,
    #[serde(default)]
    pub frame_effects: Vec<String>,
    #[serde(default)]
    pub promo_types: Vec<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub illustration_id: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Format name to legality status ("legal", "banned", ...)
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    /// Game platforms the printing exists on ("paper", "arena", "mtgo")
    #[serde(default)]
    pub games: Vec<String>,
}

fn default_lang() -> String {
    "en".to_string()
}

/// Face-specific fields of a multi-faced printing
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FaceData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub illustration_id: Option<String>,
    #[serde(default)]
    pub oracle_id: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// A token, meld or combo relation declared by Scryfall
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RelatedPart {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub component: String,
}

impl Printing {
    /// Face entries, empty for single-faced printings
    pub fn faces(&self) -> &[FaceData] {
        self.card_faces.as_deref().unwrap_or(&[])
    }

    /// Related parts, empty when Scryfall declares none
    pub fn related_parts(&self) -> &[RelatedPart] {
        self.all_parts.as_deref().unwrap_or(&[])
    }

    pub fn has_finish(&self, finish: &str) -> bool {
        self.finishes.iter().any(|f| f == finish)
    }
}

/// Parse a Scryfall bulk-data array
///
/// Each record is decoded on its own; one that does not fit [`Printing`] is
/// logged and skipped so the rest of the snapshot still loads.
pub fn parse_bulk(json: &str) -> Result<Vec<Printing>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = records.len();

    let mut printings = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Printing>(record) {
            Ok(printing) => printings.push(printing),
            Err(e) => log::warn!("Skipping bulk record {}: {}", index, e),
        }
    }

    log::debug!("Parsed {} of {} printings from bulk data", printings.len(), total);
    Ok(printings)
}

/// Read and parse a Scryfall bulk-data file from disk
pub fn load_bulk(path: &Path) -> Result<Vec<Printing>> {
    log::info!("Loading Scryfall snapshot from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let printings = parse_bulk(&content)?;
    log::info!("Loaded {} printings", printings.len());
    Ok(printings)
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
