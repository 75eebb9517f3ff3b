//! Canonical per-face card record
//!
//! A `CardFace` is created by the normalizer and then handed by value through
//! the join, identity and relationship stages, each of which fills in its own
//! fields.

use mtg_common::RelatedPart;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Layouts whose printings are tokens rather than cards
pub const TOKEN_LAYOUTS: &[&str] = &["token", "double_faced_token", "emblem"];

/// One face of one printing, in the canonical schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardFace {
    pub uuid: String,
    pub identifiers: Identifiers,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_name: Option<String>,
    #[serde(default)]
    pub side: Option<char>,
    #[serde(skip)]
    pub face_index: usize,
    pub set_code: String,
    pub number: String,
    pub language: String,
    pub layout: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(rename = "type", default)]
    pub type_line: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub frame_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_effects: Vec<String>,
    #[serde(default)]
    pub finishes: Vec<String>,
    #[serde(default)]
    pub has_foil: bool,
    #[serde(default)]
    pub has_non_foil: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub promo_types: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_rebalanced: bool,

    // Provider data carried for later stages, never published
    #[serde(skip)]
    pub related_parts: Vec<RelatedPart>,
    #[serde(skip)]
    pub source_legalities: BTreeMap<String, String>,
    #[serde(skip)]
    pub source_games: Vec<String>,

    // Lookup joins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rulings: Vec<Ruling>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edhrec_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edhrec_saltiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_data: Vec<ForeignData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_cards: Option<RelatedCards>,
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<String>,

    // Relationship links
    #[serde(default)]
    pub other_face_ids: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub is_alternative: bool,
    #[serde(default)]
    pub card_parts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub original_printings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rebalanced_printings: Vec<String>,
}

/// External identifiers attached to a face
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identifiers {
    pub scryfall_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scryfall_oracle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scryfall_illustration_id: Option<String>,
    #[serde(default)]
    pub mtgjson_v4_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgjson_foil_version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgjson_non_foil_version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcm_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcm_meta_id: Option<String>,
    /// Store and rosetta-stone ids keyed by their published field name
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ruling {
    pub date: String,
    pub text: String,
}

/// Localized printing of the same card
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForeignData {
    pub language: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedCards {
    #[serde(default)]
    pub spellbook: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CardFace {
    /// Name as printed on this face; the full name for single-faced cards
    pub fn printed_face_name(&self) -> &str {
        self.face_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_token(&self) -> bool {
        TOKEN_LAYOUTS.contains(&self.layout.as_str()) || self.types.iter().any(|t| t == "Token")
    }

    pub fn has_finish(&self, finish: &str) -> bool {
        self.finishes.iter().any(|f| f == finish)
    }

    /// Side letter used for identity and keyed lookups; single-faced cards count as "a"
    pub fn side_or_default(&self) -> char {
        self.side.unwrap_or('a')
    }

    /// Reset every relationship field so linking can run again from scratch
    pub fn clear_links(&mut self) {
        self.other_face_ids.clear();
        self.variations.clear();
        self.is_alternative = false;
        self.card_parts = None;
        self.original_printings.clear();
        self.rebalanced_printings.clear();
        self.identifiers.mtgjson_foil_version_id = None;
        self.identifiers.mtgjson_non_foil_version_id = None;
    }
}

#[cfg(test)]
pub use tests::make_test_face;
