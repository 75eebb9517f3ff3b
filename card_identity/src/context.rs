//! Per-build context
//!
//! Everything a build reads besides the snapshot itself. A context is
//! constructed once, fully populated, and then only borrowed by the stages.

use crate::legacy_cache::LegacyIdCache;
use crate::lookups::{Lookups, MeldTriplets};
use crate::vocabulary::Vocabulary;
use std::collections::HashMap;

/// Language whose printings count as the originals of rebalanced cards
pub const CANONICAL_LANGUAGE: &str = "English";

/// Sets whose foil and non-foil printings are separate Scryfall records
pub const FOIL_LINK_SETS: &[&str] = &["CN2", "FRF", "ONS", "10E", "UNH"];

/// Sets whose variation key also includes the finishes
pub const FINISH_KEYED_SETS: &[&str] = &["UNH", "10E"];

/// Tunables for the relationship engine
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub canonical_language: String,
    pub foil_link_sets: Vec<String>,
    pub finish_keyed_sets: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            canonical_language: CANONICAL_LANGUAGE.to_string(),
            foil_link_sets: FOIL_LINK_SETS.iter().map(|s| s.to_string()).collect(),
            finish_keyed_sets: FINISH_KEYED_SETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BuildOptions {
    pub fn links_foils(&self, set_code: &str) -> bool {
        self.foil_link_sets.iter().any(|s| s == set_code)
    }

    pub fn keys_finishes(&self, set_code: &str) -> bool {
        self.finish_keyed_sets.iter().any(|s| s == set_code)
    }
}

/// Read-only inputs for one build
#[derive(Debug, Default)]
pub struct BuildContext {
    pub lookups: Lookups,
    pub melds: MeldTriplets,
    /// Hand-maintained `uuid -> other face uuids` corrections
    pub other_face_overrides: HashMap<String, Vec<String>>,
    /// Precomputed vocabulary; discovered from the snapshot when absent
    pub vocabulary: Option<Vocabulary>,
    pub legacy_ids: LegacyIdCache,
    pub options: BuildOptions,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }
}
