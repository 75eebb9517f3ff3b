//! Cardmarket product catalog lookup
//!
//! Matches faces to Cardmarket singles by set, normalized name and collector
//! number. Older catalog entries never recorded a number, so a miss on the
//! exact key falls back to set + name alone.

use super::{FaceLookup, KeyKind};
use crate::card::CardFace;
use crate::utils::{normalize_name, strip_number};
use mtg_common::CatalogEntry;
use std::collections::HashMap;

/// Product catalog lookup by (set, name, number)
#[derive(Debug, Default)]
pub struct CardmarketCatalog {
    exact: HashMap<(String, String, String), CatalogEntry>,
    by_name: HashMap<(String, String), CatalogEntry>,
    count: usize,
}

impl CardmarketCatalog {
    /// Build the catalog; on duplicate keys the first entry wins
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let count = entries.len();
        let mut exact = HashMap::new();
        let mut by_name = HashMap::new();

        for entry in entries {
            let set_code = entry.set_code.to_uppercase();
            let name = normalize_name(&entry.name);
            if let Some(number) = entry.number.as_deref() {
                exact
                    .entry((set_code.clone(), name.clone(), strip_number(number)))
                    .or_insert_with(|| entry.clone());
            }
            by_name.entry((set_code, name)).or_insert(entry);
        }

        Self {
            exact,
            by_name,
            count,
        }
    }

    /// Find the product for a printing; exact match first, then set + name
    pub fn find(&self, set_code: &str, name: &str, number: &str) -> Option<&CatalogEntry> {
        let set_code = set_code.to_uppercase();
        let name = normalize_name(name);

        self.exact
            .get(&(set_code.clone(), name.clone(), strip_number(number)))
            .or_else(|| self.by_name.get(&(set_code, name)))
    }

    /// Get the number of catalog entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl FaceLookup for CardmarketCatalog {
    fn label(&self) -> &'static str {
        "cardmarket"
    }

    fn key_kind(&self) -> KeyKind {
        KeyKind::SetNumber
    }

    fn enrich(&self, card: &mut CardFace) -> bool {
        match self.find(&card.set_code, &card.name, &card.number) {
            Some(entry) => {
                card.identifiers.mcm_id = Some(entry.id_product.to_string());
                card.identifiers.mcm_meta_id = Some(entry.id_metacard.to_string());
                true
            }
            None => {
                log::debug!(
                    "cardmarket: no product for {} {} #{}",
                    card.set_code,
                    card.name,
                    card.number
                );
                false
            }
        }
    }
}
