//! Cardmarket product catalog rows

use serde::{Deserialize, Serialize};

/// One Cardmarket single, as exported for matching against Scryfall printings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id_product: u64,
    pub id_metacard: u64,
    pub name: String,
    /// Scryfall-style set code of the expansion
    pub set_code: String,
    /// Collector number; older catalog entries never recorded one
    #[serde(default)]
    pub number: Option<String>,
}

/// Catalog file envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub created_at: String,
    pub products: Vec<CatalogEntry>,
}
