//! Auxiliary lookup tables
//!
//! Every table is a read-only `LookupTable<K, V>` bound to one key form and
//! one target field. The join layer sees them only through `FaceLookup`, so
//! it can apply all registered tables uniformly.

mod cardmarket;
mod loader;
mod meld;
mod tables;

pub use cardmarket::CardmarketCatalog;
pub use loader::{load_lookup_dir, LookupFiles};
pub use meld::{MeldRole, MeldTriplets};
pub use tables::{
    face_overrides, foreign_data, popularity, printings_index, rosetta_ids, rulings,
    sealed_products, spellbook, store_ids, subsets, Popularity, ProviderIdsRow, SealedRow,
    SetNumberRow,
};

#[cfg(test)]
pub use meld::make_test_melds;

use crate::card::CardFace;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Which part of a face a table is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    OracleId,
    ProviderSide,
    SetNumber,
    Name,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KeyKind::OracleId => "oracle id",
            KeyKind::ProviderSide => "scryfall id + side",
            KeyKind::SetNumber => "set + number",
            KeyKind::Name => "name",
        };
        f.write_str(label)
    }
}

/// `(scryfallId, side)` key; single-faced cards use side `a`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderKey {
    pub scryfall_id: String,
    pub side: char,
}

impl ProviderKey {
    pub fn new(scryfall_id: &str, side: Option<char>) -> Self {
        Self {
            scryfall_id: scryfall_id.to_string(),
            side: side.unwrap_or('a'),
        }
    }
}

/// `(setCode, collectorNumber)` key; set codes are uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetNumberKey {
    pub set_code: String,
    pub number: String,
}

impl SetNumberKey {
    pub fn new(set_code: &str, number: &str) -> Self {
        Self {
            set_code: set_code.to_uppercase(),
            number: number.to_string(),
        }
    }
}

/// Immutable keyed mapping supplied once per build
#[derive(Debug, Clone)]
pub struct LookupTable<K, V> {
    rows: HashMap<K, V>,
}

impl<K, V> Default for LookupTable<K, V> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> LookupTable<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for LookupTable<K, V> {
    /// Later rows with a duplicate key replace earlier ones
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for LookupTable<K, V> {
    fn from(rows: HashMap<K, V>) -> Self {
        Self { rows }
    }
}

/// A table the join layer can apply to a face
pub trait FaceLookup: Send + Sync {
    /// Short name for logging
    fn label(&self) -> &'static str;

    fn key_kind(&self) -> KeyKind;

    /// Copy the matching row onto the face; returns whether a row matched
    ///
    /// A miss must leave the target field at its default.
    fn enrich(&self, card: &mut CardFace) -> bool;
}

/// A `LookupTable` bound to a key extractor and a field writer
pub struct KeyedLookup<K, V> {
    label: &'static str,
    kind: KeyKind,
    table: LookupTable<K, V>,
    key: fn(&CardFace) -> Option<K>,
    apply: fn(&V, &mut CardFace),
}

impl<K, V> KeyedLookup<K, V> {
    pub fn new(
        label: &'static str,
        kind: KeyKind,
        table: LookupTable<K, V>,
        key: fn(&CardFace) -> Option<K>,
        apply: fn(&V, &mut CardFace),
    ) -> Self {
        Self {
            label,
            kind,
            table,
            key,
            apply,
        }
    }
}

impl<K, V> FaceLookup for KeyedLookup<K, V>
where
    K: Eq + Hash + fmt::Debug + Send + Sync,
    V: Send + Sync,
{
    fn label(&self) -> &'static str {
        self.label
    }

    fn key_kind(&self) -> KeyKind {
        self.kind
    }

    fn enrich(&self, card: &mut CardFace) -> bool {
        let Some(key) = (self.key)(card) else {
            return false;
        };
        match self.table.get(&key) {
            Some(row) => {
                (self.apply)(row, card);
                true
            }
            None => {
                log::debug!("{}: no row for {:?}", self.label, key);
                false
            }
        }
    }
}

/// Registry of every table joined during a build
#[derive(Default)]
pub struct Lookups {
    tables: Vec<Box<dyn FaceLookup>>,
}

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table; tables are applied in registration order
    pub fn register<L: FaceLookup + 'static>(&mut self, lookup: L) -> &mut Self {
        self.tables.push(Box::new(lookup));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FaceLookup> {
        self.tables.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl fmt::Debug for Lookups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tables.iter().map(|t| t.label()))
            .finish()
    }
}

// Key extractors shared by the table constructors

pub(crate) fn oracle_key(card: &CardFace) -> Option<String> {
    card.identifiers.scryfall_oracle_id.clone()
}

pub(crate) fn provider_key(card: &CardFace) -> Option<ProviderKey> {
    Some(ProviderKey::new(&card.identifiers.scryfall_id, card.side))
}

pub(crate) fn set_number_key(card: &CardFace) -> Option<SetNumberKey> {
    Some(SetNumberKey::new(&card.set_code, &card.number))
}

pub(crate) fn name_key(card: &CardFace) -> Option<String> {
    Some(card.name.clone())
}

pub(crate) fn face_name_key(card: &CardFace) -> Option<String> {
    Some(card.printed_face_name().to_string())
}
