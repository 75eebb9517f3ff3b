//! Legacy identity cache
//!
//! Maps `(scryfallId, side)` to an identity published by an earlier build.
//! Entries are authoritative over the hash and are never replaced: the store
//! only ever gains rows (`INSERT OR IGNORE`).
//!
//! Uses parameterized queries exclusively; all writes are transactional.

use crate::card::CardFace;
use rusqlite::{params, Connection, Transaction};
use std::collections::HashMap;

/// Result type for cache store operations
pub type DbResult<T> = rusqlite::Result<T>;

/// In-memory view of the cache used during a build
#[derive(Debug, Clone, Default)]
pub struct LegacyIdCache {
    ids: HashMap<(String, char), String>,
}

impl LegacyIdCache {
    /// Recorded identity for a face, if any
    pub fn get(&self, scryfall_id: &str, side: char) -> Option<&str> {
        self.ids
            .get(&(scryfall_id.to_string(), side))
            .map(String::as_str)
    }

    /// Add an entry unless the pair is already recorded; returns whether it was added
    pub fn insert(&mut self, scryfall_id: &str, side: char, uuid: &str) -> bool {
        let key = (scryfall_id.to_string(), side);
        if self.ids.contains_key(&key) {
            return false;
        }
        self.ids.insert(key, uuid.to_string());
        true
    }

    /// Parse the JSON seed format `{ "<scryfallId>": { "<side>": "<uuid>" } }`
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut cache = Self::default();
        for (scryfall_id, sides) in raw {
            for (side, uuid) in sides {
                match side.chars().next() {
                    Some(letter) => {
                        cache.insert(&scryfall_id, letter, &uuid);
                    }
                    None => log::warn!("Skipping legacy id for {} with empty side", scryfall_id),
                }
            }
        }
        Ok(cache)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char, &str)> {
        self.ids
            .iter()
            .map(|((id, side), uuid)| (id.as_str(), *side, uuid.as_str()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Initialize the cache schema
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        "
        -- One identity per (scryfall_id, side); rows are never updated
        CREATE TABLE IF NOT EXISTS legacy_ids (
            scryfall_id TEXT NOT NULL,
            side TEXT NOT NULL,
            uuid TEXT NOT NULL,
            recorded_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scryfall_id, side)
        );
        ",
    )?;

    log::debug!("Legacy id cache schema initialized");
    Ok(())
}

/// Load every recorded identity
pub fn load_cache(conn: &Connection) -> DbResult<LegacyIdCache> {
    let mut stmt = conn.prepare("SELECT scryfall_id, side, uuid FROM legacy_ids")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut cache = LegacyIdCache::default();
    for row in rows {
        let (scryfall_id, side, uuid) = row?;
        if let Some(letter) = side.chars().next() {
            cache.insert(&scryfall_id, letter, &uuid);
        }
    }

    log::info!("Loaded {} legacy identities", cache.len());
    Ok(cache)
}

/// Append identities from a build; existing pairs are left untouched
///
/// Returns the number of new rows.
pub fn record_identities(conn: &mut Connection, cards: &[CardFace]) -> DbResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = insert_statement(&tx)?;
        for card in cards {
            inserted += stmt.execute(params![
                &card.identifiers.scryfall_id,
                card.side_or_default().to_string(),
                &card.uuid,
            ])?;
        }
    }
    tx.commit()?;

    log::info!(
        "Recorded {} new legacy identities ({} already known)",
        inserted,
        cards.len() - inserted
    );
    Ok(inserted)
}

/// Seed the store from an in-memory cache (e.g. a JSON import)
pub fn import_cache(conn: &mut Connection, cache: &LegacyIdCache) -> DbResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = insert_statement(&tx)?;
        for (scryfall_id, side, uuid) in cache.iter() {
            inserted += stmt.execute(params![scryfall_id, side.to_string(), uuid])?;
        }
    }
    tx.commit()?;

    log::info!("Imported {} of {} legacy identities", inserted, cache.len());
    Ok(inserted)
}

fn insert_statement<'tx>(tx: &'tx Transaction<'_>) -> DbResult<rusqlite::CachedStatement<'tx>> {
    tx.prepare_cached(
        "INSERT OR IGNORE INTO legacy_ids (scryfall_id, side, uuid)
         VALUES (?1, ?2, ?3)",
    )
}

/// Get total count of recorded identities
pub fn get_legacy_id_count(conn: &Connection) -> DbResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM legacy_ids", [], |row| row.get(0))
}
