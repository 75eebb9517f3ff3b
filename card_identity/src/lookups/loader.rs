//! Loading lookup tables from a directory of JSON files
//!
//! Each file is read on its own blocking task; the build only starts once
//! every task has finished, so the engine always sees fully-populated tables.
//! A missing file is an empty table.

use super::tables::{self, Popularity, ProviderIdsRow, SealedRow, SetNumberRow};
use super::{CardmarketCatalog, LookupTable, Lookups, MeldTriplets};
use crate::card::{ForeignData, Ruling};
use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use crate::vocabulary::Vocabulary;
use mtg_common::CatalogFile;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const RULINGS_FILE: &str = "rulings.json";
pub const PRINTINGS_FILE: &str = "printings.json";
pub const POPULARITY_FILE: &str = "popularity.json";
pub const STORE_IDS_FILE: &str = "store_ids.json";
pub const ROSETTA_FILE: &str = "rosetta.json";
pub const SEALED_FILE: &str = "sealed_products.json";
pub const CARDMARKET_FILE: &str = "cardmarket.json";
pub const FOREIGN_DATA_FILE: &str = "foreign_data.json";
pub const SUBSETS_FILE: &str = "subsets.json";
pub const SPELLBOOK_FILE: &str = "spellbook.json";
pub const FACE_OVERRIDES_FILE: &str = "face_overrides.json";
pub const MELD_FILE: &str = "meld_triplets.json";
pub const OTHER_FACE_OVERRIDES_FILE: &str = "other_face_overrides.json";
pub const VOCABULARY_FILE: &str = "vocabulary.json";

/// Raw contents of a lookup directory, before binding to faces
#[derive(Debug, Default)]
pub struct LookupFiles {
    pub rulings: Option<HashMap<String, Vec<Ruling>>>,
    pub printings: Option<HashMap<String, Vec<String>>>,
    pub popularity: Option<HashMap<String, Popularity>>,
    pub store_ids: Option<Vec<ProviderIdsRow>>,
    pub rosetta: Option<Vec<ProviderIdsRow>>,
    pub sealed: Option<Vec<SealedRow>>,
    pub cardmarket: Option<CatalogFile>,
    pub foreign_data: Option<Vec<SetNumberRow<Vec<ForeignData>>>>,
    pub subsets: Option<Vec<SetNumberRow<Vec<String>>>>,
    pub spellbook: Option<HashMap<String, Vec<String>>>,
    pub face_overrides: Option<HashMap<String, String>>,
    pub melds: Option<Vec<[String; 3]>>,
    pub other_face_overrides: Option<HashMap<String, Vec<String>>>,
    pub vocabulary: Option<Vocabulary>,
}

/// Read every known lookup file in `dir` concurrently
pub async fn load_lookup_dir(dir: &Path) -> Result<LookupFiles> {
    log::info!("Loading lookup tables from: {}", dir.display());

    let (
        rulings,
        printings,
        popularity,
        store_ids,
        rosetta,
        sealed,
        cardmarket,
        foreign_data,
        subsets,
        spellbook,
        face_overrides,
        melds,
        other_face_overrides,
        vocabulary,
    ) = tokio::try_join!(
        spawn_read(dir.join(RULINGS_FILE)),
        spawn_read(dir.join(PRINTINGS_FILE)),
        spawn_read(dir.join(POPULARITY_FILE)),
        spawn_read(dir.join(STORE_IDS_FILE)),
        spawn_read(dir.join(ROSETTA_FILE)),
        spawn_read(dir.join(SEALED_FILE)),
        spawn_read(dir.join(CARDMARKET_FILE)),
        spawn_read(dir.join(FOREIGN_DATA_FILE)),
        spawn_read(dir.join(SUBSETS_FILE)),
        spawn_read(dir.join(SPELLBOOK_FILE)),
        spawn_read(dir.join(FACE_OVERRIDES_FILE)),
        spawn_read(dir.join(MELD_FILE)),
        spawn_read(dir.join(OTHER_FACE_OVERRIDES_FILE)),
        spawn_read(dir.join(VOCABULARY_FILE)),
    )?;

    Ok(LookupFiles {
        rulings,
        printings,
        popularity,
        store_ids,
        rosetta,
        sealed,
        cardmarket,
        foreign_data,
        subsets,
        spellbook,
        face_overrides,
        melds,
        other_face_overrides,
        vocabulary,
    })
}

async fn spawn_read<T>(path: PathBuf) -> Result<Option<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    tokio::task::spawn_blocking(move || read_optional_json(&path)).await?
}

/// Parse a JSON file, treating a missing file as `None`
pub fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No {} found, table left empty", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let value = serde_json::from_str(&content).map_err(|source| BuildError::Lookup {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {}", path.display());
    Ok(Some(value))
}

impl LookupFiles {
    /// Bind every table and build the context the engine borrows
    ///
    /// Tables are registered in a fixed order so joins are reproducible.
    pub fn into_context(self) -> BuildContext {
        let mut lookups = Lookups::new();

        lookups
            .register(tables::rulings(table_from_map(self.rulings)))
            .register(tables::printings_index(table_from_map(self.printings)))
            .register(tables::popularity(table_from_map(self.popularity)))
            .register(tables::store_ids(
                self.store_ids
                    .unwrap_or_default()
                    .into_iter()
                    .map(ProviderIdsRow::into_entry)
                    .collect(),
            ))
            .register(tables::rosetta_ids(
                self.rosetta
                    .unwrap_or_default()
                    .into_iter()
                    .map(ProviderIdsRow::into_entry)
                    .collect(),
            ))
            .register(tables::sealed_products(
                self.sealed
                    .unwrap_or_default()
                    .into_iter()
                    .map(SealedRow::into_entry)
                    .collect(),
            ))
            .register(CardmarketCatalog::from_entries(
                self.cardmarket.map(|file| file.products).unwrap_or_default(),
            ))
            .register(tables::foreign_data(
                self.foreign_data
                    .unwrap_or_default()
                    .into_iter()
                    .map(SetNumberRow::into_entry)
                    .collect(),
            ))
            .register(tables::subsets(
                self.subsets
                    .unwrap_or_default()
                    .into_iter()
                    .map(SetNumberRow::into_entry)
                    .collect(),
            ))
            .register(tables::spellbook(table_from_map(self.spellbook)))
            .register(tables::face_overrides(table_from_map(self.face_overrides)));

        let melds = MeldTriplets::new(self.melds.unwrap_or_default());
        log::info!(
            "Registered {} lookup tables and {} meld triplets",
            lookups.len(),
            melds.len()
        );

        BuildContext {
            lookups,
            melds,
            other_face_overrides: self.other_face_overrides.unwrap_or_default(),
            vocabulary: self.vocabulary,
            ..BuildContext::default()
        }
    }
}

fn table_from_map<V>(rows: Option<HashMap<String, V>>) -> LookupTable<String, V> {
    LookupTable::from(rows.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::make_test_face;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_optional_json_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result: Option<Vec<String>> =
            read_optional_json(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_optional_json_reports_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(RULINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Option<HashMap<String, Vec<Ruling>>>> = read_optional_json(&path);
        match result {
            Err(BuildError::Lookup { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected lookup error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_lookup_dir_empty_directory() {
        let dir = TempDir::new().unwrap();
        let files = load_lookup_dir(dir.path()).await.unwrap();

        assert!(files.rulings.is_none());
        assert!(files.melds.is_none());

        let ctx = files.into_context();
        assert_eq!(ctx.lookups.len(), 11);
        assert!(ctx.melds.is_empty());
        assert!(ctx.vocabulary.is_none());
    }

    #[tokio::test]
    async fn load_lookup_dir_binds_tables() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(RULINGS_FILE),
            r#"{"oracle-1": [{"date": "2020-01-01", "text": "Ruling text."}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(MELD_FILE),
            r#"[["Bruna, the Fading Light", "Gisela, the Broken Blade", "Brisela, Voice of Nightmares"]]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(VOCABULARY_FILE),
            r#"{"formats": ["vintage"], "platforms": ["paper"]}"#,
        )
        .unwrap();

        let ctx = load_lookup_dir(dir.path()).await.unwrap().into_context();
        assert_eq!(ctx.melds.len(), 1);
        assert_eq!(ctx.vocabulary.as_ref().map(|v| v.formats.len()), Some(1));

        let mut card = make_test_face("u1", "Opt", "XLN", "65");
        card.identifiers.scryfall_oracle_id = Some("oracle-1".to_string());
        let matched = ctx.lookups.iter().filter(|l| l.enrich(&mut card)).count();

        assert_eq!(matched, 1);
        assert_eq!(card.rulings.len(), 1);
        assert_eq!(card.rulings[0].text, "Ruling text.");
    }
}
