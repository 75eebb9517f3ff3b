//! Table bindings: which key each lookup uses and which field it fills

use super::{
    face_name_key, name_key, oracle_key, provider_key, set_number_key, KeyKind, KeyedLookup,
    LookupTable, ProviderKey, SetNumberKey,
};
use crate::card::{CardFace, ForeignData, RelatedCards, Ruling};
use serde::Deserialize;
use std::collections::BTreeMap;

/// EDHREC popularity data for one oracle id
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Popularity {
    #[serde(default)]
    pub edhrec_rank: Option<u32>,
    #[serde(default)]
    pub edhrec_saltiness: Option<f64>,
}

/// Identifier row keyed by Scryfall id and side
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderIdsRow {
    pub scryfall_id: String,
    #[serde(default)]
    pub side: Option<char>,
    pub identifiers: BTreeMap<String, String>,
}

/// Sealed products a face can be opened from
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedRow {
    pub scryfall_id: String,
    #[serde(default)]
    pub side: Option<char>,
    pub products: Vec<String>,
}

/// Row keyed by set code and collector number
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNumberRow<T> {
    pub set_code: String,
    pub number: String,
    pub value: T,
}

impl ProviderIdsRow {
    pub fn into_entry(self) -> (ProviderKey, BTreeMap<String, String>) {
        (ProviderKey::new(&self.scryfall_id, self.side), self.identifiers)
    }
}

impl SealedRow {
    pub fn into_entry(self) -> (ProviderKey, Vec<String>) {
        (ProviderKey::new(&self.scryfall_id, self.side), self.products)
    }
}

impl<T> SetNumberRow<T> {
    pub fn into_entry(self) -> (SetNumberKey, T) {
        (SetNumberKey::new(&self.set_code, &self.number), self.value)
    }
}

pub fn rulings(table: LookupTable<String, Vec<Ruling>>) -> KeyedLookup<String, Vec<Ruling>> {
    KeyedLookup::new("rulings", KeyKind::OracleId, table, oracle_key, |rows, card| {
        card.rulings = rows.clone();
    })
}

/// Set codes every printing of an oracle card appears in
pub fn printings_index(
    table: LookupTable<String, Vec<String>>,
) -> KeyedLookup<String, Vec<String>> {
    KeyedLookup::new("printings", KeyKind::OracleId, table, oracle_key, |sets, card| {
        let mut sets = sets.clone();
        sets.sort();
        sets.dedup();
        card.printings = sets;
    })
}

pub fn popularity(table: LookupTable<String, Popularity>) -> KeyedLookup<String, Popularity> {
    KeyedLookup::new("popularity", KeyKind::OracleId, table, oracle_key, |row, card| {
        card.edhrec_rank = row.edhrec_rank;
        card.edhrec_saltiness = row.edhrec_saltiness;
    })
}

/// Marketplace and store ids (TCGplayer, Card Kingdom, ...)
pub fn store_ids(
    table: LookupTable<ProviderKey, BTreeMap<String, String>>,
) -> KeyedLookup<ProviderKey, BTreeMap<String, String>> {
    KeyedLookup::new(
        "store ids",
        KeyKind::ProviderSide,
        table,
        provider_key,
        merge_identifiers,
    )
}

/// Digital-platform ids from the rosetta stone export
pub fn rosetta_ids(
    table: LookupTable<ProviderKey, BTreeMap<String, String>>,
) -> KeyedLookup<ProviderKey, BTreeMap<String, String>> {
    KeyedLookup::new(
        "rosetta stone",
        KeyKind::ProviderSide,
        table,
        provider_key,
        merge_identifiers,
    )
}

fn merge_identifiers(ids: &BTreeMap<String, String>, card: &mut CardFace) {
    for (field, value) in ids {
        card.identifiers
            .extra
            .entry(field.clone())
            .or_insert_with(|| value.clone());
    }
}

pub fn sealed_products(
    table: LookupTable<ProviderKey, Vec<String>>,
) -> KeyedLookup<ProviderKey, Vec<String>> {
    KeyedLookup::new(
        "sealed products",
        KeyKind::ProviderSide,
        table,
        provider_key,
        |products, card| {
            card.source_products = products.clone();
        },
    )
}

/// Localized printings of the same set and number
pub fn foreign_data(
    table: LookupTable<SetNumberKey, Vec<ForeignData>>,
) -> KeyedLookup<SetNumberKey, Vec<ForeignData>> {
    KeyedLookup::new(
        "foreign data",
        KeyKind::SetNumber,
        table,
        set_number_key,
        |rows, card| {
            // Multi-faced printings keep only the entries for this face
            let face = card.face_name.clone();
            card.foreign_data = rows
                .iter()
                .filter(|row| match (&face, &row.face_name) {
                    (Some(_), None) | (None, _) => true,
                    (Some(ours), Some(theirs)) => ours == theirs,
                })
                .cloned()
                .collect();
        },
    )
}

/// Signature and Secret Lair drop subset names
pub fn subsets(
    table: LookupTable<SetNumberKey, Vec<String>>,
) -> KeyedLookup<SetNumberKey, Vec<String>> {
    KeyedLookup::new(
        "subsets",
        KeyKind::SetNumber,
        table,
        set_number_key,
        |names, card| {
            card.subsets = names.clone();
        },
    )
}

/// Spellbook cards related to an Alchemy card, by card name
pub fn spellbook(table: LookupTable<String, Vec<String>>) -> KeyedLookup<String, Vec<String>> {
    KeyedLookup::new("spellbook", KeyKind::Name, table, name_key, |names, card| {
        card.related_cards = Some(RelatedCards {
            spellbook: names.clone(),
        });
    })
}

/// Printed-name overrides for faces whose printed name differs from the oracle name
pub fn face_overrides(table: LookupTable<String, String>) -> KeyedLookup<String, String> {
    KeyedLookup::new(
        "face overrides",
        KeyKind::Name,
        table,
        face_name_key,
        |printed, card| {
            card.printed_name = Some(printed.clone());
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::make_test_face;
    use crate::lookups::FaceLookup;

    #[test]
    fn store_ids_merge_into_identifiers() {
        let row: ProviderIdsRow = serde_json::from_str(
            r#"{"scryfallId": "S1", "side": "b", "identifiers": {"tcgplayerProductId": "77"}}"#,
        )
        .unwrap();
        let table: LookupTable<_, _> = vec![row.into_entry()].into_iter().collect();
        let lookup = store_ids(table);

        let mut front = make_test_face("u1", "Fire // Ice", "MH2", "290");
        front.identifiers.scryfall_id = "S1".to_string();
        front.side = Some('a');
        let mut back = front.clone();
        back.side = Some('b');

        assert!(!lookup.enrich(&mut front));
        assert!(lookup.enrich(&mut back));
        assert!(front.identifiers.extra.is_empty());
        assert_eq!(
            back.identifiers.extra.get("tcgplayerProductId").map(String::as_str),
            Some("77")
        );
    }

    #[test]
    fn single_faced_matches_side_a_rows() {
        let row: SealedRow = serde_json::from_str(
            r#"{"scryfallId": "S2", "products": ["p-1", "p-2"]}"#,
        )
        .unwrap();
        let table: LookupTable<_, _> = vec![row.into_entry()].into_iter().collect();
        let lookup = sealed_products(table);

        let mut card = make_test_face("u1", "Opt", "XLN", "65");
        card.identifiers.scryfall_id = "S2".to_string();

        assert!(lookup.enrich(&mut card));
        assert_eq!(card.source_products, vec!["p-1", "p-2"]);
    }

    #[test]
    fn foreign_data_filters_by_face() {
        let rows = vec![
            ForeignData {
                language: "German".to_string(),
                name: "Feuer // Eis".to_string(),
                face_name: Some("Fire".to_string()),
                ..ForeignData::default()
            },
            ForeignData {
                language: "German".to_string(),
                name: "Feuer // Eis".to_string(),
                face_name: Some("Ice".to_string()),
                ..ForeignData::default()
            },
        ];
        let table: LookupTable<_, _> = vec![(SetNumberKey::new("mh2", "290"), rows)]
            .into_iter()
            .collect();
        let lookup = foreign_data(table);

        let mut card = make_test_face("u1", "Fire // Ice", "MH2", "290");
        card.face_name = Some("Ice".to_string());

        assert!(lookup.enrich(&mut card));
        assert_eq!(card.foreign_data.len(), 1);
        assert_eq!(card.foreign_data[0].face_name.as_deref(), Some("Ice"));
    }

    #[test]
    fn popularity_sets_rank_and_saltiness() {
        let table: LookupTable<_, _> = vec![(
            "oracle-1".to_string(),
            Popularity {
                edhrec_rank: Some(12),
                edhrec_saltiness: Some(1.5),
            },
        )]
        .into_iter()
        .collect();
        let lookup = popularity(table);

        let mut card = make_test_face("u1", "Opt", "XLN", "65");
        card.identifiers.scryfall_oracle_id = Some("oracle-1".to_string());

        assert!(lookup.enrich(&mut card));
        assert_eq!(card.edhrec_rank, Some(12));
        assert_eq!(card.edhrec_saltiness, Some(1.5));
    }

    #[test]
    fn face_overrides_match_printed_face_name() {
        let table: LookupTable<_, _> =
            vec![("Ice".to_string(), "Glace".to_string())].into_iter().collect();
        let lookup = face_overrides(table);

        let mut card = make_test_face("u1", "Fire // Ice", "MH2", "290");
        card.face_name = Some("Ice".to_string());

        assert!(lookup.enrich(&mut card));
        assert_eq!(card.printed_name.as_deref(), Some("Glace"));
    }

    #[test]
    fn set_number_row_uses_value_field() {
        let row: SetNumberRow<Vec<String>> = serde_json::from_str(
            r#"{"setCode": "sld", "number": "1", "value": ["Secret Lair x Example"]}"#,
        )
        .unwrap();
        let (key, value) = row.into_entry();
        assert_eq!(key, SetNumberKey::new("SLD", "1"));
        assert_eq!(value, vec!["Secret Lair x Example"]);
    }
}
