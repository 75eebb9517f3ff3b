//! Identity assignment
//!
//! `uuid` is UUIDv5 over the DNS namespace of `scryfallId + side`, unless the
//! legacy cache already recorded an identity for that pair. `mtgjsonV4Id` is
//! the older recipe kept for consumers of the v4 format.

use crate::card::CardFace;
use crate::legacy_cache::LegacyIdCache;
use uuid::Uuid;

/// Types that make a face hash with the token recipe
const TOKEN_LIKE_TYPES: &[&str] = &["Token", "Card"];

/// Name-based UUIDv5 in the DNS namespace
pub fn uuid_v5(name: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes()).to_string()
}

/// Hash-derived identity of a face, ignoring the legacy cache
pub fn face_uuid(scryfall_id: &str, side: Option<char>) -> String {
    let mut source = String::with_capacity(scryfall_id.len() + 1);
    source.push_str(scryfall_id);
    source.push(side.unwrap_or('a'));
    uuid_v5(&source)
}

/// Legacy v4 identity
pub fn v4_id(card: &CardFace) -> String {
    let scryfall_id = &card.identifiers.scryfall_id;

    let source = if card
        .types
        .iter()
        .any(|t| TOKEN_LIKE_TYPES.contains(&t.as_str()))
    {
        let set_tail: String = card.set_code.chars().skip(1).collect();
        format!(
            "{}{}{}{}{}{}{}",
            card.name,
            card.colors.concat(),
            card.power.as_deref().unwrap_or(""),
            card.toughness.as_deref().unwrap_or(""),
            card.side.map(String::from).unwrap_or_default(),
            set_tail.to_uppercase(),
            scryfall_id
        )
    } else {
        format!("sf{}{}", scryfall_id, card.printed_face_name())
    };

    uuid_v5(&source)
}

/// Give every face its `uuid` and `mtgjsonV4Id`
pub fn assign_identities(mut cards: Vec<CardFace>, cache: &LegacyIdCache) -> Vec<CardFace> {
    let mut cached = 0;
    for card in &mut cards {
        let side = card.side_or_default();
        card.uuid = match cache.get(&card.identifiers.scryfall_id, side) {
            Some(uuid) => {
                cached += 1;
                uuid.to_string()
            }
            None => face_uuid(&card.identifiers.scryfall_id, card.side),
        };
        card.identifiers.mtgjson_v4_id = v4_id(card);
    }

    log::info!(
        "Assigned identities to {} faces ({} from legacy cache)",
        cards.len(),
        cached
    );
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::make_test_face;

    #[test]
    fn uuid_v5_matches_reference_value() {
        // RFC 4122 appendix example: uuid5(NAMESPACE_DNS, "python.org")
        assert_eq!(uuid_v5("python.org"), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    }

    #[test]
    fn face_uuid_defaults_side_to_a() {
        assert_eq!(face_uuid("S1", None), uuid_v5("S1a"));
        assert_eq!(face_uuid("S1", Some('a')), uuid_v5("S1a"));
        assert_eq!(face_uuid("S1", Some('b')), uuid_v5("S1b"));
        assert_ne!(face_uuid("S1", Some('a')), face_uuid("S1", Some('b')));
    }

    #[test]
    fn v4_id_card_recipe() {
        let mut card = make_test_face("", "Fire // Ice", "MH2", "290");
        card.identifiers.scryfall_id = "S1".to_string();
        card.face_name = Some("Fire".to_string());
        card.types = vec!["Instant".to_string()];

        assert_eq!(v4_id(&card), uuid_v5("sfS1Fire"));
    }

    #[test]
    fn v4_id_token_recipe() {
        let mut card = make_test_face("", "Goblin", "TM10", "1");
        card.identifiers.scryfall_id = "T1".to_string();
        card.types = vec!["Token".to_string(), "Creature".to_string()];
        card.colors = vec!["R".to_string()];
        card.power = Some("1".to_string());
        card.toughness = Some("1".to_string());

        assert_eq!(v4_id(&card), uuid_v5("GoblinR11M10T1"));

        let mut dfc = make_test_face("", "Human // Wolf", "TSOI", "1");
        dfc.face_name = Some("Human".to_string());
        dfc.side = Some('a');
        dfc.identifiers.scryfall_id = "T1".to_string();
        dfc.types = vec!["Token".to_string(), "Creature".to_string()];
        dfc.colors = vec!["W".to_string()];
        dfc.power = Some("1".to_string());
        dfc.toughness = Some("1".to_string());

        assert_eq!(v4_id(&dfc), uuid_v5("Human // WolfW11aSOIT1"));
    }

    #[test]
    fn assign_prefers_legacy_cache() {
        let mut cache = LegacyIdCache::default();
        cache.insert("S1", 'a', "legacy-uuid");

        let mut front = make_test_face("", "Fire // Ice", "MH2", "290");
        front.identifiers.scryfall_id = "S1".to_string();
        front.side = Some('a');
        let mut back = front.clone();
        back.side = Some('b');

        let cards = assign_identities(vec![front, back], &cache);
        assert_eq!(cards[0].uuid, "legacy-uuid");
        assert_eq!(cards[1].uuid, face_uuid("S1", Some('b')));
        assert!(!cards[0].identifiers.mtgjson_v4_id.is_empty());
    }

    #[test]
    fn single_faced_uses_side_a_cache_entry() {
        let mut cache = LegacyIdCache::default();
        cache.insert("S2", 'a', "legacy-single");

        let mut card = make_test_face("", "Opt", "XLN", "65");
        card.identifiers.scryfall_id = "S2".to_string();

        let cards = assign_identities(vec![card], &cache);
        assert_eq!(cards[0].uuid, "legacy-single");
    }
}
