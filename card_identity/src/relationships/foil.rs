//! Foil / non-foil version links
//!
//! A few older sets list the foil and non-foil printing of a card as two
//! separate Scryfall records sharing an illustration. The first record seen
//! for a `(set, illustration)` pair is the anchor. A later record is linked
//! with it only when exactly one of the two is sold as non-foil, so a third
//! such occupant overwrites the anchor's earlier pointer.

use crate::card::CardFace;
use crate::context::BuildOptions;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub fn link_foil_versions(cards: &mut [CardFace], options: &BuildOptions) {
    let mut anchors: HashMap<(String, String), usize> = HashMap::new();
    let mut linked = 0;

    for index in 0..cards.len() {
        if !options.links_foils(&cards[index].set_code) {
            continue;
        }
        let Some(illustration) = cards[index].identifiers.scryfall_illustration_id.clone() else {
            continue;
        };

        let anchor = match anchors.entry((cards[index].set_code.clone(), illustration)) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                continue;
            }
            Entry::Occupied(slot) => *slot.get(),
        };

        let later_nonfoil = cards[index].has_finish("nonfoil");
        if cards[anchor].has_finish("nonfoil") == later_nonfoil {
            log::debug!(
                "{} #{} shares an illustration with #{} but not as a foil/non-foil pair",
                cards[index].set_code,
                cards[index].number,
                cards[anchor].number
            );
            continue;
        }

        let anchor_uuid = cards[anchor].uuid.clone();
        let later_uuid = cards[index].uuid.clone();
        if later_nonfoil {
            cards[anchor].identifiers.mtgjson_non_foil_version_id = Some(later_uuid);
            cards[index].identifiers.mtgjson_foil_version_id = Some(anchor_uuid);
        } else {
            cards[anchor].identifiers.mtgjson_foil_version_id = Some(later_uuid);
            cards[index].identifiers.mtgjson_non_foil_version_id = Some(anchor_uuid);
        }
        linked += 1;
    }

    log::info!("Linked {} foil/non-foil pairs", linked);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::make_test_face;

    fn make_unh(uuid: &str, number: &str, finishes: &[&str]) -> CardFace {
        let mut card = make_test_face(uuid, "Cheap Ass", "UNH", number);
        card.identifiers.scryfall_illustration_id = Some("I1".to_string());
        card.finishes = finishes.iter().map(|f| f.to_string()).collect();
        card
    }

    #[test]
    fn foil_and_nonfoil_point_at_each_other() {
        let mut cards = vec![
            make_unh("foil", "78★", &["foil"]),
            make_unh("nonfoil", "78", &["nonfoil", "foil"]),
        ];

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert_eq!(
            cards[0].identifiers.mtgjson_non_foil_version_id.as_deref(),
            Some("nonfoil")
        );
        assert_eq!(cards[1].identifiers.mtgjson_foil_version_id.as_deref(), Some("foil"));
        assert!(cards[0].identifiers.mtgjson_foil_version_id.is_none());
        assert!(cards[1].identifiers.mtgjson_non_foil_version_id.is_none());
    }

    #[test]
    fn nonfoil_anchor_links_the_other_way() {
        let mut cards = vec![
            make_unh("nonfoil", "78", &["nonfoil"]),
            make_unh("foil", "78★", &["foil"]),
        ];

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert_eq!(cards[0].identifiers.mtgjson_foil_version_id.as_deref(), Some("foil"));
        assert_eq!(
            cards[1].identifiers.mtgjson_non_foil_version_id.as_deref(),
            Some("nonfoil")
        );
    }

    #[test]
    fn third_occupant_overwrites_anchor() {
        let mut cards = vec![
            make_unh("foil", "78★", &["foil"]),
            make_unh("nonfoil", "78", &["nonfoil", "foil"]),
            make_unh("late", "78s", &["nonfoil"]),
        ];

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert_eq!(cards[0].identifiers.mtgjson_non_foil_version_id.as_deref(), Some("late"));
        assert_eq!(cards[1].identifiers.mtgjson_foil_version_id.as_deref(), Some("foil"));
        assert_eq!(cards[2].identifiers.mtgjson_foil_version_id.as_deref(), Some("foil"));
    }

    #[test]
    fn same_finish_kind_is_not_a_pair() {
        let mut cards = vec![
            make_unh("a", "78", &["nonfoil", "foil"]),
            make_unh("b", "78s", &["nonfoil", "foil"]),
            make_unh("c", "79★", &["foil"]),
            make_unh("d", "79s", &["foil"]),
        ];
        for card in &mut cards[2..] {
            card.identifiers.scryfall_illustration_id = Some("I2".to_string());
        }

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert!(cards.iter().all(|c| c.identifiers.mtgjson_foil_version_id.is_none()
            && c.identifiers.mtgjson_non_foil_version_id.is_none()));
    }

    #[test]
    fn mismatched_occupant_does_not_disturb_pair() {
        let mut cards = vec![
            make_unh("foil", "78★", &["foil"]),
            make_unh("nonfoil", "78", &["nonfoil"]),
            make_unh("foil-2", "78s", &["foil"]),
        ];

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert_eq!(
            cards[0].identifiers.mtgjson_non_foil_version_id.as_deref(),
            Some("nonfoil")
        );
        assert_eq!(cards[1].identifiers.mtgjson_foil_version_id.as_deref(), Some("foil"));
        assert!(cards[2].identifiers.mtgjson_non_foil_version_id.is_none());
    }

    #[test]
    fn other_sets_and_missing_illustrations_are_skipped() {
        let mut stx_a = make_unh("a", "1", &["foil"]);
        stx_a.set_code = "STX".to_string();
        let mut stx_b = make_unh("b", "2", &["nonfoil"]);
        stx_b.set_code = "STX".to_string();
        let mut bare = make_unh("c", "3", &["nonfoil"]);
        bare.identifiers.scryfall_illustration_id = None;
        let mut cards = vec![stx_a, stx_b, bare, make_unh("d", "4", &["foil"])];

        link_foil_versions(&mut cards, &BuildOptions::default());

        assert!(cards.iter().all(|c| c.identifiers.mtgjson_foil_version_id.is_none()
            && c.identifiers.mtgjson_non_foil_version_id.is_none()));
    }
}
