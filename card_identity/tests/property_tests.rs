//! # Property-Based Tests
//!
//! Invariants that must hold for any snapshot: face counts, identity
//! stability, link sanity, foil pairing and the one-canonical-per-group rule.

use card_identity::relationships::printing_key;
use card_identity::{build, link, BuildContext, CardFace};
use mtg_common::{FaceData, Printing};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashMap;

const NAMES: &[&str] = &["Opt", "Shock", "Lightning Bolt", "Fire // Ice", "Delver of Secrets"];
const SETS: &[&str] = &["XLN", "M19", "UNH"];
const LANGS: &[&str] = &["en", "ja"];
const FINISHES: &[&[&str]] = &[&["nonfoil"], &["foil"], &["nonfoil", "foil"]];

/// (face count, name index, collector number, set index, showcase frame,
/// language index, finishes index)
type PrintingShape = (usize, usize, u32, usize, bool, usize, usize);

fn printing_shape() -> impl Strategy<Value = PrintingShape> {
    (
        0usize..4,
        0..NAMES.len(),
        1u32..40,
        0..SETS.len(),
        any::<bool>(),
        0..LANGS.len(),
        0..FINISHES.len(),
    )
}

fn make_printings(shapes: &[PrintingShape]) -> Vec<Printing> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, &(faces, name, number, set, showcase, lang, finishes))| Printing {
            id: format!("P{}", i),
            name: NAMES[name].to_string(),
            set: SETS[set].to_lowercase(),
            collector_number: number.to_string(),
            lang: LANGS[lang].to_string(),
            layout: if faces > 0 { "transform" } else { "normal" }.to_string(),
            card_faces: (faces > 0).then(|| {
                (0..faces)
                    .map(|f| FaceData {
                        name: format!("{} {}", NAMES[name], f),
                        ..FaceData::default()
                    })
                    .collect()
            }),
            finishes: FINISHES[finishes].iter().map(|f| f.to_string()).collect(),
            border_color: Some("black".to_string()),
            frame: Some("2015".to_string()),
            frame_effects: if showcase {
                vec!["showcase".to_string()]
            } else {
                Vec::new()
            },
            illustration_id: Some(format!("ill-{}-{}", name, number)),
            ..Printing::default()
        })
        .collect()
}

fn uuids(cards: &[CardFace]) -> Vec<String> {
    cards.iter().map(|c| c.uuid.clone()).collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every printing yields max(1, faces) records.
    #[test]
    fn face_count_matches_printings(shapes in vec(printing_shape(), 1..30)) {
        let printings = make_printings(&shapes);
        let cards = build(&printings, &BuildContext::new()).expect("build");

        let expected: usize = shapes.iter().map(|&(faces, ..)| faces.max(1)).sum();
        prop_assert_eq!(cards.len(), expected);
    }

    /// Building twice from the same input gives the same identities.
    #[test]
    fn identities_are_stable(shapes in vec(printing_shape(), 1..30)) {
        let printings = make_printings(&shapes);
        let ctx = BuildContext::new();

        let first = build(&printings, &ctx).expect("build");
        let second = build(&printings, &ctx).expect("build");

        prop_assert_eq!(uuids(&first), uuids(&second));
    }

    /// No face lists itself as another face.
    #[test]
    fn uuid_never_in_other_faces(shapes in vec(printing_shape(), 1..30)) {
        let cards = build(&make_printings(&shapes), &BuildContext::new()).expect("build");

        for card in &cards {
            prop_assert!(!card.other_face_ids.contains(&card.uuid));
            prop_assert!(!card.variations.contains(&card.uuid));
        }
    }

    /// Exactly one member of every (set, printing key) group is left
    /// unflagged, across languages.
    #[test]
    fn one_canonical_per_group(shapes in vec(printing_shape(), 1..40)) {
        let ctx = BuildContext::new();
        let cards = build(&make_printings(&shapes), &ctx).expect("build");

        let mut unflagged: HashMap<(String, String), usize> = HashMap::new();
        for card in &cards {
            let key = (card.set_code.clone(), printing_key(card, &ctx.options));
            let count = unflagged.entry(key).or_insert(0);
            if !card.is_alternative {
                *count += 1;
            }
        }

        for (key, count) in unflagged {
            prop_assert_eq!(count, 1, "group {:?}", key);
        }
    }

    /// Foil links only ever join a non-foil face with one that is not.
    #[test]
    fn foil_links_pair_nonfoil_with_foil(shapes in vec(printing_shape(), 1..40)) {
        let cards = build(&make_printings(&shapes), &BuildContext::new()).expect("build");
        let by_uuid: HashMap<&str, &CardFace> =
            cards.iter().map(|c| (c.uuid.as_str(), c)).collect();

        for card in &cards {
            if let Some(other) = &card.identifiers.mtgjson_non_foil_version_id {
                let other = by_uuid[other.as_str()];
                prop_assert!(other.has_finish("nonfoil"));
                prop_assert!(!card.has_finish("nonfoil"));
                prop_assert_eq!(&other.set_code, &card.set_code);
            }
            if let Some(other) = &card.identifiers.mtgjson_foil_version_id {
                let other = by_uuid[other.as_str()];
                prop_assert!(card.has_finish("nonfoil"));
                prop_assert!(!other.has_finish("nonfoil"));
                prop_assert_eq!(&other.set_code, &card.set_code);
            }
        }
    }

    /// Linking already-linked output changes nothing.
    #[test]
    fn relinking_is_idempotent(shapes in vec(printing_shape(), 1..30)) {
        let ctx = BuildContext::new();
        let cards = build(&make_printings(&shapes), &ctx).expect("build");

        let relinked = link(cards.clone(), &ctx);

        prop_assert_eq!(uuids(&cards), uuids(&relinked));
        prop_assert_eq!(cards, relinked);
    }
}
