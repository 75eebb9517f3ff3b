//! Lookup join layer
//!
//! Applies every registered table to every face, then projects legalities
//! and availability onto the build vocabulary.

use crate::card::CardFace;
use crate::lookups::Lookups;
use crate::vocabulary::Vocabulary;

/// Attach zero-or-one row from each table to each face
pub fn join(mut cards: Vec<CardFace>, lookups: &Lookups, vocabulary: &Vocabulary) -> Vec<CardFace> {
    let mut hits = vec![0usize; lookups.len()];

    for card in &mut cards {
        for (index, lookup) in lookups.iter().enumerate() {
            if lookup.enrich(card) {
                hits[index] += 1;
            }
        }
        vocabulary.project(card);
    }

    for (lookup, count) in lookups.iter().zip(&hits) {
        log::info!(
            "Joined {}: {}/{} faces matched by {}",
            lookup.label(),
            count,
            cards.len(),
            lookup.key_kind()
        );
    }

    cards
}
