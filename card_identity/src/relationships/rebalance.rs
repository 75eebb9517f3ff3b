//! Rebalanced / original printing links

use crate::card::CardFace;
use crate::context::BuildOptions;
use crate::utils::number_sort_key;
use std::collections::HashMap;

const REBALANCED_PREFIX: &str = "A-";

/// Name of the card a rebalanced card was derived from
///
/// The prefix is removed from every face segment, so `A-Front // A-Back`
/// becomes `Front // Back`.
pub fn original_name(name: &str) -> String {
    name.split(" // ")
        .map(|segment| segment.strip_prefix(REBALANCED_PREFIX).unwrap_or(segment))
        .collect::<Vec<_>>()
        .join(" // ")
}

pub fn link_rebalanced(cards: &mut [CardFace], options: &BuildOptions) {
    let mut originals: HashMap<(String, String), Vec<usize>> = HashMap::new();
    for (index, card) in cards.iter().enumerate() {
        if !card.is_rebalanced && card.language == options.canonical_language {
            originals
                .entry((card.set_code.clone(), card.name.clone()))
                .or_default()
                .push(index);
        }
    }

    let mut original_of: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut rebalanced_of: HashMap<usize, Vec<usize>> = HashMap::new();
    for (index, card) in cards.iter().enumerate() {
        if !card.is_rebalanced {
            continue;
        }
        let key = (card.set_code.clone(), original_name(&card.name));
        let Some(matches) = originals.get(&key) else {
            log::debug!("No original printing for {} in {}", card.name, card.set_code);
            continue;
        };

        for &original in matches {
            original_of.entry(index).or_default().push(original);
            rebalanced_of.entry(original).or_default().push(index);
        }
    }

    let linked = original_of.len();
    let updates: Vec<(usize, Vec<String>, bool)> = original_of
        .into_iter()
        .map(|(index, found)| (index, sorted_uuids(cards, found), true))
        .chain(
            rebalanced_of
                .into_iter()
                .map(|(index, found)| (index, sorted_uuids(cards, found), false)),
        )
        .collect();

    for (index, uuids, is_rebalanced) in updates {
        if is_rebalanced {
            cards[index].original_printings = uuids;
        } else {
            cards[index].rebalanced_printings = uuids;
        }
    }

    log::info!("Linked {} rebalanced faces to their originals", linked);
}

/// Uuids ordered by side, then collector number
fn sorted_uuids(cards: &[CardFace], mut indices: Vec<usize>) -> Vec<String> {
    indices.sort_by(|&a, &b| {
        let (a, b) = (&cards[a], &cards[b]);
        (a.side_or_default(), number_sort_key(&a.number), &a.uuid).cmp(&(
            b.side_or_default(),
            number_sort_key(&b.number),
            &b.uuid,
        ))
    });
    indices.dedup();
    indices.into_iter().map(|i| cards[i].uuid.clone()).collect()
}
