//! Other-face links
//!
//! Faces of one printing share a Scryfall id. Meld cards do not, so a second
//! pass links triplet members printed in the same set by name.

use crate::card::CardFace;
use crate::lookups::MeldTriplets;
use crate::utils::numeric_number;
use std::collections::HashMap;

pub fn link_other_faces(
    cards: &mut [CardFace],
    melds: &MeldTriplets,
    overrides: &HashMap<String, Vec<String>>,
) {
    link_printing_faces(cards);
    if !melds.is_empty() {
        link_meld_faces(cards, melds);
    }

    let mut overridden = 0;
    let mut suppressed = 0;
    for card in cards.iter_mut() {
        if let Some(links) = overrides.get(&card.uuid) {
            card.other_face_ids = links.iter().filter(|u| **u != card.uuid).cloned().collect();
            overridden += 1;
        } else if card.is_token() && !card.related_parts.is_empty() && !card.other_face_ids.is_empty() {
            card.other_face_ids.clear();
            suppressed += 1;
        }
    }

    log::debug!(
        "Other-face links: {} overridden, {} suppressed on tokens",
        overridden,
        suppressed
    );
}

/// Link faces sharing a Scryfall id, in side order
fn link_printing_faces(cards: &mut [CardFace]) {
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, card) in cards.iter().enumerate() {
        groups
            .entry(card.identifiers.scryfall_id.clone())
            .or_default()
            .push(index);
    }

    for members in groups.values_mut() {
        if members.len() < 2 {
            continue;
        }
        members.sort_by_key(|&index| cards[index].face_index);

        let uuids: Vec<String> = members.iter().map(|&i| cards[i].uuid.clone()).collect();
        for &index in members.iter() {
            let own = cards[index].uuid.clone();
            cards[index].other_face_ids = uuids.iter().filter(|u| **u != own).cloned().collect();
        }
    }
}

/// Link meld fronts to their result and the result to both fronts
fn link_meld_faces(cards: &mut [CardFace], melds: &MeldTriplets) {
    let mut by_set_name: HashMap<(String, String), Vec<usize>> = HashMap::new();
    for (index, card) in cards.iter().enumerate() {
        if melds.role_of(card.printed_face_name()).is_some() {
            by_set_name
                .entry((card.set_code.clone(), card.printed_face_name().to_string()))
                .or_default()
                .push(index);
        }
    }

    let mut links: Vec<(usize, Vec<String>)> = Vec::new();
    for (index, card) in cards.iter().enumerate() {
        if card.layout != "meld" {
            continue;
        }

        let mut linked = Vec::new();
        for partner in melds.partners_of(card.printed_face_name()) {
            let Some(candidates) = by_set_name.get(&(card.set_code.clone(), partner.to_string()))
            else {
                log::debug!("No {} printed in {} for meld {}", partner, card.set_code, card.name);
                continue;
            };

            for candidate in nearest_candidates(cards, card, candidates) {
                let uuid = &cards[candidate].uuid;
                if *uuid != card.uuid && !linked.contains(uuid) {
                    linked.push(uuid.clone());
                }
            }
        }

        if !linked.is_empty() {
            links.push((index, linked));
        }
    }

    for (index, linked) in links {
        for uuid in linked {
            if !cards[index].other_face_ids.contains(&uuid) {
                cards[index].other_face_ids.push(uuid);
            }
        }
    }
}

/// Candidates whose collector number is within 1 of the card's, or all of them
fn nearest_candidates(cards: &[CardFace], card: &CardFace, candidates: &[usize]) -> Vec<usize> {
    let Some(number) = numeric_number(&card.number) else {
        return candidates.to_vec();
    };

    let close: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&candidate| {
            numeric_number(&cards[candidate].number)
                .map(|other| other.abs_diff(number) <= 1)
                .unwrap_or(false)
        })
        .collect();

    if close.is_empty() {
        candidates.to_vec()
    } else {
        close
    }
}
