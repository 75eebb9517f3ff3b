//! Variations and the alternative flag
//!
//! Printings of the same card in the same set with the same printing key are
//! variations of each other, whatever language they were printed in. The
//! lowest collector number is canonical and the rest are alternatives.

use crate::card::CardFace;
use crate::context::BuildOptions;
use crate::utils::number_sort_key;
use std::collections::HashMap;

/// Never flagged, no matter how many times a set prints them
pub const BASIC_LANDS: &[&str] = &["Plains", "Island", "Swamp", "Mountain", "Forest"];

pub fn printing_key(card: &CardFace, options: &BuildOptions) -> String {
    let mut effects = card.frame_effects.clone();
    effects.sort();

    let mut key = format!(
        "{}|{}|{}|{}|{}",
        card.name,
        card.border_color,
        card.frame_version,
        effects.join(","),
        card.side.map(String::from).unwrap_or_default()
    );

    if options.keys_finishes(&card.set_code) {
        let mut finishes = card.finishes.clone();
        finishes.sort();
        key.push('|');
        key.push_str(&finishes.join(","));
    }
    key
}

pub fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS.contains(&name)
}

pub fn link_variations(cards: &mut [CardFace], options: &BuildOptions) {
    let mut groups: HashMap<(String, String), Vec<usize>> = HashMap::new();
    for (index, card) in cards.iter().enumerate() {
        groups
            .entry((card.set_code.clone(), printing_key(card, options)))
            .or_default()
            .push(index);
    }

    let mut alternatives = 0;
    for members in groups.values_mut() {
        members.sort_by(|&a, &b| {
            number_sort_key(&cards[a].number)
                .cmp(&number_sort_key(&cards[b].number))
                .then_with(|| cards[a].uuid.cmp(&cards[b].uuid))
        });

        let uuids: Vec<String> = members.iter().map(|&i| cards[i].uuid.clone()).collect();
        for (position, &index) in members.iter().enumerate() {
            let card = &mut cards[index];
            card.variations = uuids
                .iter()
                .filter(|u| **u != card.uuid && !card.other_face_ids.contains(u))
                .cloned()
                .collect();

            let canonical = position == 0;
            if !canonical && !card.variations.is_empty() && !is_basic_land(&card.name) {
                card.is_alternative = true;
                alternatives += 1;
            }
        }
    }

    for card in cards.iter_mut() {
        if card.name.starts_with("A-") {
            card.is_alternative = true;
        }
    }

    log::info!(
        "Variations: {} printing groups, {} alternatives",
        groups.len(),
        alternatives
    );
}
