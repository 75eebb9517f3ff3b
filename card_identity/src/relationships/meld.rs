//! Meld card parts

use crate::card::CardFace;
use crate::lookups::MeldTriplets;

/// Attach `[front, front, result]` to every meld face found in the triplet table
pub fn attach_card_parts(cards: &mut [CardFace], melds: &MeldTriplets) {
    let mut unresolved = 0;
    for card in cards.iter_mut().filter(|c| c.layout == "meld") {
        card.card_parts = melds
            .triplet_for(card.printed_face_name())
            .map(|triplet| triplet.to_vec());

        if card.card_parts.is_none() {
            log::debug!(
                "Meld {} ({} #{}) has no triplet, cardParts left empty",
                card.printed_face_name(),
                card.set_code,
                card.number
            );
            unresolved += 1;
        }
    }

    if unresolved > 0 {
        log::info!("{} meld faces without a known triplet", unresolved);
    }
}
