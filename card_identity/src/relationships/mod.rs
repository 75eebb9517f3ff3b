//! Relationship engine
//!
//! Runs after every face has an identity. Each derivation sees the whole
//! batch, since variation, foil and rebalance groups span arbitrary positions
//! in the snapshot.

mod foil;
mod meld;
mod other_faces;
mod rebalance;
mod variations;

pub use foil::link_foil_versions;
pub use meld::attach_card_parts;
pub use other_faces::link_other_faces;
pub use rebalance::{link_rebalanced, original_name};
pub use variations::{is_basic_land, link_variations, printing_key, BASIC_LANDS};

use crate::card::CardFace;
use crate::context::BuildContext;

/// Derive every sibling link, in order
///
/// Derived fields are reset first, so linking a batch that was already
/// linked yields the same result.
pub fn link(mut cards: Vec<CardFace>, ctx: &BuildContext) -> Vec<CardFace> {
    for card in &mut cards {
        card.clear_links();
    }

    link_other_faces(&mut cards, &ctx.melds, &ctx.other_face_overrides);
    link_variations(&mut cards, &ctx.options);
    attach_card_parts(&mut cards, &ctx.melds);
    link_foil_versions(&mut cards, &ctx.options);
    link_rebalanced(&mut cards, &ctx.options);

    cards
}
