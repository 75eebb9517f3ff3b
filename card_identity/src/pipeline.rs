//! One full build: snapshot in, linked faces out

use crate::card::CardFace;
use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use crate::expand::expand;
use crate::identity::assign_identities;
use crate::join::join;
use crate::normalize::normalize;
use crate::relationships::link;
use crate::vocabulary::Vocabulary;
use mtg_common::Printing;
use std::borrow::Cow;

/// Run every stage over the snapshot
///
/// Fails only when the snapshot is empty or a printing has no Scryfall id;
/// every other defect degrades to a default on the affected face.
pub fn build(printings: &[Printing], ctx: &BuildContext) -> Result<Vec<CardFace>> {
    if printings.is_empty() {
        return Err(BuildError::NoPrintings);
    }
    log::info!("Building from {} printings", printings.len());

    let vocabulary = match &ctx.vocabulary {
        Some(vocabulary) => Cow::Borrowed(vocabulary),
        None => Cow::Owned(Vocabulary::discover(printings)),
    };

    let faces = expand(printings, &ctx.melds)?;
    let cards = normalize(&faces);
    let cards = join(cards, &ctx.lookups, &vocabulary);
    let cards = assign_identities(cards, &ctx.legacy_ids);
    let cards = link(cards, ctx);

    log::info!("Build complete: {} faces", cards.len());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtg_common::FaceData;

    #[test]
    fn empty_snapshot_is_fatal() {
        let result = build(&[], &BuildContext::new());
        assert!(matches!(result, Err(BuildError::NoPrintings)));
    }

    #[test]
    fn missing_provider_id_is_fatal() {
        let printing = Printing {
            name: "Opt".to_string(),
            ..Printing::default()
        };
        let result = build(&[printing], &BuildContext::new());
        assert!(matches!(result, Err(BuildError::MissingProviderId { .. })));
    }

    #[test]
    fn split_card_faces_link_each_other() {
        let printing = Printing {
            id: "S1".to_string(),
            name: "Fire // Ice".to_string(),
            set: "mh2".to_string(),
            collector_number: "290".to_string(),
            layout: "split".to_string(),
            card_faces: Some(vec![
                FaceData {
                    name: "Fire".to_string(),
                    ..FaceData::default()
                },
                FaceData {
                    name: "Ice".to_string(),
                    ..FaceData::default()
                },
            ]),
            ..Printing::default()
        };

        let cards = build(&[printing], &BuildContext::new()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].side, Some('a'));
        assert_eq!(cards[1].side, Some('b'));
        assert_eq!(cards[0].other_face_ids, vec![cards[1].uuid.clone()]);
        assert_eq!(cards[1].other_face_ids, vec![cards[0].uuid.clone()]);
    }
}
