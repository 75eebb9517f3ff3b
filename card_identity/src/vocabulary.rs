//! Legality-format and game-platform vocabularies
//!
//! Discovery runs once over the whole snapshot and produces plain sets of
//! names; the join layer then projects each face onto them.

use crate::card::CardFace;
use mtg_common::Printing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Statuses that are published; "not_legal" is dropped
const PUBLISHED_STATUSES: &[&str] = &["legal", "restricted", "banned"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    #[serde(default)]
    pub formats: BTreeSet<String>,
    #[serde(default)]
    pub platforms: BTreeSet<String>,
}

impl Vocabulary {
    /// Collect every format and platform named anywhere in the snapshot
    pub fn discover(printings: &[Printing]) -> Self {
        let mut vocabulary = Self::default();
        for printing in printings {
            vocabulary
                .formats
                .extend(printing.legalities.keys().cloned());
            vocabulary.platforms.extend(printing.games.iter().cloned());
        }

        log::info!(
            "Discovered {} formats and {} platforms",
            vocabulary.formats.len(),
            vocabulary.platforms.len()
        );
        vocabulary
    }

    /// Fill `legalities` and `availability` from the face's provider data
    pub fn project(&self, card: &mut CardFace) {
        card.legalities = card
            .source_legalities
            .iter()
            .filter(|(format, _)| self.formats.contains(format.as_str()))
            .filter(|(_, status)| PUBLISHED_STATUSES.contains(&status.as_str()))
            .map(|(format, status)| (format.clone(), capitalize(status)))
            .collect();

        let mut availability: Vec<String> = card
            .source_games
            .iter()
            .filter(|game| self.platforms.contains(game.as_str()))
            .cloned()
            .collect();
        availability.sort();
        availability.dedup();
        card.availability = availability;
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
