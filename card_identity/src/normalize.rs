//! Field normalization
//!
//! Projects Scryfall field names onto the canonical `CardFace` schema. Face
//! fields win over card-level fields whenever the face defines them.

use crate::card::{CardFace, Identifiers};
use crate::expand::Face;
use crate::utils::language_name;

/// Supertypes recognised when splitting a type line
const SUPERTYPES: &[&str] = &["Basic", "Host", "Legendary", "Ongoing", "Snow", "World"];

/// Build canonical records for every face, in order
pub fn normalize(faces: &[Face<'_>]) -> Vec<CardFace> {
    let cards: Vec<CardFace> = faces.iter().map(normalize_face).collect();
    log::info!("Normalized {} faces", cards.len());
    cards
}

/// Build the canonical record for one face
pub fn normalize_face(face: &Face<'_>) -> CardFace {
    let printing = face.printing;
    let data = face.data;

    // Face value first, card-level value as fallback
    macro_rules! pick {
        ($field:ident) => {
            data.and_then(|d| d.$field.clone())
                .or_else(|| printing.$field.clone())
        };
    }

    let face_name = match data {
        Some(d) => Some(d.name.clone()),
        None if face.side.is_some() => Some(printing.name.clone()),
        None => None,
    };

    let type_line = pick!(type_line).unwrap_or_default();
    let (supertypes, types, subtypes) = parse_type_line(&type_line);

    let is_rebalanced =
        printing.name.starts_with("A-") || printing.promo_types.iter().any(|p| p == "rebalanced");

    CardFace {
        identifiers: Identifiers {
            scryfall_id: printing.id.clone(),
            scryfall_oracle_id: pick!(oracle_id),
            scryfall_illustration_id: pick!(illustration_id),
            ..Identifiers::default()
        },
        name: face
            .display_name
            .clone()
            .unwrap_or_else(|| printing.name.clone()),
        face_name,
        side: face.side,
        face_index: face.face_index,
        set_code: printing.set.to_uppercase(),
        number: printing.collector_number.clone(),
        language: language_name(&printing.lang),
        layout: printing.layout.clone(),
        mana_cost: pick!(mana_cost),
        type_line,
        supertypes,
        types,
        subtypes,
        text: pick!(oracle_text),
        power: pick!(power),
        toughness: pick!(toughness),
        loyalty: pick!(loyalty),
        colors: pick!(colors).unwrap_or_default(),
        flavor_text: pick!(flavor_text),
        artist: pick!(artist),
        rarity: printing.rarity.clone(),
        border_color: printing.border_color.clone().unwrap_or_default(),
        frame_version: printing.frame.clone().unwrap_or_default(),
        frame_effects: printing.frame_effects.clone(),
        finishes: printing.finishes.clone(),
        has_foil: printing.has_finish("foil") || printing.has_finish("etched"),
        has_non_foil: printing.has_finish("nonfoil"),
        promo_types: printing.promo_types.clone(),
        is_rebalanced,
        related_parts: printing.related_parts().to_vec(),
        source_legalities: printing.legalities.clone(),
        source_games: printing.games.clone(),
        ..CardFace::default()
    }
}

/// Split a type line into (supertypes, types, subtypes)
///
/// Planes keep their whole subtype phrase ("New Phyrexia") as one subtype.
pub fn parse_type_line(type_line: &str) -> (Vec<String>, Vec<String>, Vec<String>) {
    let (left, right) = match type_line.split_once('—') {
        Some((left, right)) => (left, Some(right)),
        None => (type_line, None),
    };

    let mut supertypes = Vec::new();
    let mut types = Vec::new();
    for word in left.split_whitespace() {
        if SUPERTYPES.contains(&word) {
            supertypes.push(word.to_string());
        } else {
            types.push(word.to_string());
        }
    }

    let subtypes = match right.map(str::trim) {
        Some("") | None => Vec::new(),
        Some(phrase) if types.iter().any(|t| t == "Plane") => vec![phrase.to_string()],
        Some(phrase) => phrase.split_whitespace().map(str::to_string).collect(),
    };

    (supertypes, types, subtypes)
}
