//! Face expansion
//!
//! Splits each printing into one `Face` per playable side. Faces borrow the
//! snapshot; nothing is copied until the normalizer builds owned records.

use crate::error::{BuildError, Result};
use crate::lookups::MeldTriplets;
use mtg_common::{FaceData, Printing};

/// Side letters defined by Scryfall's face ordering
const SIDE_LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// One (printing, face index) pair
#[derive(Debug, Clone)]
pub struct Face<'a> {
    pub printing: &'a Printing,
    /// Face overlay; `None` for single-faced and meld printings
    pub data: Option<&'a FaceData>,
    pub face_index: usize,
    pub side: Option<char>,
    /// Replacement display name, set for meld fronts
    pub display_name: Option<String>,
}

/// Side letter for a face position
///
/// Positions past `e` continue the alphabet so every face keeps a distinct
/// identity; past `z` the letter falls back to `a`.
pub fn side_for_index(index: usize) -> char {
    match SIDE_LETTERS.get(index) {
        Some(&letter) => letter,
        None if index < 26 => char::from(b'a' + index as u8),
        None => 'a',
    }
}

/// Expand printings into faces, preserving input order
///
/// Fails only when a printing has no Scryfall id.
pub fn expand<'a>(printings: &'a [Printing], melds: &MeldTriplets) -> Result<Vec<Face<'a>>> {
    let mut faces = Vec::with_capacity(printings.len());

    for (index, printing) in printings.iter().enumerate() {
        if printing.id.trim().is_empty() {
            return Err(BuildError::MissingProviderId {
                index,
                name: printing.name.clone(),
            });
        }

        let face_data = printing.faces();
        if face_data.is_empty() {
            faces.push(single_face(printing, melds));
            continue;
        }

        if face_data.len() > SIDE_LETTERS.len() {
            log::warn!(
                "{} ({}) has {} faces; sides past '{}' use the extended alphabet",
                printing.name,
                printing.id,
                face_data.len(),
                SIDE_LETTERS[SIDE_LETTERS.len() - 1]
            );
        }

        for (face_index, data) in face_data.iter().enumerate() {
            faces.push(Face {
                printing,
                data: Some(data),
                face_index,
                side: Some(side_for_index(face_index)),
                display_name: None,
            });
        }
    }

    log::info!(
        "Expanded {} printings into {} faces",
        printings.len(),
        faces.len()
    );
    Ok(faces)
}

fn single_face<'a>(printing: &'a Printing, melds: &MeldTriplets) -> Face<'a> {
    let mut face = Face {
        printing,
        data: None,
        face_index: 0,
        side: None,
        display_name: None,
    };

    if printing.layout == "meld" {
        face.side = melds.side_for(&printing.name);
        face.display_name = melds
            .result_for(&printing.name)
            .map(|result| format!("{} // {}", printing.name, result));
        if face.side.is_none() {
            log::debug!(
                "Meld printing {} ({}) is not in the triplet table",
                printing.name,
                printing.id
            );
        }
    }

    face
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
