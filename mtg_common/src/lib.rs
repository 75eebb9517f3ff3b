//! Shared MTG card data types.
//!
//! Record shapes for the Scryfall bulk snapshot and the Cardmarket product
//! catalog, plus the error type used when decoding them.

pub mod cardmarket;
pub mod error;
pub mod scryfall;

pub use cardmarket::{CatalogEntry, CatalogFile};
pub use error::{Error, Result};
pub use scryfall::{FaceData, Printing, RelatedPart};
