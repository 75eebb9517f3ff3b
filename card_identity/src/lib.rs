//! Card Identity - stable per-face identities for MTG printings
//!
//! Expands a Scryfall snapshot into one record per card face, gives every face
//! a deterministic UUID (honouring identities published by earlier builds),
//! joins auxiliary lookup tables and links each face to its siblings.

pub mod card;
pub mod context;
pub mod error;
pub mod expand;
pub mod identity;
pub mod join;
pub mod legacy_cache;
pub mod lookups;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod relationships;
pub mod utils;
pub mod vocabulary;

pub use card::{CardFace, ForeignData, Identifiers, RelatedCards, Ruling};
pub use context::{BuildContext, BuildOptions, CANONICAL_LANGUAGE};
pub use error::{BuildError, Error, Result};
pub use identity::{assign_identities, face_uuid, uuid_v5, v4_id};
pub use legacy_cache::{
    get_legacy_id_count, import_cache, init_schema, load_cache, record_identities, LegacyIdCache,
};
pub use lookups::{load_lookup_dir, FaceLookup, LookupFiles, LookupTable, Lookups, MeldTriplets};
pub use output::{write_json, Envelope};
pub use pipeline::build;
pub use relationships::link;
pub use vocabulary::Vocabulary;
