//! MusicBrainz JSON to metadata mapping for tagwright.
//!
//! A [`Mapper`] walks artist, release, release-group, recording, track,
//! medium, and work nodes from the MusicBrainz web service and writes the
//! fields it recognises into a [`Metadata`] record. Artist names are
//! translated through locale aliases, artist credits are assembled into
//! display and sort strings, and relationships are classified into
//! performer credits, named roles, work links, and URL-derived tags.
//!
//! Mapping is best effort: missing or malformed fields are skipped and
//! never reported as errors.
//!
//! [`Metadata`]: tagwright_core::Metadata

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod credit;
pub mod entity;
pub mod error;
pub mod genres;
pub mod mapper;
mod node;
pub mod relations;
pub mod release_info;
pub mod score;
pub mod translate;

pub use config::{Config, ScriptException, Settings};
pub use credit::{ArtistCredit, CreditTarget};
pub use entity::{EntityKind, MappedDocument};
pub use error::{MapError, MapResult};
pub use mapper::Mapper;
pub use relations::DjMixIndex;
pub use score::score;
pub use translate::ArtistName;
