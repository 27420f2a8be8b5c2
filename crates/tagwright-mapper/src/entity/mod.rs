//! Per-entity field mappers.
//!
//! Each entity walks the keys of its node and routes them through a closed
//! field classification: a rename table covers plain scalar fields, a few
//! fields get dedicated handling, and every other key is explicitly
//! unhandled. Falsy values are skipped, except numeric zero.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tagwright_core::{CreditedEntity, Metadata};

use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::relations::DjMixIndex;
use crate::release_info::media_formats;
use crate::node::array_field;

mod artist;
mod medium;
mod recording;
mod release;
mod release_group;
mod track;
mod work;

pub use artist::artist_to_metadata;
pub use medium::medium_to_metadata;
pub use release_group::release_group_to_metadata;

/// Look up `key` in a rename table.
fn renamed(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(field, _)| *field == key)
        .map(|(_, tag)| *tag)
}

/// The kinds of document the mapper accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Release,
    ReleaseGroup,
    Recording,
    Track,
    Medium,
    Work,
}

const ENTITY_NAMES: &[(EntityKind, &str)] = &[
    (EntityKind::Artist, "artist"),
    (EntityKind::Release, "release"),
    (EntityKind::ReleaseGroup, "release-group"),
    (EntityKind::Recording, "recording"),
    (EntityKind::Track, "track"),
    (EntityKind::Medium, "medium"),
    (EntityKind::Work, "work"),
];

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        ENTITY_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }

    /// All kinds, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        ENTITY_NAMES.iter().map(|(kind, _)| *kind)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        ENTITY_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(&wanted))
            .map(|(kind, _)| *kind)
            .ok_or_else(|| MapError::UnknownEntity(s.to_string()))
    }
}

/// Everything produced by mapping one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappedDocument {
    pub metadata: Metadata,
    /// DJ-mix credits by medium, from `mix-DJ` relations.
    pub dj_mix: DjMixIndex,
    /// Genres of the track, album, or release group, with per-artist
    /// genres for credited artists.
    pub genres: CreditedEntity,
}

impl Mapper {
    /// Map a complete document of the given kind.
    ///
    /// # Errors
    /// Returns [`MapError::NotAnObject`] when `node` is not a JSON object.
    pub fn map_document(&self, kind: EntityKind, node: &Value) -> MapResult<MappedDocument> {
        if !node.is_object() {
            return Err(MapError::NotAnObject {
                entity: kind.as_str(),
            });
        }

        let mut doc = MappedDocument::default();
        let m = &mut doc.metadata;
        match kind {
            EntityKind::Artist => artist_to_metadata(node, m),
            EntityKind::Release => {
                doc.dj_mix = self.release_to_metadata(node, m, Some(&mut doc.genres));
                let media = array_field(node, "media");
                if !media.is_empty() {
                    m.set_one("media", media_formats(media));
                }
            }
            EntityKind::ReleaseGroup => {
                release_group_to_metadata(node, m, Some(&mut doc.genres));
            }
            EntityKind::Recording => {
                doc.dj_mix = self.recording_to_metadata(node, m, Some(&mut doc.genres));
            }
            EntityKind::Track => {
                doc.dj_mix = self.track_to_metadata(node, m, Some(&mut doc.genres));
            }
            EntityKind::Medium => medium_to_metadata(node, m),
            EntityKind::Work => doc.dj_mix = self.work_to_metadata(node, m),
        }
        log::debug!(
            "Mapped {} document into {} tags",
            kind,
            doc.metadata.len()
        );
        Ok(doc)
    }

    /// Parse JSON text and map it as a document of the given kind.
    pub fn map_json(&self, kind: EntityKind, json: &str) -> MapResult<MappedDocument> {
        let node: Value = serde_json::from_str(json)?;
        self.map_document(kind, &node)
    }
}
