use serde_json::Value;
use tagwright_core::text::format_time;
use tagwright_core::{CreditedEntity, Metadata};

use super::renamed;
use crate::credit::CreditTarget;
use crate::mapper::Mapper;
use crate::node::{entries, is_skippable, str_field, tag_values};
use crate::relations::DjMixIndex;

const TRACK_TO_METADATA: &[(&str, &str)] = &[
    ("number", "~musicbrainz_tracknumber"),
    ("position", "tracknumber"),
    ("title", "title"),
];

enum TrackField {
    Renamed(&'static str),
    Length,
    ArtistCredit,
    Unhandled,
}

impl TrackField {
    fn classify(key: &str) -> Self {
        if let Some(tag) = renamed(TRACK_TO_METADATA, key) {
            return Self::Renamed(tag);
        }
        match key {
            "length" => Self::Length,
            "artist-credit" => Self::ArtistCredit,
            // The nested recording is mapped before the track's own fields.
            _ => Self::Unhandled,
        }
    }
}

impl Mapper {
    /// Map a track node.
    ///
    /// The track's recording is mapped first; the track's own title,
    /// position, length, and artist credit then override the recording's.
    pub fn track_to_metadata(
        &self,
        node: &Value,
        m: &mut Metadata,
        track: Option<&mut CreditedEntity>,
    ) -> DjMixIndex {
        let dj_mix = match node.get("recording").filter(|r| r.is_object()) {
            Some(recording) => self.recording_to_metadata(recording, m, track),
            None => DjMixIndex::default(),
        };
        if let Some(id) = str_field(node, "id") {
            m.add_unique("musicbrainz_trackid", id);
        }

        for (key, value) in entries(node) {
            if is_skippable(value) {
                continue;
            }
            match TrackField::classify(key) {
                TrackField::Renamed(tag) => m.set(tag, tag_values(value)),
                TrackField::Length => {
                    if let Some(length) = value.as_u64().filter(|l| *l > 0) {
                        m.set_length(length);
                    }
                }
                TrackField::ArtistCredit => {
                    let credits = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    self.artist_credit_to_metadata(credits, m, CreditTarget::Track);
                }
                TrackField::Unhandled => {}
            }
        }

        if m.length() > 0 {
            m.set_one("~length", format_time(m.length()));
        }
        dj_mix
    }
}
