use serde_json::Value;
use tagwright_core::text::format_time;
use tagwright_core::{CreditedEntity, Metadata};

use super::renamed;
use crate::credit::CreditTarget;
use crate::genres::add_genres_from_node;
use crate::mapper::Mapper;
use crate::node::{entries, is_skippable, is_truthy, str_field, tag_values};
use crate::relations::DjMixIndex;

const RECORDING_TO_METADATA: &[(&str, &str)] = &[
    ("disambiguation", "~recordingcomment"),
    ("first-release-date", "~recording_firstreleasedate"),
    ("title", "title"),
];

/// ISO 639-3 code for "no linguistic content".
const NO_LINGUISTIC_CONTENT: &str = "zxx";

enum RecordingField {
    Renamed(&'static str),
    UserRating,
    Length,
    ArtistCredit,
    Relations,
    Isrcs,
    Video,
    Unhandled,
}

impl RecordingField {
    fn classify(key: &str) -> Self {
        if let Some(tag) = renamed(RECORDING_TO_METADATA, key) {
            return Self::Renamed(tag);
        }
        match key {
            "user-rating" => Self::UserRating,
            "length" => Self::Length,
            "artist-credit" => Self::ArtistCredit,
            "relations" => Self::Relations,
            "isrcs" => Self::Isrcs,
            "video" => Self::Video,
            _ => Self::Unhandled,
        }
    }
}

impl Mapper {
    /// Map a recording node.
    ///
    /// When a `track` is given, the recording's genres are added to it and
    /// each credited artist is appended to it with that artist's genres.
    pub fn recording_to_metadata(
        &self,
        node: &Value,
        m: &mut Metadata,
        mut track: Option<&mut CreditedEntity>,
    ) -> DjMixIndex {
        let mut dj_mix = DjMixIndex::default();
        m.set_length(0);
        if let Some(id) = str_field(node, "id") {
            m.add_unique("musicbrainz_recordingid", id);
        }

        for (key, value) in entries(node) {
            if is_skippable(value) {
                continue;
            }
            match RecordingField::classify(key) {
                RecordingField::Renamed(tag) => m.set(tag, tag_values(value)),
                RecordingField::UserRating => {
                    if let Some(rating) = value.get("value").filter(|v| !v.is_null()) {
                        m.set("~rating", tag_values(rating));
                    }
                }
                RecordingField::Length => {
                    if let Some(length) = value.as_u64() {
                        m.set_length(length);
                    }
                }
                RecordingField::ArtistCredit => {
                    let credits = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    self.artist_credit_to_metadata(credits, m, CreditTarget::Track);
                    if let Some(track) = track.as_deref_mut() {
                        for artist in credits.iter().filter_map(|c| c.get("artist")) {
                            let Some(id) = str_field(artist, "id").filter(|id| !id.is_empty()) else {
                                continue;
                            };
                            add_genres_from_node(artist, track.append_artist(id));
                        }
                    }
                }
                RecordingField::Relations => {
                    let relations = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    self.map_relations(relations, m, &mut dj_mix);
                }
                RecordingField::Isrcs => {
                    for isrc in tag_values(value) {
                        m.add("isrc", isrc);
                    }
                }
                RecordingField::Video => {
                    if is_truthy(value) {
                        m.set_one("~video", "1");
                    }
                }
                RecordingField::Unhandled => {}
            }
        }

        // Genres are folded in after the field walk so the accumulation
        // order does not depend on key order.
        if let Some(track) = track {
            add_genres_from_node(node, track);
        }

        if let Some(title) = m.get("title").map(String::from) {
            m.set_one("~recordingtitle", title);
        }
        if m.length() > 0 {
            m.set_one("~length", format_time(m.length()));
        }
        if m.contains_value("~performance_attributes", "instrumental") {
            m.unset("lyricist");
            m.set_one("language", NO_LINGUISTIC_CONTENT);
        }
        dj_mix
    }
}
