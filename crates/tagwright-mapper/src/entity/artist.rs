use serde_json::Value;
use tagwright_core::Metadata;

use super::renamed;
use crate::node::{entries, is_skippable, is_truthy, str_field, tag_values};

const ARTIST_TO_METADATA: &[(&str, &str)] = &[
    ("gender", "gender"),
    ("name", "name"),
    ("type", "type"),
];

enum ArtistField {
    Renamed(&'static str),
    Area(&'static str),
    LifeSpan,
    Unhandled,
}

impl ArtistField {
    fn classify(key: &str) -> Self {
        if let Some(tag) = renamed(ARTIST_TO_METADATA, key) {
            return Self::Renamed(tag);
        }
        match key {
            "area" => Self::Area("area"),
            "begin-area" => Self::Area("beginarea"),
            "end-area" => Self::Area("endarea"),
            "life-span" => Self::LifeSpan,
            _ => Self::Unhandled,
        }
    }
}

/// Map an artist node: identity, areas, and life span.
pub fn artist_to_metadata(node: &Value, m: &mut Metadata) {
    if let Some(id) = str_field(node, "id") {
        m.add_unique("musicbrainz_artistid", id);
    }
    for (key, value) in entries(node) {
        if is_skippable(value) {
            continue;
        }
        match ArtistField::classify(key) {
            ArtistField::Renamed(tag) => m.set(tag, tag_values(value)),
            ArtistField::Area(tag) => {
                if let Some(name) = str_field(value, "name") {
                    m.set_one(tag, name);
                }
            }
            ArtistField::LifeSpan => {
                if let Some(begin) = str_field(value, "begin") {
                    m.set_one("begindate", begin);
                }
                let ended = value.get("ended").is_some_and(is_truthy);
                if let Some(end) = str_field(value, "end").filter(|_| ended) {
                    m.set_one("enddate", end);
                }
            }
            ArtistField::Unhandled => {}
        }
    }
}
