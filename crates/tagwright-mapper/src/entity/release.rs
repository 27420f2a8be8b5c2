use serde_json::Value;
use tagwright_core::{CreditedEntity, Metadata};

use super::renamed;
use crate::credit::CreditTarget;
use crate::genres::add_genres_from_node;
use crate::mapper::Mapper;
use crate::node::{entries, is_skippable, str_field, tag_values};
use crate::relations::DjMixIndex;
use crate::release_info::{countries, label_info};

const RELEASE_TO_METADATA: &[(&str, &str)] = &[
    ("annotation", "~releaseannotation"),
    ("asin", "asin"),
    ("barcode", "barcode"),
    ("country", "releasecountry"),
    ("date", "date"),
    ("disambiguation", "~releasecomment"),
    ("title", "album"),
];

enum ReleaseField {
    Renamed(&'static str),
    Status,
    ArtistCredit,
    Relations,
    LabelInfo,
    TextRepresentation,
    Unhandled,
}

impl ReleaseField {
    fn classify(key: &str) -> Self {
        if let Some(tag) = renamed(RELEASE_TO_METADATA, key) {
            return Self::Renamed(tag);
        }
        match key {
            "status" => Self::Status,
            "artist-credit" => Self::ArtistCredit,
            "relations" => Self::Relations,
            "label-info" => Self::LabelInfo,
            "text-representation" => Self::TextRepresentation,
            _ => Self::Unhandled,
        }
    }
}

impl Mapper {
    /// Map a release node.
    ///
    /// Release-level relationships are only mapped when `release_ars` is
    /// enabled. A preferred release country overrides `releasecountry` when
    /// the release was issued there.
    pub fn release_to_metadata(
        &self,
        node: &Value,
        m: &mut Metadata,
        mut album: Option<&mut CreditedEntity>,
    ) -> DjMixIndex {
        let mut dj_mix = DjMixIndex::default();
        if let Some(id) = str_field(node, "id") {
            m.add_unique("musicbrainz_albumid", id);
        }

        for (key, value) in entries(node) {
            if is_skippable(value) {
                continue;
            }
            match ReleaseField::classify(key) {
                ReleaseField::Renamed(tag) => m.set(tag, tag_values(value)),
                ReleaseField::Status => {
                    if let Some(status) = value.as_str() {
                        m.set_one("releasestatus", status.to_lowercase());
                    }
                }
                ReleaseField::ArtistCredit => {
                    let credits = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    self.artist_credit_to_metadata(credits, m, CreditTarget::Release);
                    if let Some(album) = album.as_deref_mut() {
                        for artist in credits.iter().filter_map(|c| c.get("artist")) {
                            let Some(id) = str_field(artist, "id").filter(|id| !id.is_empty()) else {
                                continue;
                            };
                            add_genres_from_node(artist, album.append_artist(id));
                        }
                    }
                }
                ReleaseField::Relations => {
                    if self.settings().release_ars {
                        let relations = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                        self.map_relations(relations, m, &mut dj_mix);
                    }
                }
                ReleaseField::LabelInfo => {
                    let infos = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
                    let (labels, catalog_numbers) = label_info(infos);
                    m.set("label", labels);
                    m.set("catalognumber", catalog_numbers);
                }
                ReleaseField::TextRepresentation => {
                    if let Some(language) = value.get("language").filter(|v| !v.is_null()) {
                        m.set("~releaselanguage", tag_values(language));
                    }
                    if let Some(script) = value.get("script").filter(|v| !v.is_null()) {
                        m.set("script", tag_values(script));
                    }
                }
                ReleaseField::Unhandled => {}
            }
        }

        let release_countries = countries(node);
        let preferred = self
            .settings()
            .preferred_release_countries
            .iter()
            .find(|country| release_countries.contains(country))
            .cloned();
        m.set("~releasecountries", release_countries);
        if let Some(country) = preferred {
            m.set_one("releasecountry", country);
        }

        if let Some(album) = album {
            add_genres_from_node(node, album);
        }
        dj_mix
    }
}
