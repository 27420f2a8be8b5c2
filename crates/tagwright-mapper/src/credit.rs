//! Artist-credit assembly.
//!
//! An artist credit is an ordered list of `{artist, name?, joinphrase?}`
//! entries. It yields one display string and one sort string (each entry
//! followed by its join phrase) plus index-aligned per-artist lists.

use serde_json::Value;
use tagwright_core::Metadata;

use crate::mapper::Mapper;
use crate::node::str_field;

/// An assembled artist credit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistCredit {
    /// Display string, e.g. `"A & B"`.
    pub artist: String,
    /// Sort string with the same join phrases.
    pub artist_sort: String,
    /// One display name per credited artist.
    pub artists: Vec<String>,
    /// One sort name per credited artist, aligned with `artists`.
    pub artists_sort: Vec<String>,
}

/// Which set of artist tags a credit populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditTarget {
    /// `artist`, `artistsort`, `artists`, ... for tracks and recordings.
    Track,
    /// `albumartist`, `albumartistsort`, ... for releases.
    Release,
}

struct CreditTags {
    ids: &'static str,
    artist: &'static str,
    artist_sort: &'static str,
    artists: &'static str,
    artists_sort: &'static str,
}

impl CreditTarget {
    fn tags(self) -> CreditTags {
        match self {
            Self::Track => CreditTags {
                ids: "musicbrainz_artistid",
                artist: "artist",
                artist_sort: "artistsort",
                artists: "artists",
                artists_sort: "~artists_sort",
            },
            Self::Release => CreditTags {
                ids: "musicbrainz_albumartistid",
                artist: "albumartist",
                artist_sort: "albumartistsort",
                artists: "~albumartists",
                artists_sort: "~albumartists_sort",
            },
        }
    }
}

impl Mapper {
    /// Assemble an artist credit from its entries.
    pub fn artist_credit(&self, credits: &[Value]) -> ArtistCredit {
        let use_credited_as = !self.settings().standardize_artists;
        let mut credit = ArtistCredit::default();

        for entry in credits {
            let artist = entry.get("artist").unwrap_or(&Value::Null);
            let raw_name = str_field(artist, "name").unwrap_or_default();
            let translated = self.translate_artist(artist);
            let credited_as = str_field(entry, "name").filter(|_| use_credited_as);

            let name = if translated.name != raw_name {
                translated.name
            } else if let Some(credited) = credited_as {
                credited.to_string()
            } else {
                raw_name.to_string()
            };

            credit.artist.push_str(&name);
            credit.artist_sort.push_str(&translated.sort_name);
            credit.artists.push(name);
            credit.artists_sort.push(translated.sort_name);

            if let Some(join) = str_field(entry, "joinphrase") {
                credit.artist.push_str(join);
                credit.artist_sort.push_str(join);
            }
        }
        credit
    }

    /// Write an artist credit and the credited artist IDs into `m`.
    pub fn artist_credit_to_metadata(&self, credits: &[Value], m: &mut Metadata, target: CreditTarget) {
        // One id per entry, blank when missing, so ids stay aligned with
        // `artists`.
        let ids: Vec<String> = credits
            .iter()
            .map(|entry| {
                entry
                    .get("artist")
                    .and_then(|artist| str_field(artist, "id"))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        let credit = self.artist_credit(credits);
        let tags = target.tags();
        m.set(tags.ids, ids);
        m.set_one(tags.artist, credit.artist);
        m.set_one(tags.artist_sort, credit.artist_sort);
        m.set(tags.artists, credit.artists);
        m.set(tags.artists_sort, credit.artists_sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use serde_json::json;

    fn two_artists() -> Vec<Value> {
        vec![
            json!({
                "artist": {"id": "id-a", "name": "A", "sort-name": "A, The"},
                "joinphrase": " & ",
            }),
            json!({
                "artist": {"id": "id-b", "name": "B", "sort-name": "B"},
            }),
        ]
    }

    #[test]
    fn test_concatenates_with_join_phrases() {
        let credit = Mapper::default().artist_credit(&two_artists());
        assert_eq!(credit.artist, "A & B");
        assert_eq!(credit.artist_sort, "A, The & B");
        assert_eq!(credit.artists, vec!["A", "B"]);
        assert_eq!(credit.artists_sort, vec!["A, The", "B"]);
    }

    #[test]
    fn test_null_join_phrase_is_empty() {
        let credits = vec![
            json!({"artist": {"name": "A", "sort-name": "A"}, "joinphrase": null}),
            json!({"artist": {"name": "B", "sort-name": "B"}}),
        ];
        let credit = Mapper::default().artist_credit(&credits);
        assert_eq!(credit.artist, "AB");
    }

    #[test]
    fn test_credited_name_used_unless_standardized() {
        let credits = vec![json!({
            "artist": {"name": "Prince", "sort-name": "Prince"},
            "name": "The Artist",
        })];

        let credit = Mapper::default().artist_credit(&credits);
        assert_eq!(credit.artist, "The Artist");

        let standardized = Mapper::new(Settings {
            standardize_artists: true,
            ..Settings::default()
        });
        assert_eq!(standardized.artist_credit(&credits).artist, "Prince");
    }

    #[test]
    fn test_translation_beats_credited_name() {
        let mapper = Mapper::new(Settings {
            translate_artist_names: true,
            ..Settings::default()
        });
        let credits = vec![json!({
            "artist": {
                "name": "Кино",
                "sort-name": "Kino",
                "aliases": [{"name": "Kino", "sort-name": "Kino", "locale": "en", "primary": true, "type": "Artist name"}],
            },
            "name": "КИНО",
        })];
        assert_eq!(mapper.artist_credit(&credits).artist, "Kino");
    }

    #[test]
    fn test_to_metadata_track_tags() {
        let mut m = Metadata::new();
        Mapper::default().artist_credit_to_metadata(&two_artists(), &mut m, CreditTarget::Track);
        assert_eq!(m.get_all("musicbrainz_artistid"), ["id-a".to_string(), "id-b".to_string()]);
        assert_eq!(m.get("artist"), Some("A & B"));
        assert_eq!(m.get("artistsort"), Some("A, The & B"));
        assert_eq!(m.get_all("artists"), ["A".to_string(), "B".to_string()]);
        assert_eq!(m.get_all("~artists_sort"), ["A, The".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_to_metadata_ids_aligned_with_artists() {
        let credits = vec![
            json!({"artist": {"name": "A", "sort-name": "A"}, "joinphrase": " & "}),
            json!({"artist": {"id": "id-b", "name": "B", "sort-name": "B"}}),
        ];
        let mut m = Metadata::new();
        Mapper::default().artist_credit_to_metadata(&credits, &mut m, CreditTarget::Track);
        assert_eq!(m.get_all("musicbrainz_artistid"), [String::new(), "id-b".to_string()]);
        assert_eq!(m.get_all("artists"), ["A".to_string(), "B".to_string()]);
        assert_eq!(m.get("artist"), Some("A & B"));
    }

    #[test]
    fn test_to_metadata_release_tags() {
        let mut m = Metadata::new();
        Mapper::default().artist_credit_to_metadata(&two_artists(), &mut m, CreditTarget::Release);
        assert_eq!(m.get("albumartist"), Some("A & B"));
        assert_eq!(m.get("albumartistsort"), Some("A, The & B"));
        assert_eq!(m.get_all("~albumartists").len(), 2);
        assert!(!m.contains_key("artist"));
    }
}
