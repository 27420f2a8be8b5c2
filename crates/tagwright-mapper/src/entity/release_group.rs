use serde_json::Value;
use tagwright_core::{GenreSink, Metadata};

use super::renamed;
use crate::genres::add_genres_from_node;
use crate::node::{entries, is_skippable, str_field, tag_values};

const RELEASE_GROUP_TO_METADATA: &[(&str, &str)] = &[
    ("disambiguation", "~releasegroupcomment"),
    ("first-release-date", "~releasegroup_firstreleasedate"),
    ("title", "~releasegroup"),
];

enum ReleaseGroupField {
    Renamed(&'static str),
    PrimaryType,
    SecondaryTypes,
    Unhandled,
}

impl ReleaseGroupField {
    fn classify(key: &str) -> Self {
        if let Some(tag) = renamed(RELEASE_GROUP_TO_METADATA, key) {
            return Self::Renamed(tag);
        }
        match key {
            "primary-type" => Self::PrimaryType,
            "secondary-types" => Self::SecondaryTypes,
            _ => Self::Unhandled,
        }
    }
}

/// Map a release-group node, usually the one nested in a release.
///
/// `releasetype` ends up as the primary type followed by the secondary
/// types, all lowercased.
pub fn release_group_to_metadata(
    node: &Value,
    m: &mut Metadata,
    release_group: Option<&mut dyn GenreSink>,
) {
    if let Some(id) = str_field(node, "id") {
        m.add_unique("musicbrainz_releasegroupid", id);
    }

    for (key, value) in entries(node) {
        if is_skippable(value) {
            continue;
        }
        match ReleaseGroupField::classify(key) {
            ReleaseGroupField::Renamed(tag) => m.set(tag, tag_values(value)),
            ReleaseGroupField::PrimaryType => {
                if let Some(primary) = value.as_str() {
                    m.set_one("~primaryreleasetype", primary.to_lowercase());
                }
            }
            ReleaseGroupField::SecondaryTypes => {
                for secondary in tag_values(value) {
                    m.add_unique("~secondaryreleasetype", secondary.to_lowercase());
                }
            }
            ReleaseGroupField::Unhandled => {}
        }
    }

    if let Some(sink) = release_group {
        add_genres_from_node(node, sink);
    }

    if let Some(date) = m.get("~releasegroup_firstreleasedate").map(String::from) {
        let year: String = date.chars().take(4).collect();
        m.set_one("originaldate", date);
        m.set_one("originalyear", year);
    }

    let release_types: Vec<String> = m
        .get_all("~primaryreleasetype")
        .iter()
        .chain(m.get_all("~secondaryreleasetype"))
        .cloned()
        .collect();
    m.set("releasetype", release_types);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tagwright_core::GenreTally;

    #[test]
    fn test_release_group_types_and_dates() {
        let node = json!({
            "id": "rg-1",
            "title": "Live Through This",
            "first-release-date": "1994-03-15",
            "primary-type": "Album",
            "secondary-types": ["Live", "Compilation", "live"],
            "disambiguation": "",
        });
        let mut m = Metadata::new();
        release_group_to_metadata(&node, &mut m, None);
        assert_eq!(m.get("musicbrainz_releasegroupid"), Some("rg-1"));
        assert_eq!(m.get("~releasegroup"), Some("Live Through This"));
        assert_eq!(m.get("originaldate"), Some("1994-03-15"));
        assert_eq!(m.get("originalyear"), Some("1994"));
        assert_eq!(m.get("~primaryreleasetype"), Some("album"));
        assert_eq!(
            m.get_all("releasetype"),
            ["album".to_string(), "live".to_string(), "compilation".to_string()]
        );
        assert!(!m.contains_key("~releasegroupcomment"));
    }

    #[test]
    fn test_release_group_without_dates() {
        let mut m = Metadata::new();
        release_group_to_metadata(&json!({"id": "rg-2"}), &mut m, None);
        assert!(!m.contains_key("originaldate"));
        assert!(!m.contains_key("originalyear"));
        assert!(!m.contains_key("releasetype"));
    }

    #[test]
    fn test_release_group_genres() {
        let node = json!({
            "id": "rg-3",
            "genres": [{"name": "grunge", "count": 3}],
            "user-tags": [{"name": "90s"}],
        });
        let mut tally = GenreTally::new();
        let mut m = Metadata::new();
        release_group_to_metadata(&node, &mut m, Some(&mut tally));
        assert_eq!(tally.count("grunge"), 3);
        assert_eq!(tally.count("90s"), 1);
    }
}
