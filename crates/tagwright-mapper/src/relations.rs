//! Relationship classification.
//!
//! Relations are dispatched on their `target-type`:
//!
//! - **artist**: performer credits become `performer:<descriptor>` tags,
//!   `mix-DJ` credits with attributes go to the [`DjMixIndex`], and other
//!   roles map through [`ARTIST_REL_TYPES`].
//! - **work**: `performance` links pull in the performance attributes and
//!   the work itself.
//! - **url**: Amazon links yield an ASIN and license links a license URL.
//!
//! Unknown targets and unknown relation types produce nothing.

use serde::Serialize;
use serde_json::{Map, Value};
use tagwright_core::text::parse_amazon_url;
use tagwright_core::Metadata;

use crate::mapper::Mapper;
use crate::node::{array_field, str_field};

/// Artist relation type to tag name.
pub const ARTIST_REL_TYPES: &[(&str, &str)] = &[
    ("arranger", "arranger"),
    ("audio", "engineer"),
    ("chorus master", "performer:chorus master"),
    ("composer", "composer"),
    ("concertmaster", "performer:concertmaster"),
    ("conductor", "conductor"),
    ("engineer", "engineer"),
    ("instrument arranger", "arranger"),
    ("librettist", "lyricist"),
    ("live sound", "engineer"),
    ("lyricist", "lyricist"),
    ("mix-DJ", "djmixer"),
    ("mix", "mixer"),
    ("orchestrator", "arranger"),
    ("performing orchestra", "performer:orchestra"),
    ("producer", "producer"),
    ("remixer", "remixer"),
    ("sound", "engineer"),
    ("video director", "director"),
    ("vocal arranger", "arranger"),
    ("writer", "writer"),
];

/// Attributes that qualify a performer rather than name an instrument.
pub const PREFIX_ATTRS: &[&str] = &["guest", "additional", "minor", "solo"];

/// Descriptor used when a performer relation carries no instrument.
const BLANK_SPECIAL_RELTYPES: &[(&str, &str)] = &[("vocal", "vocals")];

/// DJ-mix credits keyed by medium, collected from `mix-DJ` relations.
///
/// A `mix-DJ` relation attribute such as `"medium 2"` files the artist
/// under `"2"`. Keys and names keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DjMixIndex(Vec<(String, Vec<String>)>);

impl DjMixIndex {
    pub fn push(&mut self, key: &str, artist: impl Into<String>) {
        let artist = artist.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, names)) => names.push(artist),
            None => self.0.push((key.to_string(), vec![artist])),
        }
    }

    /// Artists filed under `key`.
    pub fn get(&self, key: &str) -> &[String] {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fold another index into this one.
    pub fn extend(&mut self, other: DjMixIndex) {
        for (key, names) in other.0 {
            for name in names {
                self.push(&key, name);
            }
        }
    }
}

/// Target of a relation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelationTarget {
    Artist,
    Work,
    Url,
    Unhandled,
}

impl RelationTarget {
    fn classify(target_type: Option<&str>) -> Self {
        match target_type {
            Some("artist") => Self::Artist,
            Some("work") => Self::Work,
            Some("url") => Self::Url,
            _ => Self::Unhandled,
        }
    }
}

/// Routing of an artist relation by its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtistRole {
    Performer,
    MixDj,
    Tag(&'static str),
    Unknown,
}

impl ArtistRole {
    fn classify(reltype: &str, has_attributes: bool) -> Self {
        match reltype {
            "vocal" | "instrument" | "performer" => Self::Performer,
            "mix-DJ" if has_attributes => Self::MixDj,
            _ => ARTIST_REL_TYPES
                .iter()
                .find(|(rel, _)| *rel == reltype)
                .map(|(_, tag)| Self::Tag(*tag))
                .unwrap_or(Self::Unknown),
        }
    }
}

fn credited_attribute<'a>(attr: &'a str, credits: Option<&'a Map<String, Value>>) -> &'a str {
    credits
        .and_then(|c| c.get(attr))
        .and_then(Value::as_str)
        .unwrap_or(attr)
}

/// Compose a performer descriptor from relation attributes.
///
/// Prefix attributes (`guest`, `solo`, ...) come first, then the remaining
/// attributes as `"a, b and c"`. With no remaining attributes the default
/// noun for `reltype` is used (`"vocals"` for `vocal`, otherwise nothing).
/// `credits` maps attribute names to credited names, e.g. `"guitar"` to
/// `"axe"`.
pub fn performer_descriptor<S: AsRef<str>>(
    attrs: &[S],
    reltype: &str,
    credits: Option<&Map<String, Value>>,
) -> String {
    let (prefixes, nouns): (Vec<&str>, Vec<&str>) = attrs
        .iter()
        .map(|attr| credited_attribute(attr.as_ref(), credits))
        .partition(|attr| PREFIX_ATTRS.iter().any(|prefix| prefix == attr));

    let noun_clause = match nouns.as_slice() {
        [] => BLANK_SPECIAL_RELTYPES
            .iter()
            .find(|(rel, _)| *rel == reltype)
            .map(|(_, noun)| (*noun).to_string())
            .unwrap_or_default(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    };
    format!("{} {}", prefixes.join(" "), noun_clause)
        .trim()
        .to_string()
}

impl Mapper {
    /// Map relations into `m`, returning the DJ-mix credits found.
    pub fn relations_to_metadata(&self, relations: &[Value], m: &mut Metadata) -> DjMixIndex {
        let mut dj_mix = DjMixIndex::default();
        self.map_relations(relations, m, &mut dj_mix);
        dj_mix
    }

    pub(crate) fn map_relations(&self, relations: &[Value], m: &mut Metadata, dj_mix: &mut DjMixIndex) {
        for relation in relations {
            match RelationTarget::classify(str_field(relation, "target-type")) {
                RelationTarget::Artist => self.map_artist_relation(relation, m, dj_mix),
                RelationTarget::Work => self.map_work_relation(relation, m, dj_mix),
                RelationTarget::Url => map_url_relation(relation, m),
                RelationTarget::Unhandled => {}
            }
        }
    }

    fn map_artist_relation(&self, relation: &Value, m: &mut Metadata, dj_mix: &mut DjMixIndex) {
        let settings = self.settings();
        let Some(artist) = relation.get("artist").filter(|a| a.is_object()) else {
            log::debug!("Skipping artist relation without an artist node");
            return;
        };
        let raw_name = str_field(artist, "name").unwrap_or_default();
        let translated = self.translate_artist(artist);
        let mut value = translated.name;
        if value == raw_name && !settings.standardize_artists {
            if let Some(credited) = str_field(relation, "target-credit").filter(|c| !c.is_empty()) {
                value = credited.to_string();
            }
        }

        let reltype = str_field(relation, "type").unwrap_or_default();
        let attributes: Vec<&str> = array_field(relation, "attributes")
            .iter()
            .filter_map(Value::as_str)
            .collect();

        let name = match ArtistRole::classify(reltype, !attributes.is_empty()) {
            ArtistRole::Performer => {
                let credits = if settings.standardize_instruments {
                    None
                } else {
                    relation.get("attribute-credits").and_then(Value::as_object)
                };
                format!(
                    "performer:{}",
                    performer_descriptor(&attributes, reltype, credits)
                )
            }
            ArtistRole::MixDj => {
                for attr in &attributes {
                    match attr.split_whitespace().nth(1) {
                        Some(key) => dj_mix.push(key, value.clone()),
                        None => log::debug!("Ignoring mix-DJ attribute without a medium: {}", attr),
                    }
                }
                return;
            }
            ArtistRole::Tag(tag) => tag.to_string(),
            ArtistRole::Unknown => return,
        };

        m.add_unique(&name, value);
        if name == "composer" {
            m.add_unique("composersort", translated.sort_name);
        }
    }

    fn map_work_relation(&self, relation: &Value, m: &mut Metadata, dj_mix: &mut DjMixIndex) {
        if str_field(relation, "type") != Some("performance") {
            return;
        }
        performance_to_metadata(relation, m);
        if let Some(work) = relation.get("work").filter(|w| w.is_object()) {
            self.map_work(work, m, dj_mix);
        }
    }
}

/// Record the attributes of a performance relation (`live`, `instrumental`,
/// ...) under `~performance_attributes`.
pub fn performance_to_metadata(relation: &Value, m: &mut Metadata) {
    for attribute in array_field(relation, "attributes").iter().filter_map(Value::as_str) {
        m.add_unique("~performance_attributes", attribute);
    }
}

fn map_url_relation(relation: &Value, m: &mut Metadata) {
    let Some(resource) = relation.get("url").and_then(|url| str_field(url, "resource")) else {
        return;
    };
    match str_field(relation, "type") {
        Some("amazon asin") if !m.contains_key("asin") => {
            if let Some(amazon) = parse_amazon_url(resource) {
                m.set_one("asin", amazon.asin);
            }
        }
        Some("license") => m.add("license", resource),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use serde_json::json;

    fn artist_rel(reltype: &str, name: &str, attributes: &[&str]) -> Value {
        json!({
            "target-type": "artist",
            "type": reltype,
            "attributes": attributes,
            "artist": {"id": format!("id-{name}"), "name": name, "sort-name": format!("{name}, sort")},
        })
    }

    #[test]
    fn test_descriptor_prefix_and_noun() {
        assert_eq!(performer_descriptor(&["guest", "vocal"], "performer", None), "guest vocal");
    }

    #[test]
    fn test_descriptor_blank_vocal() {
        assert_eq!(performer_descriptor::<&str>(&[], "vocal", None), "vocals");
    }

    #[test]
    fn test_descriptor_blank_unknown_type() {
        assert_eq!(performer_descriptor::<&str>(&[], "instrument", None), "");
        assert_eq!(performer_descriptor::<&str>(&[], "frobnicator", None), "");
    }

    #[test]
    fn test_descriptor_noun_list() {
        assert_eq!(
            performer_descriptor(&["solo", "guitar", "bass", "drums"], "instrument", None),
            "solo guitar, bass and drums"
        );
        assert_eq!(
            performer_descriptor(&["piano", "organ"], "instrument", None),
            "piano and organ"
        );
    }

    #[test]
    fn test_descriptor_prefixes_only() {
        assert_eq!(performer_descriptor(&["additional"], "vocal", None), "additional vocals");
        assert_eq!(performer_descriptor(&["guest", "minor"], "instrument", None), "guest minor");
    }

    #[test]
    fn test_descriptor_uses_attribute_credits() {
        let credits = json!({"guitar": "axe"});
        assert_eq!(
            performer_descriptor(&["guitar"], "instrument", credits.as_object()),
            "axe"
        );
    }

    #[test]
    fn test_performer_relations() {
        let mut m = Metadata::new();
        let relations = vec![
            artist_rel("vocal", "Singer", &[]),
            artist_rel("instrument", "Guitarist", &["guest", "guitar"]),
            artist_rel("instrument", "Guitarist", &["guest", "guitar"]),
        ];
        Mapper::default().relations_to_metadata(&relations, &mut m);
        assert_eq!(m.get_all("performer:vocals"), ["Singer".to_string()]);
        assert_eq!(m.get_all("performer:guest guitar"), ["Guitarist".to_string()]);
    }

    #[test]
    fn test_instrument_credits_honoured_when_not_standardized() {
        let mapper = Mapper::new(Settings {
            standardize_instruments: false,
            ..Settings::default()
        });
        let mut relation = artist_rel("instrument", "Player", &["guitar"]);
        relation["attribute-credits"] = json!({"guitar": "Stratocaster"});
        let mut m = Metadata::new();
        mapper.relations_to_metadata(&[relation.clone()], &mut m);
        assert!(m.contains_key("performer:Stratocaster"));

        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&[relation], &mut m);
        assert!(m.contains_key("performer:guitar"));
    }

    #[test]
    fn test_named_relations_and_composer_sort() {
        let mut m = Metadata::new();
        let relations = vec![
            artist_rel("composer", "Bach", &[]),
            artist_rel("composer", "Bach", &[]),
            artist_rel("librettist", "Picander", &[]),
            artist_rel("audio", "Engineer One", &[]),
            artist_rel("sound", "Engineer Two", &[]),
        ];
        Mapper::default().relations_to_metadata(&relations, &mut m);
        assert_eq!(m.get_all("composer"), ["Bach".to_string()]);
        assert_eq!(m.get_all("composersort"), ["Bach, sort".to_string()]);
        assert_eq!(m.get("lyricist"), Some("Picander"));
        assert_eq!(
            m.get_all("engineer"),
            ["Engineer One".to_string(), "Engineer Two".to_string()]
        );
    }

    #[test]
    fn test_unknown_relation_type_dropped() {
        let mut m = Metadata::new();
        let relations = vec![
            artist_rel("mastering", "Someone", &[]),
            json!({"target-type": "label", "type": "publishing"}),
            json!({"type": "composer"}),
        ];
        Mapper::default().relations_to_metadata(&relations, &mut m);
        assert!(m.is_empty());
    }

    #[test]
    fn test_target_credit_overrides_name() {
        let mut relation = artist_rel("producer", "Canonical", &[]);
        relation["target-credit"] = json!("Credited");
        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&[relation.clone()], &mut m);
        assert_eq!(m.get("producer"), Some("Credited"));

        let standardized = Mapper::new(Settings {
            standardize_artists: true,
            ..Settings::default()
        });
        let mut m = Metadata::new();
        standardized.relations_to_metadata(&[relation], &mut m);
        assert_eq!(m.get("producer"), Some("Canonical"));
    }

    #[test]
    fn test_empty_target_credit_ignored() {
        let mut relation = artist_rel("producer", "Canonical", &[]);
        relation["target-credit"] = json!("");
        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&[relation], &mut m);
        assert_eq!(m.get("producer"), Some("Canonical"));
    }

    #[test]
    fn test_mix_dj_with_attributes_goes_to_index() {
        let mut m = Metadata::new();
        let relations = vec![
            artist_rel("mix-DJ", "DJ One", &["medium 1"]),
            artist_rel("mix-DJ", "DJ Two", &["medium 1", "medium 2"]),
            artist_rel("mix-DJ", "DJ Three", &["oddity"]),
        ];
        let index = Mapper::default().relations_to_metadata(&relations, &mut m);
        assert!(!m.contains_key("djmixer"));
        assert_eq!(index.get("1"), ["DJ One".to_string(), "DJ Two".to_string()]);
        assert_eq!(index.get("2"), ["DJ Two".to_string()]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_mix_dj_without_attributes_is_djmixer() {
        let mut m = Metadata::new();
        let index = Mapper::default()
            .relations_to_metadata(&[artist_rel("mix-DJ", "DJ", &[])], &mut m);
        assert!(index.is_empty());
        assert_eq!(m.get("djmixer"), Some("DJ"));
    }

    #[test]
    fn test_work_performance_relation() {
        let relation = json!({
            "target-type": "work",
            "type": "performance",
            "attributes": ["live", "instrumental"],
            "work": {
                "id": "work-1",
                "title": "So What",
                "languages": ["zxx"],
                "relations": [artist_rel("composer", "Miles Davis", &[])],
            },
        });
        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&[relation], &mut m);
        assert_eq!(
            m.get_all("~performance_attributes"),
            ["live".to_string(), "instrumental".to_string()]
        );
        assert_eq!(m.get("musicbrainz_workid"), Some("work-1"));
        assert_eq!(m.get("work"), Some("So What"));
        assert_eq!(m.get("composer"), Some("Miles Davis"));
    }

    #[test]
    fn test_work_relation_other_type_ignored() {
        let relation = json!({
            "target-type": "work",
            "type": "medley",
            "work": {"id": "work-1", "title": "Medley"},
        });
        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&[relation], &mut m);
        assert!(m.is_empty());
    }

    #[test]
    fn test_url_relations() {
        let relations = vec![
            json!({"target-type": "url", "type": "amazon asin",
                   "url": {"resource": "https://www.amazon.com/gp/product/B000002ADT"}}),
            json!({"target-type": "url", "type": "amazon asin",
                   "url": {"resource": "https://www.amazon.de/gp/product/B000002XXX"}}),
            json!({"target-type": "url", "type": "license",
                   "url": {"resource": "https://creativecommons.org/licenses/by/4.0/"}}),
            json!({"target-type": "url", "type": "license",
                   "url": {"resource": "https://creativecommons.org/licenses/by/4.0/"}}),
            json!({"target-type": "url", "type": "discogs", "url": null}),
        ];
        let mut m = Metadata::new();
        Mapper::default().relations_to_metadata(&relations, &mut m);
        assert_eq!(m.get_all("asin"), ["B000002ADT".to_string()]);
        assert_eq!(m.get_all("license").len(), 2);
    }

    #[test]
    fn test_dj_mix_index_extend() {
        let mut a = DjMixIndex::default();
        a.push("1", "X");
        let mut b = DjMixIndex::default();
        b.push("1", "Y");
        b.push("2", "Z");
        a.extend(b);
        assert_eq!(a.get("1"), ["X".to_string(), "Y".to_string()]);
        assert_eq!(a.get("2"), ["Z".to_string()]);
        assert!(a.get("3").is_empty());
    }
}
