//! Artist name translation through locale aliases.
//!
//! When translation is enabled, an artist's primary aliases are scored per
//! exact locale (`ja_JP`) and per root language (`ja`), and the user's
//! preferred locales pick the winner: first any exact-locale match in
//! preference order, then any root-language match. Without a match the name
//! is derived from the sort name instead.

use serde_json::Value;
use tagwright_core::text::translate_from_sortname;

use crate::mapper::Mapper;
use crate::node::{array_field, str_field};

/// Weight applied to each component of an alias score.
const COMPONENT_WEIGHT: f64 = 5.0;
/// Locale component for an exact locale, and for a bare language in the
/// root table.
const SPECIFIC_LOCALE_SCORE: f64 = 0.8;
/// Locale component in the root table for a `lang_REGION` alias.
const REGIONAL_ROOT_SCORE: f64 = 0.4;

/// Display name and sort name chosen for an artist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistName {
    pub name: String,
    pub sort_name: String,
}

impl ArtistName {
    pub fn new(name: impl Into<String>, sort_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_name: sort_name.into(),
        }
    }

    /// The artist's own `name` and `sort-name`.
    pub fn raw(artist: &Value) -> Self {
        Self::new(
            str_field(artist, "name").unwrap_or_default(),
            str_field(artist, "sort-name").unwrap_or_default(),
        )
    }
}

/// How reliable an alias type is as a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AliasType {
    ArtistName,
    LegalName,
    Other,
}

impl AliasType {
    fn from_node(value: Option<&str>) -> Self {
        match value {
            Some("Artist name") => Self::ArtistName,
            Some("Legal Name") => Self::LegalName,
            _ => Self::Other,
        }
    }

    fn reliability(self) -> f64 {
        match self {
            Self::ArtistName => 0.8,
            Self::LegalName => 0.5,
            // Only artist and legal names are expected to carry the primary
            // flag; anything else still competes, but at zero reliability.
            Self::Other => 0.0,
        }
    }
}

/// A primary alias with a locale.
#[derive(Debug, Clone, Copy)]
struct LocaleAlias<'a> {
    name: &'a str,
    sort_name: &'a str,
    locale: &'a str,
    kind: AliasType,
}

impl<'a> LocaleAlias<'a> {
    fn from_node(node: &'a Value) -> Option<Self> {
        if node.get("primary").and_then(Value::as_bool) != Some(true) {
            return None;
        }
        Some(Self {
            name: str_field(node, "name")?,
            sort_name: str_field(node, "sort-name").unwrap_or_default(),
            locale: str_field(node, "locale")?,
            kind: AliasType::from_node(str_field(node, "type")),
        })
    }

    fn root_locale(&self) -> &'a str {
        self.locale.split('_').next().unwrap_or(self.locale)
    }

    fn full_score(&self) -> f64 {
        linear_combination(&[
            (SPECIFIC_LOCALE_SCORE, COMPONENT_WEIGHT),
            (self.kind.reliability(), COMPONENT_WEIGHT),
        ])
    }

    fn root_score(&self) -> f64 {
        let locale_score = if self.locale.contains('_') {
            REGIONAL_ROOT_SCORE
        } else {
            SPECIFIC_LOCALE_SCORE
        };
        linear_combination(&[
            (locale_score, COMPONENT_WEIGHT),
            (self.kind.reliability(), COMPONENT_WEIGHT),
        ])
    }

    fn to_name(self) -> ArtistName {
        ArtistName::new(self.name, self.sort_name)
    }
}

/// Weighted mean of `(value, weight)` pairs.
fn linear_combination(parts: &[(f64, f64)]) -> f64 {
    let total: f64 = parts.iter().map(|(_, w)| w).sum();
    if total == 0.0 {
        return 0.0;
    }
    parts.iter().map(|(v, w)| v * w).sum::<f64>() / total
}

/// Best-scoring alias per locale; the first alias wins ties.
#[derive(Debug, Default)]
struct Candidates<'a>(Vec<(&'a str, f64, LocaleAlias<'a>)>);

impl<'a> Candidates<'a> {
    fn offer(&mut self, locale: &'a str, score: f64, alias: LocaleAlias<'a>) {
        match self.0.iter_mut().find(|(l, _, _)| *l == locale) {
            Some(entry) if score > entry.1 => *entry = (locale, score, alias),
            Some(_) => {}
            None => self.0.push((locale, score, alias)),
        }
    }

    fn get(&self, locale: &str) -> Option<LocaleAlias<'a>> {
        self.0
            .iter()
            .find(|(l, _, _)| *l == locale)
            .map(|(_, _, alias)| *alias)
    }
}

/// Pick the alias matching the preferred `locales`, if any.
///
/// Exact-locale matches are tried first across the whole preference list,
/// then root-language matches.
pub fn select_locale_alias(aliases: &[Value], locales: &[String]) -> Option<ArtistName> {
    let mut full = Candidates::default();
    let mut root = Candidates::default();
    for alias in aliases.iter().filter_map(LocaleAlias::from_node) {
        full.offer(alias.locale, alias.full_score(), alias);
        root.offer(alias.root_locale(), alias.root_score(), alias);
    }

    locales
        .iter()
        .find_map(|locale| full.get(locale))
        .or_else(|| {
            locales
                .iter()
                .find_map(|locale| root.get(locale.split('_').next().unwrap_or(locale)))
        })
        .map(LocaleAlias::to_name)
}

impl Mapper {
    /// Choose the display and sort name for an artist node.
    pub fn translate_artist(&self, artist: &Value) -> ArtistName {
        let settings = self.settings();
        if !settings.translate_artist_names {
            return ArtistName::raw(artist);
        }
        if settings.translate_artist_names_script_exception && self.is_script_exception(artist) {
            return ArtistName::raw(artist);
        }

        let aliases = array_field(artist, "aliases");
        if let Some(name) = select_locale_alias(aliases, &settings.artist_locales) {
            return name;
        }

        let name = str_field(artist, "name").unwrap_or_default();
        let sort_name = str_field(artist, "sort-name").unwrap_or_default();
        ArtistName::new(translate_from_sortname(name, sort_name), sort_name)
    }

    /// Whether the artist's name is written in a script the user wants left
    /// untranslated.
    fn is_script_exception(&self, artist: &Value) -> bool {
        let name = str_field(artist, "name").unwrap_or_default();
        let detected = self.script_detector().detect_weighted(name);
        log::debug!("Script alpha characters found in \"{}\": {}", name, detected);
        if detected.is_empty() {
            return false;
        }

        let exceptions = &self.settings().script_exceptions;
        if exceptions.is_empty() {
            log::warn!("No scripts selected for translation exception match check.");
            return false;
        }

        let matched = exceptions.iter().any(|exception| {
            detected
                .get(exception.script)
                .is_some_and(|weight| weight >= exception.share())
        });
        log::debug!(
            "{} in selected scripts: {}",
            if matched { "Match" } else { "No match" },
            exceptions
                .iter()
                .map(|e| format!("{} ({}%)", e.script, e.weight))
                .collect::<Vec<_>>()
                .join("; ")
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScriptException, Settings};
    use serde_json::json;
    use tagwright_core::Script;

    fn locales(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn translating(artist_locales: &[&str]) -> Mapper {
        Mapper::new(Settings {
            translate_artist_names: true,
            artist_locales: locales(artist_locales),
            ..Settings::default()
        })
    }

    fn alias(name: &str, locale: &str, kind: &str) -> Value {
        json!({
            "name": name,
            "sort-name": format!("{name} (sort)"),
            "locale": locale,
            "primary": true,
            "type": kind,
        })
    }

    fn sakamoto() -> Value {
        json!({
            "id": "3d3e5b9a-0000-0000-0000-000000000000",
            "name": "坂本龍一",
            "sort-name": "Sakamoto, Ryuichi",
            "aliases": [
                alias("Ryuichi Sakamoto", "en", "Artist name"),
                alias("坂本龍一", "ja", "Artist name"),
            ],
        })
    }

    #[test]
    fn test_translation_disabled_returns_raw() {
        let mapper = Mapper::default();
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name, ArtistName::new("坂本龍一", "Sakamoto, Ryuichi"));
    }

    #[test]
    fn test_translation_picks_preferred_locale() {
        let mapper = translating(&["en"]);
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name, ArtistName::new("Ryuichi Sakamoto", "Ryuichi Sakamoto (sort)"));
    }

    #[test]
    fn test_translation_falls_back_to_sortname() {
        let mapper = translating(&["fr"]);
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name, ArtistName::new("Ryuichi Sakamoto", "Sakamoto, Ryuichi"));
    }

    #[test]
    fn test_translation_without_aliases_falls_back() {
        let mapper = translating(&["en"]);
        let artist = json!({"name": "Кино", "sort-name": "Kino"});
        assert_eq!(mapper.translate_artist(&artist), ArtistName::new("Kino", "Kino"));
    }

    #[test]
    fn test_non_primary_and_localeless_aliases_ignored() {
        let aliases = vec![
            json!({"name": "X", "sort-name": "X", "locale": "en", "primary": false, "type": "Artist name"}),
            json!({"name": "Y", "sort-name": "Y", "primary": true, "type": "Artist name"}),
            json!({"name": "Z", "sort-name": "Z", "locale": null, "primary": true, "type": "Artist name"}),
        ];
        assert!(select_locale_alias(&aliases, &locales(&["en"])).is_none());
    }

    #[test]
    fn test_exact_locale_follows_preference_order() {
        let aliases = vec![
            alias("US Name", "en_US", "Artist name"),
            alias("GB Legal", "en_GB", "Legal Name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["en_GB", "en_US"])).unwrap();
        assert_eq!(chosen.name, "GB Legal");
    }

    #[test]
    fn test_same_locale_higher_score_wins() {
        let aliases = vec![
            alias("GB Legal", "en_GB", "Legal Name"),
            alias("GB Artist", "en_GB", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["en_GB", "en_US"])).unwrap();
        assert_eq!(chosen.name, "GB Artist");
    }

    #[test]
    fn test_same_locale_tie_keeps_first() {
        let aliases = vec![
            alias("First", "de", "Artist name"),
            alias("Second", "de", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["de"])).unwrap();
        assert_eq!(chosen.name, "First");
    }

    #[test]
    fn test_root_locale_prefers_reliable_type() {
        let aliases = vec![
            alias("GB Legal", "en_GB", "Legal Name"),
            alias("US Artist", "en_US", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["en"])).unwrap();
        assert_eq!(chosen.name, "US Artist");
    }

    #[test]
    fn test_root_locale_prefers_bare_language() {
        let aliases = vec![
            alias("Regional", "en_US", "Artist name"),
            alias("Bare", "en", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["en_CA"])).unwrap();
        assert_eq!(chosen.name, "Bare");
    }

    #[test]
    fn test_exact_match_beats_root_match_later_in_list() {
        let aliases = vec![
            alias("French", "fr", "Artist name"),
            alias("Japanese", "ja_JP", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["fr_CA", "ja_JP"])).unwrap();
        assert_eq!(chosen.name, "Japanese");
    }

    #[test]
    fn test_other_alias_type_still_usable_as_fallback() {
        let aliases = vec![alias("Search Hint", "en", "Search hint")];
        let chosen = select_locale_alias(&aliases, &locales(&["en_US"])).unwrap();
        assert_eq!(chosen.name, "Search Hint");
    }

    #[test]
    fn test_other_alias_type_never_outranks_artist_name() {
        let aliases = vec![
            alias("Search Hint", "en", "Search hint"),
            alias("Proper", "en", "Artist name"),
        ];
        let chosen = select_locale_alias(&aliases, &locales(&["en"])).unwrap();
        assert_eq!(chosen.name, "Proper");
    }

    #[test]
    fn test_scores() {
        let en = alias("a", "en", "Artist name");
        let en_us = alias("b", "en_US", "Legal Name");
        let en = LocaleAlias::from_node(&en).unwrap();
        let en_us = LocaleAlias::from_node(&en_us).unwrap();
        assert!((en.full_score() - 0.8).abs() < 1e-9);
        assert!((en.root_score() - 0.8).abs() < 1e-9);
        assert!((en_us.full_score() - 0.65).abs() < 1e-9);
        assert!((en_us.root_score() - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_script_exception_keeps_raw_name() {
        let mapper = Mapper::new(Settings {
            translate_artist_names: true,
            translate_artist_names_script_exception: true,
            script_exceptions: vec![ScriptException { script: Script::Cjk, weight: 50 }],
            ..Settings::default()
        });
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name, ArtistName::new("坂本龍一", "Sakamoto, Ryuichi"));
    }

    #[test]
    fn test_script_exception_below_threshold_translates() {
        let mapper = Mapper::new(Settings {
            translate_artist_names: true,
            translate_artist_names_script_exception: true,
            script_exceptions: vec![ScriptException { script: Script::Latin, weight: 50 }],
            ..Settings::default()
        });
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name.name, "Ryuichi Sakamoto");
    }

    #[test]
    fn test_script_exception_without_configured_scripts_translates() {
        let mapper = Mapper::new(Settings {
            translate_artist_names: true,
            translate_artist_names_script_exception: true,
            ..Settings::default()
        });
        let name = mapper.translate_artist(&sakamoto());
        assert_eq!(name.name, "Ryuichi Sakamoto");
    }
}
