//! Text helpers used while mapping: sort-name transliteration, duration
//! formatting, and Amazon product URL parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::script::Script;

/// Separators tried, in order, when a sort name credits several people.
const SORTNAME_SEPARATORS: &[&str] = &[" & ", "; ", " and ", " vs. ", " with ", " y "];

static AMAZON_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www.)?(?P<host>.*?)(?::[0-9]+)?/.*/(?P<asin>[0-9B][0-9A-Z]{9})(?:[^0-9A-Z]|$)",
    )
    .expect("amazon URL pattern is valid")
});

/// Host and ASIN extracted from an Amazon product URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmazonUrl {
    pub host: String,
    pub asin: String,
}

/// Parse an Amazon product URL, returning `None` if it carries no ASIN.
pub fn parse_amazon_url(url: &str) -> Option<AmazonUrl> {
    let caps = AMAZON_URL.captures(url)?;
    Some(AmazonUrl {
        host: caps.name("host")?.as_str().to_string(),
        asin: caps.name("asin")?.as_str().to_string(),
    })
}

fn reverse_sortname(sortname: &str) -> String {
    let chunks: Vec<&str> = sortname.split(',').map(str::trim).collect();
    match chunks.as_slice() {
        [last, first] => format!("{first} {last}"),
        [a, b, c] => format!("{c} {b} {a}"),
        [a, b, c, d] => format!("{b} {a}, {d} {c}"),
        _ => sortname.trim().to_string(),
    }
}

/// Derive a readable name from a sort name when `name` is not in Latin
/// script.
///
/// "Sakamoto, Ryuichi" becomes "Ryuichi Sakamoto". Names made only of Latin
/// letters (or no letters at all) are returned unchanged.
pub fn translate_from_sortname(name: &str, sortname: &str) -> String {
    let non_latin = name
        .chars()
        .any(|c| Script::of(c).is_some_and(|script| script != Script::Latin));
    if !non_latin {
        return name.to_string();
    }
    let separator = SORTNAME_SEPARATORS
        .iter()
        .copied()
        .find(|sep| sortname.contains(sep));
    match separator {
        Some(sep) => sortname
            .split(sep)
            .map(reverse_sortname)
            .collect::<Vec<_>>()
            .join(sep),
        None => reverse_sortname(sortname),
    }
}

/// Format a duration in milliseconds as `m:ss` or `h:mm:ss`.
///
/// Seconds are rounded half to even. A zero duration renders as `?:??`.
pub fn format_time(ms: u64) -> String {
    if ms == 0 {
        return "?:??".to_string();
    }
    let mut seconds = ms / 1000;
    let remainder = ms % 1000;
    if remainder > 500 || (remainder == 500 && seconds % 2 == 1) {
        seconds += 1;
    }
    if seconds < 3600 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else {
        format!(
            "{}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "?:??");
        assert_eq!(format_time(562_000), "9:22");
        assert_eq!(format_time(59_499), "0:59");
        assert_eq!(format_time(3_600_000), "1:00:00");
        assert_eq!(format_time(3_723_000), "1:02:03");
    }

    #[test]
    fn test_format_time_rounds_half_to_even() {
        assert_eq!(format_time(500), "0:00");
        assert_eq!(format_time(1_500), "0:02");
        assert_eq!(format_time(2_500), "0:02");
        assert_eq!(format_time(2_501), "0:03");
    }

    #[test]
    fn test_translate_latin_name_unchanged() {
        assert_eq!(translate_from_sortname("Björk", "Björk"), "Björk");
        assert_eq!(translate_from_sortname("Miles Davis", "Davis, Miles"), "Miles Davis");
    }

    #[test]
    fn test_translate_ignores_letter_numerals() {
        assert_eq!(translate_from_sortname("Louis Ⅻ", "Ⅻ, Louis"), "Louis Ⅻ");
        assert_eq!(translate_from_sortname("Ⓐ Band", "Band, Ⓐ"), "Ⓐ Band");
    }

    #[test]
    fn test_translate_reverses_sortname() {
        assert_eq!(
            translate_from_sortname("坂本龍一", "Sakamoto, Ryuichi"),
            "Ryuichi Sakamoto"
        );
    }

    #[test]
    fn test_translate_multiple_people() {
        assert_eq!(
            translate_from_sortname("Иванов и Петров", "Ivanov, Ivan & Petrov, Petr"),
            "Ivan Ivanov & Petr Petrov"
        );
    }

    #[test]
    fn test_reverse_sortname_shapes() {
        assert_eq!(reverse_sortname("Beethoven, Ludwig van"), "Ludwig van Beethoven");
        assert_eq!(reverse_sortname("c, b, a"), "a b c");
        assert_eq!(reverse_sortname("b, a, d, c"), "a b, c d");
        assert_eq!(reverse_sortname(" Kino "), "Kino");
    }

    #[test]
    fn test_parse_amazon_url() {
        let parsed = parse_amazon_url("https://www.amazon.co.jp/gp/product/B000002ADT").unwrap();
        assert_eq!(parsed.host, "amazon.co.jp");
        assert_eq!(parsed.asin, "B000002ADT");

        let parsed = parse_amazon_url("http://amazon.com:8080/dp/0123456789/ref=x").unwrap();
        assert_eq!(parsed.host, "amazon.com");
        assert_eq!(parsed.asin, "0123456789");
    }

    #[test]
    fn test_parse_amazon_url_without_asin() {
        assert!(parse_amazon_url("https://www.amazon.com/").is_none());
        assert!(parse_amazon_url("not a url").is_none());
    }
}
