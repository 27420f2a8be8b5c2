//! Release-level summaries: countries, event dates, labels, and media
//! formats.

use serde_json::Value;

use crate::node::{array_field, str_field};

/// First ISO 3166-1 code of a release event's area.
///
/// Any missing or null link along `area.iso-3166-1-codes[0]` means the
/// event has no country.
fn event_country(event: &Value) -> Option<&str> {
    event
        .get("area")?
        .get("iso-3166-1-codes")?
        .get(0)?
        .as_str()
}

/// Countries of a release's events, in event order, skipping events
/// without a country.
pub fn countries(release: &Value) -> Vec<String> {
    array_field(release, "release-events")
        .iter()
        .filter_map(event_country)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect()
}

/// Dates and countries of a release's events as two aligned lists.
///
/// Each event contributes one entry to both lists; a missing date or
/// country is an empty string.
pub fn release_dates_and_countries(release: &Value) -> (Vec<String>, Vec<String>) {
    array_field(release, "release-events")
        .iter()
        .map(|event| {
            (
                str_field(event, "date").unwrap_or_default().to_string(),
                event_country(event).unwrap_or_default().to_string(),
            )
        })
        .unzip()
}

/// Label names and catalog numbers from `label-info` entries, each
/// deduplicated in first-seen order.
pub fn label_info(label_infos: &[Value]) -> (Vec<String>, Vec<String>) {
    let mut labels: Vec<String> = Vec::new();
    let mut catalog_numbers: Vec<String> = Vec::new();
    for info in label_infos {
        let label = info.get("label").and_then(|label| str_field(label, "name"));
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        if let Some(catno) = str_field(info, "catalog-number").filter(|c| !c.is_empty()) {
            if !catalog_numbers.iter().any(|c| c == catno) {
                catalog_numbers.push(catno.to_string());
            }
        }
    }
    (labels, catalog_numbers)
}

/// Summarise medium formats, e.g. `"2×CD + DVD-Video"`.
///
/// Formats are listed in first-seen order; a missing format is shown as
/// `"(unknown)"`.
pub fn media_formats(media: &[Value]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for medium in media {
        let format = str_field(medium, "format")
            .filter(|f| !f.is_empty())
            .unwrap_or("(unknown)");
        match counts.iter_mut().find(|(f, _)| *f == format) {
            Some((_, n)) => *n += 1,
            None => counts.push((format, 1)),
        }
    }
    counts
        .into_iter()
        .map(|(format, n)| {
            if n > 1 {
                format!("{n}×{format}")
            } else {
                format.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
