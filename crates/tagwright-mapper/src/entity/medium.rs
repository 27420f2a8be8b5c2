use serde_json::Value;
use tagwright_core::Metadata;

use super::renamed;
use crate::node::{entries, is_skippable, tag_values};

const MEDIUM_TO_METADATA: &[(&str, &str)] = &[
    ("format", "media"),
    ("position", "discnumber"),
    ("title", "discsubtitle"),
    ("track-count", "totaltracks"),
];

/// Map a medium node: format, disc number, disc subtitle, track count.
pub fn medium_to_metadata(node: &Value, m: &mut Metadata) {
    for (key, value) in entries(node) {
        if is_skippable(value) {
            continue;
        }
        // Media carry no fields beyond the rename table.
        if let Some(tag) = renamed(MEDIUM_TO_METADATA, key) {
            m.set(tag, tag_values(value));
        }
    }
}
