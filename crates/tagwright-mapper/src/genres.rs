//! Genre aggregation from `genres`, `tags`, `user-genres`, and `user-tags`.

use serde_json::Value;
use tagwright_core::GenreSink;

use crate::node::{array_field, str_field};

/// Report every genre source of `node` to `sink`.
///
/// Sources are read in a fixed order: `genres`, `tags`, `user-genres`,
/// `user-tags`. Community genres and tags carry their vote count; the
/// user's own genres and tags weigh 1 each.
pub fn add_genres_from_node<S: GenreSink + ?Sized>(node: &Value, sink: &mut S) {
    add_genres(array_field(node, "genres"), sink);
    add_genres(array_field(node, "tags"), sink);
    add_user_genres(array_field(node, "user-genres"), sink);
    add_user_genres(array_field(node, "user-tags"), sink);
}

/// Report counted genre or tag entries (`{name, count}`).
///
/// An entry without a usable count weighs 1.
pub fn add_genres<S: GenreSink + ?Sized>(tags: &[Value], sink: &mut S) {
    for tag in tags {
        let Some(name) = str_field(tag, "name").filter(|n| !n.is_empty()) else {
            continue;
        };
        let count = tag
            .get("count")
            .and_then(Value::as_u64)
            .map(|c| u32::try_from(c).unwrap_or(u32::MAX))
            .unwrap_or(1);
        sink.add_genre(name, count);
    }
}

/// Report the user's own genre or tag entries, each with weight 1.
pub fn add_user_genres<S: GenreSink + ?Sized>(tags: &[Value], sink: &mut S) {
    for name in tags
        .iter()
        .filter_map(|tag| str_field(tag, "name"))
        .filter(|n| !n.is_empty())
    {
        sink.add_genre(name, 1);
    }
}
