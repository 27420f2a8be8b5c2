//! Search-result relevance scores.

use serde_json::Value;

/// Relevance score of a search result as a share in `0.0..=1.0`.
///
/// The web service reports scores as integers from 0 to 100, sometimes
/// encoded as strings. A missing or unparsable score counts as a perfect
/// match (`1.0`).
pub fn score(node: &Value) -> f64 {
    let raw = match node.get("score") {
        None => return 1.0,
        #[allow(clippy::cast_possible_truncation)]
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };
    raw.map(|n| n as f64 / 100.0).unwrap_or(1.0)
}
