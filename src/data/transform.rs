use serde_json::Value as JsonValue;

use super::model::{render, Payload};

/// Lowercase a payload.
///
/// * mapping  → keys lowercased, every value replaced by its lowercased
///   rendering (nested objects/arrays become flat text, they are **not**
///   walked)
/// * sequence → each element transformed on its own, so mappings inside a
///   list keep their structure
/// * anything else is returned unchanged
pub fn transform(value: &Payload) -> Payload {
    match value {
        JsonValue::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(key, value)| (key.to_lowercase(), JsonValue::String(render(value).to_lowercase())))
                .collect(),
        ),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(transform).collect()),
        other => other.clone(),
    }
}
