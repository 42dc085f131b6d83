//! Tolerant decoding of list envelopes and error bodies.
//!
//! List endpoints may answer with a bare array, an object wrapping the array
//! under the resource key, or an object wrapping it under `data`. Every
//! consumer goes through [`decode_collection`] so all three shapes yield the
//! same collection.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Decodes a list response into typed items.
///
/// The resource key is preferred over `data`. Any other shape yields an
/// empty collection. Elements that fail to decode are skipped.
pub fn decode_collection<T>(body: Value, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove(key), map.remove("data")) {
            (Some(Value::Array(items)), _) | (_, Some(Value::Array(items))) => items,
            _ => {
                debug!(key, "list response carried no recognised collection");
                Vec::new()
            }
        },
        other => {
            debug!(key, kind = value_kind(&other), "list response was not a collection");
            Vec::new()
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(key, error = %err, "skipping malformed collection element");
                None
            }
        })
        .collect()
}

/// Reads `total.<key>` from a list response, when present.
#[must_use]
pub fn collection_total(body: &Value, key: &str) -> Option<u64> {
    body.get("total")
        .and_then(|total| total.get(key))
        .and_then(Value::as_u64)
}

/// Extracts an operator-facing message from an error response body.
///
/// Looks at `message`, then `error` (string or object with `message`), then
/// falls back to the trimmed raw text. Returns `None` for blank bodies.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(parsed) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_owned());
    };

    let from_message = parsed.get("message").and_then(Value::as_str);
    let from_error = parsed.get("error").and_then(|error| {
        error
            .as_str()
            .or_else(|| error.get("message").and_then(Value::as_str))
    });

    from_message
        .or(from_error)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
        .or_else(|| match &parsed {
            Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
            Value::Object(_) | Value::Array(_) | Value::Null => None,
            _ => Some(trimmed.to_owned()),
        })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
