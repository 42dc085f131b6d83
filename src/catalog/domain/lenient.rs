//! Lenient field decoders shared by the entity types.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Text that may arrive as a JSON string or number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawText {
    Text(String),
    Number(serde_json::Number),
}

impl RawText {
    pub(super) fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Treats `null` like a missing field.
pub(super) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes an optional reference where `null` and `""` both mean absent.
pub(super) fn optional_ref<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(raw
        .map(RawText::into_string)
        .filter(|value| !value.trim().is_empty())
        .map(T::from))
}

/// Decodes an amount from a JSON number or a numeric string.
pub(super) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawAmount::Number(value)) => Ok(value),
        Some(RawAmount::Text(text)) if text.trim().is_empty() => Ok(0.0),
        Some(RawAmount::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount '{text}'"))),
    }
}

/// Decodes an epoch timestamp from an integer, a float or a numeric string.
///
/// Fractions are truncated. Any other value reads as absent rather than
/// failing the surrounding entity.
pub(super) fn epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(epoch_value))
}

fn epoch_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number)),
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "epoch values are whole numbers well inside the i64 range"
)]
fn whole_number(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

/// Decodes a flag from a boolean or a `"true"`/`"false"` string.
///
/// Any other value reads as `false`.
pub(super) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Bool(value)) => value,
        Some(serde_json::Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}
