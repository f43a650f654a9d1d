use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value for a text column. Strings pass through verbatim,
/// `null` maps to `None` and everything else is kept as compact JSON text.
/// The key itself stays mandatory.
pub fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
