//! Lenient field decoders for snapshot JSON.
//!
//! The record service is loosely typed: ids arrive as strings or numbers,
//! ages as numbers or numeric strings, and list fields may be `null`. These
//! helpers fold every such shape into one Rust type at the boundary so the
//! composition code never re-inspects raw JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar the way a template literal would. Objects and arrays are
/// not scalars and yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Optional text field accepting strings, numbers and booleans.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

/// Optional numeric field accepting numbers and numeric strings.
///
/// Anything that does not parse as a finite number decodes to `None`.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

/// Boolean that is only `true` for a literal JSON `true`.
pub fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// List field where `null` means empty.
pub fn vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 timestamp; unparseable values are dropped rather than rejected.
pub fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<jiff::Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().parse::<jiff::Timestamp>().ok(),
        _ => None,
    })
}
