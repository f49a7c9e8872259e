use serde_json::Value;

use crate::de::scalar_text;

/// Highlight tiers a result can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Green,
    Yellow,
    Red,
}

impl HighlightColor {
    /// Parse a lower-cased color name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "green" => Some(HighlightColor::Green),
            "yellow" => Some(HighlightColor::Yellow),
            "red" => Some(HighlightColor::Red),
            _ => None,
        }
    }
}

/// Clinical interpretation carried by a semantic flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Normal,
    Low,
    High,
    Critical,
}

/// A result flag, decoded once from the free-text field on a result record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `bold`
    Bold,
    /// `highlight` or `highlight:<color>`. An unknown or missing color is
    /// kept as `None` so it still suppresses the abnormal fallback.
    Highlight(Option<HighlightColor>),
    /// A bare color name.
    Color(HighlightColor),
    Semantic(Severity),
    /// Any other non-empty text, lower-cased.
    Unrecognized(String),
}

impl Flag {
    /// Decode a raw flag. Matching is case-insensitive; blank text is no flag.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let flag = match normalized.as_str() {
            "bold" => Flag::Bold,
            s if s.starts_with("highlight") => {
                let color = s.split(':').nth(1).map(str::trim);
                Flag::Highlight(color.and_then(HighlightColor::parse))
            }
            "normal" => Flag::Semantic(Severity::Normal),
            "low" => Flag::Semantic(Severity::Low),
            "high" => Flag::Semantic(Severity::High),
            "critical" => Flag::Semantic(Severity::Critical),
            s => match HighlightColor::parse(s) {
                Some(color) => Flag::Color(color),
                None => Flag::Unrecognized(s.to_string()),
            },
        };
        Some(flag)
    }

    /// Decode a flag from any JSON value. Non-string values are stringified.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(_) | Value::Object(_) => Self::parse(&value.to_string()),
            scalar => scalar_text(scalar).and_then(|text| Self::parse(&text)),
        }
    }
}

pub(crate) fn opt_flag<'de, D>(deserializer: D) -> Result<Option<Flag>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(Flag::from_value(&value))
}
