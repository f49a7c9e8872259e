use serde::Deserialize;
use serde_json::{Map, Value};

use crate::de::scalar_text;

/// A demographic bucket a structured reference range can be keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicGroup {
    Male,
    Female,
    Child,
    Infant,
}

impl DemographicGroup {
    /// Order in which populated groups are listed when the patient's own
    /// group has no bounds. Changing it changes printed reports.
    pub const ENUMERATION_ORDER: [DemographicGroup; 4] = [
        DemographicGroup::Male,
        DemographicGroup::Female,
        DemographicGroup::Child,
        DemographicGroup::Infant,
    ];

    /// JSON key used for this group in a structured range.
    pub fn key(self) -> &'static str {
        match self {
            DemographicGroup::Male => "male",
            DemographicGroup::Female => "female",
            DemographicGroup::Child => "child",
            DemographicGroup::Infant => "infant",
        }
    }

    /// Capitalized label printed in front of the bounds.
    pub fn label(self) -> &'static str {
        match self {
            DemographicGroup::Male => "Male",
            DemographicGroup::Female => "Female",
            DemographicGroup::Child => "Child",
            DemographicGroup::Infant => "Infant",
        }
    }
}

/// Lower/upper bound of one demographic group. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeBound {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeBound {
    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            min: object.get("min").and_then(bound_text),
            max: object.get("max").and_then(bound_text),
        }
    }

    /// True when at least one side carries a value.
    pub fn is_populated(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Per-demographic bounds, e.g. `{"male": {"min": 13, "max": 17}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredRange {
    pub male: Option<RangeBound>,
    pub female: Option<RangeBound>,
    pub child: Option<RangeBound>,
    pub infant: Option<RangeBound>,
}

impl StructuredRange {
    pub fn bound(&self, group: DemographicGroup) -> Option<&RangeBound> {
        match group {
            DemographicGroup::Male => self.male.as_ref(),
            DemographicGroup::Female => self.female.as_ref(),
            DemographicGroup::Child => self.child.as_ref(),
            DemographicGroup::Infant => self.infant.as_ref(),
        }
    }
}

/// A reference range as stored on a parameter definition or a result.
///
/// Decoded once from its loose JSON form:
/// - a string is free text, printed verbatim;
/// - an object with at least one of `male`/`female`/`child`/`infant` holding
///   an object is [`RangeSpec::Structured`];
/// - any other object with a scalar `adult` or `child` is [`RangeSpec::Legacy`];
/// - everything else is [`RangeSpec::Unrecognized`].
///
/// A JSON `null` is "no range" and is represented by `Option::None` on the
/// owning field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum RangeSpec {
    PlainText(String),
    Structured(StructuredRange),
    Legacy {
        adult: Option<String>,
        child: Option<String>,
    },
    Unrecognized,
}

impl From<Value> for RangeSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => RangeSpec::PlainText(text),
            Value::Object(object) => decode_object(&object),
            _ => RangeSpec::Unrecognized,
        }
    }
}

fn decode_object(object: &Map<String, Value>) -> RangeSpec {
    let group = |g: DemographicGroup| match object.get(g.key()) {
        Some(Value::Object(inner)) => Some(RangeBound::from_object(inner)),
        _ => None,
    };

    let structured = StructuredRange {
        male: group(DemographicGroup::Male),
        female: group(DemographicGroup::Female),
        child: group(DemographicGroup::Child),
        infant: group(DemographicGroup::Infant),
    };
    if DemographicGroup::ENUMERATION_ORDER
        .iter()
        .any(|g| structured.bound(*g).is_some())
    {
        return RangeSpec::Structured(structured);
    }

    let adult = object.get("adult").and_then(scalar_text);
    let child = object.get("child").and_then(scalar_text);
    if adult.is_some() || child.is_some() {
        return RangeSpec::Legacy { adult, child };
    }

    RangeSpec::Unrecognized
}

// Blank strings count as "no bound"; numbers keep their JSON spelling.
fn bound_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
