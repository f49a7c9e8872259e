use serde::Deserialize;

use crate::de::{opt_text, vec_or_empty};

use super::range::RangeSpec;

/// A test ordered for the patient, enriched with its selected parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTest {
    #[serde(default, deserialize_with = "opt_text")]
    pub test_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub test_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub selected_subtests: Vec<Subtest>,
}

/// One parameter row of a test. Ad-hoc rows added at result entry carry a
/// `tempId` instead of a `subtestId`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtest {
    #[serde(default, deserialize_with = "opt_text")]
    pub subtest_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub temp_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub subtest_name: Option<String>,
    #[serde(default)]
    pub parameter: Option<Parameter>,
}

impl Subtest {
    /// Identity used to join this row to its result: `subtestId`, then
    /// `tempId`. `None` means the row is keyed as custom.
    pub fn lookup_id(&self) -> Option<&str> {
        non_blank(self.subtest_id.as_deref()).or(non_blank(self.temp_id.as_deref()))
    }

    /// Printed name of the row, from the row itself or its parameter.
    pub fn display_name(&self) -> &str {
        non_blank(self.subtest_name.as_deref())
            .or_else(|| {
                self.parameter
                    .as_ref()
                    .and_then(|p| non_blank(p.name.as_deref()))
            })
            .unwrap_or_default()
    }
}

/// Static definition of a measured parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit: Option<String>,
    #[serde(default)]
    pub reference_range: Option<RangeSpec>,
    #[serde(default)]
    pub normal_range: Option<RangeSpec>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
