use serde::Deserialize;

use crate::de::vec_or_empty;
use crate::error::CoreError;

use super::patient::Patient;
use super::result::LabResult;
use super::test_order::EnrichedTest;

/// Everything the record service returns for one patient report:
/// `{ patient, tests, results }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub tests: Vec<EnrichedTest>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub results: Vec<LabResult>,
}

impl ReportSnapshot {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::InvalidSnapshot(
                "expected a JSON object with patient, tests and results".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}
