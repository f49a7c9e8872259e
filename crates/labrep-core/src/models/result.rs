use serde::Deserialize;

use crate::de::{opt_text, opt_timestamp, strict_true};

use super::flag::{Flag, opt_flag};
use super::range::RangeSpec;

/// A recorded result value for one parameter of one test.
///
/// `subtest_id` is absent for results entered against a test as a whole
/// (keyed as `custom`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    #[serde(default, deserialize_with = "opt_text")]
    pub test_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub subtest_id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub flag: Option<Flag>,
    #[serde(default)]
    pub reference_range: Option<RangeSpec>,
    #[serde(default)]
    pub normal_range: Option<RangeSpec>,
    #[serde(default, deserialize_with = "opt_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "strict_true")]
    pub is_abnormal: bool,
    /// Last edit time, when the record service provides one.
    #[serde(default, deserialize_with = "opt_timestamp")]
    pub updated_at: Option<jiff::Timestamp>,
}
