use serde::Deserialize;

use crate::de::{opt_number, opt_text};

/// The patient record as returned by the record service.
///
/// Only the fields the report needs are decoded; everything else on the
/// record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default, deserialize_with = "opt_text")]
    pub gender: Option<String>,
    /// Age in years. Numeric strings are coerced; anything else is unknown.
    #[serde(default, deserialize_with = "opt_number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "opt_text")]
    pub referred_by: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub examined_by: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub doctor_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub collection_at: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub report_date: Option<String>,
}

impl Patient {
    pub fn demographics(&self) -> Demographics<'_> {
        Demographics {
            gender: self.gender.as_deref(),
            age: self.age,
        }
    }

    /// The examining doctor, falling back to `doctorName`.
    pub fn attending_doctor(&self) -> Option<&str> {
        self.examined_by
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.doctor_name.as_deref())
    }
}

/// The slice of a patient that drives reference-range selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Demographics<'a> {
    pub gender: Option<&'a str>,
    pub age: Option<f64>,
}
