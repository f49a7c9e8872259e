use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::organization::Organization;

/// One fully resolved parameter line of a test block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultRow {
    pub display_name: String,
    pub value: String,
    pub unit: String,
    pub reference_range_text: String,
    pub remarks: String,
    /// CSS class for the highlight tier, empty when none applies.
    pub highlight_class: String,
    /// CSS class for bold emphasis, empty when none applies.
    pub bold_class: String,
}

/// A test and its parameter rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TestBlock {
    pub test_id: String,
    pub title: String,
    pub notes: String,
    pub status: String,
    pub rows: Vec<ResultRow>,
}

/// Tests sharing a category label. Never split across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub tests: Vec<TestBlock>,
}

/// Patient header repeated on every page. Blank fields are `None` and are
/// not printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderContext {
    pub referred_by: Option<String>,
    pub doctor_name: Option<String>,
    pub collection_at: Option<String>,
    pub report_date: Option<String>,
}

impl HeaderContext {
    /// The populated header lines in print order, as `(label, value)`.
    pub fn lines(&self) -> Vec<(&'static str, &str)> {
        [
            ("Referred By", self.referred_by.as_deref()),
            ("Doctor", self.doctor_name.as_deref()),
            ("Collected On", self.collection_at.as_deref()),
            ("Report Date", self.report_date.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// One printed page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Page {
    /// 1-based position within the report.
    pub page_number: u32,
    pub page_count: u32,
    pub categories: Vec<Category>,
    pub header_context: HeaderContext,
    pub show_watermark: bool,
}

/// The complete report handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportDocument {
    pub organization: Organization,
    pub pages: Vec<Page>,
}

impl ReportDocument {
    /// Every row in print order, across pages.
    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.pages
            .iter()
            .flat_map(|p| &p.categories)
            .flat_map(|c| &c.tests)
            .flat_map(|t| &t.rows)
    }
}
