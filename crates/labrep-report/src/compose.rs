use labrep_core::models::patient::Patient;
use labrep_core::models::report::{Category, Page, ReportDocument};
use labrep_core::models::result::LabResult;
use labrep_core::models::snapshot::ReportSnapshot;
use labrep_core::models::test_order::EnrichedTest;

use crate::grouping::group;
use crate::index::ResultIndex;
use crate::options::{LayoutMode, ReportOptions};
use crate::paginate::{header_context, paginate};
use crate::rows::compose_block;

/// Compose the printed pages of a patient's lab report.
///
/// Results are indexed once, tests are grouped by category, every subtest
/// is resolved into a row and the categories are paginated by `layout`.
/// A missing patient composes with an empty header and default
/// demographics.
pub fn compose(
    patient: Option<&Patient>,
    tests: &[EnrichedTest],
    results: &[LabResult],
    layout: LayoutMode,
    show_watermark: bool,
) -> Vec<Page> {
    let index = ResultIndex::build(results);
    let demographics = patient.map(Patient::demographics).unwrap_or_default();

    let categories: Vec<Category> = group(tests)
        .into_iter()
        .map(|raw| Category {
            name: raw.name.to_string(),
            tests: raw
                .tests
                .iter()
                .map(|block| compose_block(block, &index, demographics))
                .collect(),
        })
        .collect();
    let category_count = categories.len();

    let pages = paginate(
        categories,
        layout,
        &header_context(patient),
        show_watermark,
    );

    tracing::debug!(
        tests = tests.len(),
        results = results.len(),
        indexed = index.len(),
        categories = category_count,
        pages = pages.len(),
        "report composed"
    );

    pages
}

/// Compose pages for a record-service snapshot with the lab's settings.
pub fn compose_snapshot(snapshot: &ReportSnapshot, options: &ReportOptions) -> Vec<Page> {
    compose(
        snapshot.patient.as_ref(),
        &snapshot.tests,
        &snapshot.results,
        options.layout_mode,
        options.show_watermark,
    )
}

/// Compose the full document: pages plus the lab's branding.
pub fn compose_document(snapshot: &ReportSnapshot, options: &ReportOptions) -> ReportDocument {
    ReportDocument {
        organization: options.organization.clone(),
        pages: compose_snapshot(snapshot, options),
    }
}
