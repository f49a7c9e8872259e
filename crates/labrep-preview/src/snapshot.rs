use std::path::Path;

use labrep_core::models::report::ReportDocument;
use labrep_core::models::snapshot::ReportSnapshot;
use serde::Serialize;

/// Read a `{ patient, tests, results }` snapshot exported from the record
/// service.
pub fn load_snapshot(path: &Path) -> eyre::Result<ReportSnapshot> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read snapshot at {}: {e}", path.display()))?;
    let snapshot = ReportSnapshot::from_json(&contents)?;

    tracing::info!(
        path = %path.display(),
        tests = snapshot.tests.len(),
        results = snapshot.results.len(),
        has_patient = snapshot.patient.is_some(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// What the preview prints: the document and when it was composed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutput {
    pub generated_at: jiff::Timestamp,
    pub document: ReportDocument,
}

impl PreviewOutput {
    pub fn new(document: ReportDocument) -> Self {
        Self {
            generated_at: jiff::Timestamp::now(),
            document,
        }
    }
}
