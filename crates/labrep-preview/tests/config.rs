use std::path::PathBuf;

use labrep_core::models::organization::Organization;
use labrep_preview::config::{load_config_from, save_config_in};
use labrep_preview::snapshot::{PreviewOutput, load_snapshot};
use labrep_report::{LayoutMode, ReportOptions};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "labrep-preview-{name}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn saved_options_load_back() {
    let dir = scratch_dir("roundtrip");
    let options = ReportOptions {
        layout_mode: LayoutMode::Compact,
        show_watermark: true,
        organization: Organization {
            name: Some("City Diagnostics".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let path = save_config_in(&dir, &options).unwrap();
    assert!(!dir.join("options.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.layout_mode, LayoutMode::Compact);
    assert!(loaded.show_watermark);
    assert_eq!(loaded.organization.name.as_deref(), Some("City Diagnostics"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn saved_options_are_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir("perms");
    let path = save_config_in(&dir, &ReportOptions::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_options_file_is_an_error() {
    let dir = scratch_dir("missing");
    let err = load_config_from(&dir.join("options.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read options"));
}

#[test]
fn snapshot_file_composes_into_preview_output() {
    let dir = scratch_dir("snapshot");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("snapshot.json");
    std::fs::write(
        &path,
        r#"{
            "patient": { "gender": "male", "age": 45, "referredBy": "Dr. Rao" },
            "tests": [{ "testId": "t1", "category": "Hematology", "selectedSubtests": [
                { "subtestId": "s1", "parameter": { "name": "Hb", "unit": "g/dL" } }
            ]}],
            "results": [{ "testId": "t1", "subtestId": "s1", "value": "15" }]
        }"#,
    )
    .unwrap();

    let snapshot = load_snapshot(&path).unwrap();
    let document = labrep_report::compose_document(&snapshot, &ReportOptions::default());
    let output = serde_json::to_value(PreviewOutput::new(document)).unwrap();

    assert!(output["generatedAt"].is_string());
    let page = &output["document"]["pages"][0];
    assert_eq!(page["headerContext"]["referredBy"], "Dr. Rao");
    assert_eq!(page["categories"][0]["tests"][0]["rows"][0]["value"], "15");

    std::fs::remove_dir_all(&dir).unwrap();
}
