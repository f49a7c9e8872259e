use labrep_core::models::report::{HeaderContext, Page, ReportDocument};

#[test]
fn header_lines_skip_missing_fields() {
    let header = HeaderContext {
        referred_by: Some("Dr. Rao".to_string()),
        doctor_name: None,
        collection_at: Some("2024-03-01 08:30".to_string()),
        report_date: None,
    };

    assert_eq!(
        header.lines(),
        vec![
            ("Referred By", "Dr. Rao"),
            ("Collected On", "2024-03-01 08:30"),
        ]
    );
    assert!(!header.is_empty());
    assert!(HeaderContext::default().is_empty());
}

#[test]
fn page_serializes_with_camel_case_fields() {
    let page = Page {
        page_number: 1,
        page_count: 1,
        show_watermark: true,
        ..Default::default()
    };

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["pageNumber"], 1);
    assert_eq!(value["showWatermark"], true);
    assert!(value["headerContext"]["referredBy"].is_null());
}

#[test]
fn empty_document_has_no_rows() {
    assert_eq!(ReportDocument::default().rows().count(), 0);
}
