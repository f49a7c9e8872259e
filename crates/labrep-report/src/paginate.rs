use labrep_core::models::patient::Patient;
use labrep_core::models::report::{Category, HeaderContext, Page};

use crate::options::LayoutMode;

/// Keep a header value only if it has printable content.
fn has_value(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Build the per-page header from the patient record. A missing patient
/// yields an empty header.
pub fn header_context(patient: Option<&Patient>) -> HeaderContext {
    let Some(patient) = patient else {
        return HeaderContext::default();
    };

    HeaderContext {
        referred_by: has_value(patient.referred_by.as_deref()),
        doctor_name: has_value(patient.attending_doctor()),
        collection_at: has_value(patient.collection_at.as_deref()),
        report_date: has_value(patient.report_date.as_deref()),
    }
}

/// Split categories into pages of at most `layout.categories_per_page()`.
///
/// Categories are never split or reordered; each page repeats the same
/// header and watermark setting.
pub fn paginate(
    categories: Vec<Category>,
    layout: LayoutMode,
    header: &HeaderContext,
    show_watermark: bool,
) -> Vec<Page> {
    let per_page = layout.categories_per_page();
    let page_count = categories.len().div_ceil(per_page) as u32;

    let mut pages = Vec::with_capacity(page_count as usize);
    let mut remaining = categories.into_iter().peekable();
    while remaining.peek().is_some() {
        let chunk: Vec<Category> = remaining.by_ref().take(per_page).collect();
        pages.push(Page {
            page_number: pages.len() as u32 + 1,
            page_count,
            categories: chunk,
            header_context: header.clone(),
            show_watermark,
        });
    }

    pages
}
