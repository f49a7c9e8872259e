//! Reference range text for a patient.
//!
//! Structured ranges pick the bounds for the patient's demographic group.
//! When that group has no bounds, every populated group is listed instead
//! in [`DemographicGroup::ENUMERATION_ORDER`].

use labrep_core::models::patient::Demographics;
use labrep_core::models::range::{DemographicGroup, RangeBound, RangeSpec, StructuredRange};

/// Age below which a patient is an infant, in years.
pub const INFANT_AGE_LIMIT: f64 = 1.0;

/// Age below which a patient is a child, in years.
pub const CHILD_AGE_LIMIT: f64 = 18.0;

/// Demographic group whose bounds apply to the patient.
///
/// Female gender wins over age. Unknown gender or age falls back to male.
pub fn demographic_group(demographics: Demographics<'_>) -> DemographicGroup {
    let is_female = demographics
        .gender
        .and_then(|g| g.trim().chars().next())
        .is_some_and(|c| c.eq_ignore_ascii_case(&'f'));

    if is_female {
        return DemographicGroup::Female;
    }
    match demographics.age {
        Some(age) if age < INFANT_AGE_LIMIT => DemographicGroup::Infant,
        Some(age) if age < CHILD_AGE_LIMIT => DemographicGroup::Child,
        _ => DemographicGroup::Male,
    }
}

/// Render a reference range for display. Absent and unrecognized ranges
/// render as an empty string.
pub fn resolve(range: Option<&RangeSpec>, demographics: Demographics<'_>) -> String {
    match range {
        None | Some(RangeSpec::Unrecognized) => String::new(),
        Some(RangeSpec::PlainText(text)) => text.clone(),
        Some(RangeSpec::Structured(structured)) => resolve_structured(structured, demographics),
        Some(RangeSpec::Legacy { adult, child }) => {
            resolve_legacy(adult.as_deref(), child.as_deref())
        }
    }
}

fn resolve_structured(range: &StructuredRange, demographics: Demographics<'_>) -> String {
    let group = demographic_group(demographics);
    if let Some(bound) = range.bound(group).filter(|b| b.is_populated()) {
        return format_bound(group, bound);
    }

    DemographicGroup::ENUMERATION_ORDER
        .iter()
        .filter_map(|g| {
            range
                .bound(*g)
                .filter(|b| b.is_populated())
                .map(|b| format_bound(*g, b))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_bound(group: DemographicGroup, bound: &RangeBound) -> String {
    let min = bound.min.as_deref().unwrap_or_default();
    let text = match bound.max.as_deref() {
        Some(max) => format!("{}: {min} - {max}", group.label()),
        None => format!("{}: {min}", group.label()),
    };
    text.trim().to_string()
}

fn resolve_legacy(adult: Option<&str>, child: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(adult) = adult {
        parts.push(format!("Adult: {adult}"));
    }
    if let Some(child) = child {
        parts.push(format!("Child: {child}"));
    }
    parts.join(", ")
}
