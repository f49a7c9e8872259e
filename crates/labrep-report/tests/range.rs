use labrep_core::models::patient::Demographics;
use labrep_core::models::range::{DemographicGroup, RangeSpec};
use labrep_report::range::{demographic_group, resolve};
use serde_json::json;

fn patient(gender: &str, age: f64) -> Demographics<'_> {
    Demographics {
        gender: Some(gender),
        age: Some(age),
    }
}

fn spec(value: serde_json::Value) -> RangeSpec {
    RangeSpec::from(value)
}

#[test]
fn missing_range_is_empty() {
    assert_eq!(resolve(None, patient("Male", 30.0)), "");
}

#[test]
fn plain_text_is_verbatim() {
    let range = spec(json!("  < 200 mg/dL "));
    assert_eq!(resolve(Some(&range), patient("Male", 30.0)), "  < 200 mg/dL ");
}

#[test]
fn structured_uses_patient_group() {
    let range = spec(json!({ "female": { "min": 10, "max": 20 } }));
    assert_eq!(resolve(Some(&range), patient("Female", 25.0)), "Female: 10 - 20");
}

#[test]
fn structured_falls_back_to_every_populated_group() {
    let range = spec(json!({
        "male": { "min": 1, "max": 2 },
        "child": { "min": 3, "max": 4 },
    }));
    assert_eq!(
        resolve(Some(&range), patient("Female", 25.0)),
        "Male: 1 - 2, Child: 3 - 4"
    );
}

#[test]
fn fallback_order_is_fixed_regardless_of_key_order() {
    let range = spec(json!({
        "infant": { "min": 7 },
        "child": { "min": 5, "max": 6 },
        "female": { "min": "", "max": "" },
    }));
    assert_eq!(
        resolve(Some(&range), patient("Male", 40.0)),
        "Child: 5 - 6, Infant: 7"
    );
}

#[test]
fn min_without_max_drops_separator() {
    let range = spec(json!({ "male": { "min": "> 40" } }));
    assert_eq!(resolve(Some(&range), patient("m", 40.0)), "Male: > 40");
}

#[test]
fn legacy_lists_adult_then_child() {
    let range = spec(json!({ "adult": "3-5", "child": "1-2" }));
    assert_eq!(
        resolve(Some(&range), patient("Male", 30.0)),
        "Adult: 3-5, Child: 1-2"
    );

    let adult_only = spec(json!({ "adult": "3-5" }));
    assert_eq!(resolve(Some(&adult_only), patient("Male", 30.0)), "Adult: 3-5");
}

#[test]
fn unrecognized_shape_is_empty() {
    let range = spec(json!({ "lower": 1, "upper": 2 }));
    assert_eq!(resolve(Some(&range), patient("Male", 30.0)), "");
}

#[test]
fn group_selection_by_gender_then_age() {
    assert_eq!(demographic_group(patient(" female", 0.5)), DemographicGroup::Female);
    assert_eq!(demographic_group(patient("M", 0.5)), DemographicGroup::Infant);
    assert_eq!(demographic_group(patient("M", 1.0)), DemographicGroup::Child);
    assert_eq!(demographic_group(patient("M", 17.9)), DemographicGroup::Child);
    assert_eq!(demographic_group(patient("M", 18.0)), DemographicGroup::Male);
}

#[test]
fn unknown_demographics_default_to_male() {
    assert_eq!(demographic_group(Demographics::default()), DemographicGroup::Male);
    assert_eq!(
        demographic_group(Demographics {
            gender: Some("other"),
            age: None,
        }),
        DemographicGroup::Male
    );

    let range = spec(json!({
        "male": { "min": 13, "max": 17 },
        "child": { "min": 11, "max": 16 },
    }));
    assert_eq!(resolve(Some(&range), Demographics::default()), "Male: 13 - 17");
}

#[test]
fn child_patient_gets_child_bounds() {
    let range = spec(json!({
        "male": { "min": 13, "max": 17 },
        "child": { "min": 11, "max": 16 },
    }));
    assert_eq!(resolve(Some(&range), patient("Male", 9.0)), "Child: 11 - 16");
}
