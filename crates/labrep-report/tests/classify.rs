use labrep_core::models::flag::Flag;
use labrep_report::classify::{
    BOLD_CLASS, HIGHLIGHT_GREEN_CLASS, HIGHLIGHT_RED_CLASS, HIGHLIGHT_YELLOW_CLASS, classify,
};

fn classes(flag: &str, is_abnormal: bool) -> (&'static str, &'static str) {
    let flag = Flag::parse(flag);
    let classification = classify(flag.as_ref(), is_abnormal);
    (classification.highlight_class(), classification.bold_class())
}

#[test]
fn highlight_with_color() {
    assert_eq!(classes("highlight:red", false), (HIGHLIGHT_RED_CLASS, ""));
    assert_eq!(classes("highlight: green ", false), (HIGHLIGHT_GREEN_CLASS, ""));
}

#[test]
fn abnormal_without_flag_is_red() {
    let classification = classify(None, true);
    assert_eq!(classification.highlight_class(), HIGHLIGHT_RED_CLASS);
    assert_eq!(classification.bold_class(), "");
}

#[test]
fn bold_flag() {
    assert_eq!(classes("bold", false), ("", BOLD_CLASS));
    assert_eq!(classes("Bold", true), ("", BOLD_CLASS));
}

#[test]
fn bare_colors() {
    assert_eq!(classes("green", false), (HIGHLIGHT_GREEN_CLASS, ""));
    assert_eq!(classes("YELLOW", false), (HIGHLIGHT_YELLOW_CLASS, ""));
    assert_eq!(classes("red", false), (HIGHLIGHT_RED_CLASS, ""));
}

#[test]
fn semantic_flags() {
    assert_eq!(classes("normal", true), (HIGHLIGHT_GREEN_CLASS, ""));
    assert_eq!(classes("low", false), (HIGHLIGHT_YELLOW_CLASS, ""));
    assert_eq!(classes("high", false), (HIGHLIGHT_RED_CLASS, ""));
    assert_eq!(classes("critical", false), (HIGHLIGHT_RED_CLASS, ""));
}

#[test]
fn unknown_highlight_color_has_no_style_even_when_abnormal() {
    assert_eq!(classes("highlight:purple", false), ("", ""));
    assert_eq!(classes("highlight", true), ("", ""));
}

#[test]
fn unrecognized_flag_defers_to_abnormal_marker() {
    assert_eq!(classes("borderline", false), ("", ""));
    assert_eq!(classes("borderline", true), (HIGHLIGHT_RED_CLASS, ""));
}

#[test]
fn no_flag_and_normal_result_is_unstyled() {
    let classification = classify(None, false);
    assert_eq!(classification.highlight_class(), "");
    assert_eq!(classification.bold_class(), "");
}
