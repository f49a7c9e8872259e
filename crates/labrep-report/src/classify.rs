use labrep_core::models::flag::{Flag, HighlightColor, Severity};

pub const BOLD_CLASS: &str = "result-bold";
pub const HIGHLIGHT_GREEN_CLASS: &str = "result-highlight-green";
pub const HIGHLIGHT_YELLOW_CLASS: &str = "result-highlight-yellow";
pub const HIGHLIGHT_RED_CLASS: &str = "result-highlight-red";

/// Visual treatment of a result value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub highlight: Option<HighlightColor>,
    pub bold: bool,
}

impl Classification {
    fn highlighted(color: HighlightColor) -> Self {
        Self {
            highlight: Some(color),
            bold: false,
        }
    }

    /// Highlight CSS class, or `""`.
    pub fn highlight_class(&self) -> &'static str {
        self.highlight.map(highlight_class).unwrap_or_default()
    }

    /// Bold CSS class, or `""`.
    pub fn bold_class(&self) -> &'static str {
        if self.bold { BOLD_CLASS } else { "" }
    }
}

pub fn highlight_class(color: HighlightColor) -> &'static str {
    match color {
        HighlightColor::Green => HIGHLIGHT_GREEN_CLASS,
        HighlightColor::Yellow => HIGHLIGHT_YELLOW_CLASS,
        HighlightColor::Red => HIGHLIGHT_RED_CLASS,
    }
}

/// Classify a result from its flag, falling back to `is_abnormal`.
///
/// A recognised flag always decides, even when it selects no highlight
/// (`highlight:purple`). Only a missing or unrecognised flag defers to the
/// abnormal marker, which paints red.
pub fn classify(flag: Option<&Flag>, is_abnormal: bool) -> Classification {
    match flag {
        Some(Flag::Bold) => Classification {
            highlight: None,
            bold: true,
        },
        Some(Flag::Highlight(color)) => Classification {
            highlight: *color,
            bold: false,
        },
        Some(Flag::Color(color)) => Classification::highlighted(*color),
        Some(Flag::Semantic(Severity::Normal)) => Classification::highlighted(HighlightColor::Green),
        Some(Flag::Semantic(Severity::Low)) => Classification::highlighted(HighlightColor::Yellow),
        Some(Flag::Semantic(Severity::High | Severity::Critical)) => {
            Classification::highlighted(HighlightColor::Red)
        }
        Some(Flag::Unrecognized(_)) | None if is_abnormal => {
            Classification::highlighted(HighlightColor::Red)
        }
        Some(Flag::Unrecognized(_)) | None => Classification::default(),
    }
}
