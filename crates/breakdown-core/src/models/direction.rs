//! Text direction detection for the task input.

use serde::Serialize;

/// Layout direction for rendering the task and its steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextDirection {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl TextDirection {
    /// Right-to-left as soon as the text contains a Hebrew or Arabic
    /// character, left-to-right otherwise.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_rtl_char) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

fn is_rtl_char(c: char) -> bool {
    matches!(c, '\u{0590}'..='\u{05FF}' | '\u{0600}'..='\u{06FF}')
}
