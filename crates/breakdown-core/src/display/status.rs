//! Banners for user-facing notices.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// A single line of feedback shown above the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BannerKind::Info => writeln!(f, "{}", self.message),
            BannerKind::Success => writeln!(f, "**Done:** {}", self.message),
            BannerKind::Error => writeln!(f, "**Error:** {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_display() {
        assert_eq!(format!("{}", Banner::info("Working...")), "Working...\n");
        assert_eq!(
            format!("{}", Banner::success("Saved tasks.md")),
            "**Done:** Saved tasks.md\n"
        );
        let error = Banner::error("Please enter a task.");
        assert!(error.is_error());
        assert_eq!(format!("{error}"), "**Error:** Please enter a task.\n");
    }
}
