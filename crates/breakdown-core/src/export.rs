//! Plain-text checklist export.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{BreakdownError, Result},
    models::Step,
};

/// File stem used when the title sanitizes to nothing.
pub const FALLBACK_FILE_STEM: &str = "tasks";

pub const EXPORT_EXTENSION: &str = "md";

/// Characters stripped from titles before they become file names.
const FORBIDDEN_FILE_CHARS: &[char] = &['\\', '/', '?', '%', '*', ':', '|', '"', '<', '>'];

/// A rendered checklist ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

impl Export {
    /// Render `steps` under `title`. Returns `None` for an empty list.
    pub fn render(title: &str, steps: &[Step]) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self {
            file_name: format!("{}.{EXPORT_EXTENSION}", sanitize_file_stem(title)),
            contents: Checklist { title, steps }.to_string(),
        })
    }

    /// Write the document into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents).map_err(|e| BreakdownError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        info!("Exported checklist to {}", path.display());
        Ok(path)
    }
}

/// Markdown document: heading, blank line, one checklist line per step.
pub struct Checklist<'a> {
    pub title: &'a str,
    pub steps: &'a [Step],
}

impl fmt::Display for Checklist<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        for step in self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Turn a task title into a file stem.
///
/// Strips `\ / ? % * : | " < >`, then replaces every run of whitespace with
/// a single underscore. Falls back to [`FALLBACK_FILE_STEM`] when nothing
/// is left.
pub fn sanitize_file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars().filter(|c| !FORBIDDEN_FILE_CHARS.contains(c)) {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(c);
            in_whitespace = false;
        }
    }

    if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::StepId;

    fn trip_steps() -> Vec<Step> {
        let mut book = Step::new(StepId(1), "Book flight");
        book.completed = true;
        vec![book, Step::new(StepId(2), "Pack bag")]
    }

    #[test]
    fn test_render_checklist_document() {
        let export = Export::render("Plan Trip", &trip_steps()).unwrap();
        let lines: Vec<&str> = export.contents.lines().collect();

        assert_eq!(lines, vec!["# Plan Trip", "", "- [x] Book flight", "- [ ] Pack bag"]);
        assert!(export.contents.ends_with('\n'));
        assert_eq!(export.file_name, "Plan_Trip.md");
    }

    #[test]
    fn test_render_empty_list_is_none() {
        assert_eq!(Export::render("Plan Trip", &[]), None);
    }

    #[test]
    fn test_sanitize_removes_forbidden_and_collapses_whitespace() {
        assert_eq!(sanitize_file_stem("Trip: *to* Rome?  now"), "Trip_to_Rome_now");
        assert_eq!(sanitize_file_stem(r#"a\b|c"d<e>f%g"#), "abcdefg");
        assert_eq!(sanitize_file_stem("../etc/passwd"), "..etcpasswd");
        assert_eq!(sanitize_file_stem("tab\there\n\nnewline"), "tab_here_newline");
        assert_eq!(sanitize_file_stem("לנקות את המוסך"), "לנקות_את_המוסך");
    }

    #[test]
    fn test_sanitize_fallback() {
        assert_eq!(sanitize_file_stem(""), FALLBACK_FILE_STEM);
        assert_eq!(sanitize_file_stem("?*:"), FALLBACK_FILE_STEM);
        let export = Export::render("<>", &trip_steps()).unwrap();
        assert_eq!(export.file_name, "tasks.md");
    }

    #[test]
    fn test_write_to_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let export = Export::render("Plan Trip", &trip_steps()).unwrap();

        let path = export.write_to(temp_dir.path()).expect("Failed to write export");
        assert_eq!(path, temp_dir.path().join("Plan_Trip.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), export.contents);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let export = Export::render("Plan Trip", &trip_steps()).unwrap();

        let err = export.write_to(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, BreakdownError::FileSystem { .. }));
    }
}
