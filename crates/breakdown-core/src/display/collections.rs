//! Checklist view over the current task list.

use std::fmt;

use crate::{models::Step, store::progress_of};

const PROGRESS_BAR_WIDTH: usize = 20;

/// Interactive view of a plan: heading, progress bar and one numbered line
/// per step showing its id, so the user can refer to it in commands.
///
/// # Examples
///
/// ```rust
/// use breakdown_core::{display::ChecklistView, models::{Step, StepId}};
///
/// let steps = vec![Step::new(StepId(1), "Find the keys")];
/// let view = ChecklistView::new("Leave the house", &steps);
/// let output = format!("{}", view);
/// assert!(output.contains("# Leave the house"));
/// assert!(output.contains("0 / 1 completed"));
/// assert!(output.contains("`#1` Find the keys"));
/// ```
pub struct ChecklistView<'a> {
    title: &'a str,
    steps: &'a [Step],
}

impl<'a> ChecklistView<'a> {
    pub fn new(title: &'a str, steps: &'a [Step]) -> Self {
        Self { title, steps }
    }
}

impl fmt::Display for ChecklistView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            writeln!(f, "Your steps will appear here.")?;
            return writeln!(f, "Enter a task to get started!");
        }

        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        let progress = progress_of(self.steps);
        let filled = (progress.percentage() / 100.0 * PROGRESS_BAR_WIDTH as f64).round() as usize;
        writeln!(
            f,
            "`{}{}` {progress}",
            "█".repeat(filled),
            "░".repeat(PROGRESS_BAR_WIDTH - filled)
        )?;
        writeln!(f)?;

        for (position, step) in self.steps.iter().enumerate() {
            let mark = if step.completed { 'x' } else { ' ' };
            if step.completed {
                writeln!(f, "{}. [{mark}] `#{}` ~~{}~~", position + 1, step.id, step.description)?;
            } else {
                writeln!(f, "{}. [{mark}] `#{}` {}", position + 1, step.id, step.description)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepId;

    #[test]
    fn test_empty_view_shows_placeholder() {
        let output = format!("{}", ChecklistView::new("Anything", &[]));
        assert!(output.contains("Your steps will appear here."));
        assert!(!output.contains("# Anything"));
    }

    #[test]
    fn test_view_numbers_steps_in_order_and_strikes_completed() {
        let mut done = Step::new(StepId(10), "Book flight");
        done.completed = true;
        let steps = vec![done, Step::new(StepId(11), "Pack bag")];

        let output = format!("{}", ChecklistView::new("Plan Trip", &steps));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "# Plan Trip");
        assert!(lines[2].ends_with("1 / 2 completed (50%)"));
        assert!(lines[2].starts_with(&format!("`{}{}`", "█".repeat(10), "░".repeat(10))));
        assert_eq!(lines[4], "1. [x] `#10` ~~Book flight~~");
        assert_eq!(lines[5], "2. [ ] `#11` Pack bag");
    }
}
