//! In-memory task list: the ordered steps of the current plan.
//!
//! The list is the only owner of [`Step`] values. It is populated in bulk by
//! [`TaskList::replace`] after a successful decomposition and afterwards only
//! mutated in place: [`toggle`](TaskList::toggle) flips a completion flag and
//! [`reorder`](TaskList::reorder) moves a step. Neither changes the set of
//! ids, so ids stay unique for the lifetime of a batch.
//!
//! ```rust
//! use breakdown_core::{models::StepId, store::TaskList};
//!
//! let mut list = TaskList::new();
//! list.replace(["Find a box", "Fill the box", "Tape the box"])?;
//!
//! let ids: Vec<StepId> = list.iter().map(|s| s.id).collect();
//! list.reorder(ids[2], ids[0]);
//! list.toggle(ids[2]);
//!
//! assert_eq!(list.steps()[0].description, "Tape the box");
//! assert_eq!(list.progress().completed, 1);
//! # Ok::<(), breakdown_core::BreakdownError>(())
//! ```

pub mod drag;
pub mod ids;

pub use drag::DragGesture;
pub use ids::{IdGenerator, SequentialIds};

use log::debug;

use crate::{
    error::Result,
    models::{Progress, Step, StepId},
};

/// Ordered collection of steps; order is execution order.
#[derive(Debug)]
pub struct TaskList {
    steps: Vec<Step>,
    ids: Box<dyn IdGenerator>,
}

impl TaskList {
    /// Create an empty list with a [`SequentialIds`] generator.
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_boxed_id_generator(Box::new(ids))
    }

    pub fn with_boxed_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            steps: Vec::new(),
            ids,
        }
    }

    /// Discard the current steps and store a fresh batch, all incomplete,
    /// each with a new id. Returns the number of steps stored.
    ///
    /// # Errors
    ///
    /// Returns `BreakdownError::IdsExhausted` and leaves the list untouched
    /// when the id generator cannot cover the batch.
    pub fn replace<I, S>(&mut self, descriptions: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptions: Vec<String> = descriptions.into_iter().map(Into::into).collect();
        let ids = ids::batch_ids(self.ids.as_mut(), descriptions.len())?;
        self.steps = ids
            .zip(descriptions)
            .map(|(id, description)| Step::new(id, description))
            .collect();
        debug!("replace: stored {} step(s)", self.steps.len());
        Ok(self.steps.len())
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Flip the completion flag of the step with `id`.
    ///
    /// Returns `false` and leaves the list untouched when no step has `id`.
    pub fn toggle(&mut self, id: StepId) -> bool {
        match self.steps.iter_mut().find(|step| step.id == id) {
            Some(step) => {
                step.toggle();
                true
            }
            None => false,
        }
    }

    /// Move the step `dragged` to the index currently held by `target`.
    ///
    /// The dragged step is removed and reinserted at the target's former
    /// index; every other step keeps its relative order. Returns `false`
    /// (no-op) when the ids are equal or either is absent.
    pub fn reorder(&mut self, dragged: StepId, target: StepId) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };

        let step = self.steps.remove(from);
        self.steps.insert(to, step);
        debug!("reorder: moved {dragged} from {from} to {to}");
        true
    }

    pub fn progress(&self) -> Progress {
        progress_of(&self.steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Zero-based index of the step with `id`.
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Progress over any slice of steps.
pub fn progress_of(steps: &[Step]) -> Progress {
    let completed = steps.iter().filter(|step| step.completed).count();
    Progress::new(completed, steps.len())
}
