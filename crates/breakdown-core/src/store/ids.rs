//! Step id allocation.

use std::fmt;

use crate::{
    error::{BreakdownError, Result},
    models::StepId,
};

/// Source of step ids for new batches.
///
/// [`reserve`](IdGenerator::reserve) returns the base of a block of `count`
/// consecutive ids; the store gives each step of the batch `base + position`.
/// Implementations must never hand out overlapping blocks, and return `None`
/// once `base + count` would no longer fit in a `u64`.
pub trait IdGenerator: fmt::Debug + Send {
    fn reserve(&mut self, count: usize) -> Option<u64>;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn reserve(&mut self, count: usize) -> Option<u64> {
        let base = self.next;
        self.next = base.checked_add(u64::try_from(count).ok()?)?;
        Some(base)
    }
}

/// Ids for a batch of `count` steps, or an error when the generator has run
/// out.
pub(crate) fn batch_ids(
    generator: &mut dyn IdGenerator,
    count: usize,
) -> Result<impl Iterator<Item = StepId>> {
    let base = generator
        .reserve(count)
        .filter(|base| base.checked_add(count as u64).is_some())
        .ok_or(BreakdownError::IdsExhausted { requested: count })?;
    Ok((0..count as u64).map(move |position| StepId(base + position)))
}
