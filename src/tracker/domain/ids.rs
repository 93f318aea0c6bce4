//! Identifier types and monotonic identifier allocation.

use super::TrackerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Wraps a raw project identifier.
    ///
    /// Identifiers are normally handed out by [`IdAllocator`]; this
    /// constructor exists for callers that parsed an id from user input.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task.
///
/// Task identifiers come from a single tracker-wide counter, so a task id is
/// unique across every project and not only within its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw task identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier source.
///
/// Starts at 1 and never hands out the same value twice, including after
/// the entity that held a value has been deleted. Once `u64::MAX` has been
/// handed out the allocator is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Creates an allocator whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Some(1) }
    }

    #[cfg(test)]
    pub(crate) const fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Consumes and returns the next identifier value.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::IdentifiersExhausted`] once every
    /// value up to `u64::MAX` has been handed out.
    pub fn allocate(&mut self) -> Result<u64, TrackerDomainError> {
        let allocated = self.next.ok_or(TrackerDomainError::IdentifiersExhausted)?;
        self.next = allocated.checked_add(1);
        Ok(allocated)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
