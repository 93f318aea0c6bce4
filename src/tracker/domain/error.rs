//! Error types for tracker domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing validated tracker values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// The project name is empty after trimming.
    #[error("project name is required")]
    EmptyProjectName,

    /// The trimmed project name is outside the accepted length range.
    #[error("project name must be between {min} and {max} characters, got {actual}")]
    ProjectNameLength {
        /// Trimmed length in characters.
        actual: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title is required")]
    EmptyTaskTitle,

    /// The trimmed task title is outside the accepted length range.
    #[error("task title must be between {min} and {max} characters, got {actual}")]
    TaskTitleLength {
        /// Trimmed length in characters.
        actual: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The trimmed description exceeds the accepted length.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Trimmed length in characters.
        actual: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The project already owns a task with this identifier.
    #[error("task identifier {0} is already in use")]
    DuplicateTaskId(TaskId),

    /// The project does not own a task with this identifier.
    #[error("task {0} does not belong to this project")]
    UnknownTask(TaskId),

    /// Every identifier value has already been handed out.
    #[error("identifier space exhausted")]
    IdentifiersExhausted,
}

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', expected one of: todo, doing, done")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a deadline string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid deadline '{0}', expected YYYY-MM-DD")]
pub struct ParseDeadlineError(pub String);
