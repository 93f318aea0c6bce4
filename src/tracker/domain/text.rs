//! Validated text fields for projects and tasks.

use super::TrackerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length, in characters, of names and titles.
pub const NAME_MIN_LENGTH: usize = 1;

/// Maximum length, in characters, of names and titles.
pub const NAME_MAX_LENGTH: usize = 50;

/// Maximum length, in characters, of descriptions.
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Trimmed, non-blank project name of 1 to 50 characters.
///
/// Names compare case-sensitively as values; uniqueness across projects is
/// decided on [`ProjectName::unique_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyProjectName`] when the value is
    /// blank, or [`TrackerDomainError::ProjectNameLength`] when the trimmed
    /// value is longer than 50 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TrackerDomainError> {
        let normalized = value.as_ref().trim();
        if normalized.is_empty() {
            return Err(TrackerDomainError::EmptyProjectName);
        }

        let actual = normalized.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&actual) {
            return Err(TrackerDomainError::ProjectNameLength {
                actual,
                min: NAME_MIN_LENGTH,
                max: NAME_MAX_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-folded form used for uniqueness checks.
    #[must_use]
    pub fn unique_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-blank task title of 1 to 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyTaskTitle`] when the value is
    /// blank, or [`TrackerDomainError::TaskTitleLength`] when the trimmed
    /// value is longer than 50 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TrackerDomainError> {
        let normalized = value.as_ref().trim();
        if normalized.is_empty() {
            return Err(TrackerDomainError::EmptyTaskTitle);
        }

        let actual = normalized.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&actual) {
            return Err(TrackerDomainError::TaskTitleLength {
                actual,
                min: NAME_MIN_LENGTH,
                max: NAME_MAX_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed free-form description of at most 200 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a validated description. Blank input yields an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::DescriptionTooLong`] when the trimmed
    /// value is longer than 200 characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TrackerDomainError> {
        let normalized = value.as_ref().trim();
        let actual = normalized.chars().count();
        if actual > DESCRIPTION_MAX_LENGTH {
            return Err(TrackerDomainError::DescriptionTooLong {
                actual,
                max: DESCRIPTION_MAX_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns an empty description.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the description is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
