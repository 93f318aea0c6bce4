//! Capacity limits for the tracker and their environment loader.
//!
//! The tracker itself never reads the environment: callers build a
//! [`TrackerConfig`] here (or anywhere else) and hand it to
//! [`TaskTracker::new`](crate::tracker::services::TaskTracker::new).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the maximum number of projects.
pub const MAX_PROJECTS_VAR: &str = "MAX_NUMBER_OF_PROJECT";

/// Environment variable holding the maximum number of tasks per project.
pub const MAX_TASKS_VAR: &str = "MAX_NUMBER_OF_TASK";

/// Project limit used when none is configured.
pub const DEFAULT_MAX_PROJECTS: usize = 10;

/// Per-project task limit used when none is configured.
pub const DEFAULT_MAX_TASKS: usize = 100;

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not hold a non-negative integer.
    #[error("{variable} must be a non-negative integer, got '{value}'")]
    InvalidInteger {
        /// Name of the offending variable.
        variable: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },
}

/// Capacity limits enforced by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of live projects.
    pub max_projects: usize,
    /// Maximum number of tasks in a single project.
    pub max_tasks: usize,
}

impl TrackerConfig {
    /// Creates a configuration with explicit limits.
    #[must_use]
    pub const fn new(max_projects: usize, max_tasks: usize) -> Self {
        Self {
            max_projects,
            max_tasks,
        }
    }

    /// Reads limits from [`MAX_PROJECTS_VAR`] and [`MAX_TASKS_VAR`].
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInteger`] when a variable is set to
    /// something other than a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads limits through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInteger`] when a present value does not
    /// parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            max_projects: parse_limit(&lookup, MAX_PROJECTS_VAR, DEFAULT_MAX_PROJECTS)?,
            max_tasks: parse_limit(&lookup, MAX_TASKS_VAR, DEFAULT_MAX_TASKS)?,
        })
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROJECTS, DEFAULT_MAX_TASKS)
    }
}

fn parse_limit(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    lookup(variable).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidInteger {
                variable,
                value: raw.clone(),
            })
    })
}
