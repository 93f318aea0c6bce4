//! Shared world state for tracker BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::config::TrackerConfig;
use todolist::tracker::{
    adapters::memory::InMemoryProjectRepository,
    domain::Task,
    services::{TaskTracker, TrackerError, TrackerResult},
};

/// Tracker type used by the BDD world.
pub type TestTracker = TaskTracker<InMemoryProjectRepository, DefaultClock>;

/// Scenario world for tracker behaviour tests.
pub struct TrackerWorld {
    /// The tracker under test.
    pub tracker: TestTracker,
    /// Task returned by the last successful task operation.
    pub last_task: Option<Task>,
    /// Error returned by the last failed operation, cleared on success.
    pub last_error: Option<TrackerError>,
}

impl TrackerWorld {
    /// Creates a world around a tracker with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: build_tracker(TrackerConfig::default()),
            last_task: None,
            last_error: None,
        }
    }

    /// Records the outcome of an operation, returning its value on success.
    pub fn record<T>(&mut self, result: TrackerResult<T>) -> Option<T> {
        self.last_error = None;
        result.map_err(|err| self.last_error = Some(err)).ok()
    }
}

impl Default for TrackerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a tracker over an empty in-memory repository.
#[must_use]
pub fn build_tracker(config: TrackerConfig) -> TestTracker {
    TaskTracker::new(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(DefaultClock),
        config,
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackerWorld {
    TrackerWorld::default()
}
