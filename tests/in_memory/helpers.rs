//! Shared test helpers for in-memory tracker integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::config::TrackerConfig;
use todolist::tracker::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, Task},
    services::{AddTaskRequest, CreateProjectRequest, TaskTracker},
};

/// Tracker type used across integration tests.
pub type TestTracker = TaskTracker<InMemoryProjectRepository, DefaultClock>;

/// Builds a tracker with the given limits.
#[must_use]
pub fn tracker_with_limits(max_projects: usize, max_tasks: usize) -> TestTracker {
    TaskTracker::new(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(DefaultClock),
        TrackerConfig::new(max_projects, max_tasks),
    )
}

/// Provides a tracker with default limits.
#[fixture]
pub fn tracker() -> TestTracker {
    tracker_with_limits(10, 100)
}

/// Creates a project and returns it.
///
/// # Errors
///
/// Returns an error if the tracker rejects the project.
pub fn create_project(tracker: &mut TestTracker, name: &str) -> Result<Project, eyre::Report> {
    Ok(tracker.create_project(CreateProjectRequest::new(name))?)
}

/// Adds `titles` to `project` in order and returns the created tasks.
///
/// # Errors
///
/// Returns an error if the tracker rejects any task.
pub fn add_tasks(
    tracker: &mut TestTracker,
    project: &Project,
    titles: &[&str],
) -> Result<Vec<Task>, eyre::Report> {
    titles
        .iter()
        .map(|title| -> Result<Task, eyre::Report> {
            Ok(tracker.add_task(AddTaskRequest::new(project.id(), *title))?)
        })
        .collect()
}
