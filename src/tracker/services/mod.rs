//! Application services for project and task management.

mod tracker;

pub use tracker::{
    AddTaskRequest, CreateProjectRequest, EditProjectRequest, EditTaskRequest, TaskTracker,
    TrackerError, TrackerResult,
};
