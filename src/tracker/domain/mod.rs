//! Domain model for project and task tracking.
//!
//! Everything here is pure data and validation; storage and orchestration
//! live in the ports, adapters and services modules.

mod collection;
mod deadline;
mod error;
mod ids;
mod project;
mod task;
mod text;

pub use collection::{Keyed, KeyedCollection};
pub use deadline::{DEADLINE_FORMAT, Deadline};
pub use error::{ParseDeadlineError, ParseTaskStatusError, TrackerDomainError};
pub use ids::{IdAllocator, ProjectId, TaskId};
pub use project::Project;
pub use task::{Task, TaskStatus};
pub use text::{
    DESCRIPTION_MAX_LENGTH, Description, NAME_MAX_LENGTH, NAME_MIN_LENGTH, ProjectName, TaskTitle,
};
