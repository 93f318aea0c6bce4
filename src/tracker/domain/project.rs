//! Project aggregate root.

use super::{
    Description, Keyed, KeyedCollection, ProjectId, ProjectName, Task, TaskId, TrackerDomainError,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Named container that exclusively owns its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Description,
    tasks: KeyedCollection<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project.
    #[must_use]
    pub fn new(
        id: ProjectId,
        name: ProjectName,
        description: Description,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name,
            description,
            tasks: KeyedCollection::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the owned tasks, iterable in ascending id order.
    #[must_use]
    pub const fn tasks(&self) -> &KeyedCollection<Task> {
        &self.tasks
    }

    /// Returns the number of owned tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the owned task with `task_id`.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites name and description. Identifier and tasks are kept.
    pub fn rename(&mut self, name: ProjectName, description: Description, clock: &impl Clock) {
        self.name = name;
        self.description = description;
        self.touch(clock);
    }

    /// Takes ownership of a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::DuplicateTaskId`] when the project
    /// already owns a task with the same identifier.
    pub fn add_task(&mut self, task: Task, clock: &impl Clock) -> Result<(), TrackerDomainError> {
        if let Some(rejected) = self.tasks.insert(task) {
            return Err(TrackerDomainError::DuplicateTaskId(rejected.key()));
        }
        self.touch(clock);
        Ok(())
    }

    /// Replaces an owned task with an updated value of the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::UnknownTask`] when the project does not
    /// own a task with that identifier.
    pub fn replace_task(
        &mut self,
        task: Task,
        clock: &impl Clock,
    ) -> Result<(), TrackerDomainError> {
        let task_id = task.id();
        if self.tasks.replace(task).is_none() {
            return Err(TrackerDomainError::UnknownTask(task_id));
        }
        self.touch(clock);
        Ok(())
    }

    /// Removes and returns an owned task.
    pub fn remove_task(&mut self, task_id: TaskId, clock: &impl Clock) -> Option<Task> {
        let removed = self.tasks.remove(task_id)?;
        self.touch(clock);
        Some(removed)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl Keyed for Project {
    type Key = ProjectId;

    fn key(&self) -> ProjectId {
        self.id
    }
}
