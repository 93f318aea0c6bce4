//! Service layer for project and task management.

use crate::config::TrackerConfig;
use crate::tracker::{
    domain::{
        Deadline, Description, IdAllocator, ParseDeadlineError, ParseTaskStatusError, Project,
        ProjectId, ProjectName, Task, TaskId, TaskStatus, TaskTitle, TrackerDomainError,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use log::{debug, info, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
}

impl CreateProjectRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for overwriting a project's name and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProjectRequest {
    project_id: ProjectId,
    name: String,
    description: String,
}

impl EditProjectRequest {
    /// Creates a request that also clears the description unless one is set.
    #[must_use]
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    project_id: ProjectId,
    title: String,
    description: String,
    deadline: Option<String>,
}

impl AddTaskRequest {
    /// Creates a request with an empty description and no deadline.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            deadline: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the deadline in `YYYY-MM-DD` form. A blank value means none.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Request payload for editing a task.
///
/// Title and description always replace the stored values; status and
/// deadline change only when supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    project_id: ProjectId,
    task_id: TaskId,
    title: String,
    description: String,
    status: Option<String>,
    deadline: Option<String>,
}

impl EditTaskRequest {
    /// Creates a request that also clears the description unless one is set.
    #[must_use]
    pub fn new(project_id: ProjectId, task_id: TaskId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            task_id,
            title: title.into(),
            description: String::new(),
            status: None,
            deadline: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets a new status; must be one of `todo`, `doing` or `done`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a new deadline in `YYYY-MM-DD` form. A blank value keeps the
    /// current deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Service-level errors for tracker operations.
///
/// Every variant is recoverable: the operation that produced it left the
/// tracker unchanged.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Field validation failed.
    #[error(transparent)]
    Domain(#[from] TrackerDomainError),

    /// The status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The deadline string is not a `YYYY-MM-DD` date.
    #[error(transparent)]
    InvalidDeadline(#[from] ParseDeadlineError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// Creating another project would exceed the configured limit.
    #[error("project limit reached: at most {max} projects allowed")]
    ProjectLimitReached {
        /// Configured maximum.
        max: usize,
    },

    /// Adding another task would exceed the configured per-project limit.
    #[error("task limit reached for project {project_id}: at most {max} tasks allowed")]
    TaskLimitReached {
        /// Project that is full.
        project_id: ProjectId,
        /// Configured maximum.
        max: usize,
    },

    /// No project has the requested identifier.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project exists but owns no task with the requested identifier.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project that was searched.
        project_id: ProjectId,
        /// Missing task.
        task_id: TaskId,
    },
}

impl TrackerError {
    /// Returns whether the error reports a missing project or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_)
                | Self::TaskNotFound { .. }
                | Self::Repository(ProjectRepositoryError::NotFound(_))
        )
    }
}

/// Result type for tracker service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Project and task orchestration service.
///
/// Owns the identifier allocators; mutating operations take `&mut self`.
pub struct TaskTracker<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TrackerConfig,
    project_ids: IdAllocator,
    task_ids: IdAllocator,
}

impl<R, C> TaskTracker<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a tracker over an empty repository.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, config: TrackerConfig) -> Self {
        Self {
            repository,
            clock,
            config,
            project_ids: IdAllocator::new(),
            task_ids: IdAllocator::new(),
        }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectLimitReached`] when the tracker is
    /// full, [`TrackerError::Domain`] when the name or description is
    /// invalid, or [`TrackerError::Repository`] with
    /// [`ProjectRepositoryError::DuplicateProjectName`] when the name is
    /// taken ignoring case.
    pub fn create_project(&mut self, request: CreateProjectRequest) -> TrackerResult<Project> {
        self.insert_project(request)
            .inspect(|project| {
                info!(
                    "event=project_create module=tracker status=ok project_id={}",
                    project.id()
                );
            })
            .inspect_err(|err| {
                warn!("event=project_create module=tracker status=error reason=\"{err}\"");
            })
    }

    fn insert_project(&mut self, request: CreateProjectRequest) -> TrackerResult<Project> {
        let CreateProjectRequest { name, description } = request;

        let max = self.config.max_projects;
        if self.repository.count()? >= max {
            return Err(TrackerError::ProjectLimitReached { max });
        }

        let project_name = ProjectName::new(&name)?;
        let project_description = Description::new(&description)?;
        if self.repository.find_by_name(&project_name)?.is_some() {
            return Err(ProjectRepositoryError::DuplicateProjectName(project_name).into());
        }

        let id = ProjectId::new(self.project_ids.allocate()?);
        let project = Project::new(id, project_name, project_description, &*self.clock);
        self.repository.store(&project)?;
        Ok(project)
    }

    /// Overwrites a project's name and description.
    ///
    /// Renaming a project to a different casing of its own name is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist, [`TrackerError::Domain`] when a field is invalid, or
    /// [`TrackerError::Repository`] when another project already has the
    /// name.
    pub fn edit_project(&mut self, request: EditProjectRequest) -> TrackerResult<Project> {
        self.rename_project(request)
            .inspect(|project| {
                info!(
                    "event=project_edit module=tracker status=ok project_id={}",
                    project.id()
                );
            })
            .inspect_err(|err| {
                warn!("event=project_edit module=tracker status=error reason=\"{err}\"");
            })
    }

    fn rename_project(&self, request: EditProjectRequest) -> TrackerResult<Project> {
        let EditProjectRequest {
            project_id,
            name,
            description,
        } = request;

        let mut project = self.require_project(project_id)?;
        let project_name = ProjectName::new(&name)?;
        let project_description = Description::new(&description)?;
        if let Some(existing) = self.repository.find_by_name(&project_name)?
            && existing.id() != project_id
        {
            return Err(ProjectRepositoryError::DuplicateProjectName(project_name).into());
        }

        project.rename(project_name, project_description, &*self.clock);
        self.repository.update(&project)?;
        Ok(project)
    }

    /// Deletes a project together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist.
    pub fn delete_project(&mut self, project_id: ProjectId) -> TrackerResult<()> {
        self.remove_project(project_id)
            .map(|removed| {
                info!(
                    "event=project_delete module=tracker status=ok project_id={project_id} removed_tasks={}",
                    removed.task_count()
                );
            })
            .inspect_err(|err| {
                warn!("event=project_delete module=tracker status=error reason=\"{err}\"");
            })
    }

    fn remove_project(&self, project_id: ProjectId) -> TrackerResult<Project> {
        self.require_project(project_id)?;
        Ok(self.repository.remove(project_id)?)
    }

    /// Returns every project in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Repository`] only when storage itself fails.
    pub fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        let projects = self.repository.list()?;
        debug!(
            "event=project_list module=tracker status=ok count={}",
            projects.len()
        );
        Ok(projects)
    }

    /// Returns a single project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist.
    pub fn project(&self, project_id: ProjectId) -> TrackerResult<Project> {
        self.require_project(project_id)
    }

    /// Returns the number of live projects.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Repository`] only when storage itself fails.
    pub fn project_count(&self) -> TrackerResult<usize> {
        Ok(self.repository.count()?)
    }

    /// Adds a task in the `todo` state to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist, [`TrackerError::TaskLimitReached`] when it is full,
    /// [`TrackerError::Domain`] when the title or description is invalid,
    /// or [`TrackerError::InvalidDeadline`] when the deadline is malformed.
    pub fn add_task(&mut self, request: AddTaskRequest) -> TrackerResult<Task> {
        let project_id = request.project_id;
        self.insert_task(request)
            .inspect(|task| {
                info!(
                    "event=task_add module=tracker status=ok project_id={project_id} task_id={}",
                    task.id()
                );
            })
            .inspect_err(|err| {
                warn!("event=task_add module=tracker status=error reason=\"{err}\"");
            })
    }

    fn insert_task(&mut self, request: AddTaskRequest) -> TrackerResult<Task> {
        let AddTaskRequest {
            project_id,
            title,
            description,
            deadline,
        } = request;

        let mut project = self.require_project(project_id)?;
        let max = self.config.max_tasks;
        if project.task_count() >= max {
            return Err(TrackerError::TaskLimitReached { project_id, max });
        }

        let task_title = TaskTitle::new(&title)?;
        let task_description = Description::new(&description)?;
        let task_deadline = parse_deadline(deadline.as_deref())?;

        let id = TaskId::new(self.task_ids.allocate()?);
        let task = Task::new(id, task_title, task_description, task_deadline, &*self.clock);
        project.add_task(task.clone(), &*self.clock)?;
        self.repository.update(&project)?;
        Ok(task)
    }

    /// Edits a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`] when the target is missing,
    /// [`TrackerError::Domain`] when the title or description is invalid,
    /// [`TrackerError::InvalidStatus`] when a supplied status is unknown, or
    /// [`TrackerError::InvalidDeadline`] when a supplied deadline is
    /// malformed.
    pub fn edit_task(&mut self, request: EditTaskRequest) -> TrackerResult<Task> {
        let project_id = request.project_id;
        self.rewrite_task(request)
            .inspect(|task| {
                info!(
                    "event=task_edit module=tracker status=ok project_id={project_id} task_id={}",
                    task.id()
                );
            })
            .inspect_err(|err| {
                warn!("event=task_edit module=tracker status=error reason=\"{err}\"");
            })
    }

    fn rewrite_task(&self, request: EditTaskRequest) -> TrackerResult<Task> {
        let EditTaskRequest {
            project_id,
            task_id,
            title,
            description,
            status,
            deadline,
        } = request;

        let mut project = self.require_project(project_id)?;
        let mut task = require_task(&project, task_id)?;
        let task_title = TaskTitle::new(&title)?;
        let task_description = Description::new(&description)?;
        let new_status = status.as_deref().map(TaskStatus::try_from).transpose()?;
        let new_deadline = parse_deadline(deadline.as_deref())?;

        let clock = &*self.clock;
        task.rewrite(task_title, task_description, clock);
        if let Some(next_status) = new_status {
            task.set_status(next_status, clock);
        }
        if let Some(next_deadline) = new_deadline {
            task.set_deadline(next_deadline, clock);
        }

        project.replace_task(task.clone(), clock)?;
        self.repository.update(&project)?;
        Ok(task)
    }

    /// Deletes a task from its project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`] when the target is missing.
    pub fn delete_task(&mut self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<()> {
        self.remove_task(project_id, task_id)
            .inspect(|()| {
                info!(
                    "event=task_delete module=tracker status=ok project_id={project_id} task_id={task_id}"
                );
            })
            .inspect_err(|err| {
                warn!("event=task_delete module=tracker status=error reason=\"{err}\"");
            })
    }

    fn remove_task(&self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<()> {
        let mut project = self.require_project(project_id)?;
        if project.remove_task(task_id, &*self.clock).is_none() {
            return Err(TrackerError::TaskNotFound {
                project_id,
                task_id,
            });
        }
        self.repository.update(&project)?;
        Ok(())
    }

    /// Sets a task's status.
    ///
    /// The status string must be exactly `todo`, `doing` or `done`; it is
    /// checked before the target is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidStatus`] for any other string, or
    /// [`TrackerError::ProjectNotFound`] / [`TrackerError::TaskNotFound`]
    /// when the target is missing.
    pub fn change_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        status: &str,
    ) -> TrackerResult<Task> {
        self.set_task_status(project_id, task_id, status)
            .inspect(|task| {
                info!(
                    "event=task_status module=tracker status=ok project_id={project_id} task_id={task_id} new_status={}",
                    task.status()
                );
            })
            .inspect_err(|err| {
                warn!("event=task_status module=tracker status=error reason=\"{err}\"");
            })
    }

    fn set_task_status(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        status: &str,
    ) -> TrackerResult<Task> {
        let new_status = TaskStatus::try_from(status)?;
        let mut project = self.require_project(project_id)?;
        let mut task = require_task(&project, task_id)?;

        let clock = &*self.clock;
        task.set_status(new_status, clock);
        project.replace_task(task.clone(), clock)?;
        self.repository.update(&project)?;
        Ok(task)
    }

    /// Returns a project's tasks in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist.
    pub fn list_tasks(&self, project_id: ProjectId) -> TrackerResult<Vec<Task>> {
        let tasks = self.require_project(project_id)?.tasks().to_vec();
        debug!(
            "event=task_list module=tracker status=ok project_id={project_id} count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`] when the target is missing.
    pub fn task(&self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<Task> {
        require_task(&self.require_project(project_id)?, task_id)
    }

    fn require_project(&self, project_id: ProjectId) -> TrackerResult<Project> {
        self.repository
            .find_by_id(project_id)?
            .ok_or(TrackerError::ProjectNotFound(project_id))
    }
}

fn require_task(project: &Project, task_id: TaskId) -> TrackerResult<Task> {
    project
        .task(task_id)
        .cloned()
        .ok_or_else(|| TrackerError::TaskNotFound {
            project_id: project.id(),
            task_id,
        })
}

/// Parses an optional deadline, treating a blank value as absent.
fn parse_deadline(raw: Option<&str>) -> Result<Option<Deadline>, ParseDeadlineError> {
    raw.filter(|value| !value.trim().is_empty())
        .map(Deadline::parse)
        .transpose()
}
