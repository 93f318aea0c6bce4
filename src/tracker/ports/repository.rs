//! Repository port for project storage and lookup.
//!
//! Tasks have no repository of their own: they are stored inside their
//! owning [`Project`], so removing a project removes its tasks with it.

use crate::tracker::domain::{Project, ProjectId, ProjectName};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project storage contract.
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// ID already exists or [`ProjectRepositoryError::DuplicateProjectName`]
    /// when another project has the same name ignoring case.
    fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Replaces a stored project with `project` in a single step.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist or [`ProjectRepositoryError::DuplicateProjectName`] when the new
    /// name collides with a different project.
    fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Removes a project together with every task it owns.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    fn remove(&self, id: ProjectId) -> ProjectRepositoryResult<Project>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Finds a project whose name matches `name` ignoring case.
    fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project in ascending identifier order.
    fn list(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns the number of stored projects.
    fn count(&self) -> ProjectRepositoryResult<usize>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// A project with the same name, ignoring case, already exists.
    #[error("project name must be unique: '{0}' already exists")]
    DuplicateProjectName(ProjectName),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
