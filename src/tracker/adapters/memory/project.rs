//! In-memory project repository.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tracker::{
    domain::{KeyedCollection, Project, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: KeyedCollection<Project>,
    name_index: HashMap<String, ProjectId>,
}

impl InMemoryProjectState {
    /// Returns whether a project other than `owner` holds `name`'s
    /// uniqueness key.
    fn name_taken_by_other(&self, name: &ProjectName, owner: ProjectId) -> bool {
        self.name_index
            .get(&name.unique_key())
            .is_some_and(|&indexed| indexed != owner)
    }
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl ProjectRepository for InMemoryProjectRepository {
    fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.contains(project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        if state.name_taken_by_other(project.name(), project.id()) {
            return Err(ProjectRepositoryError::DuplicateProjectName(
                project.name().clone(),
            ));
        }

        state
            .name_index
            .insert(project.name().unique_key(), project.id());
        state.projects.insert(project.clone());
        Ok(())
    }

    fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        let old_key = state
            .projects
            .get(project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?
            .name()
            .unique_key();

        let new_key = project.name().unique_key();
        if new_key != old_key {
            if state.name_taken_by_other(project.name(), project.id()) {
                return Err(ProjectRepositoryError::DuplicateProjectName(
                    project.name().clone(),
                ));
            }
            state.name_index.remove(&old_key);
            state.name_index.insert(new_key, project.id());
        }

        state.projects.replace(project.clone());
        Ok(())
    }

    fn remove(&self, id: ProjectId) -> ProjectRepositoryResult<Project> {
        let mut state = self.write()?;
        let removed = state
            .projects
            .remove(id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        state.name_index.remove(&removed.name().unique_key());
        Ok(removed)
    }

    fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(id).cloned())
    }

    fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        let project = state
            .name_index
            .get(&name.unique_key())
            .and_then(|&id| state.projects.get(id))
            .cloned();
        Ok(project)
    }

    fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.projects.to_vec())
    }

    fn count(&self) -> ProjectRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.projects.len())
    }
}
