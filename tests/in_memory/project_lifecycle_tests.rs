//! Integration tests for project lifecycle invariants.

use super::helpers::{TestTracker, add_tasks, create_project, tracker, tracker_with_limits};
use eyre::ensure;
use rstest::rstest;
use std::collections::HashSet;
use todolist::tracker::{
    ports::ProjectRepositoryError,
    services::{CreateProjectRequest, EditProjectRequest, TrackerError},
};

#[rstest]
fn live_project_names_stay_unique_ignoring_case(
    mut tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let attempts = ["Alpha", "beta", "ALPHA", "Beta ", " gamma", "GAMMA", "alpha", "Delta"];
    let mut rejected = 0;
    for name in attempts {
        match tracker.create_project(CreateProjectRequest::new(name)) {
            Ok(_) => {}
            Err(TrackerError::Repository(ProjectRepositoryError::DuplicateProjectName(_))) => {
                rejected += 1;
            }
            Err(other) => return Err(other.into()),
        }
    }

    let projects = tracker.list_projects()?;
    let keys: HashSet<_> = projects
        .iter()
        .map(|project| project.name().unique_key())
        .collect();
    ensure!(keys.len() == projects.len(), "duplicate live names: {keys:?}");
    ensure!(projects.len() == 4, "expected 4 projects, got {}", projects.len());
    ensure!(rejected == 4, "expected 4 rejections, got {rejected}");
    Ok(())
}

#[rstest]
fn project_limit_never_grows_the_store() -> Result<(), eyre::Report> {
    let mut tracker = tracker_with_limits(2, 100);
    create_project(&mut tracker, "A")?;
    create_project(&mut tracker, "B")?;

    for name in ["C", "D", "E"] {
        let result = tracker.create_project(CreateProjectRequest::new(name));
        ensure!(
            matches!(result, Err(TrackerError::ProjectLimitReached { max: 2 })),
            "expected limit error, got {result:?}"
        );
    }
    ensure!(tracker.project_count()? == 2, "project count changed");
    Ok(())
}

#[rstest]
fn deleting_a_project_frees_capacity_but_not_its_id() -> Result<(), eyre::Report> {
    let mut tracker = tracker_with_limits(1, 100);
    let first = create_project(&mut tracker, "A")?;
    tracker.delete_project(first.id())?;

    let second = create_project(&mut tracker, "B")?;
    ensure!(second.id() > first.id(), "project id was reused");
    Ok(())
}

#[rstest]
fn cascade_delete_leaves_no_reachable_tasks(mut tracker: TestTracker) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    let beta = create_project(&mut tracker, "Beta")?;
    let doomed = add_tasks(&mut tracker, &alpha, &["One", "Two"])?;
    add_tasks(&mut tracker, &beta, &["Three"])?;

    tracker.delete_project(alpha.id())?;

    let listed = tracker.list_tasks(alpha.id());
    ensure!(
        listed.as_ref().is_err_and(TrackerError::is_not_found),
        "expected not found, got {listed:?}"
    );
    for project in tracker.list_projects()? {
        for task in &doomed {
            ensure!(
                project.task(task.id()).is_none(),
                "task {} reachable through project {}",
                task.id(),
                project.id()
            );
        }
    }
    ensure!(tracker.list_tasks(beta.id())?.len() == 1, "beta lost tasks");
    Ok(())
}

#[rstest]
fn rename_keeps_identity_and_releases_old_name(
    mut tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    add_tasks(&mut tracker, &alpha, &["One"])?;

    let renamed = tracker.edit_project(
        EditProjectRequest::new(alpha.id(), "Omega").with_description("renamed"),
    )?;
    ensure!(renamed.id() == alpha.id(), "id changed on rename");
    ensure!(renamed.task_count() == 1, "tasks lost on rename");

    let reused = create_project(&mut tracker, "alpha")?;
    ensure!(reused.id() != alpha.id(), "new project took the old id");
    Ok(())
}
