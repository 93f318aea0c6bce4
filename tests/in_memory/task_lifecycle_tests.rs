//! Integration tests for task lifecycle operations.

use super::helpers::{TestTracker, add_tasks, create_project, tracker, tracker_with_limits};
use eyre::ensure;
use rstest::rstest;
use todolist::tracker::{
    domain::TaskStatus,
    services::{AddTaskRequest, EditTaskRequest, TrackerError},
};

#[rstest]
fn tasks_list_in_ascending_id_order(mut tracker: TestTracker) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    let created = add_tasks(&mut tracker, &alpha, &["One", "Two", "Three"])?;
    let second = created
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected three tasks"))?;
    tracker.delete_task(alpha.id(), second.id())?;
    add_tasks(&mut tracker, &alpha, &["Four"])?;

    let ids: Vec<u64> = tracker
        .list_tasks(alpha.id())?
        .iter()
        .map(|task| task.id().value())
        .collect();
    ensure!(ids == vec![1, 3, 4], "unexpected task order {ids:?}");
    Ok(())
}

#[rstest]
fn status_moves_between_any_two_values(mut tracker: TestTracker) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    let task = add_tasks(&mut tracker, &alpha, &["One"])?
        .pop()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;

    for (raw, expected) in [
        ("done", TaskStatus::Done),
        ("todo", TaskStatus::Todo),
        ("doing", TaskStatus::Doing),
        ("done", TaskStatus::Done),
    ] {
        let updated = tracker.change_status(alpha.id(), task.id(), raw)?;
        ensure!(updated.status() == expected, "status {raw} not applied");
    }
    Ok(())
}

#[rstest]
fn zero_task_limit_rejects_every_task() -> Result<(), eyre::Report> {
    let mut tracker = tracker_with_limits(10, 0);
    let alpha = create_project(&mut tracker, "Alpha")?;

    for title in ["Valid title", "", "   "] {
        let result = tracker.add_task(AddTaskRequest::new(alpha.id(), title));
        ensure!(
            matches!(result, Err(TrackerError::TaskLimitReached { max: 0, .. })),
            "expected limit error for {title:?}, got {result:?}"
        );
    }
    ensure!(tracker.list_tasks(alpha.id())?.is_empty(), "task was stored");
    Ok(())
}

#[rstest]
fn blank_title_edit_keeps_stored_task(mut tracker: TestTracker) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    let task = add_tasks(&mut tracker, &alpha, &["Keep me"])?
        .pop()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;

    let result = tracker.edit_task(
        EditTaskRequest::new(alpha.id(), task.id(), "   ")
            .with_description("new")
            .with_status("done"),
    );

    ensure!(result.is_err(), "blank title was accepted");
    ensure!(
        tracker.task(alpha.id(), task.id())? == task,
        "task changed after rejected edit"
    );
    Ok(())
}

#[rstest]
fn task_lookups_are_scoped_to_their_project(
    mut tracker: TestTracker,
) -> Result<(), eyre::Report> {
    let alpha = create_project(&mut tracker, "Alpha")?;
    let beta = create_project(&mut tracker, "Beta")?;
    let task = add_tasks(&mut tracker, &alpha, &["Only in alpha"])?
        .pop()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;

    let result = tracker.change_status(beta.id(), task.id(), "done");
    ensure!(
        matches!(result, Err(TrackerError::TaskNotFound { .. })),
        "expected task not found, got {result:?}"
    );
    ensure!(
        tracker.task(alpha.id(), task.id())?.status() == TaskStatus::Todo,
        "status leaked across projects"
    );
    Ok(())
}
