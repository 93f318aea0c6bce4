//! Given steps for tracker BDD scenarios.

use super::world::{TrackerWorld, build_tracker};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::config::TrackerConfig;
use todolist::tracker::services::CreateProjectRequest;

#[given("a tracker allowing {max_projects:usize} projects and {max_tasks:usize} tasks per project")]
fn tracker_with_limits(world: &mut TrackerWorld, max_projects: usize, max_tasks: usize) {
    world.tracker = build_tracker(TrackerConfig::new(max_projects, max_tasks));
}

#[given(r#"project "{name}" has been created"#)]
fn project_has_been_created(world: &mut TrackerWorld, name: String) -> Result<(), eyre::Report> {
    world
        .tracker
        .create_project(CreateProjectRequest::new(name))
        .wrap_err("create project in scenario setup")?;
    Ok(())
}
