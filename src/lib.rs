//! Todolist: in-memory project and task tracker.
//!
//! This crate keeps projects and their tasks in memory and guards every
//! change with validation, capacity limits and referential integrity.
//!
//! # Architecture
//!
//! The tracker follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`config`]: Capacity limits and their environment loader
//! - [`tracker`]: Projects, tasks and the tracker service
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use todolist::config::TrackerConfig;
//! use todolist::tracker::{
//!     adapters::memory::InMemoryProjectRepository,
//!     domain::TaskStatus,
//!     services::{AddTaskRequest, CreateProjectRequest, TaskTracker},
//! };
//!
//! let mut tracker = TaskTracker::new(
//!     Arc::new(InMemoryProjectRepository::new()),
//!     Arc::new(DefaultClock),
//!     TrackerConfig::default(),
//! );
//!
//! let project = tracker
//!     .create_project(CreateProjectRequest::new("Alpha"))
//!     .expect("project is valid");
//! let task = tracker
//!     .add_task(AddTaskRequest::new(project.id(), "Write spec"))
//!     .expect("task is valid");
//! let done = tracker
//!     .change_status(project.id(), task.id(), "done")
//!     .expect("status is valid");
//! assert_eq!(done.status(), TaskStatus::Done);
//! ```

pub mod config;
pub mod tracker;
