//! Port contracts for project storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the tracker
//! service.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
