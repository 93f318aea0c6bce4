//! Project and task tracking.
//!
//! Projects are named containers that exclusively own their tasks. The
//! [`services::TaskTracker`] enforces capacity limits, case-insensitive
//! project name uniqueness and cascading deletes. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
