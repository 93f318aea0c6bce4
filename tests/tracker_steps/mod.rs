//! Step definitions for tracker behaviour scenarios.

pub mod given;
pub mod world;
