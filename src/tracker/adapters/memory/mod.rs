//! In-memory adapters.

mod project;

pub use project::InMemoryProjectRepository;
