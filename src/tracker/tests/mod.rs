//! Unit tests for the tracker module.
//!
//! Tests are organised by layer: domain value validation, the in-memory
//! repository contract, and service orchestration.
