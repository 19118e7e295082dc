//! Stateful components of an analysis run
//!
//! - `store`: read-only namespace of projects, files, and action logs
//! - `manifest`: builds a store from its text description
//! - `job_queue`: sequential background executor with cooperative abort
//! - `analyzer`: job registration and the results shared by all jobs

pub mod analyzer;
pub mod job_queue;
pub mod manifest;
pub mod store;
