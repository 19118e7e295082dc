//! Data structures and algorithms
//!
//! - `analysis`: matching, classification, extraction, and traversal
//! - `core`: error types and the status logger
//! - `items`: physical ids, item names, and recorded actions
//! - `revision`: revisions and the shared timeline

pub mod analysis;
pub mod core;
pub mod items;
pub mod revision;
