//! Command implementations
//!
//! - `analyze`: run migration jobs over a namespace and print the timeline
//! - `ls`: print the namespace tree of a manifest

pub mod analyze;
pub mod ls;
