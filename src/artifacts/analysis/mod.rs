//! Revision analysis building blocks
//!
//! - `path_matcher`: exclusion patterns
//! - `inclusion`: member/ancestor/irrelevant classification of projects
//! - `trackers`: processed-file and destroyed-item sets
//! - `counters`: atomic progress counters
//! - `state`: the results shared by all jobs of an analyzer
//! - `extractor`: turns one item's action log into revisions
//! - `walker`: drives a job's traversal of the namespace
//!
//! ## Algorithm
//!
//! A job walks the namespace in pre-order from its boundary project. Each
//! project is classified against the job's root: projects above the root
//! contribute only their labels, projects at or below it contribute every
//! action. Files are processed only inside the root, at most once per
//! physical file across all jobs, and never when excluded by pattern.

pub mod counters;
pub mod extractor;
pub mod inclusion;
pub mod path_matcher;
pub mod state;
pub mod trackers;
pub mod walker;

pub const PATTERN_DELIMITER: &str = ";";
