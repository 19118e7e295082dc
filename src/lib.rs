//! Revision timeline reconstruction for version control migrations
//!
//! Given a hierarchical namespace of projects and files, each carrying its own
//! append-only log of historical actions, `revscan` walks the parts of the
//! namespace selected by one or more migration jobs and folds every retained
//! action into a single, time-ordered stream of revisions.
//!
//! - `areas`: stateful coordinators (namespace store, manifest loader, job
//!   queue, revision analyzer)
//! - `artifacts`: data types and algorithms (items, revisions, timeline,
//!   analysis building blocks)
//! - `commands`: command implementations used by the CLI

pub mod areas;
pub mod artifacts;
pub mod commands;
