//! Shared revision timeline
//!
//! The timeline maps each distinct timestamp to the bucket of revisions
//! recorded at exactly that instant. It is the single output of an analysis
//! run: every job registered against an analyzer appends to the same
//! timeline, and the changeset builder downstream consumes it in ascending
//! timestamp order.
//!
//! Buckets are append-only and never removed. Within a bucket revisions keep
//! the order they were recorded in, which is the traversal order.

use crate::artifacts::revision::Revision;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    buckets: BTreeMap<DateTime<Utc>, Vec<Revision>>,
    len: usize,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a revision to the bucket for its timestamp, creating the
    /// bucket on first use
    pub fn record(&mut self, revision: Revision) {
        self.buckets
            .entry(revision.timestamp())
            .or_default()
            .push(revision);
        self.len += 1;
    }

    /// Total number of revisions across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket(&self, timestamp: &DateTime<Utc>) -> Option<&[Revision]> {
        self.buckets.get(timestamp).map(Vec::as_slice)
    }

    /// Buckets in ascending timestamp order
    pub fn buckets(&self) -> impl Iterator<Item = (&DateTime<Utc>, &[Revision])> {
        self.buckets
            .iter()
            .map(|(timestamp, revisions)| (timestamp, revisions.as_slice()))
    }

    /// All revisions, flattened in non-decreasing timestamp order
    pub fn revisions(&self) -> impl Iterator<Item = &Revision> {
        self.buckets.values().flatten()
    }

    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.buckets.keys().next().copied()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.buckets.keys().next_back().copied()
    }
}
