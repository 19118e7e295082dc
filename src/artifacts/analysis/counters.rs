//! Progress counters
//!
//! Written by the job queue worker and polled by the caller without
//! locking, so every counter is atomic. Counters only ever grow.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct AnalysisCounters {
    projects: AtomicU64,
    files: AtomicU64,
    revisions: AtomicU64,
    excluded_files: AtomicU64,
}

impl AnalysisCounters {
    pub fn projects(&self) -> u64 {
        self.projects.load(Ordering::Relaxed)
    }

    pub fn files(&self) -> u64 {
        self.files.load(Ordering::Relaxed)
    }

    pub fn revisions(&self) -> u64 {
        self.revisions.load(Ordering::Relaxed)
    }

    pub fn excluded_files(&self) -> u64 {
        self.excluded_files.load(Ordering::Relaxed)
    }

    pub(crate) fn add_project(&self) {
        self.projects.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_file(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_revision(&self) {
        self.revisions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_excluded_file(&self) {
        self.excluded_files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            projects: self.projects(),
            files: self.files(),
            revisions: self.revisions(),
            excluded_files: self.excluded_files(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub projects: u64,
    pub files: u64,
    pub revisions: u64,
    pub excluded_files: u64,
}

impl std::fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} projects, {} files, {} revisions ({} files excluded)",
            self.projects, self.files, self.revisions, self.excluded_files
        )
    }
}
