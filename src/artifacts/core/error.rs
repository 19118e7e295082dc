use crate::artifacts::items::physical_id::PhysicalId;
use derive_new::new;
use thiserror::Error;

/// Rejection of a job at registration time
///
/// These indicate a programming error on the caller's side and are returned
/// immediately from the registering call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("boundary project is required")]
    MissingBoundary,
    #[error("boundary project belongs to a different store")]
    ForeignBoundary,
    #[error("root project belongs to a different store")]
    ForeignRoot,
    #[error("boundary project {boundary} does not contain root project {root}")]
    UnrelatedBoundary { root: String, boundary: String },
    #[error("job queue is no longer accepting work")]
    QueueStopped,
}

/// An action record that could not be read or decoded
///
/// Ends the action log of the item it was found in; actions before it are
/// still usable.
#[derive(Debug, Clone, Error, PartialEq, Eq, new)]
#[error("corrupt action record #{index} of item {physical}: {reason}")]
pub struct RecordError {
    physical: PhysicalId,
    index: usize,
    reason: String,
}

impl RecordError {
    pub fn physical(&self) -> &PhysicalId {
        &self.physical
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Error)]
#[error("invalid exclusion patterns `{patterns}`")]
pub struct PatternError {
    patterns: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    pub fn new(patterns: impl Into<String>, source: regex::Error) -> Self {
        Self {
            patterns: patterns.into(),
            source,
        }
    }
}
