//! Timeline-ready revisions
//!
//! - `timeline`: timestamp-ordered buckets of revisions shared by all jobs

use crate::artifacts::items::action::{Action, ActionKind, ActionType, ItemName};
use chrono::{DateTime, Utc};

pub mod timeline;

/// Flattened fact about one retained action of one visited item
///
/// Unlike [`Action`], a revision knows which item it was recorded against
/// and the logical path that item was reached through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    timestamp: DateTime<Utc>,
    author: String,
    item: ItemName,
    path: String,
    version: u32,
    comment: Option<String>,
    action: ActionKind,
}

impl Revision {
    pub fn from_action(item: &ItemName, path: &str, action: Action) -> Self {
        Revision {
            timestamp: action.timestamp(),
            author: action.author().to_string(),
            item: item.clone(),
            path: path.to_string(),
            version: action.version(),
            comment: action.comment().map(str::to_string),
            action: action.into_kind(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn item(&self) -> &ItemName {
        &self.item
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn action(&self) -> &ActionKind {
        &self.action
    }

    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }
}
