//! Recorded item actions
//!
//! Each namespace item carries an ordered, append-only log of actions. An
//! action records who did what and when; actions that operate on another
//! item (adding a file to a project, renaming it, destroying it, ...) also
//! carry the destination item's name.

use crate::artifacts::items::physical_id::PhysicalId;
use chrono::{DateTime, Utc};
use derive_new::new;

/// Physical identifier paired with the logical name an item is known by
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct ItemName {
    physical: PhysicalId,
    logical: String,
}

impl ItemName {
    pub fn physical(&self) -> &PhysicalId {
        &self.physical
    }

    pub fn logical(&self) -> &str {
        &self.logical
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.logical, self.physical)
    }
}

/// Discriminant of an action, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Create,
    Add,
    Delete,
    Recover,
    Destroy,
    Rename,
    Label,
    Share,
    Branch,
    Edit,
    Pin,
    Unpin,
    MoveFrom,
    MoveTo,
}

impl ActionType {
    pub fn keyword(&self) -> &'static str {
        match self {
            ActionType::Create => "create",
            ActionType::Add => "add",
            ActionType::Delete => "delete",
            ActionType::Recover => "recover",
            ActionType::Destroy => "destroy",
            ActionType::Rename => "rename",
            ActionType::Label => "label",
            ActionType::Share => "share",
            ActionType::Branch => "branch",
            ActionType::Edit => "edit",
            ActionType::Pin => "pin",
            ActionType::Unpin => "unpin",
            ActionType::MoveFrom => "move-from",
            ActionType::MoveTo => "move-to",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// What an action did, with the data specific to that kind of action
///
/// Kinds that operate on another item carry that item's name (see
/// [`ActionKind::target`]). For actions recorded on a project, the target is
/// a child of the project; the target's path is therefore the project's path
/// joined with the target's logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Edit,
    Label {
        label: String,
    },
    Add {
        name: ItemName,
    },
    Delete {
        name: ItemName,
    },
    Recover {
        name: ItemName,
    },
    Destroy {
        name: ItemName,
    },
    Rename {
        name: ItemName,
        original_name: String,
    },
    Share {
        name: ItemName,
        original_project: Option<String>,
    },
    Branch {
        name: ItemName,
        source: Option<PhysicalId>,
    },
    Pin {
        name: ItemName,
        revision: u32,
    },
    Unpin {
        name: ItemName,
        revision: u32,
    },
    MoveFrom {
        name: ItemName,
        original_project: String,
    },
    MoveTo {
        name: ItemName,
        new_project: String,
    },
}

impl ActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::Create => ActionType::Create,
            ActionKind::Edit => ActionType::Edit,
            ActionKind::Label { .. } => ActionType::Label,
            ActionKind::Add { .. } => ActionType::Add,
            ActionKind::Delete { .. } => ActionType::Delete,
            ActionKind::Recover { .. } => ActionType::Recover,
            ActionKind::Destroy { .. } => ActionType::Destroy,
            ActionKind::Rename { .. } => ActionType::Rename,
            ActionKind::Share { .. } => ActionType::Share,
            ActionKind::Branch { .. } => ActionType::Branch,
            ActionKind::Pin { .. } => ActionType::Pin,
            ActionKind::Unpin { .. } => ActionType::Unpin,
            ActionKind::MoveFrom { .. } => ActionType::MoveFrom,
            ActionKind::MoveTo { .. } => ActionType::MoveTo,
        }
    }

    /// Destination item of the action, if it operates on one
    pub fn target(&self) -> Option<&ItemName> {
        match self {
            ActionKind::Create | ActionKind::Edit | ActionKind::Label { .. } => None,
            ActionKind::Add { name }
            | ActionKind::Delete { name }
            | ActionKind::Recover { name }
            | ActionKind::Destroy { name }
            | ActionKind::Rename { name, .. }
            | ActionKind::Share { name, .. }
            | ActionKind::Branch { name, .. }
            | ActionKind::Pin { name, .. }
            | ActionKind::Unpin { name, .. }
            | ActionKind::MoveFrom { name, .. }
            | ActionKind::MoveTo { name, .. } => Some(name),
        }
    }
}

/// One recorded historical event against an item
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Action {
    timestamp: DateTime<Utc>,
    author: String,
    version: u32,
    comment: Option<String>,
    kind: ActionKind,
}

impl Action {
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }

    pub fn is_label(&self) -> bool {
        matches!(self.kind, ActionKind::Label { .. })
    }

    pub fn into_kind(self) -> ActionKind {
        self.kind
    }
}
