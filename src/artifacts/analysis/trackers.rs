//! Sets of physical items seen during a run
//!
//! One tracker remembers which files have already been processed, so a
//! file shared into several projects contributes its history only once.
//! Another remembers every item that was ever the target of a destroy, so
//! later stages can anticipate history that no longer exists. Both live as
//! long as the analyzer and are shared by all of its jobs.

use crate::artifacts::items::physical_id::PhysicalId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ItemTracker {
    items: HashSet<PhysicalId>,
}

impl ItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning `false` if it was already tracked
    pub fn mark(&mut self, physical: PhysicalId) -> bool {
        self.items.insert(physical)
    }

    pub fn contains(&self, physical: &PhysicalId) -> bool {
        self.items.contains(physical)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tracked items in ascending identifier order
    pub fn sorted(&self) -> Vec<&PhysicalId> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort();
        items
    }
}
