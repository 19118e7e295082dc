//! Results shared by every job of one analyzer

use crate::areas::store::ProjectRef;
use crate::artifacts::analysis::trackers::ItemTracker;
use crate::artifacts::items::physical_id::PhysicalId;
use crate::artifacts::revision::Revision;
use crate::artifacts::revision::timeline::Timeline;

#[derive(Debug, Default)]
pub struct AnalysisState {
    timeline: Timeline,
    processed_files: ItemTracker,
    destroyed_items: ItemTracker,
    root_projects: Vec<ProjectRef>,
}

impl AnalysisState {
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn processed_files(&self) -> &ItemTracker {
        &self.processed_files
    }

    pub fn destroyed_items(&self) -> &ItemTracker {
        &self.destroyed_items
    }

    pub fn is_destroyed(&self, physical: &PhysicalId) -> bool {
        self.destroyed_items.contains(physical)
    }

    /// Roots of every registered job; filled in when the analyzer hands
    /// over its results
    pub fn root_projects(&self) -> &[ProjectRef] {
        &self.root_projects
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    pub(crate) fn record(&mut self, revision: Revision) {
        self.timeline.record(revision);
    }

    /// Returns `false` when the file was already processed through another path
    pub(crate) fn mark_processed(&mut self, physical: PhysicalId) -> bool {
        self.processed_files.mark(physical)
    }

    pub(crate) fn mark_destroyed(&mut self, physical: PhysicalId) {
        self.destroyed_items.mark(physical);
    }

    pub(crate) fn set_root_projects(&mut self, roots: Vec<ProjectRef>) {
        self.root_projects = roots;
    }
}
