//! Revision extraction for one item
//!
//! Reads an item's action log in recorded order and keeps the actions that
//! survive filtering as revisions on the shared timeline:
//!
//! 1. A destroy always marks its target as destroyed, even when the action
//!    itself is filtered out below, since the destroyed file may still be
//!    visible through another, unexcluded path.
//! 2. On ancestor projects only labels are kept.
//! 3. Actions whose destination path (item path + target name) matches an
//!    exclusion pattern are dropped.
//!
//! A corrupt record ends extraction for the item. Revisions recorded before
//! it stay on the timeline.

use crate::areas::store::Store;
use crate::artifacts::analysis::counters::AnalysisCounters;
use crate::artifacts::analysis::inclusion::Inclusion;
use crate::artifacts::analysis::path_matcher::PathMatcher;
use crate::artifacts::analysis::state::AnalysisState;
use crate::artifacts::core::error::RecordError;
use crate::artifacts::items::PROJECT_SEPARATOR;
use crate::artifacts::items::action::{ActionKind, ItemName};
use crate::artifacts::revision::Revision;
use derive_new::new;

#[derive(Debug, Clone, Copy, new)]
pub struct RevisionExtractor<'a> {
    store: &'a Store,
    matcher: &'a PathMatcher,
    counters: &'a AnalysisCounters,
}

impl RevisionExtractor<'_> {
    /// Record the revisions of `item`, reached at `path`
    ///
    /// # Returns
    ///
    /// Number of revisions recorded, or the record error that cut the log
    /// short
    pub fn extract(
        &self,
        item: &ItemName,
        path: &str,
        inclusion: Inclusion,
        state: &mut AnalysisState,
    ) -> Result<usize, RecordError> {
        let mut recorded = 0;

        for action in self.store.actions(item) {
            let action = action?;

            if let ActionKind::Destroy { name } = action.kind() {
                state.mark_destroyed(name.physical().clone());
            }

            if inclusion == Inclusion::Ancestor && !action.is_label() {
                continue;
            }

            if let Some(target) = action.kind().target() {
                let target_path = format!("{path}{PROJECT_SEPARATOR}{}", target.logical());
                if self.matcher.matches(&target_path) {
                    tracing::debug!(
                        path = %target_path,
                        action = %action.action_type(),
                        "dropping action on excluded item"
                    );
                    continue;
                }
            }

            state.record(Revision::from_action(item, path, action));
            self.counters.add_revision();
            recorded += 1;
        }

        Ok(recorded)
    }
}
