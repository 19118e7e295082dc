//! Traversal of one job
//!
//! The walker is the [`Visitor`] driven by [`Store::walk`] from the job's
//! boundary project. It checks the abort signal before every project and
//! file, so cancellation takes effect between two items rather than between
//! two jobs. Errors reading an item's history are reported and the walk
//! moves on to the next item.

use crate::areas::job_queue::AbortSignal;
use crate::areas::store::{FileEntry, Flow, Project, ProjectRef, Store, Visitor};
use crate::artifacts::analysis::counters::AnalysisCounters;
use crate::artifacts::analysis::extractor::RevisionExtractor;
use crate::artifacts::analysis::inclusion::{Inclusion, InclusionClassifier};
use crate::artifacts::analysis::path_matcher::PathMatcher;
use crate::artifacts::analysis::state::AnalysisState;
use crate::artifacts::core::logger::Logger;
use crate::artifacts::items::action::ItemName;

pub struct RevisionWalker<'a> {
    store: &'a Store,
    classifier: InclusionClassifier<'a>,
    matcher: &'a PathMatcher,
    extractor: RevisionExtractor<'a>,
    state: &'a mut AnalysisState,
    counters: &'a AnalysisCounters,
    logger: &'a Logger,
    abort: &'a AbortSignal,
}

impl<'a> RevisionWalker<'a> {
    pub fn new(
        store: &'a Store,
        root_path: &str,
        matcher: &'a PathMatcher,
        state: &'a mut AnalysisState,
        counters: &'a AnalysisCounters,
        logger: &'a Logger,
        abort: &'a AbortSignal,
    ) -> Self {
        RevisionWalker {
            store,
            classifier: InclusionClassifier::new(root_path, matcher),
            matcher,
            extractor: RevisionExtractor::new(store, matcher, counters),
            state,
            counters,
            logger,
            abort,
        }
    }

    /// Walk the namespace from `boundary` down
    pub fn walk(mut self, boundary: ProjectRef) -> Flow {
        let store = self.store;
        store.walk(boundary, &mut self)
    }

    fn process_item(&mut self, item: &ItemName, path: &str, inclusion: Inclusion) {
        if let Err(err) = self.extractor.extract(item, path, inclusion, self.state) {
            self.logger.report_error(format!(
                "Failed to read history of {} ({}): {}",
                path,
                item.physical(),
                err
            ));
        }
    }
}

impl Visitor for RevisionWalker<'_> {
    fn enter_project(&mut self, project: &Project) -> Flow {
        if self.abort.is_raised() {
            return Flow::Abort;
        }

        let inclusion = self.classifier.classify(project.path());
        match inclusion {
            Inclusion::Excluded => {
                self.logger
                    .write_line(format!("Excluding project {}", project.path()));
                Flow::Skip
            }
            Inclusion::Irrelevant => {
                tracing::debug!(path = project.path(), "skipping unrelated project");
                Flow::Skip
            }
            Inclusion::Ancestor | Inclusion::Member => {
                self.process_item(project.name(), project.path(), inclusion);
                self.counters.add_project();
                Flow::Continue
            }
        }
    }

    fn visit_file(&mut self, project: &Project, file: &FileEntry) -> Flow {
        if self.abort.is_raised() {
            return Flow::Abort;
        }

        // files directly inside ancestor projects are outside the migrated subtree
        if self.classifier.classify(project.path()) != Inclusion::Member {
            return Flow::Continue;
        }

        let path = file.path_in(project);
        if self.matcher.matches(&path) {
            self.logger.write_line(format!("Excluding file {path}"));
            self.counters.add_excluded_file();
            return Flow::Skip;
        }

        if !self.state.mark_processed(file.physical().clone()) {
            tracing::debug!(%path, physical = %file.physical(), "file already processed");
            return Flow::Continue;
        }

        self.process_item(file.name(), &path, Inclusion::Member);
        self.counters.add_file();
        Flow::Continue
    }
}
