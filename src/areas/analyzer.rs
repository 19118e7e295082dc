//! Revision analyzer
//!
//! The analyzer owns everything shared across the jobs of one migration
//! run: the timeline, the processed-file and destroyed-item trackers, the
//! progress counters, and the compiled exclusion patterns. Each registered
//! job walks one part of the namespace on the background job queue and adds
//! to those shared results.
//!
//! ## Usage
//!
//! ```ignore
//! let analyzer = RevisionAnalyzer::new(AnalyzerOptions::new(store, logger, None))?;
//! analyzer.add_item(root, Some(boundary))?;
//! let state = analyzer.into_state();
//! for revision in state.timeline().revisions() { /* ... */ }
//! ```

use crate::areas::job_queue::{AbortSignal, JobQueue};
use crate::areas::store::{Flow, ProjectRef, Store};
use crate::artifacts::analysis::counters::AnalysisCounters;
use crate::artifacts::analysis::inclusion::path_contains;
use crate::artifacts::analysis::path_matcher::PathMatcher;
use crate::artifacts::analysis::state::AnalysisState;
use crate::artifacts::analysis::walker::RevisionWalker;
use crate::artifacts::core::error::RegistrationError;
use crate::artifacts::core::logger::Logger;
use derive_new::new;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const WORKER_NAME: &str = "revision-analyzer";

#[derive(Debug, Clone, new)]
pub struct AnalyzerOptions {
    pub store: Arc<Store>,
    pub logger: Arc<Logger>,
    /// Semicolon-delimited exclusion patterns
    pub exclude: Option<String>,
}

pub struct RevisionAnalyzer {
    store: Arc<Store>,
    logger: Arc<Logger>,
    matcher: Arc<PathMatcher>,
    state: Arc<Mutex<AnalysisState>>,
    counters: Arc<AnalysisCounters>,
    root_projects: Mutex<Vec<ProjectRef>>,
    queue: JobQueue,
}

impl RevisionAnalyzer {
    pub fn new(options: AnalyzerOptions) -> anyhow::Result<Self> {
        let matcher = PathMatcher::new(options.exclude.as_deref().unwrap_or_default())?;
        let queue = JobQueue::new(WORKER_NAME)?;

        Ok(RevisionAnalyzer {
            store: options.store,
            logger: options.logger,
            matcher: Arc::new(matcher),
            state: Arc::new(Mutex::new(AnalysisState::default())),
            counters: Arc::new(AnalysisCounters::default()),
            root_projects: Mutex::new(Vec::new()),
            queue,
        })
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Register a job migrating the subtree at `root`
    ///
    /// The traversal starts at `boundary`, which must be `root` or one of
    /// its ancestors in the same store; labels applied between the boundary
    /// and the root are inherited by the root's subtree. Once the analyzer
    /// is aborting, no further jobs are accepted.
    pub fn add_item(
        &self,
        root: ProjectRef,
        boundary: Option<ProjectRef>,
    ) -> Result<(), RegistrationError> {
        let boundary = boundary.ok_or(RegistrationError::MissingBoundary)?;
        let boundary_project = self
            .store
            .project(boundary)
            .ok_or(RegistrationError::ForeignBoundary)?;
        let root_project = self
            .store
            .project(root)
            .ok_or(RegistrationError::ForeignRoot)?;

        if !path_contains(boundary_project.path(), root_project.path()) {
            return Err(RegistrationError::UnrelatedBoundary {
                root: root_project.path().to_string(),
                boundary: boundary_project.path().to_string(),
            });
        }

        if self.queue.is_aborting() {
            return Err(RegistrationError::QueueStopped);
        }

        let job = TraversalJob {
            store: Arc::clone(&self.store),
            logger: Arc::clone(&self.logger),
            matcher: Arc::clone(&self.matcher),
            state: Arc::clone(&self.state),
            counters: Arc::clone(&self.counters),
            root,
            boundary,
        };
        self.queue
            .queue_work(move |abort| job.run(abort))
            .map_err(|err| {
                tracing::error!(error = %err, "unable to queue traversal");
                RegistrationError::QueueStopped
            })?;

        lock(&self.root_projects).push(root);
        Ok(())
    }

    /// Request cooperative cancellation of the running and queued jobs
    pub fn abort(&self) {
        self.queue.abort();
    }

    pub fn is_aborting(&self) -> bool {
        self.queue.is_aborting()
    }

    /// Signal shared with the running job, for callers that cancel from
    /// another thread
    pub fn abort_signal(&self) -> AbortSignal {
        self.queue.abort_signal()
    }

    /// Number of jobs queued or running
    pub fn pending_jobs(&self) -> usize {
        self.queue.pending()
    }

    /// Block until every registered job has finished
    pub fn wait(&self) {
        self.queue.wait_idle();
    }

    /// Roots of every job registered so far, in registration order
    pub fn root_projects(&self) -> Vec<ProjectRef> {
        lock(&self.root_projects).clone()
    }

    pub fn counters(&self) -> &AnalysisCounters {
        &self.counters
    }

    /// Lock the shared results
    ///
    /// Blocks while a job is running; call [`RevisionAnalyzer::wait`] first
    /// to read the results of every registered job.
    pub fn state(&self) -> MutexGuard<'_, AnalysisState> {
        lock(&self.state)
    }

    pub fn reported_errors(&self) -> Vec<String> {
        self.logger.reported_errors()
    }

    /// Wait for every job, then take the results
    pub fn into_state(self) -> AnalysisState {
        self.wait();
        let mut state = std::mem::take(&mut *lock(&self.state));
        state.set_root_projects(std::mem::take(&mut *lock(&self.root_projects)));
        state
    }
}

struct TraversalJob {
    store: Arc<Store>,
    logger: Arc<Logger>,
    matcher: Arc<PathMatcher>,
    state: Arc<Mutex<AnalysisState>>,
    counters: Arc<AnalysisCounters>,
    root: ProjectRef,
    boundary: ProjectRef,
}

impl TraversalJob {
    fn run(self, abort: &AbortSignal) {
        let (Some(root), Some(boundary)) =
            (self.store.project(self.root), self.store.project(self.boundary))
        else {
            self.logger
                .report_error("Skipping job whose projects are no longer in the store");
            return;
        };

        self.logger.write_section_separator();
        if root.handle() == boundary.handle() {
            self.logger
                .write_line(format!("Building revision list for {}", root.path()));
        } else {
            self.logger.write_line(format!(
                "Building revision list for {} (labels inherited from {})",
                root.path(),
                boundary.path()
            ));
        }
        tracing::info!(root = root.path(), boundary = boundary.path(), "job started");

        let mut state = lock(&self.state);
        let walker = RevisionWalker::new(
            &self.store,
            root.path(),
            &self.matcher,
            &mut state,
            &self.counters,
            &self.logger,
            abort,
        );
        let flow = walker.walk(self.boundary);
        drop(state);

        if flow == Flow::Abort {
            self.logger
                .write_line(format!("Revision analysis aborted in {}", root.path()));
        }
        self.logger
            .write_line(format!("Analysis totals: {}", self.counters.snapshot()));
        tracing::info!(root = root.path(), aborted = flow == Flow::Abort, "job finished");
    }
}

// Jobs update the state one whole record at a time, so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
