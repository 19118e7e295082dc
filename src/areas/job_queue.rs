//! Sequential background job queue
//!
//! Units of work are executed one at a time, in submission order, on a
//! single dedicated worker thread. Because no two units ever run at the
//! same time, state shared only between units never sees contention.
//!
//! Cancellation is cooperative: [`JobQueue::abort`] raises a shared
//! [`AbortSignal`] that running units poll as often as they like. Units
//! still waiting in the queue when the signal is raised are dropped without
//! running. Nothing is rolled back.

use anyhow::Context;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

pub type WorkUnit = Box<dyn FnOnce(&AbortSignal) + Send + 'static>;

/// Shared, sticky cancellation flag
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
struct PendingWork {
    count: Mutex<usize>,
    drained: Condvar,
}

impl PendingWork {
    fn begin(&self) {
        *self.lock() += 1;
    }

    fn finish(&self) {
        let mut count = self.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.drained.notify_all();
        }
    }

    fn wait_drained(&self) {
        let mut count = self.lock();
        while *count > 0 {
            count = self
                .drained
                .wait(count)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct JobQueue {
    sender: Option<UnboundedSender<WorkUnit>>,
    worker: Option<JoinHandle<()>>,
    abort: AbortSignal,
    pending: Arc<PendingWork>,
}

impl JobQueue {
    /// Start the queue and its named worker thread
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let (sender, mut receiver) = unbounded_channel::<WorkUnit>();
        let abort = AbortSignal::default();
        let pending = Arc::new(PendingWork::default());

        let worker = std::thread::Builder::new()
            .name(name.to_string())
            .spawn({
                let abort = abort.clone();
                let pending = Arc::clone(&pending);
                move || {
                    while let Some(unit) = receiver.blocking_recv() {
                        if !abort.is_raised() {
                            let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| unit(&abort)));
                            if outcome.is_err() {
                                tracing::error!("queued work unit panicked");
                            }
                        }
                        pending.finish();
                    }
                }
            })
            .context(format!("Unable to spawn job queue worker {name}"))?;

        Ok(JobQueue {
            sender: Some(sender),
            worker: Some(worker),
            abort,
            pending,
        })
    }

    pub fn queue_work<F>(&self, unit: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AbortSignal) + Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .context("Job queue has been shut down")?;

        self.pending.begin();
        if sender.send(Box::new(unit)).is_err() {
            self.pending.finish();
            anyhow::bail!("Job queue worker has stopped");
        }

        Ok(())
    }

    pub fn abort(&self) {
        self.abort.raise();
    }

    pub fn is_aborting(&self) -> bool {
        self.abort.is_raised()
    }

    pub fn abort_signal(&self) -> AbortSignal {
        self.abort.clone()
    }

    /// Number of units queued or running
    pub fn pending(&self) -> usize {
        *self.pending.lock()
    }

    /// Block until every queued unit has run or been dropped
    pub fn wait_idle(&self) {
        self.pending.wait_drained();
    }
}

impl Drop for JobQueue {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::error!("job queue worker terminated abnormally");
        }
    }
}
