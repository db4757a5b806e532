//! Execution strategies for chunked searches.
//!
//! The reducer in [`crate::parallel`] does not care how its chunk tasks
//! run; it hands a batch of tasks to a [`ChunkExecutor`] and reads
//! partial results off the returned channel in arrival order. The
//! strategy is picked once, when the caller configures its search, and
//! never branched on inside the algorithm.
//!
//! Two strategies are provided: [`PooledExecutor`] runs tasks on a
//! [`WorkerPool`] with true parallelism, and [`InlineExecutor`] runs
//! them one after another on the calling thread, for hosts (or tests)
//! without real parallel execution.

use crossbeam_channel::{bounded, Receiver};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::trace;

use crate::pool::WorkerPool;
use crate::search::Match;

/// The work dispatched for one chunk: produce that chunk's best match.
pub type ChunkTask = Box<dyn FnOnce() -> Option<Match> + Send + 'static>;

/// "Run these tasks and hand back their results as they arrive."
///
/// Contract: every task reports at most once on the returned channel. A
/// task that dies before reporting drops its sender unsent, so a reader
/// counting results observes a disconnect before reaching the dispatched
/// count. Arrival order is whatever the strategy's scheduling produces.
pub trait ChunkExecutor {
    fn dispatch(&self, tasks: Vec<ChunkTask>) -> Receiver<Option<Match>>;
}

/// True-parallel strategy: one pool task per chunk.
pub struct PooledExecutor<'a> {
    pool: &'a WorkerPool,
}

impl<'a> PooledExecutor<'a> {
    pub fn new(pool: &'a WorkerPool) -> Self {
        Self { pool }
    }
}

impl ChunkExecutor for PooledExecutor<'_> {
    fn dispatch(&self, tasks: Vec<ChunkTask>) -> Receiver<Option<Match>> {
        let (tx, rx) = bounded(tasks.len());
        for task in tasks {
            let tx = tx.clone();
            self.pool.submit(move || {
                let partial = task();
                // Receiver may be gone if the caller bailed early.
                let _ = tx.send(partial);
            });
        }
        rx
    }
}

/// Sequential simulation: tasks run inline, arrival order is task order.
///
/// Observable contract matches [`PooledExecutor`], including panic
/// behavior: a panicking task is swallowed here too, leaving its result
/// slot unsent.
pub struct InlineExecutor;

impl ChunkExecutor for InlineExecutor {
    fn dispatch(&self, tasks: Vec<ChunkTask>) -> Receiver<Option<Match>> {
        let (tx, rx) = bounded(tasks.len());
        for (index, task) in tasks.into_iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(task)) {
                Ok(partial) => {
                    let _ = tx.send(partial);
                }
                Err(_) => {
                    trace!(target: "levmatch::executor", index, "Inline task panicked");
                }
            }
        }
        rx
    }
}
