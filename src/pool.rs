//! Worker pool for parallel closest-match searches.
//!
//! A fixed set of long-lived worker threads blocks on a bounded channel
//! and executes search tasks as they arrive. The pool is an explicit
//! resource owned by the caller: create it, inject it into searches via
//! [`PooledExecutor`](crate::executor::PooledExecutor), and dispose it
//! with [`WorkerPool::shutdown`]. There is no process-wide pool.
//!
//! Worker threads isolate task panics: a task that unwinds is logged and
//! discarded, and the thread goes back to the channel. The panicked
//! task's result sender drops unsent, which is how the search layer
//! observes the failure.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{trace, warn};

/// A boxed search task that can be sent to a worker thread.
type SearchTask = Box<dyn FnOnce() + Send + 'static>;

/// A pool of persistent worker threads executing search tasks.
pub struct WorkerPool {
    sender: Sender<SearchTask>,
    workers: Vec<JoinHandle<()>>,
    worker_count: usize,
}

impl WorkerPool {
    /// Create a pool with `worker_count` threads, spawned immediately.
    pub fn new(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (sender, receiver) = bounded::<SearchTask>(worker_count * 4);
        let receiver = Arc::new(receiver);

        let workers: Vec<_> = (0..worker_count)
            .map(|id| {
                let rx = Arc::clone(&receiver);
                thread::Builder::new()
                    .name(format!("levmatch-worker-{}", id))
                    .spawn(move || worker_loop(id, rx))
                    .expect("failed to spawn search worker thread")
            })
            .collect();

        Self {
            sender,
            workers,
            worker_count,
        }
    }

    /// Create a pool sized to the host's available execution contexts.
    pub fn with_default_parallelism() -> Self {
        Self::new(num_cpus::get())
    }

    /// Number of worker threads in the pool.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Hand a task to the pool. Any of the workers may pick it up.
    ///
    /// # Panics
    ///
    /// Panics if the pool has been shut down. Shutdown consumes the pool,
    /// so this cannot happen while an executor still borrows it.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(Box::new(task))
            .expect("worker pool has been shut down");
    }

    /// Shut down the pool, waiting for all workers to drain and exit.
    pub fn shutdown(self) {
        // Closing the channel is the only stop signal workers need.
        drop(self.sender);
        for worker in self.workers {
            let _ = worker.join();
        }
    }
}

/// Worker thread main loop: receive, run, repeat until the channel closes.
fn worker_loop(id: usize, receiver: Arc<Receiver<SearchTask>>) {
    while let Ok(task) = receiver.recv() {
        trace!(target: "levmatch::pool", worker = id, "Running task");
        if catch_unwind(AssertUnwindSafe(task)).is_err() {
            // The task's result sender dropped unsent; the dispatcher
            // sees the disconnect. The worker itself stays alive.
            warn!(target: "levmatch::pool", worker = id, "Task panicked");
        }
    }
}
