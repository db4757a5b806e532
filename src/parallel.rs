//! Parallel closest-match search: partition, dispatch, fold.
//!
//! The reducer partitions the candidate collection into contiguous
//! chunks, dispatches one search task per chunk through a
//! [`ChunkExecutor`], and folds the partial results into a single global
//! best as they arrive. The fold runs on the calling thread only; no
//! accumulator is shared across workers.
//!
//! Tie-break: the fold replaces the running best on *less-or-equal*
//! distance, so among equal-distance partials the last arrival wins.
//! Arrival order under [`PooledExecutor`](crate::executor::PooledExecutor)
//! depends on worker scheduling, which makes tie results
//! non-deterministic across runs. The sequential scan inside each chunk
//! keeps its own first-wins rule. This asymmetry is long-standing
//! observable behavior and is kept as-is.

use tracing::{debug, trace};

use crate::executor::{ChunkExecutor, ChunkTask};
use crate::partition::partition;
use crate::search::{closest_match, Match};

/// Result type for parallel search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised by the parallel search path.
///
/// Invalid input is never an error: empty collections resolve to
/// `Ok(None)` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An execution unit died before reporting its partial result.
    WorkerFailed {
        /// Partials received before the failure was observed.
        received: usize,
        /// Chunks dispatched.
        expected: usize,
    },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::WorkerFailed { received, expected } => write!(
                f,
                "execution unit failed after {} of {} partial results",
                received, expected
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Configuration for parallel searches.
#[derive(Debug, Clone, Copy)]
pub struct ParallelConfig {
    /// Number of chunks to fan out to. Zero produces no chunks and the
    /// search resolves immediately with its seed match.
    pub workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Config with an explicit worker count.
    pub fn with_workers(workers: usize) -> Self {
        Self { workers }
    }
}

/// Find the candidate closest to `query`, fanning the scan out across
/// chunks of the collection.
///
/// Resolves exactly once: with `Ok(None)` for an empty collection, with
/// `Ok(Some(best))` once a partial has arrived from every dispatched
/// chunk, or with [`SearchError::WorkerFailed`] if an execution unit
/// dies before reporting. A failure never leaves the call suspended.
///
/// The caller suspends on result arrival only; workers run concurrently
/// under the chosen executor. Each chunk is copied into its task, so the
/// caller's collection is never borrowed past the call.
///
/// # Example
/// ```
/// use levmatch::{closest_match_parallel, InlineExecutor, ParallelConfig};
///
/// let candidates: Vec<String> =
///     ["valuee", "evaluer", "value"].iter().map(|s| s.to_string()).collect();
/// let best = closest_match_parallel(
///     "valu",
///     &candidates,
///     &ParallelConfig::with_workers(2),
///     &InlineExecutor,
/// )
/// .unwrap()
/// .unwrap();
/// assert_eq!(best.value, "value");
/// assert_eq!(best.distance, 1);
/// ```
pub fn closest_match_parallel(
    query: &str,
    candidates: &[String],
    config: &ParallelConfig,
    executor: &dyn ChunkExecutor,
) -> SearchResult<Option<Match>> {
    let Some(first) = candidates.first() else {
        return Ok(None);
    };

    let mut best = Match::seed(query, first);

    let chunks = partition(candidates, config.workers);
    if chunks.is_empty() {
        // workers == 0: nothing to dispatch, resolve with the seed.
        return Ok(Some(best));
    }

    let expected = chunks.len();
    debug!(
        target: "levmatch::parallel",
        chunks = expected,
        workers = config.workers,
        candidates = candidates.len(),
        "Dispatching chunked search"
    );

    let tasks: Vec<ChunkTask> = chunks
        .into_iter()
        .map(|chunk| {
            let query = query.to_string();
            let chunk = chunk.to_vec();
            Box::new(move || closest_match(&query, &chunk)) as ChunkTask
        })
        .collect();

    let partials = executor.dispatch(tasks);

    let mut received = 0;
    while received < expected {
        match partials.recv() {
            Ok(partial) => {
                received += 1;
                if let Some(partial) = partial {
                    trace!(
                        target: "levmatch::parallel",
                        value = %partial.value,
                        distance = partial.distance,
                        received,
                        "Partial result"
                    );
                    // Less-or-equal: the last-arriving partial wins a tie.
                    if best.distance >= partial.distance {
                        best = partial;
                    }
                }
            }
            Err(_) => {
                // A sender dropped without reporting: an execution unit died.
                return Err(SearchError::WorkerFailed { received, expected });
            }
        }
    }

    Ok(Some(best))
}
