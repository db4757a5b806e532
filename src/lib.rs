//! levmatch - closest-match search by Levenshtein distance
//!
//! This crate computes the edit distance between two strings and uses
//! that metric to find, within a candidate collection, the entry closest
//! to a query string.
//!
//! # Architecture
//!
//! The pipeline has four pieces, leaves first:
//!
//! 1. **Distance kernel** (`distance` module)
//!    - Two-row dynamic-programming Levenshtein distance
//!    - Fast paths for identical strings and case-only differences
//! 2. **Sequential search** (`search` module)
//!    - Linear scan, first occurrence wins on ties
//! 3. **Partitioner** (`partition` module)
//!    - Near-equal contiguous chunks sized to the parallelism degree
//! 4. **Parallel reducer** (`parallel` module, with `pool` and
//!    `executor`)
//!    - One search task per chunk, fanned out through a [`ChunkExecutor`]
//!    - Partials folded in arrival order; last arrival wins a tie
//!
//! # Example
//!
//! ```rust
//! use levmatch::{closest_match, closest_match_parallel};
//! use levmatch::{ParallelConfig, PooledExecutor, WorkerPool};
//!
//! // Synchronous scan.
//! let best = closest_match("valu", &["value", "valuee", "evaluer"]).unwrap();
//! assert_eq!((best.value.as_str(), best.distance), ("value", 1));
//!
//! // Parallel scan over an owned pool.
//! let pool = WorkerPool::new(4);
//! let candidates: Vec<String> =
//!     ["valuee", "evaluer", "value"].iter().map(|s| s.to_string()).collect();
//! let best = closest_match_parallel(
//!     "valu",
//!     &candidates,
//!     &ParallelConfig::with_workers(4),
//!     &PooledExecutor::new(&pool),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!((best.value.as_str(), best.distance), ("value", 1));
//! pool.shutdown();
//! ```
//!
//! # Contracts
//!
//! - **Soft absence**: empty candidate collections yield `None` /
//!   `Ok(None)`, never an error.
//! - **Case folding**: any case-only difference counts as one edit (see
//!   the `distance` module docs).
//! - **Failure**: an execution unit dying before it reports surfaces as
//!   [`SearchError::WorkerFailed`]; the call never hangs on it.

pub mod distance;
pub mod executor;
pub mod parallel;
pub mod partition;
pub mod pool;
pub mod search;

pub use distance::distance;
pub use executor::{ChunkExecutor, ChunkTask, InlineExecutor, PooledExecutor};
pub use parallel::{closest_match_parallel, ParallelConfig, SearchError, SearchResult};
pub use partition::partition;
pub use pool::WorkerPool;
pub use search::{closest_match, Match};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_smoke() {
        assert_eq!(distance("tst", "test"), 1);
    }

    #[test]
    fn test_sequential_and_parallel_agree_on_unique_minimum() {
        let candidates: Vec<String> = ["test", "worooos"].iter().map(|s| s.to_string()).collect();

        let sequential = closest_match("tst", &candidates).unwrap();
        let parallel = closest_match_parallel(
            "tst",
            &candidates,
            &ParallelConfig::with_workers(2),
            &InlineExecutor,
        )
        .unwrap()
        .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.value, "test");
        assert_eq!(sequential.distance, 1);
    }
}
