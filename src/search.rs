//! Sequential closest-match scan over a candidate collection.

use serde::{Deserialize, Serialize};

use crate::distance::distance;

/// A candidate together with its edit distance to the query.
///
/// Created fresh by each search call and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The candidate string.
    pub value: String,
    /// Edit distance between the candidate and the query.
    pub distance: usize,
}

impl Match {
    /// Upper-bound seed for a scan: the first candidate paired with
    /// `max(|candidate|, |query|)`, which no real distance can exceed.
    pub(crate) fn seed(query: &str, first: &str) -> Self {
        Match {
            value: first.to_string(),
            distance: first.chars().count().max(query.chars().count()),
        }
    }
}

/// Find the candidate closest to `query` by Levenshtein distance.
///
/// Returns `None` for an empty collection; this is a benign "no answer"
/// signal, not an error. Ties break toward the first occurrence: a later
/// candidate never displaces an earlier one at equal distance.
///
/// # Example
/// ```
/// use levmatch::closest_match;
///
/// let best = closest_match("valu", &["value", "valuee", "evaluer"]).unwrap();
/// assert_eq!(best.value, "value");
/// assert_eq!(best.distance, 1);
/// ```
pub fn closest_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<Match> {
    let first = candidates.first()?;
    let mut best = Match::seed(query, first.as_ref());

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let d = distance(query, candidate);
        // Strictly less: first occurrence wins on ties.
        if d < best.distance {
            best = Match {
                value: candidate.to_string(),
                distance: d,
            };
        }
    }

    Some(best)
}
