//! Levenshtein distance kernel.
//!
//! Computes the minimum number of single-character insertions, deletions,
//! and substitutions needed to transform one string into another, using
//! the classic two-row dynamic-programming recurrence.
//!
//! Two fast paths run before the general algorithm, in this order:
//!
//! 1. Identical strings return 0 without allocating.
//! 2. Strings that are equal after lowercasing return 1. Any case-only
//!    difference counts as a single edit, no matter how many characters
//!    differ in case. Callers that need the true per-character edit cost
//!    for case changes must not rely on this function.

/// Levenshtein distance between `a` and `b`.
///
/// Pure and total: never fails, never allocates on the fast paths.
/// Characters are Unicode scalar values compared by exact equality.
///
/// # Example
/// ```
/// use levmatch::distance;
///
/// assert_eq!(distance("fasf", "fair"), 2);
/// assert_eq!(distance("ABC", "abc"), 1);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    // Case-only differences collapse to a single edit.
    if a.to_lowercase() == b.to_lowercase() {
        return 1;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = b.len();

    // prev[j]: cost of turning the empty prefix of `a` into b[..j].
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = if ca == cb { prev[j] } else { prev[j] + 1 };
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // After the final swap the last computed row lives in `prev`.
    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(distance("This is a test example.", "This is a test example."), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_case_only_difference_is_one_edit() {
        assert_eq!(distance("This is a Test eXample.", "This is a test example."), 1);
        // Every character differs in case, still a single edit.
        assert_eq!(distance("ABC", "abc"), 1);
    }

    #[test]
    fn test_two_insertions() {
        assert_eq!(
            distance("Need t insertions to match", "Need two insertions to match"),
            2
        );
    }

    #[test]
    fn test_two_substitutions() {
        assert_eq!(
            distance("Need tss insertions to match", "Need two insertions to match"),
            2
        );
        assert_eq!(distance("fasf", "fair"), 2);
    }

    #[test]
    fn test_empty_against_non_empty() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(distance("kitten", "sitting"), distance("sitting", "kitten"));
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_purity() {
        assert_eq!(distance("flaw", "lawn"), distance("flaw", "lawn"));
    }

    #[test]
    fn test_multibyte_characters() {
        // One substitution on the accented character, counted per char.
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("über", "uber"), 1);
    }
}
