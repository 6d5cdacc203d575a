//! Error types for curriculum-helpers

use thiserror::Error;

/// Errors related to pattern creation or composition.
///
/// Only the pattern constructors and composers return these. The text
/// operations (comment strippers, the Python extractor, the call-site
/// inspector) never fail: absence is reported as `None` or `false`, and
/// input they cannot make sense of is returned unchanged.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{permutate_regex, PatternError, PermuteOptions};
///
/// match permutate_regex(["only"], PermuteOptions::default()) {
///     Err(PatternError::TooFewElements { count }) => assert_eq!(count, 1),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PatternError {
    /// Invalid regex pattern.
    ///
    /// Returned when a pattern source (given directly, or produced by
    /// composing fragments) does not compile.
    #[error("Invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Too few elements to permute.
    ///
    /// `permutate_regex` needs at least two elements.
    #[error("Permutation needs at least 2 elements, got {count}")]
    TooFewElements {
        /// Number of elements that were supplied
        count: usize,
    },
}
