//! Result types for pattern matching

mod error;

pub use error::PatternError;

/// A single successful match of a [`Pattern`](crate::Pattern).
///
/// # Examples
///
/// ```
/// use curriculum_helpers::Pattern;
///
/// let pattern = Pattern::new(r"(\w+)@(\w+)\.(\w+)").unwrap();
/// let m = pattern.find("Email: user@example.com is valid").unwrap();
///
/// // captures[0] is the full match
/// // captures[1], [2], [3] are the captured groups
/// assert_eq!(m.matched, "user@example.com");
/// assert_eq!(m.captures.len(), 4);
/// assert_eq!(m.captures[1].as_deref(), Some("user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The matched text.
    pub matched: String,

    /// Start position of the match in the subject (byte offset).
    pub start: usize,

    /// End position of the match in the subject (byte offset).
    pub end: usize,

    /// Every group of the pattern, in order.
    ///
    /// - Index 0: The full matched text
    /// - Index 1+: Each capturing group, `None` when the group did not
    ///   take part in the match
    pub captures: Vec<Option<String>>,
}

impl Match {
    /// Number of groups, counting the full match as group 0.
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Always false: a match has at least group 0.
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    /// Text of group `index`, if the group exists and participated.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.captures.get(index).and_then(|g| g.as_deref())
    }
}
