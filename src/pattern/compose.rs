//! Building new patterns out of strings and existing patterns

use super::{Flags, Fragment, Pattern};
use crate::result::PatternError;

const DEFAULT_SEPARATOR: &str = "||";

/// Options for [`permutate_regex`].
///
/// Defaults to the `"||"` separator with a capturing outer group.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::PermuteOptions;
///
/// let options = PermuteOptions::new().separator(",").capture(false);
/// assert_eq!(options.elements_separator, ",");
/// assert!(!options.capture);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermuteOptions {
    /// Text placed between consecutive elements, matched literally.
    pub elements_separator: String,
    /// Wrap the whole alternation in a capturing group.
    pub capture: bool,
}

impl Default for PermuteOptions {
    fn default() -> Self {
        Self {
            elements_separator: DEFAULT_SEPARATOR.to_string(),
            capture: true,
        }
    }
}

impl PermuteOptions {
    /// Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator placed between elements.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.elements_separator = separator.into();
        self
    }

    /// Choose between a capturing and a non-capturing outer group.
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }
}

/// Concatenate two fragments into a new pattern.
///
/// The result's source is the first source followed by the second, with no
/// grouping added. Its flags are the union of both operands' flags.
///
/// # Errors
///
/// Returns [`PatternError::InvalidRegex`] if the joined source does not
/// compile (for instance when one side is an unbalanced piece of a pattern).
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{concat_regex, Pattern};
///
/// let any = Pattern::new(".*").unwrap();
/// let tail = Pattern::new(r"b\s").unwrap();
/// assert_eq!(concat_regex(&any, &tail).unwrap().source(), r".*b\s");
///
/// // Strings are taken literally
/// assert_eq!(concat_regex("a.", "b").unwrap().source(), r"a\.b");
/// ```
pub fn concat_regex(
    a: impl Into<Fragment>,
    b: impl Into<Fragment>,
) -> Result<Pattern, PatternError> {
    let (a, b) = (a.into(), b.into());
    let source = format!("{}{}", a.source(), b.source());

    Pattern::with_flags(&source, a.flags() | b.flags())
}

/// Build a non-capturing alternation of the given fragments, in order.
///
/// Each fragment becomes one branch, so earlier fragments take priority
/// when several could match at the same position.
///
/// # Errors
///
/// Returns [`PatternError::InvalidRegex`] if the combined source does not
/// compile.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{alternate_regex, Fragment, Pattern};
///
/// let number = Pattern::new(r"\d+").unwrap();
/// let items: Vec<Fragment> = vec!["none".into(), "n/a".into(), number.into()];
/// let either = alternate_regex(items).unwrap();
/// assert_eq!(either.source(), r"(?:none|n/a|\d+)");
/// ```
pub fn alternate_regex<I, F>(items: I) -> Result<Pattern, PatternError>
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    let (sources, flags) = collect_sources(items);
    alternation(&sources, flags, false)
}

/// Build a pattern matching every ordering of `items`.
///
/// Each permutation is the elements in that order joined by the separator,
/// and all `n!` permutations are alternatives of one group. The group is
/// capturing unless [`PermuteOptions::capture`] is turned off. The result is
/// not anchored to the start or end of the subject.
///
/// Strings are literal text. Each element is wrapped in a non-capturing
/// group, so alternations inside a pattern element stay inside it.
///
/// The number of alternatives grows as `n!`; keep `items` small.
///
/// # Errors
///
/// Returns [`PatternError::TooFewElements`] for fewer than two items, and
/// [`PatternError::InvalidRegex`] if the combined source does not compile.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{permutate_regex, PermuteOptions};
///
/// let pattern = permutate_regex(["a", "b", "c"], PermuteOptions::default()).unwrap();
/// assert!(pattern.is_match("c||a||b"));
/// assert!(!pattern.is_match("a||b"));
///
/// let csv = permutate_regex(["a", "b"], PermuteOptions::new().separator(",")).unwrap();
/// assert!(csv.is_match("b,a"));
/// ```
pub fn permutate_regex<I, F>(items: I, options: PermuteOptions) -> Result<Pattern, PatternError>
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    let (sources, flags) = collect_sources(items);
    if sources.len() < 2 {
        return Err(PatternError::TooFewElements {
            count: sources.len(),
        });
    }

    let elements: Vec<String> = sources.iter().map(|s| format!("(?:{s})")).collect();
    let separator = regex::escape(&options.elements_separator);

    let orderings = permutations(&elements);
    log::trace!(
        "permuting {} elements into {} alternatives",
        elements.len(),
        orderings.len()
    );

    let sequences: Vec<String> = orderings
        .iter()
        .map(|ordering| ordering.join(&separator))
        .collect();

    alternation(&sequences, flags, options.capture)
}

fn collect_sources<I, F>(items: I) -> (Vec<String>, Flags)
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    let mut flags = Flags::NONE;
    let sources = items
        .into_iter()
        .map(|item| {
            let fragment = item.into();
            flags |= fragment.flags();
            fragment.source().into_owned()
        })
        .collect();

    (sources, flags)
}

fn alternation(branches: &[String], flags: Flags, capture: bool) -> Result<Pattern, PatternError> {
    let open = if capture { "(" } else { "(?:" };
    let source = format!("{open}{})", branches.join("|"));

    Pattern::with_flags(&source, flags)
}

/// All orderings of `items`, in lexicographic order of their indices.
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);

        for tail in permutations(&rest) {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.push(head.clone());
            ordering.extend(tail);
            result.push(ordering);
        }
    }

    result
}
