//! Patterns as first-class, composable values

mod compose;
pub(crate) mod sources;

pub use compose::{alternate_regex, concat_regex, permutate_regex, PermuteOptions};

use crate::result::{Match, PatternError};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Matching flags carried alongside a pattern's source text.
///
/// Composing two patterns takes the union of their flags.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::Flags;
///
/// let flags = Flags::CASE_INSENSITIVE | Flags::MULTI_LINE;
/// assert!(flags.case_insensitive);
/// assert!(flags.multi_line);
/// assert!(!flags.dot_matches_new_line);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Letters match regardless of case (`i`).
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (`m`).
    pub multi_line: bool,
    /// `.` also matches `\n` (`s`).
    pub dot_matches_new_line: bool,
}

impl Flags {
    /// No flags set.
    pub const NONE: Flags = Flags {
        case_insensitive: false,
        multi_line: false,
        dot_matches_new_line: false,
    };

    /// Only `case_insensitive` set.
    pub const CASE_INSENSITIVE: Flags = Flags {
        case_insensitive: true,
        ..Flags::NONE
    };

    /// Only `multi_line` set.
    pub const MULTI_LINE: Flags = Flags {
        multi_line: true,
        ..Flags::NONE
    };

    /// Only `dot_matches_new_line` set.
    pub const DOT_MATCHES_NEW_LINE: Flags = Flags {
        dot_matches_new_line: true,
        ..Flags::NONE
    };

    /// Flags set in either `self` or `other`.
    pub fn union(self, other: Flags) -> Flags {
        Flags {
            case_insensitive: self.case_insensitive || other.case_insensitive,
            multi_line: self.multi_line || other.multi_line,
            dot_matches_new_line: self.dot_matches_new_line || other.dot_matches_new_line,
        }
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

/// A compiled regular expression plus the flags it was built with.
///
/// Patterns are immutable. The composers in this crate never modify an
/// existing pattern; they read its [`source`](Pattern::source) and
/// [`flags`](Pattern::flags) and compile a new one.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{Flags, Pattern};
///
/// let digits = Pattern::new(r"\d+").unwrap();
/// assert!(digits.is_match("room 101"));
///
/// let hello = Pattern::with_flags("hello", Flags::CASE_INSENSITIVE).unwrap();
/// assert!(hello.is_match("HELLO world"));
///
/// // Literal text is escaped
/// let dot = Pattern::literal("a.b").unwrap();
/// assert!(dot.is_match("a.b"));
/// assert!(!dot.is_match("axb"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    flags: Flags,
}

impl Pattern {
    /// Compile `source` with no flags.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if `source` is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Self::with_flags(source, Flags::NONE)
    }

    /// Compile `source` with the given flags.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if `source` is not a valid
    /// regular expression.
    pub fn with_flags(source: &str, flags: Flags) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .build()?;

        Ok(Self { regex, flags })
    }

    /// Compile a pattern matching `text` literally.
    ///
    /// # Errors
    ///
    /// Only fails if the escaped text exceeds the regex size limit.
    pub fn literal(text: &str) -> Result<Self, PatternError> {
        Self::new(&regex::escape(text))
    }

    /// The source text the pattern was compiled from, without flags.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// The flags the pattern was compiled with.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Check whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Find the leftmost match in `text`, with all of its groups.
    pub fn find(&self, text: &str) -> Option<Match> {
        let captures = self.regex.captures(text)?;
        let full_match = captures.get(0)?;

        let groups = captures
            .iter()
            .map(|group| group.map(|g| g.as_str().to_string()))
            .collect();

        Some(Match {
            matched: full_match.as_str().to_string(),
            start: full_match.start(),
            end: full_match.end(),
            captures: groups,
        })
    }

    /// Number of groups a match produces, counting the full match.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    /// The compiled regex, for callers that need the full `regex` API.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source() && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

/// An operand accepted by the pattern composers.
///
/// Plain strings are literal text and are escaped when composed; patterns
/// contribute their source and flags unchanged.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{Fragment, Pattern};
///
/// assert_eq!(Fragment::from("a+b").source(), r"a\+b");
///
/// let p = Pattern::new(r"\s").unwrap();
/// assert_eq!(Fragment::from(&p).source(), r"\s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text, matched exactly.
    Literal(String),

    /// An existing pattern.
    Pattern(Pattern),
}

impl Fragment {
    /// Regex source for this fragment.
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            Fragment::Literal(text) => Cow::Owned(regex::escape(text)),
            Fragment::Pattern(pattern) => Cow::Borrowed(pattern.source()),
        }
    }

    /// Flags this fragment brings to a composition.
    pub fn flags(&self) -> Flags {
        match self {
            Fragment::Literal(_) => Flags::NONE,
            Fragment::Pattern(pattern) => pattern.flags(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::Literal(text.clone())
    }
}

impl From<Pattern> for Fragment {
    fn from(pattern: Pattern) -> Self {
        Fragment::Pattern(pattern)
    }
}

impl From<&Pattern> for Fragment {
    fn from(pattern: &Pattern) -> Self {
        Fragment::Pattern(pattern.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_source_and_flags() {
        let pattern = Pattern::with_flags(r"\d+", Flags::MULTI_LINE).unwrap();

        assert_eq!(pattern.source(), r"\d+");
        assert_eq!(pattern.flags(), Flags::MULTI_LINE);
        assert_eq!(pattern.to_string(), r"\d+");
    }

    #[test]
    fn test_pattern_find() {
        let pattern = Pattern::new(r"\d+").unwrap();

        let result = pattern.find("test 123 end").unwrap();
        assert_eq!(result.start, 5);
        assert_eq!(result.end, 8);
        assert_eq!(result.matched, "123");
        assert_eq!(result.group(0), Some("123"));
    }

    #[test]
    fn test_pattern_find_no_match() {
        let pattern = Pattern::new(r"\d+").unwrap();

        assert!(pattern.find("no numbers here").is_none());
    }

    #[test]
    fn test_pattern_find_keeps_unmatched_groups() {
        let pattern = Pattern::new(r"(a)|(b)").unwrap();

        let result = pattern.find("b").unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.captures[1], None);
        assert_eq!(result.group(2), Some("b"));
    }

    #[test]
    fn test_pattern_case_insensitive() {
        let pattern = Pattern::with_flags("hello", Flags::CASE_INSENSITIVE).unwrap();

        let result = pattern.find("HELLO world").unwrap();
        assert_eq!(result.start, 0);
        assert_eq!(result.end, 5);
    }

    #[test]
    fn test_pattern_multi_line_anchors() {
        let plain = Pattern::new(r"^line2$").unwrap();
        let multi = Pattern::with_flags(r"^line2$", Flags::MULTI_LINE).unwrap();

        assert!(!plain.is_match("line1\nline2\nline3"));
        assert!(multi.is_match("line1\nline2\nline3"));
    }

    #[test]
    fn test_pattern_literal_escapes_metacharacters() {
        let pattern = Pattern::literal("f(x) = [1]*").unwrap();

        assert!(pattern.is_match("let f(x) = [1]*;"));
        assert!(!pattern.is_match("f(x) = 1"));
    }

    #[test]
    fn test_pattern_invalid_regex() {
        let result = Pattern::new("(unclosed");
        assert!(matches!(result, Err(PatternError::InvalidRegex(_))));
    }

    #[test]
    fn test_pattern_from_str() {
        let pattern: Pattern = r"\w+".parse().unwrap();
        assert_eq!(pattern.source(), r"\w+");
    }

    #[test]
    fn test_pattern_equality_includes_flags() {
        let a = Pattern::new("a").unwrap();
        let b = Pattern::new("a").unwrap();
        let c = Pattern::with_flags("a", Flags::CASE_INSENSITIVE).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_group_count() {
        assert_eq!(Pattern::new("abc").unwrap().group_count(), 1);
        assert_eq!(Pattern::new("(a)(?:b)(c)").unwrap().group_count(), 3);
    }

    #[test]
    fn test_flags_union() {
        let mut flags = Flags::NONE;
        flags |= Flags::CASE_INSENSITIVE;

        assert_eq!(flags, Flags::CASE_INSENSITIVE);
        assert_eq!(
            Flags::MULTI_LINE | Flags::DOT_MATCHES_NEW_LINE,
            Flags {
                case_insensitive: false,
                multi_line: true,
                dot_matches_new_line: true,
            }
        );
    }

    #[test]
    fn test_fragment_sources() {
        assert_eq!(Fragment::from("ab").source(), "ab");
        assert_eq!(Fragment::from("a|b").source(), r"a\|b");
        assert_eq!(Fragment::from("x").flags(), Flags::NONE);

        let pattern = Pattern::with_flags("a|b", Flags::CASE_INSENSITIVE).unwrap();
        let fragment = Fragment::from(pattern);
        assert_eq!(fragment.source(), "a|b");
        assert_eq!(fragment.flags(), Flags::CASE_INSENSITIVE);
    }

    #[test]
    fn test_pattern_utf8() {
        let pattern = Pattern::new(r"世界").unwrap();

        let result = pattern.find("hello 世界!").unwrap();
        assert_eq!(result.start, 6);
        assert_eq!(result.matched, "世界");
    }
}
