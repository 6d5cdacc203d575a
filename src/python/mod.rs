//! Indentation-aware helpers for Python source
//!
//! Python delimits blocks by indentation alone, so a function or an `if`
//! body can be cut out of a submission without parsing it: find the header
//! line, then take every following line indented deeper than the header.
//!
//! ```
//! use curriculum_helpers::python;
//!
//! let code = "a = 1\n\ndef b(d, e):\n  a = 2\n\ndef c():\n  a = 1\n";
//! let def = python::get_def(code, "b").unwrap();
//!
//! assert_eq!(def.function_parameters, "d, e");
//! assert_eq!(def.function_body, "  a = 2\n");
//! assert_eq!(def.function_indentation, 0);
//! ```

mod block;
mod comments;

pub use comments::remove_comments;

use crate::pattern::sources::{INDENT, LINE_END};
use crate::pattern::{concat_regex, Flags, Fragment, Pattern};
use crate::result::PatternError;
use block::{block_end, next_line_start};
use regex::Captures;

/// A function definition found by [`get_def`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMatch {
    /// Header line and body exactly as they appear in the source, starting
    /// with the header's indentation.
    pub def: String,

    /// Leading spaces and tabs on the header line.
    pub function_indentation: usize,

    /// Lines after the header that belong to the function.
    pub function_body: String,

    /// Raw text between the header's parentheses.
    pub function_parameters: String,
}

/// A block found by [`get_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
    /// The header text that matched, without indentation or the colon.
    pub block_condition: String,

    /// Leading spaces and tabs on the header line.
    pub block_indentation: usize,

    /// Lines after the header that belong to the block.
    pub block_body: String,
}

/// Header, extent and indentation of one matched block.
struct Span {
    header_start: usize,
    body_start: usize,
    body_end: usize,
    indentation: usize,
}

impl Span {
    fn from_header(code: &str, header: &Captures<'_>) -> Option<Self> {
        let line = header.get(0)?;
        let indentation = header.name("indent")?.as_str().len();
        let body_start = next_line_start(code, line.end());

        Some(Self {
            header_start: line.start(),
            body_start,
            body_end: block_end(code, body_start, indentation),
            indentation,
        })
    }
}

/// Find the definition of function `name`.
///
/// `name` is matched literally and as a whole identifier: looking for `b`
/// will not find `def bar():`. The header may be indented, `async`, carry a
/// return annotation or end in a comment, and its parameters may wrap onto
/// following lines. Returns `None` when there is no such definition.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::python;
///
/// let code = "class A:\n    def b(self, x):\n        return x\n";
/// let def = python::get_def(code, "b").unwrap();
///
/// assert_eq!(def.function_indentation, 4);
/// assert_eq!(def.function_parameters, "self, x");
/// assert_eq!(def.function_body, "        return x\n");
/// assert_eq!(def.def, "    def b(self, x):\n        return x\n");
///
/// assert!(python::get_def(code, "c").is_none());
/// ```
pub fn get_def(code: &str, name: &str) -> Option<FunctionMatch> {
    let header = match def_header(name) {
        Ok(header) => header,
        Err(err) => {
            log::warn!("cannot build definition pattern for {name:?}: {err}");
            return None;
        }
    };

    let caps = header.as_regex().captures(code)?;
    let span = Span::from_header(code, &caps)?;
    let parameters = caps.name("params")?.as_str();

    Some(FunctionMatch {
        def: code[span.header_start..span.body_end].to_string(),
        function_indentation: span.indentation,
        function_body: code[span.body_start..span.body_end].to_string(),
        function_parameters: parameters.to_string(),
    })
}

/// Find the block introduced by a header line reading `condition:`.
///
/// `condition` is either literal text or a [`Pattern`]; the header line
/// must be optional indentation, then the condition, then a colon. A
/// literal and a pattern describing the same header give identical results.
/// Returns `None` when no header matches.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::{python, Pattern};
///
/// let code = "a = 1\nif a == 1:\n  a = 2\nprint(a)\n";
///
/// let literal = python::get_block(code, "if a == 1").unwrap();
/// let pattern = Pattern::new(r"if +\w+ *== *\d+").unwrap();
/// let matched = python::get_block(code, &pattern).unwrap();
///
/// assert_eq!(literal, matched);
/// assert_eq!(literal.block_condition, "if a == 1");
/// assert_eq!(literal.block_body, "  a = 2");
/// ```
pub fn get_block(code: &str, condition: impl Into<Fragment>) -> Option<BlockMatch> {
    let condition = condition.into();
    let header = match block_header(&condition) {
        Ok(header) => header,
        Err(err) => {
            log::warn!("cannot build block pattern for {}: {err}", condition.source());
            return None;
        }
    };

    let caps = header.as_regex().captures(code)?;
    let span = Span::from_header(code, &caps)?;
    let found = caps.name("condition")?.as_str();

    Some(BlockMatch {
        block_condition: found.to_string(),
        block_indentation: span.indentation,
        block_body: code[span.body_start..span.body_end].to_string(),
    })
}

fn def_header(name: &str) -> Result<Pattern, PatternError> {
    let keyword = Pattern::with_flags(
        &format!(r"{INDENT}(?:async[ \t]+)?def[ \t]+"),
        Flags::MULTI_LINE,
    )?;
    let signature = Pattern::new(&format!(
        r"[ \t]*\((?P<params>(?s:.*?))\)[ \t]*(?:->[^:\r\n]*)?:{LINE_END}"
    ))?;

    concat_regex(concat_regex(keyword, name)?, signature)
}

fn block_header(condition: &Fragment) -> Result<Pattern, PatternError> {
    let source = format!(
        r"{INDENT}(?P<condition>{})[ \t]*:{LINE_END}",
        condition.source()
    );

    Pattern::with_flags(&source, condition.flags() | Flags::MULTI_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKS: &str = "
a = 1

if a == 1:
  a = 2
  b = 3
  if b == 3:
    a = 4

for i in range(10):
  a = 1
";

    #[test]
    fn test_get_def_top_level() {
        let code = "\na = 1\n\ndef b(d, e):\n  a = 2\n\ndef c():\n  a = 1\n";
        let def = get_def(code, "b").unwrap();

        assert_eq!(def.def, "def b(d, e):\n  a = 2\n");
        assert_eq!(def.function_indentation, 0);
        assert_eq!(def.function_body, "  a = 2\n");
        assert_eq!(def.function_parameters, "d, e");
    }

    #[test]
    fn test_get_def_indented() {
        let code = "\n    a = 1\n      \n    def b(d, e):\n      a = 2\n    ";
        let def = get_def(code, "b").unwrap();

        assert_eq!(def.def, "    def b(d, e):\n      a = 2\n    ");
        assert_eq!(def.function_indentation, 4);
        assert_eq!(def.function_body, "      a = 2\n    ");
        assert_eq!(def.function_parameters, "d, e");
    }

    #[test]
    fn test_get_def_missing() {
        assert!(get_def("def a():\n  pass\n", "b").is_none());
        assert!(get_def("", "b").is_none());
    }

    #[test]
    fn test_get_def_whole_name() {
        let code = "def bar():\n  return 1\ndef b():\n  return 2\n";
        let def = get_def(code, "b").unwrap();

        assert_eq!(def.function_body, "  return 2\n");
        assert!(get_def(code, "ba").is_none());
    }

    #[test]
    fn test_get_def_name_is_literal() {
        let code = "def ab():\n  pass\n";
        assert!(get_def(code, "a.").is_none());
        assert!(get_def(code, ".*").is_none());
    }

    #[test]
    fn test_get_def_nested_parentheses() {
        let code = "def f(a=(1, 2), b=g(3)):\n  return a\n";
        let def = get_def(code, "f").unwrap();

        assert_eq!(def.function_parameters, "a=(1, 2), b=g(3)");
    }

    #[test]
    fn test_get_def_annotations_and_async() {
        let code = "async def fetch(url: str) -> bytes:  # io\n    return b''\n";
        let def = get_def(code, "fetch").unwrap();

        assert_eq!(def.function_parameters, "url: str");
        assert_eq!(def.function_body, "    return b''\n");
    }

    #[test]
    fn test_get_def_wrapped_parameters() {
        let code = "def area(width,\n         height):\n    return width * height\n";
        let def = get_def(code, "area").unwrap();

        assert_eq!(def.function_parameters, "width,\n         height");
        assert_eq!(def.function_indentation, 0);
        assert_eq!(def.function_body, "    return width * height\n");
        assert_eq!(def.def, code);
    }

    #[test]
    fn test_get_def_wrapped_parameters_indented() {
        let code = "class A:\n    def m(\n        self,\n        x=(1, 2),\n    ) -> int:\n        return x\ny = 1\n";
        let def = get_def(code, "m").unwrap();

        assert_eq!(def.function_indentation, 4);
        assert_eq!(def.function_parameters, "\n        self,\n        x=(1, 2),\n    ");
        assert_eq!(def.function_body, "        return x");
    }

    #[test]
    fn test_get_block_crlf_matches_lf() {
        let lf = get_block("if x:\n  b\nc\n", "if x").unwrap();
        let crlf = get_block("if x:\r\n  b\r\nc\r\n", "if x").unwrap();

        assert_eq!(crlf.block_body, "  b");
        assert_eq!(crlf, lf);
    }

    #[test]
    fn test_get_def_tabs_count_once() {
        let code = "class A:\n\tdef m(self):\n\t\treturn 1\n\nx = A()\n";
        let def = get_def(code, "m").unwrap();

        assert_eq!(def.function_indentation, 1);
        assert_eq!(def.function_body, "\t\treturn 1\n");
    }

    #[test]
    fn test_get_def_header_at_end() {
        let def = get_def("def f():", "f").unwrap();

        assert_eq!(def.def, "def f():");
        assert_eq!(def.function_body, "");
    }

    #[test]
    fn test_get_def_stops_at_shallower_line() {
        let code = "class A:\n    def m(self):\n        return 1\nx = 2\n";
        let def = get_def(code, "m").unwrap();

        assert_eq!(def.function_body, "        return 1");
    }

    #[test]
    fn test_get_block_literal() {
        let block = get_block(BLOCKS, "if a == 1").unwrap();

        assert_eq!(block.block_condition, "if a == 1");
        assert_eq!(block.block_indentation, 0);
        assert_eq!(block.block_body, "  a = 2\n  b = 3\n  if b == 3:\n    a = 4\n");
    }

    #[test]
    fn test_get_block_pattern_equivalence() {
        let loose = Pattern::new(r"for +\w+ +in +range\(\d+\)").unwrap();
        let built = concat_regex(Pattern::new(r"for +\w+ +in +").unwrap(), "range(10)").unwrap();

        let expected = get_block(BLOCKS, "for i in range(10)").unwrap();
        assert_eq!(expected.block_condition, "for i in range(10)");
        assert_eq!(expected.block_body, "  a = 1\n");
        assert_eq!(get_block(BLOCKS, &loose), Some(expected.clone()));
        assert_eq!(get_block(BLOCKS, built), Some(expected));
    }

    #[test]
    fn test_get_block_nested() {
        let block = get_block(BLOCKS, "if b == 3").unwrap();

        assert_eq!(block.block_indentation, 2);
        assert_eq!(block.block_body, "    a = 4\n");
    }

    #[test]
    fn test_get_block_missing() {
        assert!(get_block(BLOCKS, "while True").is_none());
        // The colon must close the condition.
        assert!(get_block(BLOCKS, "if a").is_none());
    }

    #[test]
    fn test_get_block_invalid_pattern_is_none() {
        let clashing = Pattern::new(r"(?P<indent>if) a == 1").unwrap();
        assert!(get_block(BLOCKS, &clashing).is_none());
    }
}
