//! curriculum-helpers: inspect code submissions without parsing them
//!
//! A small toolkit for checking fragments of JavaScript, CSS, HTML and
//! Python the way an automated grader does: strip comments without touching
//! look-alike text in strings and URLs, ask whether a function is called
//! with no arguments, cut a Python function or block out of a file by its
//! indentation, and build regular expressions out of smaller pieces.
//!
//! Every text operation is a pure function. Nothing here fails on odd
//! input: absence is `None` or `false`, and code a stripper cannot make
//! sense of comes back unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use curriculum_helpers::{is_called_with_no_args, remove_js_comments, python};
//!
//! let js = "// setup\nconst url = 'http://example.com';\ninit();\n";
//! assert_eq!(remove_js_comments(js), "\nconst url = 'http://example.com';\ninit();\n");
//! assert!(is_called_with_no_args("init", js));
//!
//! let py = "def area(w, h):\n    return w * h  # rectangle\n";
//! let def = python::get_def(py, "area").unwrap();
//! assert_eq!(def.function_parameters, "w, h");
//! assert_eq!(python::remove_comments(&def.function_body), "    return w * h  \n");
//! ```
//!
//! # Pattern Composition
//!
//! Strings passed to the composers are literal text; [`Pattern`]s keep
//! their syntax and flags.
//!
//! - **Concatenation**: [`concat_regex`] joins two sources
//! - **Alternation**: [`alternate_regex`] matches any one of several
//! - **Permutation**: [`permutate_regex`] matches every ordering of a set,
//!   joined by a separator
//!
//! ```rust
//! use curriculum_helpers::{concat_regex, permutate_regex, Pattern, PermuteOptions};
//!
//! let price = concat_regex("$", Pattern::new(r"\d+").unwrap()).unwrap();
//! assert!(price.is_match("only $5"));
//!
//! let any_order = permutate_regex(["a", "b", "c"], PermuteOptions::new().separator(","))
//!     .unwrap();
//! assert!(any_order.is_match("c,a,b"));
//! assert!(!any_order.is_match("a,b"));
//! ```
//!
//! # Comment Stripping
//!
//! - [`remove_js_comments`]: `//` and `/* */`, literal-aware
//! - [`remove_css_comments`]: `/* */`
//! - [`remove_html_comments`]: `<!-- -->`
//! - [`python::remove_comments`]: `#`, keeping indentation and line breaks

#![warn(missing_docs)]

mod calls;
mod comments;
mod pattern;
pub mod python;
mod result;
mod text;

// Public API exports
pub use calls::is_called_with_no_args;
pub use comments::{remove_css_comments, remove_html_comments, remove_js_comments};
pub use pattern::{
    alternate_regex, concat_regex, permutate_regex, Flags, Fragment, Pattern, PermuteOptions,
};
pub use result::{Match, PatternError};
pub use text::remove_white_space;
