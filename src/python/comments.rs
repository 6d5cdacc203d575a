//! `#` comment removal for Python

use crate::pattern::sources::{builtin, Builtin, PY_COMMENT, PY_STRING, PY_UNCLOSED};
use crate::pattern::{alternate_regex, Pattern};
use std::sync::LazyLock;

static PY_TOKENS: Builtin = LazyLock::new(|| {
    let branches = [PY_STRING, PY_COMMENT, PY_UNCLOSED]
        .into_iter()
        .map(Pattern::new)
        .collect::<Result<Vec<_>, _>>()?;

    alternate_regex(branches)
});

/// Remove `#` comments from Python code without changing its layout.
///
/// Each comment is cut from the `#` up to the line break. The line break and
/// everything before the `#` (indentation, trailing spaces) stay, so a
/// comment-only line becomes a blank line with its indentation intact. A `#`
/// inside a string, including a triple-quoted one, is not a comment.
///
/// If a quote is never closed the code is returned unchanged.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::python;
///
/// let code = "a = 1\n  # note\nb = '#' # tag\n";
/// assert_eq!(python::remove_comments(code), "a = 1\n  \nb = '#' \n");
/// ```
pub fn remove_comments(code: &str) -> String {
    let Some(tokens) = builtin(&PY_TOKENS) else {
        return code.to_string();
    };

    let mut out = String::with_capacity(code.len());
    let mut copied = 0;

    for caps in tokens.as_regex().captures_iter(code) {
        if let Some(comment) = caps.name("comment") {
            out.push_str(&code[copied..comment.start()]);
            copied = comment.end();
        } else if let Some(quote) = caps.name("unclosed") {
            log::debug!(
                "unterminated string at byte {}; leaving code unchanged",
                quote.start()
            );
            return code.to_string();
        }
    }

    out.push_str(&code[copied..]);
    out
}
