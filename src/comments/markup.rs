//! Comment stripping for style sheets and markup

use crate::pattern::sources::{builtin, Builtin, CSS_COMMENT, HTML_COMMENT};
use crate::pattern::Pattern;
use std::sync::LazyLock;

static CSS_COMMENTS: Builtin = LazyLock::new(|| Pattern::new(CSS_COMMENT));
static HTML_COMMENTS: Builtin = LazyLock::new(|| Pattern::new(HTML_COMMENT));

/// Remove every `/* */` comment from CSS.
///
/// CSS has no line comments. Everything outside the comments is kept byte
/// for byte; an unclosed `/*` is left alone.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::remove_css_comments;
///
/// let css = "/* theme */\n.a { color: red; /* warm */ }\n";
/// assert_eq!(remove_css_comments(css), "\n.a { color: red;  }\n");
/// ```
pub fn remove_css_comments(code: &str) -> String {
    strip_all(&CSS_COMMENTS, code)
}

/// Remove every `<!-- -->` comment from HTML.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::remove_html_comments;
///
/// let html = "<h1>hello world</h1><!-- a comment--><h2>h2 element</h2>";
/// assert_eq!(remove_html_comments(html), "<h1>hello world</h1><h2>h2 element</h2>");
/// ```
pub fn remove_html_comments(code: &str) -> String {
    strip_all(&HTML_COMMENTS, code)
}

fn strip_all(pattern: &Builtin, code: &str) -> String {
    match builtin(pattern) {
        Some(pattern) => pattern.as_regex().replace_all(code, "").into_owned(),
        None => code.to_string(),
    }
}
