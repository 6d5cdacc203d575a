//! Regex sources shared by the strippers and the extractor

use super::Pattern;
use crate::result::PatternError;
use std::sync::LazyLock;

/// A built-in pattern, compiled on first use.
pub(crate) type Builtin = LazyLock<Result<Pattern, PatternError>>;

/// Fetch a built-in pattern, logging if it failed to compile.
pub(crate) fn builtin(pattern: &Builtin) -> Option<&Pattern> {
    match &**pattern {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            log::error!("built-in pattern failed to compile: {err}");
            None
        }
    }
}

/// Double, single or backtick quoted literal, closed on the same line
/// (backtick literals may span lines).
pub(crate) const JS_STRING: &str =
    r#"(?P<string>"(?:[^"\\\r\n]|\\(?s:.))*"|'(?:[^'\\\r\n]|\\(?s:.))*'|`(?:[^`\\]|\\(?s:.))*`)"#;

/// `//` up to, not including, the line break.
pub(crate) const LINE_COMMENT: &str = r"(?P<line>//[^\r\n]*)";

/// `/* ... */`, shortest span.
pub(crate) const BLOCK_COMMENT: &str = r"(?P<block>/\*(?s:.*?)\*/)";

/// A `/.../flags` literal on one line. Character classes may contain `/`.
/// The body cannot start with `*` or `/`, which would be a comment.
pub(crate) const JS_REGEX_LITERAL: &str = concat!(
    r"(?P<regex>/",
    r"(?:[^*/\\\[\r\n]|\\.|\[(?:[^\]\\\r\n]|\\.)*\])",
    r"(?:[^/\\\[\r\n]|\\.|\[(?:[^\]\\\r\n]|\\.)*\])*",
    r"/[A-Za-z]*)"
);

/// A quote or slash that none of the closed forms above could consume.
pub(crate) const JS_UNCLOSED: &str = r#"(?P<unclosed>["'`/])"#;

/// `/* ... */` in style sheets.
pub(crate) const CSS_COMMENT: &str = r"/\*(?s:.*?)\*/";

/// `<!-- ... -->` in markup.
pub(crate) const HTML_COMMENT: &str = r"<!--(?s:.*?)-->";

/// Python string literals: triple-quoted first so `"""` is not read as an
/// empty string followed by a quote.
pub(crate) const PY_STRING: &str = concat!(
    r#"(?P<string>"""(?s:.*?)"""|'''(?s:.*?)'''"#,
    r#"|"(?:[^"\\\r\n]|\\(?s:.))*"|'(?:[^'\\\r\n]|\\(?s:.))*')"#
);

/// `#` up to, not including, the line break.
pub(crate) const PY_COMMENT: &str = r"(?P<comment>#[^\r\n]*)";

/// A quote that no string form could close.
pub(crate) const PY_UNCLOSED: &str = r#"(?P<unclosed>["'])"#;

/// Leading indentation of a header line, spaces and tabs only.
pub(crate) const INDENT: &str = r"^(?P<indent>[ \t]*)";

/// End of a header line: optional trailing comment, optional `\r`.
pub(crate) const LINE_END: &str = r"[ \t]*(?:#[^\r\n]*)?\r?$";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sources_compile() {
        for source in [
            JS_STRING,
            LINE_COMMENT,
            BLOCK_COMMENT,
            JS_REGEX_LITERAL,
            JS_UNCLOSED,
            CSS_COMMENT,
            HTML_COMMENT,
            PY_STRING,
            PY_COMMENT,
            PY_UNCLOSED,
            INDENT,
            LINE_END,
        ] {
            assert!(Pattern::new(source).is_ok(), "failed to compile {source}");
        }
    }

    #[test]
    fn test_js_regex_literal_with_class() {
        let pattern = Pattern::new(JS_REGEX_LITERAL).unwrap();

        let result = pattern.find(r"x = /[/*]+\//g;").unwrap();
        assert_eq!(result.matched, r"/[/*]+\//g");
    }

    #[test]
    fn test_js_regex_literal_does_not_start_comment() {
        let pattern = Pattern::new(JS_REGEX_LITERAL).unwrap();

        assert!(pattern.find("/* not a regex */").is_none());
        assert!(pattern.find("// not a regex").is_none());
    }

    #[test]
    fn test_py_string_triple_quoted() {
        let pattern = Pattern::new(PY_STRING).unwrap();

        let result = pattern.find("x = \"\"\"doc # not\ncomment\"\"\"").unwrap();
        assert_eq!(result.matched, "\"\"\"doc # not\ncomment\"\"\"");
    }
}
