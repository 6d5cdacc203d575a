//! Comment stripping for C-family code (JavaScript and friends)

use crate::pattern::sources::{
    builtin, Builtin, BLOCK_COMMENT, JS_REGEX_LITERAL, JS_STRING, JS_UNCLOSED, LINE_COMMENT,
};
use crate::pattern::{alternate_regex, Pattern};
use std::ops::Range;
use std::sync::LazyLock;

/// Literals first, so comment markers inside them are never seen as
/// comments; the unclosed branch last, to catch what nothing else closed.
static JS_TOKENS: Builtin = LazyLock::new(|| {
    let branches = [
        JS_STRING,
        LINE_COMMENT,
        BLOCK_COMMENT,
        JS_REGEX_LITERAL,
        JS_UNCLOSED,
    ]
    .into_iter()
    .map(Pattern::new)
    .collect::<Result<Vec<_>, _>>()?;

    alternate_regex(branches)
});

/// Keywords after which a `/` starts a regex literal rather than a division.
const REGEX_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

/// Comment spans found by one left-to-right pass over the code.
#[derive(Debug, Default)]
pub(crate) struct CommentScan {
    /// Byte ranges of `//` and `/* */` comments, in order. An unclosed block
    /// comment runs to the end of the code.
    pub(crate) comments: Vec<Range<usize>>,

    /// Offset of the first string, template, block comment or regex
    /// literal that never closes.
    pub(crate) unterminated: Option<usize>,
}

/// Locate every comment in JavaScript-like code.
///
/// Scanning carries on past an unclosed literal, so comments after it are
/// still reported; `unterminated` records where the first one was.
pub(crate) fn scan_js_comments(code: &str) -> Option<CommentScan> {
    let regex = builtin(&JS_TOKENS)?.as_regex();
    let mut scan = CommentScan::default();
    let mut pos = 0;

    while let Some(caps) = regex.captures_at(code, pos) {
        let Some(token) = caps.get(0) else {
            break;
        };

        if caps.name("string").is_some() {
            pos = token.end();
        } else if caps.name("line").is_some() && code[..token.start()].ends_with(':') {
            pos = token.start() + 2;
        } else if caps.name("line").is_some() || caps.name("block").is_some() {
            scan.comments.push(token.range());
            pos = token.end();
        } else if caps.name("regex").is_some() {
            pos = if scan.is_division(code, token.start()) {
                token.start() + 1
            } else {
                token.end()
            };
        } else if token.as_str() == "/" && code[token.end()..].starts_with('*') {
            scan.unterminated.get_or_insert(token.start());
            scan.comments.push(token.start()..code.len());
            break;
        } else {
            if token.as_str() != "/" || !scan.is_division(code, token.start()) {
                scan.unterminated.get_or_insert(token.start());
            }
            pos = token.end();
        }
    }

    Some(scan)
}

impl CommentScan {
    /// Whether a `/` at `slash` follows a value, ignoring the comments
    /// found so far.
    fn is_division(&self, code: &str, slash: usize) -> bool {
        follows_operand(self.preceding(code, slash))
    }

    /// Code before `end` up to the nearest comment that has code after it.
    fn preceding<'a>(&self, code: &'a str, end: usize) -> &'a str {
        let mut end = end;
        for span in self.comments.iter().rev() {
            let gap = &code[span.end..end];
            if !gap.trim().is_empty() {
                return gap;
            }
            end = span.start;
        }
        &code[..end]
    }
}

/// Remove `//` and `/* */` comments from JavaScript-like code.
///
/// String, template and regex literals are copied through untouched, as is
/// a `//` directly after a `:` (the `http://` in a bare URL). Line comments
/// lose everything up to the line break; the line break itself stays, so
/// layout is preserved.
///
/// If a string, template, block comment or regex literal is never closed,
/// the input is returned unchanged.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::remove_js_comments;
///
/// let code = "let a = 1; // one\n/* two */let b = 'http://x.com';\n";
/// assert_eq!(remove_js_comments(code), "let a = 1; \nlet b = 'http://x.com';\n");
///
/// assert_eq!(remove_js_comments("/ unclosed regex"), "/ unclosed regex");
/// ```
pub fn remove_js_comments(code: &str) -> String {
    let Some(scan) = scan_js_comments(code) else {
        return code.to_string();
    };
    if let Some(at) = scan.unterminated {
        log::debug!("unterminated literal at byte {at}; leaving code unchanged");
        return code.to_string();
    }

    let mut out = String::with_capacity(code.len());
    let mut copied = 0;
    for span in &scan.comments {
        out.push_str(&code[copied..span.start]);
        copied = span.end;
    }

    out.push_str(&code[copied..]);
    out
}

/// Whether a `/` directly after `before` follows a value, making it a
/// division.
fn follows_operand(before: &str) -> bool {
    let before = before.trim_end();
    let Some(last) = before.chars().next_back() else {
        return false;
    };

    if last == ')' || last == ']' {
        return true;
    }
    if !is_ident_char(last) {
        return false;
    }

    let word_start = before
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident_char(c))
        .last()
        .map_or(0, |(i, _)| i);
    let word = &before[word_start..];

    !REGEX_KEYWORDS.contains(&word)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
