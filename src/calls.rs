//! Call-site inspection

use crate::comments::scan_js_comments;
use crate::pattern::{concat_regex, Pattern};
use crate::result::PatternError;

/// Check whether `name` is called with no arguments anywhere in `code`.
///
/// `name` must appear as a whole identifier followed by `(`. Calls inside
/// `//` or `/* */` comments do not count, and neither does a declaration
/// such as `function name() {` or a method `name() {`. One call whose
/// argument list is empty (or only whitespace) is enough, whatever the
/// other call sites pass.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::is_called_with_no_args;
///
/// assert!(is_called_with_no_args("myFunc", "myFunc( );"));
/// assert!(!is_called_with_no_args("myFunc", "myFunc(1);"));
/// assert!(!is_called_with_no_args("myFunc", "// myFunc()"));
/// ```
pub fn is_called_with_no_args(name: &str, code: &str) -> bool {
    let pattern = match call_site_pattern(name) {
        Ok(pattern) => pattern,
        Err(err) => {
            log::warn!("cannot build call pattern for {name:?}: {err}");
            return false;
        }
    };

    let code = mask_comments(code);
    let regex = pattern.as_regex();

    let mut pos = 0;
    while let Some(caps) = regex.captures_at(&code, pos) {
        let (Some(site), Some(args)) = (caps.get(0), caps.name("args")) else {
            break;
        };
        let declaration = caps.name("body").is_some();
        if !declaration && args.as_str().trim().is_empty() {
            return true;
        }
        // Resume at the opening paren so nested calls are seen too.
        let open_paren = args.start() - 1;
        pos = if open_paren > site.start() {
            open_paren
        } else {
            site.end()
        };
    }

    false
}

/// Replace every comment with a single space. Unlike the stripper this never
/// gives up: comments after an unclosed literal are masked too.
fn mask_comments(code: &str) -> String {
    let Some(scan) = scan_js_comments(code) else {
        return code.to_string();
    };

    let mut masked = String::with_capacity(code.len());
    let mut copied = 0;
    for span in &scan.comments {
        masked.push_str(&code[copied..span.start]);
        masked.push(' ');
        copied = span.end;
    }

    masked.push_str(&code[copied..]);
    masked
}

fn call_site_pattern(name: &str) -> Result<Pattern, PatternError> {
    let boundary = Pattern::new(r"(?:^|[^\w$])")?;
    let arguments = Pattern::new(r"\s*\((?P<args>[^)]*)\)(?P<body>\s*\{)?")?;

    concat_regex(concat_regex(boundary, name)?, arguments)
}
