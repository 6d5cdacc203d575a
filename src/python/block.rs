//! Indentation-delimited block scanning

/// Number of leading spaces and tabs. Tabs count as one column.
pub(crate) fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// End (exclusive byte offset) of the block whose first body line starts at
/// `body_start`.
///
/// The block runs until the first non-blank line indented no deeper than
/// the header, and stops just before the `\n` or `\r\n` ahead of that
/// line. Blank lines never end a block. Without a closing line the block
/// runs to the end of `code`.
pub(crate) fn block_end(code: &str, body_start: usize, header_indentation: usize) -> usize {
    let mut line_start = body_start;

    while line_start < code.len() {
        let line_end = code[line_start..]
            .find('\n')
            .map_or(code.len(), |offset| line_start + offset);
        let line = &code[line_start..line_end];

        if !line.trim().is_empty() && indentation(line) <= header_indentation {
            let mut end = line_start.saturating_sub(1);
            if code[..end].ends_with('\r') {
                end -= 1;
            }
            return end.max(body_start);
        }

        line_start = line_end + 1;
    }

    code.len()
}

/// Start of the line after the header that ends at `header_end`.
pub(crate) fn next_line_start(code: &str, header_end: usize) -> usize {
    match code[header_end..].find('\n') {
        Some(offset) => header_end + offset + 1,
        None => code.len(),
    }
}
