//! Whitespace normalization

/// Remove every whitespace character from `text`.
///
/// # Examples
///
/// ```
/// use curriculum_helpers::remove_white_space;
///
/// assert_eq!(remove_white_space(" a b\tc\n d\r\n"), "abcd");
/// ```
pub fn remove_white_space(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_all_kinds_of_whitespace() {
        let text = "This\tstring has\nwhite\u{a0}space\r\n characters \u{2003}.";
        assert_eq!(remove_white_space(text), "Thisstringhaswhitespacecharacters.");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(remove_white_space(""), "");
        assert_eq!(remove_white_space(" \n\t "), "");
    }

    #[test]
    fn test_no_whitespace_unchanged() {
        assert_eq!(remove_white_space("a,b;c"), "a,b;c");
    }
}
