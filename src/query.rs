//! Symbol extraction from a position in a text document.

/// Identifier characters as ctags sees them for C-family sources.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The identifier touching `column` on `line`, both zero-based.
///
/// Columns count characters, not bytes. A cursor sitting just past the end of
/// a word still selects that word, matching how editors report the word at the
/// caret. Returns `None` when the position is outside the text or next to no
/// identifier character.
pub fn word_at(text: &str, line: usize, column: usize) -> Option<&str> {
    let line_text = text.lines().nth(line)?.trim_end_matches('\r');

    let chars: Vec<(usize, char)> = line_text.char_indices().collect();
    if column > chars.len() {
        return None;
    }

    // Prefer the character under the cursor, fall back to the one before it.
    let anchor = if chars.get(column).is_some_and(|&(_, c)| is_word_char(c)) {
        column
    } else if column > 0 && is_word_char(chars[column - 1].1) {
        column - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_word_char(chars[start - 1].1) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < chars.len() && is_word_char(chars[end].1) {
        end += 1;
    }

    let byte_start = chars[start].0;
    let byte_end = chars.get(end).map_or(line_text.len(), |&(i, _)| i);
    Some(&line_text[byte_start..byte_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "int main(void) {\n    return helper_fn(x);\n}\n";

    #[test]
    fn test_word_under_cursor() {
        assert_eq!(word_at(SOURCE, 0, 4), Some("main"));
        assert_eq!(word_at(SOURCE, 0, 6), Some("main"));
        assert_eq!(word_at(SOURCE, 1, 11), Some("helper_fn"));
        assert_eq!(word_at(SOURCE, 1, 4), Some("return"));
    }

    #[test]
    fn test_cursor_just_past_word() {
        // Column 8 is the '(' right after "main".
        assert_eq!(word_at(SOURCE, 0, 8), Some("main"));
        // End of line right after "{" is not a word.
        assert_eq!(word_at(SOURCE, 0, 16), None);
    }

    #[test]
    fn test_no_word_at_position() {
        assert_eq!(word_at(SOURCE, 1, 0), None);
        assert_eq!(word_at(SOURCE, 2, 0), None);
        assert_eq!(word_at(SOURCE, 0, 999), None);
        assert_eq!(word_at(SOURCE, 99, 0), None);
        assert_eq!(word_at("", 0, 0), None);
    }

    #[test]
    fn test_columns_count_characters() {
        let text = "/* é */ naïve_id = 1;";
        assert_eq!(word_at(text, 0, 9), Some("naïve_id"));
        assert_eq!(word_at(text, 0, 3), Some("é"));
    }
}
