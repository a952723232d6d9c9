// Output formatting — JSON emission and terminal display.

pub mod json;
pub mod terminal;

/// Render a word for display, making the empty word visible.
///
/// Punctuation-only chunks tokenize to `""`, which is a legitimate
/// vocabulary entry but unreadable in a table.
pub fn display_word(word: &str) -> &str {
    if word.is_empty() {
        "\"\""
    } else {
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_word_passes_through_normal_words() {
        assert_eq!(display_word("hello"), "hello");
    }

    #[test]
    fn test_display_word_marks_empty() {
        assert_eq!(display_word(""), "\"\"");
    }
}
