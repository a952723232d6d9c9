// Tokenization — whitespace splitting and alphanumeric normalization.
//
// A word is whatever sits between runs of whitespace, stripped down to its
// alphanumeric characters and lowercased. A chunk made entirely of
// punctuation normalizes to the empty string, and the empty string is kept:
// the analyzer depends on token positions matching chunk positions, so no
// chunk is ever dropped.

/// Normalize one whitespace-delimited chunk into a word.
///
/// Keeps Unicode-alphanumeric characters only, lowercased, in their original
/// relative order. `"Don't"` becomes `"dont"`, `"--"` becomes `""`.
pub fn normalize(chunk: &str) -> String {
    chunk
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lazily tokenize a text blob into normalized words.
///
/// Yields exactly one word per whitespace-delimited chunk, empty words
/// included.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count_matches_chunk_count() {
        let text = "one  two\tthree\nfour   five";
        let chunks = text.split_whitespace().count();
        let tokens = tokenize(text).count();
        assert_eq!(tokens, chunks, "every chunk must yield exactly one token");
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens: Vec<String> = tokenize("Hello, World! Don't").collect();
        assert_eq!(tokens, vec!["hello", "world", "dont"]);
    }

    #[test]
    fn test_punctuation_only_chunk_yields_empty_word() {
        let tokens: Vec<String> = tokenize("a -- b").collect();
        assert_eq!(tokens, vec!["a", "", "b"]);
    }

    #[test]
    fn test_digits_are_kept() {
        let tokens: Vec<String> = tokenize("route 66!").collect();
        assert_eq!(tokens, vec!["route", "66"]);
    }

    #[test]
    fn test_unicode_alphanumerics_survive() {
        let tokens: Vec<String> = tokenize("Füße größer").collect();
        assert_eq!(tokens, vec!["füße", "größer"]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \n\t ").count(), 0);
    }
}
