// Stop-word sets — file-based lists and the built-in English list.
//
// The core treats stop words as an opaque set passed in per call; nothing
// here is shared or cached across invocations. File and list errors live in
// this layer — the analysis pass itself never fails.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::tokenize::normalize;

/// Load a stop-word list from a file, one word per line.
///
/// Lines are trimmed and lowercased; blank lines are skipped.
pub fn load_stop_words(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read stop-word list '{}'", path.display()))?;

    let words: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    info!(words = words.len(), path = %path.display(), "loaded stop-word list");
    Ok(words)
}

/// The built-in English stop-word list from the `stop-words` crate.
///
/// Entries are normalized through the tokenizer rules so that e.g. "don't"
/// in the list matches the token "dont".
pub fn english() -> HashSet<String> {
    get(LANGUAGE::English)
        .iter()
        .map(|w| normalize(w))
        .collect()
}
