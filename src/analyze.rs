// The analysis pass — a bounded forward window over the token stream.
//
// Each token pairs with the tokens after it, up to `limit` positions ahead.
// A pair's contribution is the reciprocal of the token distance: adjacent
// words score 1.0 and the weight decays harmonically with separation.

use std::collections::HashSet;

use tracing::debug;

use crate::store::RelationStore;
use crate::tokenize::tokenize;

/// Distance-to-weight curve: |1 / distance|.
///
/// The sign of `distance` is irrelevant; d and -d score the same.
pub fn calculate_relation(distance: i64) -> f64 {
    (1.0 / distance as f64).abs()
}

/// Slide a window of up to `limit` tokens over `text` and accumulate pair
/// weights into `store`.
///
/// Stop-word handling is asymmetric: a stop word at the window anchor
/// contributes no pairs at all from that position, while a stop word inside
/// the window only suppresses the single pair it would have formed. The same
/// literal word at two positions forms a self-pair.
///
/// Degenerate inputs never fail: empty text, `limit` of 0 or 1, or a text
/// consisting entirely of stop words all leave the store unchanged.
pub fn analyze(
    store: &mut RelationStore,
    text: &str,
    limit: usize,
    stop_words: &HashSet<String>,
) {
    // The window needs random access by index, so tokens are materialized.
    let tokens: Vec<String> = tokenize(text).collect();
    debug!(tokens = tokens.len(), limit, "starting analysis pass");

    for i in 0..tokens.len() {
        let word1 = &tokens[i];
        if stop_words.contains(word1) {
            continue;
        }
        for j in (i + 1)..i.saturating_add(limit).min(tokens.len()) {
            let word2 = &tokens[j];
            if stop_words.contains(word2) {
                continue;
            }
            let weight = calculate_relation(i as i64 - j as i64);
            store.add_to_relation(word1, word2, weight);
        }
    }
}
