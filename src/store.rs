// The relation store — a symmetric, weighted word-pair map.
//
// Pairs are keyed in canonical (lexicographic) order so that (a, b) and
// (b, a) land on the same entry. Weights only ever accumulate; entries are
// never deleted, and a lookup miss reads as 0.0 rather than an error.

use std::collections::{HashMap, HashSet};

/// Canonical key for an unordered pair: the two words in lexicographic order.
fn pair_key(word1: &str, word2: &str) -> (String, String) {
    if word1 <= word2 {
        (word1.to_string(), word2.to_string())
    } else {
        (word2.to_string(), word1.to_string())
    }
}

/// Accumulating map from unordered word pairs to relation weights.
///
/// Built up by the analysis pass, then traversed read-only by the output
/// layer. Single-threaded by design: `add_to_relation` is a plain
/// read-modify-write on the backing map.
#[derive(Debug, Default)]
pub struct RelationStore {
    data: HashMap<(String, String), f64>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the weight of the unordered pair (word1, word2).
    ///
    /// The entry starts at 0.0 on first touch. `amount` may be negative;
    /// the store does not validate sign.
    pub fn add_to_relation(&mut self, word1: &str, word2: &str, amount: f64) {
        *self.data.entry(pair_key(word1, word2)).or_insert(0.0) += amount;
    }

    /// Accumulated weight for the pair, or 0.0 if it was never touched.
    ///
    /// Pure read — a miss does not insert anything.
    pub fn relation(&self, word1: &str, word2: &str) -> f64 {
        self.data
            .get(&pair_key(word1, word2))
            .copied()
            .unwrap_or(0.0)
    }

    /// Lazily yield `(other_word, weight)` for every stored pair that
    /// contains `word`. A self-pair (w, w) yields `(w, weight)` once.
    ///
    /// Order follows the internal map iteration; callers that need stable
    /// output sort on their side.
    pub fn relations<'a>(&'a self, word: &'a str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.data.iter().filter_map(move |((w1, w2), weight)| {
            if w1.as_str() == word {
                Some((w2.as_str(), *weight))
            } else if w2.as_str() == word {
                Some((w1.as_str(), *weight))
            } else {
                None
            }
        })
    }

    /// The vocabulary: every distinct word appearing in any stored pair.
    pub fn words(&self) -> HashSet<&str> {
        let mut words = HashSet::new();
        for (w1, w2) in self.data.keys() {
            words.insert(w1.as_str());
            words.insert(w2.as_str());
        }
        words
    }

    /// Iterate every stored pair as `(word1, word2, weight)`, canonical key
    /// order within the pair, map order across pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.data
            .iter()
            .map(|((w1, w2), weight)| (w1.as_str(), w2.as_str(), *weight))
    }

    /// Number of distinct pairs stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
