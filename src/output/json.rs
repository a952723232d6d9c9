// JSON rendering of a finished relation store.
//
// The store iterates in hash order, so the serializer sorts vocabulary and
// per-word relation entries lexicographically: two runs over the same text
// produce byte-identical output. serde_json owns comma placement and the
// native decimal rendering of the f64 weights.

use anyhow::Result;
use serde_json::{Map, Value};

use crate::store::RelationStore;

/// Build the nested `word -> { related word -> weight }` object.
pub fn to_json(store: &RelationStore) -> Value {
    let mut words: Vec<&str> = store.words().into_iter().collect();
    words.sort_unstable();

    let mut root = Map::new();
    for word in words {
        let mut relations: Vec<(&str, f64)> = store.relations(word).collect();
        relations.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut entry = Map::new();
        for (other, weight) in relations {
            entry.insert(other.to_string(), Value::from(weight));
        }
        root.insert(word.to_string(), Value::Object(entry));
    }
    Value::Object(root)
}

/// Render the store as a JSON string, compact or pretty.
pub fn render(store: &RelationStore, pretty: bool) -> Result<String> {
    let value = to_json(store);
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use std::collections::HashSet;

    #[test]
    fn test_empty_store_renders_empty_object() {
        let store = RelationStore::new();
        assert_eq!(render(&store, false).unwrap(), "{}");
    }

    #[test]
    fn test_every_word_appears_under_both_pair_members() {
        let mut store = RelationStore::new();
        store.add_to_relation("b", "a", 1.0);

        let value = to_json(&store);
        assert_eq!(value["a"]["b"], Value::from(1.0));
        assert_eq!(value["b"]["a"], Value::from(1.0));
    }

    #[test]
    fn test_output_is_sorted_and_stable() {
        let mut store = RelationStore::new();
        analyze(&mut store, "c a b a c", 100, &HashSet::new());

        let first = render(&store, false).unwrap();
        let second = render(&store, false).unwrap();
        assert_eq!(first, second);

        let value = to_json(&store);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "top-level keys must be lexicographic");
    }

    #[test]
    fn test_weights_render_as_plain_decimals() {
        let mut store = RelationStore::new();
        store.add_to_relation("a", "b", 1.0);
        store.add_to_relation("a", "c", 0.5);

        let rendered = render(&store, false).unwrap();
        assert!(rendered.contains("\"b\":1.0"), "got {rendered}");
        assert!(rendered.contains("\"c\":0.5"), "got {rendered}");
    }

    #[test]
    fn test_self_pair_nests_under_its_own_word() {
        let mut store = RelationStore::new();
        store.add_to_relation("a", "a", 0.5);
        let value = to_json(&store);
        assert_eq!(value["a"]["a"], Value::from(0.5));
    }
}
