use serde_json::{Map, Value};

/// Reorder a record's keys to follow a schema key order.
///
/// Builds a fresh map: every key of `order` that exists in `record` comes
/// first, in schema order (first occurrence wins if `order` repeats a key);
/// every remaining record key follows in its original relative order.
///
/// The result holds exactly the key set of `record` — nothing is added or
/// dropped, only moved.
pub fn reorder(record: &Map<String, Value>, order: &[String]) -> Map<String, Value> {
    let mut reordered = Map::new();

    for key in order {
        if reordered.contains_key(key) {
            continue;
        }
        if let Some(value) = record.get(key) {
            reordered.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in record {
        if !reordered.contains_key(key) {
            reordered.insert(key.clone(), value.clone());
        }
    }

    reordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_of(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    fn order_of(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn schema_keys_first_then_remainder_in_original_order() {
        let record = map_of(&[("b", json!(1)), ("c", json!(2)), ("a", json!(3))]);
        let reordered = reorder(&record, &order_of(&["a", "b"]));
        assert_eq!(keys(&reordered), vec!["a", "b", "c"]);
        assert_eq!(reordered["a"], json!(3));
        assert_eq!(reordered["b"], json!(1));
        assert_eq!(reordered["c"], json!(2));
    }

    #[test]
    fn key_set_is_preserved_exactly() {
        let record = map_of(&[
            ("gr", json!("[1.0]")),
            ("r", json!("[0.0]")),
            ("temperature", json!(300)),
            ("comment", json!("run 4")),
        ]);
        let reordered = reorder(&record, &order_of(&["r", "gr", "wavelength"]));

        let mut before: Vec<&str> = keys(&record);
        let mut after: Vec<&str> = keys(&reordered);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert_eq!(keys(&reordered), vec!["r", "gr", "temperature", "comment"]);
    }

    #[test]
    fn schema_keys_absent_from_record_are_skipped() {
        let record = map_of(&[("x", json!(1))]);
        let reordered = reorder(&record, &order_of(&["missing", "x", "gone"]));
        assert_eq!(keys(&reordered), vec!["x"]);
    }

    #[test]
    fn duplicate_schema_key_first_seen_wins() {
        let record = map_of(&[("b", json!(2)), ("a", json!(1))]);
        let reordered = reorder(&record, &order_of(&["a", "b", "a"]));
        assert_eq!(keys(&reordered), vec!["a", "b"]);
        assert_eq!(reordered["a"], json!(1));
    }

    #[test]
    fn empty_order_keeps_original_order() {
        let record = map_of(&[("z", json!(1)), ("a", json!(2))]);
        let reordered = reorder(&record, &[]);
        assert_eq!(keys(&reordered), vec!["z", "a"]);
    }

    #[test]
    fn empty_record_stays_empty() {
        let reordered = reorder(&Map::new(), &order_of(&["a", "b"]));
        assert!(reordered.is_empty());
    }
}
