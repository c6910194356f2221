//! Record construction and entry naming.
//!
//! A record is one measurement's metadata plus its `r`/`gr` arrays, stored
//! as a JSON object. A store maps entry names to records; the entry name is
//! the base name of the measurement's source file, extension included.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, TypeError};
use crate::inline::encode_inline;
use crate::pairs::PairTable;

/// One measurement record: metadata plus data arrays, as a JSON object.
pub type Record = Map<String, Value>;

/// Header metadata produced by the upstream loader.
pub type HeaderMap = Map<String, Value>;

/// Record key holding the raw source file path.
pub const SOURCE_PATH_KEY: &str = "source_path";

/// Record key holding the independent-variable array.
pub const R_KEY: &str = "r";

/// Record key holding the dependent-variable array.
pub const GR_KEY: &str = "gr";

/// Derive a store entry name from a source file path.
///
/// The name is the path's base name with its extension kept
/// (`/data/nickel.gr` becomes `nickel.gr`), so measurements that differ
/// only in format stay distinct entries.
pub fn entry_name(source_path: &Path) -> Result<String> {
    source_path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| TypeError::InvalidEntryName(source_path.display().to_string()))
}

/// Build one record from the loader's output.
///
/// Field order is fixed: the optional source path first, then `r` and `gr`,
/// then every header entry in the header's own order. A header key that
/// collides with `r` or `gr` overwrites it; collisions are not expected but
/// not prevented.
///
/// With `inline_arrays` the data arrays are stored as inline list-literal
/// strings (see [`encode_inline`]); otherwise as native JSON arrays.
pub fn build_record(
    source_path: Option<&Path>,
    header: &HeaderMap,
    pairs: &PairTable,
    inline_arrays: bool,
) -> Record {
    let mut record = Record::new();

    if let Some(path) = source_path {
        record.insert(
            SOURCE_PATH_KEY.to_owned(),
            Value::String(path.display().to_string()),
        );
    }

    if inline_arrays {
        record.insert(R_KEY.to_owned(), Value::String(encode_inline(&pairs.r())));
        record.insert(GR_KEY.to_owned(), Value::String(encode_inline(&pairs.gr())));
    } else {
        record.insert(R_KEY.to_owned(), numeric_array(&pairs.r()));
        record.insert(GR_KEY.to_owned(), numeric_array(&pairs.gr()));
    }

    for (key, value) in header {
        record.insert(key.clone(), value.clone());
    }

    record
}

fn numeric_array(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|&v| Value::from(v)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_pairs() -> PairTable {
        PairTable::from_rows(vec![(0.0, 1.0), (0.1, 2.0)])
    }

    fn sample_header() -> HeaderMap {
        let mut header = HeaderMap::new();
        header.insert("temperature".into(), json!(300.0));
        header.insert("wavelength".into(), json!(0.1819));
        header
    }

    #[test]
    fn field_order_is_path_then_arrays_then_header() {
        let record = build_record(
            Some(Path::new("/data/nickel.gr")),
            &sample_header(),
            &sample_pairs(),
            true,
        );
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![SOURCE_PATH_KEY, R_KEY, GR_KEY, "temperature", "wavelength"]
        );
        assert_eq!(record[SOURCE_PATH_KEY], json!("/data/nickel.gr"));
    }

    #[test]
    fn omits_source_path_when_not_given() {
        let record = build_record(None, &sample_header(), &sample_pairs(), true);
        assert!(!record.contains_key(SOURCE_PATH_KEY));
        assert_eq!(record.keys().next().map(String::as_str), Some(R_KEY));
    }

    #[test]
    fn inline_arrays_are_list_literal_strings() {
        let record = build_record(None, &HeaderMap::new(), &sample_pairs(), true);
        assert_eq!(record[R_KEY], json!("[0.0, 0.1]"));
        assert_eq!(record[GR_KEY], json!("[1.0, 2.0]"));
    }

    #[test]
    fn native_arrays_when_inline_disabled() {
        let record = build_record(None, &HeaderMap::new(), &sample_pairs(), false);
        assert_eq!(record[R_KEY], json!([0.0, 0.1]));
        assert_eq!(record[GR_KEY], json!([1.0, 2.0]));
    }

    #[test]
    fn header_key_overwrites_data_array_on_collision() {
        let mut header = HeaderMap::new();
        header.insert(R_KEY.into(), json!("overridden"));
        let record = build_record(None, &header, &sample_pairs(), false);
        assert_eq!(record[R_KEY], json!("overridden"));
        // Key count unchanged: the collision replaced, not appended.
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn entry_name_keeps_extension() {
        assert_eq!(entry_name(Path::new("/data/nickel.gr")).unwrap(), "nickel.gr");
        assert_eq!(entry_name(Path::new("bare")).unwrap(), "bare");
    }

    #[test]
    fn entry_name_rejects_nameless_path() {
        let err = entry_name(Path::new("/")).unwrap_err();
        assert!(matches!(err, TypeError::InvalidEntryName(_)));
    }
}
