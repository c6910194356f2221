use std::fs::{self, File};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use pdfmeta_codec::FormatRegistry;
use pdfmeta_types::{build_record, entry_name, HeaderMap, PairTable};

use crate::error::{StoreError, StoreResult};
use crate::reorder::reorder;

/// Options for [`MetaStore::upsert_entry`].
#[derive(Clone, Debug)]
pub struct UpsertOptions {
    /// Store `r` and `gr` as inline list-literal strings instead of native
    /// JSON arrays. Kept on by default for compactness and compatibility
    /// with existing store files.
    pub inline_arrays: bool,
    /// Include the raw source file path as a `source_path` field.
    pub include_source_path: bool,
}

impl Default for UpsertOptions {
    fn default() -> Self {
        Self {
            inline_arrays: true,
            include_source_path: true,
        }
    }
}

/// Flat-file metadata store.
///
/// Holds the [`FormatRegistry`] used to resolve a codec for every path it
/// touches. The default store knows JSON only; register further codecs on
/// the registry to accept more extensions.
#[derive(Clone, Debug, Default)]
pub struct MetaStore {
    registry: FormatRegistry,
}

impl MetaStore {
    /// Store with the built-in format registry (JSON).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a caller-supplied format registry.
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    /// The format registry, for registering additional codecs.
    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Add or replace one named record in the store file at `store_path`.
    ///
    /// The record is built from the loader's output for `source_path` (see
    /// [`build_record`]) and keyed by the source file's base name. An
    /// existing entry under that name is fully replaced, not deep-merged.
    /// A missing store file is created; an existing one is loaded, updated
    /// in memory, and rewritten whole.
    ///
    /// Fails before touching the store file when the store extension is
    /// unregistered or the source file is unreadable.
    pub fn upsert_entry(
        &self,
        store_path: &Path,
        source_path: &Path,
        header: &HeaderMap,
        pairs: &PairTable,
        options: &UpsertOptions,
    ) -> StoreResult<()> {
        let codec = self.registry.resolve(store_path)?;

        // The loader already parsed the source; we only require that it is
        // still readable before mutating the store.
        File::open(source_path)?;

        let name = entry_name(source_path)?;
        let record = build_record(
            options.include_source_path.then_some(source_path),
            header,
            pairs,
            options.inline_arrays,
        );

        let document = if store_path.is_file() {
            let bytes = fs::read(store_path)?;
            let mut document = codec.decode(&bytes)?;
            let entries = document
                .as_object_mut()
                .ok_or_else(|| StoreError::NotAnObject {
                    path: store_path.display().to_string(),
                    location: "top level".to_owned(),
                })?;
            entries.insert(name.clone(), Value::Object(record));
            document
        } else {
            let mut entries = Map::new();
            entries.insert(name.clone(), Value::Object(record));
            Value::Object(entries)
        };

        fs::write(store_path, codec.encode(&document)?)?;
        debug!(store = %store_path.display(), entry = %name, "store upsert");
        Ok(())
    }

    /// Fully overwrite `target_path` with a single annotated record.
    ///
    /// The record holds `r` and `gr` as inline list-literal strings followed
    /// by every header entry. No existing content is merged and the record
    /// is not wrapped under an entry name; this produces a standalone export
    /// rather than a growing collection.
    pub fn write_annotated(
        &self,
        target_path: &Path,
        header: &HeaderMap,
        pairs: &PairTable,
    ) -> StoreResult<()> {
        let codec = self.registry.resolve(target_path)?;

        let record = build_record(None, header, pairs, true);
        fs::write(target_path, codec.encode(&Value::Object(record))?)?;
        debug!(target = %target_path.display(), "annotated write");
        Ok(())
    }

    /// Rewrite `target_path` so its keys follow the key order of the schema
    /// document at `schema_path`.
    ///
    /// With `multi_record`, every entry's sub-record is reordered
    /// independently while the top-level entry order stays untouched;
    /// otherwise the top-level keys themselves are reordered. Keys absent
    /// from the schema are appended after all schema-matched keys in their
    /// original relative order; the key set of every record is preserved
    /// exactly.
    ///
    /// Both format checks happen before either file is read: mismatched
    /// extensions fail with [`StoreError::SchemaMismatch`], an unregistered
    /// extension with the codec's unsupported-format error.
    pub fn apply_schema_order(
        &self,
        target_path: &Path,
        schema_path: &Path,
        multi_record: bool,
    ) -> StoreResult<()> {
        let target_ext = FormatRegistry::extension_of(target_path);
        let schema_ext = FormatRegistry::extension_of(schema_path);
        if target_ext != schema_ext {
            return Err(StoreError::SchemaMismatch {
                target: target_path.display().to_string(),
                schema: schema_path.display().to_string(),
            });
        }
        // Extensions are equal, so one resolution covers both paths.
        let codec = self.registry.resolve(target_path)?;

        let schema = codec.decode(&fs::read(schema_path)?)?;
        let order: Vec<String> = schema
            .as_object()
            .ok_or_else(|| StoreError::NotAnObject {
                path: schema_path.display().to_string(),
                location: "top level".to_owned(),
            })?
            .keys()
            .cloned()
            .collect();

        let document = codec.decode(&fs::read(target_path)?)?;
        let entries = document.as_object().ok_or_else(|| StoreError::NotAnObject {
            path: target_path.display().to_string(),
            location: "top level".to_owned(),
        })?;

        let reordered = if multi_record {
            let mut store = Map::new();
            for (name, value) in entries {
                let record = value.as_object().ok_or_else(|| StoreError::NotAnObject {
                    path: target_path.display().to_string(),
                    location: format!("entry {name:?}"),
                })?;
                store.insert(name.clone(), Value::Object(reorder(record, &order)));
            }
            store
        } else {
            reorder(entries, &order)
        };

        fs::write(target_path, codec.encode(&Value::Object(reordered))?)?;
        debug!(
            target = %target_path.display(),
            schema = %schema_path.display(),
            multi_record,
            "schema order applied"
        );
        Ok(())
    }
}
