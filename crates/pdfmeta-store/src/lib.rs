//! Flat-file metadata store for pair-distribution-function measurements.
//!
//! A store is one JSON file mapping entry names to measurement records.
//! [`MetaStore`] exposes three operations, each a one-shot
//! read-modify-write over a single file:
//!
//! - [`MetaStore::upsert_entry`] — add or replace one named record in a
//!   multi-record store file
//! - [`MetaStore::write_annotated`] — fully overwrite a file with a single
//!   annotated record
//! - [`MetaStore::apply_schema_order`] — rewrite a file so record keys
//!   follow a schema file's key order, unmatched keys appended in their
//!   original relative order
//!
//! # Design Rules
//!
//! 1. Format checks happen before any file is read or written; a failure
//!    aborts the whole operation with no partial write.
//! 2. The target file is read fully, transformed in memory, and rewritten.
//!    Untouched entries are re-serialized, so their formatting may change.
//! 3. Key order inside records and stores is preserved exactly; reordering
//!    is a pure transformation that never adds or drops a key.
//! 4. Malformed documents surface as parse errors, never silently skipped.
//!
//! # Known Limitation
//!
//! Operations are synchronous, single-caller read-modify-write cycles with
//! no locking. Concurrent callers on the same path race: the last writer
//! wins and earlier updates are lost.

pub mod error;
pub mod reorder;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use reorder::reorder;
pub use store::{MetaStore, UpsertOptions};
