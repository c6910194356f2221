//! Foundation types for pdfmeta.
//!
//! This crate provides the data types shared by the codec and store layers:
//!
//! - [`PairTable`] — the two-column numeric table produced by the upstream
//!   data loader (column 0 = `r`, column 1 = `gr`)
//! - [`encode_inline`] / [`decode_inline`] — the inline string encoding of a
//!   numeric array (`"[1.0, 2.0, 3.0]"`), kept for compactness and legacy
//!   compatibility
//! - [`build_record`] / [`entry_name`] — construction of one measurement
//!   record and derivation of its store entry name
//!
//! Records and stores are plain `serde_json` objects. The `preserve_order`
//! feature is enabled workspace-wide, so key insertion order survives a
//! decode/encode cycle — downstream tooling relies on that order.

pub mod error;
pub mod inline;
pub mod pairs;
pub mod record;

pub use error::{Result, TypeError};
pub use inline::{decode_inline, encode_inline};
pub use pairs::PairTable;
pub use record::{build_record, entry_name, HeaderMap, Record, GR_KEY, R_KEY, SOURCE_PATH_KEY};
