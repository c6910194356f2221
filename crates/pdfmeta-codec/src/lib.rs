//! Document codecs for pdfmeta.
//!
//! A codec turns file bytes into a JSON document tree and back. Codecs are
//! looked up by file extension through a [`FormatRegistry`], so adding a
//! format means registering a new [`DocumentCodec`] implementation, never
//! branching on extension strings at call sites.
//!
//! Only JSON is implemented today ([`JsonCodec`]); the registry is the
//! extension point for YAML, XML, or anything else.

pub mod error;
pub mod json;
pub mod registry;
pub mod traits;

pub use error::{CodecError, CodecResult};
pub use json::JsonCodec;
pub use registry::FormatRegistry;
pub use traits::DocumentCodec;
