use std::fmt;

use serde_json::Value;

use crate::error::CodecResult;

/// Byte-level codec for one on-disk document format.
///
/// All implementations must satisfy these invariants:
/// - `decode` and `encode` are inverses up to formatting: decoding the
///   output of `encode` reproduces the same document tree.
/// - Key order of object members is preserved through both directions.
/// - Malformed input fails with a parse error; it is never coerced into a
///   partial document.
pub trait DocumentCodec: Send + Sync {
    /// Format name; doubles as the file extension the codec claims
    /// (lowercase, no leading dot).
    fn format(&self) -> &'static str;

    /// Parse raw file bytes into a document tree.
    fn decode(&self, bytes: &[u8]) -> CodecResult<Value>;

    /// Serialize a document tree into the bytes to write to disk.
    fn encode(&self, document: &Value) -> CodecResult<Vec<u8>>;
}

impl fmt::Debug for dyn DocumentCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentCodec")
            .field("format", &self.format())
            .finish()
    }
}
