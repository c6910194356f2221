use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::traits::DocumentCodec;

/// JSON codec: UTF-8, 2-space pretty output on encode.
///
/// Object key order survives both directions (`serde_json` is built with
/// `preserve_order` workspace-wide).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl DocumentCodec for JsonCodec {
    fn format(&self) -> &'static str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Value> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Parse(e.to_string()))
    }

    fn encode(&self, document: &Value) -> CodecResult<Vec<u8>> {
        serde_json::to_vec_pretty(document).map_err(|e| CodecError::Serialize(e.to_string()))
    }
}
