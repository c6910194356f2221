/// Errors from codec lookup and document encode/decode.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// No codec is registered for the file's extension.
    #[error("unsupported format for {path}: extension {extension:?} is not registered")]
    UnsupportedFormat { path: String, extension: String },

    /// The document bytes could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document tree could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
