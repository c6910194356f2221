use pdfmeta_codec::CodecError;
use pdfmeta_types::TypeError;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Target and schema files use different formats.
    #[error("schema {schema} does not match target {target}: extensions differ")]
    SchemaMismatch { target: String, schema: String },

    /// The document's top level (or an entry that should hold a record) is
    /// not a JSON object.
    #[error("{path}: expected an object at {location}")]
    NotAnObject { path: String, location: String },

    /// Codec failure: unregistered format, parse error, or serialize error.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Foundation type failure (entry naming, inline arrays).
    #[error(transparent)]
    Type(#[from] TypeError),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
