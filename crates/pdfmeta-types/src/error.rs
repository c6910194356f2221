/// Errors from foundation type construction and parsing.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// An inline-encoded array string could not be parsed back into numbers.
    #[error("malformed inline array: {0}")]
    MalformedInlineArray(String),

    /// The two columns handed to [`PairTable::from_columns`] differ in length.
    ///
    /// [`PairTable::from_columns`]: crate::pairs::PairTable::from_columns
    #[error("column length mismatch: r has {r_len} values, gr has {gr_len}")]
    ColumnLengthMismatch { r_len: usize, gr_len: usize },

    /// No entry name can be derived from the given source path.
    #[error("cannot derive an entry name from path: {0}")]
    InvalidEntryName(String),
}

/// Result alias for foundation type operations.
pub type Result<T> = std::result::Result<T, TypeError>;
