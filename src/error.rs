//! Error types.
//!
//! Alignment itself is total; errors only arise from the opt-in size guard
//! and from the delimited-record reader.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The cause is kept as the error's source, not repeated in its message.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The DP table for this pair would exceed the configured cell limit.
    #[error("DP matrix of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    MatrixTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("invalid record delimiter {0:?}")]
    InvalidDelimiter(char),
}
