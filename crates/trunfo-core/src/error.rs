// crates/trunfo-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TrunfoError>;

/// Errors surfaced while collecting a card.
///
/// Derivation and comparison are pure arithmetic and never fail; the only
/// fallible stages are the reads and writes around them.
#[derive(Debug, Error)]
pub enum TrunfoError {
    /// The input stream ended before a field could be answered.
    #[error("input ended before the `{field}` field was answered")]
    UnexpectedEof { field: &'static str },

    /// The underlying stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
