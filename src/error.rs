//! Mining errors.

/// Errors reported at the mining call boundary.
///
/// All variants are recoverable: the failing call leaves previously
/// accumulated results untouched.
#[derive(Debug, thiserror::Error)]
pub enum MineError {
    /// A non-positive threshold makes "infrequent" unfalsifiable.
    #[error("minimum support must be at least 1, got {min_support}")]
    InvalidThreshold { min_support: usize },

    /// A transaction element could not be used as an item identifier.
    #[error("malformed transaction on line {line}: {reason}")]
    MalformedTransaction { line: usize, reason: String },

    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),
}
