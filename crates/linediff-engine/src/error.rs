//! Error types for the diff engine.

/// Errors that can occur when a diff is computed under limits.
///
/// Without limits the engine cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The two sequences together hold more lines than allowed.
    #[error("input too large: {lines} lines exceeds the limit of {limit}")]
    InputTooLarge { lines: usize, limit: usize },

    /// No edit script of at most `limit` edits exists.
    #[error("edit distance exceeds the limit of {limit}")]
    DistanceLimitExceeded { limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
