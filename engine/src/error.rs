//! Error types for the engine.
//!
//! Mutation operations never fail: updates upsert missing keys and deletes
//! no-op on them. The only engine errors come from the snapshot boundary.

use thiserror::Error;

/// All possible errors from the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidSnapshot("truncated".into());
        assert_eq!(err.to_string(), "invalid snapshot: truncated");
    }
}
