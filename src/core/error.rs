//! Engine error types.
//!
//! Player actions never produce errors (invalid actions are no-ops). These
//! cover configuration, unsolvable layouts, checkpoints and score storage.

use thiserror::Error;

/// Errors emitted by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The difficulty configuration cannot produce a paired board.
    #[error("invalid difficulty configuration: {0}")]
    InvalidConfig(String),

    /// No glyph assignment can give the board a legal match.
    #[error("no legal match can be created among {unmatched} unmatched tiles")]
    Unsolvable {
        /// Unmatched tiles at the time of the attempt.
        unmatched: usize,
    },

    /// A session checkpoint could not be encoded or decoded.
    #[error("session snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The score store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors emitted by score stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("leaderboard io: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid leaderboard.
    #[error("leaderboard format: {0}")]
    Format(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::Unsolvable { unmatched: 2 };
        assert_eq!(err.to_string(), "no legal match can be created among 2 unmatched tiles");

        let err = EngineError::InvalidConfig("empty alphabet".into());
        assert_eq!(err.to_string(), "invalid difficulty configuration: empty alphabet");
    }

    #[test]
    fn test_store_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EngineError = StoreError::from(io).into();
        assert!(matches!(err, EngineError::Store(StoreError::Io(_))));
        assert_eq!(err.to_string(), "leaderboard io: denied");
    }
}
