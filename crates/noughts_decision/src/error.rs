//! Decision engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Malformed model weights, with location tracking.
///
/// Fatal to the call that raised it: a model that fails validation never
/// produces a move.
#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error returned when the engine cannot choose a move.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DecisionError {
    /// The model is inconsistent with the board encoding.
    #[display("{}", _0)]
    Configuration(ConfigurationError),

    /// Asked to move on a full or finished board.
    #[display("No legal move: the board is full or the game is over")]
    NoLegalMove,
}

impl std::error::Error for DecisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecisionError::Configuration(err) => Some(err),
            DecisionError::NoLegalMove => None,
        }
    }
}

impl From<ConfigurationError> for DecisionError {
    fn from(err: ConfigurationError) -> Self {
        DecisionError::Configuration(err)
    }
}
