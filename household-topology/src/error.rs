//! Error types for household topology decoding and resolution

use thiserror::Error;

/// Errors raised while decoding a topology document or resolving a player.
///
/// The three variants let callers tell apart "my input was bad",
/// "the device sent something we cannot read" and "the player simply
/// is not there right now".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Empty or missing topology document or lookup key
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Document is not one of the known topology shapes, or a group
    /// lacks mandatory fields
    ///
    /// Usually points at a firmware version the decoder does not understand
    /// and is worth surfacing as a hard error.
    #[error("Malformed topology: {0}")]
    MalformedTopology(String),

    /// No visible member matches the lookup key
    ///
    /// An expected outcome, e.g. a player that left the household or went offline.
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
}

impl TopologyError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedTopology(msg.into())
    }

    /// Whether this error is the normal "no such player" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlayerNotFound(_))
    }

    /// Whether the upstream document could not be understood
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedTopology(_))
    }
}

/// Result type alias for topology operations
pub type Result<T> = std::result::Result<T, TopologyError>;
