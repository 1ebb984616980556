//! Error types for the session layer.

use mhyy_protocol::{ClientType, GameType};

/// Why a combo token was rejected.
///
/// All three causes surface as the same kind of failure
/// ([`UserError::InvalidToken`]); the variant tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// A segment has no `=` (or nothing before it), so it can't be read as
    /// `key=value`.
    ///
    /// Only the segment's position is kept; segments carry credential
    /// material and must not end up in logs.
    #[error("malformed combo token: segment {index} is not key=value")]
    MalformedSegment { index: usize },

    /// Required keys are absent. Listed in the fixed order
    /// `ai, ci, oi, ct, si, bi`, not in lookup order.
    #[error("combo token missing keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    /// The `bi` value doesn't name a supported game.
    #[error("combo token biz id {0:?} is not supported")]
    UnknownGame(String),
}

/// Errors that can occur while building a [`User`](crate::User).
///
/// Every variant is fatal to that construction attempt. There is no
/// retry inside this crate. Getting a fresh token is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// The combo token failed to parse or validate.
    #[error("invalid combo token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The final (game, client) pair is in the unsupported-platform table.
    #[error("{client} is not supported for {game}{}", suggestion_suffix(.suggestion))]
    UnsupportedPlatform {
        game: GameType,
        client: ClientType,
        suggestion: Option<ClientType>,
    },
}

fn suggestion_suffix(suggestion: &Option<ClientType>) -> String {
    match suggestion {
        Some(client) => format!("; use {client} instead"),
        None => String::new(),
    }
}
