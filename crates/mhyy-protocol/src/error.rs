//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum. A
//! `ProtocolError` always means a wire value could not be mapped back to
//! one of the known types, never a token or platform problem.

/// Errors that can occur when parsing wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The client-type code is not one the backend defines.
    #[error("unknown client type code: {0}")]
    UnknownClientType(String),

    /// The biz id does not name a supported game.
    ///
    /// Biz ids are the values found under the `bi` key of a combo token,
    /// e.g. `hk4e_cn`.
    #[error("unknown game biz id: {0}")]
    UnknownGame(String),

    /// The channel value is not one the backend defines.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}
