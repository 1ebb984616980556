//! Wire vocabulary for the mhyy cloud-game API.
//!
//! This crate defines the values that end up "on the wire" when a client
//! talks to the vendor's backend:
//!
//! - **Types** ([`ClientType`], [`GameType`], [`Channel`]) — the closed
//!   sets the backend understands, each with an explicit mapping to its
//!   wire value.
//! - **Headers** ([`UserHeaders`] and the `X_RPC_*` names) — the header
//!   map a user identity produces.
//! - **Errors** ([`ProtocolError`]) — what can go wrong when parsing a
//!   wire value back into one of the types.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about tokens or validation. It only
//! knows the vocabulary:
//!
//! ```text
//! HTTP collaborator (headers) ← Session (User) ← Protocol (enums, header names)
//! ```

mod error;
mod headers;
mod types;

pub use error::ProtocolError;
pub use headers::{
    USER_HEADER_NAMES, UserHeaders, X_RPC_CHANNEL, X_RPC_CLIENT_TYPE,
    X_RPC_COMBO_TOKEN, X_RPC_DEVICE_ID, X_RPC_DEVICE_MODEL,
    X_RPC_DEVICE_NAME, X_RPC_SYS_VERSION,
};
pub use types::{Channel, ClientType, GameType};
