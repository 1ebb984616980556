//! User identity for the mhyy cloud-game API.
//!
//! This crate turns raw, caller-supplied credentials into a validated
//! [`User`] and derives the request headers the backend expects:
//!
//! 1. **Token parsing** — checking a combo token's shape and detecting
//!    its game ([`ComboToken`])
//! 2. **Reconciliation** — resolving a caller-supplied game type against
//!    the detected one, reporting mismatches to a [`Diagnostics`] sink
//! 3. **Platform check** — rejecting (game, client) pairs listed in
//!    [`UNSUPPORTED_PLATFORMS`]
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP collaborator (above)  ← attaches User::headers() to requests
//!     ↕
//! Session Layer (this crate)  ← validates and owns the identity
//!     ↕
//! Protocol Layer (below)  ← provides ClientType, GameType, Channel, header names
//! ```

mod diagnostics;
mod error;
mod platform;
mod token;
mod user;

pub use diagnostics::{Diagnostics, TracingDiagnostics, Warning};
pub use error::{TokenError, UserError};
pub use platform::{check_platform, PlatformRule, UNSUPPORTED_PLATFORMS};
pub use token::{ComboToken, REQUIRED_KEYS};
pub use user::{User, UserBuilder, UserParams};
