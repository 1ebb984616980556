//! # mhyy
//!
//! Authenticated user identity for the mhyy cloud-game API.
//!
//! A [`User`](prelude::User) is built once from a combo token plus device
//! metadata. Construction validates the token, detects the game it
//! belongs to, and rejects unsupported platforms. The user then supplies
//! the `x-rpc-*` headers every backend request needs. Sending those
//! requests is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use mhyy::prelude::*;
//!
//! let user = User::builder("ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_cn", ClientType::Android)
//!     .sys_version("13")
//!     .device_id("b1f0c2d3")
//!     .device_name("Xiaomi 13")
//!     .device_model("2211133C")
//!     .build()?;
//!
//! assert_eq!(user.game_type(), GameType::GenshinImpact);
//! assert_eq!(user.headers()["x-rpc-client_type"], "2");
//! # Ok::<(), MhyyError>(())
//! ```

mod config;
mod error;
mod logging;
mod source;

pub use config::UserConfig;
pub use error::{ConfigError, MhyyError};
pub use logging::init_logging;
pub use source::HeaderSource;

pub use mhyy_protocol as protocol;
pub use mhyy_session as session;

/// Everything needed to build a user and read its headers.
pub mod prelude {
    pub use crate::{HeaderSource, MhyyError, UserConfig};
    pub use mhyy_protocol::{Channel, ClientType, GameType, UserHeaders};
    pub use mhyy_session::{Diagnostics, User, UserBuilder, UserParams, Warning};
}
