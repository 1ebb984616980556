//! User configuration.
//!
//! A [`UserConfig`] is the serializable form of a user: the same fields as
//! [`UserParams`], with serde defaults so config files only spell out what
//! they need. Loading it doesn't validate anything; that happens in
//! [`into_user`](UserConfig::into_user).
//!
//! ```json
//! {
//!   "combo_token": "ai=1;ci=2;oi=3;ct=4;si=5;bi=hk4e_cn",
//!   "client_type": "Android",
//!   "sys_version": "13",
//!   "device_id": "b1f0c2d3",
//!   "device_name": "Xiaomi 13",
//!   "device_model": "2211133C",
//!   "channel": "Official"
//! }
//! ```

use std::fmt;
#[cfg(feature = "json")]
use std::path::Path;

use mhyy_protocol::{Channel, ClientType, GameType};
use mhyy_session::{Diagnostics, User, UserError, UserParams};
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::ConfigError;

/// Serializable description of a user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub combo_token: String,

    pub client_type: ClientType,

    #[serde(default)]
    pub sys_version: String,

    #[serde(default)]
    pub device_id: String,

    #[serde(default)]
    pub device_name: String,

    #[serde(default)]
    pub device_model: String,

    /// Omit to detect the game from the combo token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<GameType>,

    #[serde(default)]
    pub channel: Channel,
}

impl UserConfig {
    /// Parses a config from a JSON string.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    #[cfg(feature = "json")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded user config");
        Self::from_json(&json)
    }

    /// Validates the config and builds a [`User`], logging any warnings.
    pub fn into_user(self) -> Result<User, UserError> {
        User::new(self.into())
    }

    /// Like [`into_user`](Self::into_user), but reports warnings to
    /// `diagnostics`.
    pub fn into_user_with(self, diagnostics: impl Diagnostics) -> Result<User, UserError> {
        User::new_with(self.into(), diagnostics)
    }
}

impl From<UserConfig> for UserParams {
    fn from(config: UserConfig) -> Self {
        UserParams {
            combo_token: config.combo_token,
            sys_version: config.sys_version,
            device_id: config.device_id,
            device_name: config.device_name,
            device_model: config.device_model,
            client_type: config.client_type,
            game_type: config.game_type,
            channel: config.channel,
        }
    }
}

impl fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserConfig")
            .field("combo_token", &"<redacted>")
            .field("client_type", &self.client_type)
            .field("game_type", &self.game_type)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}
