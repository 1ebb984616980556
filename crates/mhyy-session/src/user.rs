//! The authenticated user identity and the headers it produces.
//!
//! # Construction pipeline
//!
//! ```text
//! raw combo token ──→ ComboToken::parse ──→ reconcile game type ──→ check_platform ──→ User
//!                      (shape, keys, bi)     (may warn, never fails)  (table lookup)
//! ```
//!
//! Every step runs before the `User` exists, so a `User` value is always
//! fully validated. It has no setters; to change anything, build a new one.

use std::fmt;

use mhyy_protocol::{
    Channel, ClientType, GameType, UserHeaders, X_RPC_CHANNEL, X_RPC_CLIENT_TYPE,
    X_RPC_COMBO_TOKEN, X_RPC_DEVICE_ID, X_RPC_DEVICE_MODEL, X_RPC_DEVICE_NAME,
    X_RPC_SYS_VERSION,
};

use crate::{
    check_platform, ComboToken, Diagnostics, TracingDiagnostics, UserError, Warning,
};

/// Raw inputs for [`User::new`].
///
/// Plain data with public fields. Every value is taken as-is and
/// validated during construction.
#[derive(Clone, PartialEq, Eq)]
pub struct UserParams {
    pub combo_token: String,
    pub sys_version: String,
    pub device_id: String,
    pub device_name: String,
    pub device_model: String,
    pub client_type: ClientType,
    /// `None` means "use whatever the token's biz id says".
    pub game_type: Option<GameType>,
    pub channel: Channel,
}

/// A validated cloud-game user.
///
/// `User` is immutable, `Send` and `Sync`; share it behind an `Arc`
/// across as many request tasks as needed.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    combo_token: String,
    sys_version: String,
    device_id: String,
    device_name: String,
    device_model: String,
    client_type: ClientType,
    game_type: GameType,
    channel: Channel,
}

impl User {
    /// Starts a [`UserBuilder`] with the two values that have no default.
    pub fn builder(combo_token: impl Into<String>, client_type: ClientType) -> UserBuilder {
        UserBuilder::new(combo_token, client_type)
    }

    /// Validates `params` and builds a user, logging any warnings.
    ///
    /// # Errors
    /// - [`UserError::InvalidToken`] — the combo token is malformed, is
    ///   missing required keys, or names an unknown game
    /// - [`UserError::UnsupportedPlatform`] — the final (game, client)
    ///   pair is not served
    pub fn new(params: UserParams) -> Result<Self, UserError> {
        Self::new_with(params, TracingDiagnostics)
    }

    /// Like [`new`](Self::new), but reports warnings to `diagnostics`.
    pub fn new_with(
        params: UserParams,
        mut diagnostics: impl Diagnostics,
    ) -> Result<Self, UserError> {
        let token = ComboToken::parse(&params.combo_token).inspect_err(|e| {
            tracing::debug!(error = %e, "combo token rejected");
        })?;

        let detected = token.detected_game();
        let game_type = match params.game_type {
            None => detected,
            Some(supplied) if supplied == detected => supplied,
            Some(supplied) => {
                diagnostics.warn(Warning::GameTypeMismatch { supplied, detected });
                supplied
            }
        };

        check_platform(game_type, params.client_type).inspect_err(|e| {
            tracing::debug!(error = %e, "platform rejected");
        })?;

        tracing::debug!(
            game = %game_type,
            client = %params.client_type,
            channel = %params.channel,
            "user created"
        );

        Ok(Self {
            combo_token: params.combo_token,
            sys_version: params.sys_version,
            device_id: params.device_id,
            device_name: params.device_name,
            device_model: params.device_model,
            client_type: params.client_type,
            game_type,
            channel: params.channel,
        })
    }

    /// The headers this user attaches to every backend request.
    ///
    /// Always exactly the seven `x-rpc-*` headers. `x-rpc-channel` carries
    /// the channel's wire value.
    pub fn headers(&self) -> UserHeaders {
        UserHeaders::from([
            (X_RPC_COMBO_TOKEN, self.combo_token.clone()),
            (X_RPC_SYS_VERSION, self.sys_version.clone()),
            (X_RPC_DEVICE_ID, self.device_id.clone()),
            (X_RPC_DEVICE_NAME, self.device_name.clone()),
            (X_RPC_DEVICE_MODEL, self.device_model.clone()),
            (X_RPC_CLIENT_TYPE, self.client_type.as_header_value()),
            (X_RPC_CHANNEL, self.channel.wire_value().to_string()),
        ])
    }

    pub fn combo_token(&self) -> &str {
        &self.combo_token
    }

    pub fn sys_version(&self) -> &str {
        &self.sys_version
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn device_model(&self) -> &str {
        &self.device_model
    }

    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// The supplied game type if one was given, otherwise the detected one.
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("combo_token", &"<redacted>")
            .field("sys_version", &self.sys_version)
            .field("device_name", &self.device_name)
            .field("device_model", &self.device_model)
            .field("client_type", &self.client_type)
            .field("game_type", &self.game_type)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for UserParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserParams")
            .field("combo_token", &"<redacted>")
            .field("client_type", &self.client_type)
            .field("game_type", &self.game_type)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

/// Builder for [`User`].
///
/// # Example
///
/// ```rust
/// use mhyy_protocol::{ClientType, GameType};
/// use mhyy_session::User;
///
/// let user = User::builder("ai=1;ci=2;oi=3;ct=4;si=5;bi=hkrpg_cn", ClientType::Android)
///     .sys_version("14")
///     .device_id("c8b6f1a0")
///     .device_name("Pixel 8")
///     .device_model("GKWS6")
///     .build()?;
///
/// assert_eq!(user.game_type(), GameType::StarRail);
/// # Ok::<(), mhyy_session::UserError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    params: UserParams,
}

impl UserBuilder {
    /// Creates a builder. Device fields start empty, the game type is
    /// detected, and the channel is [`Channel::Official`].
    pub fn new(combo_token: impl Into<String>, client_type: ClientType) -> Self {
        Self {
            params: UserParams {
                combo_token: combo_token.into(),
                sys_version: String::new(),
                device_id: String::new(),
                device_name: String::new(),
                device_model: String::new(),
                client_type,
                game_type: None,
                channel: Channel::default(),
            },
        }
    }

    pub fn sys_version(mut self, sys_version: impl Into<String>) -> Self {
        self.params.sys_version = sys_version.into();
        self
    }

    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.params.device_id = device_id.into();
        self
    }

    pub fn device_name(mut self, device_name: impl Into<String>) -> Self {
        self.params.device_name = device_name.into();
        self
    }

    pub fn device_model(mut self, device_model: impl Into<String>) -> Self {
        self.params.device_model = device_model.into();
        self
    }

    /// Pins the game type instead of detecting it from the token.
    ///
    /// A disagreement with the token is a warning, not an error.
    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.params.game_type = Some(game_type);
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.params.channel = channel;
        self
    }

    /// Builds the user, logging warnings via `tracing`.
    ///
    /// # Errors
    /// See [`User::new`].
    pub fn build(self) -> Result<User, UserError> {
        User::new(self.params)
    }

    /// Builds the user, reporting warnings to `diagnostics`.
    pub fn build_with(self, diagnostics: impl Diagnostics) -> Result<User, UserError> {
        User::new_with(self.params, diagnostics)
    }

    /// The raw parameters collected so far.
    pub fn into_params(self) -> UserParams {
        self.params
    }
}

impl From<UserParams> for UserBuilder {
    fn from(params: UserParams) -> Self {
        Self { params }
    }
}
