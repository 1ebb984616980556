//! Which (game, client) pairs the backend refuses to serve.

use mhyy_protocol::{ClientType, GameType};

use crate::UserError;

/// One unsupported (game, client) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRule {
    pub game: GameType,
    pub client: ClientType,
    /// A client type known to work for `game`, if there is one.
    pub suggestion: Option<ClientType>,
}

/// Unsupported pairs. Add a row to forbid a new combination.
pub const UNSUPPORTED_PLATFORMS: &[PlatformRule] = &[PlatformRule {
    game: GameType::Zzz,
    client: ClientType::PcWeb,
    suggestion: Some(ClientType::Android),
}];

/// Checks a finalized pair against [`UNSUPPORTED_PLATFORMS`].
///
/// # Errors
/// Returns [`UserError::UnsupportedPlatform`] if the pair has a row.
pub fn check_platform(game: GameType, client: ClientType) -> Result<(), UserError> {
    check_against(UNSUPPORTED_PLATFORMS, game, client)
}

fn check_against(
    rules: &[PlatformRule],
    game: GameType,
    client: ClientType,
) -> Result<(), UserError> {
    match rules.iter().find(|r| r.game == game && r.client == client) {
        Some(rule) => Err(UserError::UnsupportedPlatform {
            game,
            client,
            suggestion: rule.suggestion,
        }),
        None => Ok(()),
    }
}
