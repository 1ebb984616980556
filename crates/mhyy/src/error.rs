//! Unified error type for the mhyy facade.

use mhyy_protocol::ProtocolError;
use mhyy_session::UserError;

/// Errors from loading a [`UserConfig`](crate::UserConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file couldn't be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config isn't valid JSON, or doesn't match [`UserConfig`](crate::UserConfig).
    #[cfg(feature = "json")]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `mhyy` facade you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant lets `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum MhyyError {
    /// A wire value couldn't be parsed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The user failed validation (bad token, unsupported platform).
    #[error(transparent)]
    User(#[from] UserError),

    /// The configuration couldn't be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use mhyy_protocol::{ClientType, GameType};
    use mhyy_session::TokenError;

    use super::*;

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::UnknownChannel("steam".into());
        let mhyy_err: MhyyError = err.into();
        assert!(matches!(mhyy_err, MhyyError::Protocol(_)));
        assert!(mhyy_err.to_string().contains("steam"));
    }

    #[test]
    fn test_from_user_error() {
        let err = UserError::InvalidToken(TokenError::UnknownGame("bh3_cn".into()));
        let mhyy_err: MhyyError = err.into();
        assert!(matches!(mhyy_err, MhyyError::User(_)));
        assert!(mhyy_err.to_string().contains("bh3_cn"));
    }

    #[test]
    fn test_from_platform_error_is_transparent() {
        let err = UserError::UnsupportedPlatform {
            game: GameType::Zzz,
            client: ClientType::PcWeb,
            suggestion: None,
        };
        let expected = err.to_string();
        let mhyy_err: MhyyError = err.into();
        assert_eq!(mhyy_err.to_string(), expected);
    }

    #[test]
    fn test_from_config_error() {
        let err = ConfigError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let mhyy_err: MhyyError = err.into();
        assert!(matches!(mhyy_err, MhyyError::Config(_)));
        assert!(mhyy_err.to_string().contains("gone"));
    }
}
