//! Core vocabulary types for the mhyy wire format.
//!
//! Every enum here has two faces:
//!
//! - a **serde name** (`"Android"`, `"GenshinImpact"`, ...) used by
//!   configuration files, and
//! - a **wire value** (`2`, `hk4e_cn`, `mihoyo`, ...) that the vendor's
//!   backend expects byte-for-byte.
//!
//! The two are never confused: wire values only come out of the explicit
//! `wire_value()` / `biz_id()` functions, never out of `Display` or serde.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// ClientType
// ---------------------------------------------------------------------------

/// The platform a request claims to originate from.
///
/// Sent as the decimal string of [`wire_value()`](Self::wire_value) in the
/// `x-rpc-client_type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientType {
    /// Native iOS app.
    #[serde(rename = "iOS")]
    Ios,

    /// Native Android app.
    Android,

    /// Cloud-game client running in a desktop browser.
    #[serde(rename = "PCWeb")]
    PcWeb,
}

impl ClientType {
    /// Every known client type, in wire-code order.
    pub const ALL: [ClientType; 3] =
        [ClientType::Ios, ClientType::Android, ClientType::PcWeb];

    /// The vendor-mandated numeric code for this platform.
    pub fn wire_value(self) -> u8 {
        match self {
            Self::Ios => 1,
            Self::Android => 2,
            Self::PcWeb => 16,
        }
    }

    /// The header form of the code: the wire value as a decimal string.
    pub fn as_header_value(self) -> String {
        self.wire_value().to_string()
    }
}

impl TryFrom<u8> for ClientType {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|client| client.wire_value() == code)
            .ok_or_else(|| ProtocolError::UnknownClientType(code.to_string()))
    }
}

/// Parses the decimal wire code (the header form), not the serde name.
impl FromStr for ClientType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s
            .parse()
            .map_err(|_| ProtocolError::UnknownClientType(s.to_string()))?;
        Self::try_from(code)
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "iOS"),
            Self::Android => write!(f, "Android"),
            Self::PcWeb => write!(f, "PCWeb"),
        }
    }
}

// ---------------------------------------------------------------------------
// GameType
// ---------------------------------------------------------------------------

/// Static table from token biz id (`bi=...`) to game.
///
/// This is the single source of truth for game detection; both
/// [`GameType::from_biz_id`] and [`GameType::biz_id`] read it.
const BIZ_IDS: [(&str, GameType); 3] = [
    ("hk4e_cn", GameType::GenshinImpact),
    ("hkrpg_cn", GameType::StarRail),
    ("nap_cn", GameType::Zzz),
];

/// Which of the vendor's games an identity is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    GenshinImpact,
    StarRail,
    #[serde(rename = "ZZZ")]
    Zzz,
}

impl GameType {
    /// Looks up the game for a combo-token biz id.
    ///
    /// Returns `None` for anything not in the table, including ids of
    /// games that exist but are not supported here.
    pub fn from_biz_id(biz_id: &str) -> Option<Self> {
        BIZ_IDS
            .iter()
            .find(|(id, _)| *id == biz_id)
            .map(|(_, game)| *game)
    }

    /// The biz id this game carries in combo tokens.
    pub fn biz_id(self) -> &'static str {
        BIZ_IDS
            .iter()
            .find(|(_, game)| *game == self)
            .map(|(id, _)| *id)
            // Every variant has a row in BIZ_IDS.
            .unwrap_or_default()
    }
}

/// Parses a biz id such as `hk4e_cn`.
impl FromStr for GameType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_biz_id(s).ok_or_else(|| ProtocolError::UnknownGame(s.to_string()))
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenshinImpact => write!(f, "GenshinImpact"),
            Self::StarRail => write!(f, "StarRail"),
            Self::Zzz => write!(f, "ZZZ"),
        }
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// The distribution channel the game client was published through.
///
/// Marked `#[non_exhaustive]` because the vendor adds channels over time;
/// match arms outside this crate need a wildcard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[non_exhaustive]
pub enum Channel {
    /// The vendor's own launcher / store.
    #[default]
    Official,

    /// The bilibili distribution.
    Bilibili,
}

impl Channel {
    /// The value the backend expects in `x-rpc-channel`.
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Official => "mihoyo",
            Self::Bilibili => "bilibili",
        }
    }
}

/// Parses the wire value (`mihoyo`, `bilibili`), not the serde name.
impl FromStr for Channel {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mihoyo" => Ok(Self::Official),
            "bilibili" => Ok(Self::Bilibili),
            other => Err(ProtocolError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Official => write!(f, "Official"),
            Self::Bilibili => write!(f, "Bilibili"),
        }
    }
}
