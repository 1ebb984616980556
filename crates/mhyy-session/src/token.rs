//! Combo-token parsing.
//!
//! A combo token is the vendor's composite session credential:
//!
//! ```text
//! ai=123;ci=1;oi=456;ct=abcdef;si=0123-4567;bi=hk4e_cn
//! ```
//!
//! We never interpret most of it; it goes back to the server verbatim in
//! `x-rpc-combo_token`. What we do check is its *shape*: every segment is
//! `key=value`, the six required keys are present, and `bi` (the biz id)
//! names a game we know. The biz id is the authoritative game signal.

use std::collections::HashMap;
use std::fmt;

use mhyy_protocol::GameType;

use crate::TokenError;

/// Keys every combo token must carry, in the order we report them.
pub const REQUIRED_KEYS: [&str; 6] = ["ai", "ci", "oi", "ct", "si", "bi"];

/// A combo token that passed structural validation.
///
/// Holding a `ComboToken` proves: all [`REQUIRED_KEYS`] are present and
/// the `bi` value maps to a [`GameType`].
#[derive(Clone)]
pub struct ComboToken {
    segments: HashMap<String, String>,
    detected_game: GameType,
}

impl ComboToken {
    /// Parses and validates a raw combo token.
    ///
    /// - Empty segments (`a=1;;b=2`, a trailing `;`) are skipped.
    /// - Each segment splits on its *first* `=`, so values may contain `=`.
    /// - If a key repeats, the last occurrence wins.
    ///
    /// # Errors
    /// - [`TokenError::MalformedSegment`] — a segment has no `=` or an
    ///   empty key
    /// - [`TokenError::MissingKeys`] — one or more required keys absent
    /// - [`TokenError::UnknownGame`] — `bi` is not a supported biz id
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let mut segments = HashMap::new();

        for (index, segment) in raw.split(';').filter(|s| !s.is_empty()).enumerate() {
            match segment.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    segments.insert(key.to_string(), value.to_string());
                }
                _ => return Err(TokenError::MalformedSegment { index }),
            }
        }

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| !segments.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(TokenError::MissingKeys(missing));
        }

        let biz_id = segments.get("bi").map(String::as_str).unwrap_or_default();
        let detected_game = GameType::from_biz_id(biz_id)
            .ok_or_else(|| TokenError::UnknownGame(biz_id.to_string()))?;

        Ok(Self {
            segments,
            detected_game,
        })
    }

    /// Returns the value bound to `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.segments.get(key).map(String::as_str)
    }

    /// The `bi` value.
    pub fn biz_id(&self) -> &str {
        self.get("bi").unwrap_or_default()
    }

    /// The game named by the biz id.
    pub fn detected_game(&self) -> GameType {
        self.detected_game
    }
}

/// Prints keys only. Values are credentials.
impl fmt::Debug for ComboToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.segments.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ComboToken")
            .field("keys", &keys)
            .field("detected_game", &self.detected_game)
            .finish()
    }
}
