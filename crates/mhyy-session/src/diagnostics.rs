//! Non-fatal findings reported while building a [`User`](crate::User).
//!
//! Some problems are worth telling someone about but shouldn't stop
//! construction. Today that means only a game-type mismatch between what the
//! caller asked for and what the token says. Those go to a
//! [`Diagnostics`] sink that the caller picks:
//!
//! - [`TracingDiagnostics`] logs them (the default used by
//!   [`UserBuilder::build`](crate::UserBuilder::build))
//! - `Vec<Warning>` collects them for inspection
//!
//! There's no global warning state; whoever builds the user owns the sink.

use std::fmt;

use mhyy_protocol::GameType;

/// A structured, non-fatal construction finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// The caller supplied a game type that disagrees with the token's
    /// biz id. The supplied value was kept, so backend responses may not
    /// match what the caller expects.
    GameTypeMismatch {
        supplied: GameType,
        detected: GameType,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameTypeMismatch { supplied, detected } => write!(
                f,
                "supplied game type {supplied} differs from {detected} detected in the combo token; \
                 using {supplied}"
            ),
        }
    }
}

/// Receives warnings during construction.
pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
}

/// Logs each warning at `WARN` level via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        match warning {
            Warning::GameTypeMismatch { supplied, detected } => {
                tracing::warn!(%supplied, %detected, "{warning}");
            }
        }
    }
}

impl Diagnostics for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}
