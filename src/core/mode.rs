//! Mode selection
//!
//! Turns the single command-line token into one of the three check modes.

use std::{convert::Infallible, fmt, str::FromStr};
use tracing::debug;

/// Which set of checks to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Static analysis and formatting check
    Lint,
    /// Test suite only
    Unit,
    /// Lint checks, then the test suite with coverage
    All,
}

impl Mode {
    /// Parse a mode token, falling back to [`Mode::All`] for anything unknown
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "lint" => Self::Lint,
            "unit" => Self::Unit,
            "all" => Self::All,
            other => {
                debug!("Unrecognized mode '{}', running all checks", other);
                Self::All
            }
        }
    }

    /// Canonical name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lint => "lint",
            Self::Unit => "unit",
            Self::All => "all",
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_modes() {
        assert_eq!(Mode::from_token("lint"), Mode::Lint);
        assert_eq!(Mode::from_token("unit"), Mode::Unit);
        assert_eq!(Mode::from_token("all"), Mode::All);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_all() {
        assert_eq!(Mode::from_token("bogus"), Mode::All);
        assert_eq!(Mode::from_token(""), Mode::All);
        // Matching is exact
        assert_eq!(Mode::from_token("LINT"), Mode::All);
        assert_eq!(Mode::from_token(" unit"), Mode::All);
    }

    #[test]
    fn test_from_str_never_fails() {
        let mode: Mode = "whatever".parse().unwrap();
        assert_eq!(mode, Mode::All);
        assert_eq!("unit".parse::<Mode>().unwrap(), Mode::Unit);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Lint.to_string(), "lint");
        assert_eq!(Mode::All.to_string(), "all");
    }
}
