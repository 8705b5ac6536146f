//! Mode of transport.

use std::fmt;

use serde::Serialize;

/// How a trip was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Light rail (Link).
    Metro,
    /// Commuter rail (Sounder).
    Train,
    Ferry,
    Bus,
}

impl Mode {
    /// Returns a human-readable label for the mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Metro => "Light Rail",
            Mode::Train => "Train",
            Mode::Ferry => "Ferry",
            Mode::Bus => "Bus",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
