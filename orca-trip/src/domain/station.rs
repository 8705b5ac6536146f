//! Station type.

use serde::Serialize;

/// A fixed stop: a light rail or commuter rail station, or a ferry terminal.
///
/// Coordinates are kept as text exactly as published, since they are only
/// ever shown to the user or handed to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Station {
    name: &'static str,
    short_name: &'static str,
    latitude: &'static str,
    longitude: &'static str,
}

impl Station {
    /// Create a new station.
    pub const fn new(
        name: &'static str,
        short_name: &'static str,
        latitude: &'static str,
        longitude: &'static str,
    ) -> Self {
        Self {
            name,
            short_name,
            latitude,
            longitude,
        }
    }

    /// Returns the full station name (e.g. "Capitol Hill Station").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the abbreviated name (e.g. "Capitol Hill").
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    pub fn latitude(&self) -> &'static str {
        self.latitude
    }

    pub fn longitude(&self) -> &'static str {
        self.longitude
    }
}
