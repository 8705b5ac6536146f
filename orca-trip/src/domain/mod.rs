//! Domain types for ORCA trips.
//!
//! These are the small value types a decoded trip is described with:
//! the operating agency, the mode of transport, a station, and the
//! currency format used to display cent amounts.

mod agency;
mod mode;
mod money;
mod station;

pub use agency::Agency;
pub use mode::Mode;
pub use money::{CurrencyFormat, format_cents};
pub use station::Station;
