//! Static station lookup tables.
//!
//! Provides code → [`Station`](crate::domain::Station) mapping for the three
//! kinds of fixed stop an ORCA record can name: Link light rail stations,
//! Sounder commuter rail stations and Washington State Ferries terminals.
//! The tables are built on first use and never change afterwards.

mod table;

pub use table::StationTable;
