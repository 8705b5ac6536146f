//! ORCA fare card trip decoder.
//!
//! Turns one raw transaction record read from an ORCA (Puget Sound)
//! contactless fare card into a [`Trip`](trip::Trip): when it happened,
//! which agency handled it, the fare charged, the balance left, and where
//! it started.

pub mod domain;
pub mod record;
pub mod stations;
pub mod trip;

pub use record::{MalformedRecordError, RECORD_LEN, decode};
pub use trip::Trip;
