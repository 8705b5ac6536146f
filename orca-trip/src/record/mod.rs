//! Raw ORCA transaction record decoding.
//!
//! A record is a fixed-layout run of bytes read from the card. Most of its
//! fields are packed across byte boundaries on nibble (or single-bit)
//! offsets, so they are pulled out with explicit shifts and masks.

mod decoder;
mod error;

pub use decoder::{RECORD_LEN, decode};
pub use error::MalformedRecordError;

#[cfg(test)]
pub(crate) use decoder::test_support;
