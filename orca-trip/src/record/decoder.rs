//! Trip record decoder.
//!
//! Byte layout (big-endian, offsets in bytes, `hi`/`lo` are nibbles):
//!
//! | field                 | bits                                        |
//! |-----------------------|---------------------------------------------|
//! | agency id             | `[3].hi`                                    |
//! | timestamp             | `[3].lo [4] [5] [6] [7].hi`                 |
//! | coach / station code  | `[9].lo [10] [11].hi`                       |
//! | fare (cents)          | `[15]` then the top 7 bits of `[16]`        |
//! | transaction type      | `[17]`                                      |
//! | new balance (cents)   | `[34] [35]`                                 |

use tracing::{debug, trace};

use super::error::MalformedRecordError;
use crate::trip::Trip;

/// Minimum length of a trip record, in bytes.
pub const RECORD_LEN: usize = 36;

/// Values of the fare's high byte that mark a transfer or pass ride rather
/// than a charged fare.
const NO_FARE_MARKERS: [u8; 2] = [0x00, 0xFF];

/// Decode one raw trip record.
///
/// Records longer than [`RECORD_LEN`] are accepted and the extra bytes are
/// ignored. No field is checked for plausibility; unknown agencies and
/// station codes are kept as they are.
///
/// # Examples
///
/// ```
/// use orca_trip::decode;
///
/// let mut raw = [0u8; 36];
/// raw[3] = 0x30; // Sound Transit
/// raw[34] = 0x01; // balance 256 cents
///
/// let trip = decode(&raw).unwrap();
/// assert_eq!(trip.agency_id(), 3);
/// assert_eq!(trip.new_balance_cents(), 256);
///
/// assert!(decode(&raw[..10]).is_err());
/// ```
pub fn decode(raw: &[u8]) -> Result<Trip, MalformedRecordError> {
    let Some(r) = raw.first_chunk::<RECORD_LEN>() else {
        debug!(len = raw.len(), "rejecting short trip record");
        return Err(MalformedRecordError::new(raw.len()));
    };

    let timestamp = (u32::from(r[3] & 0x0F) << 28)
        | (u32::from(r[4]) << 20)
        | (u32::from(r[5]) << 12)
        | (u32::from(r[6]) << 4)
        | u32::from(r[7] >> 4);

    let coach_or_station_code =
        (u16::from(r[9] & 0x0F) << 12) | (u16::from(r[10]) << 4) | u16::from((r[11] & 0xF0) >> 4);

    let fare_cents = if NO_FARE_MARKERS.contains(&r[15]) {
        debug!(marker = r[15], "no-fare marker, treating fare as zero");
        0
    } else {
        (u16::from(r[15]) << 7) | u16::from(r[16] >> 1)
    };

    let new_balance_cents = u16::from_be_bytes([r[34], r[35]]);
    let agency_id = r[3] >> 4;
    let transaction_type_id = r[17];

    trace!(
        timestamp,
        coach_or_station_code,
        fare_cents,
        new_balance_cents,
        agency_id,
        transaction_type_id,
        "decoded trip record"
    );

    Ok(Trip::new(
        timestamp,
        coach_or_station_code,
        fare_cents,
        new_balance_cents,
        agency_id,
        transaction_type_id,
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RECORD_LEN;

    /// Build a record holding the given field values, laid out the way a
    /// card stores them. Unused bits are left zero.
    pub fn record(
        agency: u8,
        timestamp: u32,
        code: u16,
        fare_hi: u8,
        fare_lo: u8,
        transaction_type: u8,
        balance: u16,
    ) -> [u8; RECORD_LEN] {
        let mut r = [0u8; RECORD_LEN];
        r[3] = (agency << 4) | ((timestamp >> 28) as u8 & 0x0F);
        r[4] = (timestamp >> 20) as u8;
        r[5] = (timestamp >> 12) as u8;
        r[6] = (timestamp >> 4) as u8;
        r[7] = ((timestamp & 0x0F) as u8) << 4;
        r[9] = (code >> 12) as u8 & 0x0F;
        r[10] = (code >> 4) as u8;
        r[11] = ((code & 0x0F) as u8) << 4;
        r[15] = fare_hi;
        r[16] = fare_lo;
        r[17] = transaction_type;
        r[34..36].copy_from_slice(&balance.to_be_bytes());
        r
    }
}


#[cfg(test)]
mod proptests {
    use super::test_support::record;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Same bytes, same trip
        #[test]
        fn deterministic(raw in proptest::collection::vec(any::<u8>(), RECORD_LEN..64)) {
            prop_assert_eq!(decode(&raw).unwrap(), decode(&raw).unwrap());
        }

        /// Anything shorter than a full record is rejected
        #[test]
        fn short_rejected(raw in proptest::collection::vec(any::<u8>(), 0..RECORD_LEN)) {
            let err = decode(&raw).unwrap_err();
            prop_assert_eq!(err.record_len(), raw.len());
        }

        /// A no-fare marker means zero fare whatever follows it
        #[test]
        fn marker_means_zero_fare(
            raw in proptest::collection::vec(any::<u8>(), RECORD_LEN..64),
            marker in prop_oneof![Just(0x00u8), Just(0xFFu8)],
        ) {
            let mut raw = raw;
            raw[15] = marker;
            prop_assert_eq!(decode(&raw).unwrap().fare_cents(), 0);
        }

        /// Fields packed off byte boundaries come back out intact
        #[test]
        fn packed_fields_recovered(
            agency in 0u8..16,
            timestamp in any::<u32>(),
            code in any::<u16>(),
            balance in any::<u16>(),
        ) {
            let trip = decode(&record(agency, timestamp, code, 0, 0, 0, balance)).unwrap();
            prop_assert_eq!(trip.agency_id(), agency);
            prop_assert_eq!(trip.timestamp(), timestamp);
            prop_assert_eq!(trip.coach_or_station_code(), code);
            prop_assert_eq!(trip.new_balance_cents(), balance);
        }
    }
}
