//! The decoded trip.
//!
//! A [`Trip`] is a plain value holding the six integers pulled out of a
//! record. Everything else (mode, agency and station names, money strings)
//! is derived from those on demand.

mod classify;
mod display;

use serde::{Deserialize, Serialize};

use crate::record::{self, MalformedRecordError};

pub use display::{ListItem, TripSummary};

/// Error returned when rebuilding a trip from integers that do not fit
/// the field they are meant for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("trip field {field} out of range: {value}")]
pub struct TripFieldError {
    field: &'static str,
    value: u64,
}

impl TripFieldError {
    fn new(field: &'static str, value: u64) -> Self {
        Self { field, value }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the value that did not fit.
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// One fare card transaction.
///
/// Fields are declared in the order the trip is persisted in, so any
/// field-ordered serde format writes them as
/// `timestamp, coach_or_station_code, fare_cents, new_balance_cents,
/// agency_id, transaction_type_id`.
///
/// # Examples
///
/// ```
/// use orca_trip::Trip;
/// use orca_trip::domain::Mode;
///
/// let trip = Trip::new(1_438_000_000, 10352, 275, 2700, 3, 0);
/// assert_eq!(trip.mode(), Mode::Metro);
/// assert_eq!(trip.start_station_name(), "Capitol Hill Station");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    timestamp: u32,
    coach_or_station_code: u16,
    fare_cents: u16,
    new_balance_cents: u16,
    agency_id: u8,
    transaction_type_id: u8,
}

impl Trip {
    /// Create a trip from already-decoded field values.
    pub fn new(
        timestamp: u32,
        coach_or_station_code: u16,
        fare_cents: u16,
        new_balance_cents: u16,
        agency_id: u8,
        transaction_type_id: u8,
    ) -> Self {
        Self {
            timestamp,
            coach_or_station_code,
            fare_cents,
            new_balance_cents,
            agency_id,
            transaction_type_id,
        }
    }

    /// Decode a trip from a raw card record.
    ///
    /// See [`record::decode`].
    pub fn decode(raw: &[u8]) -> Result<Self, MalformedRecordError> {
        record::decode(raw)
    }

    /// Seconds since the Unix epoch at which the card was tapped.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// The bus coach number, or the station or terminal code, depending on
    /// agency and range. See [`Trip::mode`].
    pub fn coach_or_station_code(&self) -> u16 {
        self.coach_or_station_code
    }

    /// Fare charged, in cents. Zero for transfers and pass rides.
    pub fn fare_cents(&self) -> u16 {
        self.fare_cents
    }

    /// Card balance after this trip, in cents.
    pub fn new_balance_cents(&self) -> u16 {
        self.new_balance_cents
    }

    /// Raw agency id. See [`crate::domain::Agency::from_id`].
    pub fn agency_id(&self) -> u8 {
        self.agency_id
    }

    /// Raw transaction type code, kept as read.
    pub fn transaction_type_id(&self) -> u8 {
        self.transaction_type_id
    }

    /// Returns the fields in persistence order.
    pub fn to_fields(&self) -> [u64; 6] {
        [
            u64::from(self.timestamp),
            u64::from(self.coach_or_station_code),
            u64::from(self.fare_cents),
            u64::from(self.new_balance_cents),
            u64::from(self.agency_id),
            u64::from(self.transaction_type_id),
        ]
    }

    /// Rebuild a trip from fields in persistence order.
    pub fn from_fields(fields: [u64; 6]) -> Result<Self, TripFieldError> {
        let [
            timestamp,
            coach_or_station_code,
            fare_cents,
            new_balance_cents,
            agency_id,
            transaction_type_id,
        ] = fields;

        Ok(Self {
            timestamp: narrow("timestamp", timestamp)?,
            coach_or_station_code: narrow("coach_or_station_code", coach_or_station_code)?,
            fare_cents: narrow("fare_cents", fare_cents)?,
            new_balance_cents: narrow("new_balance_cents", new_balance_cents)?,
            agency_id: narrow("agency_id", agency_id)?,
            transaction_type_id: narrow("transaction_type_id", transaction_type_id)?,
        })
    }
}

fn narrow<T: TryFrom<u64>>(field: &'static str, value: u64) -> Result<T, TripFieldError> {
    T::try_from(value).map_err(|_| TripFieldError::new(field, value))
}

impl TryFrom<&[u8]> for Trip {
    type Error = MalformedRecordError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        record::decode(raw)
    }
}
