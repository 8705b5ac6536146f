//! Mode, agency, route and station queries on a decoded trip.
//!
//! The coach/station field means different things depending on who ran
//! the trip. Sound Transit uses it for Link light rail station codes
//! (above 10000), Sounder station codes (below 20) and, in between, the
//! coach number of an express bus. Ferries use it for terminal codes, and
//! every other agency for a bus coach number.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use super::Trip;
use crate::domain::{Agency, CurrencyFormat, Mode, Station, format_cents};
use crate::stations::StationTable;

/// Sound Transit codes above this are Link light rail stations.
const LINK_CODE_FLOOR: u16 = 10000;

/// Sound Transit codes below this are Sounder commuter rail stations.
const SOUNDER_CODE_CEILING: u16 = 20;

impl Trip {
    /// Returns the agency, if the id is one we know.
    pub fn agency(&self) -> Option<Agency> {
        Agency::from_id(self.agency_id)
    }

    fn is_agency(&self, agency: Agency) -> bool {
        self.agency_id == agency.id()
    }

    /// Whether this is a Link light rail trip.
    pub fn is_rail_transit(&self) -> bool {
        self.is_agency(Agency::SoundTransit) && self.coach_or_station_code > LINK_CODE_FLOOR
    }

    /// Whether this is a Sounder commuter rail trip.
    pub fn is_commuter_rail(&self) -> bool {
        self.is_agency(Agency::SoundTransit) && self.coach_or_station_code < SOUNDER_CODE_CEILING
    }

    /// Returns the mode of transport.
    ///
    /// Rail checks come first: they share the Sound Transit agency id with
    /// express buses and are told apart only by code range.
    pub fn mode(&self) -> Mode {
        if self.is_rail_transit() {
            Mode::Metro
        } else if self.is_commuter_rail() {
            Mode::Train
        } else if self.is_agency(Agency::WashingtonStateFerries) {
            Mode::Ferry
        } else {
            Mode::Bus
        }
    }

    /// The table the coach/station code should be looked up in, if any.
    fn station_table(&self) -> Option<StationTable> {
        match self.mode() {
            Mode::Metro => Some(StationTable::LinkLightRail),
            Mode::Train => Some(StationTable::Sounder),
            Mode::Ferry => Some(StationTable::Ferry),
            Mode::Bus => None,
        }
    }

    /// Returns the full agency name, or "Unknown Agency: <id>".
    pub fn agency_name(&self) -> Cow<'static, str> {
        match self.agency() {
            Some(agency) => Cow::Borrowed(agency.name()),
            None => Cow::Owned(self.unknown_agency()),
        }
    }

    /// Returns the agency abbreviation, or "Unknown Agency: <id>".
    pub fn short_agency_name(&self) -> Cow<'static, str> {
        match self.agency() {
            Some(agency) => Cow::Borrowed(agency.short_name()),
            None => Cow::Owned(self.unknown_agency()),
        }
    }

    fn unknown_agency(&self) -> String {
        format!("Unknown Agency: {}", self.agency_id)
    }

    /// Returns the route name, where one can be given.
    ///
    /// Bus route numbers are not stored in the record, so buses only get a
    /// generic label, and only for the agencies known to run them here.
    pub fn route_name(&self) -> Option<&'static str> {
        if self.is_rail_transit() {
            Some("Link Light Rail")
        } else if self.is_commuter_rail() {
            Some("Sounder Train")
        } else if self.is_agency(Agency::SoundTransit) {
            Some("Express Bus")
        } else if self.is_agency(Agency::KingCountyMetro) {
            Some("Bus")
        } else {
            None
        }
    }

    /// Returns the boarding station, for rail and ferry trips with a known
    /// code.
    pub fn start_station(&self) -> Option<&'static Station> {
        self.station_table()?.get(self.coach_or_station_code)
    }

    /// Returns a name for where the trip started.
    ///
    /// Never empty: unknown codes are labelled with the raw code, and bus
    /// trips are labelled with the coach number.
    pub fn start_station_name(&self) -> String {
        match self.station_table() {
            Some(table) => table.name_or_unknown(self.coach_or_station_code),
            None => format!("Coach #{}", self.coach_or_station_code),
        }
    }

    /// Always `None`: the destination is not part of this record.
    pub fn end_station(&self) -> Option<&'static Station> {
        None
    }

    /// Always `None`: the destination is not part of this record.
    pub fn end_station_name(&self) -> Option<String> {
        None
    }

    /// The bus coach number. Same value as [`Trip::coach_or_station_code`].
    pub fn coach_number(&self) -> u16 {
        self.coach_or_station_code
    }

    /// Raw transaction type. Same value as [`Trip::transaction_type_id`].
    pub fn transaction_type(&self) -> u8 {
        self.transaction_type_id
    }

    /// Time of the tap, in UTC.
    pub fn time(&self) -> DateTime<Utc> {
        // Every u32 second count is in range, so the default is never used
        DateTime::from_timestamp(i64::from(self.timestamp), 0).unwrap_or_default()
    }

    /// Always `None`: there is no tap-off time in this record.
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Always true: every record carries a tap time.
    pub fn has_time(&self) -> bool {
        true
    }

    /// Always true, including for zero-fare transfers and pass rides.
    pub fn has_fare(&self) -> bool {
        true
    }

    /// Fare formatted as currency text.
    pub fn fare_string(&self, format: &CurrencyFormat) -> String {
        format_cents(u64::from(self.fare_cents), format)
    }

    /// Balance after the trip, formatted as currency text.
    pub fn balance_string(&self, format: &CurrencyFormat) -> String {
        format_cents(u64::from(self.new_balance_cents), format)
    }
}
