//! Display values for a trip.
//!
//! [`TripSummary`] gathers everything a trip view shows in one
//! serializable value; [`ListItem`] rows are the two-column label/value
//! form of the same data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Trip;
use crate::domain::{CurrencyFormat, Mode};

/// A label/value row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    label: &'static str,
    value: String,
}

impl ListItem {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Everything a trip view needs, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSummary {
    pub time: DateTime<Utc>,
    pub agency_name: String,
    pub short_agency_name: String,
    pub route_name: Option<&'static str>,
    pub mode: Mode,
    pub start_station_name: String,
    pub end_station_name: Option<String>,
    pub fare: String,
    pub balance: String,
    pub has_time: bool,
    pub has_fare: bool,
}

impl Trip {
    /// Build the display summary for this trip.
    pub fn summary(&self, format: &CurrencyFormat) -> TripSummary {
        TripSummary {
            time: self.time(),
            agency_name: self.agency_name().into_owned(),
            short_agency_name: self.short_agency_name().into_owned(),
            route_name: self.route_name(),
            mode: self.mode(),
            start_station_name: self.start_station_name(),
            end_station_name: self.end_station_name(),
            fare: self.fare_string(format),
            balance: self.balance_string(format),
            has_time: self.has_time(),
            has_fare: self.has_fare(),
        }
    }

    /// Label/value rows for a trip detail view.
    ///
    /// Rows with nothing to show (route for most buses, end station) are
    /// left out.
    pub fn list_items(&self, format: &CurrencyFormat) -> Vec<ListItem> {
        let summary = self.summary(format);

        let mut items = vec![
            ListItem::new(
                "Time",
                summary.time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            ListItem::new("Agency", summary.agency_name),
        ];
        if let Some(route) = summary.route_name {
            items.push(ListItem::new("Route", route));
        }
        items.push(ListItem::new("Mode", summary.mode.label()));
        items.push(ListItem::new("Start Station", summary.start_station_name));
        if let Some(end) = summary.end_station_name {
            items.push(ListItem::new("End Station", end));
        }
        if summary.has_fare {
            items.push(ListItem::new("Fare", summary.fare));
        }
        items.push(ListItem::new("Balance", summary.balance));
        items
    }
}
