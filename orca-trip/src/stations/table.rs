//! Station tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::domain::Station;

static LINK_STATIONS: LazyLock<HashMap<u16, Station>> = LazyLock::new(|| {
    HashMap::from([
        (
            10351,
            Station::new(
                "University of Washington Station",
                "UW Station",
                "47.6496",
                "-122.3037",
            ),
        ),
        (
            10352,
            Station::new(
                "Capitol Hill Station",
                "Capitol Hill",
                "47.6192",
                "-122.3202",
            ),
        ),
        (
            13193,
            Station::new(
                "Westlake Station",
                "Westlake",
                "47.6113968",
                "-122.337502",
            ),
        ),
        (
            13194,
            Station::new(
                "University Station",
                "University",
                "47.6072502",
                "-122.335754",
            ),
        ),
        (
            13195,
            Station::new(
                "Pioneer Square Station",
                "Pioneer Sq",
                "47.6021461",
                "-122.33107",
            ),
        ),
        (
            13196,
            Station::new(
                "International District Station",
                "ID",
                "47.5976601",
                "-122.328217",
            ),
        ),
        (
            13197,
            Station::new(
                "Stadium Station",
                "Stadium",
                "47.5918121",
                "-122.327354",
            ),
        ),
        (
            13198,
            Station::new(
                "SODO Station",
                "SODO",
                "47.5799484",
                "-122.327515",
            ),
        ),
        (
            13199,
            Station::new(
                "Beacon Hill Station",
                "Beacon Hill",
                "47.5791245",
                "-122.311287",
            ),
        ),
        (
            13200,
            Station::new(
                "Mount Baker Station",
                "Mount Baker",
                "47.5764389",
                "-122.297737",
            ),
        ),
        (
            13201,
            Station::new(
                "Columbia City Station",
                "Columbia City",
                "47.5589523",
                "-122.292343",
            ),
        ),
        (
            13202,
            Station::new(
                "Othello Station",
                "Othello",
                "47.5375366",
                "-122.281471",
            ),
        ),
        (
            13203,
            Station::new(
                "Rainier Beach Station",
                "Rainier Beach",
                "47.5222626",
                "-122.279579",
            ),
        ),
        (
            13204,
            Station::new(
                "Tukwila International Blvd Station",
                "Tukwila",
                "47.4642754",
                "-122.288391",
            ),
        ),
        (
            13205,
            Station::new(
                "Seatac Airport Station",
                "Sea-Tac",
                "47.4445305",
                "-122.297012",
            ),
        ),
    ])
});

static SOUNDER_STATIONS: LazyLock<HashMap<u16, Station>> = LazyLock::new(|| {
    HashMap::from([
        (
            3,
            Station::new(
                "King Street Station",
                "King Street",
                "47.598445",
                "-122.330161",
            ),
        ),
        (
            5,
            Station::new(
                "Kent Station",
                "Kent",
                "47.384257",
                "-122.233151",
            ),
        ),
    ])
});

static FERRY_TERMINALS: LazyLock<HashMap<u16, Station>> = LazyLock::new(|| {
    HashMap::from([
        (
            10101,
            Station::new(
                "Seattle Terminal",
                "Seattle",
                "47.602722",
                "-122.338512",
            ),
        ),
        (
            10103,
            Station::new(
                "Bainbridge Island Terminal",
                "Bainbridge",
                "47.62362",
                "-122.51082",
            ),
        ),
    ])
});

/// One of the code spaces a record's coach/station field can refer to.
///
/// The same number means different things in different tables, so a code
/// is only meaningful together with the table it was classified into.
///
/// # Examples
///
/// ```
/// use orca_trip::stations::StationTable;
///
/// let station = StationTable::LinkLightRail.get(10352).unwrap();
/// assert_eq!(station.name(), "Capitol Hill Station");
///
/// assert_eq!(StationTable::Ferry.name_or_unknown(1), "Unknown Terminal #1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationTable {
    /// Link light rail stations.
    LinkLightRail,
    /// Sounder commuter rail stations.
    Sounder,
    /// Washington State Ferries terminals.
    Ferry,
}

impl StationTable {
    fn map(self) -> &'static HashMap<u16, Station> {
        match self {
            StationTable::LinkLightRail => &*LINK_STATIONS,
            StationTable::Sounder => &*SOUNDER_STATIONS,
            StationTable::Ferry => &*FERRY_TERMINALS,
        }
    }

    /// Look up a station by code.
    pub fn get(self, code: u16) -> Option<&'static Station> {
        self.map().get(&code)
    }

    /// Returns the number of stations in the table.
    pub fn len(self) -> usize {
        self.map().len()
    }

    /// Check if the table is empty.
    pub fn is_empty(self) -> bool {
        self.map().is_empty()
    }

    /// Label for a code that is not in this table.
    pub fn unknown_label(self, code: u16) -> String {
        match self {
            StationTable::Ferry => format!("Unknown Terminal #{code}"),
            StationTable::LinkLightRail | StationTable::Sounder => {
                format!("Unknown Station #{code}")
            }
        }
    }

    /// Returns the station's name, or the unknown-code label if the code
    /// is not in this table.
    pub fn name_or_unknown(self, code: u16) -> String {
        match self.get(code) {
            Some(station) => station.name().to_string(),
            None => {
                debug!(code, table = ?self, "station code not in table");
                self.unknown_label(code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn tables_shareable_across_threads() {
        assert_send_sync::<StationTable>();
        assert_send_sync::<Station>();
        assert_send_sync::<&'static Station>();
    }

    #[test]
    fn concurrent_lookups_agree() {
        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        (
                            StationTable::LinkLightRail.get(10352),
                            StationTable::Ferry.name_or_unknown(10101),
                        )
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (station, terminal) in &results {
            assert_eq!(station.unwrap().name(), "Capitol Hill Station");
            assert_eq!(terminal, "Seattle Terminal");
        }
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_sizes() {
        assert_eq!(StationTable::LinkLightRail.len(), 15);
        assert_eq!(StationTable::Sounder.len(), 2);
        assert_eq!(StationTable::Ferry.len(), 2);
        assert!(!StationTable::Ferry.is_empty());
    }

    #[test]
    fn link_lookup() {
        let station = StationTable::LinkLightRail.get(10352).unwrap();
        assert_eq!(station.name(), "Capitol Hill Station");
        assert_eq!(station.short_name(), "Capitol Hill");

        let station = StationTable::LinkLightRail.get(13205).unwrap();
        assert_eq!(station.name(), "Seatac Airport Station");
        assert_eq!(station.latitude(), "47.4445305");
    }

    #[test]
    fn sounder_lookup() {
        assert_eq!(StationTable::Sounder.get(3).unwrap().name(), "King Street Station");
        assert_eq!(StationTable::Sounder.get(5).unwrap().name(), "Kent Station");
        assert!(StationTable::Sounder.get(4).is_none());
    }

    #[test]
    fn ferry_lookup() {
        assert_eq!(StationTable::Ferry.get(10101).unwrap().name(), "Seattle Terminal");
        assert_eq!(
            StationTable::Ferry.get(10103).unwrap().short_name(),
            "Bainbridge"
        );
    }

    #[test]
    fn code_spaces_are_separate() {
        // Ferry terminal codes sit in the same numeric range as Link codes
        assert!(StationTable::LinkLightRail.get(10101).is_none());
        assert!(StationTable::Ferry.get(10352).is_none());
        assert!(StationTable::LinkLightRail.get(5).is_none());
    }

    #[test]
    fn unknown_labels() {
        assert_eq!(
            StationTable::LinkLightRail.name_or_unknown(12345),
            "Unknown Station #12345"
        );
        assert_eq!(StationTable::Sounder.name_or_unknown(7), "Unknown Station #7");
        assert_eq!(StationTable::Ferry.name_or_unknown(10102), "Unknown Terminal #10102");
    }

    #[test]
    fn known_names() {
        assert_eq!(StationTable::Sounder.name_or_unknown(5), "Kent Station");
        assert_eq!(
            StationTable::Ferry.name_or_unknown(10103),
            "Bainbridge Island Terminal"
        );
    }
}
