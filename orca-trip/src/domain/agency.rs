//! Transit agency type.

use std::fmt;

/// An agency of the ORCA consortium.
///
/// Each record stores the agency as a 4-bit id. Ids outside this set do
/// occur on real cards; they are not an error, [`Agency::from_id`] simply
/// returns `None` for them and callers fall back to showing the raw id.
///
/// # Examples
///
/// ```
/// use orca_trip::domain::Agency;
///
/// let st = Agency::from_id(3).unwrap();
/// assert_eq!(st, Agency::SoundTransit);
/// assert_eq!(st.short_name(), "ST");
///
/// assert!(Agency::from_id(15).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agency {
    CommunityTransit,
    SoundTransit,
    KingCountyMetro,
    PierceTransit,
    EverettTransit,
    WashingtonStateFerries,
}

impl Agency {
    /// All known agencies, in id order.
    pub const ALL: [Agency; 6] = [
        Agency::CommunityTransit,
        Agency::SoundTransit,
        Agency::KingCountyMetro,
        Agency::PierceTransit,
        Agency::EverettTransit,
        Agency::WashingtonStateFerries,
    ];

    /// Look up an agency by the id stored on the card.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x02 => Some(Agency::CommunityTransit),
            0x03 => Some(Agency::SoundTransit),
            0x04 => Some(Agency::KingCountyMetro),
            0x06 => Some(Agency::PierceTransit),
            0x07 => Some(Agency::EverettTransit),
            0x08 => Some(Agency::WashingtonStateFerries),
            _ => None,
        }
    }

    /// Returns the id this agency is stored as on the card.
    pub fn id(self) -> u8 {
        match self {
            Agency::CommunityTransit => 0x02,
            Agency::SoundTransit => 0x03,
            Agency::KingCountyMetro => 0x04,
            Agency::PierceTransit => 0x06,
            Agency::EverettTransit => 0x07,
            Agency::WashingtonStateFerries => 0x08,
        }
    }

    /// Returns the full agency name.
    pub fn name(self) -> &'static str {
        match self {
            Agency::CommunityTransit => "Community Transit",
            Agency::SoundTransit => "Sound Transit",
            Agency::KingCountyMetro => "King County Metro Transit",
            Agency::PierceTransit => "Pierce Transit",
            Agency::EverettTransit => "Everett Transit",
            Agency::WashingtonStateFerries => "Washington State Ferries",
        }
    }

    /// Returns the agency's abbreviation.
    pub fn short_name(self) -> &'static str {
        match self {
            Agency::CommunityTransit => "CT",
            Agency::SoundTransit => "ST",
            Agency::KingCountyMetro => "KCM",
            Agency::PierceTransit => "PT",
            Agency::EverettTransit => "ET",
            Agency::WashingtonStateFerries => "WSF",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
