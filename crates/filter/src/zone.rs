//! Zone selector.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Select-control value meaning "every zone".
pub const ALL_ZONES: &str = "all";

/// Which zone the map is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ZoneSelector {
    /// No zone restriction.
    #[default]
    All,
    /// Only features whose `Zone` equals this identifier.
    Zone(String),
}

impl ZoneSelector {
    /// Returns the zone identifier, or `None` for [`ZoneSelector::All`].
    pub fn zone(&self) -> Option<&str> {
        match self {
            ZoneSelector::All => None,
            ZoneSelector::Zone(z) => Some(z),
        }
    }
}

impl From<&str> for ZoneSelector {
    /// `"all"` (exact, case-sensitive) selects every zone; anything else is
    /// taken as a zone identifier.
    fn from(value: &str) -> Self {
        if value == ALL_ZONES {
            ZoneSelector::All
        } else {
            ZoneSelector::Zone(value.to_string())
        }
    }
}

impl FromStr for ZoneSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ZoneSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSelector::All => f.write_str(ALL_ZONES),
            ZoneSelector::Zone(z) => f.write_str(z),
        }
    }
}
