//! Station identifier type.

use std::fmt;

/// Number of stations on the map.
pub const STATION_COUNT: usize = 98;

/// Error returned when a raw value is not a valid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {value}: must be below {}", STATION_COUNT)]
pub struct InvalidStationId {
    value: usize,
}

/// A stable identifier for one station, in `[0, STATION_COUNT)`.
///
/// # Examples
///
/// ```
/// use recall_server::domain::StationId;
///
/// let central = StationId::parse(4).unwrap();
/// assert_eq!(central.index(), 4);
///
/// assert!(StationId::parse(98).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u8);

impl StationId {
    /// Parse a station identifier from its raw index.
    pub fn parse(value: usize) -> Result<Self, InvalidStationId> {
        if value >= STATION_COUNT {
            return Err(InvalidStationId { value });
        }
        Ok(StationId(value as u8))
    }

    /// Returns the identifier as an index into per-station tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every station identifier in ascending order.
    pub fn all() -> impl Iterator<Item = StationId> {
        (0..STATION_COUNT as u8).map(StationId)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for StationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
