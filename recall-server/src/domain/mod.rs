//! Domain types for the station recall game.
//!
//! These types are validated at construction time, so code that receives
//! them can trust their invariants without re-checking.

mod alias;
mod line;
mod station;

pub use alias::{MIN_ALIAS_LEN, normalize};
pub use line::{LINE_COUNT, Line};
pub use station::{InvalidStationId, STATION_COUNT, StationId};
