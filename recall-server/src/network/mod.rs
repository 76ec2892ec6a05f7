//! Static MTR network data.
//!
//! Canonical station names, the alias table players can type, and the
//! schematic map geometry. All tables are built once and never mutated.

mod aliases;
mod geometry;
mod names;

pub use aliases::MTR_ALIASES;
pub use geometry::{MAP_HEIGHT, MAP_WIDTH, LinePath, MapGeometry, Point, StationGeometry};
pub use names::{StationNames, UNKNOWN_NAME};
