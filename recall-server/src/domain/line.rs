//! MTR lines.

use std::fmt;

/// Number of lines drawn on the map.
pub const LINE_COUNT: usize = 9;

/// A line on the schematic map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Island,
    TsuenWan,
    KwunTong,
    AirportExpress,
    TseungKwanO,
    TungChung,
    EastRail,
    TuenMa,
    SouthIsland,
}

impl Line {
    /// All lines, in drawing order.
    pub const ALL: [Line; LINE_COUNT] = [
        Line::Island,
        Line::TsuenWan,
        Line::KwunTong,
        Line::AirportExpress,
        Line::TseungKwanO,
        Line::TungChung,
        Line::EastRail,
        Line::TuenMa,
        Line::SouthIsland,
    ];

    /// Display name of the line.
    pub fn name(self) -> &'static str {
        match self {
            Line::Island => "Island",
            Line::TsuenWan => "Tsuen Wan",
            Line::KwunTong => "Kwun Tong",
            Line::AirportExpress => "Airport Express",
            Line::TseungKwanO => "Tseung Kwan O",
            Line::TungChung => "Tung Chung",
            Line::EastRail => "East Rail",
            Line::TuenMa => "Tuen Ma",
            Line::SouthIsland => "South Island",
        }
    }

    /// Stroke colour as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Line::Island => "#0073e6",
            Line::TsuenWan => "#ff0000",
            Line::KwunTong => "#00a651",
            Line::AirportExpress => "#00b7a7",
            Line::TseungKwanO => "#8e4ec6",
            Line::TungChung => "#ff9500",
            Line::EastRail => "#5ac4e8",
            Line::TuenMa => "#8d5524",
            Line::SouthIsland => "#ffda00",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Line", self.name())
    }
}
