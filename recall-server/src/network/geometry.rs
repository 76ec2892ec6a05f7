//! Schematic map geometry.
//!
//! Station coordinates live in an 800×600 map space. Some stations share
//! coordinates with an interchange partner; that is how the artwork was laid
//! out and is kept as-is.

use crate::domain::{Line, STATION_COUNT, StationId};

/// Width of the map coordinate space.
pub const MAP_WIDTH: u32 = 800;

/// Height of the map coordinate space.
pub const MAP_HEIGHT: u32 = 600;

/// A point in map space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where a station sits and which line it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationGeometry {
    pub id: StationId,
    pub position: Point,
    pub line: Line,
}

/// The stroke drawn for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePath {
    pub line: Line,
    pub points: Vec<Point>,
}

/// Per-station (x, y, line), indexed by station id.
const MTR_STATIONS: [(i32, i32, Line); STATION_COUNT] = [
    // Island
    (80, 380, Line::Island),
    (120, 380, Line::Island),
    (160, 380, Line::Island),
    (200, 380, Line::Island),
    (250, 380, Line::Island),
    (290, 380, Line::Island),
    (330, 380, Line::Island),
    (370, 380, Line::Island),
    (410, 380, Line::Island),
    (450, 380, Line::Island),
    (490, 380, Line::Island),
    (530, 380, Line::Island),
    (570, 380, Line::Island),
    (610, 380, Line::Island),
    (650, 380, Line::Island),
    (680, 400, Line::Island),
    (720, 420, Line::Island),
    // TsuenWan
    (250, 320, Line::TsuenWan),
    (250, 300, Line::TsuenWan),
    (250, 280, Line::TsuenWan),
    (240, 260, Line::TsuenWan),
    (230, 240, Line::TsuenWan),
    (210, 220, Line::TsuenWan),
    (190, 200, Line::TsuenWan),
    (170, 180, Line::TsuenWan),
    (150, 160, Line::TsuenWan),
    (130, 150, Line::TsuenWan),
    (110, 148, Line::TsuenWan),
    (100, 147, Line::TsuenWan),
    (90, 146, Line::TsuenWan),
    (80, 145, Line::TsuenWan),
    // KwunTong
    (270, 350, Line::KwunTong),
    (290, 330, Line::KwunTong),
    (260, 260, Line::KwunTong),
    (310, 255, Line::KwunTong),
    (340, 250, Line::KwunTong),
    (370, 245, Line::KwunTong),
    (400, 240, Line::KwunTong),
    (430, 230, Line::KwunTong),
    (460, 210, Line::KwunTong),
    (490, 190, Line::KwunTong),
    (520, 170, Line::KwunTong),
    (550, 160, Line::KwunTong),
    (580, 155, Line::KwunTong),
    (620, 150, Line::KwunTong),
    // AirportExpress
    (250, 400, Line::AirportExpress),
    (220, 430, Line::AirportExpress),
    (170, 460, Line::AirportExpress),
    (100, 500, Line::AirportExpress),
    (70, 520, Line::AirportExpress),
    // TseungKwanO
    (530, 380, Line::TseungKwanO),
    (530, 380, Line::TseungKwanO),
    (620, 155, Line::TseungKwanO),
    (620, 150, Line::TseungKwanO),
    (680, 120, Line::TseungKwanO),
    (700, 115, Line::TseungKwanO),
    (720, 110, Line::TseungKwanO),
    (740, 105, Line::TseungKwanO),
    // TungChung
    (290, 420, Line::TungChung),
    (240, 450, Line::TungChung),
    (190, 480, Line::TungChung),
    (140, 500, Line::TungChung),
    (120, 520, Line::TungChung),
    (90, 540, Line::TungChung),
    (110, 560, Line::TungChung),
    // EastRail
    (310, 350, Line::EastRail),
    (330, 320, Line::EastRail),
    (350, 290, Line::EastRail),
    (380, 250, Line::EastRail),
    (400, 200, Line::EastRail),
    (410, 180, Line::EastRail),
    (420, 160, Line::EastRail),
    (430, 140, Line::EastRail),
    (440, 120, Line::EastRail),
    (450, 100, Line::EastRail),
    (470, 80, Line::EastRail),
    (490, 70, Line::EastRail),
    (510, 60, Line::EastRail),
    (480, 50, Line::EastRail),
    // TuenMa
    (50, 100, Line::TuenMa),
    (70, 110, Line::TuenMa),
    (90, 120, Line::TuenMa),
    (110, 130, Line::TuenMa),
    (130, 140, Line::TuenMa),
    (150, 150, Line::TuenMa),
    (170, 160, Line::TuenMa),
    (240, 380, Line::TuenMa),
    (280, 340, Line::TuenMa),
    (320, 330, Line::TuenMa),
    (360, 320, Line::TuenMa),
    (400, 310, Line::TuenMa),
    (440, 260, Line::TuenMa),
    (460, 240, Line::TuenMa),
    (500, 200, Line::TuenMa),
    (540, 180, Line::TuenMa),
    (580, 160, Line::TuenMa),
    (620, 140, Line::TuenMa),
    // SouthIsland
    (290, 410, Line::SouthIsland),
];

/// Hand-drawn strokes for the lines that have them. Lines not listed here
/// are drawn through their stations in id order.
fn drawn_path(line: Line) -> Option<Vec<Point>> {
    let points = match line {
        Line::Island => vec![Point::new(80, 380), Point::new(720, 420)],
        Line::TsuenWan => vec![
            Point::new(250, 380),
            Point::new(250, 320),
            Point::new(230, 240),
            Point::new(80, 145),
        ],
        Line::KwunTong => vec![
            Point::new(270, 350),
            Point::new(260, 260),
            Point::new(620, 150),
        ],
        Line::AirportExpress => vec![Point::new(250, 400), Point::new(70, 520)],
        Line::TseungKwanO => vec![Point::new(620, 155), Point::new(740, 105)],
        _ => return None,
    };
    Some(points)
}

/// Station positions plus line strokes: everything the map renderer draws
/// apart from labels.
#[derive(Debug, Clone)]
pub struct MapGeometry {
    stations: Vec<StationGeometry>,
    paths: Vec<LinePath>,
}

impl MapGeometry {
    /// The MTR schematic.
    pub fn mtr() -> Self {
        let stations: Vec<StationGeometry> = StationId::all()
            .zip(MTR_STATIONS)
            .map(|(id, (x, y, line))| StationGeometry {
                id,
                position: Point::new(x, y),
                line,
            })
            .collect();

        let paths = Line::ALL
            .iter()
            .map(|&line| {
                let points = drawn_path(line).unwrap_or_else(|| {
                    stations
                        .iter()
                        .filter(|s| s.line == line)
                        .map(|s| s.position)
                        .collect()
                });
                LinePath { line, points }
            })
            .collect();

        Self { stations, paths }
    }

    /// Geometry for one station.
    pub fn station(&self, id: StationId) -> Option<&StationGeometry> {
        self.stations.get(id.index())
    }

    /// All stations, in id order.
    pub fn stations(&self) -> &[StationGeometry] {
        &self.stations
    }

    /// Line strokes, in drawing order.
    pub fn paths(&self) -> &[LinePath] {
        &self.paths
    }
}
