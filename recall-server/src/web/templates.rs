//! Askama templates for the web frontend.

use askama::Template;

use crate::game::Game;
use crate::network::{MAP_HEIGHT, MAP_WIDTH, MapGeometry};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The game page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub map: MapView,
    pub progress: ProgressView,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub station_count: usize,
    pub alias_count: usize,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// The map on its own, swapped in after each discovery.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub map: MapView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Everything drawn on the map.
#[derive(Debug, Clone)]
pub struct MapView {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LineView>,
    pub markers: Vec<MarkerView>,
}

impl MapView {
    /// Build the map for the game's current state.
    ///
    /// Lines are always drawn; a station gets a marker and a label only
    /// once it has been discovered.
    pub fn build(game: &Game, geometry: &MapGeometry) -> Self {
        let lines = geometry
            .paths()
            .iter()
            .map(|path| LineView {
                name: path.line.name(),
                color: path.line.color(),
                points: path
                    .points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" "),
            })
            .collect();

        let markers = game
            .tracker()
            .discovered()
            .filter_map(|id| geometry.station(id))
            .map(|s| MarkerView {
                x: s.position.x,
                y: s.position.y,
                label_y: s.position.y - 10,
                name: game.name(s.id),
            })
            .collect();

        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            lines,
            markers,
        }
    }
}

/// One line stroke.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: &'static str,
    pub color: &'static str,
    /// SVG polyline points, e.g. "80,380 720,420"
    pub points: String,
}

/// A discovered station.
#[derive(Debug, Clone)]
pub struct MarkerView {
    pub x: i32,
    pub y: i32,
    pub label_y: i32,
    pub name: &'static str,
}

/// Percentage and count text.
#[derive(Debug, Clone)]
pub struct ProgressView {
    pub percentage_text: String,
    pub count_text: String,
}

impl ProgressView {
    pub fn from_game(game: &Game) -> Self {
        Self {
            percentage_text: game.tracker().percentage_text(),
            count_text: game.tracker().count_text(),
        }
    }
}
