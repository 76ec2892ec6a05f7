//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::game::Game;
use crate::network::MapGeometry;

/// Shared application state.
///
/// The server hosts a single game; requests take the lock, run one
/// operation to completion, and release it.
#[derive(Clone)]
pub struct AppState {
    /// The game being played
    pub game: Arc<Mutex<Game>>,

    /// Map geometry used for rendering
    pub geometry: Arc<MapGeometry>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(game: Game, geometry: MapGeometry) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
            geometry: Arc::new(geometry),
        }
    }
}
