//! Web layer for the recall game.
//!
//! Serves the page, renders the map server-side, and exposes the JSON API
//! the browser calls on each keystroke and on reset.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
