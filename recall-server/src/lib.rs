//! MTR station recall game.
//!
//! Players type station names; each correct name reveals the station on a
//! schematic map and moves the completion percentage. The library holds the
//! alias resolver, the progress tracker, the static network data, and the
//! web shell that serves the game.

pub mod config;
pub mod domain;
pub mod game;
pub mod network;
pub mod progress;
pub mod resolver;
pub mod web;
