//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationId;
use crate::game::{Game, GuessOutcome, Tone};

/// Raw text from the input field.
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub text: String,
}

/// Request to clear progress.
#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    /// Whether the player has already confirmed the reset
    #[serde(default)]
    pub confirmed: bool,
}

/// Current progress, pushed to the percentage and count elements.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub found: usize,
    pub total: usize,

    /// Completion percentage, one decimal place
    pub percentage: f64,

    /// e.g. "12.2%"
    pub percentage_text: String,

    /// e.g. "12/98 stations found"
    pub count_text: String,

    pub complete: bool,

    /// Whether a reset would need confirmation
    pub needs_reset_confirmation: bool,
}

impl ProgressResponse {
    /// Snapshot the game's progress.
    pub fn from_game(game: &Game) -> Self {
        let tracker = game.tracker();
        Self {
            found: tracker.found(),
            total: tracker.total(),
            percentage: tracker.percentage(),
            percentage_text: tracker.percentage_text(),
            count_text: tracker.count_text(),
            complete: tracker.is_complete(),
            needs_reset_confirmation: game.needs_reset_confirmation(),
        }
    }
}

/// How a guess was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessStatus {
    NotFound,
    AlreadyFound,
    Discovered,
}

/// A station named in a response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: StationId,
    pub name: String,
}

/// Response to a guess.
#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub outcome: GuessStatus,

    /// The station the text resolved to, if any
    pub station: Option<StationResult>,

    /// Whether the browser should clear the input field
    pub clear_input: bool,

    /// True only on the guess that completed the map
    pub completed: bool,

    /// How long to show the success banner, when `completed`
    pub success_ms: Option<u64>,

    /// Tone to play, on a new discovery
    pub tone: Option<Tone>,

    pub progress: ProgressResponse,
}

impl GuessResponse {
    /// Build the response for `outcome`, after it has been applied to `game`.
    pub fn from_outcome(outcome: GuessOutcome, game: &Game) -> Self {
        let progress = ProgressResponse::from_game(game);
        match outcome {
            GuessOutcome::NotFound => Self {
                outcome: GuessStatus::NotFound,
                station: None,
                clear_input: false,
                completed: false,
                success_ms: None,
                tone: None,
                progress,
            },
            GuessOutcome::AlreadyFound { station } => Self {
                outcome: GuessStatus::AlreadyFound,
                station: Some(StationResult {
                    id: station,
                    name: game.name(station).to_string(),
                }),
                clear_input: false,
                completed: false,
                success_ms: None,
                tone: None,
                progress,
            },
            GuessOutcome::Discovered {
                station,
                name,
                completed,
            } => Self {
                outcome: GuessStatus::Discovered,
                station: Some(StationResult {
                    id: station,
                    name: name.to_string(),
                }),
                clear_input: true,
                completed,
                success_ms: completed.then_some(game.config().success_display_ms),
                tone: Some(Tone::DISCOVERY),
                progress,
            },
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Set when a reset was refused pending confirmation
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub confirmation_required: bool,
}
