//! The game: one resolver, one tracker, and the glue between them.
//!
//! A [`Game`] is an explicit value owned by its caller (the web shell holds
//! exactly one). Every operation runs synchronously to completion.

mod config;
mod feedback;


pub use config::GameConfig;
pub use feedback::{Feedback, FeedbackError, SilentFeedback, Tone};

use tracing::{debug, info};

use crate::domain::StationId;
use crate::network::StationNames;
use crate::progress::{Discovery, ProgressTracker};
use crate::resolver::AliasResolver;

/// What happened to one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The text is not a known alias (or is too short). Nothing changes.
    NotFound,

    /// The text names a station that was already discovered.
    AlreadyFound { station: StationId },

    /// A new station was discovered.
    Discovered {
        station: StationId,
        name: &'static str,
        /// True when this discovery completed the map.
        completed: bool,
    },
}

impl GuessOutcome {
    /// Whether the shell should clear the input field.
    pub fn clears_input(&self) -> bool {
        matches!(self, GuessOutcome::Discovered { .. })
    }
}

/// What happened to a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Progress was cleared.
    Reset,

    /// There is enough progress that the player must confirm first.
    /// Nothing changed.
    NeedsConfirmation,
}

/// A single recall game.
pub struct Game {
    resolver: AliasResolver,
    tracker: ProgressTracker,
    names: StationNames,
    feedback: Box<dyn Feedback>,
    config: GameConfig,
}

impl Game {
    /// Create a game from its parts. Feedback defaults to silent.
    pub fn new(
        resolver: AliasResolver,
        tracker: ProgressTracker,
        names: StationNames,
        config: GameConfig,
    ) -> Self {
        Self {
            resolver,
            tracker,
            names,
            feedback: Box::new(SilentFeedback),
            config,
        }
    }

    /// A game over the full MTR map.
    pub fn mtr(config: GameConfig) -> Self {
        let resolver = AliasResolver::mtr()
            .into_builder()
            .min_len(config.min_alias_len)
            .build();
        Self::new(
            resolver,
            ProgressTracker::default(),
            StationNames::mtr(),
            config,
        )
    }

    /// Replace the feedback sink.
    pub fn with_feedback(mut self, feedback: Box<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Handle raw input text, as delivered on a keystroke or on submit.
    pub fn submit(&mut self, text: &str) -> GuessOutcome {
        let Some(station) = self.resolver.resolve(text) else {
            return GuessOutcome::NotFound;
        };

        match self.tracker.record_discovery(station) {
            Discovery::New { completed } => {
                let name = self.names.get(station);
                info!(
                    %station,
                    name,
                    found = self.tracker.found(),
                    total = self.tracker.total(),
                    "station discovered"
                );
                self.play_discovery_tone();
                if completed {
                    info!("all stations discovered");
                }
                GuessOutcome::Discovered {
                    station,
                    name,
                    completed,
                }
            }
            Discovery::AlreadyFound => GuessOutcome::AlreadyFound { station },
            Discovery::Ignored => GuessOutcome::NotFound,
        }
    }

    fn play_discovery_tone(&self) {
        if let Err(e) = self.feedback.play(&Tone::DISCOVERY) {
            debug!("ignoring feedback failure: {e}");
        }
    }

    /// Whether a reset would discard enough progress to need confirmation.
    pub fn needs_reset_confirmation(&self) -> bool {
        self.tracker.found() > self.config.confirm_reset_above
    }

    /// Reset if allowed: always when `confirmed`, otherwise only while
    /// progress is small.
    pub fn request_reset(&mut self, confirmed: bool) -> ResetOutcome {
        if !confirmed && self.needs_reset_confirmation() {
            return ResetOutcome::NeedsConfirmation;
        }
        self.reset();
        ResetOutcome::Reset
    }

    /// Clear all progress unconditionally.
    pub fn reset(&mut self) {
        info!(found = self.tracker.found(), "progress reset");
        self.tracker.reset();
    }

    /// Canonical name of a station.
    pub fn name(&self, id: StationId) -> &'static str {
        self.names.get(id)
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn resolver(&self) -> &AliasResolver {
        &self.resolver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::mtr(GameConfig::default())
    }
}
