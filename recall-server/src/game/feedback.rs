//! Discovery feedback.
//!
//! A short beep is played on each new discovery. Feedback is cosmetic:
//! sinks may fail, and the game drops those failures.

use serde::Serialize;

/// A short tone with an exponential volume ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    /// Oscillator frequency in Hz.
    pub frequency_hz: f32,
    /// Gain at the start of the tone.
    pub start_gain: f32,
    /// Gain the tone ramps down to.
    pub end_gain: f32,
    /// Length of the tone in milliseconds.
    pub duration_ms: u32,
}

impl Tone {
    /// The beep played when a station is discovered.
    pub const DISCOVERY: Tone = Tone {
        frequency_hz: 800.0,
        start_gain: 0.1,
        end_gain: 0.001,
        duration_ms: 100,
    };
}

/// Error produced by a feedback sink.
#[derive(Debug, Clone, thiserror::Error)]
#[error("feedback unavailable: {0}")]
pub struct FeedbackError(pub String);

/// Something that can play a tone.
pub trait Feedback: Send {
    fn play(&self, tone: &Tone) -> Result<(), FeedbackError>;
}

/// Plays nothing. Used when the tone is played elsewhere (e.g. by the
/// browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn play(&self, _tone: &Tone) -> Result<(), FeedbackError> {
        Ok(())
    }
}
