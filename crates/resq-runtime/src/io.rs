//! Collaborator boundaries
//!
//! The runtime never touches a camera, a pose model, a speaker, or a
//! screen. It pulls ready-made landmark frames from a source and pushes
//! plain data at a sink; blocking acquisition is the collaborator's
//! problem, "no data this tick" is an `Ok(None)`.

use resq_core::{CoachResult, LandmarkFrame};
use resq_feedback::{FeedbackCue, VisualStatus};

/// Per-frame landmark supplier (camera + pose backend)
pub trait LandmarkSource: Send {
    /// The next frame's landmarks, or `Ok(None)` for no detection
    fn next_frame(&mut self) -> CoachResult<Option<LandmarkFrame>>;
}

/// Consumer of coaching output (TTS + display)
pub trait FeedbackSink: Send {
    /// Speak one cue
    fn speak(&mut self, cue: FeedbackCue);

    /// Update the continuous display
    fn show(&mut self, status: &VisualStatus);
}
