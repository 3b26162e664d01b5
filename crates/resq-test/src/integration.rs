//! Session-level test drivers
//!
//! Scripted source, recording sink, and a hand-stepped clock, so whole
//! sessions run deterministically with no camera and no real time.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use resq_core::{CoachResult, LandmarkFrame, MonoTime};
use resq_feedback::{FeedbackCue, VisualStatus};
use resq_runtime::{Clock, FeedbackSink, LandmarkSource};

/// Landmark source that replays a prepared frame sequence
///
/// Yields `None` once the script is exhausted, like a camera with
/// nobody in front of it.
pub struct ScriptedSource {
    frames: VecDeque<Option<LandmarkFrame>>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Option<LandmarkFrame>>) -> Self {
        ScriptedSource {
            frames: frames.into_iter().collect(),
        }
    }
}

impl LandmarkSource for ScriptedSource {
    fn next_frame(&mut self) -> CoachResult<Option<LandmarkFrame>> {
        Ok(self.frames.pop_front().flatten())
    }
}

/// Everything a session handed to its sink
#[derive(Debug, Default)]
pub struct SinkRecord {
    pub cues: Vec<FeedbackCue>,
    pub statuses: Vec<VisualStatus>,
}

/// Feedback sink that records instead of speaking/rendering
#[derive(Clone, Default)]
pub struct RecordingSink {
    record: Arc<Mutex<SinkRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of the record, readable while the session runs
    pub fn record(&self) -> Arc<Mutex<SinkRecord>> {
        self.record.clone()
    }
}

impl FeedbackSink for RecordingSink {
    fn speak(&mut self, cue: FeedbackCue) {
        self.record.lock().cues.push(cue);
    }

    fn show(&mut self, status: &VisualStatus) {
        self.record.lock().statuses.push(*status);
    }
}

/// Hand-stepped session clock
#[derive(Clone, Default)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.micros
            .fetch_add(by.as_micros() as u64, Ordering::SeqCst);
    }

    pub fn set(&self, to: MonoTime) {
        self.micros.store(to.as_micros(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> MonoTime {
        MonoTime::from_micros(self.micros.load(Ordering::SeqCst))
    }
}
