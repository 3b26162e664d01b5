//! Feedback decision engine
//!
//! One cue at most per decision, throttled by a cooldown. The cascade is
//! an explicit ordered rule list with last-match-wins overwrite, so the
//! priority policy (position dominates, "good position" only fills) is
//! auditable in one place.

use std::time::Duration;

use resq_core::MonoTime;
use resq_metrics::MetricsSnapshot;

use crate::{FeedbackCue, TargetBands};

/// Minimum time between two emitted cues
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(2);

/// Throttled cue selection over metrics snapshots
///
/// Holds the only mutable feedback state: the time of the last emission.
/// That timestamp only ever advances, and only when a cue is emitted.
pub struct FeedbackEngine {
    bands: TargetBands,
    cooldown: Duration,
    last_feedback_time: Option<MonoTime>,
}

impl FeedbackEngine {
    pub fn new() -> Self {
        Self::with_bands(TargetBands::default())
    }

    pub fn with_bands(bands: TargetBands) -> Self {
        Self::with_cooldown(bands, DEFAULT_COOLDOWN)
    }

    pub fn with_cooldown(bands: TargetBands, cooldown: Duration) -> Self {
        FeedbackEngine {
            bands,
            cooldown,
            last_feedback_time: None,
        }
    }

    /// Decide the cue for one snapshot
    ///
    /// Returns `None` while the cooldown since the last emission has not
    /// elapsed, regardless of the metrics. Otherwise runs the cascade and
    /// records the emission time.
    pub fn decide(&mut self, snapshot: &MetricsSnapshot, now: MonoTime) -> Option<FeedbackCue> {
        if let Some(last) = self.last_feedback_time {
            if now - last < self.cooldown {
                return None;
            }
        }

        let cue = self.cascade(snapshot);
        if cue.is_some() {
            self.last_feedback_time = Some(now);
        }
        cue
    }

    /// The ordered rule cascade, last match wins
    ///
    /// Order matters: depth overwrites rate, an incorrect position
    /// overwrites everything, and "good position" never overwrites; it
    /// only fills when no rate/depth rule fired.
    fn cascade(&self, snapshot: &MetricsSnapshot) -> Option<FeedbackCue> {
        let rate = snapshot.compression_rate;
        let depth = snapshot.compression_depth_cm;

        let rules = [
            (rate < self.bands.rate_slow_below, FeedbackCue::RateTooSlow),
            (rate > self.bands.rate_fast_above, FeedbackCue::RateTooFast),
            (self.bands.rate_is_good(rate), FeedbackCue::GoodRate),
            (depth < self.bands.depth_shallow_below, FeedbackCue::DepthTooShallow),
            (depth > self.bands.depth_deep_above, FeedbackCue::DepthTooDeep),
            (self.bands.depth_is_good(depth), FeedbackCue::GoodDepth),
            (!snapshot.correct_position, FeedbackCue::RepositionHands),
        ];

        let mut cue = None;
        for (matched, candidate) in rules {
            if matched {
                cue = Some(candidate);
            }
        }

        if cue.is_none() && snapshot.correct_position {
            cue = Some(FeedbackCue::GoodPosition);
        }
        cue
    }

    pub fn bands(&self) -> &TargetBands {
        &self.bands
    }

    /// Time of the last emitted cue, `None` before the first
    pub fn last_feedback_time(&self) -> Option<MonoTime> {
        self.last_feedback_time
    }
}

impl Default for FeedbackEngine {
    fn default() -> Self {
        Self::new()
    }
}
