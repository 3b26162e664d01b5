//! Frame analyzer - composes detection, rate, and position into snapshots

use resq_core::{LandmarkFrame, MonoTime};

use crate::{
    compression_rate, hand_center, chest_center, is_correct_position, CompressionDetector,
    DetectorConfig, MetricsSnapshot, DEFAULT_POSITION_TOLERANCE,
};

/// Frame analyzer tuning
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub detector: DetectorConfig,
    /// Normalized tolerance for correct hand placement
    pub position_tolerance: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            detector: DetectorConfig::default(),
            position_tolerance: DEFAULT_POSITION_TOLERANCE,
        }
    }
}

/// Per-frame metrics aggregator
///
/// Owns the compression detector; one analyzer per pipeline.
pub struct FrameAnalyzer {
    detector: CompressionDetector,
    position_tolerance: f32,
}

impl FrameAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        FrameAnalyzer {
            detector: CompressionDetector::with_config(config.detector),
            position_tolerance: config.position_tolerance,
        }
    }

    /// Analyze one frame
    ///
    /// Returns `None` when there is no detection, or when the frame is
    /// missing a required landmark; detector state is untouched in either
    /// case and the pipeline simply continues on the next frame.
    pub fn analyze(&mut self, frame: Option<&LandmarkFrame>, now: MonoTime) -> Option<MetricsSnapshot> {
        let frame = frame?;
        if !frame.has_required() {
            return None;
        }

        let hand = hand_center(frame)?;
        let chest = chest_center(frame)?;

        let sample = self.detector.observe(hand, chest, now);
        let rate = compression_rate(self.detector.history());
        let correct = is_correct_position(hand, chest, self.position_tolerance);

        Some(MetricsSnapshot {
            timestamp: now,
            compression_rate: rate,
            compression_depth_cm: sample.depth_cm,
            hand_position: hand,
            correct_position: correct,
        })
    }

    pub fn detector(&self) -> &CompressionDetector {
        &self.detector
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
