//! Per-frame visual status
//!
//! Runs unconditionally every analyzed frame, with no cooldown and no
//! state, so the display can update continuously while spoken feedback
//! stays throttled.

use resq_metrics::MetricsSnapshot;

use crate::TargetBands;

/// Good/warning classification of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Good,
    Warning,
}

impl MetricStatus {
    fn from_flag(good: bool) -> Self {
        if good {
            MetricStatus::Good
        } else {
            MetricStatus::Warning
        }
    }

    pub fn is_good(self) -> bool {
        matches!(self, MetricStatus::Good)
    }
}

/// Structured record for the display surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStatus {
    pub rate: MetricStatus,
    pub depth: MetricStatus,
    pub position: MetricStatus,
    /// Raw rate for the numeric readout, compressions per minute
    pub rate_cpm: f64,
    /// Raw depth for the numeric readout, centimeters
    pub depth_cm: f32,
}

/// Classify each metric of a snapshot independently
pub fn visual_status(snapshot: &MetricsSnapshot, bands: &TargetBands) -> VisualStatus {
    VisualStatus {
        rate: MetricStatus::from_flag(bands.rate_is_good(snapshot.compression_rate)),
        depth: MetricStatus::from_flag(bands.depth_is_good(snapshot.compression_depth_cm)),
        position: MetricStatus::from_flag(snapshot.correct_position),
        rate_cpm: snapshot.compression_rate,
        depth_cm: snapshot.compression_depth_cm,
    }
}
