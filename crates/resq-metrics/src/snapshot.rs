//! Per-frame metrics snapshot

use resq_core::{MonoTime, Point};

/// Immutable CPR metrics for one analyzed frame
///
/// Created once per frame that has a detection, never mutated. The
/// absence of a snapshot (a `None` from the analyzer) means "no signal
/// this frame" and is distinct from a zero-valued snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    /// Frame timestamp on the session clock
    pub timestamp: MonoTime,
    /// Compressions per minute over the sliding window (>= 0)
    pub compression_rate: f64,
    /// Estimated compression depth in centimeters (>= 0, approximate)
    pub compression_depth_cm: f32,
    /// Normalized hand center this frame
    pub hand_position: Point,
    /// Are the hands placed over the chest center?
    pub correct_position: bool,
}
