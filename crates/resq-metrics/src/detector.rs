//! Compression detection
//!
//! Turns the vertical hand-to-chest excursion into discrete compression
//! events. Detection is threshold-plus-debounce: the first excursion past
//! the threshold arms the detector, subsequent excursions count one event
//! whenever the minimum inter-compression interval has elapsed.

use std::time::Duration;

use resq_core::{MonoTime, Point};

use crate::{CompressionEvent, CompressionHistory};

/// Compression detector tuning
#[derive(Clone, Debug)]
pub struct DetectorConfig {
    /// Normalized hand-to-chest distance that counts as a compression
    pub compression_threshold: f32,
    /// Minimum time between two counted compressions
    pub min_compression_interval: Duration,
    /// Rate window size, in events
    pub history_capacity: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            compression_threshold: 0.1,
            min_compression_interval: Duration::from_millis(500),
            history_capacity: CompressionHistory::DEFAULT_CAPACITY,
        }
    }
}

/// Per-frame detector output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionSample {
    /// Estimated compression depth in centimeters (approximate,
    /// calibration-free)
    pub depth_cm: f32,
    /// Did this frame count a new compression event?
    pub counted: bool,
}

/// Stateful compression detector
///
/// Owned by exactly one pipeline; mutated once per processed frame.
/// Frames with no detection never reach it, so consecutive signal gaps
/// leave its state untouched.
pub struct CompressionDetector {
    config: DetectorConfig,
    /// Last counted (or arming) compression time; None until armed
    last_compression_time: Option<MonoTime>,
    /// Total compressions counted this session
    compression_count: u64,
    history: CompressionHistory,
}

impl CompressionDetector {
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        let history = CompressionHistory::with_capacity(config.history_capacity);
        CompressionDetector {
            config,
            last_compression_time: None,
            compression_count: 0,
            history,
        }
    }

    /// Observe one frame's hand and chest centers
    ///
    /// The first over-threshold excursion arms the detector without
    /// counting, so the opening downstroke is not double-counted. A
    /// sub-threshold frame changes nothing: re-arming happens purely via
    /// the debounce timer.
    pub fn observe(&mut self, hand_center: Point, chest_center: Point, now: MonoTime) -> CompressionSample {
        let raw_depth = (hand_center.y - chest_center.y).abs();
        let depth_cm = raw_depth * 100.0;

        let mut counted = false;
        if raw_depth > self.config.compression_threshold {
            match self.last_compression_time {
                None => {
                    self.last_compression_time = Some(now);
                }
                Some(last) if now - last > self.config.min_compression_interval => {
                    self.compression_count += 1;
                    self.history.push(CompressionEvent::new(now));
                    self.last_compression_time = Some(now);
                    counted = true;
                }
                Some(_) => {
                    // Within the debounce window
                }
            }
        }

        CompressionSample { depth_cm, counted }
    }

    /// Compression events in the current rate window
    pub fn history(&self) -> &CompressionHistory {
        &self.history
    }

    /// Total compressions counted this session
    pub fn compression_count(&self) -> u64 {
        self.compression_count
    }

    /// Last counted (or arming) compression time
    pub fn last_compression_time(&self) -> Option<MonoTime> {
        self.last_compression_time
    }
}

impl Default for CompressionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(depth: f32) -> (Point, Point) {
        let chest = Point::new(0.5, 0.4);
        let hand = Point::new(0.5, 0.4 + depth);
        (hand, chest)
    }

    #[test]
    fn test_first_excursion_arms_without_counting() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.15);

        let sample = detector.observe(hand, chest, MonoTime::from_millis(100));

        assert!(!sample.counted);
        assert_eq!(detector.compression_count(), 0);
        assert!(detector.history().is_empty());
        // ...but the detector is now armed
        assert_eq!(detector.last_compression_time(), Some(MonoTime::from_millis(100)));
    }

    #[test]
    fn test_debounce_blocks_rapid_events() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.15);

        detector.observe(hand, chest, MonoTime::from_millis(0));
        let s1 = detector.observe(hand, chest, MonoTime::from_millis(300));
        let s2 = detector.observe(hand, chest, MonoTime::from_millis(450));

        assert!(!s1.counted);
        assert!(!s2.counted);
        assert_eq!(detector.compression_count(), 0);
    }

    #[test]
    fn test_event_counted_after_debounce() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.15);

        detector.observe(hand, chest, MonoTime::from_millis(0));
        let sample = detector.observe(hand, chest, MonoTime::from_millis(600));

        assert!(sample.counted);
        assert_eq!(detector.compression_count(), 1);
        assert_eq!(detector.history().len(), 1);
        assert_eq!(detector.last_compression_time(), Some(MonoTime::from_millis(600)));
    }

    #[test]
    fn test_two_calls_within_debounce_count_at_most_once() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.15);

        detector.observe(hand, chest, MonoTime::from_millis(0));
        detector.observe(hand, chest, MonoTime::from_millis(600));

        // Both of these fall within 0.5s of the counted event
        let s1 = detector.observe(hand, chest, MonoTime::from_millis(800));
        let s2 = detector.observe(hand, chest, MonoTime::from_millis(1050));

        assert!(!s1.counted);
        assert!(!s2.counted);
        assert_eq!(detector.compression_count(), 1);
    }

    #[test]
    fn test_below_threshold_leaves_state_unchanged() {
        let mut detector = CompressionDetector::new();
        let (deep_hand, chest) = centers(0.15);

        detector.observe(deep_hand, chest, MonoTime::from_millis(0));
        detector.observe(deep_hand, chest, MonoTime::from_millis(600));

        // Release: shallow frames do not reset arming or the counter
        let (shallow_hand, chest) = centers(0.02);
        let sample = detector.observe(shallow_hand, chest, MonoTime::from_millis(700));

        assert!(!sample.counted);
        assert!((sample.depth_cm - 2.0).abs() < 1e-4);
        assert_eq!(detector.compression_count(), 1);
        assert_eq!(detector.last_compression_time(), Some(MonoTime::from_millis(600)));
    }

    #[test]
    fn test_depth_estimate_is_centimeter_scaled() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.05);

        let sample = detector.observe(hand, chest, MonoTime::from_millis(0));
        assert!((sample.depth_cm - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_sustained_compressions_fill_history() {
        let mut detector = CompressionDetector::new();
        let (hand, chest) = centers(0.15);

        // 20 excursions at 600ms spacing: first arms, rest count
        for i in 0..20u64 {
            detector.observe(hand, chest, MonoTime::from_millis(i * 600));
        }

        assert_eq!(detector.compression_count(), 19);
        assert_eq!(detector.history().len(), CompressionHistory::DEFAULT_CAPACITY);
    }
}
