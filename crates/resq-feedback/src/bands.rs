//! Metric target bands
//!
//! The same "good" bands drive both the spoken cascade and the visual
//! status, so the two surfaces never disagree about what counts as good.

/// Thresholds for rate and depth coaching
#[derive(Clone, Debug)]
pub struct TargetBands {
    /// Rates below this are "too slow", compressions per minute
    pub rate_slow_below: f64,
    /// Rates above this are "too fast", compressions per minute
    pub rate_fast_above: f64,
    /// Inclusive "good rate" band, compressions per minute
    pub rate_good: (f64, f64),
    /// Depths below this are "too shallow", centimeters
    pub depth_shallow_below: f32,
    /// Depths above this are "too deep", centimeters
    pub depth_deep_above: f32,
    /// Inclusive "good depth" band, centimeters
    pub depth_good: (f32, f32),
}

impl Default for TargetBands {
    fn default() -> Self {
        TargetBands {
            rate_slow_below: 90.0,
            rate_fast_above: 110.0,
            rate_good: (95.0, 105.0),
            depth_shallow_below: 4.0,
            depth_deep_above: 6.0,
            depth_good: (4.5, 5.5),
        }
    }
}

impl TargetBands {
    /// Is the rate inside the "good" band?
    pub fn rate_is_good(&self, rate_cpm: f64) -> bool {
        rate_cpm >= self.rate_good.0 && rate_cpm <= self.rate_good.1
    }

    /// Is the depth inside the "good" band?
    pub fn depth_is_good(&self, depth_cm: f32) -> bool {
        depth_cm >= self.depth_good.0 && depth_cm <= self.depth_good.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resq_core::targets::{TARGET_DEPTH_CM, TARGET_RATE_CPM};

    #[test]
    fn test_default_bands_contain_guideline_targets() {
        let bands = TargetBands::default();

        assert!(bands.rate_is_good(TARGET_RATE_CPM));
        assert!(bands.depth_is_good(TARGET_DEPTH_CM));
    }

    #[test]
    fn test_good_bands_are_inclusive() {
        let bands = TargetBands::default();

        assert!(bands.rate_is_good(95.0));
        assert!(bands.rate_is_good(105.0));
        assert!(!bands.rate_is_good(94.9));

        assert!(bands.depth_is_good(4.5));
        assert!(bands.depth_is_good(5.5));
        assert!(!bands.depth_is_good(5.6));
    }
}
