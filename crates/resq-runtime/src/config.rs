//! Session configuration
//!
//! One flat TOML-loadable struct; every tunable in the pipeline flows
//! from here. Defaults are the guideline values, so an absent or partial
//! config file still yields a working session.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use resq_core::{CoachError, CoachResult};
use resq_feedback::TargetBands;
use resq_metrics::{AnalyzerConfig, DetectorConfig};

/// Session tuning, loadable from TOML
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frame pacing interval, milliseconds (~30 FPS by default)
    pub tick_interval_ms: u64,
    /// Normalized hand-to-chest distance that counts as a compression
    pub compression_threshold: f32,
    /// Minimum time between counted compressions, milliseconds
    pub min_compression_interval_ms: u64,
    /// Rate window size, in events
    pub history_capacity: usize,
    /// Normalized tolerance for correct hand placement
    pub position_tolerance: f32,
    /// Minimum time between spoken cues, milliseconds
    pub feedback_cooldown_ms: u64,
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

impl Default for SessionConfig {
    fn default() -> Self {
        let bands = TargetBands::default();
        let detector = DetectorConfig::default();
        SessionConfig {
            tick_interval_ms: 33,
            compression_threshold: detector.compression_threshold,
            min_compression_interval_ms: detector.min_compression_interval.as_millis() as u64,
            history_capacity: detector.history_capacity,
            position_tolerance: AnalyzerConfig::default().position_tolerance,
            feedback_cooldown_ms: 2000,
            rate_slow_below: bands.rate_slow_below,
            rate_fast_above: bands.rate_fast_above,
            rate_good: bands.rate_good,
            depth_shallow_below: bands.depth_shallow_below,
            depth_deep_above: bands.depth_deep_above,
            depth_good: bands.depth_good,
        }
    }
}

impl SessionConfig {
    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> CoachResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CoachError::Config(format!("read {}: {e}", path.as_ref().display())))?;
        let config: SessionConfig =
            toml::from_str(&content).map_err(|e| CoachError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> CoachResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(CoachError::Config("tick_interval_ms must be > 0".into()));
        }
        if self.compression_threshold <= 0.0 {
            return Err(CoachError::Config("compression_threshold must be > 0".into()));
        }
        if self.position_tolerance <= 0.0 {
            return Err(CoachError::Config("position_tolerance must be > 0".into()));
        }
        if self.history_capacity < 2 {
            return Err(CoachError::Config("history_capacity must be >= 2".into()));
        }
        if self.rate_good.0 > self.rate_good.1 || self.depth_good.0 > self.depth_good.1 {
            return Err(CoachError::Config("good bands must be low <= high".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn feedback_cooldown(&self) -> Duration {
        Duration::from_millis(self.feedback_cooldown_ms)
    }

    /// Analyzer view of this configuration
    pub fn analyzer(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            detector: DetectorConfig {
                compression_threshold: self.compression_threshold,
                min_compression_interval: Duration::from_millis(self.min_compression_interval_ms),
                history_capacity: self.history_capacity,
            },
            position_tolerance: self.position_tolerance,
        }
    }

    /// Feedback-band view of this configuration
    pub fn bands(&self) -> TargetBands {
        TargetBands {
            rate_slow_below: self.rate_slow_below,
            rate_fast_above: self.rate_fast_above,
            rate_good: self.rate_good,
            depth_shallow_below: self.depth_shallow_below,
            depth_deep_above: self.depth_deep_above,
            depth_good: self.depth_good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_millis(33));
        assert_eq!(config.feedback_cooldown(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SessionConfig = toml::from_str("tick_interval_ms = 16").unwrap();

        assert_eq!(config.tick_interval_ms, 16);
        assert_eq!(config.history_capacity, 10);
        assert!((config.compression_threshold - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = SessionConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.rate_good = (110.0, 95.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_views_carry_configured_values() {
        let mut config = SessionConfig::default();
        config.compression_threshold = 0.15;
        config.rate_slow_below = 85.0;

        assert!((config.analyzer().detector.compression_threshold - 0.15).abs() < 1e-6);
        assert!((config.bands().rate_slow_below - 85.0).abs() < 1e-9);
    }
}
