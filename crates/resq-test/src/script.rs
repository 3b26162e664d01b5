//! Pose scripts - synthetic landmark motion for testing
//!
//! Frames are built around a fixed torso: shoulders at y = 0.4, wrists
//! centered below them. Scripts vary the vertical hand excursion to
//! mimic compression motion at a chosen tempo.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use resq_core::{Landmark, LandmarkFrame, MonoTime, Point};

/// Shoulder line of the scripted torso
pub const CHEST_Y: f32 = 0.4;

/// A frame with hands centered on the chest at a vertical excursion
pub fn compression_frame(excursion: f32) -> LandmarkFrame {
    LandmarkFrame::new()
        .with(Landmark::LeftShoulder, Point::new(0.4, CHEST_Y))
        .with(Landmark::RightShoulder, Point::new(0.6, CHEST_Y))
        .with(Landmark::LeftWrist, Point::new(0.45, CHEST_Y + excursion))
        .with(Landmark::RightWrist, Point::new(0.55, CHEST_Y + excursion))
}

/// A frame with hands shifted sideways off the chest center
pub fn misplaced_frame(dx: f32, excursion: f32) -> LandmarkFrame {
    LandmarkFrame::new()
        .with(Landmark::LeftShoulder, Point::new(0.4, CHEST_Y))
        .with(Landmark::RightShoulder, Point::new(0.6, CHEST_Y))
        .with(Landmark::LeftWrist, Point::new(0.45 + dx, CHEST_Y + excursion))
        .with(Landmark::RightWrist, Point::new(0.55 + dx, CHEST_Y + excursion))
}

/// A frame missing one required landmark (no right wrist)
pub fn partial_frame() -> LandmarkFrame {
    LandmarkFrame::new()
        .with(Landmark::LeftShoulder, Point::new(0.4, CHEST_Y))
        .with(Landmark::RightShoulder, Point::new(0.6, CHEST_Y))
        .with(Landmark::LeftWrist, Point::new(0.45, 0.6))
}

/// Synthetic compression motion at a fixed tempo
///
/// Each cycle lifts the hands through half a sine wave, so the excursion
/// crosses the detection threshold once per cycle. Optional seeded
/// dropout replaces frames with "no detection" to exercise signal gaps.
pub struct CompressionScript {
    /// Compression tempo, compressions per minute
    pub tempo_cpm: f64,
    /// Peak normalized excursion
    pub excursion: f32,
    /// Total scripted time
    pub duration: Duration,
    /// Spacing between frames
    pub frame_interval: Duration,
    dropout_rate: f64,
    dropout_seed: u64,
}

impl CompressionScript {
    pub fn new(tempo_cpm: f64) -> Self {
        CompressionScript {
            tempo_cpm,
            excursion: 0.15,
            duration: Duration::from_secs(15),
            frame_interval: Duration::from_millis(33),
            dropout_rate: 0.0,
            dropout_seed: 0,
        }
    }

    /// Replace a fraction of frames with "no detection", deterministically
    pub fn with_dropout(mut self, rate: f64, seed: u64) -> Self {
        self.dropout_rate = rate;
        self.dropout_seed = seed;
        self
    }

    pub fn with_excursion(mut self, excursion: f32) -> Self {
        self.excursion = excursion;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Generate the timestamped frame sequence
    pub fn frames(&self) -> Vec<(MonoTime, Option<LandmarkFrame>)> {
        let period = 60.0 / self.tempo_cpm;
        let step = self.frame_interval.as_secs_f64();
        let total = self.duration.as_secs_f64();
        let mut rng = StdRng::seed_from_u64(self.dropout_seed);

        let mut out = Vec::new();
        let mut t = 0.0;
        while t < total {
            let at = MonoTime::from_secs_f64(t);
            if self.dropout_rate > 0.0 && rng.gen_bool(self.dropout_rate) {
                out.push((at, None));
            } else {
                let phase = (t % period) / period;
                let lift = (2.0 * std::f64::consts::PI * phase).sin().max(0.0) as f32;
                out.push((at, Some(compression_frame(self.excursion * lift))));
            }
            t += step;
        }
        out
    }
}
