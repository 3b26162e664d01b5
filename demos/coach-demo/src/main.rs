//! ResQ Coach Demo
//!
//! Runs a coaching session against a synthetic "trainee" that performs
//! compressions at a configurable tempo, with spoken cues and the live
//! metric display printed to the console. Type `pause`, `resume`, or
//! `stop` to control the session.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufReadExt, BufReader};

use resq_core::targets::{TARGET_DEPTH_CM, TARGET_RATE_CPM};
use resq_core::{CoachResult, Landmark, LandmarkFrame, Point};
use resq_feedback::{FeedbackCue, VisualStatus};
use resq_runtime::{Command, FeedbackSink, LandmarkSource, Session, SessionConfig};

/// Synthetic trainee: sinusoidal compression motion with a little noise
struct SyntheticTrainee {
    started: Instant,
    tempo_cpm: f64,
    excursion: f32,
    rng: StdRng,
}

impl SyntheticTrainee {
    fn new(tempo_cpm: f64) -> Self {
        SyntheticTrainee {
            started: Instant::now(),
            tempo_cpm,
            excursion: 0.15,
            rng: StdRng::seed_from_u64(1),
        }
    }
}

impl LandmarkSource for SyntheticTrainee {
    fn next_frame(&mut self) -> CoachResult<Option<LandmarkFrame>> {
        // A pose backend occasionally loses the body
        if self.rng.gen_bool(0.02) {
            return Ok(None);
        }

        let t = self.started.elapsed().as_secs_f64();
        let period = 60.0 / self.tempo_cpm;
        let phase = (t % period) / period;
        let lift = (2.0 * std::f64::consts::PI * phase).sin().max(0.0) as f32;

        let wobble: f32 = self.rng.gen_range(-0.005..0.005);
        let hand_y = 0.4 + self.excursion * lift + wobble;

        let frame = LandmarkFrame::new()
            .with(Landmark::LeftShoulder, Point::new(0.4, 0.4))
            .with(Landmark::RightShoulder, Point::new(0.6, 0.4))
            .with(Landmark::LeftWrist, Point::new(0.45, hand_y))
            .with(Landmark::RightWrist, Point::new(0.55, hand_y));
        Ok(Some(frame))
    }
}

/// Console stand-in for TTS + display
struct ConsoleCoach {
    statuses_shown: u64,
}

impl ConsoleCoach {
    fn new() -> Self {
        ConsoleCoach { statuses_shown: 0 }
    }
}

impl FeedbackSink for ConsoleCoach {
    fn speak(&mut self, cue: FeedbackCue) {
        println!("🔊  {cue}");
    }

    fn show(&mut self, status: &VisualStatus) {
        // The display updates every frame; print once a second
        if self.statuses_shown % 30 == 0 {
            println!(
                "    rate {:>5.1} cpm [{}]   depth {:>4.1} cm [{}]   position [{}]",
                status.rate_cpm,
                label(status.rate.is_good()),
                status.depth_cm,
                label(status.depth.is_good()),
                label(status.position.is_good()),
            );
        }
        self.statuses_shown += 1;
    }
}

fn label(good: bool) -> &'static str {
    if good {
        "good"
    } else {
        "warn"
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              ResQ Coach - Console Demo               ║");
    println!("║   target: {TARGET_RATE_CPM:.0} cpm at {TARGET_DEPTH_CM:.0} cm    (pause/resume/stop)   ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let tempo: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100.0);
    println!("Synthetic trainee compressing at {tempo:.0} cpm");
    println!();

    let config = SessionConfig::default();
    let (session, handle) = Session::new(SyntheticTrainee::new(tempo), ConsoleCoach::new(), config);
    let session_task = tokio::spawn(session.run());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                handle.send(Command::Stop).await?;
                break;
            }
        };

        match Command::parse(&line) {
            Some(command) => {
                let stopping = command == Command::Stop;
                handle.send(command).await?;
                if stopping {
                    break;
                }
            }
            None if !line.trim().is_empty() => {
                println!("(unrecognized, try: pause / resume / stop)");
            }
            None => {}
        }
    }

    session_task.await??;

    let stats = handle.stats();
    println!();
    println!("Session summary:");
    println!("  frames processed : {}", stats.frames);
    println!("  detections       : {}", stats.detections);
    println!("  compressions     : {}", stats.compressions);
    println!("  cues spoken      : {}", stats.cues_spoken);

    Ok(())
}
