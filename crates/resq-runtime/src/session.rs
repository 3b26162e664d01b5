//! Coaching session - the frame loop and its control surface

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use resq_core::{CoachError, CoachResult};
use resq_feedback::{visual_status, FeedbackEngine};
use resq_metrics::FrameAnalyzer;

use crate::{Clock, Command, FeedbackSink, LandmarkSource, MonoClock, SessionConfig};

/// Counters an external UI can poll
#[derive(Clone, Debug, Default)]
pub struct SessionStats {
    /// Frame boundaries processed while active
    pub frames: u64,
    /// Frames that produced a metrics snapshot
    pub detections: u64,
    /// Frames with no detection or incomplete landmarks
    pub no_signal_frames: u64,
    /// Total compressions counted this session
    pub compressions: u64,
    /// Cues handed to the sink
    pub cues_spoken: u64,
    pub last_tick_duration: Duration,
}

/// Control surface for a running session
///
/// Cloneable; commands funnel into the session's channel and are applied
/// at the next frame boundary, never mid-frame.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    active: watch::Receiver<bool>,
    stats: Arc<Mutex<SessionStats>>,
}

impl SessionHandle {
    /// Send a control command
    pub async fn send(&self, command: Command) -> CoachResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| CoachError::ControlChannelClosed)
    }

    /// Is the session currently accepting frames?
    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    /// Snapshot of the session counters
    pub fn stats(&self) -> SessionStats {
        self.stats.lock().clone()
    }
}

/// One coaching session
///
/// Sole owner of the pipeline state (analyzer + feedback engine); every
/// mutation happens on this task, one frame at a time.
pub struct Session<S, F, C = MonoClock> {
    source: S,
    sink: F,
    clock: C,
    analyzer: FrameAnalyzer,
    engine: FeedbackEngine,
    config: SessionConfig,
    active: bool,
    commands: mpsc::Receiver<Command>,
    active_tx: watch::Sender<bool>,
    stats: Arc<Mutex<SessionStats>>,
}

const COMMAND_BUFFER: usize = 16;

impl<S, F> Session<S, F, MonoClock>
where
    S: LandmarkSource,
    F: FeedbackSink,
{
    pub fn new(source: S, sink: F, config: SessionConfig) -> (Self, SessionHandle) {
        Self::with_clock(source, sink, config, MonoClock::new())
    }
}

impl<S, F, C> Session<S, F, C>
where
    S: LandmarkSource,
    F: FeedbackSink,
    C: Clock,
{
    pub fn with_clock(source: S, sink: F, config: SessionConfig, clock: C) -> (Self, SessionHandle) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (active_tx, active_rx) = watch::channel(true);
        let stats = Arc::new(Mutex::new(SessionStats::default()));

        let engine = FeedbackEngine::with_cooldown(config.bands(), config.feedback_cooldown());
        let session = Session {
            source,
            sink,
            clock,
            analyzer: FrameAnalyzer::with_config(config.analyzer()),
            engine,
            config,
            active: true,
            commands: command_rx,
            active_tx,
            stats: stats.clone(),
        };

        let handle = SessionHandle {
            commands: command_tx,
            active: active_rx,
            stats,
        };

        (session, handle)
    }

    /// Process one frame boundary
    ///
    /// Normally driven by [`Session::run`]; exposed so scripted tests can
    /// pump the pipeline without a runtime.
    pub fn step(&mut self) -> CoachResult<()> {
        if !self.active {
            return Ok(());
        }

        let started = Instant::now();
        let now = self.clock.now();
        let frame = self.source.next_frame()?;
        let snapshot = self.analyzer.analyze(frame.as_ref(), now);

        {
            let mut stats = self.stats.lock();
            stats.frames += 1;
            match snapshot {
                Some(_) => stats.detections += 1,
                None => stats.no_signal_frames += 1,
            }
        }

        let Some(snapshot) = snapshot else {
            return Ok(());
        };

        let status = visual_status(&snapshot, self.engine.bands());
        self.sink.show(&status);

        if let Some(cue) = self.engine.decide(&snapshot, now) {
            tracing::debug!(%cue, rate = snapshot.compression_rate, "feedback cue");
            self.sink.speak(cue);
            self.stats.lock().cues_spoken += 1;
        }

        let mut stats = self.stats.lock();
        stats.compressions = self.analyzer.detector().compression_count();
        stats.last_tick_duration = started.elapsed();
        Ok(())
    }

    /// Apply a control command; returns false when the session should end
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Pause => self.active = false,
            Command::Resume => self.active = true,
            Command::Stop => {
                self.active = false;
                let _ = self.active_tx.send(false);
                return false;
            }
        }
        let _ = self.active_tx.send(self.active);
        true
    }

    /// Drive the session until stopped
    ///
    /// Frames tick at the configured interval; commands are interleaved
    /// at frame boundaries. A closed control channel also ends the
    /// session, otherwise it could never be stopped.
    pub async fn run(mut self) -> CoachResult<()> {
        self.config.validate()?;

        let mut ticker = tokio::time::interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        tracing::info!(
            tick_ms = self.config.tick_interval_ms,
            "coaching session started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.step()?,
                command = self.commands.recv() => match command {
                    Some(command) => {
                        tracing::info!(?command, "control command");
                        if !self.apply(command) {
                            break;
                        }
                    }
                    None => {
                        tracing::info!("control channel closed, ending session");
                        break;
                    }
                },
            }
        }

        let stats = self.stats.lock();
        tracing::info!(
            frames = stats.frames,
            compressions = stats.compressions,
            cues = stats.cues_spoken,
            "coaching session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resq_core::{Landmark, LandmarkFrame, MonoTime, Point};
    use resq_feedback::{FeedbackCue, VisualStatus};
    use std::cell::Cell;
    use std::rc::Rc;

    struct ScriptClock {
        now: Rc<Cell<MonoTime>>,
    }

    impl Clock for ScriptClock {
        fn now(&self) -> MonoTime {
            self.now.get()
        }
    }

    struct StaticSource {
        frame: Option<LandmarkFrame>,
        served: u64,
    }

    impl LandmarkSource for StaticSource {
        fn next_frame(&mut self) -> CoachResult<Option<LandmarkFrame>> {
            self.served += 1;
            Ok(self.frame.clone())
        }
    }

    #[derive(Default)]
    struct Recorder {
        cues: Vec<FeedbackCue>,
        statuses: Vec<VisualStatus>,
    }

    impl FeedbackSink for &mut Recorder {
        fn speak(&mut self, cue: FeedbackCue) {
            self.cues.push(cue);
        }

        fn show(&mut self, status: &VisualStatus) {
            self.statuses.push(*status);
        }
    }

    fn full_frame() -> LandmarkFrame {
        LandmarkFrame::new()
            .with(Landmark::LeftShoulder, Point::new(0.4, 0.5))
            .with(Landmark::RightShoulder, Point::new(0.6, 0.5))
            .with(Landmark::LeftWrist, Point::new(0.45, 0.52))
            .with(Landmark::RightWrist, Point::new(0.55, 0.52))
    }

    #[test]
    fn test_step_counts_and_feeds_sink() {
        let mut recorder = Recorder::default();
        let now = Rc::new(Cell::new(MonoTime::from_millis(100)));
        let source = StaticSource {
            frame: Some(full_frame()),
            served: 0,
        };

        let (mut session, handle) = Session::with_clock(
            source,
            &mut recorder,
            SessionConfig::default(),
            ScriptClock { now: now.clone() },
        );

        session.step().unwrap();
        now.set(MonoTime::from_millis(133));
        session.step().unwrap();

        let stats = handle.stats();
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.detections, 2);
        assert_eq!(stats.no_signal_frames, 0);

        // Visual status every frame, spoken cue throttled by cooldown
        drop(session);
        assert_eq!(recorder.statuses.len(), 2);
        assert_eq!(recorder.cues.len(), 1);
    }

    #[test]
    fn test_no_signal_frames_counted() {
        let mut recorder = Recorder::default();
        let now = Rc::new(Cell::new(MonoTime::ZERO));
        let source = StaticSource {
            frame: None,
            served: 0,
        };

        let (mut session, handle) = Session::with_clock(
            source,
            &mut recorder,
            SessionConfig::default(),
            ScriptClock { now },
        );

        session.step().unwrap();
        session.step().unwrap();

        let stats = handle.stats();
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.no_signal_frames, 2);
        drop(session);
        assert!(recorder.statuses.is_empty());
        assert!(recorder.cues.is_empty());
    }

    #[test]
    fn test_paused_session_skips_acquisition() {
        let mut recorder = Recorder::default();
        let now = Rc::new(Cell::new(MonoTime::ZERO));
        let source = StaticSource {
            frame: Some(full_frame()),
            served: 0,
        };

        let (mut session, handle) = Session::with_clock(
            source,
            &mut recorder,
            SessionConfig::default(),
            ScriptClock { now },
        );

        assert!(session.apply(Command::Pause));
        assert!(!handle.is_active());

        session.step().unwrap();
        assert_eq!(handle.stats().frames, 0);
        assert_eq!(session.source.served, 0);

        assert!(session.apply(Command::Resume));
        assert!(handle.is_active());
        session.step().unwrap();
        assert_eq!(handle.stats().frames, 1);
    }

    #[test]
    fn test_stop_ends_session() {
        let mut recorder = Recorder::default();
        let now = Rc::new(Cell::new(MonoTime::ZERO));
        let source = StaticSource {
            frame: None,
            served: 0,
        };

        let (mut session, handle) = Session::with_clock(
            source,
            &mut recorder,
            SessionConfig::default(),
            ScriptClock { now },
        );

        assert!(!session.apply(Command::Stop));
        assert!(!handle.is_active());
    }

    #[tokio::test]
    async fn test_run_stops_on_command() {
        struct NullSink;
        impl FeedbackSink for NullSink {
            fn speak(&mut self, _cue: FeedbackCue) {}
            fn show(&mut self, _status: &VisualStatus) {}
        }

        let source = StaticSource {
            frame: None,
            served: 0,
        };
        let mut config = SessionConfig::default();
        config.tick_interval_ms = 1;

        let (session, handle) = Session::new(source, NullSink, config);
        let task = tokio::spawn(session.run());

        handle.send(Command::Stop).await.unwrap();
        let result = task.await.unwrap();
        assert!(result.is_ok());
    }
}
