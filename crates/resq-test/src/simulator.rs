//! Scripted pipeline simulator
//!
//! Drives the analyzer and the feedback engine directly with scripted
//! timestamped frames, recording everything the pipeline produces.

use std::time::Duration;

use resq_core::{LandmarkFrame, MonoTime};
use resq_feedback::{visual_status, FeedbackCue, FeedbackEngine, TargetBands, VisualStatus};
use resq_metrics::{AnalyzerConfig, FrameAnalyzer, MetricsSnapshot};

/// Everything one frame produced
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub snapshot: Option<MetricsSnapshot>,
    pub cue: Option<FeedbackCue>,
    pub status: Option<VisualStatus>,
}

/// Full record of a scripted run
#[derive(Debug, Default)]
pub struct PipelineTrace {
    pub snapshots: Vec<MetricsSnapshot>,
    pub cues: Vec<(MonoTime, FeedbackCue)>,
    pub statuses: Vec<VisualStatus>,
    pub no_signal_frames: usize,
}

impl PipelineTrace {
    pub fn last_snapshot(&self) -> Option<&MetricsSnapshot> {
        self.snapshots.last()
    }

    /// Cues in emission order, without timestamps
    pub fn cue_kinds(&self) -> Vec<FeedbackCue> {
        self.cues.iter().map(|(_, cue)| *cue).collect()
    }
}

/// Analyzer + feedback engine without the async session around them
pub struct ScriptedPipeline {
    analyzer: FrameAnalyzer,
    engine: FeedbackEngine,
}

impl ScriptedPipeline {
    pub fn new() -> Self {
        Self::with_config(
            AnalyzerConfig::default(),
            TargetBands::default(),
            Duration::from_secs(2),
        )
    }

    pub fn with_config(analyzer: AnalyzerConfig, bands: TargetBands, cooldown: Duration) -> Self {
        ScriptedPipeline {
            analyzer: FrameAnalyzer::with_config(analyzer),
            engine: FeedbackEngine::with_cooldown(bands, cooldown),
        }
    }

    /// Feed one frame, exactly as the session loop would
    pub fn feed(&mut self, frame: Option<&LandmarkFrame>, at: MonoTime) -> FrameOutcome {
        let snapshot = self.analyzer.analyze(frame, at);

        let Some(snapshot) = snapshot else {
            return FrameOutcome {
                snapshot: None,
                cue: None,
                status: None,
            };
        };

        let status = visual_status(&snapshot, self.engine.bands());
        let cue = self.engine.decide(&snapshot, at);

        FrameOutcome {
            snapshot: Some(snapshot),
            cue,
            status: Some(status),
        }
    }

    /// Run a whole script and collect the trace
    pub fn run_script(
        &mut self,
        script: &[(MonoTime, Option<LandmarkFrame>)],
    ) -> PipelineTrace {
        let mut trace = PipelineTrace::default();
        for (at, frame) in script {
            let outcome = self.feed(frame.as_ref(), *at);
            match outcome.snapshot {
                Some(snapshot) => trace.snapshots.push(snapshot),
                None => trace.no_signal_frames += 1,
            }
            if let Some(status) = outcome.status {
                trace.statuses.push(status);
            }
            if let Some(cue) = outcome.cue {
                trace.cues.push((*at, cue));
            }
        }
        trace
    }

    pub fn analyzer(&self) -> &FrameAnalyzer {
        &self.analyzer
    }
}

impl Default for ScriptedPipeline {
    fn default() -> Self {
        Self::new()
    }
}
