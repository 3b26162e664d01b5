//! Coaching cues

/// A single piece of coaching feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackCue {
    RateTooSlow,
    RateTooFast,
    GoodRate,
    DepthTooShallow,
    DepthTooDeep,
    GoodDepth,
    RepositionHands,
    GoodPosition,
}

impl FeedbackCue {
    /// The phrase a text-to-speech sink should say for this cue
    pub fn spoken_text(self) -> &'static str {
        match self {
            FeedbackCue::RateTooSlow => {
                "Please compress faster, aim for 100 compressions per minute"
            }
            FeedbackCue::RateTooFast => {
                "Please slow down, aim for 100 compressions per minute"
            }
            FeedbackCue::GoodRate => "Good compression rate!",
            FeedbackCue::DepthTooShallow => "Press deeper, aim for 5 centimeters",
            FeedbackCue::DepthTooDeep => "Don't press too deep, aim for 5 centimeters",
            FeedbackCue::GoodDepth => "Good compression depth!",
            FeedbackCue::RepositionHands => "Place your hands in the center of the chest",
            FeedbackCue::GoodPosition => "Good hand position!",
        }
    }

    /// Does this cue ask the trainee to change something?
    pub fn is_corrective(self) -> bool {
        matches!(
            self,
            FeedbackCue::RateTooSlow
                | FeedbackCue::RateTooFast
                | FeedbackCue::DepthTooShallow
                | FeedbackCue::DepthTooDeep
                | FeedbackCue::RepositionHands
        )
    }
}

impl std::fmt::Display for FeedbackCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spoken_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrective_cues() {
        assert!(FeedbackCue::RepositionHands.is_corrective());
        assert!(FeedbackCue::DepthTooShallow.is_corrective());
        assert!(!FeedbackCue::GoodRate.is_corrective());
        assert!(!FeedbackCue::GoodPosition.is_corrective());
    }

    #[test]
    fn test_display_matches_spoken_text() {
        let cue = FeedbackCue::RateTooSlow;
        assert_eq!(cue.to_string(), cue.spoken_text());
    }
}
