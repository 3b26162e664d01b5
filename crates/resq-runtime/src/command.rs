//! Session control commands

/// Coarse session control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop accepting frames, keep the session alive
    Pause,
    /// Accept frames again
    Resume,
    /// End the session after the in-flight frame
    Stop,
}

impl Command {
    /// Keyword dispatch over a free-text transcript
    ///
    /// The voice/keyboard collaborator hands the runtime whatever text it
    /// recognized; the runtime only looks for the three keywords. Any
    /// richer grammar stays on the collaborator's side.
    pub fn parse(transcript: &str) -> Option<Command> {
        let text = transcript.to_lowercase();
        if text.contains("pause") {
            Some(Command::Pause)
        } else if text.contains("resume") {
            Some(Command::Resume)
        } else if text.contains("stop") {
            Some(Command::Stop)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("pause"), Some(Command::Pause));
        assert_eq!(Command::parse("please resume training"), Some(Command::Resume));
        assert_eq!(Command::parse("STOP now"), Some(Command::Stop));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(Command::parse("how deep should I press"), None);
        assert_eq!(Command::parse(""), None);
    }
}
