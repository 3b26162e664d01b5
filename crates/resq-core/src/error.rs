//! Error types for the ResQ coaching pipeline

use thiserror::Error;

use crate::Landmark;

/// Core ResQ errors
#[derive(Error, Debug)]
pub enum CoachError {
    // Landmark errors
    #[error("Missing landmark: {0:?}")]
    MissingLandmark(Landmark),

    #[error("Coordinate out of range: ({x}, {y})")]
    CoordinateOutOfRange { x: f32, y: f32 },

    // Collaborator errors
    #[error("Landmark source error: {0}")]
    Source(String),

    // Session errors
    #[error("Control channel closed")]
    ControlChannelClosed,

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for ResQ operations
pub type CoachResult<T> = Result<T, CoachError>;
