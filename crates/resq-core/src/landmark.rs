//! Body landmarks as seen by the coaching pipeline
//!
//! The pipeline does not run pose estimation itself. An external pose
//! backend supplies, per frame, normalized 2-D coordinates for a closed
//! set of named landmarks, or no detection at all.

use crate::{CoachError, CoachResult};

/// Named body landmark
///
/// A pose backend may report more points than these; the pipeline only
/// names the upper-body set it can make use of. Analysis requires the
/// four in [`Landmark::REQUIRED`], the rest are optional extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
}

impl Landmark {
    /// Landmarks a frame must carry to be analyzable
    pub const REQUIRED: [Landmark; 4] = [
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftWrist,
        Landmark::RightWrist,
    ];

    /// All landmarks in order
    pub fn all() -> &'static [Landmark] {
        &[
            Landmark::Nose,
            Landmark::LeftShoulder,
            Landmark::RightShoulder,
            Landmark::LeftElbow,
            Landmark::RightElbow,
            Landmark::LeftWrist,
            Landmark::RightWrist,
            Landmark::LeftHip,
            Landmark::RightHip,
        ]
    }

    /// Number of named landmarks
    pub const fn count() -> usize {
        9
    }

    /// Is this landmark required for analysis?
    pub fn is_required(self) -> bool {
        Landmark::REQUIRED.contains(&self)
    }
}

/// 2D position in normalized frame coordinates, [0,1] x [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Construct a point, rejecting coordinates outside [0,1]
    pub fn normalized(x: f32, y: f32) -> CoachResult<Self> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Err(CoachError::CoordinateOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    /// Midpoint between two points
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// One frame of detected landmarks
///
/// A fixed, validated mapping from landmark name to normalized position.
/// "No detection this frame" is represented upstream as the absence of a
/// frame, not as an empty frame; a frame missing any required landmark is
/// treated the same as no detection.
#[derive(Debug, Clone, Default)]
pub struct LandmarkFrame {
    points: [Option<Point>; Landmark::count()],
}

impl LandmarkFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a landmark position
    pub fn set(&mut self, landmark: Landmark, point: Point) {
        self.points[landmark as usize] = Some(point);
    }

    /// Builder-style set
    pub fn with(mut self, landmark: Landmark, point: Point) -> Self {
        self.set(landmark, point);
        self
    }

    /// Get a landmark position if present
    pub fn get(&self, landmark: Landmark) -> Option<Point> {
        self.points[landmark as usize]
    }

    /// Get a landmark position, erroring if absent
    pub fn require(&self, landmark: Landmark) -> CoachResult<Point> {
        self.get(landmark)
            .ok_or(CoachError::MissingLandmark(landmark))
    }

    /// Does this frame carry every required landmark?
    pub fn has_required(&self) -> bool {
        Landmark::REQUIRED.iter().all(|lm| self.get(*lm).is_some())
    }

    /// Number of landmarks present
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.is_none())
    }
}
