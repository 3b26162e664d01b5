//! Hand placement relative to the chest
//!
//! Pure geometry: centers are landmark midpoints, classification is a
//! tolerance band around the chest center.

use resq_core::{Landmark, LandmarkFrame, Point};

/// Default normalized-coordinate tolerance for correct placement
pub const DEFAULT_POSITION_TOLERANCE: f32 = 0.1;

/// Midpoint of the two wrists
pub fn hand_center(frame: &LandmarkFrame) -> Option<Point> {
    let left = frame.get(Landmark::LeftWrist)?;
    let right = frame.get(Landmark::RightWrist)?;
    Some(left.midpoint(right))
}

/// Midpoint of the two shoulders
pub fn chest_center(frame: &LandmarkFrame) -> Option<Point> {
    let left = frame.get(Landmark::LeftShoulder)?;
    let right = frame.get(Landmark::RightShoulder)?;
    Some(left.midpoint(right))
}

/// Are the hands placed over the chest center?
///
/// Correct iff both axis deltas are inside the tolerance band.
pub fn is_correct_position(hand_center: Point, chest_center: Point, tolerance: f32) -> bool {
    (hand_center.x - chest_center.x).abs() < tolerance
        && (hand_center.y - chest_center.y).abs() < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torso_frame(wrists: [(f32, f32); 2], shoulders: [(f32, f32); 2]) -> LandmarkFrame {
        LandmarkFrame::new()
            .with(Landmark::LeftWrist, Point::new(wrists[0].0, wrists[0].1))
            .with(Landmark::RightWrist, Point::new(wrists[1].0, wrists[1].1))
            .with(Landmark::LeftShoulder, Point::new(shoulders[0].0, shoulders[0].1))
            .with(Landmark::RightShoulder, Point::new(shoulders[1].0, shoulders[1].1))
    }

    #[test]
    fn test_centers_are_midpoints() {
        let frame = torso_frame([(0.4, 0.6), (0.6, 0.6)], [(0.3, 0.4), (0.7, 0.4)]);

        let hand = hand_center(&frame).unwrap();
        let chest = chest_center(&frame).unwrap();

        assert!((hand.x - 0.5).abs() < 1e-6);
        assert!((hand.y - 0.6).abs() < 1e-6);
        assert!((chest.x - 0.5).abs() < 1e-6);
        assert!((chest.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_centers_require_both_landmarks() {
        let frame = LandmarkFrame::new().with(Landmark::LeftWrist, Point::new(0.4, 0.6));
        assert!(hand_center(&frame).is_none());
        assert!(chest_center(&frame).is_none());
    }

    #[test]
    fn test_correct_position_within_tolerance() {
        let hand = Point::new(0.5, 0.52);
        let chest = Point::new(0.5, 0.5);

        assert!(is_correct_position(hand, chest, DEFAULT_POSITION_TOLERANCE));
    }

    #[test]
    fn test_incorrect_when_either_axis_exceeds() {
        let chest = Point::new(0.5, 0.5);

        assert!(!is_correct_position(Point::new(0.65, 0.5), chest, 0.1));
        assert!(!is_correct_position(Point::new(0.5, 0.35), chest, 0.1));
        // Boundary is exclusive
        assert!(!is_correct_position(Point::new(0.6, 0.5), chest, 0.1));
    }

    #[test]
    fn test_classification_symmetric_under_label_swap() {
        // Swapping left/right labels moves neither midpoint
        let frame = torso_frame([(0.42, 0.58), (0.61, 0.55)], [(0.31, 0.41), (0.72, 0.44)]);
        let swapped = torso_frame([(0.61, 0.55), (0.42, 0.58)], [(0.72, 0.44), (0.31, 0.41)]);

        let verdict = is_correct_position(
            hand_center(&frame).unwrap(),
            chest_center(&frame).unwrap(),
            DEFAULT_POSITION_TOLERANCE,
        );
        let verdict_swapped = is_correct_position(
            hand_center(&swapped).unwrap(),
            chest_center(&swapped).unwrap(),
            DEFAULT_POSITION_TOLERANCE,
        );

        assert_eq!(verdict, verdict_swapped);
    }
}
