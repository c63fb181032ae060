//! Finger openness evaluation: one hand's keypoints to five booleans.
//!
//! Each finger is tested against a fixed (joint, mid, tip) index triple.
//! The four long fingers compare along y (smaller y is higher in the
//! image); the thumb compares along x because it extends sideways.  The
//! thumb test assumes the mirrored front-facing camera view the detector
//! is configured for; under that setup an extended thumb's IP and tip sit
//! left of its MCP joint.  Depth (`z`) is never consulted.

use crate::landmark::{
    HandLandmarks, LandmarkIndex, MalformedLandmarksError, LANDMARK_COUNT,
};

/// Which fingers are extended in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// (joint, mid, tip) triples for the four long fingers.
const FINGER_TRIPLES: [(LandmarkIndex, LandmarkIndex, LandmarkIndex); 4] = [
    (LandmarkIndex::IndexPip, LandmarkIndex::IndexDip, LandmarkIndex::IndexTip),
    (LandmarkIndex::MiddlePip, LandmarkIndex::MiddleDip, LandmarkIndex::MiddleTip),
    (LandmarkIndex::RingPip, LandmarkIndex::RingDip, LandmarkIndex::RingTip),
    (LandmarkIndex::PinkyPip, LandmarkIndex::PinkyDip, LandmarkIndex::PinkyTip),
];

/// Evaluate which fingers of one hand are extended.
///
/// Pure function of the given keypoints.  Fails with
/// [`MalformedLandmarksError`] when the hand does not carry exactly 21
/// points; the length is checked here so no out-of-range indexing can
/// happen downstream.
pub fn evaluate_fingers(hand: &HandLandmarks) -> Result<FingerState, MalformedLandmarksError> {
    if hand.len() != LANDMARK_COUNT {
        return Err(MalformedLandmarksError { actual: hand.len() });
    }

    let thumb_joint = hand.point(LandmarkIndex::ThumbMcp);
    let thumb = hand.point(LandmarkIndex::ThumbIp).x < thumb_joint.x
        && hand.point(LandmarkIndex::ThumbTip).x < thumb_joint.x;

    let mut raised = [false; 4];
    for (i, (joint, mid, tip)) in FINGER_TRIPLES.iter().enumerate() {
        let joint_y = hand.point(*joint).y;
        raised[i] = hand.point(*mid).y < joint_y && hand.point(*tip).y < joint_y;
    }

    Ok(FingerState {
        thumb,
        index: raised[0],
        middle: raised[1],
        ring: raised[2],
        pinky: raised[3],
    })
}

// ── Test helpers ───────────────────────────────────────────

/// Build a hand with the given fingers extended.
///
/// Closed fingers put mid and tip below their base joint; open fingers put
/// them above.  The thumb moves along x: open puts IP and tip left of the
/// MCP joint.
#[cfg(test)]
pub(crate) fn hand_with(thumb: bool, fingers: [bool; 4]) -> HandLandmarks {
    use crate::landmark::Landmark;

    let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];

    // Thumb along x from the MCP at 0.4.
    points[LandmarkIndex::ThumbMcp.index()] = Landmark::new(0.4, 0.6, 0.0);
    let (ip_x, tip_x) = if thumb { (0.3, 0.25) } else { (0.45, 0.5) };
    points[LandmarkIndex::ThumbIp.index()] = Landmark::new(ip_x, 0.55, 0.0);
    points[LandmarkIndex::ThumbTip.index()] = Landmark::new(tip_x, 0.5, 0.0);

    for (f, (joint, mid, tip)) in FINGER_TRIPLES.iter().enumerate() {
        let x = 0.45 + f as f32 * 0.05;
        points[joint.index()] = Landmark::new(x, 0.55, 0.0);
        let (mid_y, tip_y) = if fingers[f] { (0.45, 0.35) } else { (0.6, 0.65) };
        points[mid.index()] = Landmark::new(x, mid_y, 0.0);
        points[tip.index()] = Landmark::new(x, tip_y, 0.0);
    }

    HandLandmarks::from_points(points)
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    #[test]
    fn test_malformed_lengths() {
        for len in [0usize, 1, 20, 22] {
            let hand = HandLandmarks::from_points(vec![Landmark::default(); len]);
            let err = evaluate_fingers(&hand).unwrap_err();
            assert_eq!(err.actual, len, "length {} must be rejected", len);
        }

        let hand = HandLandmarks::from_points(vec![Landmark::default(); 21]);
        assert!(evaluate_fingers(&hand).is_ok());
    }

    #[test]
    fn test_all_closed() {
        // Thumb tip and mid at or right of the base, all long fingers'
        // tip and mid at or below their base joint.
        let state = evaluate_fingers(&hand_with(false, [false; 4])).unwrap();
        assert_eq!(state, FingerState::default());
    }

    #[test]
    fn test_all_open() {
        let state = evaluate_fingers(&hand_with(true, [true; 4])).unwrap();
        assert_eq!(
            state,
            FingerState { thumb: true, index: true, middle: true, ring: true, pinky: true }
        );
    }

    #[test]
    fn test_index_only() {
        let state = evaluate_fingers(&hand_with(false, [true, false, false, false])).unwrap();
        assert_eq!(
            state,
            FingerState { index: true, ..FingerState::default() }
        );
    }

    #[test]
    fn test_pure_function() {
        let hand = hand_with(true, [true, false, true, false]);
        let first = evaluate_fingers(&hand).unwrap();
        let second = evaluate_fingers(&hand).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_finger_needs_both_mid_and_tip_above_joint() {
        // Tip above the joint but mid below: not extended.
        let mut hand = hand_with(false, [false; 4]);
        let mut points = hand.points().to_vec();
        points[LandmarkIndex::IndexDip.index()].y = 0.6;
        points[LandmarkIndex::IndexTip.index()].y = 0.4;
        hand = HandLandmarks::from_points(points);

        let state = evaluate_fingers(&hand).unwrap();
        assert!(!state.index);
    }

    #[test]
    fn test_thumb_ignores_vertical_axis() {
        // Thumb keypoints moved far down the image: only x decides.
        let mut points = hand_with(true, [false; 4]).points().to_vec();
        points[LandmarkIndex::ThumbIp.index()].y = 0.95;
        points[LandmarkIndex::ThumbTip.index()].y = 0.99;
        let state = evaluate_fingers(&HandLandmarks::from_points(points)).unwrap();
        assert!(state.thumb);
    }

    #[test]
    fn test_depth_ignored() {
        let mut points = hand_with(false, [true, true, true, true]).points().to_vec();
        for p in &mut points {
            p.z = -42.0;
        }
        let state = evaluate_fingers(&HandLandmarks::from_points(points)).unwrap();
        assert_eq!(
            state,
            FingerState { index: true, middle: true, ring: true, pinky: true, thumb: false }
        );
    }
}
