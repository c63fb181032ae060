//! Frame intake: connects the upstream detector to driver and publisher.
//!
//! The upstream frame-processing pipeline registers a [`FrameConsumer`] and
//! invokes it once per video frame from its worker thread.  The observation
//! flows through by value; no latest-hands state is retained anywhere
//! between frames.

use tracing::warn;

use crate::frame::FrameDriver;
use crate::landmark::FrameObservation;
use crate::publisher::{LabelPublisher, LabelUpdate};

/// Receives one frame's observation from the upstream pipeline.
pub trait FrameConsumer {
    fn consume_frame(&mut self, observation: &FrameObservation);
}

/// The assembled recognition pipeline: frame driver plus label publisher.
pub struct GestureRecognizer {
    driver: FrameDriver,
    publisher: LabelPublisher,
}

impl GestureRecognizer {
    pub fn new(driver: FrameDriver, publisher: LabelPublisher) -> Self {
        Self { driver, publisher }
    }
}

impl FrameConsumer for GestureRecognizer {
    /// Classify the observation and publish the outcome.
    ///
    /// A malformed hand fails the whole frame: nothing reaches the display
    /// and the error goes to the log instead of crashing the pipeline.
    fn consume_frame(&mut self, observation: &FrameObservation) {
        match self.driver.classify_frame(observation) {
            Ok(result) => {
                self.publisher.publish(LabelUpdate {
                    label: result.label,
                    timestamp_us: observation.timestamp_us,
                    diagnostic: result.diagnostic,
                });
            }
            Err(err) => {
                warn!(
                    timestamp_us = observation.timestamp_us,
                    "frame classification failed: {}",
                    err,
                );
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::GestureLabel;
    use crate::frame::{FrameLabel, NO_HANDS_DIAGNOSTIC};
    use crate::landmark::{HandLandmarks, Landmark, LANDMARK_COUNT};
    use crate::publisher::label_mailbox;

    /// A hand with every keypoint at the same spot reads as all-closed.
    fn uniform_hand() -> HandLandmarks {
        HandLandmarks::from_points(vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT])
    }

    #[test]
    fn test_consume_publishes_label() {
        let (publisher, display) = label_mailbox();
        let mut recognizer = GestureRecognizer::new(FrameDriver::new(), publisher);

        recognizer.consume_frame(&FrameObservation::new(42, vec![uniform_hand()]));

        let update = display.take_latest().unwrap();
        assert_eq!(update.label, FrameLabel::Pose(GestureLabel::Fist));
        assert_eq!(update.timestamp_us, 42);
        assert!(update.diagnostic.contains("Number of hands detected: 1"));
    }

    #[test]
    fn test_consume_empty_frame() {
        let (publisher, display) = label_mailbox();
        let mut recognizer = GestureRecognizer::new(FrameDriver::new(), publisher);

        recognizer.consume_frame(&FrameObservation::new(7, Vec::new()));

        let update = display.take_latest().unwrap();
        assert_eq!(update.label, FrameLabel::NoHands);
        assert_eq!(update.diagnostic, NO_HANDS_DIAGNOSTIC);
    }

    #[test]
    fn test_malformed_frame_publishes_nothing() {
        let (publisher, display) = label_mailbox();
        let mut recognizer = GestureRecognizer::new(FrameDriver::new(), publisher);

        let bad = HandLandmarks::from_points(vec![Landmark::default(); 5]);
        recognizer.consume_frame(&FrameObservation::new(7, vec![bad]));

        assert!(display.take_latest().is_none());
    }

    #[test]
    fn test_sequential_frames_latest_shown() {
        let (publisher, display) = label_mailbox();
        let mut recognizer = GestureRecognizer::new(FrameDriver::new(), publisher);

        recognizer.consume_frame(&FrameObservation::new(1, vec![uniform_hand()]));
        recognizer.consume_frame(&FrameObservation::new(2, Vec::new()));

        let update = display.take_latest().unwrap();
        assert_eq!(update.label, FrameLabel::NoHands);
        assert_eq!(update.timestamp_us, 2);
    }
}
