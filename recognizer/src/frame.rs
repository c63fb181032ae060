//! Per-frame classification driver.
//!
//! Runs the finger evaluator and gesture classifier over every hand in one
//! frame's observation, selects the authoritative label, and renders the
//! per-hand diagnostic description for the log sink.

use std::fmt::Write as _;

use crate::classify::{classify, GestureLabel};
use crate::fingers::evaluate_fingers;
use crate::landmark::{FrameObservation, MalformedLandmarksError};

/// Fixed diagnostic for frames with no detected hands.
pub const NO_HANDS_DIAGNOSTIC: &str = "No hand landmarks";

// ── Result types ───────────────────────────────────────────

/// The authoritative result for one frame.
///
/// `NoHands` is distinct from `Pose(GestureLabel::None)`: the former means
/// the detector saw nothing, the latter that a hand was present but matched
/// no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLabel {
    NoHands,
    Pose(GestureLabel),
}

impl FrameLabel {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoHands => "NO_HANDS",
            Self::Pose(label) => label.as_str(),
        }
    }

    /// Text rendered on the video overlay.
    pub fn overlay_text(&self) -> &'static str {
        match self {
            Self::NoHands => "NO HANDS",
            Self::Pose(label) => label.overlay_text(),
        }
    }
}

/// One frame's outcome: the selected label plus its diagnostic text.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClassification {
    pub label: FrameLabel,
    pub diagnostic: String,
}

// ── Driver ─────────────────────────────────────────────────

/// Configuration for per-frame classification.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Include every keypoint's coordinates in the diagnostic.
    pub verbose: bool,
}

/// Drives evaluator and classifier over one observation at a time.
///
/// Stateless apart from its configuration; safe to call from any thread and
/// carries nothing across frames.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    pub config: DriverConfig,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Classify one frame's observation.
    ///
    /// A malformed hand anywhere in the observation fails the whole frame;
    /// nothing is skipped silently.
    pub fn classify_frame(
        &self,
        observation: &FrameObservation,
    ) -> Result<FrameClassification, MalformedLandmarksError> {
        if observation.hands.is_empty() {
            return Ok(FrameClassification {
                label: FrameLabel::NoHands,
                diagnostic: NO_HANDS_DIAGNOSTIC.to_string(),
            });
        }

        // Every hand is evaluated; each one overwrites the running result,
        // so the last hand in observation order decides the frame.
        let mut label = GestureLabel::None;
        for hand in &observation.hands {
            let fingers = evaluate_fingers(hand)?;
            label = classify(fingers);
        }

        Ok(FrameClassification {
            label: FrameLabel::Pose(label),
            diagnostic: self.describe_hands(observation),
        })
    }

    /// Render the per-hand description.  Informational only; never feeds
    /// back into the returned label.
    fn describe_hands(&self, observation: &FrameObservation) -> String {
        let mut out = format!("Number of hands detected: {}\n", observation.hand_count());
        for (hand_index, hand) in observation.hands.iter().enumerate() {
            let _ = writeln!(
                out,
                "\t#Hand landmarks for hand[{}]: {}",
                hand_index,
                hand.len(),
            );
            if self.config.verbose {
                for (landmark_index, point) in hand.points().iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "\t\tLandmark [{}]: ({}, {}, {})",
                        landmark_index, point.x, point.y, point.z,
                    );
                }
            }
        }
        out
    }
}

// ── Tests ──────────────────────────────────────────────────
