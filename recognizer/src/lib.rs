//! Hand-pose recognition core for live video overlays.
//!
//! Converts per-frame hand keypoint observations (21 points per hand, as
//! produced by an upstream detector) into discrete pose labels ("FIST",
//! "ONE" .. "FIVE", or "NONE") and hands the winning label to the display
//! surface through a thread-safe single-slot mailbox.
//!
//! The camera, the keypoint model, permissions, and the UI itself belong
//! to the embedding application; this crate only sees observations and
//! emits labels and diagnostics.

pub mod classify;
pub mod fingers;
pub mod frame;
pub mod landmark;
pub mod publisher;
pub mod recognizer;

pub use classify::{classify, GestureLabel};
pub use fingers::{evaluate_fingers, FingerState};
pub use frame::{DriverConfig, FrameClassification, FrameDriver, FrameLabel};
pub use landmark::{
    FrameObservation, HandLandmarks, Landmark, LandmarkIndex, MalformedLandmarksError,
    LANDMARK_COUNT,
};
pub use publisher::{label_mailbox, DisplaySlot, LabelPublisher, LabelUpdate};
pub use recognizer::{FrameConsumer, GestureRecognizer};
