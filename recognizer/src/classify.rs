//! Finger-state vector to gesture label mapping.

use crate::fingers::FingerState;

/// Discrete hand-pose labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Fist,
    One,
    Two,
    Three,
    Four,
    Five,
    /// A hand was present but its finger-state vector matched no rule.
    None,
}

impl GestureLabel {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fist => "FIST",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::None => "NONE",
        }
    }

    /// Text rendered on the video overlay.  Matched poses carry the
    /// trailing exclamation mark the display has always shown.
    pub fn overlay_text(&self) -> &'static str {
        match self {
            Self::Fist => "FIST!",
            Self::One => "ONE!",
            Self::Two => "TWO!",
            Self::Three => "THREE!",
            Self::Four => "FOUR!",
            Self::Five => "FIVE!",
            Self::None => "NONE",
        }
    }
}

/// Map a finger-state vector to its gesture label.
///
/// First match wins.  The table is intentionally sparse: 26 of the 32
/// possible vectors are unmapped and fall through to [`GestureLabel::None`]
/// (thumb+ring only, for instance, is not a pose).  The gaps are part of
/// the recognition semantics, not missing rows.
pub fn classify(fingers: FingerState) -> GestureLabel {
    match (fingers.thumb, fingers.index, fingers.middle, fingers.ring, fingers.pinky) {
        (true, true, true, true, true) => GestureLabel::Five,
        (false, true, true, true, true) => GestureLabel::Four,
        (true, true, true, false, false) => GestureLabel::Three,
        (true, true, false, false, false) => GestureLabel::Two,
        (false, true, false, false, false) => GestureLabel::One,
        (false, false, false, false, false) => GestureLabel::Fist,
        _ => GestureLabel::None,
    }
}

// ── Tests ──────────────────────────────────────────────────
