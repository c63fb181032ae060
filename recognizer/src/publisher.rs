//! Thread-safe hand-off of frame results to the display surface.
//!
//! A bounded single-slot mailbox connects the worker thread that classifies
//! frames to whatever thread owns the display text.  The worker never
//! blocks: when updates arrive faster than the display drains them, the
//! stale pending update is displaced so only the newest remains queued.
//! Each publish also emits the frame diagnostic to the log sink.

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::info;

use crate::frame::FrameLabel;

/// One display update: the frame's label, timestamp, and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelUpdate {
    pub label: FrameLabel,
    /// Monotonic timestamp of the source frame, microseconds.
    pub timestamp_us: u64,
    /// Human-readable description of the detected hands.
    pub diagnostic: String,
}

/// Create a connected publisher/display pair with a single pending slot.
pub fn label_mailbox() -> (LabelPublisher, DisplaySlot) {
    let (tx, rx) = bounded(1);
    let publisher = LabelPublisher { tx, pending: rx.clone() };
    (publisher, DisplaySlot { rx })
}

// ── Worker side ────────────────────────────────────────────

/// Worker-side handle.  Callable from any thread; publishing never blocks
/// and has no failure mode visible to the caller.
#[derive(Debug, Clone)]
pub struct LabelPublisher {
    tx: Sender<LabelUpdate>,
    pending: Receiver<LabelUpdate>,
}

impl LabelPublisher {
    /// Publish one frame's result and log its diagnostic.
    ///
    /// If the display has not drained the previous update yet, that update
    /// is displaced; intermediate results are allowed to go unseen.
    pub fn publish(&self, update: LabelUpdate) {
        info!(
            timestamp_us = update.timestamp_us,
            label = update.label.as_str(),
            "{}",
            update.diagnostic.trim_end(),
        );

        if self.tx.is_full() {
            let _ = self.pending.try_recv();
        }
        let _ = self.tx.try_send(update);
    }
}

// ── Display side ───────────────────────────────────────────

/// Display-side handle, owned by the thread that renders the overlay text.
#[derive(Debug)]
pub struct DisplaySlot {
    rx: Receiver<LabelUpdate>,
}

impl DisplaySlot {
    /// Take the most recent pending update without blocking.
    pub fn take_latest(&self) -> Option<LabelUpdate> {
        let mut latest = None;
        while let Ok(update) = self.rx.try_recv() {
            latest = Some(update);
        }
        latest
    }

    /// Block until an update arrives, collapsing any updates that raced in
    /// behind it.  Returns `None` once every publisher handle is gone.
    pub fn wait_latest(&self) -> Option<LabelUpdate> {
        let mut latest = self.rx.recv().ok()?;
        while let Ok(update) = self.rx.try_recv() {
            latest = update;
        }
        Some(latest)
    }
}

// ── Tests ──────────────────────────────────────────────────
