//! Synthetic replay shell.
//!
//! Stands in for the camera/detector application around the recognition
//! core: a worker thread synthesizes observations and drives the frame
//! consumer while this thread plays the display owner, draining the label
//! mailbox at its own cadence.

use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use signsense_recognizer::{
    label_mailbox, DriverConfig, FrameConsumer, FrameDriver, FrameObservation, GestureRecognizer,
    HandLandmarks, Landmark, LandmarkIndex, LANDMARK_COUNT,
};

#[derive(Parser, Debug)]
#[command(name = "signsense-replay", about = "Replay synthetic hand observations through the recognizer")]
struct Cli {
    /// Number of frames to synthesize
    #[arg(long, default_value_t = 64)]
    frames: u64,

    /// Synthetic stream rate in frames per second
    #[arg(long, default_value_t = 30)]
    fps: u64,

    /// Include per-keypoint coordinates in the frame diagnostics
    #[arg(long)]
    verbose_landmarks: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signsense_recognizer=info".into()),
        )
        .init();

    info!("signsense-replay v{} starting", env!("CARGO_PKG_VERSION"));
    info!(frames = cli.frames, fps = cli.fps, "synthesizing observation stream");

    let (publisher, display) = label_mailbox();
    let driver = FrameDriver::with_config(DriverConfig {
        verbose: cli.verbose_landmarks,
    });
    let mut recognizer = GestureRecognizer::new(driver, publisher);

    let frames = cli.frames;
    let frame_interval = Duration::from_micros(1_000_000 / cli.fps.max(1));

    let worker = thread::spawn(move || {
        for n in 0..frames {
            let observation = synthetic_observation(n);
            recognizer.consume_frame(&observation);
            thread::sleep(frame_interval);
        }
        // recognizer (and its publisher) drop here, closing the mailbox
    });

    // Display owner: show whatever is newest whenever we get around to it.
    while let Some(update) = display.wait_latest() {
        println!("[{:>10} us] {}", update.timestamp_us, update.label.overlay_text());
    }

    worker
        .join()
        .map_err(|_| anyhow!("replay worker panicked"))?;
    info!("replay finished");
    Ok(())
}

/// Pose cycle the replay walks through: FIST, ONE .. FIVE, one vector
/// absent from the rule table, then an empty frame.
fn synthetic_observation(frame: u64) -> FrameObservation {
    let timestamp_us = frame * 33_333;
    let hands = match frame % 8 {
        0 => vec![synthetic_hand(false, [false; 4])],
        1 => vec![synthetic_hand(false, [true, false, false, false])],
        2 => vec![synthetic_hand(true, [true, false, false, false])],
        3 => vec![synthetic_hand(true, [true, true, false, false])],
        4 => vec![synthetic_hand(false, [true, true, true, true])],
        5 => vec![synthetic_hand(true, [true, true, true, true])],
        6 => vec![synthetic_hand(true, [false, false, true, false])],
        _ => Vec::new(),
    };
    FrameObservation::new(timestamp_us, hands)
}

/// Build a hand with the given thumb/finger extension pattern: extended
/// long fingers put mid and tip above their base joint, an extended thumb
/// puts IP and tip left of its MCP.
fn synthetic_hand(thumb: bool, fingers: [bool; 4]) -> HandLandmarks {
    const TRIPLES: [(LandmarkIndex, LandmarkIndex, LandmarkIndex); 4] = [
        (LandmarkIndex::IndexPip, LandmarkIndex::IndexDip, LandmarkIndex::IndexTip),
        (LandmarkIndex::MiddlePip, LandmarkIndex::MiddleDip, LandmarkIndex::MiddleTip),
        (LandmarkIndex::RingPip, LandmarkIndex::RingDip, LandmarkIndex::RingTip),
        (LandmarkIndex::PinkyPip, LandmarkIndex::PinkyDip, LandmarkIndex::PinkyTip),
    ];

    let mut points = vec![Landmark::new(0.5, 0.8, 0.0); LANDMARK_COUNT];

    points[LandmarkIndex::ThumbMcp.index()] = Landmark::new(0.4, 0.6, 0.0);
    let (ip_x, tip_x) = if thumb { (0.3, 0.25) } else { (0.45, 0.5) };
    points[LandmarkIndex::ThumbIp.index()] = Landmark::new(ip_x, 0.55, 0.0);
    points[LandmarkIndex::ThumbTip.index()] = Landmark::new(tip_x, 0.5, 0.0);

    for (f, (joint, mid, tip)) in TRIPLES.iter().enumerate() {
        let x = 0.45 + f as f32 * 0.05;
        points[joint.index()] = Landmark::new(x, 0.55, 0.0);
        let (mid_y, tip_y) = if fingers[f] { (0.45, 0.35) } else { (0.6, 0.65) };
        points[mid.index()] = Landmark::new(x, mid_y, 0.0);
        points[tip.index()] = Landmark::new(x, tip_y, 0.0);
    }

    HandLandmarks::from_points(points)
}
