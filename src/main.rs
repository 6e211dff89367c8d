//! Holoblock headless demo.
//!
//! Runs the full session pipeline against a synthetic camera and a scripted
//! hand, logging world state as it goes.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>        Session config JSON (default: built-in defaults)
//!   --script <PATH>        Gesture script JSON (default: built-in demo)
//!   --write-config <PATH>  Write the effective config and exit

use std::path::PathBuf;

use holoblock::capture::{CaptureThread, FrameSlot, SyntheticSource};
use holoblock::core::{Result, logging};
use holoblock::render::LogRenderer;
use holoblock::session::{
    CameraInput, GestureScript, ScriptedTracker, Session, SessionConfig, StopSignal,
};

fn main() {
    logging::init();
    log::info!("Holoblock starting...");

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let config = match parse_path_arg(args, "--config") {
        Some(path) => SessionConfig::load(&path)?,
        None => SessionConfig::default(),
    };
    config.validate()?;

    if let Some(path) = parse_path_arg(args, "--write-config") {
        config.save(&path)?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let script = match parse_path_arg(args, "--script") {
        Some(path) => GestureScript::load(&path)?,
        None => GestureScript::demo(),
    };

    let mut source = SyntheticSource::new(config.capture.width, config.capture.height);
    if let Some(interval) = config.capture.frame_interval()? {
        source = source.with_interval(interval);
    }
    let capture = CaptureThread::spawn(source, FrameSlot::new())?;

    let stop = StopSignal::new();
    let tracker = ScriptedTracker::new(script, stop.clone());
    let mut session = Session::new(
        &config,
        CameraInput::from_capture(&capture),
        tracker,
        LogRenderer::new(config.log_every),
    )?
    .with_stop_signal(stop);
    let controls = session.control_sender();
    session.tracker_mut().set_controls(controls);

    let stats = session.run()?;
    let captured = capture.stop()?;

    let world = session.world();
    log::info!(
        "Done: {} frames processed, {} captured, {} edits ({} rejected)",
        stats.frames_processed,
        captured,
        stats.edits_applied,
        stats.edits_rejected
    );
    let mut blocks = world.all_blocks();
    blocks.sort_unstable_by_key(|(cell, _)| *cell);
    for (cell, color) in blocks {
        let [r, g, b] = color.to_rgb8();
        log::info!("  block {} #{:02x}{:02x}{:02x}", cell, r, g, b);
    }
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}
