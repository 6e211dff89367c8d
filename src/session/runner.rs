//! The per-frame session loop.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::core::Result;
use crate::core::time::FrameTimer;
use crate::gesture::GestureInterpreter;
use crate::math::map_input_to_cursor_xz;
use crate::render::{Renderer, WorldView};
use crate::voxel::{EditCommand, VoxelWorld};
use super::config::SessionConfig;
use super::control::{ControlCommand, StopSignal};
use super::input::{HandTracker, InputProvider};

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No frame was available; nothing changed
    Skipped,
    /// A frame was processed, with the edit it produced (if any)
    Processed(Option<EditCommand>),
}

/// Counters for a session run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub frames_processed: u64,
    pub frames_skipped: u64,
    /// Edits that changed the world
    pub edits_applied: u64,
    /// Edits the store turned down (e.g. removing an empty cell)
    pub edits_rejected: u64,
}

/// Owns the world and drives input, interpretation and rendering.
pub struct Session<I, T, R> {
    world: VoxelWorld,
    interpreter: GestureInterpreter,
    input: I,
    tracker: T,
    renderer: R,
    timer: FrameTimer,
    stop: StopSignal,
    control_tx: Sender<ControlCommand>,
    control_rx: Receiver<ControlCommand>,
    frame_interval: Option<Duration>,
    stats: SessionStats,
}

impl<I, T, R> Session<I, T, R>
where
    I: InputProvider,
    T: HandTracker,
    R: Renderer,
{
    /// Build a session. Fails on an invalid config.
    pub fn new(config: &SessionConfig, input: I, tracker: T, renderer: R) -> Result<Self> {
        let world = config.build_world()?;
        let (control_tx, control_rx) = mpsc::channel();
        let frame_interval = config.frame_interval()?;

        let (w, h) = input.frame_size();
        log::info!(
            "Session ready: {0}x{0}x{0} grid, block {1}, {2}x{3} input",
            world.grid_size(),
            world.block_size(),
            w,
            h
        );

        Ok(Self {
            world,
            interpreter: GestureInterpreter::new(config.cooldown),
            input,
            tracker,
            renderer,
            timer: FrameTimer::new(),
            stop: StopSignal::new(),
            control_tx,
            control_rx,
            frame_interval,
            stats: SessionStats::default(),
        })
    }

    /// Use an externally owned stop signal
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Sender for out-of-band commands, applied at the start of the next tick
    pub fn control_sender(&self) -> Sender<ControlCommand> {
        self.control_tx.clone()
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Apply an out-of-band command immediately
    pub fn apply_control(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::ClearWorld => self.world.clear_world(),
            ControlCommand::CursorUp => self.world.move_cursor_up(),
            ControlCommand::CursorDown => self.world.move_cursor_down(),
            ControlCommand::Stop => {
                log::info!("Stop requested");
                self.stop.raise();
            }
        }
    }

    /// Process one frame.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.drain_controls();

        let Some(frame) = self.input.acquire() else {
            log::trace!("No frame available, skipping");
            self.stats.frames_skipped += 1;
            return Ok(TickOutcome::Skipped);
        };

        let sample = self.tracker.track(&frame);

        if let Some(sample) = sample {
            let (w, h) = frame.dimensions();
            let (gx, gz) = map_input_to_cursor_xz(
                sample.position,
                w as f32,
                h as f32,
                self.world.grid_size(),
            )?;
            self.world.update_cursor_xz(gx, gz);
        }

        let gesture = sample.and_then(|s| s.gesture);
        let edit = self.interpreter.step(gesture, self.world.cursor());
        if let Some(edit) = &edit {
            if self.world.apply(edit) {
                self.stats.edits_applied += 1;
            } else {
                self.stats.edits_rejected += 1;
            }
        }

        self.timer.tick();
        self.stats.frames_processed += 1;

        let view = WorldView::capture(
            &self.world,
            gesture,
            sample.map(|s| s.position),
            self.timer.stats(),
        );
        self.renderer.render(&frame, &view);

        Ok(TickOutcome::Processed(edit))
    }

    /// Tick until the stop signal is raised.
    pub fn run(&mut self) -> Result<SessionStats> {
        log::info!("Session loop started");

        while !self.stop.is_raised() {
            let started = Instant::now();
            match self.tick()? {
                TickOutcome::Skipped => thread::yield_now(),
                TickOutcome::Processed(_) => self.pace(started),
            }
        }

        log::info!(
            "Session loop ended: {} frames, {} skipped, {} blocks",
            self.stats.frames_processed,
            self.stats.frames_skipped,
            self.world.block_count()
        );
        Ok(self.stats)
    }

    fn drain_controls(&mut self) {
        loop {
            match self.control_rx.try_recv() {
                Ok(command) => self.apply_control(command),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn pace(&self, started: Instant) {
        if let Some(interval) = self.frame_interval {
            let elapsed = started.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
    }
}
