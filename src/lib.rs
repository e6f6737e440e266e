// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod angle;
pub mod config;
pub mod quantizer;
pub mod tracker;

mod render;
mod window;

pub use angle::{normalize_degrees, shortest_arc, touch_angle, Point};
pub use config::{Color, KnobConfig};
pub use quantizer::{SnapMode, StepQuantizer};
pub use tracker::{DragSession, RotationTracker};

use std::sync::mpsc::Receiver;
use tracing::{debug, info};

// ============================================================================
// ERRORS
// ============================================================================

/// Failures of the demo window. The knob itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum KnobError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),
}

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Command enum for driving a knob from another thread.
#[derive(Debug, Clone, PartialEq)]
pub enum KnobCommand {
    PointerMove(Point),
    PointerUp,
    SetStep(f64),
    SetSnapMode(SnapMode),
    SetCenter(Point),
    SetKnobWidth(f64),
    Reset,
}

/// Result of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobOutput {
    /// Knob angle in `[0, 360)`.
    pub angle: f64,
    /// The move carried the knob into another notch interval. Emitted once
    /// per crossing; the caller decides how to give feedback.
    pub boundary_crossed: bool,
}

/// A rotary knob: one [`RotationTracker`] and one [`StepQuantizer`] behind
/// the pointer-in / angle-out contract a UI layer talks to.
#[derive(Debug, Clone)]
pub struct Knob {
    config: KnobConfig,
    tracker: RotationTracker,
    quantizer: StepQuantizer,
    angle: f64,
}

impl Knob {
    pub fn new(config: KnobConfig) -> Self {
        let tracker = RotationTracker::for_width(config.knob_width);
        let quantizer = StepQuantizer::with_mode(config.step_degrees, config.snap_mode);
        Self {
            config,
            tracker,
            quantizer,
            angle: 0.0,
        }
    }

    /// Feeds a pointer position in the knob's local frame. The first move
    /// after a pointer-up starts a new drag.
    pub fn pointer_move(&mut self, point: Point) -> KnobOutput {
        let previous = self.angle;
        self.tracker.update_quantized(point, &self.quantizer);
        self.angle = self.tracker.angle();

        let boundary_crossed = self.quantizer.did_cross_boundary(previous, self.angle);
        if boundary_crossed {
            debug!(
                angle = self.angle,
                notch = ?self.quantizer.notch_index(self.angle),
                "notch crossed"
            );
        }

        KnobOutput {
            angle: self.angle,
            boundary_crossed,
        }
    }

    /// Ends the active drag, keeping the current angle.
    pub fn pointer_up(&mut self) {
        if self.tracker.is_dragging() {
            self.tracker.commit();
            self.angle = self.tracker.angle();
            debug!(angle = self.angle, "drag committed");
        }
    }

    /// Degrees per notch. Zero or less turns snapping off.
    pub fn set_step(&mut self, step_degrees: f64) {
        self.quantizer.configure(step_degrees);
        self.config.step_degrees = step_degrees;
        info!(step_degrees, snapping = self.quantizer.is_enabled(), "step changed");
    }

    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        self.quantizer.set_mode(mode);
        self.config.snap_mode = mode;
        info!(?mode, "snap mode changed");
    }

    pub fn set_center(&mut self, center: Point) {
        self.tracker.set_center(center);
    }

    /// Re-centers on a square knob of the new width. Applies mid-drag.
    pub fn set_knob_width(&mut self, knob_width: f64) {
        self.config.knob_width = knob_width;
        self.tracker.set_knob_width(knob_width);
    }

    /// Back to 0°, dropping any drag in progress.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.angle = 0.0;
        info!("knob reset");
    }

    /// Angle in `[0, 360)` as of the last move, commit or reset.
    pub fn current_angle(&self) -> f64 {
        self.angle
    }

    /// Angle in whole degrees, as shown to the user.
    pub fn readout(&self) -> i32 {
        self.angle.trunc() as i32
    }

    /// Whether `point` lands on the knob face.
    pub fn hit_test(&self, point: Point) -> bool {
        point.distance_to(self.tracker.center()) <= self.config.knob_width / 2.0
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn step(&self) -> f64 {
        self.quantizer.step()
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    pub fn tracker(&self) -> &RotationTracker {
        &self.tracker
    }

    pub fn quantizer(&self) -> &StepQuantizer {
        &self.quantizer
    }

    /// Applies one command. Only pointer moves produce an output.
    pub fn apply(&mut self, command: KnobCommand) -> Option<KnobOutput> {
        match command {
            KnobCommand::PointerMove(point) => return Some(self.pointer_move(point)),
            KnobCommand::PointerUp => self.pointer_up(),
            KnobCommand::SetStep(step) => self.set_step(step),
            KnobCommand::SetSnapMode(mode) => self.set_snap_mode(mode),
            KnobCommand::SetCenter(center) => self.set_center(center),
            KnobCommand::SetKnobWidth(width) => self.set_knob_width(width),
            KnobCommand::Reset => self.reset(),
        }
        None
    }

    /// Applies every command waiting on `receiver` without blocking.
    pub fn drain(&mut self, receiver: &Receiver<KnobCommand>) -> Vec<KnobOutput> {
        let mut outputs = Vec::new();
        while let Ok(command) = receiver.try_recv() {
            outputs.extend(self.apply(command));
        }
        outputs
    }

    /// Opens an interactive window for this knob and blocks until it closes.
    pub fn show(&mut self) -> Result<(), KnobError> {
        window::run(self, None)
    }

    /// Like [`show`](Self::show), also applying commands from `receiver`
    /// every frame.
    pub fn show_with_commands(&mut self, receiver: Receiver<KnobCommand>) -> Result<(), KnobError> {
        window::run(self, Some(receiver))
    }
}

impl Default for Knob {
    fn default() -> Self {
        Self::new(KnobConfig::default())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
