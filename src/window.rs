// ============================================================================
// DEMO WINDOW
// ============================================================================

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info, warn};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use crate::angle::Point;
use crate::config::KnobConfig;
use crate::render::{Canvas, FrameView, KnobLayout, Needle, Scene};
use crate::{Knob, KnobCommand, KnobError, KnobOutput};

pub(crate) fn run(knob: &mut Knob, receiver: Option<Receiver<KnobCommand>>) -> Result<(), KnobError> {
    let config = knob.config().clone();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(
            config.window_width as f64,
            config.window_height as f64,
        ))
        .build(&event_loop)?;
    let window = Arc::new(window);

    let window_clone = window.clone();
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

    let mut host = Host::new(knob, size.width as usize, size.height as usize);
    info!(
        knob_width = host.layout.width,
        step = host.knob.step(),
        "knob window open"
    );

    let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate.max(1.0));
    let mut last_frame = Instant::now();

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => window_target.exit(),
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        warn!(error = %err, "buffer resize failed");
                    }
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        warn!(error = %err, "surface resize failed");
                    }
                    host.resize(new_size.width as usize, new_size.height as usize);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    host.cursor_moved(to_point(position));
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => host.mouse_pressed(),
                    ElementState::Released => host.mouse_released(),
                },
                WindowEvent::Touch(Touch {
                    phase, location, id, ..
                }) => host.touch(id, phase, to_point(location)),
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    match event.logical_key.as_ref() {
                        Key::Named(NamedKey::ArrowUp) => host.nudge_step(1),
                        Key::Named(NamedKey::ArrowDown) => host.nudge_step(-1),
                        Key::Character(c) if c.eq_ignore_ascii_case("r") => host.knob.reset(),
                        _ => {}
                    }
                }
                WindowEvent::RedrawRequested => {
                    host.advance(receiver.as_ref());
                    if let Some(title) = host.take_title() {
                        window_clone.set_title(&title);
                    }

                    let (width, height) = (host.width, host.height);
                    let mut canvas = Canvas::new(pixels.frame_mut(), width, height);
                    host.scene().render(&mut canvas);
                    if let Err(err) = pixels.render() {
                        error!(error = %err, "render failed");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if last_frame.elapsed() >= frame_duration {
                    window_clone.request_redraw();
                    last_frame = Instant::now();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x, position.y)
}

// ============================================================================
// HOST STATE
// ============================================================================

/// The presentation side of the knob: turns window input into knob calls
/// and knob outputs into pixels. Step feedback is a short rim flash.
pub(crate) struct Host<'k> {
    pub knob: &'k mut Knob,
    config: KnobConfig,
    pub layout: KnobLayout,
    needle: Needle,
    cursor: Option<Point>,
    mouse_drag: bool,
    touch_id: Option<u64>,
    pulse: u32,
    shown_readout: Option<i32>,
    pub width: usize,
    pub height: usize,
}

impl<'k> Host<'k> {
    pub fn new(knob: &'k mut Knob, width: usize, height: usize) -> Self {
        let config = knob.config().clone();
        let layout = KnobLayout::fit(&config, width, height);
        knob.set_knob_width(layout.width);
        let needle = Needle::new(knob.current_angle(), config.needle_lerp_factor);
        Self {
            knob,
            config,
            layout,
            needle,
            cursor: None,
            mouse_drag: false,
            touch_id: None,
            pulse: 0,
            shown_readout: None,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.layout = KnobLayout::fit(&self.config, width, height);
        self.knob.set_knob_width(self.layout.width);
    }

    pub fn cursor_moved(&mut self, point: Point) {
        self.cursor = Some(point);
        if self.mouse_drag {
            self.drag_to(point);
        }
    }

    pub fn mouse_pressed(&mut self) {
        if self.touch_id.is_some() {
            return;
        }
        if let Some(cursor) = self.cursor {
            self.mouse_drag = self.press(cursor);
        }
    }

    pub fn mouse_released(&mut self) {
        if self.mouse_drag {
            self.mouse_drag = false;
            self.knob.pointer_up();
        }
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, point: Point) {
        match phase {
            TouchPhase::Started => {
                if self.touch_id.is_none() && !self.mouse_drag && self.press(point) {
                    self.touch_id = Some(id);
                }
            }
            TouchPhase::Moved if self.touch_id == Some(id) => self.drag_to(point),
            TouchPhase::Ended | TouchPhase::Cancelled if self.touch_id == Some(id) => {
                self.touch_id = None;
                self.knob.pointer_up();
            }
            _ => {}
        }
    }

    pub fn nudge_step(&mut self, notches: i32) {
        let step = self.config.nudge_step(self.knob.step(), notches);
        self.knob.set_step(step);
    }

    /// Starts a drag if `point` hits the knob face.
    fn press(&mut self, point: Point) -> bool {
        let local = self.layout.to_local(point);
        if !self.knob.hit_test(local) {
            return false;
        }
        let output = self.knob.pointer_move(local);
        self.feedback(output);
        true
    }

    fn drag_to(&mut self, point: Point) {
        let output = self.knob.pointer_move(self.layout.to_local(point));
        self.feedback(output);
    }

    fn feedback(&mut self, output: KnobOutput) {
        if output.boundary_crossed {
            self.pulse = self.config.pulse_frames;
            debug!(angle = output.angle, "step feedback");
        }
    }

    /// One frame of animation: queued commands, needle easing, pulse decay.
    pub fn advance(&mut self, receiver: Option<&Receiver<KnobCommand>>) {
        if let Some(receiver) = receiver {
            for output in self.knob.drain(receiver) {
                self.feedback(output);
            }
        }
        self.pulse = self.pulse.saturating_sub(1);
        self.needle.update(self.knob.current_angle());
    }

    pub fn view(&self) -> FrameView {
        FrameView {
            needle_angle: self.needle.angle,
            knob_angle: self.knob.current_angle(),
            pulse: f64::from(self.pulse) / f64::from(self.config.pulse_frames.max(1)),
        }
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.layout, self.knob.quantizer(), self.view(), &self.config)
    }

    /// New window title when the readout changed since the last call.
    pub fn take_title(&mut self) -> Option<String> {
        let readout = self.knob.readout();
        if self.shown_readout == Some(readout) {
            return None;
        }
        self.shown_readout = Some(readout);
        Some(format!("{} · {}°", self.config.title, readout))
    }
}

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;
