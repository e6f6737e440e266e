// ============================================================================
// ROTATION TRACKER
// ============================================================================

use crate::angle::{normalize_degrees, touch_angle, Point, FULL_TURN};
use crate::quantizer::StepQuantizer;

/// State of one pointer-down to pointer-up drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer angle at the first sample of the drag.
    pub start_touch_angle: f64,
    /// Committed knob angle when the drag began.
    pub baseline_angle: f64,
}

/// Turns pointer samples around a center into a rotation angle that
/// persists across drags.
///
/// Within one drag the rotation is measured from the first sample and
/// always wrapped into `[0, 360)`, so the knob only ever turns one way
/// per drag: a pointer crossing from 359° to 1° yields +2°, and a small
/// backwards motion reads as almost a full forward turn (which lands on
/// the same visual position).
#[derive(Debug, Clone, PartialEq)]
pub struct RotationTracker {
    center: Point,
    accumulated: f64,
    current: f64,
    session: Option<DragSession>,
}

impl RotationTracker {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            accumulated: 0.0,
            current: 0.0,
            session: None,
        }
    }

    pub fn for_width(knob_width: f64) -> Self {
        Self::new(Point::center_of(knob_width))
    }

    /// Feeds one pointer sample and returns the unsnapped knob angle
    /// (`baseline + delta`, not wrapped). Starts a drag when idle.
    pub fn update(&mut self, point: Point) -> f64 {
        self.track(point, |delta| delta)
    }

    /// Like [`update`](Self::update), but the drag delta is snapped by
    /// `quantizer` before it is added to the baseline, so the knob lands on
    /// the step grid relative to where the drag began.
    pub fn update_quantized(&mut self, point: Point, quantizer: &StepQuantizer) -> f64 {
        self.track(point, |delta| quantizer.quantize(delta))
    }

    fn track(&mut self, point: Point, snap: impl Fn(f64) -> f64) -> f64 {
        let angle = touch_angle(self.center, point);
        let accumulated = self.accumulated;
        let session = self.session.get_or_insert(DragSession {
            start_touch_angle: angle,
            baseline_angle: accumulated,
        });

        let delta = session_delta(session.start_touch_angle, angle);
        self.current = session.baseline_angle + snap(delta);
        self.current
    }

    /// Ends the drag. The wrapped current angle becomes the baseline for the
    /// next drag. A no-op when no drag is active.
    pub fn commit(&mut self) {
        if self.session.take().is_some() {
            self.accumulated = normalize_degrees(self.current);
            self.current = self.accumulated;
        }
    }

    /// Back to 0° with no drag in progress.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.current = 0.0;
        self.session = None;
    }

    /// Applies to the next sample, including mid-drag.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_knob_width(&mut self, knob_width: f64) {
        self.set_center(Point::center_of(knob_width));
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Current angle wrapped into `[0, 360)`.
    pub fn angle(&self) -> f64 {
        normalize_degrees(self.current)
    }

    /// Current angle as last returned by `update`.
    pub fn raw_angle(&self) -> f64 {
        self.current
    }

    /// Angle frozen by the last commit.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Rotation applied by the active drag so far, after snapping.
    pub fn session_delta(&self) -> Option<f64> {
        self.session
            .as_ref()
            .map(|session| self.current - session.baseline_angle)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new(Point::default())
    }
}

/// Rotation from `start` to `current`, wrapped into `[0, 360)`.
fn session_delta(start: f64, current: f64) -> f64 {
    let delta = current - start;
    if delta < 0.0 {
        delta + FULL_TURN
    } else {
        delta % FULL_TURN
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;
