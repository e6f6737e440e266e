// ============================================================================
// STEP QUANTIZER
// ============================================================================

use crate::angle::{normalize_degrees, shortest_arc, FULL_TURN};

/// How a drag delta settles onto the notch grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// Truncate to the notch at or below the delta.
    #[default]
    Floor,
    /// Round to the closest notch, halves away from zero.
    Nearest,
}

/// Snaps drag deltas to multiples of a step and reports notch crossings.
///
/// A step that is not strictly positive and finite disables snapping:
/// `quantize` becomes the identity and no boundary is ever crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepQuantizer {
    step_degrees: f64,
    mode: SnapMode,
}

impl StepQuantizer {
    pub fn new(step_degrees: f64) -> Self {
        Self::with_mode(step_degrees, SnapMode::default())
    }

    pub fn with_mode(step_degrees: f64, mode: SnapMode) -> Self {
        Self { step_degrees, mode }
    }

    /// Replaces the notch grid. Takes effect on the next `quantize` call,
    /// including mid-drag.
    pub fn configure(&mut self, step_degrees: f64) {
        self.step_degrees = step_degrees;
    }

    pub fn set_mode(&mut self, mode: SnapMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> SnapMode {
        self.mode
    }

    pub fn step(&self) -> f64 {
        self.step_degrees
    }

    pub fn is_enabled(&self) -> bool {
        self.step_degrees.is_finite() && self.step_degrees > 0.0
    }

    /// Snaps a delta measured from the start of the current drag.
    pub fn quantize(&self, delta: f64) -> f64 {
        if !self.is_enabled() {
            return delta;
        }
        let step = self.step_degrees;
        match self.mode {
            SnapMode::Floor => delta - delta.rem_euclid(step),
            SnapMode::Nearest => (delta / step).round() * step,
        }
    }

    /// `floor(angle / step)` once wrapped into one turn. Kept as `f64` so
    /// arbitrarily fine steps never saturate an integer.
    fn interval(&self, angle: f64) -> Option<f64> {
        if !self.is_enabled() {
            return None;
        }
        Some((normalize_degrees(angle) / self.step_degrees).floor())
    }

    /// Index of the notch interval holding `angle` once wrapped into one turn.
    pub fn notch_index(&self, angle: f64) -> Option<u64> {
        self.interval(angle).map(|interval| interval as u64)
    }

    /// True iff the two angles sit in different notch intervals.
    pub fn did_cross_boundary(&self, previous_angle: f64, new_angle: f64) -> bool {
        match (self.interval(previous_angle), self.interval(new_angle)) {
            (Some(previous), Some(new)) => previous != new,
            _ => false,
        }
    }

    /// `{0, step, 2·step, ...}` below one full turn. When the step does not
    /// divide 360 the last interval is shorter than the others.
    pub fn snap_points(&self) -> Vec<f64> {
        if !self.is_enabled() {
            return Vec::new();
        }
        (0u64..)
            .map(|i| i as f64 * self.step_degrees)
            .take_while(|point| *point < FULL_TURN)
            .collect()
    }

    /// Closest snap point to `angle` going either way round the circle.
    pub fn nearest_snap_point(&self, angle: f64) -> Option<f64> {
        let interval = self.interval(angle)?;
        let angle = normalize_degrees(angle);
        let below = interval * self.step_degrees;
        let mut above = below + self.step_degrees;
        if above >= FULL_TURN {
            above = 0.0;
        }
        if shortest_arc(angle, above).abs() < shortest_arc(below, angle).abs() {
            Some(above)
        } else {
            Some(below)
        }
    }
}

impl Default for StepQuantizer {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
#[path = "quantizer_test.rs"]
mod tests;
