// ============================================================================
// ANGLE HELPERS
// ============================================================================

/// A position in the knob's local frame. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a square knob of the given width.
    pub fn center_of(width: f64) -> Self {
        Self::new(width / 2.0, width / 2.0)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

pub const FULL_TURN: f64 = 360.0;

/// Angle of `point` around `center`, in degrees, as returned by `atan2`
/// (range `(-180, 180]`). With `y` pointing down, positive is clockwise.
pub fn touch_angle(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dy.atan2(dx).to_degrees()
}

/// Wraps any angle into `[0, 360)`. NaN stays NaN.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Signed rotation from `from` to `to` along the shorter way round the
/// circle, in `[-180, 180)`.
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from + 180.0) - 180.0
}

/// Direction of a screen-space unit vector for an indicator angle measured
/// clockwise from twelve o'clock.
pub fn dial_direction(angle: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (radians.sin(), -radians.cos())
}

#[cfg(test)]
#[path = "angle_test.rs"]
mod tests;
