use bon::Builder;

use crate::quantizer::SnapMode;

/// Color representation for knob elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix of `self` over `other`, `alpha` in `[0, 1]`.
    pub fn blend(self, other: Color, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) * alpha + f64::from(b) * (1.0 - alpha)).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Everything a knob needs: interaction settings plus the demo window's
/// look. Build with `KnobConfig::builder()`.
#[derive(Debug, Clone, Builder)]
pub struct KnobConfig {
    // Interaction
    #[builder(default = 320.0)]
    pub knob_width: f64,
    #[builder(default = 10.0)]
    pub step_degrees: f64,
    #[builder(default)]
    pub snap_mode: SnapMode,
    #[builder(default = 1.0)]
    pub min_step: f64,
    #[builder(default = 10.0)]
    pub max_step: f64,
    #[builder(default = 1.0)]
    pub step_increment: f64,

    // Window configuration
    #[builder(default = "Knob".to_string())]
    pub title: String,
    #[builder(default = 480)]
    pub window_width: usize,
    #[builder(default = 480)]
    pub window_height: usize,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
    #[builder(default = 80)]
    pub knob_margin: i32,

    // Notch marks
    #[builder(default = 15)]
    pub notch_offset: i32,
    #[builder(default = 12)]
    pub notch_length: i32,
    #[builder(default = 1.5)]
    pub notch_thickness: f32,
    #[builder(default = 0.3)]
    pub notch_alpha: f64,

    // Indicator
    #[builder(default = 20)]
    pub indicator_inset: i32,
    #[builder(default = 20)]
    pub indicator_length: i32,
    #[builder(default = 4.0)]
    pub indicator_width: f32,
    #[builder(default = 0.35)]
    pub needle_lerp_factor: f64,

    // Step feedback
    #[builder(default = 6)]
    pub pulse_frames: u32,
    #[builder(default = 5)]
    pub rim_width: i32,

    // Colors
    #[builder(default = Color::new(0x25, 0x25, 0x25))]
    pub background_color: Color,
    #[builder(default = Color::new(0x21, 0x21, 0x21))]
    pub knob_color: Color,
    #[builder(default = Color::new(0x00, 0x00, 0x00))]
    pub rim_color: Color,
    #[builder(default = Color::new(0xff, 0xd6, 0x0a))]
    pub accent_color: Color,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl KnobConfig {
    /// Knob width that fits a window, keeping `knob_margin` on each side.
    pub fn fitted_width(&self, width: usize, height: usize) -> f64 {
        let side = width.min(height) as f64 - 2.0 * f64::from(self.knob_margin);
        side.max(1.0)
    }

    /// Steps `current` by `notches` increments, kept within
    /// `min_step..=max_step`.
    pub fn nudge_step(&self, current: f64, notches: i32) -> f64 {
        (current + f64::from(notches) * self.step_increment).clamp(self.min_step, self.max_step)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
