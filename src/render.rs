// ============================================================================
// KNOB RENDERING
// ============================================================================

use crate::angle::{dial_direction, normalize_degrees, shortest_arc, Point};
use crate::config::{Color, KnobConfig};
use crate::quantizer::StepQuantizer;

// ============================================================================
// LAYOUT
// ============================================================================

/// Where the knob sits inside the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KnobLayout {
    pub origin: Point,
    pub width: f64,
}

impl KnobLayout {
    /// Centers a knob sized by `config.fitted_width` in a `width` x `height`
    /// surface.
    pub fn fit(config: &KnobConfig, width: usize, height: usize) -> Self {
        let knob_width = config.fitted_width(width, height);
        Self {
            origin: Point::new(
                (width as f64 - knob_width) / 2.0,
                (height as f64 - knob_width) / 2.0,
            ),
            width: knob_width,
        }
    }

    /// Converts a surface position into the knob's local frame.
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.origin.x, point.y - self.origin.y)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.width / 2.0,
        )
    }

    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }
}

// ============================================================================
// NEEDLE ANIMATION
// ============================================================================

/// Displayed indicator angle, easing toward the knob angle along the
/// shorter way round so the 359° -> 0° seam never animates backwards
/// through the whole dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Needle {
    pub angle: f64,
    lerp_factor: f64,
}

impl Needle {
    pub fn new(angle: f64, lerp_factor: f64) -> Self {
        Self {
            angle: normalize_degrees(angle),
            lerp_factor: lerp_factor.clamp(0.0, 1.0),
        }
    }

    pub fn update(&mut self, target: f64) {
        let arc = shortest_arc(self.angle, target);
        self.angle = if arc.abs() < 0.01 {
            normalize_degrees(target)
        } else {
            normalize_degrees(self.angle + arc * self.lerp_factor)
        };
    }
}

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Clear(Color),
    Disc {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: Color,
    },
}

/// What the host wants drawn this frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameView {
    pub needle_angle: f64,
    pub knob_angle: f64,
    /// 1.0 right after a notch crossing, fading to 0.0.
    pub pulse: f64,
}

pub(crate) struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn build(
        layout: &KnobLayout,
        quantizer: &StepQuantizer,
        view: FrameView,
        config: &KnobConfig,
    ) -> Self {
        let mut scene = Scene {
            commands: Vec::new(),
        };
        let center = layout.center();
        let radius = layout.radius();
        let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);

        scene.add_command(DrawCommand::Clear(config.background_color));

        // Notch marks outside the knob
        let highlighted = quantizer.nearest_snap_point(view.knob_angle);
        let dim = config
            .accent_color
            .blend(config.background_color, config.notch_alpha);
        let notch_inner = radius + f64::from(config.notch_offset);
        let notch_outer = notch_inner + f64::from(config.notch_length);
        for point in quantizer.snap_points() {
            let color = if highlighted == Some(point) {
                config.accent_color
            } else {
                dim
            };
            scene.add_radial_line(
                center,
                point,
                notch_inner,
                notch_outer,
                config.notch_thickness,
                color,
            );
        }

        // Rim flashes toward the accent color on each notch
        let rim = config
            .accent_color
            .blend(config.rim_color, view.pulse.clamp(0.0, 1.0) * 0.6);
        scene.add_command(DrawCommand::Disc {
            cx,
            cy,
            radius: radius.round() as i32 + config.rim_width,
            color: rim,
        });
        scene.add_command(DrawCommand::Disc {
            cx,
            cy,
            radius: radius.round() as i32,
            color: config.knob_color,
        });

        let indicator_outer = radius - f64::from(config.indicator_inset);
        let indicator_inner = indicator_outer - f64::from(config.indicator_length);
        scene.add_radial_line(
            center,
            view.needle_angle,
            indicator_inner,
            indicator_outer,
            config.indicator_width,
            config.accent_color,
        );

        scene
    }

    fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn add_radial_line(
        &mut self,
        center: Point,
        angle: f64,
        inner: f64,
        outer: f64,
        thickness: f32,
        color: Color,
    ) {
        let (dx, dy) = dial_direction(angle);
        self.add_command(DrawCommand::Line {
            x0: (center.x + dx * inner).round() as i32,
            y0: (center.y + dy * inner).round() as i32,
            x1: (center.x + dx * outer).round() as i32,
            y1: (center.y + dy * outer).round() as i32,
            thickness,
            color,
        });
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Disc {
                    cx,
                    cy,
                    radius,
                    color,
                } => draw_disc(canvas, *cx, *cy, *radius, *color),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => draw_thick_line_aa(canvas, *x0, *y0, *x1, *y1, *thickness, *color),
            }
        }
    }
}

// ============================================================================
// CORE DATA TYPES
// ============================================================================

pub(crate) struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let Some(pixel) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let below = Color::new(pixel[0], pixel[1], pixel[2]);
        let out = color.blend(below, f64::from(alpha));
        pixel.copy_from_slice(&[out.r, out.g, out.b, 0xff]);
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn draw_thick_line_aa(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    color: Color,
) {
    let pad = thickness.ceil() as i32 + 1;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(f32::EPSILON);
    for y in (y0.min(y1) - pad)..=(y0.max(y1) + pad) {
        for x in (x0.min(x1) - pad)..=(x0.max(x1) + pad) {
            let px = (x - x0) as f32;
            let py = (y - y0) as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                canvas.blend_pixel(x, y, color, aa);
            }
        }
    }
}

fn draw_disc(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Color) {
    for y in -radius - 1..=radius + 1 {
        for x in -radius - 1..=radius + 1 {
            let dist = f64::from(x * x + y * y).sqrt();
            let aa = (1.0 - (dist - f64::from(radius)).max(0.0)).min(1.0);
            if aa > 0.0 {
                canvas.blend_pixel(cx + x, cy + y, color, aa as f32);
            }
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
