//! Body model
//!
//! Cue and free balls share one shape; the cue additionally carries the rest
//! position it snaps back to.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::integrate;

/// Which kind of ball this is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Player-controlled ball with a rest position
    Cue { origin: Vec2 },
    /// Ball that only moves when something hits it
    Free,
}

/// Fill color of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// Fully saturated, half lightness, opaque (hue in degrees)
    Hsla { hue: f32 },
    /// Straight RGBA, 0-1 per channel
    Rgba([f32; 4]),
}

/// Fixed colors
pub mod colors {
    use super::Color;

    pub const CUE: Color = Color::Rgba([1.0, 1.0, 1.0, 1.0]);
    /// Free balls on the simplified table
    pub const FREE_BALL_FIXED: Color = Color::Rgba([0.0, 0.75, 1.0, 1.0]);
    const STICK_GREY: f32 = 119.0 / 255.0;
    /// Cue stick stroke (#777)
    pub const CUE_STICK: Color = Color::Rgba([STICK_GREY, STICK_GREY, STICK_GREY, 1.0]);
}

impl Color {
    /// Hue for a horizontal position, sweeping 0-360 across the arena
    pub fn hue_for_x(x: f32, arena_width: f32) -> Self {
        Color::Hsla {
            hue: x / arena_width * 360.0,
        }
    }

    /// CSS color string for a 2D canvas
    pub fn to_css(&self) -> String {
        match self {
            Color::Hsla { hue } => format!("hsla({hue}, 100%, 50%, 1)"),
            Color::Rgba([r, g, b, a]) => format!(
                "rgba({}, {}, {}, {a})",
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
            ),
        }
    }

    /// RGBA, 0-1 per channel
    pub fn to_rgba(&self) -> [f32; 4] {
        match *self {
            Color::Hsla { hue } => {
                let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
                [r, g, b, 1.0]
            }
            Color::Rgba(rgba) => rgba,
        }
    }
}

/// Standard HSL to RGB; hue wraps, saturation/lightness are clamped
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    (r + m, g + m, b + m)
}

/// How a body's fill color is decided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tint {
    /// Same color every frame
    Fixed(Color),
    /// Hue sweeps with the x position across an arena of this width
    HueByX { arena_width: f32 },
}

impl From<Color> for Tint {
    fn from(color: Color) -> Self {
        Tint::Fixed(color)
    }
}

/// What the render adapter needs to draw a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderAttributes {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A circular ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    tint: Tint,
}

impl Body {
    /// Cue ball resting at its origin
    pub fn cue(origin: Vec2, radius: f32) -> Self {
        Self {
            kind: BodyKind::Cue { origin },
            pos: origin,
            vel: Vec2::ZERO,
            radius,
            tint: Tint::Fixed(colors::CUE),
        }
    }

    /// Stationary free ball
    pub fn free(pos: Vec2, radius: f32, tint: impl Into<Tint>) -> Self {
        Self {
            kind: BodyKind::Free,
            pos,
            vel: Vec2::ZERO,
            radius,
            tint: tint.into(),
        }
    }

    /// Builder-style velocity override
    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Fixed for the body's lifetime
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Cue rest position (None for free balls)
    pub fn origin(&self) -> Option<Vec2> {
        match self.kind {
            BodyKind::Cue { origin } => Some(origin),
            BodyKind::Free => None,
        }
    }

    pub fn is_cue(&self) -> bool {
        matches!(self.kind, BodyKind::Cue { .. })
    }

    /// Move by one frame of velocity
    pub fn integrate(&mut self, damping: Option<f32>) {
        (self.pos, self.vel) = integrate(self.pos, self.vel, damping);
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub(crate) fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    /// Fill color for the current position
    pub fn color(&self) -> Color {
        match self.tint {
            Tint::Fixed(color) => color,
            Tint::HueByX { arena_width } => Color::hue_for_x(self.pos.x, arena_width),
        }
    }

    /// Stop and return to the origin; no-op for free balls
    pub fn reset_to_origin(&mut self) {
        if let BodyKind::Cue { origin } = self.kind {
            self.vel = Vec2::ZERO;
            self.pos = origin;
        }
    }

    /// Current speed (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn render_attributes(&self) -> RenderAttributes {
        RenderAttributes {
            pos: self.pos,
            radius: self.radius,
            color: self.color(),
        }
    }
}
