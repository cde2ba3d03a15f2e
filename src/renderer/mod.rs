//! Render adapter contract
//!
//! The simulation never draws. After each frame the driver walks the state
//! through [`render_frame`] into whatever [`RenderSink`] it owns: a 2D canvas in
//! the browser, or [`VertexSink`] for a triangle-list backend.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::body::colors;
use crate::sim::{Color, SimState};

/// Triangles per disc
pub const DISC_SEGMENTS: u32 = 24;
/// Cue stick stroke width
pub const STICK_WIDTH: f32 = 1.0;

/// Drawing primitives the simulation needs
pub trait RenderSink {
    /// Filled circle
    fn disc(&mut self, center: Vec2, radius: f32, color: Color);
    /// Straight stroke
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// Draw one frame: free balls, then the cue stick (origin to cue), then the cue.
pub fn render_frame<S: RenderSink>(state: &SimState, sink: &mut S) {
    for ball in &state.balls {
        let attrs = ball.render_attributes();
        sink.disc(attrs.pos, attrs.radius, attrs.color);
    }

    let cue = state.cue.render_attributes();
    if let Some(origin) = state.cue.origin() {
        sink.line(origin, cue.pos, colors::CUE_STICK);
    }
    sink.disc(cue.pos, cue.radius, cue.color);
}

/// Collects a frame as a triangle list
#[derive(Debug, Default)]
pub struct VertexSink {
    pub vertices: Vec<Vertex>,
}

impl VertexSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Packed vertex buffer, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.vertices)
    }
}

impl RenderSink for VertexSink {
    fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, DISC_SEGMENTS));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices
            .extend(shapes::line(from, to, STICK_WIDTH, color));
    }
}
