//! Cue Toy - a cue-ball physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation kernel (bodies, walls, collisions, aiming)
//! - `renderer`: Render adapter contract and a vertex-building sink
//! - `config`: Start-up configuration (arena, body counts, tuning constants)
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{SimConfig, Variant};
pub use error::ConfigError;

use glam::Vec2;

/// Default simulation constants
pub mod consts {
    /// Arena dimensions (arena space units)
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Free ball count for the full table
    pub const MAX_BALLS: usize = 30;
    /// Free ball count for the simplified table
    pub const MAX_BALLS_SIMPLIFIED: usize = 5;
    /// Upper bound accepted from configuration (the pair scan is O(n²))
    pub const MAX_BALLS_LIMIT: usize = 1024;

    /// Radius shared by every body
    pub const BALL_RADIUS: f32 = 10.0;

    /// Cue rest position
    pub const CUE_ORIGIN_X: f32 = 250.0;
    pub const CUE_ORIGIN_Y: f32 = 300.0;

    /// Per-frame velocity multiplier for free balls (rolling friction)
    pub const FRICTION: f32 = 0.99;
    /// Slingshot scale: launch velocity = -pull * LAUNCH_MAGNITUDE
    pub const LAUNCH_MAGNITUDE: f32 = 0.1;
    /// Impact damping: target gains source speed / IMPACT_DIVISOR
    pub const IMPACT_DIVISOR: f32 = 5.0;
}

/// Unit vector for a bearing in radians
#[inline]
pub fn direction(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Bearing of a displacement, `atan2(dy, dx)`; zero for a zero vector
#[inline]
pub fn bearing(delta: Vec2) -> f32 {
    delta.y.atan2(delta.x)
}

/// True when both components are finite
#[inline]
pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
