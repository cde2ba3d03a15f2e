//! Ball-ball collision detection and impact transfer
//!
//! Impacts are one-directional: the target gains a kick along the line of
//! centers scaled by the source's speed, while the source keeps its velocity.
//! Nothing is conserved. Free ball pairs are visited from both sides, so an
//! overlapping pair kicks each ball once per frame.

use glam::Vec2;

use super::body::Body;
use crate::{bearing, direction};

/// Number of impacts applied in one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionStats {
    /// Free balls hit by the cue
    pub cue_hits: u32,
    /// Ordered free-free impacts (each overlapping pair counts twice)
    pub pair_hits: u32,
}

impl CollisionStats {
    pub fn total(&self) -> u32 {
        self.cue_hits + self.pair_hits
    }
}

/// Overlap test between two circles.
///
/// Returns the bearing from `source` to `target` when their centers are
/// strictly closer than the sum of radii. Coincident centers give bearing 0.
#[inline]
pub fn overlap(
    target_pos: Vec2,
    target_radius: f32,
    source_pos: Vec2,
    source_radius: f32,
) -> Option<f32> {
    let delta = target_pos - source_pos;
    if delta.length() < target_radius + source_radius {
        Some(bearing(delta))
    } else {
        None
    }
}

/// Kick `target` along `angle` by the source speed over `divisor`.
#[inline]
fn kick(target: &mut Body, angle: f32, source_speed: f32, divisor: f32) {
    target.vel += direction(angle) * source_speed / divisor;
}

/// Apply an impact from `source` onto `target`. `source` is left untouched.
pub fn impact(angle: f32, target: &mut Body, source: &Body, divisor: f32) {
    kick(target, angle, source.speed(), divisor);
}

/// Run the cue pass, then the free-free pass.
///
/// Pairs are visited `i` ascending outer, `j` ascending inner, skipping
/// `i == j`; each impact sees velocities already changed earlier in the pass.
pub fn resolve_collisions(cue: &Body, free: &mut [Body], divisor: f32) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for ball in free.iter_mut() {
        if let Some(theta) = overlap(ball.pos, ball.radius(), cue.pos, cue.radius()) {
            impact(theta, ball, cue, divisor);
            stats.cue_hits += 1;
        }
    }

    for i in 0..free.len() {
        for j in 0..free.len() {
            if i == j {
                continue;
            }
            let (source_pos, source_radius, source_speed) =
                (free[j].pos, free[j].radius(), free[j].speed());
            let target = &mut free[i];
            if let Some(theta) = overlap(target.pos, target.radius(), source_pos, source_radius) {
                kick(target, theta, source_speed, divisor);
                stats.pair_hits += 1;
            }
        }
    }

    stats
}
