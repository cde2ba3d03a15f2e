//! One simulation frame
//!
//! Frame order: pointer events, aiming override (then release), integration,
//! walls, collisions. Rendering happens after `tick` returns.

use glam::Vec2;

use super::aim;
use super::boundary::{contain_cue, reflect_walls};
use super::collision::{CollisionStats, resolve_collisions};
use super::state::SimState;

/// Input collected since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position in arena space
    pub pointer: Option<Vec2>,
    /// Pointer went down
    pub press: bool,
    /// Pointer went up or left the surface
    pub release: bool,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Velocity given to the cue if a shot was fired
    pub shot: Option<Vec2>,
    /// Cue left the arena and went back to its origin
    pub cue_reset: bool,
    /// Free balls that hit a wall
    pub wall_hits: u32,
    pub collisions: CollisionStats,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    let arena = state.arena();
    let config = &state.config;

    // Pointer events
    if let Some(pos) = input.pointer {
        state.pointer.move_to(pos);
    }
    if input.press {
        aim::press(&mut state.pointer, &state.cue);
    }

    // Held cue follows the pointer and skips its own motion this frame
    let held = state.pointer.is_dragging;
    aim::track(&state.pointer, &mut state.cue);
    if input.release {
        report.shot = aim::release(&mut state.pointer, &mut state.cue, config.launch_magnitude);
    }

    // Integrate
    let damping = config.damping();
    for ball in &mut state.balls {
        ball.integrate(damping);
    }
    if !held || report.shot.is_some() {
        state.cue.integrate(None);
    }

    // Walls
    if config.has_wall_reflection() {
        for ball in &mut state.balls {
            if reflect_walls(ball, arena).any() {
                report.wall_hits += 1;
            }
        }
    }
    if contain_cue(&mut state.cue, arena, config.checks_bottom_exit()) {
        log::info!("Cue left the table, back to origin");
        report.cue_reset = true;
    }

    // Collisions
    if config.has_collisions() {
        report.collisions = resolve_collisions(&state.cue, &mut state.balls, config.impact_divisor);
        if report.collisions.total() > 0 {
            log::trace!(
                "Frame {}: {} cue hits, {} pair hits",
                state.frame,
                report.collisions.cue_hits,
                report.collisions.pair_hits
            );
        }
    }

    state.frame += 1;
    report
}
