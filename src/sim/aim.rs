//! Slingshot aiming
//!
//! Grab the cue, drag it away from its origin, let go: the cue flies off in
//! the opposite direction, scaled by the launch magnitude.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::is_finite_vec;

/// Aiming state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimPhase {
    Idle,
    /// Cue is held and follows the pointer
    Aiming,
}

/// Last known pointer state, in arena space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// None until the first move event
    pub pos: Option<Vec2>,
    /// Mirrors pointer capture of the cue
    pub is_dragging: bool,
}

impl PointerState {
    /// Record a pointer move. Non-finite coordinates are ignored.
    pub fn move_to(&mut self, pos: Vec2) -> bool {
        if !is_finite_vec(pos) {
            log::debug!("Ignoring non-finite pointer position {pos:?}");
            return false;
        }
        self.pos = Some(pos);
        true
    }

    pub fn phase(&self) -> AimPhase {
        if self.is_dragging {
            AimPhase::Aiming
        } else {
            AimPhase::Idle
        }
    }
}

/// Pointer down: grab the cue if the pointer is strictly within its radius.
///
/// Returns true when this press started aiming.
pub fn press(pointer: &mut PointerState, cue: &Body) -> bool {
    if pointer.is_dragging {
        return false;
    }
    let Some(pos) = pointer.pos else {
        log::debug!("Press with no pointer position");
        return false;
    };
    if cue.pos.distance(pos) < cue.radius() {
        pointer.is_dragging = true;
        log::debug!("Cue grabbed at {pos}");
        true
    } else {
        log::debug!("Press at {pos} missed the cue at {}", cue.pos);
        false
    }
}

/// While aiming, pin the cue to the pointer.
pub fn track(pointer: &PointerState, cue: &mut Body) {
    if let (true, Some(pos)) = (pointer.is_dragging, pointer.pos) {
        cue.pos = pos;
    }
}

/// Launch the cue away from its pull-back direction. Returns the new velocity.
pub fn shoot(cue: &mut Body, launch_magnitude: f32) -> Vec2 {
    let Some(origin) = cue.origin() else {
        return cue.vel;
    };
    let pull = cue.pos - origin;
    cue.vel = -pull * launch_magnitude;
    cue.vel
}

/// Pointer up or pointer leaving the surface: shoot if aiming, otherwise nothing.
pub fn release(pointer: &mut PointerState, cue: &mut Body, launch_magnitude: f32) -> Option<Vec2> {
    if !pointer.is_dragging {
        return None;
    }
    pointer.is_dragging = false;
    let vel = shoot(cue, launch_magnitude);
    log::info!("Shot fired from {} with velocity {vel}", cue.pos);
    Some(vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::colors;

    fn cue() -> Body {
        Body::cue(Vec2::new(250.0, 300.0), 10.0)
    }

    fn pointer_at(x: f32, y: f32) -> PointerState {
        PointerState {
            pos: Some(Vec2::new(x, y)),
            is_dragging: false,
        }
    }

    #[test]
    fn test_shoot_launch_vector() {
        let mut cue = cue();
        cue.pos = Vec2::new(260.0, 320.0);
        let vel = shoot(&mut cue, 0.1);
        assert!((vel.x - -1.0).abs() < 1e-5);
        assert!((vel.y - -2.0).abs() < 1e-5);
        assert_eq!(cue.vel, vel);
    }

    #[test]
    fn test_shoot_ignores_free_balls() {
        let mut ball = Body::free(Vec2::new(1.0, 1.0), 10.0, colors::FREE_BALL_FIXED)
            .with_vel(Vec2::new(2.0, 3.0));
        assert_eq!(shoot(&mut ball, 0.1), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_press_inside_radius_grabs() {
        let cue = cue();
        let mut pointer = pointer_at(255.0, 305.0);
        assert!(press(&mut pointer, &cue));
        assert_eq!(pointer.phase(), AimPhase::Aiming);
    }

    #[test]
    fn test_press_on_radius_misses() {
        let cue = cue();
        let mut pointer = pointer_at(260.0, 300.0);
        assert!(!press(&mut pointer, &cue));
        assert_eq!(pointer.phase(), AimPhase::Idle);
    }

    #[test]
    fn test_press_without_position() {
        let mut pointer = PointerState::default();
        assert!(!press(&mut pointer, &cue()));
        assert!(!pointer.is_dragging);
    }

    #[test]
    fn test_track_only_while_aiming() {
        let mut cue = cue();
        let mut pointer = pointer_at(200.0, 200.0);
        track(&pointer, &mut cue);
        assert_eq!(cue.pos, Vec2::new(250.0, 300.0));

        pointer.is_dragging = true;
        track(&pointer, &mut cue);
        assert_eq!(cue.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut cue = cue().with_vel(Vec2::new(1.0, 1.0));
        let mut pointer = pointer_at(100.0, 100.0);
        assert_eq!(release(&mut pointer, &mut cue, 0.1), None);
        assert_eq!(cue.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_full_drag_cycle() {
        let mut cue = cue();
        let mut pointer = pointer_at(250.0, 300.0);
        assert!(press(&mut pointer, &cue));

        pointer.move_to(Vec2::new(230.0, 340.0));
        track(&pointer, &mut cue);
        let vel = release(&mut pointer, &mut cue, 0.1).unwrap();

        assert!((vel.x - 2.0).abs() < 1e-5);
        assert!((vel.y - -4.0).abs() < 1e-5);
        assert_eq!(pointer.phase(), AimPhase::Idle);
    }

    #[test]
    fn test_non_finite_move_is_ignored() {
        let mut pointer = pointer_at(10.0, 10.0);
        assert!(!pointer.move_to(Vec2::new(f32::NAN, 5.0)));
        assert!(!pointer.move_to(Vec2::new(5.0, f32::INFINITY)));
        assert_eq!(pointer.pos, Some(Vec2::new(10.0, 10.0)));
    }
}
