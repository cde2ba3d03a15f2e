//! Arena containment
//!
//! Free balls bounce off the walls losslessly. The cue never bounces: once it
//! is entirely outside the arena it is put back at its origin.

use glam::Vec2;

use super::body::Body;

/// Which velocity components were flipped by a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Flip each velocity component whose axis has the ball touching or past a wall.
///
/// Axes are checked independently, so a ball in a corner flips both.
pub fn reflect_walls(body: &mut Body, arena: Vec2) -> WallHit {
    let r = body.radius();
    let hit = WallHit {
        x: body.pos.x + r >= arena.x || body.pos.x - r <= 0.0,
        y: body.pos.y + r >= arena.y || body.pos.y - r <= 0.0,
    };
    if hit.x {
        body.vel.x = -body.vel.x;
    }
    if hit.y {
        body.vel.y = -body.vel.y;
    }
    hit
}

/// True once the whole ball has left the arena.
///
/// The bottom edge is only considered when `check_bottom` is set.
pub fn fully_outside(body: &Body, arena: Vec2, check_bottom: bool) -> bool {
    let r = body.radius();
    let Vec2 { x, y } = body.pos;
    x - r > arena.x || x + r < 0.0 || y + r < 0.0 || (check_bottom && y - r > arena.y)
}

/// Reset the cue to its origin if it has left the arena. Returns true on reset.
pub fn contain_cue(cue: &mut Body, arena: Vec2, check_bottom: bool) -> bool {
    if cue.is_cue() && fully_outside(cue, arena, check_bottom) {
        cue.reset_to_origin();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::colors;

    const ARENA: Vec2 = Vec2::new(500.0, 500.0);

    fn free_at(x: f32, y: f32, vel: Vec2) -> Body {
        Body::free(Vec2::new(x, y), 10.0, colors::FREE_BALL_FIXED).with_vel(vel)
    }

    #[test]
    fn test_right_wall_flips_vx() {
        let mut ball = free_at(490.0, 250.0, Vec2::new(3.0, 1.0));
        let hit = reflect_walls(&mut ball, ARENA);
        assert_eq!(hit, WallHit { x: true, y: false });
        assert_eq!(ball.vel, Vec2::new(-3.0, 1.0));
    }

    #[test]
    fn test_left_wall_touching_counts() {
        // Extent exactly at 0
        let mut ball = free_at(10.0, 250.0, Vec2::new(-2.0, 0.0));
        assert!(reflect_walls(&mut ball, ARENA).x);
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut ball = free_at(495.0, 3.0, Vec2::new(1.5, -2.5));
        let hit = reflect_walls(&mut ball, ARENA);
        assert!(hit.x && hit.y);
        assert_eq!(ball.vel, Vec2::new(-1.5, 2.5));
    }

    #[test]
    fn test_interior_ball_untouched() {
        let mut ball = free_at(250.0, 250.0, Vec2::new(4.0, 4.0));
        assert!(!reflect_walls(&mut ball, ARENA).any());
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_cue_reset_past_right_edge() {
        let mut cue = Body::cue(Vec2::new(250.0, 300.0), 10.0).with_vel(Vec2::new(5.0, 0.0));
        cue.pos = Vec2::new(511.0, 300.0);
        assert!(contain_cue(&mut cue, ARENA, true));
        assert_eq!(cue.pos, Vec2::new(250.0, 300.0));
        assert_eq!(cue.vel, Vec2::ZERO);
    }

    #[test]
    fn test_cue_partially_outside_is_kept() {
        let mut cue = Body::cue(Vec2::new(250.0, 300.0), 10.0).with_vel(Vec2::new(5.0, 0.0));
        cue.pos = Vec2::new(505.0, 300.0);
        assert!(!contain_cue(&mut cue, ARENA, true));
        assert_eq!(cue.pos, Vec2::new(505.0, 300.0));
        assert_eq!(cue.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_cue_exit_each_side() {
        let cue = Body::cue(Vec2::new(250.0, 300.0), 10.0);
        for pos in [
            Vec2::new(-10.5, 250.0),
            Vec2::new(250.0, -10.5),
            Vec2::new(250.0, 510.5),
            Vec2::new(510.5, 250.0),
        ] {
            let mut c = cue.clone();
            c.pos = pos;
            assert!(fully_outside(&c, ARENA, true), "{pos:?} should be outside");
        }
    }

    #[test]
    fn test_bottom_exit_ignored_when_unchecked() {
        let mut cue = Body::cue(Vec2::new(250.0, 300.0), 10.0);
        cue.pos = Vec2::new(250.0, 600.0);
        assert!(!contain_cue(&mut cue, ARENA, false));
        assert!(contain_cue(&mut cue, ARENA, true));
    }

    #[test]
    fn test_free_ball_never_reset() {
        let mut ball = free_at(900.0, 900.0, Vec2::ZERO);
        assert!(!contain_cue(&mut ball, ARENA, true));
        assert_eq!(ball.pos, Vec2::new(900.0, 900.0));
    }
}
