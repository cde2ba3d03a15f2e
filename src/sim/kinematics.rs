//! Per-frame integration
//!
//! Velocities are in arena units per frame, so there is no dt.

use glam::Vec2;

/// Advance a position by one frame of velocity, then apply optional damping.
///
/// Returns the new `(position, velocity)`.
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, damping: Option<f32>) -> (Vec2, Vec2) {
    let pos = pos + vel;
    let vel = match damping {
        Some(friction) => vel * friction,
        None => vel,
    };
    (pos, vel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_without_damping() {
        let (pos, vel) = integrate(Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0), None);
        assert_eq!(pos, Vec2::new(4.0, 1.0));
        assert_eq!(vel, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_damping_applies_after_move() {
        let (pos, vel) = integrate(Vec2::ZERO, Vec2::new(10.0, 10.0), Some(0.5));
        // Position uses the undamped velocity
        assert_eq!(pos, Vec2::new(10.0, 10.0));
        assert_eq!(vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_damping_converges_monotonically() {
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(10.0, 10.0);
        let mut last = vel.length();
        for _ in 0..100 {
            (pos, vel) = integrate(pos, vel, Some(0.99));
            let speed = vel.length();
            assert!(speed < last);
            last = speed;
        }
        assert!(pos.is_finite());
        // 0.99^100 ≈ 0.366
        assert!((last - 10.0f32.hypot(10.0) * 0.99f32.powi(100)).abs() < 1e-3);
    }
}
