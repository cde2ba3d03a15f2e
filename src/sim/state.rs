//! Simulation state
//!
//! Everything one frame reads and writes. No globals: the frame driver owns a
//! `SimState` and hands it to [`tick`](super::tick) once per refresh.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::{AimPhase, PointerState};
use super::body::{Body, Tint, colors};
use crate::config::SimConfig;
use crate::error::ConfigError;

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Start-up configuration
    pub config: SimConfig,
    /// Seed used to place the free balls
    pub rng_state: RngState,
    /// Frames advanced so far
    pub frame: u64,
    /// The player's ball
    pub cue: Body,
    /// Free balls; count is fixed for the run
    pub balls: Vec<Body>,
    /// Pointer as last reported by the input collaborator
    pub pointer: PointerState,
}

impl SimState {
    /// Build a table from config: cue at its origin, free balls scattered by seed.
    ///
    /// Expects a config that passed [`SimConfig::validate`]; use
    /// [`SimState::try_new`] for configs assembled by hand.
    pub fn new(config: SimConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        let rng_state = RngState::new(config.seed);
        let mut rng = rng_state.to_rng();

        let spawn_height = config.spawn_height();
        let balls: Vec<Body> = (0..config.max_balls)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0.0..config.width),
                    rng.random_range(0.0..spawn_height),
                );
                Body::free(pos, config.radius, free_tint(&config))
            })
            .collect();

        log::info!(
            "New {} table: {} balls, seed {}",
            config.variant.as_str(),
            balls.len(),
            config.seed
        );

        let cue = Body::cue(config.origin, config.radius);
        Self::assemble(config, rng_state, cue, balls)
    }

    /// Validate `config`, then build the table
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build a table from explicit bodies (scripted scenes, tests).
    ///
    /// Free balls are recolored to follow the table's variant.
    pub fn with_bodies(config: SimConfig, cue: Body, mut balls: Vec<Body>) -> Self {
        let tint = free_tint(&config);
        for ball in &mut balls {
            ball.set_tint(tint);
        }
        let rng_state = RngState::new(config.seed);
        Self::assemble(config, rng_state, cue, balls)
    }

    fn assemble(config: SimConfig, rng_state: RngState, cue: Body, balls: Vec<Body>) -> Self {
        Self {
            config,
            rng_state,
            frame: 0,
            cue,
            balls,
            pointer: PointerState::default(),
        }
    }

    /// Arena extent as a vector (width, height)
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    pub fn aim_phase(&self) -> AimPhase {
        self.pointer.phase()
    }

    /// Total kinetic "speed" of the table, handy for settling checks
    pub fn total_speed(&self) -> f32 {
        self.cue.speed() + self.balls.iter().map(Body::speed).sum::<f32>()
    }
}

fn free_tint(config: &SimConfig) -> Tint {
    if config.hue_tracks_position() {
        Tint::HueByX {
            arena_width: config.width,
        }
    } else {
        Tint::Fixed(colors::FREE_BALL_FIXED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::sim::body::Color;

    #[test]
    fn test_new_full_table() {
        let state = SimState::new(SimConfig::default().with_seed(7));
        assert_eq!(state.balls.len(), 30);
        assert_eq!(state.cue.pos, Vec2::new(250.0, 300.0));
        assert_eq!(state.frame, 0);
        assert_eq!(state.aim_phase(), AimPhase::Idle);
        for ball in &state.balls {
            assert!((0.0..500.0).contains(&ball.pos.x));
            assert!((0.0..500.0).contains(&ball.pos.y));
            assert_eq!(ball.vel, Vec2::ZERO);
            assert_eq!(ball.color(), Color::hue_for_x(ball.pos.x, 500.0));
        }
    }

    #[test]
    fn test_simplified_spawns_in_top_half() {
        let state = SimState::new(SimConfig::simplified().with_seed(3));
        assert_eq!(state.config.variant, Variant::Simplified);
        assert_eq!(state.balls.len(), 5);
        for ball in &state.balls {
            assert!(ball.pos.y < 250.0);
            assert_eq!(ball.color(), colors::FREE_BALL_FIXED);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = SimState::new(SimConfig::default().with_seed(99));
        let b = SimState::new(SimConfig::default().with_seed(99));
        let c = SimState::new(SimConfig::default().with_seed(100));
        let pos = |s: &SimState| s.balls.iter().map(|b| b.pos).collect::<Vec<_>>();
        assert_eq!(pos(&a), pos(&b));
        assert_ne!(pos(&a), pos(&c));
    }

    #[test]
    fn test_zero_balls() {
        let config = SimConfig {
            max_balls: 0,
            ..SimConfig::default()
        };
        let state = SimState::new(config);
        assert!(state.balls.is_empty());
        assert_eq!(state.total_speed(), 0.0);
    }

    #[test]
    fn test_with_bodies_follows_variant_colors() {
        let fixed = || Body::free(Vec2::new(125.0, 40.0), 10.0, colors::FREE_BALL_FIXED);

        let full = SimConfig::default();
        let state = SimState::with_bodies(full.clone(), Body::cue(full.origin, 10.0), vec![fixed()]);
        assert_eq!(state.balls[0].color(), Color::Hsla { hue: 90.0 });

        let simple = SimConfig::simplified();
        let hued = Body::free(Vec2::new(125.0, 40.0), 10.0, Tint::HueByX { arena_width: 500.0 });
        let state = SimState::with_bodies(simple, Body::cue(full.origin, 10.0), vec![hued]);
        assert_eq!(state.balls[0].color(), colors::FREE_BALL_FIXED);
    }

    #[test]
    fn test_try_new_rejects_unvalidated_config() {
        let config = SimConfig {
            width: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            SimState::try_new(config),
            Err(ConfigError::InvalidDimension { name: "width", .. })
        ));
        assert_eq!(SimState::try_new(SimConfig::simplified()).unwrap().balls.len(), 5);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let state = SimState::new(SimConfig::default().with_seed(5));
        let json = serde_json::to_string(&state).unwrap();
        let restored: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.balls.len(), state.balls.len());
        assert_eq!(restored.cue.pos, state.cue.pos);
        assert_eq!(restored.config, state.config);
    }
}
