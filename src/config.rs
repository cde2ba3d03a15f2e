//! Simulation configuration
//!
//! Fixed at start-up; the simulation state keeps its own copy and nothing
//! changes it while frames are running.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Table configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Colored balls that bounce off walls, slow down and knock into each other
    #[default]
    Full,
    /// Fixed-color balls in the top half that never interact with anything
    Simplified,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Simplified => "simplified",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(Variant::Full),
            "simplified" | "simple" => Some(Variant::Simplified),
            _ => None,
        }
    }

    /// Free ball count used when none is configured
    pub fn default_ball_count(&self) -> usize {
        match self {
            Variant::Full => MAX_BALLS,
            Variant::Simplified => MAX_BALLS_SIMPLIFIED,
        }
    }
}

/// Start-up parameters for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartialConfig")]
pub struct SimConfig {
    pub variant: Variant,

    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Bodies ===
    /// Number of free balls (fixed for the whole run)
    pub max_balls: usize,
    /// Radius of every body, cue included
    pub radius: f32,
    /// Cue rest position
    pub origin: Vec2,

    // === Tuning ===
    /// Per-frame velocity multiplier for free balls (full variant only)
    pub friction: f32,
    /// Slingshot scale applied to the pull-back vector
    pub launch_magnitude: f32,
    /// Divisor applied to the source speed on impact
    pub impact_divisor: f32,

    /// Seed for free ball placement
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Full,

            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            max_balls: MAX_BALLS,
            radius: BALL_RADIUS,
            origin: Vec2::new(CUE_ORIGIN_X, CUE_ORIGIN_Y),

            friction: FRICTION,
            launch_magnitude: LAUNCH_MAGNITUDE,
            impact_divisor: IMPACT_DIVISOR,

            seed: 0,
        }
    }
}

/// Config as written on disk: every field optional, gaps filled from the
/// chosen variant's defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialConfig {
    variant: Variant,
    width: Option<f32>,
    height: Option<f32>,
    max_balls: Option<usize>,
    radius: Option<f32>,
    origin: Option<Vec2>,
    friction: Option<f32>,
    launch_magnitude: Option<f32>,
    impact_divisor: Option<f32>,
    seed: Option<u64>,
}

impl From<PartialConfig> for SimConfig {
    fn from(raw: PartialConfig) -> Self {
        let base = SimConfig::from_variant(raw.variant);
        Self {
            variant: raw.variant,
            width: raw.width.unwrap_or(base.width),
            height: raw.height.unwrap_or(base.height),
            max_balls: raw.max_balls.unwrap_or(base.max_balls),
            radius: raw.radius.unwrap_or(base.radius),
            origin: raw.origin.unwrap_or(base.origin),
            friction: raw.friction.unwrap_or(base.friction),
            launch_magnitude: raw.launch_magnitude.unwrap_or(base.launch_magnitude),
            impact_divisor: raw.impact_divisor.unwrap_or(base.impact_divisor),
            seed: raw.seed.unwrap_or(base.seed),
        }
    }
}

impl SimConfig {
    /// Defaults for the simplified table
    pub fn simplified() -> Self {
        Self::from_variant(Variant::Simplified)
    }

    /// Defaults for a variant (ball count follows the variant)
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            max_balls: variant.default_ball_count(),
            ..Self::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a JSON config; missing fields take the variant's defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("radius", self.radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if !crate::is_finite_vec(self.origin) {
            return Err(ConfigError::InvalidOrigin);
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !self.launch_magnitude.is_finite() {
            return Err(ConfigError::InvalidLaunch(self.launch_magnitude));
        }
        if !self.impact_divisor.is_finite() || self.impact_divisor == 0.0 {
            return Err(ConfigError::InvalidDivisor(self.impact_divisor));
        }
        if self.max_balls > MAX_BALLS_LIMIT {
            return Err(ConfigError::TooManyBalls {
                requested: self.max_balls,
                limit: MAX_BALLS_LIMIT,
            });
        }
        Ok(())
    }

    /// Whether balls knock into each other and get hit by the cue
    pub fn has_collisions(&self) -> bool {
        self.variant == Variant::Full
    }

    /// Whether free balls bounce off the arena walls
    pub fn has_wall_reflection(&self) -> bool {
        self.variant == Variant::Full
    }

    /// Friction applied to free balls each frame, if any
    pub fn damping(&self) -> Option<f32> {
        match self.variant {
            Variant::Full => Some(self.friction),
            Variant::Simplified => None,
        }
    }

    /// Whether free ball hue follows its x position
    pub fn hue_tracks_position(&self) -> bool {
        self.variant == Variant::Full
    }

    /// Whether the cue is reset when it leaves through the bottom edge
    pub fn checks_bottom_exit(&self) -> bool {
        self.variant == Variant::Full
    }

    /// Vertical extent used when spawning free balls
    pub fn spawn_height(&self) -> f32 {
        match self.variant {
            Variant::Full => self.height,
            Variant::Simplified => self.height / 2.0,
        }
    }
}
