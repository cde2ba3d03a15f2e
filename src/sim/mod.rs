//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One step per displayed frame, velocities in units per frame
//! - Seeded RNG only, used once at table setup
//! - Stable iteration order (ball index)
//! - No rendering or platform dependencies

pub mod aim;
pub mod body;
pub mod boundary;
pub mod collision;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use aim::{AimPhase, PointerState};
pub use body::{Body, BodyKind, Color, RenderAttributes, Tint};
pub use boundary::{WallHit, contain_cue, fully_outside, reflect_walls};
pub use collision::{CollisionStats, impact, overlap, resolve_collisions};
pub use kinematics::integrate;
pub use state::SimState;
pub use tick::{TickInput, TickReport, tick};
