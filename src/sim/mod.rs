//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per display refresh, no wall-clock time
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::{avatar_hits_obstacle, first_collision};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{GamePhase, GameState, PressOutcome};
pub use tick::{TickEvents, TickInput, autopilot_wants_flap, resolve, step, tick};
