//! Gapflap - a single-screen flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, obstacles, game state)
//! - `renderer`: Canvas drawing as a pure read of the simulation
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing configuration and its persistence

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (canvas pixels)
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Downward acceleration added to the avatar velocity every tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity the avatar is set to on a flap (negative is up)
    pub const IMPULSE: f32 = -8.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 50.0;
    pub const AVATAR_START_Y: f32 = 150.0;
    pub const AVATAR_WIDTH: f32 = 20.0;
    pub const AVATAR_HEIGHT: f32 = 20.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const GAP_SIZE: f32 = 100.0;
    /// Leftward scroll per tick
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Ticks between obstacle spawns (first spawn on tick 0)
    pub const SPAWN_INTERVAL: u64 = 90;

    /// Idle prompt placement
    pub const PROMPT_X: f32 = 50.0;
    pub const PROMPT_Y: f32 = SCREEN_HEIGHT / 2.0;
}
