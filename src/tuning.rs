//! Data-driven game balance
//!
//! Every physical constant the simulation reads comes through `Tuning`, so a
//! JSON override can reshape the game without touching code. The defaults
//! reproduce the classic feel exactly.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Per-tick velocity increment
    pub gravity: f32,
    /// Velocity override applied on flap
    pub impulse: f32,
    pub avatar_x: f32,
    pub avatar_start_y: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub obstacle_width: f32,
    pub gap_size: f32,
    /// Per-tick leftward scroll
    pub obstacle_speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: GRAVITY,
            impulse: IMPULSE,
            avatar_x: AVATAR_X,
            avatar_start_y: AVATAR_START_Y,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl Tuning {
    /// Lowest y the avatar may occupy (its top edge resting on the floor)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.avatar_height
    }

    /// Exclusive upper bound for a gap-top draw
    #[inline]
    pub fn gap_top_range(&self) -> f32 {
        self.screen_height - self.gap_size
    }

    /// Check that the values describe a playable game.
    ///
    /// Returns a human-readable reason for the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.gap_size <= 0.0 || self.gap_size >= self.screen_height {
            return Err(format!(
                "gap_size {} must be in (0, screen_height {})",
                self.gap_size, self.screen_height
            ));
        }
        if self.avatar_width <= 0.0
            || self.avatar_height <= 0.0
            || self.avatar_width > self.screen_width
            || self.avatar_height > self.screen_height
        {
            return Err(format!(
                "avatar {}x{} does not fit the screen",
                self.avatar_width, self.avatar_height
            ));
        }
        if !(0.0..=self.floor_y()).contains(&self.avatar_start_y) {
            return Err(format!(
                "avatar_start_y {} outside [0, {}]",
                self.avatar_start_y,
                self.floor_y()
            ));
        }
        if self.obstacle_width <= 0.0 {
            return Err(format!("obstacle_width {} must be positive", self.obstacle_width));
        }
        // Obstacles must strictly move left or they never retire
        if self.obstacle_speed <= 0.0 {
            return Err(format!("obstacle_speed {} must be positive", self.obstacle_speed));
        }
        if self.spawn_interval == 0 {
            return Err("spawn_interval must be at least 1 tick".to_string());
        }
        Ok(())
    }
}
