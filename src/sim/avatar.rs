//! Avatar physics
//!
//! The avatar only moves vertically: gravity accumulates into velocity every
//! tick, a flap overrides velocity outright, and the screen edges clamp it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The falling, flapping player object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels/tick (positive is down)
    pub velocity: f32,
}

impl Avatar {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.avatar_start_y),
            size: Vec2::new(tuning.avatar_width, tuning.avatar_height),
            velocity: 0.0,
        }
    }

    /// Put the avatar back at its spawn point, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos.y = tuning.avatar_start_y;
        self.velocity = 0.0;
    }

    /// Integrate one tick of gravity, then clamp to the screen.
    ///
    /// Hitting the floor or the ceiling zeroes velocity on that same tick.
    pub fn update(&mut self, tuning: &Tuning) {
        self.velocity += tuning.gravity;
        self.pos.y += self.velocity;

        if self.pos.y + self.size.y > tuning.screen_height {
            self.pos.y = tuning.screen_height - self.size.y;
            self.velocity = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        }
    }

    /// Flap: replace the current velocity with the upward impulse
    #[inline]
    pub fn impulse(&mut self, tuning: &Tuning) {
        self.velocity = tuning.impulse;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}
