//! Obstacle spawning, scrolling and retirement
//!
//! Obstacles live in a `VecDeque` in spawn order. Every obstacle scrolls left
//! at the same speed, so spawn order is also left-to-right screen order and
//! the oldest one is always the first to leave the screen. That is what makes
//! checking only the front for retirement exact.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A barrier pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Spawn sequence number
    pub id: u32,
    /// Left edge; strictly decreasing over the obstacle's lifetime
    pub x: f32,
    /// Bottom of the upper barrier / top of the gap
    pub gap_top: f32,
    pub width: f32,
    pub gap_size: f32,
}

impl Obstacle {
    /// Right edge (the last part to leave the screen)
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Top of the lower barrier
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_size
    }
}

/// Ordered obstacle collection with front-only removal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    next_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an obstacle is due on this frame
    #[inline]
    pub fn spawn_due(frame: u64, tuning: &Tuning) -> bool {
        frame % tuning.spawn_interval == 0
    }

    /// Append an obstacle at the right screen edge with the given gap top
    pub fn spawn_at(&mut self, gap_top: f32, tuning: &Tuning) -> &Obstacle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.obstacles.push_back(Obstacle {
            id,
            x: tuning.screen_width,
            gap_top,
            width: tuning.obstacle_width,
            gap_size: tuning.gap_size,
        });
        log::debug!("Spawned obstacle {} with gap top {}", id, gap_top);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Append an obstacle whose gap top is a whole number drawn uniformly
    /// from `[0, screen_height - gap_size)`
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> &Obstacle {
        let range = tuning.gap_top_range().floor().max(1.0) as u32;
        let gap_top = rng.random_range(0..range) as f32;
        self.spawn_at(gap_top, tuning)
    }

    /// Scroll every obstacle left by one tick, then retire the front one if
    /// it has fully left the screen.
    ///
    /// Returns the retired obstacle, if any.
    pub fn advance(&mut self, tuning: &Tuning) -> Option<Obstacle> {
        for obstacle in &mut self.obstacles {
            obstacle.x -= tuning.obstacle_speed;
        }

        if self
            .obstacles
            .front()
            .is_some_and(|front| front.trailing_edge() < 0.0)
        {
            let retired = self.obstacles.pop_front();
            if let Some(ref o) = retired {
                log::debug!("Retired obstacle {}", o.id);
            }
            return retired;
        }
        None
    }

    /// Remove every obstacle and restart the spawn sequence
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Direct mutable access for tests that stage positions
    #[cfg(test)]
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.obstacles.front()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
