//! Game state and phase transitions
//!
//! All mutable game data lives in `GameState`. Phase changes only happen
//! through the guarded transition methods here; the tick driver decides
//! when to call them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::obstacles::ObstacleField;
use crate::tuning::Tuning;

/// Coarse game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap; avatar held in place, no obstacles
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// What a start/flap press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Idle -> Running: the run was reset and the avatar flapped
    Started,
    /// Running -> Running: the avatar flapped
    Flapped,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values every subsystem reads
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks since the run started; always 0 while idle
    pub frame: u64,
    pub avatar: Avatar,
    pub obstacles: ObstacleField,
    /// Gap-top source
    pub rng: Pcg32,
}

impl GameState {
    /// Create a game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            frame: 0,
            avatar: Avatar::new(&tuning),
            obstacles: ObstacleField::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Handle a start/flap press.
    ///
    /// From Idle this starts a fresh run (obstacles cleared, frame 0, avatar
    /// back at its spawn point) and then flaps. While Running it only flaps.
    pub fn press(&mut self) -> PressOutcome {
        match self.phase {
            GamePhase::Idle => {
                self.clear_run();
                self.phase = GamePhase::Running;
                self.avatar.impulse(&self.tuning);
                log::info!("Run started (seed {})", self.seed);
                PressOutcome::Started
            }
            GamePhase::Running => {
                self.avatar.impulse(&self.tuning);
                PressOutcome::Flapped
            }
        }
    }

    /// Running -> Idle after a collision. Returns false if already idle.
    pub fn crash(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        log::info!("Crashed at frame {}", self.frame);
        self.clear_run();
        self.phase = GamePhase::Idle;
        true
    }

    /// Return to the boot state from any phase
    pub fn reset(&mut self) {
        log::info!("Game reset");
        self.clear_run();
        self.phase = GamePhase::Idle;
    }

    fn clear_run(&mut self) {
        self.avatar.reset(&self.tuning);
        self.obstacles.clear();
        self.frame = 0;
    }
}
