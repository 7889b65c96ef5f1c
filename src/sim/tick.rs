//! Per-tick simulation step
//!
//! One tick is split in two so the host can draw in between:
//! `step` moves everything, `resolve` checks collisions and counts the frame.
//! A collision therefore stays visible for exactly one rendered frame before
//! the reset. Hosts that do not render can call `tick`.

use super::collision::first_collision;
use super::obstacles::ObstacleField;
use super::state::{GamePhase, GameState, PressOutcome};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start/flap (space key or start button)
    pub flap: bool,
    /// Demo mode - the autopilot decides when to flap
    pub autopilot: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Idle -> Running on this tick
    pub started: bool,
    /// Id of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// Id of the obstacle retired this tick
    pub retired: Option<u32>,
    /// Running -> Idle on this tick
    pub crashed: bool,
}

/// Apply input, then move the avatar and obstacles.
///
/// Does nothing beyond input handling while idle.
pub fn step(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    let flap = input.flap || (input.autopilot && autopilot_wants_flap(state));
    if flap && state.press() == PressOutcome::Started {
        events.started = true;
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.avatar.update(&state.tuning);

    events.retired = state.obstacles.advance(&state.tuning).map(|o| o.id);
    if ObstacleField::spawn_due(state.frame, &state.tuning) {
        let spawned = state.obstacles.spawn(&mut state.rng, &state.tuning);
        events.spawned = Some(spawned.id);
    }

    events
}

/// Check for a collision and either crash or count the frame
pub fn resolve(state: &mut GameState, events: &mut TickEvents) {
    if state.phase != GamePhase::Running {
        return;
    }

    if let Some(hit) = first_collision(&state.avatar, &state.obstacles) {
        log::debug!("Avatar hit obstacle {} at x={}", hit.id, hit.x);
        events.crashed = state.crash();
    } else {
        state.frame += 1;
    }
}

/// Advance the game state by one tick without rendering in between
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = step(state, input);
    resolve(state, &mut events);
    events
}

/// Simple demo pilot: starts the game when idle and flaps whenever the avatar
/// is falling below the middle of the next gap.
pub fn autopilot_wants_flap(state: &GameState) -> bool {
    let avatar = &state.avatar;
    if state.phase == GamePhase::Idle {
        return true;
    }

    // Next gap still ahead of (or around) the avatar
    let target_y = state
        .obstacles
        .iter()
        .find(|o| o.trailing_edge() > avatar.left())
        .map(|o| o.gap_top + o.gap_size * 0.5)
        .unwrap_or(state.tuning.screen_height * 0.5);

    let center_y = avatar.pos.y + avatar.size.y * 0.5;
    // Aim a little below the gap centre so the flap peak stays inside it
    center_y > target_y + avatar.size.y * 0.5 && avatar.velocity >= 0.0
}
