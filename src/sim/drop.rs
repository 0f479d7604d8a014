//! Drop resolver
//!
//! `Idle -> Dropping` on `start_drop`, back to `Idle` on `resolve_drop`.
//! Timing (the drop delay and the effect duration) is owned by the caller's
//! scheduler; these functions are the pure state transitions.

use super::state::{DropPhase, GameState};
use crate::settings::{HitPolicy, Settings};

/// Result of a drop request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropStart {
    /// Drop accepted, actuator position recorded
    Started { captured: f32 },
    /// A drop is already in flight
    Rejected,
}

/// Result of resolving a drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    Caught { distance: f32 },
    Missed { distance: f32 },
    /// Nothing was in flight
    NotDropping,
}

impl DropOutcome {
    pub fn is_catch(&self) -> bool {
        matches!(self, DropOutcome::Caught { .. })
    }
}

/// Start a drop unless one is already in flight
pub fn start_drop(state: &mut GameState) -> DropStart {
    if state.is_dropping() {
        log::debug!("Drop rejected - already dropping");
        return DropStart::Rejected;
    }
    let captured = state.actuator_position;
    state.drop_phase = DropPhase::Dropping;
    state.captured_actuator_position = Some(captured);
    state.drops += 1;
    log::debug!("Drop started at {:.1}", captured);
    DropStart::Started { captured }
}

/// Catch test in playfield percentage units
#[inline]
pub fn is_catch(actuator: f32, roaming: f32, threshold: f32) -> bool {
    (actuator - roaming).abs() < threshold
}

/// Judge the drop in flight and return to `Idle`
pub fn resolve_drop(state: &mut GameState, settings: &Settings) -> DropOutcome {
    if !state.is_dropping() {
        return DropOutcome::NotDropping;
    }

    let actuator = match settings.hit_policy {
        HitPolicy::Live => state.actuator_position,
        HitPolicy::Captured => state
            .captured_actuator_position
            .unwrap_or(state.actuator_position),
    };
    let distance = (actuator - state.roaming_position).abs();

    let outcome = if is_catch(actuator, state.roaming_position, settings.catch_threshold) {
        state.score += 1;
        state.effect_active = true;
        log::info!("Caught! distance {:.1}, score {}", distance, state.score);
        DropOutcome::Caught { distance }
    } else {
        log::debug!("Missed by {:.1}", distance);
        DropOutcome::Missed { distance }
    };

    state.drop_phase = DropPhase::Idle;
    state.captured_actuator_position = None;
    outcome
}

/// End the caught effect
pub fn clear_effect(state: &mut GameState) {
    state.effect_active = false;
}
