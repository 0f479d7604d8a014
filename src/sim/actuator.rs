//! Actuator controller: discrete chopstick moves

use super::state::{Direction, GameState};
use crate::clamp_position;

/// Move the chopsticks one step, saturating at the playfield edges.
/// Returns true if the position changed.
pub fn move_actuator(state: &mut GameState, direction: Direction, step: f32) -> bool {
    let before = state.actuator_position;
    state.actuator_position = clamp_position(before + direction.sign() * step);
    state.actuator_position != before
}
