//! Motion interpolator
//!
//! Eases the penguin's drawn position toward its goal with exponential decay.
//! In `PerTick` mode the step is tick-count based, so the effective speed
//! depends on the tick period. `DeltaTime` mode rescales the factor against a
//! 16 ms reference tick instead.

use super::state::GameState;
use crate::clamp_position;
use crate::settings::{MotionMode, Settings};

/// Tick period the speed factor is calibrated against (~60 Hz)
pub const REFERENCE_TICK_MS: f32 = 16.0;

/// Easing factor to apply for one tick of `dt_ms`
pub fn effective_factor(speed_factor: f32, mode: MotionMode, dt_ms: u64) -> f32 {
    match mode {
        MotionMode::PerTick => speed_factor,
        MotionMode::DeltaTime => {
            let ticks = dt_ms as f32 / REFERENCE_TICK_MS;
            1.0 - (1.0 - speed_factor).powf(ticks)
        }
    }
}

/// One easing step from `current` toward `goal`, snapping when within `epsilon`
#[inline]
pub fn ease_toward(current: f32, goal: f32, factor: f32, epsilon: f32) -> f32 {
    if (goal - current).abs() < epsilon {
        return goal;
    }
    current + (goal - current) * factor
}

/// Advance the roaming position by one motion tick
pub fn step_motion(state: &mut GameState, settings: &Settings, dt_ms: u64) {
    let factor = effective_factor(settings.speed_factor, settings.motion_mode, dt_ms);
    let next = ease_toward(
        state.roaming_position,
        state.target_goal_position,
        factor,
        settings.snap_epsilon,
    );
    state.roaming_position = clamp_position(next);
    log::trace!(
        "Penguin at {:.2} (goal {:.2})",
        state.roaming_position,
        state.target_goal_position
    );
}

/// Ticks of pure easing until the remaining distance is at most `epsilon`:
/// `ceil(ln(epsilon / distance) / ln(1 - speed_factor))`. The snap itself
/// lands on the tick after that.
pub fn ticks_to_converge(distance: f32, speed_factor: f32, epsilon: f32) -> u32 {
    let distance = distance.abs() as f64;
    let epsilon = epsilon as f64;
    if distance < epsilon {
        return 0;
    }
    let ticks = (epsilon / distance).ln() / (1.0 - speed_factor as f64).ln();
    ticks.ceil().max(0.0) as u32
}
