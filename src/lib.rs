//! Penguin Catcher - drop the chopsticks on a roaming penguin
//!
//! Core modules:
//! - `sim`: Deterministic game core (state, motion, drop resolution, scheduler)
//! - `session`: Owns one running game and dispatches its timers
//! - `settings`: Tunable constants, loadable from JSON
//! - `autopilot`: Idle/demo player that drives a session on its own

pub mod autopilot;
pub mod session;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use session::{Session, SessionSummary};
pub use settings::{ConfigError, HitPolicy, MotionMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield positions are percentages of its width
    pub const POSITION_MIN: f32 = 0.0;
    pub const POSITION_MAX: f32 = 100.0;
    /// Everything starts at the middle of the playfield
    pub const POSITION_START: f32 = 50.0;

    /// Default playfield size in pixels (display only)
    pub const PLAYFIELD_WIDTH: f32 = 390.0;
    pub const PLAYFIELD_HEIGHT: f32 = 844.0;

    /// Fraction of the remaining distance covered per motion tick
    pub const SPEED_FACTOR: f32 = 0.1;
    /// Distance below which the roaming position snaps onto its goal
    pub const SNAP_EPSILON: f32 = 0.1;
    /// Motion tick period (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// How often the penguin picks a new goal
    pub const TARGET_INTERVAL_MS: u64 = 3000;

    /// Actuator step per move command
    pub const ACTUATOR_STEP: f32 = 5.0;
    /// Maximum actuator/penguin distance that counts as a catch
    pub const CATCH_THRESHOLD: f32 = 10.0;
    /// Chopstick fall time before the catch is judged
    pub const DROP_DELAY_MS: u64 = 500;
    /// How long the "caught" effect stays on screen
    pub const EFFECT_DURATION_MS: u64 = 1000;
}

/// Clamp a position to the playfield range [0, 100]
#[inline]
pub fn clamp_position(pos: f32) -> f32 {
    pos.clamp(consts::POSITION_MIN, consts::POSITION_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(-3.0), 0.0);
        assert_eq!(clamp_position(42.5), 42.5);
        assert_eq!(clamp_position(103.0), 100.0);
    }
}
