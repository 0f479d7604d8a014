//! Idle/demo mode - the game plays itself
//!
//! Leads the penguin: aims at where the easing will have carried it by the
//! time a drop started now would resolve, then drops once lined up.

use crate::settings::Settings;
use crate::sim::{Command, Direction, GameState, effective_factor};

/// Default pause between button presses
pub const DEFAULT_REACTION_MS: u64 = 48;

/// Autopilot that turns game state into commands
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Minimum time between two commands
    pub reaction_ms: u64,
    last_command_ms: Option<u64>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_REACTION_MS)
    }
}

impl Autopilot {
    pub fn new(reaction_ms: u64) -> Self {
        Self {
            reaction_ms,
            last_command_ms: None,
        }
    }

    /// Where the penguin will be once a drop started now resolves
    pub fn predicted_position(state: &GameState, settings: &Settings) -> f32 {
        let ticks = (settings.drop_delay_ms / settings.tick_ms.max(1)) as i32;
        let factor = effective_factor(settings.speed_factor, settings.motion_mode, settings.tick_ms);
        let remaining = (1.0 - factor).powi(ticks);
        let gap = state.target_goal_position - state.roaming_position;
        state.target_goal_position - gap * remaining
    }

    /// Next command, or None to wait
    pub fn decide(&mut self, state: &GameState, settings: &Settings, now_ms: u64) -> Option<Command> {
        if let Some(last) = self.last_command_ms {
            if now_ms < last + self.reaction_ms {
                return None;
            }
        }

        let aim = Self::predicted_position(state, settings);
        let offset = aim - state.actuator_position;

        let command = if offset.abs() > settings.step / 2.0 {
            let direction = if offset < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            };
            Command::Move(direction)
        } else if !state.is_dropping() && !state.effect_active {
            Command::Drop
        } else {
            return None;
        };

        self.last_command_ms = Some(now_ms);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_moves_toward_penguin() {
        let settings = Settings::default();
        let mut state = GameState::new(0);
        state.actuator_position = 10.0;
        let mut pilot = Autopilot::new(0);
        assert_eq!(
            pilot.decide(&state, &settings, 0),
            Some(Command::Move(Direction::Right))
        );

        state.actuator_position = 90.0;
        assert_eq!(
            pilot.decide(&state, &settings, 1),
            Some(Command::Move(Direction::Left))
        );
    }

    #[test]
    fn test_drops_when_aligned() {
        let settings = Settings::default();
        let mut state = GameState::new(0);
        let mut pilot = Autopilot::new(0);
        assert_eq!(pilot.decide(&state, &settings, 0), Some(Command::Drop));

        state.drop_phase = crate::sim::DropPhase::Dropping;
        assert_eq!(pilot.decide(&state, &settings, 1), None);
    }

    #[test]
    fn test_respects_reaction_time() {
        let settings = Settings::default();
        let state = GameState::new(0);
        let mut pilot = Autopilot::new(100);
        assert!(pilot.decide(&state, &settings, 0).is_some());
        assert!(pilot.decide(&state, &settings, 99).is_none());
        assert!(pilot.decide(&state, &settings, 100).is_some());
    }

    #[test]
    fn test_prediction_leads_toward_goal() {
        let settings = Settings::default();
        let mut state = GameState::new(0);
        state.roaming_position = 20.0;
        state.target_goal_position = 80.0;
        let aim = Autopilot::predicted_position(&state, &settings);
        assert!(aim > 20.0 && aim < 80.0);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut session = Session::new(2024, Settings::default()).unwrap();
        let mut pilot = Autopilot::default();
        for _ in 0..(60_000 / 16) {
            if let Some(command) = pilot.decide(session.state(), session.settings(), session.now_ms()) {
                session.apply(command);
            }
            session.advance(16);
        }
        let summary = session.end();
        assert!(summary.score > 0);
        assert!(summary.drops >= summary.score);
    }
}
