//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Whether the chopsticks are in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DropPhase {
    /// Chopsticks at the top, ready to drop
    #[default]
    Idle,
    /// Chopsticks falling; resolves after the drop delay
    Dropping,
}

/// Actuator move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to the step
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A player (or autopilot) command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Drop,
}

/// Something the renderer may want to react to (sound, particles)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Penguin picked a new goal
    TargetChanged { goal: f32 },
    /// Drop accepted; `captured` is the actuator position at trigger time
    DropStarted { captured: f32 },
    /// Drop requested while one was already in flight
    DropRejected,
    /// Drop resolved within the catch threshold
    Caught { distance: f32, score: u32 },
    /// Drop resolved outside the catch threshold
    Missed { distance: f32 },
    /// Caught effect finished
    EffectCleared,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Chopstick position (percent of playfield width)
    pub actuator_position: f32,
    /// Where the penguin is heading
    pub target_goal_position: f32,
    /// Where the penguin is drawn
    pub roaming_position: f32,
    pub score: u32,
    pub drop_phase: DropPhase,
    /// Caught effect showing (penguin hidden)
    pub effect_active: bool,
    /// Actuator position recorded when the current drop started
    pub captured_actuator_position: Option<f32>,
    /// Accepted drops this session
    pub drops: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            actuator_position: POSITION_START,
            target_goal_position: POSITION_START,
            roaming_position: POSITION_START,
            score: 0,
            drop_phase: DropPhase::Idle,
            effect_active: false,
            captured_actuator_position: None,
            drops: 0,
        }
    }

    pub fn is_dropping(&self) -> bool {
        self.drop_phase == DropPhase::Dropping
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actuator_position: self.actuator_position,
            roaming_position: self.roaming_position,
            score: self.score,
            drop_phase: self.drop_phase,
            effect_active: self.effect_active,
        }
    }
}

/// Per-frame view consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actuator_position: f32,
    pub roaming_position: f32,
    pub score: u32,
    pub drop_phase: DropPhase,
    pub effect_active: bool,
}

impl Snapshot {
    /// The penguin is hidden while the caught effect plays
    pub fn roaming_visible(&self) -> bool {
        !self.effect_active
    }

    /// Chopsticks drawn at the bottom while dropping
    pub fn actuator_lowered(&self) -> bool {
        self.drop_phase == DropPhase::Dropping
    }

    /// Drop button enabled
    pub fn can_drop(&self) -> bool {
        self.drop_phase == DropPhase::Idle
    }
}
