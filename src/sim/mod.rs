//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Simulated time only (the scheduler owns the clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod actuator;
pub mod drop;
pub mod motion;
pub mod scheduler;
pub mod state;
pub mod target;

pub use actuator::move_actuator;
pub use self::drop::{DropOutcome, DropStart, clear_effect, is_catch, resolve_drop, start_drop};
pub use motion::{ease_toward, effective_factor, step_motion, ticks_to_converge};
pub use scheduler::{Scheduler, TimerKind};
pub use state::{Command, Direction, DropPhase, GameEvent, GameState, Snapshot};
pub use target::retarget;
