//! A running game session
//!
//! Owns the [`GameState`], its settings, the seeded RNG and the timer queue.
//! Lifecycle: [`Session::new`] validates the settings and arms the periodic
//! timers, the host feeds input and calls [`Session::advance`] with elapsed
//! time, and [`Session::end`] (or dropping the session) cancels every timer.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::{ConfigError, Settings};
use crate::sim::{
    self, Command, Direction, DropOutcome, DropStart, GameEvent, GameState, Scheduler, Snapshot,
    TimerKind,
};

/// Oldest events are dropped past this many undrained
pub const MAX_PENDING_EVENTS: usize = 256;

/// Final tally returned when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u32,
    pub drops: u32,
    pub elapsed_ms: u64,
}

/// One game from start to teardown
#[derive(Debug)]
pub struct Session {
    state: GameState,
    settings: Settings,
    scheduler: Scheduler,
    rng: Pcg32,
    events: VecDeque<GameEvent>,
    ended: bool,
}

impl Session {
    /// Start a session and arm the retarget and motion timers
    pub fn new(seed: u64, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(TimerKind::Retarget, settings.target_interval_ms);
        scheduler.schedule_every(TimerKind::Motion, settings.tick_ms);

        log::info!(
            "Session started with seed {} (hit policy: {})",
            seed,
            settings.hit_policy.as_str()
        );

        Ok(Self {
            state: GameState::new(seed),
            settings,
            scheduler,
            rng: Pcg32::seed_from_u64(seed),
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            ended: false,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current simulated time
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Per-frame view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.scheduler.is_armed(kind)
    }

    /// Move the chopsticks one step. Returns true if they moved.
    pub fn move_actuator(&mut self, direction: Direction) -> bool {
        sim::move_actuator(&mut self.state, direction, self.settings.step)
    }

    /// Drop the chopsticks. Returns false if a drop is already in flight.
    pub fn start_drop(&mut self) -> bool {
        match sim::start_drop(&mut self.state) {
            DropStart::Started { captured } => {
                self.scheduler
                    .schedule_once(TimerKind::DropResolve, self.settings.drop_delay_ms);
                self.push_event(GameEvent::DropStarted { captured });
                true
            }
            DropStart::Rejected => {
                self.push_event(GameEvent::DropRejected);
                false
            }
        }
    }

    /// Apply one input command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => self.move_actuator(direction),
            Command::Drop => self.start_drop(),
        }
    }

    /// Advance simulated time, firing every timer that comes due in order
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until_ms = self.scheduler.now_ms() + elapsed_ms;
        while let Some(kind) = self.scheduler.pop_due(until_ms) {
            self.dispatch(kind);
        }
        self.scheduler.settle(until_ms);
    }

    fn dispatch(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Retarget => {
                let goal = sim::retarget(&mut self.state, &mut self.rng);
                self.push_event(GameEvent::TargetChanged { goal });
            }
            TimerKind::Motion => {
                sim::step_motion(&mut self.state, &self.settings, self.settings.tick_ms);
            }
            TimerKind::DropResolve => match sim::resolve_drop(&mut self.state, &self.settings) {
                DropOutcome::Caught { distance } => {
                    // A catch while the effect is still showing restarts it
                    self.scheduler
                        .schedule_once(TimerKind::EffectClear, self.settings.effect_duration_ms);
                    self.push_event(GameEvent::Caught {
                        distance,
                        score: self.state.score,
                    });
                }
                DropOutcome::Missed { distance } => {
                    self.push_event(GameEvent::Missed { distance });
                }
                DropOutcome::NotDropping => {}
            },
            TimerKind::EffectClear => {
                sim::clear_effect(&mut self.state);
                self.push_event(GameEvent::EffectCleared);
            }
        }
    }

    fn teardown(&mut self) {
        if self.ended {
            return;
        }
        self.scheduler.cancel_all();
        self.ended = true;
        log::info!(
            "Session ended at {} ms with score {} ({} drops)",
            self.scheduler.now_ms(),
            self.state.score,
            self.state.drops
        );
    }

    /// Cancel every timer and report the final tally
    pub fn end(mut self) -> SessionSummary {
        self.teardown();
        SessionSummary {
            seed: self.state.seed,
            score: self.state.score,
            drops: self.state.drops,
            elapsed_ms: self.scheduler.now_ms(),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}
