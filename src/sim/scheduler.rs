//! Simulated-time timer queue
//!
//! Replaces wall-clock intervals/timeouts with an explicit clock so a whole
//! session can be driven deterministically: the host (or a test) calls
//! [`Scheduler::pop_due`] until nothing is due, then [`Scheduler::settle`].
//! Timers fire in deadline order; ties fire in arming order.

use serde::{Deserialize, Serialize};

/// The four timers a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Penguin goal reselection (periodic)
    Retarget,
    /// Motion interpolation tick (periodic)
    Motion,
    /// Drop resolution (one-shot, armed while dropping)
    DropResolve,
    /// Caught effect end (one-shot, armed while the effect shows)
    EffectClear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timer {
    kind: TimerKind,
    deadline_ms: u64,
    /// Re-arm period for repeating timers
    period_ms: Option<u64>,
    /// Arming order, breaks deadline ties
    seq: u64,
}

/// Deterministic timer queue over simulated milliseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    timers: Vec<Timer>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn arm(&mut self, kind: TimerKind, delay_ms: u64, period_ms: Option<u64>) {
        self.cancel(kind);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            kind,
            deadline_ms: self.now_ms + delay_ms,
            period_ms,
            seq,
        });
    }

    /// Fire `kind` once after `delay_ms`, replacing any pending timer of that kind
    pub fn schedule_once(&mut self, kind: TimerKind, delay_ms: u64) {
        self.arm(kind, delay_ms, None);
    }

    /// Fire `kind` every `period_ms` (first fire one period from now)
    pub fn schedule_every(&mut self, kind: TimerKind, period_ms: u64) {
        // Zero period would fire forever without advancing the clock
        let period_ms = period_ms.max(1);
        self.arm(kind, period_ms, Some(period_ms));
    }

    /// Cancel a pending timer. Returns true if one was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        self.timers.len() != before
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Number of pending timers
    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of a pending timer
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| t.deadline_ms)
    }

    /// Take the next timer due at or before `until_ms`, moving the clock to
    /// its deadline. Repeating timers are re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerKind> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline_ms <= until_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.seq))
            .map(|(i, _)| i)?;

        let timer = self.timers.swap_remove(idx);
        self.now_ms = self.now_ms.max(timer.deadline_ms);

        if let Some(period_ms) = timer.period_ms {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.timers.push(Timer {
                deadline_ms: timer.deadline_ms + period_ms,
                seq,
                ..timer
            });
        }

        Some(timer.kind)
    }

    /// Move the clock forward to `until_ms` once nothing more is due
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler, until_ms: u64) -> Vec<(u64, TimerKind)> {
        let mut fired = Vec::new();
        while let Some(kind) = scheduler.pop_due(until_ms) {
            fired.push((scheduler.now_ms(), kind));
        }
        scheduler.settle(until_ms);
        fired
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(TimerKind::DropResolve, 500);

        assert!(drain(&mut scheduler, 499).is_empty());
        assert_eq!(scheduler.now_ms(), 499);

        assert_eq!(drain(&mut scheduler, 500), vec![(500, TimerKind::DropResolve)]);
        assert!(!scheduler.is_armed(TimerKind::DropResolve));
        assert!(drain(&mut scheduler, 5000).is_empty());
    }

    #[test]
    fn test_periodic_rearms() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(TimerKind::Motion, 16);

        let fired = drain(&mut scheduler, 64);
        let times: Vec<u64> = fired.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![16, 32, 48, 64]);
        assert_eq!(scheduler.deadline(TimerKind::Motion), Some(80));
    }

    #[test]
    fn test_deadline_order_and_ties() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(TimerKind::EffectClear, 30);
        scheduler.schedule_once(TimerKind::DropResolve, 10);
        scheduler.schedule_once(TimerKind::Retarget, 30);

        let kinds: Vec<TimerKind> = drain(&mut scheduler, 100).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            kinds,
            vec![TimerKind::DropResolve, TimerKind::EffectClear, TimerKind::Retarget]
        );
    }

    #[test]
    fn test_rescheduling_replaces() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(TimerKind::EffectClear, 1000);
        scheduler.settle(600);
        scheduler.schedule_once(TimerKind::EffectClear, 1000);

        assert_eq!(scheduler.armed_count(), 1);
        assert!(drain(&mut scheduler, 1500).is_empty());
        assert_eq!(drain(&mut scheduler, 1600), vec![(1600, TimerKind::EffectClear)]);
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(TimerKind::Retarget, 3000);
        scheduler.schedule_every(TimerKind::Motion, 16);
        scheduler.schedule_once(TimerKind::DropResolve, 500);
        assert_eq!(scheduler.armed_count(), 3);

        assert!(scheduler.cancel(TimerKind::DropResolve));
        assert!(!scheduler.cancel(TimerKind::DropResolve));

        scheduler.cancel_all();
        assert_eq!(scheduler.armed_count(), 0);
        assert!(drain(&mut scheduler, 10_000).is_empty());
    }

    #[test]
    fn test_zero_period_still_advances() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(TimerKind::Motion, 0);
        assert_eq!(drain(&mut scheduler, 3).len(), 3);
    }
}
