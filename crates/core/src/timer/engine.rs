//! Timer state machine
//!
//! Countdown and stopwatch share one engine. The engine performs no I/O and
//! never reads the clock itself; callers pass `now` into every transition,
//! which keeps the whole machine deterministic and directly testable.

use chrono::{DateTime, Utc};
use daybook_domain::{TimerMode, TimerPhase};

/// Deterministic countdown/stopwatch engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEngine {
    mode: TimerMode,
    phase: TimerPhase,
    /// Countdown target; zero for stopwatches.
    duration_ms: u64,
    /// Elapsed time accumulated across previous run intervals.
    accumulated_ms: u64,
    /// Start of the current run interval, set while running.
    started_at: Option<DateTime<Utc>>,
}

impl TimerEngine {
    /// Create an idle countdown timer.
    pub fn countdown(duration_secs: u64) -> Self {
        Self {
            mode: TimerMode::Countdown,
            phase: TimerPhase::Idle,
            duration_ms: duration_secs * 1000,
            accumulated_ms: 0,
            started_at: None,
        }
    }

    /// Create an idle stopwatch.
    pub fn stopwatch() -> Self {
        Self {
            mode: TimerMode::Stopwatch,
            phase: TimerPhase::Idle,
            duration_ms: 0,
            accumulated_ms: 0,
            started_at: None,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Start from idle, or restart after finishing.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if matches!(self.phase, TimerPhase::Idle | TimerPhase::Finished) {
            self.accumulated_ms = 0;
            self.started_at = Some(now);
            self.phase = TimerPhase::Running;
        }
    }

    /// Pause a running timer, banking the elapsed interval.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.phase == TimerPhase::Running {
            self.accumulated_ms = self.elapsed_ms(now);
            self.started_at = None;
            self.phase = TimerPhase::Paused;
        }
    }

    /// Resume a paused timer.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.phase == TimerPhase::Paused {
            self.started_at = Some(now);
            self.phase = TimerPhase::Running;
        }
    }

    /// Back to idle, dropping all accumulated time.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.accumulated_ms = 0;
        self.started_at = None;
    }

    /// Total elapsed time at `now`, in milliseconds.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        let running = self
            .started_at
            .map(|started| (now - started).num_milliseconds().max(0) as u64)
            .unwrap_or(0);
        self.accumulated_ms + running
    }

    /// Remaining countdown time at `now`; zero for stopwatches.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now))
    }

    /// Advance the machine: a running countdown whose time is up becomes
    /// `Finished`. Returns the phase after the tick.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TimerPhase {
        if self.mode == TimerMode::Countdown
            && self.phase == TimerPhase::Running
            && self.elapsed_ms(now) >= self.duration_ms
        {
            self.accumulated_ms = self.duration_ms;
            self.started_at = None;
            self.phase = TimerPhase::Finished;
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_countdown_lifecycle() {
        let mut timer = TimerEngine::countdown(60);
        assert_eq!(timer.phase(), TimerPhase::Idle);

        timer.start(t0());
        assert_eq!(timer.phase(), TimerPhase::Running);

        let later = t0() + Duration::seconds(20);
        assert_eq!(timer.elapsed_ms(later), 20_000);
        assert_eq!(timer.remaining_ms(later), 40_000);
        assert_eq!(timer.tick(later), TimerPhase::Running);

        let done = t0() + Duration::seconds(61);
        assert_eq!(timer.tick(done), TimerPhase::Finished);
        assert_eq!(timer.remaining_ms(done), 0);
    }

    #[test]
    fn test_pause_banks_elapsed_time() {
        let mut timer = TimerEngine::stopwatch();
        timer.start(t0());
        timer.pause(t0() + Duration::seconds(10));

        // Time passing while paused does not count.
        let much_later = t0() + Duration::seconds(100);
        assert_eq!(timer.elapsed_ms(much_later), 10_000);

        timer.resume(much_later);
        assert_eq!(timer.elapsed_ms(much_later + Duration::seconds(5)), 15_000);
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut timer = TimerEngine::countdown(30);
        timer.start(t0());
        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.elapsed_ms(t0() + Duration::seconds(5)), 0);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut timer = TimerEngine::stopwatch();
        timer.start(t0());
        timer.start(t0() + Duration::seconds(30));
        assert_eq!(timer.elapsed_ms(t0() + Duration::seconds(40)), 40_000);
    }

    #[test]
    fn test_stopwatch_never_finishes() {
        let mut timer = TimerEngine::stopwatch();
        timer.start(t0());
        assert_eq!(timer.tick(t0() + Duration::days(2)), TimerPhase::Running);
    }
}
