//! Repeating timers driven by frame time.
//!
//! Nothing here runs on its own: the owner calls [`Scheduler::advance`] once
//! per frame with the elapsed time and acts on the handles that fired.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer {
    handle: TimerHandle,
    interval: f32,
    elapsed: f32,
    paused: bool,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a timer firing every `interval`.
    pub fn every(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            interval: interval.as_secs_f32().max(f32::EPSILON),
            elapsed: 0.0,
            paused: false,
        });
        handle
    }

    /// Removes the timer. Returns false if it was already gone.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Restarts the current interval from zero.
    pub fn reset(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.timer_mut(handle) {
            timer.elapsed = 0.0;
        }
    }

    pub fn set_paused(&mut self, handle: TimerHandle, paused: bool) {
        if let Some(timer) = self.timer_mut(handle) {
            timer.paused = paused;
        }
    }

    /// How far the current interval has run, in `[0, 1]`.
    pub fn elapsed_fraction(&self, handle: TimerHandle) -> f32 {
        self.timers
            .iter()
            .find(|t| t.handle == handle)
            .map_or(0.0, |t| (t.elapsed / t.interval).clamp(0.0, 1.0))
    }

    /// Accumulates `dt` seconds on every running timer and returns those that
    /// completed an interval. A timer fires at most once per call.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for timer in self.timers.iter_mut().filter(|t| !t.paused) {
            timer.elapsed += dt;
            if timer.elapsed >= timer.interval {
                // Keep the remainder of a normal frame; a stall longer than
                // one interval restarts from zero
                timer.elapsed -= timer.interval;
                if timer.elapsed >= timer.interval {
                    timer.elapsed = 0.0;
                }
                fired.push(timer.handle);
            }
        }
        fired
    }

    fn timer_mut(&mut self, handle: TimerHandle) -> Option<&mut Timer> {
        self.timers.iter_mut().find(|t| t.handle == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_interval() {
        let mut scheduler = Scheduler::new();
        let timer = scheduler.every(Duration::from_secs(1));

        assert!(scheduler.advance(0.5).is_empty());
        assert!((scheduler.elapsed_fraction(timer) - 0.5).abs() < 1e-6);
        assert_eq!(scheduler.advance(0.5), vec![timer]);
        assert!(scheduler.advance(0.25).is_empty());
    }

    #[test]
    fn fires_once_per_advance() {
        let mut scheduler = Scheduler::new();
        let timer = scheduler.every(Duration::from_millis(100));
        assert_eq!(scheduler.advance(10.0), vec![timer]);
        assert_eq!(scheduler.elapsed_fraction(timer), 0.0);
        assert!(scheduler.advance(0.05).is_empty());
    }

    #[test]
    fn carries_frame_remainder() {
        let mut scheduler = Scheduler::new();
        let timer = scheduler.every(Duration::from_secs(1));
        assert_eq!(scheduler.advance(1.25), vec![timer]);
        assert_eq!(scheduler.elapsed_fraction(timer), 0.25);
        assert!(scheduler.advance(0.5).is_empty());
        assert_eq!(scheduler.advance(0.25), vec![timer]);
    }

    #[test]
    fn paused_and_cancelled_timers_stay_quiet() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.every(Duration::from_secs(1));
        let b = scheduler.every(Duration::from_secs(1));

        scheduler.set_paused(a, true);
        assert!(scheduler.cancel(b));
        assert!(!scheduler.cancel(b));
        assert!(!scheduler.is_active(b));

        assert!(scheduler.advance(2.0).is_empty());
        assert_eq!(scheduler.elapsed_fraction(a), 0.0);

        scheduler.set_paused(a, false);
        assert_eq!(scheduler.advance(1.0), vec![a]);
    }

    #[test]
    fn reset_restarts_interval() {
        let mut scheduler = Scheduler::new();
        let timer = scheduler.every(Duration::from_secs(1));
        scheduler.advance(0.9);
        scheduler.reset(timer);
        assert!(scheduler.advance(0.5).is_empty());
        assert_eq!(scheduler.elapsed_fraction(timer), 0.5);
    }
}
