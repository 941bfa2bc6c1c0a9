//! Cancellable one-shot timers for the wall-clock domain.
//!
//! Hosts implement [`Scheduler`] over their own primitive (`setTimeout` on the
//! web, a polled deadline natively) and route expiries back to the owner with
//! the handle they returned from `arm`.

use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

pub trait Scheduler {
    fn arm(&mut self, delay: Duration) -> TimerHandle;
    /// Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Virtual-clock scheduler. Nothing fires until [`ManualScheduler::advance`]
/// moves the clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: SmallVec<[(TimerHandle, Duration); 2]>,
    armed_total: u64,
    cancelled_total: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers armed and neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn armed_total(&self) -> u64 {
        self.armed_total
    }

    pub fn cancelled_total(&self) -> u64 {
        self.cancelled_total
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Callers loop on this so a timer re-armed by a fire
    /// handler can still fire inside the same window.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (idx, &(handle, deadline)) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, deadline))| *deadline <= until)
            .min_by_key(|(_, (_, deadline))| *deadline)?;
        self.pending.remove(idx);
        self.now = self.now.max(deadline);
        Some(handle)
    }

    /// Moves the clock forward by `dt` and returns every timer that expired,
    /// in deadline order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let until = self.now + dt;
        let mut fired = Vec::new();
        while let Some(handle) = self.pop_due(until) {
            fired.push(handle);
        }
        self.now = until;
        fired
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.armed_total += 1;
        self.pending.push((handle, self.now + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_fires_in_deadline_order() {
        let mut s = ManualScheduler::new();
        let late = s.arm(Duration::from_millis(300));
        let early = s.arm(Duration::from_millis(100));
        let never = s.arm(Duration::from_millis(900));
        s.cancel(never);
        assert_eq!(s.advance(Duration::from_millis(500)), vec![early, late]);
        assert_eq!(s.pending(), 0);
        assert_eq!(s.now(), Duration::from_millis(500));
        assert_eq!(s.cancelled_total(), 1);
    }
}
