use folio_motion::{Scheduler, TimerHandle};
use std::time::{Duration, Instant};

/// Wall-clock deadlines, polled from the event loop.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    deadlines: Vec<(TimerHandle, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, for `ControlFlow::WaitUntil`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|(_, at)| *at).min()
    }

    pub fn pop_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let (pos, _) = self
            .deadlines
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= now)
            .min_by_key(|(_, (_, at))| *at)?;
        Some(self.deadlines.swap_remove(pos).0)
    }

    fn arm_at(&mut self, at: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.deadlines.push((handle, at));
        handle
    }
}

impl Scheduler for DeadlineScheduler {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.arm_at(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_deadline_order() {
        let t0 = Instant::now();
        let mut s = DeadlineScheduler::new();
        let late = s.arm_at(t0 + Duration::from_millis(20));
        let early = s.arm_at(t0 + Duration::from_millis(10));
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(10)));
        assert_eq!(s.pop_due(t0), None);
        let now = t0 + Duration::from_millis(30);
        assert_eq!(s.pop_due(now), Some(early));
        assert_eq!(s.pop_due(now), Some(late));
        assert_eq!(s.pop_due(now), None);
    }

    #[test]
    fn cancelled_never_pops() {
        let t0 = Instant::now();
        let mut s = DeadlineScheduler::new();
        let h = s.arm_at(t0);
        s.cancel(h);
        s.cancel(h);
        assert_eq!(s.pop_due(t0 + Duration::from_secs(1)), None);
        assert_eq!(s.next_deadline(), None);
    }
}
