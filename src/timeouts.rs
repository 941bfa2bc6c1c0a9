// Live browser timeouts keyed by scheduler-issued handles.
// Free of `web_sys` so the host test suite can include it directly.

use folio_motion::TimerHandle;
use smallvec::SmallVec;

#[derive(Debug, Default)]
pub struct TimeoutTable {
    next_id: u64,
    live: SmallVec<[(TimerHandle, i32); 2]>,
}

impl TimeoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh handle. It is not live until [`insert`](Self::insert).
    pub fn reserve(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        handle
    }

    pub fn insert(&mut self, handle: TimerHandle, browser_id: i32) {
        self.live.push((handle, browser_id));
    }

    /// Forgets `handle`, returning its browser id if it was still live.
    pub fn remove(&mut self, handle: TimerHandle) -> Option<i32> {
        let pos = self.live.iter().position(|(h, _)| *h == handle)?;
        Some(self.live.swap_remove(pos).1)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = i32> + '_ {
        self.live.drain(..).map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
