//! Autoplaying, wraparound carousel state machine.
//!
//! The controller owns its scheduler and at most one live timer handle. Every
//! path that could arm a timer first cancels the live one, so a manual
//! navigation can never race an expiry that is already queued: a stale handle
//! reaching [`CarouselController::on_timer_fire`] is simply ignored.

use crate::constants::AUTOPLAY_INTERVAL_MS;
use crate::error::ConfigError;
use crate::timer::{ManualScheduler, Scheduler, TimerHandle};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub slide_count: usize,
    pub autoplay_interval: Duration,
    pub autoplay_enabled: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_count: 0,
            autoplay_interval: Duration::from_millis(AUTOPLAY_INTERVAL_MS),
            autoplay_enabled: true,
        }
    }
}

impl CarouselConfig {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            ..Default::default()
        }
    }

    pub fn with_interval_ms(mut self, ms: u64) -> Result<Self, ConfigError> {
        if ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.autoplay_interval = Duration::from_millis(ms);
        Ok(self)
    }

    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay_enabled = enabled;
        self
    }
}

/// Direction of the last index change, for slide-in animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn as_i8(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }

    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
            std::cmp::Ordering::Greater => Direction::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Not hovering; a timer is armed whenever autoplay applies.
    Idle,
    /// Hovering; no timer.
    Paused,
    /// Torn down; every event is ignored until `start`.
    Stopped,
}

/// What the rendering layer reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    /// `None` when there are no slides.
    pub active_index: Option<usize>,
    pub direction: Direction,
    pub is_auto_playing: bool,
    pub is_hovering: bool,
}

#[derive(Debug)]
pub struct CarouselController<S: Scheduler> {
    config: CarouselConfig,
    scheduler: S,
    active_index: usize,
    direction: Direction,
    phase: CarouselPhase,
    hovering: bool,
    timer: Option<TimerHandle>,
}

impl<S: Scheduler> CarouselController<S> {
    /// Created stopped; call [`start`](Self::start) once mounted.
    pub fn new(config: CarouselConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            active_index: 0,
            direction: Direction::None,
            phase: CarouselPhase::Stopped,
            hovering: false,
            timer: None,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn slide_count(&self) -> usize {
        self.config.slide_count
    }

    pub fn active_index(&self) -> Option<usize> {
        (self.config.slide_count > 0).then_some(self.active_index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_live_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.active_index(),
            direction: self.direction,
            is_auto_playing: self.config.autoplay_enabled,
            is_hovering: self.hovering,
        }
    }

    pub fn start(&mut self) {
        if self.phase == CarouselPhase::Stopped {
            self.phase = if self.hovering {
                CarouselPhase::Paused
            } else {
                CarouselPhase::Idle
            };
            log::debug!(
                "[carousel] start slides={} autoplay={}",
                self.config.slide_count,
                self.config.autoplay_enabled
            );
        }
        self.rearm();
    }

    pub fn stop(&mut self) {
        self.cancel_timer();
        if self.phase != CarouselPhase::Stopped {
            log::debug!("[carousel] stop");
        }
        self.phase = CarouselPhase::Stopped;
    }

    pub fn hover_start(&mut self) {
        if self.phase == CarouselPhase::Stopped {
            return;
        }
        self.cancel_timer();
        self.hovering = true;
        self.phase = CarouselPhase::Paused;
    }

    pub fn hover_end(&mut self) {
        if self.phase == CarouselPhase::Stopped {
            return;
        }
        self.hovering = false;
        let was_paused = self.phase == CarouselPhase::Paused;
        self.phase = CarouselPhase::Idle;
        if was_paused {
            self.rearm();
        }
    }

    pub fn next(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn prev(&mut self) {
        self.step(Direction::Backward);
    }

    /// Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if self.phase == CarouselPhase::Stopped || index >= self.config.slide_count {
            return;
        }
        self.cancel_timer();
        self.direction = Direction::between(self.active_index, index);
        self.active_index = index;
        log::debug!("[carousel] select {}", index);
        self.rearm();
    }

    /// Wraps one step past either end: below 0 lands on the last slide, at or
    /// past the count lands on the first.
    pub fn navigate_to_slide(&mut self, index: isize, direction: Direction) {
        let n = self.config.slide_count;
        if self.phase == CarouselPhase::Stopped || n == 0 {
            return;
        }
        self.active_index = if index < 0 {
            n - 1
        } else if index as usize >= n {
            0
        } else {
            index as usize
        };
        self.direction = direction;
    }

    /// Expiry callback from the host. Only the live handle advances.
    pub fn on_timer_fire(&mut self, handle: TimerHandle) {
        if self.timer != Some(handle) {
            log::trace!("[carousel] ignoring stale timer {:?}", handle);
            return;
        }
        self.timer = None;
        if self.phase != CarouselPhase::Idle || !self.should_autoplay() {
            return;
        }
        log::trace!("[carousel] autoplay advance");
        self.step(Direction::Forward);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.config.autoplay_enabled == enabled {
            return;
        }
        self.config.autoplay_enabled = enabled;
        log::debug!("[carousel] autoplay={}", enabled);
        if enabled {
            self.rearm();
        } else {
            self.cancel_timer();
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_autoplay(!self.config.autoplay_enabled);
    }

    /// Slides were added or removed; keeps the active index valid.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.config.slide_count = slide_count;
        if slide_count == 0 {
            self.active_index = 0;
            self.direction = Direction::None;
        } else if self.active_index >= slide_count {
            self.active_index = slide_count - 1;
            self.direction = Direction::None;
        }
        if self.phase == CarouselPhase::Stopped {
            return;
        }
        self.rearm();
    }

    fn step(&mut self, direction: Direction) {
        let n = self.config.slide_count;
        if self.phase == CarouselPhase::Stopped || n == 0 {
            return;
        }
        self.cancel_timer();
        if n == 1 {
            self.direction = Direction::None;
        } else {
            let target = self.active_index as isize + direction.as_i8() as isize;
            self.navigate_to_slide(target, direction);
        }
        self.rearm();
    }

    fn should_autoplay(&self) -> bool {
        self.config.autoplay_enabled
            && !self.hovering
            && self.config.slide_count > 1
            && self.phase != CarouselPhase::Stopped
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    // Cancel first, unconditionally: at most one live handle.
    fn rearm(&mut self) {
        self.cancel_timer();
        if self.should_autoplay() {
            self.timer = Some(self.scheduler.arm(self.config.autoplay_interval));
        }
    }
}

impl CarouselController<ManualScheduler> {
    /// Advances the virtual clock, delivering each expiry as it comes due.
    pub fn advance_clock(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(handle) = self.scheduler.pop_due(until) {
            self.on_timer_fire(handle);
        }
        self.scheduler.set_now(until);
    }
}
