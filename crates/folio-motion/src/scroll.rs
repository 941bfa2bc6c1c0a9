//! Scroll offset, windowed progress and the independent "scrolled" flag.

use crate::constants::{SCROLLED_THRESHOLD_PX, SCROLL_END_PX, SCROLL_START_PX};
use crate::error::{non_negative, ConfigError};
use crate::observer::{SubscriptionToken, Subscribers};

/// The interpolation window and the binary threshold are configured
/// separately and never derived from each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub scroll_start: f32,
    pub scroll_end: f32,
    pub threshold_px: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_start: SCROLL_START_PX,
            scroll_end: SCROLL_END_PX,
            threshold_px: SCROLLED_THRESHOLD_PX,
        }
    }
}

impl ScrollConfig {
    pub fn new(scroll_start: f32, scroll_end: f32, threshold_px: f32) -> Result<Self, ConfigError> {
        let scroll_start = non_negative("scroll_start", scroll_start)?;
        let scroll_end = non_negative("scroll_end", scroll_end)?;
        let threshold_px = non_negative("threshold_px", threshold_px)?;
        if scroll_end < scroll_start {
            return Err(ConfigError::InvertedScrollWindow {
                start: scroll_start,
                end: scroll_end,
            });
        }
        Ok(Self {
            scroll_start,
            scroll_end,
            threshold_px,
        })
    }

    /// Clamped linear progress of `offset` through the window.
    pub fn progress(&self, offset: f32) -> f32 {
        // end is checked first so a zero-width window steps to 1 at `end`
        if offset >= self.scroll_end {
            1.0
        } else if offset <= self.scroll_start {
            0.0
        } else {
            (offset - self.scroll_start) / (self.scroll_end - self.scroll_start)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_px: f32,
    pub progress: f32,
    pub past_threshold: bool,
}

#[derive(Debug, Default)]
pub struct ScrollTelemetry {
    config: ScrollConfig,
    state: ScrollState,
    listening: bool,
    subscribers: Subscribers<ScrollState>,
}

impl ScrollTelemetry {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn start(&mut self) {
        if !self.listening {
            log::debug!(
                "[scroll] listening window=({}, {}) threshold={}",
                self.config.scroll_start,
                self.config.scroll_end,
                self.config.threshold_px
            );
        }
        self.listening = true;
    }

    pub fn stop(&mut self) {
        if self.listening {
            log::debug!("[scroll] stopped");
        }
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn teardown(&mut self) {
        self.stop();
        self.subscribers.clear();
    }

    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollState) + 'static) -> SubscriptionToken {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.subscribers.unsubscribe(token)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Negative offsets (overscroll bounce) and garbage read as 0.
    pub fn handle_scroll(&mut self, offset: f32) {
        if !self.listening {
            return;
        }
        let offset_px = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.state = ScrollState {
            offset_px,
            progress: self.config.progress(offset_px),
            past_threshold: offset_px > self.config.threshold_px,
        };
        self.subscribers.notify(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_window_is_a_step_at_end() {
        let cfg = ScrollConfig::new(50.0, 50.0, 20.0).unwrap();
        assert_eq!(cfg.progress(49.9), 0.0);
        assert_eq!(cfg.progress(50.0), 1.0);
    }

    #[test]
    fn inverted_window_is_rejected() {
        assert_eq!(
            ScrollConfig::new(100.0, 10.0, 20.0),
            Err(ConfigError::InvertedScrollWindow {
                start: 100.0,
                end: 10.0
            })
        );
    }
}
