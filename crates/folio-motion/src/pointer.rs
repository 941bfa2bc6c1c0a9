//! Cursor position and viewport membership.
//!
//! The platform adapter (DOM listeners on the web, winit events natively)
//! feeds raw events in; everything else reads [`PointerState`] snapshots.

use crate::observer::{SubscriptionToken, Subscribers};
use glam::Vec2;

/// Viewport extent in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last event coordinates in pixels.
    pub raw: Vec2,
    /// Raw position rescaled to [-1, 1] per axis against the viewport.
    pub norm: Vec2,
    pub in_viewport: bool,
}

/// Maps one coordinate into [-1, 1]; `None` when the extent cannot normalize.
#[inline]
pub fn normalize_axis(raw: f32, extent: f32) -> Option<f32> {
    if extent > 0.0 && extent.is_finite() {
        Some(((raw / extent) * 2.0 - 1.0).clamp(-1.0, 1.0))
    } else {
        None
    }
}

#[derive(Debug, Default)]
pub struct PointerTelemetry {
    state: PointerState,
    viewport: Viewport,
    listening: bool,
    subscribers: Subscribers<PointerState>,
}

impl PointerTelemetry {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn start(&mut self) {
        if !self.listening {
            log::debug!("[pointer] listening");
        }
        self.listening = true;
    }

    /// Safe to call repeatedly or without a prior `start`.
    pub fn stop(&mut self) {
        if self.listening {
            log::debug!("[pointer] stopped");
        }
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Stops listening and drops every subscriber.
    pub fn teardown(&mut self) {
        self.stop();
        self.subscribers.clear();
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&PointerState) + 'static) -> SubscriptionToken {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.subscribers.unsubscribe(token)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Later moves normalize against the new extent; the current state is left alone.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn handle_move(&mut self, x: f32, y: f32) {
        if !self.listening || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.state.raw = Vec2::new(x, y);
        if let Some(nx) = normalize_axis(x, self.viewport.width) {
            self.state.norm.x = nx;
        }
        if let Some(ny) = normalize_axis(y, self.viewport.height) {
            self.state.norm.y = ny;
        }
        self.state.in_viewport = true;
        self.subscribers.notify(&self.state);
    }

    /// Position is kept so consumers can decide where to rest.
    pub fn handle_leave(&mut self) {
        if !self.listening {
            return;
        }
        self.state.in_viewport = false;
        self.subscribers.notify(&self.state);
    }
}
