//! Per-frame orchestration.
//!
//! A frame takes one snapshot of each telemetry source and feeds that same
//! snapshot to every consumer, so two elements never disagree about where the
//! pointer was during a frame.

use crate::constants::MAX_FRAME_DT_SEC;
use crate::header::{HeaderConfig, HeaderMotion, HeaderOutput};
use crate::parallax::{ParallaxBinding, ParallaxConfig, ParallaxOutput};
use crate::pointer::{PointerTelemetry, Viewport};
use crate::scroll::{ScrollConfig, ScrollTelemetry};
use std::time::Duration;

/// Turns monotonically increasing timestamps into clamped frame deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<Duration>,
}

impl FrameClock {
    /// First call returns 0. Backwards or huge gaps (hidden tabs) are clamped
    /// to `[0, MAX_FRAME_DT_SEC]`.
    pub fn advance(&mut self, now: Duration) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_sub(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(MAX_FRAME_DT_SEC)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u32);

/// Page-scoped engine: the telemetry singletons plus every element bound to
/// them.
#[derive(Debug)]
pub struct MotionScene {
    pub pointer: PointerTelemetry,
    pub scroll: ScrollTelemetry,
    bindings: Vec<Bound>,
    header: Option<HeaderMotion>,
    // last header output handed to the host
    header_emitted: Option<HeaderOutput>,
    next_id: u32,
}

#[derive(Debug)]
struct Bound {
    id: BindingId,
    binding: ParallaxBinding,
    emitted: Option<ParallaxOutput>,
}

impl MotionScene {
    pub fn new(viewport: Viewport, scroll: ScrollConfig) -> Self {
        Self {
            pointer: PointerTelemetry::new(viewport),
            scroll: ScrollTelemetry::new(scroll),
            bindings: Vec::new(),
            header: None,
            header_emitted: None,
            next_id: 0,
        }
    }

    pub fn start(&mut self) {
        self.pointer.start();
        self.scroll.start();
    }

    pub fn teardown(&mut self) {
        self.pointer.teardown();
        self.scroll.teardown();
        self.bindings.clear();
        self.header = None;
        self.header_emitted = None;
    }

    pub fn bind_parallax(&mut self, config: ParallaxConfig) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Bound {
            id,
            binding: ParallaxBinding::new(config),
            emitted: None,
        });
        id
    }

    pub fn unbind_parallax(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() != before
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn set_header(&mut self, config: HeaderConfig) {
        self.header = Some(HeaderMotion::new(config));
        self.header_emitted = None;
    }

    pub fn parallax_output(&self, id: BindingId) -> Option<ParallaxOutput> {
        self.bindings
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.binding.output())
    }

    pub fn parallax_outputs(&self) -> impl Iterator<Item = (BindingId, ParallaxOutput)> + '_ {
        self.bindings.iter().map(|b| (b.id, b.binding.output()))
    }

    /// Parallax outputs that differ from the last ones taken. A fresh binding
    /// always shows up once; bindings at rest stop showing up.
    pub fn take_changed_parallax(
        &mut self,
    ) -> impl Iterator<Item = (BindingId, ParallaxOutput)> + '_ {
        self.bindings.iter_mut().filter_map(|b| {
            let out = b.binding.output();
            if b.emitted == Some(out) {
                return None;
            }
            b.emitted = Some(out);
            Some((b.id, out))
        })
    }

    /// Header output if it differs from the last one taken.
    pub fn take_changed_header(&mut self) -> Option<HeaderOutput> {
        let out = self.header.as_ref()?.output();
        if self.header_emitted == Some(out) {
            return None;
        }
        self.header_emitted = Some(out);
        Some(out)
    }

    /// Every spring has settled.
    pub fn is_at_rest(&self) -> bool {
        self.bindings.iter().all(|b| b.binding.is_at_rest())
            && self.header.as_ref().map_or(true, HeaderMotion::is_at_rest)
    }

    pub fn header_output(&self) -> Option<HeaderOutput> {
        self.header.as_ref().map(HeaderMotion::output)
    }

    pub fn frame(&mut self, dt_sec: f32) {
        let pointer = self.pointer.state();
        let scroll = self.scroll.state();
        for b in self.bindings.iter_mut() {
            b.binding.update(&pointer, dt_sec);
        }
        if let Some(header) = &mut self.header {
            header.update(&scroll, dt_sec);
        }
    }
}
