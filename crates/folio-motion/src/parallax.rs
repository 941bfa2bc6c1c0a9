//! Pointer-driven parallax: offset, tilt, scale and glare per element.
//!
//! [`parallax_targets`] is the pure mapping from a pointer snapshot to the
//! output bundle an element should settle at. [`ParallaxBinding`] owns one
//! spring per channel so pointer jumps never show up as visual jumps.

use crate::constants::{
    GLARE_CENTER_PCT, GLARE_MIN_OPACITY, GLARE_OPACITY_GAIN, GLARE_SPAN_PCT, PARALLAX_FACTOR,
    PARALLAX_LIMIT_PX,
};
use crate::pointer::PointerState;
use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

/// Per-element configuration. Tilt and scale are opt-in channels: `None`
/// disables them outright instead of relying on a zero factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub factor: f32,
    pub limit: Vec2,
    pub initial: Vec2,
    pub reversed: bool,
    pub rotation: Option<f32>,
    pub scale: Option<f32>,
    pub glare: bool,
    pub spring: SpringConfig,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            factor: PARALLAX_FACTOR,
            limit: Vec2::splat(PARALLAX_LIMIT_PX),
            initial: Vec2::ZERO,
            reversed: false,
            rotation: None,
            scale: None,
            glare: false,
            spring: SpringConfig::default(),
        }
    }
}

// Zero, negative and non-finite factors switch the channel off.
#[inline]
fn channel(factor: f32) -> Option<f32> {
    (factor.is_finite() && factor > 0.0).then_some(factor)
}

impl ParallaxConfig {
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        self
    }

    pub fn with_limit(mut self, x: f32, y: f32) -> Self {
        self.limit = Vec2::new(x, y);
        self
    }

    pub fn with_initial(mut self, x: f32, y: f32) -> Self {
        self.initial = Vec2::new(x, y);
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_rotation(mut self, factor: f32) -> Self {
        self.rotation = channel(factor);
        self
    }

    pub fn with_scale(mut self, factor: f32) -> Self {
        self.scale = channel(factor);
        self
    }

    pub fn with_glare(mut self, glare: bool) -> Self {
        self.glare = glare;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    #[inline]
    pub fn sign(&self) -> f32 {
        if self.reversed {
            -1.0
        } else {
            1.0
        }
    }

    /// Bundle the element shows while the pointer is away.
    pub fn rest(&self) -> ParallaxOutput {
        ParallaxOutput {
            offset_x: self.initial.x,
            offset_y: self.initial.y,
            ..ParallaxOutput::default()
        }
    }
}

/// Offsets in px, rotations in degrees, glare position in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOutput {
    pub offset_x: f32,
    pub offset_y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub glare_opacity: f32,
    pub glare_x: f32,
    pub glare_y: f32,
}

impl Default for ParallaxOutput {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            glare_opacity: 0.0,
            glare_x: GLARE_CENTER_PCT,
            glare_y: GLARE_CENTER_PCT,
        }
    }
}

pub fn parallax_targets(pointer: &PointerState, config: &ParallaxConfig) -> ParallaxOutput {
    let n = pointer.norm;
    let inside = pointer.in_viewport;
    let sign = config.sign();

    let offset = if inside {
        n * config.limit * config.factor * sign + config.initial
    } else {
        config.initial
    };

    let (rotate_x, rotate_y) = match config.rotation {
        Some(rf) if inside => (-n.y * rf * sign, n.x * rf * sign),
        _ => (0.0, 0.0),
    };

    let cross = (n.x * n.y).abs();
    let scale = match config.scale {
        Some(sf) if inside => 1.0 + cross * sf,
        _ => 1.0,
    };

    let (glare_opacity, glare_x, glare_y) = if config.glare {
        let opacity = if inside {
            (cross * GLARE_OPACITY_GAIN).max(GLARE_MIN_OPACITY)
        } else {
            0.0
        };
        (
            opacity,
            n.x * GLARE_SPAN_PCT + GLARE_CENTER_PCT,
            n.y * GLARE_SPAN_PCT + GLARE_CENTER_PCT,
        )
    } else {
        (0.0, GLARE_CENTER_PCT, GLARE_CENTER_PCT)
    };

    ParallaxOutput {
        offset_x: offset.x,
        offset_y: offset.y,
        rotate_x,
        rotate_y,
        scale,
        glare_opacity,
        glare_x,
        glare_y,
    }
}

#[derive(Clone, Debug)]
struct ChannelSprings {
    offset_x: Spring,
    offset_y: Spring,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    glare_opacity: Spring,
    glare_x: Spring,
    glare_y: Spring,
}

impl ChannelSprings {
    fn at(config: SpringConfig, v: ParallaxOutput) -> Self {
        Self {
            offset_x: Spring::new(config, v.offset_x),
            offset_y: Spring::new(config, v.offset_y),
            rotate_x: Spring::new(config, v.rotate_x),
            rotate_y: Spring::new(config, v.rotate_y),
            scale: Spring::new(config, v.scale),
            glare_opacity: Spring::new(config, v.glare_opacity),
            glare_x: Spring::new(config, v.glare_x),
            glare_y: Spring::new(config, v.glare_y),
        }
    }

    fn all(&self) -> [&Spring; 8] {
        [
            &self.offset_x,
            &self.offset_y,
            &self.rotate_x,
            &self.rotate_y,
            &self.scale,
            &self.glare_opacity,
            &self.glare_x,
            &self.glare_y,
        ]
    }

    fn all_mut(&mut self) -> [&mut Spring; 8] {
        [
            &mut self.offset_x,
            &mut self.offset_y,
            &mut self.rotate_x,
            &mut self.rotate_y,
            &mut self.scale,
            &mut self.glare_opacity,
            &mut self.glare_x,
            &mut self.glare_y,
        ]
    }
}

/// One element's parallax state. Springs are never shared between elements.
#[derive(Clone, Debug)]
pub struct ParallaxBinding {
    config: ParallaxConfig,
    springs: ChannelSprings,
}

impl ParallaxBinding {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            springs: ChannelSprings::at(config.spring, config.rest()),
            config,
        }
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn retarget(&mut self, pointer: &PointerState) {
        let t = parallax_targets(pointer, &self.config);
        let s = &mut self.springs;
        s.offset_x.set_target(t.offset_x);
        s.offset_y.set_target(t.offset_y);
        s.rotate_x.set_target(t.rotate_x);
        s.rotate_y.set_target(t.rotate_y);
        s.scale.set_target(t.scale);
        s.glare_opacity.set_target(t.glare_opacity);
        s.glare_x.set_target(t.glare_x);
        s.glare_y.set_target(t.glare_y);
    }

    pub fn tick(&mut self, dt_sec: f32) {
        for spring in self.springs.all_mut() {
            spring.tick(dt_sec);
        }
    }

    pub fn update(&mut self, pointer: &PointerState, dt_sec: f32) -> ParallaxOutput {
        self.retarget(pointer);
        self.tick(dt_sec);
        self.output()
    }

    pub fn is_at_rest(&self) -> bool {
        self.springs.all().iter().all(|s| s.is_at_rest())
    }

    pub fn output(&self) -> ParallaxOutput {
        let s = &self.springs;
        ParallaxOutput {
            offset_x: s.offset_x.get(),
            offset_y: s.offset_y.get(),
            rotate_x: s.rotate_x.get(),
            rotate_y: s.rotate_y.get(),
            scale: s.scale.get(),
            glare_opacity: s.glare_opacity.get(),
            glare_x: s.glare_x.get(),
            glare_y: s.glare_y.get(),
        }
    }
}
