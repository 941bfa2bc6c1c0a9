//! Morphing site header driven by scroll progress.

use crate::constants::{HEADER_BACKDROP_OPACITY, HEADER_HEIGHT_PX};
use crate::scroll::ScrollState;
use crate::spring::{map_range, Spring, SpringConfig};

const PROGRESS_DOMAIN: (f32, f32) = (0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderConfig {
    /// Height at progress 0 and at progress 1.
    pub height_px: (f32, f32),
    pub backdrop_opacity: (f32, f32),
    pub spring: SpringConfig,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            height_px: HEADER_HEIGHT_PX,
            backdrop_opacity: HEADER_BACKDROP_OPACITY,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderOutput {
    pub height_px: f32,
    pub backdrop_opacity: f32,
    /// Binary flag straight from the scroll threshold; not smoothed.
    pub scrolled: bool,
}

#[derive(Clone, Debug)]
pub struct HeaderMotion {
    config: HeaderConfig,
    height: Spring,
    backdrop: Spring,
    scrolled: bool,
}

impl HeaderMotion {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            height: Spring::new(config.spring, config.height_px.0),
            backdrop: Spring::new(config.spring, config.backdrop_opacity.0),
            scrolled: false,
            config,
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn update(&mut self, scroll: &ScrollState, dt_sec: f32) -> HeaderOutput {
        self.height.set_target(map_range(
            scroll.progress,
            PROGRESS_DOMAIN,
            self.config.height_px,
            true,
        ));
        self.backdrop.set_target(map_range(
            scroll.progress,
            PROGRESS_DOMAIN,
            self.config.backdrop_opacity,
            true,
        ));
        self.scrolled = scroll.past_threshold;
        self.height.tick(dt_sec);
        self.backdrop.tick(dt_sec);
        self.output()
    }

    pub fn is_at_rest(&self) -> bool {
        self.height.is_at_rest() && self.backdrop.is_at_rest()
    }

    pub fn output(&self) -> HeaderOutput {
        HeaderOutput {
            height_px: self.height.get(),
            backdrop_opacity: self.backdrop.get(),
            scrolled: self.scrolled,
        }
    }
}
