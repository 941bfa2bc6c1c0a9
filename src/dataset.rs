//! Data-attribute parsing into engine configs.
//!
//! Kept free of `web_sys` so the host test suite can include it directly:
//! every function takes an attribute lookup closure instead of an element.

use crate::constants::*;
use folio_motion::{CarouselConfig, ParallaxConfig, ScrollConfig, SpringConfig};

/// Non-finite and unparsable values read as absent.
pub fn parse_f32(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Bare attribute (`data-x` / `data-x=""`) means true.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        None => None,
        Some(s) => match s.as_str() {
            "" | "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
    }
}

pub fn spring_config<F>(attr: F) -> SpringConfig
where
    F: Fn(&str) -> Option<String>,
{
    let base = SpringConfig::default();
    let get = |name: &str| parse_f32(attr(name).as_deref());
    let stiffness = get(ATTR_SPRING_STIFFNESS);
    let damping = get(ATTR_SPRING_DAMPING);
    let mass = get(ATTR_SPRING_MASS);
    if stiffness.is_none() && damping.is_none() && mass.is_none() {
        return base;
    }
    match SpringConfig::new(
        stiffness.unwrap_or(base.stiffness),
        damping.unwrap_or(base.damping),
        mass.unwrap_or(base.mass),
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[dataset] invalid spring config ({e}); using defaults");
            base
        }
    }
}

pub fn parallax_config<F>(attr: F) -> ParallaxConfig
where
    F: Fn(&str) -> Option<String>,
{
    let base = ParallaxConfig::default();
    let num = |name: &str| parse_f32(attr(name).as_deref());
    let flag = |name: &str| parse_flag(attr(name).as_deref());
    let mut cfg = base
        .with_factor(num(ATTR_PARALLAX_FACTOR).unwrap_or(base.factor))
        .with_limit(
            num(ATTR_PARALLAX_LIMIT_X).unwrap_or(base.limit.x),
            num(ATTR_PARALLAX_LIMIT_Y).unwrap_or(base.limit.y),
        )
        .with_initial(
            num(ATTR_PARALLAX_INITIAL_X).unwrap_or(base.initial.x),
            num(ATTR_PARALLAX_INITIAL_Y).unwrap_or(base.initial.y),
        )
        .reversed(flag(ATTR_PARALLAX_REVERSED).unwrap_or(false))
        .with_glare(flag(ATTR_PARALLAX_GLARE).unwrap_or(false))
        .with_spring(spring_config(&attr));
    if let Some(rotation) = num(ATTR_PARALLAX_ROTATION) {
        cfg = cfg.with_rotation(rotation);
    }
    if let Some(scale) = num(ATTR_PARALLAX_SCALE) {
        cfg = cfg.with_scale(scale);
    }
    cfg
}

pub fn scroll_config<F>(attr: F) -> ScrollConfig
where
    F: Fn(&str) -> Option<String>,
{
    let base = ScrollConfig::default();
    let num = |name: &str| parse_f32(attr(name).as_deref());
    match ScrollConfig::new(
        num(ATTR_SCROLL_START).unwrap_or(base.scroll_start),
        num(ATTR_SCROLL_END).unwrap_or(base.scroll_end),
        num(ATTR_SCROLL_THRESHOLD).unwrap_or(base.threshold_px),
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[dataset] invalid scroll config ({e}); using defaults");
            base
        }
    }
}

pub fn carousel_config<F>(attr: F, slide_count: usize) -> CarouselConfig
where
    F: Fn(&str) -> Option<String>,
{
    let autoplay = parse_flag(attr(ATTR_AUTOPLAY).as_deref()).unwrap_or(true);
    let base = CarouselConfig::new(slide_count).with_autoplay(autoplay);
    let interval = attr(ATTR_INTERVAL_MS).and_then(|s| s.trim().parse::<u64>().ok());
    match interval.map(|ms| base.with_interval_ms(ms)) {
        None => base,
        Some(Ok(cfg)) => cfg,
        Some(Err(e)) => {
            log::warn!("[dataset] invalid carousel interval ({e}); using default");
            base
        }
    }
}
