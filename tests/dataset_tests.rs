// Host-side tests for data-attribute parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/dataset.rs"]
mod dataset;

use constants::*;
use dataset::*;
use folio_motion::{ParallaxConfig, ScrollConfig, SpringConfig};
use std::collections::HashMap;
use std::time::Duration;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn numbers_parse_and_reject_garbage() {
    assert_eq!(parse_f32(Some(" 12.5 ")), Some(12.5));
    assert_eq!(parse_f32(Some("-3")), Some(-3.0));
    assert_eq!(parse_f32(Some("abc")), None);
    assert_eq!(parse_f32(Some("NaN")), None);
    assert_eq!(parse_f32(Some("inf")), None);
    assert_eq!(parse_f32(None), None);
}

#[test]
fn bare_flag_is_true() {
    assert_eq!(parse_flag(Some("")), Some(true));
    assert_eq!(parse_flag(Some("TRUE")), Some(true));
    assert_eq!(parse_flag(Some("off")), Some(false));
    assert_eq!(parse_flag(Some("0")), Some(false));
    assert_eq!(parse_flag(Some("maybe")), None);
    assert_eq!(parse_flag(None), None);
}

#[test]
fn empty_element_gets_defaults() {
    let none = attrs(&[]);
    assert_eq!(spring_config(&none), SpringConfig::default());
    assert_eq!(parallax_config(&none), ParallaxConfig::default());
    assert_eq!(scroll_config(&none), ScrollConfig::default());
    let c = carousel_config(&none, 4);
    assert_eq!(c.slide_count, 4);
    assert!(c.autoplay_enabled);
    assert_eq!(c.autoplay_interval, Duration::from_millis(5000));
}

#[test]
fn parallax_attributes_are_applied() {
    let cfg = parallax_config(attrs(&[
        (ATTR_PARALLAX_FACTOR, "0.5"),
        (ATTR_PARALLAX_LIMIT_X, "40"),
        (ATTR_PARALLAX_INITIAL_Y, "-8"),
        (ATTR_PARALLAX_REVERSED, ""),
        (ATTR_PARALLAX_ROTATION, "10"),
        (ATTR_PARALLAX_SCALE, "0"),
        (ATTR_PARALLAX_GLARE, "true"),
        (ATTR_SPRING_STIFFNESS, "300"),
    ]));
    assert_eq!(cfg.factor, 0.5);
    assert_eq!(cfg.limit.x, 40.0);
    assert_eq!(cfg.limit.y, 20.0);
    assert_eq!(cfg.initial.y, -8.0);
    assert!(cfg.reversed);
    assert_eq!(cfg.rotation, Some(10.0));
    assert_eq!(cfg.scale, None);
    assert!(cfg.glare);
    assert_eq!(cfg.spring.stiffness, 300.0);
    assert_eq!(cfg.spring.damping, SpringConfig::default().damping);
}

#[test]
fn invalid_spring_falls_back_whole() {
    let cfg = spring_config(attrs(&[
        (ATTR_SPRING_STIFFNESS, "300"),
        (ATTR_SPRING_MASS, "-1"),
    ]));
    assert_eq!(cfg, SpringConfig::default());
}

#[test]
fn inverted_scroll_window_falls_back() {
    let cfg = scroll_config(attrs(&[(ATTR_SCROLL_START, "200"), (ATTR_SCROLL_END, "50")]));
    assert_eq!(cfg, ScrollConfig::default());

    let cfg = scroll_config(attrs(&[(ATTR_SCROLL_END, "400"), (ATTR_SCROLL_THRESHOLD, "5")]));
    assert_eq!(cfg.scroll_end, 400.0);
    assert_eq!(cfg.threshold_px, 5.0);
}

#[test]
fn carousel_attributes() {
    let c = carousel_config(attrs(&[(ATTR_AUTOPLAY, "false"), (ATTR_INTERVAL_MS, "1200")]), 3);
    assert!(!c.autoplay_enabled);
    assert_eq!(c.autoplay_interval, Duration::from_millis(1200));

    // zero interval keeps the default
    let c = carousel_config(attrs(&[(ATTR_INTERVAL_MS, "0")]), 3);
    assert_eq!(c.autoplay_interval, Duration::from_millis(5000));
}

#[test]
fn css_contract_names_are_custom_properties() {
    for name in [
        CSS_PARALLAX_X,
        CSS_PARALLAX_Y,
        CSS_PARALLAX_ROTATE_X,
        CSS_PARALLAX_ROTATE_Y,
        CSS_PARALLAX_SCALE,
        CSS_GLARE_OPACITY,
        CSS_GLARE_X,
        CSS_GLARE_Y,
        CSS_HEADER_HEIGHT,
        CSS_HEADER_BACKDROP,
    ] {
        assert!(name.starts_with("--"), "{name}");
    }
}
