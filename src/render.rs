//! Writes engine outputs back into the DOM.

use crate::constants::*;
use crate::dom::{set_attr, set_css_var};
use folio_motion::{CarouselState, Direction, HeaderOutput, ParallaxOutput};
use web_sys as web;

fn px(v: f32) -> String {
    format!("{v:.3}px")
}

fn deg(v: f32) -> String {
    format!("{v:.3}deg")
}

fn pct(v: f32) -> String {
    format!("{v:.2}%")
}

pub fn apply_parallax(el: &web::HtmlElement, out: &ParallaxOutput) {
    set_css_var(el, CSS_PARALLAX_X, &px(out.offset_x));
    set_css_var(el, CSS_PARALLAX_Y, &px(out.offset_y));
    set_css_var(el, CSS_PARALLAX_ROTATE_X, &deg(out.rotate_x));
    set_css_var(el, CSS_PARALLAX_ROTATE_Y, &deg(out.rotate_y));
    set_css_var(el, CSS_PARALLAX_SCALE, &format!("{:.4}", out.scale));
    set_css_var(el, CSS_GLARE_OPACITY, &format!("{:.4}", out.glare_opacity));
    set_css_var(el, CSS_GLARE_X, &pct(out.glare_x));
    set_css_var(el, CSS_GLARE_Y, &pct(out.glare_y));
}

pub fn apply_header(el: &web::HtmlElement, out: &HeaderOutput) {
    set_css_var(el, CSS_HEADER_HEIGHT, &px(out.height_px));
    set_css_var(el, CSS_HEADER_BACKDROP, &format!("{:.4}", out.backdrop_opacity));
    set_attr(el, ATTR_SCROLLED, bool_attr(out.scrolled));
}

fn bool_attr(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

fn direction_attr(direction: Direction) -> &'static str {
    match direction {
        Direction::Backward => "backward",
        Direction::None => "none",
        Direction::Forward => "forward",
    }
}

pub fn apply_carousel(
    root: &web::Element,
    slides: &[web::Element],
    dots: &[web::Element],
    state: &CarouselState,
) {
    let index = state.active_index;
    set_attr(
        root,
        ATTR_ACTIVE_INDEX,
        &index.map(|i| i.to_string()).unwrap_or_default(),
    );
    set_attr(root, ATTR_DIRECTION, direction_attr(state.direction));
    set_attr(root, ATTR_AUTOPLAYING, bool_attr(state.is_auto_playing));
    set_attr(root, ATTR_HOVERING, bool_attr(state.is_hovering));
    for group in [slides, dots] {
        for (i, el) in group.iter().enumerate() {
            set_attr(el, ATTR_ACTIVE, bool_attr(Some(i) == index));
        }
    }
}
