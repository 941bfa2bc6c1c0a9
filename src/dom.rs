use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// CSS-pixel viewport size; `None` when the window cannot report it.
pub fn viewport_size(window: &web::Window) -> Option<(f32, f32)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

fn collect_elements(list: Result<web::NodeList, JsValue>) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = list {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_elements(document.query_selector_all(selector))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_elements(root.query_selector_all(selector))
}

/// Attribute lookup closure for `dataset` parsing.
pub fn attr_reader(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| el.get_attribute(name)
}

#[inline]
pub fn set_css_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    _ = el.set_attribute(name, value);
}
