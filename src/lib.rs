#![cfg(target_arch = "wasm32")]
use folio_motion::{HeaderConfig, MotionScene, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod carousel;
mod constants;
mod dataset;
mod dom;
mod events;
mod frame;
mod render;
mod timeouts;
mod timer;

use carousel::CarouselWidget;
use constants::{HEADER_SELECTOR, PARALLAX_SELECTOR};
use events::{PointerSource, ScrollSource};
use frame::{FrameContext, FrameLoop};

/// Everything mounted on the page; dropped by `teardown`.
struct Runtime {
    scene: Rc<RefCell<MotionScene>>,
    pointer: PointerSource,
    scroll: ScrollSource,
    frame_loop: FrameLoop,
    carousels: Vec<Rc<CarouselWidget>>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

impl Runtime {
    fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (width, height) = dom::viewport_size(&window).unwrap_or((0.0, 0.0));

        let header_el = dom::query_all(&document, HEADER_SELECTOR)
            .into_iter()
            .find_map(|el| el.dyn_into::<web::HtmlElement>().ok());
        let scroll_config = header_el
            .as_ref()
            .map(|el| dataset::scroll_config(dom::attr_reader(el)))
            .unwrap_or_default();
        let scene = Rc::new(RefCell::new(MotionScene::new(
            Viewport::new(width, height),
            scroll_config,
        )));

        if let Some(el) = &header_el {
            scene.borrow_mut().set_header(HeaderConfig {
                spring: dataset::spring_config(dom::attr_reader(el)),
                ..HeaderConfig::default()
            });
        }

        let mut parallax = Vec::new();
        for el in dom::query_all(&document, PARALLAX_SELECTOR) {
            let config = dataset::parallax_config(dom::attr_reader(&el));
            let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let id = scene.borrow_mut().bind_parallax(config);
            parallax.push((id, el));
        }
        log::info!(
            "[runtime] parallax={} header={} viewport={}x{}",
            parallax.len(),
            header_el.is_some(),
            width,
            height
        );

        scene.borrow_mut().start();
        let mut pointer = PointerSource::new(scene.clone());
        pointer.start();
        let mut scroll = ScrollSource::new(scene.clone());
        scroll.start();

        let ctx = Rc::new(RefCell::new(FrameContext::new(
            scene.clone(),
            parallax,
            header_el,
        )));
        let frame_loop = FrameLoop::start(ctx);
        let carousels = carousel::mount_all(&window, &document);

        Ok(Self {
            scene,
            pointer,
            scroll,
            frame_loop,
            carousels,
        })
    }

    fn teardown(mut self) {
        self.frame_loop.stop();
        for c in &self.carousels {
            c.teardown();
        }
        self.pointer.stop();
        self.scroll.stop();
        self.scene.borrow_mut().teardown();
        log::info!("[runtime] torn down");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    RUNTIME.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(());
        }
        match Runtime::mount() {
            Ok(rt) => {
                *slot.borrow_mut() = Some(rt);
                Ok(())
            }
            Err(e) => {
                log::error!("init error: {:?}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    })
}

/// Stops every loop, timer and listener. Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(rt) = RUNTIME.with(|slot| slot.borrow_mut().take()) {
        rt.teardown();
    }
}
