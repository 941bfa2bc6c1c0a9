use super::EventListener;
use crate::dom;
use folio_motion::MotionScene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feeds the window scroll offset into the scene's scroll telemetry.
pub struct ScrollSource {
    scene: Rc<RefCell<MotionScene>>,
    listeners: Vec<EventListener>,
}

impl ScrollSource {
    pub fn new(scene: Rc<RefCell<MotionScene>>) -> Self {
        Self {
            scene,
            listeners: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        let Some(window) = web::window() else {
            log::warn!("[scroll] no window; telemetry stays at its initial state");
            return;
        };
        self.scene.borrow_mut().scroll.start();
        // pages restored mid-scroll start past the top
        self.scene
            .borrow_mut()
            .scroll
            .handle_scroll(dom::scroll_offset(&window));

        let scene = self.scene.clone();
        let window_scroll = window.clone();
        self.listeners.extend(EventListener::attach(
            &window,
            "scroll",
            move |_: web::Event| {
                scene
                    .borrow_mut()
                    .scroll
                    .handle_scroll(dom::scroll_offset(&window_scroll));
            },
        ));
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.scene.borrow_mut().scroll.stop();
    }
}
