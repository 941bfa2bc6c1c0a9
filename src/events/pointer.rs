use super::EventListener;
use crate::dom;
use folio_motion::MotionScene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feeds window pointer signals into the scene's pointer telemetry.
pub struct PointerSource {
    scene: Rc<RefCell<MotionScene>>,
    listeners: Vec<EventListener>,
}

impl PointerSource {
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
            log::warn!("[pointer] no window; telemetry stays at its initial state");
            return;
        };
        if let Some((w, h)) = dom::viewport_size(&window) {
            self.scene.borrow_mut().pointer.set_viewport(w, h);
        }

        // pointermove
        {
            let scene = self.scene.clone();
            self.listeners.extend(EventListener::attach(
                &window,
                "pointermove",
                move |ev: web::PointerEvent| {
                    scene
                        .borrow_mut()
                        .pointer
                        .handle_move(ev.client_x() as f32, ev.client_y() as f32);
                },
            ));
        }

        // leaving the page; `relatedTarget == null` means the pointer left the document
        if let Some(document) = window.document() {
            let scene = self.scene.clone();
            self.listeners.extend(EventListener::attach(
                &document,
                "mouseout",
                move |ev: web::MouseEvent| {
                    if ev.related_target().is_none() {
                        scene.borrow_mut().pointer.handle_leave();
                    }
                },
            ));
        }

        // resize
        {
            let scene = self.scene.clone();
            let window_resize = window.clone();
            self.listeners.extend(EventListener::attach(
                &window,
                "resize",
                move |_: web::Event| {
                    if let Some((w, h)) = dom::viewport_size(&window_resize) {
                        scene.borrow_mut().pointer.set_viewport(w, h);
                    }
                },
            ));
        }

        self.scene.borrow_mut().pointer.start();
    }

    /// Idempotent; safe before `start`.
    pub fn stop(&mut self) {
        self.listeners.clear();
        self.scene.borrow_mut().pointer.stop();
    }
}
