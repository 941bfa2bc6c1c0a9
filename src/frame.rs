use crate::render;
use folio_motion::{BindingId, FrameClock, MotionScene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches.
pub struct FrameContext {
    pub scene: Rc<RefCell<MotionScene>>,
    pub parallax: Vec<(BindingId, web::HtmlElement)>,
    pub header: Option<web::HtmlElement>,
    clock: FrameClock,
    origin: Instant,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<MotionScene>>,
        parallax: Vec<(BindingId, web::HtmlElement)>,
        header: Option<web::HtmlElement>,
    ) -> Self {
        Self {
            scene,
            parallax,
            header,
            clock: FrameClock::default(),
            origin: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let dt_sec = self.clock.advance(self.origin.elapsed());
        let mut scene = self.scene.borrow_mut();
        scene.frame(dt_sec);
        // settled elements produce no changes, so an idle page writes nothing
        for (id, out) in scene.take_changed_parallax() {
            if let Some((_, el)) = self.parallax.iter().find(|(bound, _)| *bound == id) {
                render::apply_parallax(el, &out);
            }
        }
        if let (Some(el), Some(out)) = (&self.header, scene.take_changed_header()) {
            render::apply_header(el, &out);
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that can be stopped.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            ctx.borrow_mut().frame();
            pending_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&tick));
        Self { tick, pending }
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
