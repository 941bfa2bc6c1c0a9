use crate::constants::*;
use crate::dataset;
use crate::dom;
use crate::events::EventListener;
use crate::render;
use crate::timer::TimeoutScheduler;
use folio_motion::{CarouselController, TimerHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

type Controller = CarouselController<TimeoutScheduler>;

/// One `[data-carousel]` element wired to its controller.
pub struct CarouselWidget {
    root: web::Element,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    controller: RefCell<Controller>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CarouselWidget {
    pub fn mount(window: &web::Window, root: web::Element) -> Rc<Self> {
        let slides = dom::query_all_in(&root, SLIDE_SELECTOR);
        let dots = dom::query_all_in(&root, DOT_SELECTOR);
        let config = dataset::carousel_config(dom::attr_reader(&root), slides.len());

        let widget = Rc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let on_fire = move |handle: TimerHandle| {
                if let Some(widget) = weak.upgrade() {
                    widget.update(|c| c.on_timer_fire(handle));
                }
            };
            let scheduler = TimeoutScheduler::new(window.clone(), on_fire);
            Self {
                root,
                slides,
                dots,
                controller: RefCell::new(CarouselController::new(config, scheduler)),
                listeners: RefCell::new(Vec::new()),
            }
        });
        widget.wire();
        widget.update(Controller::start);
        log::info!(
            "[carousel] mounted slides={} autoplay={}",
            widget.slides.len(),
            config.autoplay_enabled
        );
        widget
    }

    fn update(&self, f: impl FnOnce(&mut Controller)) {
        let state = {
            let mut controller = self.controller.borrow_mut();
            f(&mut *controller);
            controller.state()
        };
        render::apply_carousel(&self.root, &self.slides, &self.dots, &state);
    }

    fn on<F>(self: &Rc<Self>, target: &web::EventTarget, event: &'static str, f: F)
    where
        F: Fn(&mut Controller) + 'static,
    {
        let weak = Rc::downgrade(self);
        let listener = EventListener::attach(target, event, move |_: web::Event| {
            if let Some(widget) = weak.upgrade() {
                widget.update(&f);
            }
        });
        self.listeners.borrow_mut().extend(listener);
    }

    fn wire(self: &Rc<Self>) {
        let root = self.root.clone();
        self.on(&root, "mouseenter", Controller::hover_start);
        self.on(&root, "mouseleave", Controller::hover_end);
        for el in dom::query_all_in(&root, PREV_SELECTOR) {
            self.on(&el, "click", Controller::prev);
        }
        for el in dom::query_all_in(&root, NEXT_SELECTOR) {
            self.on(&el, "click", Controller::next);
        }
        for el in dom::query_all_in(&root, TOGGLE_SELECTOR) {
            self.on(&el, "click", Controller::toggle_autoplay);
        }
        for (i, el) in self.dots.clone().into_iter().enumerate() {
            self.on(&el, "click", move |c: &mut Controller| c.select_index(i));
        }
    }

    /// Stops autoplay and detaches every listener.
    pub fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.update(Controller::stop);
    }
}

pub fn mount_all(window: &web::Window, document: &web::Document) -> Vec<Rc<CarouselWidget>> {
    dom::query_all(document, CAROUSEL_SELECTOR)
        .into_iter()
        .map(|root| CarouselWidget::mount(window, root))
        .collect()
}
