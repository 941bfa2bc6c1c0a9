use crate::timeouts::TimeoutTable;
use folio_motion::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `setTimeout`-backed scheduler. One callback serves every timeout; the
/// handle travels as the timeout argument and expiries are reported through
/// `on_fire`, so the owner can tell live from stale.
pub struct TimeoutScheduler {
    window: web::Window,
    table: Rc<RefCell<TimeoutTable>>,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl TimeoutScheduler {
    pub fn new(window: web::Window, on_fire: impl Fn(TimerHandle) + 'static) -> Self {
        let table = Rc::new(RefCell::new(TimeoutTable::new()));
        let table_cb = table.clone();
        let callback = Closure::wrap(Box::new(move |arg: JsValue| {
            let Some(raw) = arg.as_f64() else {
                return;
            };
            let handle = TimerHandle(raw as u64);
            // released before `on_fire`, which usually re-arms
            let live = table_cb.borrow_mut().remove(handle).is_some();
            if live {
                on_fire(handle);
            }
        }) as Box<dyn FnMut(JsValue)>);
        Self {
            window,
            table,
            callback,
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn arm(&mut self, delay: Duration) -> TimerHandle {
        let handle = self.table.borrow_mut().reserve();
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self.window.set_timeout_with_callback_and_timeout_and_arguments_1(
            self.callback.as_ref().unchecked_ref(),
            ms,
            &JsValue::from_f64(handle.0 as f64),
        ) {
            Ok(id) => self.table.borrow_mut().insert(handle, id),
            Err(e) => log::warn!("[timer] setTimeout failed: {:?}", e),
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(id) = self.table.borrow_mut().remove(handle) {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for TimeoutScheduler {
    // the shared callback dies with us, so nothing may still point at it
    fn drop(&mut self) {
        for id in self.table.borrow_mut().drain() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
