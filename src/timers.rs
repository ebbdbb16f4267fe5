use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot `setTimeout`; cleared when dropped if it has not fired yet.
pub struct Timeout {
    id: i32,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if !self.fired.get() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(self.id);
            }
        }
    }
}

pub fn set_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Option<Timeout> {
    let window = web::window()?;
    let fired = Rc::new(Cell::new(false));
    let fired_cb = fired.clone();
    let mut callback = Some(callback);
    let closure = Closure::wrap(Box::new(move || {
        fired_cb.set(true);
        if let Some(cb) = callback.take() {
            cb();
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay.as_millis().min(i32::MAX as u128) as i32,
        )
        .map_err(|e| log::warn!("setTimeout error: {:?}", e))
        .ok()?;
    Some(Timeout {
        id,
        fired,
        _closure: closure,
    })
}
