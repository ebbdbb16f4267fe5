//! `requestAnimationFrame` chains.
//!
//! Every effect gets its own chain; a chain ends when its tick returns
//! `false` or when its [`LoopHandle`] is cancelled.

use greeting_core::{Effect, SharedLoop, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct LoopHandle {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl LoopHandle {
    /// Stop the chain and release its closure. Must not be called from the
    /// chain's own tick.
    pub fn cancel(&self) {
        self.active.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = slot.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(mut tick: impl FnMut() -> bool + 'static) -> LoopHandle {
    let slot: TickSlot = Rc::new(RefCell::new(None));
    let active = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None));

    let slot_tick = slot.clone();
    let active_tick = active.clone();
    let raf_tick = raf_id.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if !active_tick.get() {
            return;
        }
        if !tick() {
            active_tick.set(false);
            return;
        }
        raf_tick.set(request_frame(&slot_tick));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&slot));

    LoopHandle {
        active,
        raf_id,
        tick: slot,
    }
}

/// Drive a shared effect loop from its own frame chain. `clock` supplies
/// time since mount; the chain stops as soon as the loop stops.
pub fn run_effect<E, S>(
    effect: SharedLoop<E, S>,
    clock: impl Fn() -> Duration + 'static,
) -> LoopHandle
where
    E: Effect + 'static,
    S: Surface + 'static,
{
    let mut rng = StdRng::from_entropy();
    start_loop(move || effect.borrow_mut().frame(clock(), &mut rng).is_running())
}
