//! Shared viewport observable and the surface sizing routine.
//!
//! One window resize listener feeds [`Viewport::publish`]; every
//! surface-owning loop holds a [`Subscription`] that is released when the
//! loop stops or is dropped.

use crate::surface::{Extent, Surface};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type ResizeCallback = Rc<RefCell<dyn FnMut(Extent)>>;

struct Hub {
    current: Extent,
    next_id: u64,
    subscribers: FnvHashMap<u64, ResizeCallback>,
}

/// Cloneable handle to the current viewport size and its subscribers.
#[derive(Clone)]
pub struct Viewport {
    hub: Rc<RefCell<Hub>>,
}

impl Viewport {
    pub fn new(initial: Extent) -> Self {
        Self {
            hub: Rc::new(RefCell::new(Hub {
                current: initial,
                next_id: 0,
                subscribers: FnvHashMap::default(),
            })),
        }
    }

    pub fn extent(&self) -> Extent {
        self.hub.borrow().current
    }

    pub fn subscribe(&self, callback: impl FnMut(Extent) + 'static) -> Subscription {
        let mut hub = self.hub.borrow_mut();
        let id = hub.next_id;
        hub.next_id += 1;
        hub.subscribers
            .insert(id, Rc::new(RefCell::new(callback)) as ResizeCallback);
        Subscription {
            hub: Rc::downgrade(&self.hub),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.borrow().subscribers.len()
    }

    /// Record a new size and notify every subscriber. Callbacks run after
    /// the hub borrow is released so they may drop their own subscription.
    pub fn publish(&self, extent: Extent) -> usize {
        let callbacks: Vec<ResizeCallback> = {
            let mut hub = self.hub.borrow_mut();
            hub.current = extent;
            hub.subscribers.values().cloned().collect()
        };
        for cb in &callbacks {
            (&mut *cb.borrow_mut())(extent);
        }
        callbacks.len()
    }
}

/// Registration on a [`Viewport`]; unsubscribes on drop.
pub struct Subscription {
    hub: Weak<RefCell<Hub>>,
    id: u64,
}

impl Subscription {
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().subscribers.remove(&self.id);
        }
    }
}

/// Match a surface's backing store to the viewport.
///
/// Only writes when the size differs: assigning a canvas's width or height
/// clears it even when the value is unchanged.
pub fn fit_to_viewport<S: Surface + ?Sized>(surface: &mut S, viewport: Extent) {
    if surface.size() != viewport {
        surface.set_size(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use std::cell::Cell;

    #[test]
    fn fitting_twice_equals_fitting_once() {
        let vp = Extent::new(1280, 720);
        let mut once = RecordingSurface::new(Extent::new(300, 150));
        fit_to_viewport(&mut once, vp);
        let mut twice = RecordingSurface::new(Extent::new(300, 150));
        fit_to_viewport(&mut twice, vp);
        fit_to_viewport(&mut twice, vp);
        assert_eq!(once.size(), twice.size());
        assert_eq!(twice.size(), vp);
        assert_eq!(twice.resizes(), 1);
    }

    #[test]
    fn publish_reaches_every_subscriber() {
        let viewport = Viewport::new(Extent::new(100, 100));
        let seen = Rc::new(Cell::new(0));
        let s1 = {
            let seen = seen.clone();
            viewport.subscribe(move |_| seen.set(seen.get() + 1))
        };
        let s2 = {
            let seen = seen.clone();
            viewport.subscribe(move |_| seen.set(seen.get() + 1))
        };
        assert_eq!(viewport.publish(Extent::new(200, 100)), 2);
        assert_eq!(seen.get(), 2);
        assert_eq!(viewport.extent(), Extent::new(200, 100));
        drop(s1);
        s2.cancel();
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn callback_may_release_its_own_subscription() {
        let viewport = Viewport::new(Extent::default());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let sub = {
            let slot = slot.clone();
            viewport.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);
        viewport.publish(Extent::new(1, 1));
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_viewport_is_harmless() {
        let viewport = Viewport::new(Extent::default());
        let sub = viewport.subscribe(|_| {});
        drop(viewport);
        drop(sub);
    }
}
