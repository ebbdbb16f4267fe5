//! Mount/frame/cancel lifecycle shared by the canvas effects.
//!
//! An [`EffectLoop`] owns its effect, its surface and its viewport
//! subscription. Once it leaves [`LoopState::Running`] it never touches the
//! surface again and the subscription has already been released.

use crate::surface::{Extent, Surface};
use crate::viewport::{fit_to_viewport, Subscription, Viewport};
use rand::RngCore;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A per-frame renderer driven by an [`EffectLoop`].
pub trait Effect {
    fn render(&mut self, surface: &mut dyn Surface, rng: &mut dyn RngCore);

    /// Called after the surface has been fitted to a new viewport size.
    fn resized(&mut self, _extent: Extent) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Stopped by its owner (unmount or session teardown).
    Cancelled,
    /// Stopped by its own deadline.
    Expired,
}

impl LoopState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

pub struct EffectLoop<E, S> {
    name: &'static str,
    effect: E,
    surface: S,
    state: LoopState,
    expires_at: Option<Duration>,
    subscription: Option<Subscription>,
    frames: u64,
}

pub type SharedLoop<E, S> = Rc<RefCell<EffectLoop<E, S>>>;

impl<E: Effect, S: Surface> EffectLoop<E, S> {
    /// Fit `surface` to the viewport and take ownership of it.
    pub fn mount(name: &'static str, effect: E, mut surface: S, viewport: Extent) -> Self {
        fit_to_viewport(&mut surface, viewport);
        log::debug!("[{name}] mounted at {}x{}", viewport.width, viewport.height);
        Self {
            name,
            effect,
            surface,
            state: LoopState::Running,
            expires_at: None,
            subscription: None,
            frames: 0,
        }
    }

    /// Stop on the first frame at or after `deadline`.
    pub fn expires_at(mut self, deadline: Duration) -> Self {
        self.expires_at = Some(deadline);
        self
    }

    /// Wrap the loop for shared use and subscribe it to viewport changes.
    /// The subscription holds only a weak reference back to the loop.
    pub fn into_shared(self, viewport: &Viewport) -> SharedLoop<E, S>
    where
        E: 'static,
        S: 'static,
    {
        let shared = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&shared);
        let sub = viewport.subscribe(move |extent| {
            if let Some(lp) = weak.upgrade() {
                lp.borrow_mut().resize(extent);
            }
        });
        shared.borrow_mut().subscription = Some(sub);
        shared
    }

    /// Render one frame unless stopped. Returns the state after the frame.
    pub fn frame(&mut self, now: Duration, rng: &mut dyn RngCore) -> LoopState {
        if !self.state.is_running() {
            return self.state;
        }
        if self.expires_at.is_some_and(|at| now >= at) {
            self.finish(LoopState::Expired);
            return self.state;
        }
        self.effect.render(&mut self.surface, rng);
        self.frames += 1;
        self.state
    }

    pub fn resize(&mut self, extent: Extent) {
        if !self.state.is_running() {
            return;
        }
        fit_to_viewport(&mut self.surface, extent);
        self.effect.resized(extent);
    }

    /// Stop the loop from the outside. Returns false if it had already stopped.
    pub fn cancel(&mut self) -> bool {
        self.stop(LoopState::Cancelled)
    }

    /// Timer-driven counterpart of the frame deadline check.
    pub fn expire(&mut self) -> bool {
        self.stop(LoopState::Expired)
    }

    fn stop(&mut self, state: LoopState) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.finish(state);
        true
    }

    fn finish(&mut self, state: LoopState) {
        self.state = state;
        self.subscription = None;
        log::debug!("[{}] {:?} after {} frames", self.name, state, self.frames);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
