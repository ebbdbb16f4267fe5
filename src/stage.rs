//! Page-level owner of the effects: mounts the canvas loops, applies the
//! show's cues to the DOM and tears everything down on `pagehide`.

use crate::canvas::CanvasSurface;
use crate::dom::{self, Listener};
use crate::frame::{self, LoopHandle};
use crate::hearts::HeartLayer;
use crate::overlay;
use crate::photos;
use crate::timers::{self, Timeout};
use greeting_core::{
    Cue, Effect, EffectLoop, Fireworks, SharedLoop, Show, ShowConfig, Starfield, StreakField, Viewport,
};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub const BACKGROUND_CANVAS_ID: &str = "background-canvas";
pub const FIREWORKS_CANVAS_ID: &str = "fireworks-canvas";

struct Running<E> {
    effect: SharedLoop<E, CanvasSurface>,
    frames: LoopHandle,
}

impl<E: Effect> Running<E> {
    fn stop(&self) {
        self.effect.borrow_mut().cancel();
        self.frames.cancel();
    }
}

struct Streaks {
    running: Running<StreakField>,
    _expiry: Option<Timeout>,
}

pub struct Stage {
    started: Instant,
    config: ShowConfig,
    document: web::Document,
    viewport: Viewport,
    show: Show,
    rng: StdRng,
    starfield: Option<Running<Starfield>>,
    fireworks: Option<Running<Fireworks>>,
    streaks: Option<Streaks>,
    hearts: HeartLayer,
    resize: Option<Listener>,
    director: Option<LoopHandle>,
}

impl Stage {
    pub fn new(document: web::Document, config: ShowConfig) -> Self {
        let started = Instant::now();
        let viewport = Viewport::new(dom::viewport_extent());
        let show = Show::mount(&config, Duration::ZERO);
        let hearts = HeartLayer::new(document.clone(), config.hearts.animation);
        Self {
            started,
            config,
            document,
            viewport,
            show,
            rng: StdRng::from_entropy(),
            starfield: None,
            fireworks: None,
            streaks: None,
            hearts,
            resize: None,
            director: None,
        }
    }

    #[inline]
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn clock(&self) -> impl Fn() -> Duration + 'static {
        let started = self.started;
        move || started.elapsed()
    }

    /// Mount the session-long effects and the single resize listener.
    pub fn mount(&mut self) {
        overlay::show_intro(&self.document);
        photos::wire_photos(&self.document, self.config.photo_count);

        if let Some(window) = web::window() {
            let viewport = self.viewport.clone();
            self.resize = dom::listen(&window, "resize", move |_| {
                viewport.publish(dom::viewport_extent());
            });
        }

        let extent = self.viewport.extent();
        match CanvasSurface::by_id(&self.document, BACKGROUND_CANVAS_ID) {
            Ok(surface) => {
                let field = Starfield::generate(&mut self.rng, extent, &self.config.starfield);
                let effect = EffectLoop::mount("starfield", field, surface, extent)
                    .into_shared(&self.viewport);
                let frames = frame::run_effect(effect.clone(), self.clock());
                self.starfield = Some(Running { effect, frames });
            }
            Err(e) => log::warn!("starfield disabled: {e}"),
        }

        match CanvasSurface::by_id(&self.document, FIREWORKS_CANVAS_ID) {
            Ok(surface) => {
                let fw = Fireworks::new(self.config.fireworks.clone());
                let effect =
                    EffectLoop::mount("fireworks", fw, surface, extent).into_shared(&self.viewport);
                let frames = frame::run_effect(effect.clone(), self.clock());
                self.fireworks = Some(Running { effect, frames });
            }
            Err(e) => log::warn!("fireworks disabled: {e}"),
        }
        log::info!(
            "stage mounted at {}x{} with {} resize subscribers",
            extent.width,
            extent.height,
            self.viewport.subscriber_count()
        );
    }

    /// One director frame: timeline, hearts and carousel.
    pub fn frame(&mut self) {
        if self.show.is_torn_down() {
            return;
        }
        let now = self.now();
        let update = self.show.tick(now, self.viewport.extent(), &mut self.rng);
        for cue in update.cues {
            self.apply(cue, now);
        }
        for event in update.hearts {
            self.hearts.apply(event);
        }
        if let Some(index) = update.carousel {
            photos::set_active(&self.document, index, self.config.photo_count);
        }
    }

    pub fn press_surprise(&mut self) {
        if self.show.is_torn_down() {
            log::debug!("surprise ignored after teardown");
            return;
        }
        let now = self.now();
        for cue in self.show.press_surprise(now) {
            self.apply(cue, now);
        }
    }

    fn apply(&mut self, cue: Cue, now: Duration) {
        log::debug!("cue {:?} at {} ms", cue, now.as_millis());
        match cue {
            Cue::EnterMain => overlay::show_main(&self.document),
            Cue::MountStreaks => self.mount_streaks(now),
            Cue::FireworkBurst { origin } => self.burst(origin),
            Cue::ShakeStart => overlay::set_shaking(&self.document, true),
            Cue::ShakeEnd => overlay::set_shaking(&self.document, false),
            Cue::RevealFinal => {
                self.unmount_streaks();
                overlay::reveal_final(&self.document);
            }
        }
    }

    fn burst(&mut self, origin: Vec2) {
        if let Some(fw) = &self.fireworks {
            fw.effect.borrow_mut().effect_mut().emit(origin, &mut self.rng);
        }
    }

    /// Streaks stop on whichever comes first: their own deadline (checked
    /// per frame and by a timer) or the reveal cue.
    fn mount_streaks(&mut self, now: Duration) {
        if self.streaks.is_some() || self.show.is_torn_down() {
            return;
        }
        let surface = match CanvasSurface::by_id(&self.document, overlay::STREAK_CANVAS_ID) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("streaks disabled: {e}");
                return;
            }
        };
        overlay::set_streaks_visible(&self.document, true);
        let extent = self.viewport.extent();
        let lifetime = self.config.streaks.lifetime;
        let field = StreakField::generate(&mut self.rng, extent, self.config.streaks.clone());
        let effect = EffectLoop::mount("streaks", field, surface, extent)
            .expires_at(now + lifetime)
            .into_shared(&self.viewport);

        let weak = Rc::downgrade(&effect);
        let document = self.document.clone();
        let expiry = timers::set_timeout(lifetime, move || {
            if let Some(lp) = weak.upgrade() {
                lp.borrow_mut().expire();
            }
            overlay::set_streaks_visible(&document, false);
        });
        let frames = frame::run_effect(effect.clone(), self.clock());
        self.streaks = Some(Streaks {
            running: Running { effect, frames },
            _expiry: expiry,
        });
    }

    fn unmount_streaks(&mut self) {
        if let Some(streaks) = self.streaks.take() {
            streaks.running.stop();
            overlay::set_streaks_visible(&self.document, false);
        }
    }

    pub fn autoplay_result(&mut self, ok: bool) -> bool {
        self.show.autoplay_result(ok)
    }

    pub fn unmute_result(&mut self, ok: bool) -> bool {
        self.show.unmute_result(ok)
    }

    pub fn set_director(&mut self, handle: LoopHandle) {
        self.director = Some(handle);
    }

    /// Cancel every loop, drop the resize listener and clear live hearts.
    pub fn teardown(&mut self) {
        if self.show.is_torn_down() {
            return;
        }
        self.unmount_streaks();
        if let Some(sf) = self.starfield.take() {
            sf.stop();
        }
        if let Some(fw) = self.fireworks.take() {
            fw.stop();
        }
        self.resize = None;
        for id in self.show.teardown() {
            self.hearts.remove(id);
        }
        if let Some(director) = self.director.take() {
            director.cancel();
        }
        log::info!(
            "stage torn down; {} resize subscribers, {} hearts left",
            self.viewport.subscriber_count(),
            self.hearts.live()
        );
    }
}
