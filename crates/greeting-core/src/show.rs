//! Everything the presentation schedules besides the canvas loops: phase
//! timeline, heart spawner, carousel and the audio gate, advanced together
//! from one clock.

use crate::audio::AudioGate;
use crate::carousel::Carousel;
use crate::config::ShowConfig;
use crate::hearts::{HeartEvents, HeartSpawner};
use crate::phase::{Cues, Phase, PhaseState, Sequencer};
use crate::surface::Extent;
use rand::Rng;
use std::time::Duration;

/// What changed during one [`Show::tick`].
#[derive(Debug, Default)]
pub struct ShowUpdate {
    pub cues: Cues,
    pub hearts: HeartEvents,
    pub carousel: Option<usize>,
}

impl ShowUpdate {
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty() && self.hearts.is_empty() && self.carousel.is_none()
    }
}

pub struct Show {
    sequencer: Sequencer,
    hearts: HeartSpawner,
    carousel: Carousel,
    audio: AudioGate,
}

impl Show {
    pub fn mount(config: &ShowConfig, now: Duration) -> Self {
        Self {
            sequencer: Sequencer::mount(config.timeline.clone(), now),
            hearts: HeartSpawner::new(config.hearts.clone(), now),
            carousel: Carousel::new(config.photo_count, config.carousel_interval, now),
            audio: AudioGate::default(),
        }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, viewport: Extent, rng: &mut R) -> ShowUpdate {
        ShowUpdate {
            cues: self.sequencer.advance(now, viewport),
            hearts: self.hearts.tick(now, rng),
            carousel: self.carousel.tick(now),
        }
    }

    pub fn press_surprise(&mut self, now: Duration) -> Cues {
        self.sequencer.trigger_surprise(now)
    }

    pub fn autoplay_result(&mut self, ok: bool) -> bool {
        if ok {
            self.audio.autoplay_started();
        } else {
            self.audio.autoplay_rejected();
        }
        self.sync_unmute_prompt()
    }

    pub fn unmute_result(&mut self, ok: bool) -> bool {
        self.audio.unmute_result(ok);
        self.sync_unmute_prompt()
    }

    fn sync_unmute_prompt(&mut self) -> bool {
        let prompted = self.audio.needs_unmute_prompt();
        self.sequencer.set_unmute_prompted(prompted);
        prompted
    }

    /// Stop spawning and cancel pending transitions. Returns heart ids still
    /// on screen.
    pub fn teardown(&mut self) -> Vec<crate::hearts::HeartId> {
        self.sequencer.halt();
        self.hearts.teardown()
    }

    pub fn is_torn_down(&self) -> bool {
        self.sequencer.is_halted()
    }

    pub fn state(&self) -> PhaseState {
        self.sequencer.state()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn live_hearts(&self) -> usize {
        self.hearts.live()
    }
}
