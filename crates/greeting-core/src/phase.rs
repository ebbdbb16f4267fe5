//! Presentation timeline: intro, main content, and the surprise branch.
//!
//! The sequencer owns the phase state and a [`Timeline`] of pending
//! transitions. Callers poll [`Sequencer::advance`] with the time since
//! mount and apply the returned [`Cue`]s to the page and effects.

use crate::config::TimelineConfig;
use crate::surface::Extent;
use crate::timeline::Timeline;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Intro,
    Main,
    SurpriseStreaks,
    SurpriseFinal,
}

impl Phase {
    #[inline]
    pub fn shows_intro(self) -> bool {
        self == Phase::Intro
    }

    /// Main content stays on screen through the surprise phases.
    #[inline]
    pub fn shows_main(self) -> bool {
        self != Phase::Intro
    }

    #[inline]
    pub fn shows_final_message(self) -> bool {
        self == Phase::SurpriseFinal
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseState {
    pub phase: Phase,
    pub shaking: bool,
    pub unmute_prompted: bool,
}

/// Something the host must do as the result of a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    /// Hide the cutscene and render the main content.
    EnterMain,
    MountStreaks,
    FireworkBurst { origin: Vec2 },
    ShakeStart,
    ShakeEnd,
    /// Streaks are done; slide the final message in.
    RevealFinal,
}

pub type Cues = SmallVec<[Cue; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    EndIntro,
    Burst,
    EndShake,
    Final,
}

pub struct Sequencer {
    state: PhaseState,
    timeline: Timeline<Pending>,
    config: TimelineConfig,
    surprise_at: Option<Duration>,
    halted: bool,
}

impl Sequencer {
    /// Start in `Intro` and schedule the switch to `Main`.
    pub fn mount(config: TimelineConfig, now: Duration) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule(now + config.intro, Pending::EndIntro);
        log::info!("[phase] intro for {} ms", config.intro.as_millis());
        Self {
            state: PhaseState::default(),
            timeline,
            config,
            surprise_at: None,
            halted: false,
        }
    }

    pub fn state(&self) -> PhaseState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn surprise_at(&self) -> Option<Duration> {
        self.surprise_at
    }

    pub fn set_unmute_prompted(&mut self, prompted: bool) {
        self.state.unmute_prompted = prompted;
    }

    /// Handle the surprise button. Only honoured in `Main`; later presses
    /// are ignored so bursts and timers are never duplicated.
    ///
    /// Burst, shake end and reveal are scheduled as three independent
    /// deadlines from `now`.
    pub fn trigger_surprise(&mut self, now: Duration) -> Cues {
        let mut cues = Cues::new();
        if self.halted {
            log::debug!("[phase] surprise ignored after halt");
            return cues;
        }
        if self.state.phase != Phase::Main {
            log::debug!("[phase] surprise ignored in {:?}", self.state.phase);
            return cues;
        }
        let cfg = &self.config;
        self.timeline.schedule(now + cfg.burst_delay, Pending::Burst);
        self.timeline
            .schedule(now + cfg.burst_delay + cfg.shake, Pending::EndShake);
        self.timeline.schedule(now + cfg.final_delay, Pending::Final);
        self.state.phase = Phase::SurpriseStreaks;
        self.surprise_at = Some(now);
        log::info!("[phase] surprise at {} ms", now.as_millis());
        cues.push(Cue::MountStreaks);
        cues
    }

    /// Fire every transition due at `now`. `viewport` is read at firing
    /// time so the burst lands on the current center.
    pub fn advance(&mut self, now: Duration, viewport: Extent) -> Cues {
        let mut cues = Cues::new();
        for pending in self.timeline.drain_due(now) {
            match pending {
                Pending::EndIntro => {
                    if self.state.phase == Phase::Intro {
                        self.state.phase = Phase::Main;
                        log::info!("[phase] main at {} ms", now.as_millis());
                        cues.push(Cue::EnterMain);
                    }
                }
                Pending::Burst => {
                    self.state.shaking = true;
                    cues.push(Cue::FireworkBurst {
                        origin: viewport.center(),
                    });
                    cues.push(Cue::ShakeStart);
                }
                Pending::EndShake => {
                    self.state.shaking = false;
                    cues.push(Cue::ShakeEnd);
                }
                Pending::Final => {
                    self.state.phase = Phase::SurpriseFinal;
                    log::info!("[phase] final message at {} ms", now.as_millis());
                    cues.push(Cue::RevealFinal);
                }
            }
        }
        cues
    }

    /// Earliest pending transition, useful for scheduling a wake-up.
    pub fn next_due(&self) -> Option<Duration> {
        self.timeline.next_due()
    }

    /// Drop every pending transition and refuse new ones (session
    /// teardown).
    pub fn halt(&mut self) {
        self.timeline.clear();
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    const VP: Extent = Extent::new(1000, 800);

    #[test]
    fn intro_switches_to_main_after_six_seconds() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        assert!(seq.advance(ms(5999), VP).is_empty());
        assert_eq!(seq.phase(), Phase::Intro);
        assert_eq!(seq.advance(ms(6000), VP).as_slice(), &[Cue::EnterMain]);
        assert_eq!(seq.phase(), Phase::Main);
    }

    #[test]
    fn surprise_is_ignored_during_intro() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        assert!(seq.trigger_surprise(ms(100)).is_empty());
        assert_eq!(seq.phase(), Phase::Intro);
        assert_eq!(seq.next_due(), Some(ms(6000)));
    }

    #[test]
    fn repeat_surprise_is_ignored() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        seq.advance(ms(6000), VP);
        assert_eq!(seq.trigger_surprise(ms(6000)).as_slice(), &[Cue::MountStreaks]);
        assert!(seq.trigger_surprise(ms(6100)).is_empty());
        seq.advance(ms(9000), VP);
        assert!(seq.trigger_surprise(ms(9100)).is_empty());
        assert_eq!(seq.surprise_at(), Some(ms(6000)));
    }

    #[test]
    fn shake_is_a_bounded_pulse() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        seq.advance(ms(6000), VP);
        seq.trigger_surprise(ms(6000));
        let cues = seq.advance(ms(7200), VP);
        assert_eq!(
            cues.as_slice(),
            &[
                Cue::FireworkBurst {
                    origin: Vec2::new(500.0, 400.0)
                },
                Cue::ShakeStart
            ]
        );
        assert!(seq.state().shaking);
        assert!(seq.advance(ms(7699), VP).is_empty());
        assert_eq!(seq.advance(ms(7700), VP).as_slice(), &[Cue::ShakeEnd]);
        assert!(!seq.state().shaking);
    }

    #[test]
    fn late_poll_fires_everything_in_order() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        seq.advance(ms(6000), VP);
        seq.trigger_surprise(ms(6000));
        let cues = seq.advance(ms(20_000), VP);
        assert_eq!(
            cues.as_slice(),
            &[
                Cue::FireworkBurst {
                    origin: VP.center()
                },
                Cue::ShakeStart,
                Cue::ShakeEnd,
                Cue::RevealFinal
            ]
        );
        assert_eq!(seq.phase(), Phase::SurpriseFinal);
        assert!(seq.next_due().is_none());
    }

    #[test]
    fn halt_cancels_pending_transitions() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        seq.halt();
        assert!(seq.advance(ms(60_000), VP).is_empty());
        assert_eq!(seq.phase(), Phase::Intro);
    }

    #[test]
    fn surprise_after_halt_is_ignored() {
        let mut seq = Sequencer::mount(TimelineConfig::default(), Duration::ZERO);
        seq.advance(ms(6000), VP);
        seq.halt();
        assert!(seq.is_halted());
        assert!(seq.trigger_surprise(ms(7000)).is_empty());
        assert_eq!(seq.phase(), Phase::Main);
        assert!(seq.next_due().is_none());
    }
}
