// End-to-end timeline checks: the show, the fireworks loop and the streak
// loop wired together the same way the web stage wires them.

use greeting_core::{
    Cue, EffectLoop, Extent, Fireworks, Phase, RecordingSurface, SharedLoop, Show, ShowConfig,
    StreakField, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const VP: Extent = Extent::new(1920, 1080);
const TICK_MS: u64 = 16;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

struct Harness {
    config: ShowConfig,
    viewport: Viewport,
    show: Show,
    fireworks: SharedLoop<Fireworks, RecordingSurface>,
    streaks: Option<SharedLoop<StreakField, RecordingSurface>>,
    rng: StdRng,
    log: Vec<(u64, Cue)>,
}

impl Harness {
    fn new() -> Self {
        let config = ShowConfig::default();
        let viewport = Viewport::new(VP);
        let fireworks = EffectLoop::mount(
            "fireworks",
            Fireworks::new(config.fireworks.clone()),
            RecordingSurface::default(),
            VP,
        )
        .into_shared(&viewport);
        Self {
            show: Show::mount(&config, Duration::ZERO),
            config,
            viewport,
            fireworks,
            streaks: None,
            rng: StdRng::seed_from_u64(2024),
            log: Vec::new(),
        }
    }

    fn apply(&mut self, now: Duration, cue: Cue) {
        self.log.push((now.as_millis() as u64, cue));
        match cue {
            Cue::MountStreaks => {
                let field = StreakField::generate(&mut self.rng, VP, self.config.streaks.clone());
                let lp = EffectLoop::mount("streaks", field, RecordingSurface::default(), VP)
                    .expires_at(now + self.config.streaks.lifetime)
                    .into_shared(&self.viewport);
                self.streaks = Some(lp);
            }
            Cue::FireworkBurst { origin } => {
                self.fireworks
                    .borrow_mut()
                    .effect_mut()
                    .emit(origin, &mut self.rng);
            }
            Cue::RevealFinal => {
                if let Some(st) = &self.streaks {
                    st.borrow_mut().cancel();
                }
            }
            _ => {}
        }
    }

    fn tick(&mut self, now: Duration) {
        let update = self.show.tick(now, self.viewport.extent(), &mut self.rng);
        for cue in update.cues {
            self.apply(now, cue);
        }
        self.fireworks.borrow_mut().frame(now, &mut self.rng);
        if let Some(st) = self.streaks.clone() {
            st.borrow_mut().frame(now, &mut self.rng);
        }
    }

    fn press(&mut self, now: Duration) {
        for cue in self.show.press_surprise(now) {
            self.apply(now, cue);
        }
    }

    fn run_until(&mut self, from: u64, to: u64) {
        let mut t = from;
        while t <= to {
            self.tick(ms(t));
            t += TICK_MS;
        }
    }

    fn first(&self, pred: impl Fn(&Cue) -> bool) -> Option<u64> {
        self.log.iter().find(|(_, c)| pred(c)).map(|(t, _)| *t)
    }
}

#[test]
fn intro_then_main() {
    let mut h = Harness::new();
    h.tick(ms(0));
    assert_eq!(h.show.phase(), Phase::Intro);
    assert!(h.show.phase().shows_intro());
    assert!(!h.show.phase().shows_main());

    h.run_until(16, 5984);
    assert_eq!(h.show.phase(), Phase::Intro);

    h.tick(ms(6000));
    assert_eq!(h.show.phase(), Phase::Main);
    assert!(!h.show.phase().shows_intro());
    assert!(h.show.phase().shows_main());
    assert_eq!(h.first(|c| *c == Cue::EnterMain), Some(6000));
}

#[test]
fn surprise_at_six_seconds_bursts_at_7200_and_reveals_at_8200() {
    let mut h = Harness::new();
    h.run_until(0, 6000);
    h.press(ms(6000));
    assert_eq!(h.show.phase(), Phase::SurpriseStreaks);

    // poll on a 10 ms grid so deadlines land exactly
    let mut t = 6010;
    while t <= 9000 {
        h.tick(ms(t));
        t += 10;
    }

    let burst = h
        .first(|c| matches!(c, Cue::FireworkBurst { .. }))
        .expect("burst fired");
    assert_eq!(burst, 7200);
    let origin = h
        .log
        .iter()
        .find_map(|(_, c)| match c {
            Cue::FireworkBurst { origin } => Some(*origin),
            _ => None,
        })
        .expect("burst origin");
    assert_eq!(origin, VP.center());

    assert_eq!(h.first(|c| *c == Cue::ShakeStart), Some(7200));
    assert_eq!(h.first(|c| *c == Cue::ShakeEnd), Some(7700));
    assert_eq!(h.first(|c| *c == Cue::RevealFinal), Some(8200));
    assert_eq!(h.show.phase(), Phase::SurpriseFinal);
    assert!(h.show.phase().shows_final_message());
    assert!(!h.show.state().shaking);
}

#[test]
fn coarse_polling_never_fires_early() {
    let mut h = Harness::new();
    h.run_until(0, 6000);
    h.press(ms(6001));
    h.run_until(6001, 12_000);
    let burst = h.first(|c| matches!(c, Cue::FireworkBurst { .. })).unwrap();
    let reveal = h.first(|c| *c == Cue::RevealFinal).unwrap();
    assert!(burst >= 6001 + 1200 && burst < 6001 + 1200 + TICK_MS);
    assert!(reveal >= 6001 + 2200 && reveal < 6001 + 2200 + TICK_MS);
}

#[test]
fn burst_reaches_the_fireworks_pool_and_drains() {
    let mut h = Harness::new();
    h.run_until(0, 6000);
    h.press(ms(6000));
    h.run_until(6000, 7200);
    // burst emitted during the 7200 tick, then one frame already stepped it
    let fw = h.fireworks.borrow();
    assert_eq!(fw.effect().particles().len(), 110);
    assert!(fw.effect().particles().iter().all(|p| p.life == 99));
    drop(fw);

    // 100 frames later the burst is gone but the loop keeps running
    h.run_until(7216, 7216 + 99 * TICK_MS);
    assert!(h.fireworks.borrow().effect().particles().is_empty());
    assert!(h.fireworks.borrow().state().is_running());
}

#[test]
fn streaks_expire_before_the_reveal_and_stay_silent() {
    let mut h = Harness::new();
    h.run_until(0, 6000);
    h.press(ms(6000));
    h.run_until(6000, 7600);
    let st = h.streaks.clone().expect("streaks mounted");
    assert!(!st.borrow().state().is_running());
    let calls = st.borrow().surface().draw_calls();
    assert!(calls > 0);
    assert_eq!(st.borrow().effect().streaks().len(), 80);

    h.run_until(7616, 9000);
    assert_eq!(st.borrow().surface().draw_calls(), calls);
    // fireworks + nothing else: streaks released their resize subscription
    assert_eq!(h.viewport.subscriber_count(), 1);
}

#[test]
fn repeated_presses_do_not_duplicate_bursts() {
    let mut h = Harness::new();
    h.run_until(0, 6000);
    h.press(ms(6000));
    h.press(ms(6100));
    h.run_until(6016, 7200);
    h.press(ms(7300));
    h.run_until(7216, 10_000);
    let bursts = h
        .log
        .iter()
        .filter(|(_, c)| matches!(c, Cue::FireworkBurst { .. }))
        .count();
    let mounts = h.log.iter().filter(|(_, c)| *c == Cue::MountStreaks).count();
    assert_eq!(bursts, 1);
    assert_eq!(mounts, 1);
}

#[test]
fn hearts_come_and_go_on_their_own_cadence() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut show = Show::mount(&ShowConfig::default(), Duration::ZERO);
    let mut spawned = 0;
    let mut expired = 0;
    for t in (0..=20_000).step_by(10) {
        for ev in show.tick(ms(t), VP, &mut rng).hearts {
            match ev {
                greeting_core::HeartEvent::Spawned(_) => spawned += 1,
                greeting_core::HeartEvent::Expired(_) => expired += 1,
            }
        }
    }
    // one heart per 480 ms: 480, 960, ..., 19_680
    assert_eq!(spawned, 41);
    // each lives 5100 ms: those created up to 14_900 are gone
    assert_eq!(expired, 31);
    assert_eq!(show.live_hearts(), 10);

    let leftover = show.teardown();
    assert_eq!(leftover.len(), 10);
    assert_eq!(show.live_hearts(), 0);
}
