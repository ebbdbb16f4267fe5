//! Floating heart factory with a removal registry.
//!
//! The spawner never touches the page. It hands out [`Heart`] descriptions
//! and later the ids whose removal deadline has passed; the rendering layer
//! owns the actual nodes.

use crate::config::HeartConfig;
use fnv::FnvHashMap;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeartId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heart {
    pub id: HeartId,
    /// Horizontal position in percent of viewport width.
    pub left_vw: f32,
    pub size_px: f32,
    pub created_at: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeartEvent {
    Spawned(Heart),
    Expired(HeartId),
}

pub type HeartEvents = SmallVec<[HeartEvent; 4]>;

pub struct HeartSpawner {
    config: HeartConfig,
    /// `None` once stopped.
    next_spawn_at: Option<Duration>,
    next_id: u64,
    removals: FnvHashMap<HeartId, Duration>,
}

impl HeartSpawner {
    /// First heart appears one interval after `now`.
    pub fn new(config: HeartConfig, now: Duration) -> Self {
        let first = now + config.interval;
        Self {
            config,
            next_spawn_at: Some(first),
            next_id: 0,
            removals: FnvHashMap::default(),
        }
    }

    /// Spawn at most one heart when its slot has arrived and report every
    /// removal that is due, spawns first.
    ///
    /// A heart is stamped with `now`, the moment its node appears. Slots
    /// missed by a late poll (hidden tab, long frame) are skipped and the
    /// cadence restarts from `now`.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> HeartEvents {
        let mut events = HeartEvents::new();
        if let Some(at) = self.next_spawn_at.filter(|at| *at <= now) {
            let heart = self.spawn(now, rng);
            events.push(HeartEvent::Spawned(heart));
            let next = at + self.config.interval;
            self.next_spawn_at = Some(if next > now {
                next
            } else {
                now + self.config.interval
            });
        }

        let mut due: SmallVec<[(Duration, HeartId); 4]> = self
            .removals
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_unstable();
        for (_, id) in due {
            self.removals.remove(&id);
            events.push(HeartEvent::Expired(id));
        }
        events
    }

    fn spawn<R: Rng + ?Sized>(&mut self, at: Duration, rng: &mut R) -> Heart {
        let id = HeartId(self.next_id);
        self.next_id += 1;
        let heart = Heart {
            id,
            left_vw: rng.gen::<f32>() * 100.0,
            size_px: rng.gen_range(self.config.size_px.clone()),
            created_at: at,
        };
        self.removals.insert(id, at + self.config.lifetime());
        heart
    }

    /// Stop creating hearts. Pending removals still come due via `tick`.
    pub fn stop(&mut self) {
        self.next_spawn_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_spawn_at.is_some()
    }

    /// Stop and cancel every pending removal, returning the ids that are
    /// still on screen so the caller can remove them immediately.
    pub fn teardown(&mut self) -> Vec<HeartId> {
        self.stop();
        let mut ids: Vec<HeartId> = self.removals.drain().map(|(id, _)| id).collect();
        ids.sort_unstable();
        ids
    }

    pub fn live(&self) -> usize {
        self.removals.len()
    }
}
