//! Horizontal light streaks for the surprise transition.
//!
//! The pool is created at full size and only ever recycled in place, so its
//! length never changes while the field is mounted.

use crate::config::StreakConfig;
use crate::constants::{HUE_MAX, STREAK_LIGHTNESS};
use crate::effect::Effect;
use crate::surface::{Extent, Hsla, Surface};
use glam::Vec2;
use rand::{Rng, RngCore};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    /// Bright end of the streak; the faded end is `length` to its left.
    pub position: Vec2,
    pub speed: f32,
    pub length: f32,
    pub hue: f32,
}

impl Streak {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Extent, config: &StreakConfig) -> Self {
        let size = bounds.as_vec2();
        Self {
            position: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
            speed: rng.gen_range(config.speed.clone()),
            length: rng.gen_range(config.length.clone()),
            hue: rng.gen_range(0.0..HUE_MAX),
        }
    }

    /// Replace this streak with a fresh one entering from past the right edge.
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Extent, config: &StreakConfig) {
        let mut fresh = Self::random(rng, bounds, config);
        fresh.position.x = bounds.width as f32 + rng.gen::<f32>() * fresh.length;
        *self = fresh;
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.position.x + self.length < 0.0
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.position - Vec2::new(self.length, 0.0)
    }
}

/// Move every streak left by its speed, recycling the ones that left the
/// viewport.
pub fn step<R: Rng + ?Sized>(
    streaks: &mut [Streak],
    bounds: Extent,
    config: &StreakConfig,
    rng: &mut R,
) {
    for s in streaks.iter_mut() {
        s.position.x -= s.speed;
        if s.has_exited() {
            s.respawn(rng, bounds, config);
        }
    }
}

#[derive(Clone, Debug)]
pub struct StreakField {
    streaks: Vec<Streak>,
    bounds: Extent,
    config: StreakConfig,
}

impl StreakField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: Extent, config: StreakConfig) -> Self {
        let streaks = (0..config.count)
            .map(|_| Streak::random(rng, bounds, &config))
            .collect();
        Self {
            streaks,
            bounds,
            config,
        }
    }

    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }
}

impl Effect for StreakField {
    fn render(&mut self, surface: &mut dyn Surface, rng: &mut dyn RngCore) {
        surface.clear();
        for s in &self.streaks {
            let color = Hsla::vivid(s.hue).with_lightness(STREAK_LIGHTNESS);
            surface.stroke_fade_line(s.position, s.tail(), self.config.line_width, color);
        }
        step(&mut self.streaks, self.bounds, &self.config, rng);
    }

    fn resized(&mut self, extent: Extent) {
        self.bounds = extent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cfg() -> StreakConfig {
        StreakConfig::default()
    }

    #[test]
    fn initial_streaks_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = StreakField::generate(&mut rng, Extent::new(800, 600), cfg());
        assert_eq!(field.streaks().len(), 80);
        for s in field.streaks() {
            assert!(s.position.x >= 0.0 && s.position.x < 800.0);
            assert!(s.position.y >= 0.0 && s.position.y < 600.0);
            assert!(s.speed >= 20.0 && s.speed < 45.0);
            assert!(s.length >= 40.0 && s.length < 100.0);
            assert!(s.hue >= 0.0 && s.hue < 360.0);
        }
    }

    #[test]
    fn exited_streak_respawns_past_right_edge() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = Extent::new(500, 400);
        let mut pool = [Streak {
            position: Vec2::new(-60.0, 10.0),
            speed: 30.0,
            length: 50.0,
            hue: 0.0,
        }];
        step(&mut pool, bounds, &cfg(), &mut rng);
        let s = pool[0];
        assert!(s.position.x >= 500.0);
        assert!(s.position.x <= 500.0 + s.length);
        assert!(s.position.y >= 0.0 && s.position.y < 400.0);
        assert!(s.speed >= 20.0 && s.speed < 45.0);
    }

    #[test]
    fn streak_inside_viewport_just_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = [Streak {
            position: Vec2::new(100.0, 10.0),
            speed: 25.0,
            length: 50.0,
            hue: 90.0,
        }];
        step(&mut pool, Extent::new(500, 400), &cfg(), &mut rng);
        assert_eq!(pool[0].position, Vec2::new(75.0, 10.0));
        assert_eq!(pool[0].hue, 90.0);
    }

    #[test]
    fn trailing_edge_exactly_at_zero_is_not_exited() {
        let s = Streak {
            position: Vec2::new(-50.0, 0.0),
            speed: 20.0,
            length: 50.0,
            hue: 0.0,
        };
        assert!(!s.has_exited());
    }
}
