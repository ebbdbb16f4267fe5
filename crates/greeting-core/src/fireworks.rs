//! Firework particle pool.
//!
//! The pool is an owned `Vec<Particle>`; [`step`] is the pure per-frame
//! update so physics can be tested without a canvas.

use crate::config::FireworksConfig;
use crate::constants::HUE_MAX;
use crate::effect::Effect;
use crate::surface::{Hsla, Surface};
use glam::Vec2;
use rand::{Rng, RngCore};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining frames.
    pub life: i32,
}

impl Particle {
    #[inline]
    fn advance(&mut self) {
        self.position += self.velocity;
        self.life -= 1;
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.life <= 0
    }
}

/// Advance every particle by one frame and drop the spent ones.
pub fn step(pool: &mut Vec<Particle>) {
    pool.retain_mut(|p| {
        p.advance();
        !p.is_spent()
    });
}

/// Append one burst of particles at `origin`.
pub fn burst<R: Rng + ?Sized>(
    pool: &mut Vec<Particle>,
    origin: Vec2,
    config: &FireworksConfig,
    rng: &mut R,
) {
    let v = config.speed_max;
    pool.extend((0..config.burst).map(|_| Particle {
        position: origin,
        velocity: Vec2::new(rng.gen_range(-v..=v), rng.gen_range(-v..=v)),
        life: config.life,
    }));
}

#[derive(Clone, Debug, Default)]
pub struct Fireworks {
    particles: Vec<Particle>,
    config: FireworksConfig,
}

impl Fireworks {
    pub fn new(config: FireworksConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
    }

    pub fn emit<R: Rng + ?Sized>(&mut self, origin: Vec2, rng: &mut R) {
        burst(&mut self.particles, origin, &self.config, rng);
        log::debug!(
            "[fireworks] burst at ({:.0},{:.0}), pool={}",
            origin.x,
            origin.y,
            self.particles.len()
        );
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Effect for Fireworks {
    /// Draws even when the pool is empty; the clear keeps the layer clean.
    fn render(&mut self, surface: &mut dyn Surface, rng: &mut dyn RngCore) {
        surface.clear();
        let size = Vec2::splat(self.config.particle_size);
        for p in &self.particles {
            // hue is re-rolled every frame, never stored
            let color = Hsla::vivid(rng.gen_range(0.0..HUE_MAX));
            surface.fill_rect(p.position, size, color);
        }
        step(&mut self.particles);
    }
}
