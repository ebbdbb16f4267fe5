use crate::config::StarfieldConfig;
use crate::effect::Effect;
use crate::surface::{Extent, Hsla, Surface};
use glam::Vec2;
use rand::{Rng, RngCore};

/// A fixed point of light. The twinkle is the per-star opacity; nothing
/// about a star changes after it is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Background field of stars, generated once for the surface size at mount.
#[derive(Clone, Debug)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: Extent, config: &StarfieldConfig) -> Self {
        let size = bounds.as_vec2();
        let stars = (0..config.count)
            .map(|_| Star {
                position: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
                radius: rng.gen_range(config.radius.clone()),
                opacity: rng.gen_range(config.opacity.clone()),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

impl Effect for Starfield {
    fn render(&mut self, surface: &mut dyn Surface, _rng: &mut dyn RngCore) {
        surface.clear();
        for star in &self.stars {
            surface.fill_circle(star.position, star.radius, Hsla::WHITE.with_alpha(star.opacity));
        }
    }
}
