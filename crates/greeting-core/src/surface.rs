//! Drawing-surface abstraction shared by every canvas-backed effect.
//!
//! The web crate implements [`Surface`] over a `CanvasRenderingContext2d`;
//! [`RecordingSurface`] is a headless implementation that records draw calls
//! and is what the tests use as a spy.

use glam::Vec2;

/// Pixel extent of a viewport or a surface backing store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.as_vec2() * 0.5
    }
}

/// Color in HSL space with alpha; hue in degrees, saturation/lightness in
/// percent, alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const WHITE: Hsla = Hsla {
        hue: 0.0,
        saturation: 0.0,
        lightness: 100.0,
        alpha: 1.0,
    };

    /// Fully saturated mid-lightness color used by firework sparks.
    pub const fn vivid(hue: f32) -> Self {
        Self {
            hue,
            saturation: 100.0,
            lightness: 50.0,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub const fn with_lightness(self, lightness: f32) -> Self {
        Self { lightness, ..self }
    }

    /// CSS color string accepted by canvas fill/stroke styles.
    pub fn css(&self) -> String {
        format!(
            "hsla({:.1}, {:.0}%, {:.0}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

pub trait Surface {
    fn size(&self) -> Extent;
    /// Resize the backing store. On a canvas this also wipes its contents.
    fn set_size(&mut self, size: Extent);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsla);
    /// Horizontal or slanted line whose color fades from `color` at `head`
    /// to fully transparent at `tail`.
    fn stroke_fade_line(&mut self, head: Vec2, tail: Vec2, width: f32, color: Hsla);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Hsla,
    },
    FadeLine {
        head: Vec2,
        tail: Vec2,
        width: f32,
        color: Hsla,
    },
}

/// Headless surface that keeps every draw call.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Extent,
    ops: Vec<DrawOp>,
    resizes: usize,
}

impl RecordingSurface {
    pub fn new(size: Extent) -> Self {
        Self {
            size,
            ops: Vec::new(),
            resizes: 0,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Total draw calls received, clears included.
    pub fn draw_calls(&self) -> usize {
        self.ops.len()
    }

    pub fn resizes(&self) -> usize {
        self.resizes
    }

    /// Ops issued since the most recent clear.
    pub fn last_frame(&self) -> &[DrawOp] {
        match self.ops.iter().rposition(|op| *op == DrawOp::Clear) {
            Some(i) => &self.ops[i + 1..],
            None => &self.ops,
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Extent {
        self.size
    }

    fn set_size(&mut self, size: Extent) {
        self.size = size;
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Hsla) {
        self.ops.push(DrawOp::Rect {
            origin,
            size,
            color,
        });
    }

    fn stroke_fade_line(&mut self, head: Vec2, tail: Vec2, width: f32, color: Hsla) {
        self.ops.push(DrawOp::FadeLine {
            head,
            tail,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_hsla() {
        assert_eq!(Hsla::vivid(120.0).css(), "hsla(120.0, 100%, 50%, 1.000)");
        assert_eq!(
            Hsla::WHITE.with_alpha(0.5).css(),
            "hsla(0.0, 0%, 100%, 0.500)"
        );
    }

    #[test]
    fn extent_center_is_half_size() {
        assert_eq!(Extent::new(800, 600).center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn last_frame_starts_after_latest_clear() {
        let mut s = RecordingSurface::new(Extent::new(10, 10));
        s.clear();
        s.fill_rect(Vec2::ZERO, Vec2::ONE, Hsla::WHITE);
        s.clear();
        s.fill_circle(Vec2::ONE, 1.0, Hsla::WHITE);
        assert_eq!(s.last_frame().len(), 1);
        assert_eq!(s.draw_calls(), 4);
    }
}
