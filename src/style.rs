// Inline styles and class names shared by the DOM layers.
// Kept free of web-sys so host tests can include this file directly.

use std::time::Duration;

pub const HEART_GLYPH: &str = "💜";
pub const HEART_ANIMATION_NAME: &str = "floatUp";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SHAKE: &str = "shake";
pub const CLASS_REVEAL: &str = "reveal";

/// Inline style for one floating heart, starting at the bottom edge.
pub fn heart_style(left_vw: f32, size_px: f32, animation: Duration) -> String {
    format!(
        "position:fixed;left:{:.2}vw;top:100vh;font-size:{:.1}px;\
         animation:{} {}ms linear forwards;pointer-events:none",
        left_vw,
        size_px,
        HEART_ANIMATION_NAME,
        animation.as_millis()
    )
}

/// `background-image` value for an intro mosaic tile.
pub fn tile_background(url: &str) -> String {
    format!("background-image:url({url})")
}

/// Element id of the carousel image for a 0-based carousel index.
pub fn photo_element_id(carousel_index: usize) -> String {
    format!("photo-{}", carousel_index + 1)
}

pub fn tile_element_id(carousel_index: usize) -> String {
    format!("tile-{}", carousel_index + 1)
}
