use crate::dom;
use crate::style::{CLASS_REVEAL, CLASS_SHAKE};
use web_sys as web;

pub const INTRO_ID: &str = "intro";
pub const MAIN_ID: &str = "main";
pub const ROOT_ID: &str = "app";
pub const FINAL_MESSAGE_ID: &str = "birthday-msg";
pub const UNMUTE_ID: &str = "unmute-btn";
pub const STREAK_CANVAS_ID: &str = "streak-canvas";

/// Initial page state: cutscene up, main content and prompts hidden.
pub fn show_intro(document: &web::Document) {
    dom::set_visible(document, INTRO_ID, true);
    dom::set_visible(document, MAIN_ID, false);
    dom::set_visible(document, UNMUTE_ID, false);
    dom::set_visible(document, STREAK_CANVAS_ID, false);
}

#[inline]
pub fn show_main(document: &web::Document) {
    dom::set_visible(document, INTRO_ID, false);
    dom::set_visible(document, MAIN_ID, true);
}

#[inline]
pub fn set_shaking(document: &web::Document, on: bool) {
    dom::set_class(document, ROOT_ID, CLASS_SHAKE, on);
}

#[inline]
pub fn reveal_final(document: &web::Document) {
    dom::set_class(document, FINAL_MESSAGE_ID, CLASS_REVEAL, true);
}

#[inline]
pub fn set_unmute_visible(document: &web::Document, visible: bool) {
    dom::set_visible(document, UNMUTE_ID, visible);
}

#[inline]
pub fn set_streaks_visible(document: &web::Document, visible: bool) {
    dom::set_visible(document, STREAK_CANVAS_ID, visible);
}
