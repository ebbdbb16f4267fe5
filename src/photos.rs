//! Carousel images and intro mosaic tiles.

use crate::dom;
use crate::style::{self, CLASS_ACTIVE};
use greeting_core::{photo_set, PhotoSource};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Point every carousel `<img>` at its first candidate and walk the
/// extension list on each load error, hiding the image once exhausted.
pub fn wire_photos(document: &web::Document, count: usize) {
    for (i, source) in photo_set(count).into_iter().enumerate() {
        let id = style::photo_element_id(i);
        let Some(img) = document
            .get_element_by_id(&id)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            log::warn!("missing carousel image #{id}");
            continue;
        };
        if let Some(url) = source.current() {
            img.set_src(&url);
        }
        if i == 0 {
            _ = img.class_list().add_1(CLASS_ACTIVE);
        }
        wire_fallback(&img, source);

        if let (Some(tile), Some(url)) = (
            document.get_element_by_id(&style::tile_element_id(i)),
            PhotoSource::new(i + 1).current(),
        ) {
            _ = tile.set_attribute("style", &style::tile_background(&url));
        }
    }
}

fn wire_fallback(img: &web::HtmlImageElement, source: PhotoSource) {
    let source = RefCell::new(source);
    let target = img.clone();
    let on_error = Closure::wrap(Box::new(move || {
        let mut src = source.borrow_mut();
        match src.fail() {
            Some(url) => {
                log::debug!("photo {} falling back to {url}", src.index());
                target.set_src(&url);
            }
            None => {
                log::warn!("photo {} unavailable, hiding", src.index());
                dom::set_element_visible(&target, false);
            }
        }
    }) as Box<dyn FnMut()>);
    _ = img.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();
}

/// Mark the photo at `index` active and clear the rest.
pub fn set_active(document: &web::Document, index: usize, count: usize) {
    for i in 0..count {
        dom::set_class(document, &style::photo_element_id(i), CLASS_ACTIVE, i == index);
    }
}
