//! DOM side of the heart spawner: owns one node per live heart.

use crate::style;
use fnv::FnvHashMap;
use greeting_core::{Heart, HeartEvent, HeartId};
use std::time::Duration;
use web_sys as web;

pub struct HeartLayer {
    document: web::Document,
    animation: Duration,
    nodes: FnvHashMap<HeartId, web::Element>,
}

impl HeartLayer {
    pub fn new(document: web::Document, animation: Duration) -> Self {
        Self {
            document,
            animation,
            nodes: FnvHashMap::default(),
        }
    }

    pub fn apply(&mut self, event: HeartEvent) {
        match event {
            HeartEvent::Spawned(heart) => self.insert(&heart),
            HeartEvent::Expired(id) => self.remove(id),
        }
    }

    fn insert(&mut self, heart: &Heart) {
        let Some(body) = self.document.body() else {
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::warn!("heart element error: {:?}", e);
                return;
            }
        };
        el.set_text_content(Some(style::HEART_GLYPH));
        _ = el.set_attribute(
            "style",
            &style::heart_style(heart.left_vw, heart.size_px, self.animation),
        );
        _ = body.append_child(&el);
        self.nodes.insert(heart.id, el);
    }

    pub fn remove(&mut self, id: HeartId) {
        if let Some(el) = self.nodes.remove(&id) {
            el.remove();
        }
    }

    pub fn live(&self) -> usize {
        self.nodes.len()
    }
}
