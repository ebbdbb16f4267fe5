//! Background track: autoplay attempt with an unmute fallback.

use crate::overlay;
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub const AUDIO_ID: &str = "bg-music";

fn audio_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
}

async fn settled(promise: js_sys::Promise) -> bool {
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::debug!("play() rejected: {:?}", e);
            false
        }
    }
}

async fn play(audio: &web::HtmlAudioElement) -> bool {
    match audio.play() {
        Ok(promise) => settled(promise).await,
        Err(e) => {
            log::warn!("audio play error: {:?}", e);
            false
        }
    }
}

pub fn try_autoplay(document: web::Document, stage: Rc<RefCell<Stage>>) {
    let Some(audio) = audio_element(&document) else {
        log::warn!("no #{AUDIO_ID}; running without music");
        return;
    };
    audio.set_loop(true);
    spawn_local(async move {
        let ok = play(&audio).await;
        if !ok {
            log::warn!("autoplay blocked; showing unmute prompt");
        }
        let prompted = stage.borrow_mut().autoplay_result(ok);
        overlay::set_unmute_visible(&document, prompted);
    });
}

pub fn unmute(document: web::Document, stage: Rc<RefCell<Stage>>) {
    let Some(audio) = audio_element(&document) else {
        return;
    };
    audio.set_muted(false);
    spawn_local(async move {
        let ok = play(&audio).await;
        let prompted = stage.borrow_mut().unmute_result(ok);
        overlay::set_unmute_visible(&document, prompted);
    });
}
