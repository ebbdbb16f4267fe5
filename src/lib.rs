#![cfg(target_arch = "wasm32")]
use greeting_core::ShowConfig;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
pub mod canvas;
mod dom;
mod frame;
mod hearts;
mod overlay;
mod photos;
mod stage;
mod style;
mod timers;

use stage::Stage;

pub const SURPRISE_BUTTON_ID: &str = "surprise-btn";

fn wire_buttons(document: &web::Document, stage: &Rc<RefCell<Stage>>) {
    let stage_surprise = stage.clone();
    dom::add_click_listener(document, SURPRISE_BUTTON_ID, move || {
        stage_surprise.borrow_mut().press_surprise();
    });

    let stage_unmute = stage.clone();
    let doc_unmute = document.clone();
    dom::add_click_listener(document, overlay::UNMUTE_ID, move || {
        audio::unmute(doc_unmute.clone(), stage_unmute.clone());
    });
}

fn wire_teardown(stage: &Rc<RefCell<Stage>>) {
    let Some(window) = web::window() else {
        return;
    };
    let stage_hide = stage.clone();
    if let Some(listener) = dom::listen(&window, "pagehide", move |event| {
        // a page kept in the back/forward cache resumes its frame chains
        // as they were, so only a real unload tears the stage down
        let persisted = event
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            log::info!("page cached; keeping the stage mounted");
            return;
        }
        stage_hide.borrow_mut().teardown();
    }) {
        // lives for the whole session
        std::mem::forget(listener);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("greeting-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = ShowConfig::default();
    config.validate()?;
    log::info!(
        "intro {} ms, {} stars, {} streaks, hearts every {} ms",
        config.timeline.intro.as_millis(),
        config.starfield.count,
        config.streaks.count,
        config.hearts.interval.as_millis()
    );

    let stage = Rc::new(RefCell::new(Stage::new(document.clone(), config)));
    stage.borrow_mut().mount();
    wire_buttons(&document, &stage);
    wire_teardown(&stage);
    audio::try_autoplay(document, stage.clone());

    // Director: timeline, hearts and carousel on their own frame chain
    let stage_tick = stage.clone();
    let director = frame::start_loop(move || {
        stage_tick.borrow_mut().frame();
        true
    });
    stage.borrow_mut().set_director(director);
    Ok(())
}
