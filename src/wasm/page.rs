//! Page-load orchestration.
//!
//! Collects the header videos, installs the hint, and drives the readiness
//! state machine from `loadeddata`/`error` events. Once every video has
//! resolved (or none exist), the VFX scene is constructed after a short
//! settling delay and every effect-target element is registered with the
//! per-element shader.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlVideoElement};

use super::{hint, vfx, video};
use crate::orchestrator::Orchestrator;
use crate::shaders;

const HEADER_VIDEO_SELECTOR: &str = "video.header-video";
const EFFECT_TARGET_SELECTOR: &str = "img, video, h1, h2, p";

/// Settling delay between the last video resolving and scene construction,
/// so first frames are decoded before the library snapshots the elements.
const INIT_DELAY_MS: i32 = 300;

/// Wire the page up. Runs once, at DOM ready.
pub fn boot(document: &Document) -> Result<(), JsValue> {
    let videos = collect_header_videos(document)?;
    hint::install(document, videos.clone())?;

    let state = Rc::new(RefCell::new(Orchestrator::new(videos.len())));

    if videos.is_empty() {
        return schedule_init(document, &state);
    }

    for v in &videos {
        video::begin_playback(v);

        let on_loaded = {
            let document = document.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                state.borrow_mut().note_resolved();
                if let Err(err) = schedule_init(&document, &state) {
                    log::error!("scheduling vfx init failed: {err:?}");
                }
            }) as Box<dyn FnMut()>)
        };
        v.add_event_listener_with_callback("loadeddata", on_loaded.as_ref().unchecked_ref())?;
        on_loaded.forget();

        let on_error = {
            let document = document.clone();
            let state = state.clone();
            let v = v.clone();
            Closure::wrap(Box::new(move || {
                log::error!("video failed to load: {}", video::source_of(&v));
                state.borrow_mut().note_resolved();
                if let Err(err) = schedule_init(&document, &state) {
                    log::error!("scheduling vfx init failed: {err:?}");
                }
            }) as Box<dyn FnMut()>)
        };
        v.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
        on_error.forget();
    }

    Ok(())
}

fn collect_header_videos(document: &Document) -> Result<Vec<HtmlVideoElement>, JsValue> {
    let nodes = document.query_selector_all(HEADER_VIDEO_SELECTOR)?;
    let mut videos = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(v) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlVideoElement>().ok()) {
            videos.push(v);
        }
    }
    Ok(videos)
}

/// Arm the deferred construction if every video has resolved. Several
/// resolution events may race past the `ready_for_init` check and arm more
/// than one timer; `begin_init` inside the callback keeps construction
/// at-most-once.
fn schedule_init(document: &Document, state: &Rc<RefCell<Orchestrator>>) -> Result<(), JsValue> {
    if !state.borrow().ready_for_init() {
        return Ok(());
    }

    let fire = {
        let document = document.clone();
        let state = state.clone();
        Closure::once_into_js(move || {
            if !state.borrow_mut().begin_init() {
                return;
            }
            if let Err(err) = init_vfx(&document) {
                log::error!("vfx init failed: {err:?}");
            }
        })
    };
    web_sys::window()
        .ok_or("no window")?
        .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), INIT_DELAY_MS)?;
    Ok(())
}

/// Construct the scene with the global post effect and register every
/// effect-target element. Videos keep their DOM node alive underneath the
/// rendered replacement (`replace: false`) so playback keeps feeding frames.
fn init_vfx(document: &Document) -> Result<(), JsValue> {
    if !vfx::library_loaded() {
        return Err(JsValue::from_str("VFX runtime not found on window"));
    }

    let scene = vfx::Vfx::new(
        &vfx::SceneOptions {
            scroll_padding: false,
            auto_resize: true,
            cover: true,
            mipmap: false,
            post_effect_shader: shaders::POST_EFFECT_SHADER,
        }
        .to_object()?,
    );

    let nodes = document.query_selector_all(EFFECT_TARGET_SELECTOR)?;
    let mut id = 0u32;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let z_index = el
            .get_attribute("data-z")
            .and_then(|z| z.parse::<i32>().ok())
            .unwrap_or(0);
        let is_video = el.tag_name().eq_ignore_ascii_case("video");
        scene.add(
            &el,
            &vfx::ElementOptions {
                shader: shaders::ELEMENT_SHADER,
                id,
                z_index,
                replace: !is_video,
            }
            .to_object()?,
        );
        id += 1;
    }
    log::info!("vfx initialized over {id} elements");
    Ok(())
}
