//! The "tap to start" hint.
//!
//! A single fixed-position node that slides in from the right after a fixed
//! delay and is dismissed by the first click anywhere on the page. The
//! reveal is time-triggered, not failure-triggered: it shows up whether or
//! not autoplay was actually blocked. The dismissing click doubles as the
//! user gesture that retries playback on every tracked video.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, HtmlVideoElement};

use super::video;

const HINT_TEXT: &str = "Tap anywhere if the videos don't start playing";

/// Delay before the hint slides into view.
const REVEAL_DELAY_MS: i32 = 10_000;
/// Matches the 0.8s CSS transition; the node is removed once it finishes.
const DISMISS_ANIM_MS: i32 = 800;

const HINT_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "-800px"),
    ("background", "rgba(0, 0, 0, 0.7)"),
    ("color", "#fff"),
    ("padding", "12px 18px"),
    ("border-radius", "8px"),
    ("font-size", "15px"),
    ("font-family", "sans-serif"),
    ("z-index", "9999"),
    ("box-shadow", "0 0 10px rgba(0,0,0,0.4)"),
    ("transition", "right 0.8s ease, opacity 0.8s ease"),
    ("opacity", "0.9"),
];

/// Build the hint, schedule its reveal, and arm the one-shot dismissing
/// click handler. Returns the hint node (the browser tests poke at it).
pub fn install(document: &Document, videos: Vec<HtmlVideoElement>) -> Result<HtmlElement, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let hint: HtmlElement = document.create_element("div")?.dyn_into()?;
    hint.set_text_content(Some(HINT_TEXT));
    let style = hint.style();
    for (name, value) in HINT_STYLE {
        style.set_property(name, value)?;
    }
    document
        .body()
        .ok_or("no body")?
        .append_child(&hint)?;

    // Slide in after the fixed delay.
    let reveal = {
        let hint = hint.clone();
        Closure::once_into_js(move || {
            if let Err(err) = hint.style().set_property("right", "20px") {
                log::error!("hint reveal failed: {err:?}");
            }
        })
    };
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        reveal.unchecked_ref(),
        REVEAL_DELAY_MS,
    )?;

    // First click anywhere: slide out, drop the node once the transition is
    // done, and retry playback on every tracked video.
    let dismiss = {
        let hint = hint.clone();
        let window = window.clone();
        Closure::once_into_js(move || {
            let style = hint.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("right", "-400px");
            for v in &videos {
                video::retry_playback(v);
            }
            let remove = {
                let hint = hint.clone();
                Closure::once_into_js(move || hint.remove())
            };
            if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                DISMISS_ANIM_MS,
            ) {
                log::error!("hint removal timer failed: {err:?}");
            }
        })
    };
    let once = AddEventListenerOptions::new();
    once.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        dismiss.unchecked_ref(),
        &once,
    )?;

    Ok(hint)
}
