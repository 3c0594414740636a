//! Header-video playback helpers.
//!
//! Autoplay with sound is blocked everywhere, so videos are forced muted and
//! inline before `play()`. A rejected play promise is an expected condition
//! (the hint's click-to-play fallback covers it), never an error.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;

/// Lazily resolve the video source and start playback. The source comes
/// from `data-src`, falling back to an already-set `src`; a video with
/// neither is left alone.
pub fn begin_playback(video: &HtmlVideoElement) {
    let current = video.src();
    let src = video
        .get_attribute("data-src")
        .filter(|s| !s.is_empty())
        .or_else(|| (!current.is_empty()).then(|| current.clone()));
    let Some(src) = src else { return };
    if current.is_empty() {
        video.set_src(&src);
    }

    video.set_muted(true);
    video.set_plays_inline(true);

    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("autoplay blocked, waiting for user gesture: {err:?}");
            }
        }),
        Err(err) => log::warn!("autoplay blocked, waiting for user gesture: {err:?}"),
    }
}

/// Best-effort replay used by the user-gesture fallback; rejections are
/// swallowed so a broken video cannot turn a click into an uncaught error.
pub fn retry_playback(video: &HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

/// The source a video was asked to load, for log messages.
pub fn source_of(video: &HtmlVideoElement) -> String {
    video
        .get_attribute("data-src")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| video.src())
}
