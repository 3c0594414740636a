#![cfg(target_arch = "wasm32")]

use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use vfx_wasm::wasm::{hint, page};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn dispatch_click(document: &web_sys::Document) {
    let event = web_sys::Event::new("click").unwrap();
    document.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn hint_attaches_to_body() {
    let document = web_sys::window().unwrap().document().unwrap();
    let hint = hint::install(&document, Vec::new()).expect("hint install failed");

    assert!(document.body().unwrap().contains(Some(hint.as_ref())));
    // Parked off-screen until the reveal timer fires.
    assert_eq!(hint.style().get_property_value("right").unwrap(), "-800px");
    hint.remove();
}

#[wasm_bindgen_test(async)]
async fn click_dismisses_hint_and_removes_it() {
    let document = web_sys::window().unwrap().document().unwrap();
    let hint = hint::install(&document, Vec::new()).expect("hint install failed");

    dispatch_click(&document);
    assert_eq!(hint.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(hint.style().get_property_value("right").unwrap(), "-400px");

    // Removed once the slide-out transition window has passed.
    sleep_ms(900).await;
    assert!(!document.body().unwrap().contains(Some(hint.as_ref())));

    // A second click must be a no-op, not an error.
    dispatch_click(&document);
}

#[wasm_bindgen_test(async)]
async fn boot_without_videos_does_not_throw() {
    let document = web_sys::window().unwrap().document().unwrap();
    // No video.header-video in the harness page: the zero-video path
    // schedules construction straight away. The VFX global is absent here,
    // so construction reports an error through the log rather than
    // unwinding; waiting past the 300 ms delay would surface a panic.
    page::boot(&document).expect("boot failed");
    sleep_ms(400).await;
}
