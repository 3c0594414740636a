#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Shader text and the readiness state machine are target-independent so
// `cargo test` on the host can pin their behavior.

pub mod orchestrator;
pub mod shaders;

// Only compile DOM/FFI code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    pub mod hint;
    pub mod page;
    pub mod vfx;
    pub mod video;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Module start can beat DOMContentLoaded (e.g. a blocking script
        // tag), so defer the boot until the tree is parsed.
        if document.ready_state() == "loading" {
            let doc = document.clone();
            let boot = Closure::once_into_js(move || {
                if let Err(err) = page::boot(&doc) {
                    log::error!("page boot failed: {err:?}");
                }
            });
            document
                .add_event_listener_with_callback("DOMContentLoaded", boot.unchecked_ref())?;
        } else {
            page::boot(&document)?;
        }
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
