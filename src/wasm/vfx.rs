//! Bindings to the external VFX rendering library.
//!
//! The library is loaded by the page as an ES module and re-exported as the
//! `VFX` global before the wasm module runs (see `static/index.html`). It
//! owns the WebGL context, mirrors registered DOM elements into rendered
//! replacements, and runs the render loop; this crate only feeds it shader
//! text and per-element options.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// The scene-graph handle returned by `new VFX(options)`.
    #[wasm_bindgen(js_name = VFX)]
    pub type Vfx;

    #[wasm_bindgen(constructor, js_class = "VFX")]
    pub fn new(options: &Object) -> Vfx;

    /// Register a DOM element with a per-element shader configuration.
    #[wasm_bindgen(method)]
    pub fn add(this: &Vfx, element: &Element, options: &Object);
}

/// True when the page has exposed the `VFX` constructor. Constructing the
/// extern type without it would surface as an uncaught ReferenceError, so
/// callers probe first and report a proper error.
pub fn library_loaded() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("VFX")).ok())
        .map(|v| v.is_function())
        .unwrap_or(false)
}

/// Scene-wide construction options, mirroring the option object the library
/// recognizes.
pub struct SceneOptions<'a> {
    pub scroll_padding: bool,
    pub auto_resize: bool,
    pub cover: bool,
    pub mipmap: bool,
    pub post_effect_shader: &'a str,
}

impl SceneOptions<'_> {
    pub fn to_object(&self) -> Result<Object, JsValue> {
        let post_effect = Object::new();
        Reflect::set(
            &post_effect,
            &JsValue::from_str("shader"),
            &JsValue::from_str(self.post_effect_shader),
        )?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("scrollPadding"),
            &JsValue::from_bool(self.scroll_padding),
        )?;
        Reflect::set(&options, &JsValue::from_str("postEffect"), &post_effect)?;
        Reflect::set(
            &options,
            &JsValue::from_str("autoResize"),
            &JsValue::from_bool(self.auto_resize),
        )?;
        Reflect::set(
            &options,
            &JsValue::from_str("cover"),
            &JsValue::from_bool(self.cover),
        )?;
        Reflect::set(
            &options,
            &JsValue::from_str("mipmap"),
            &JsValue::from_bool(self.mipmap),
        )?;
        Ok(options)
    }
}

/// Per-element registration options. `id` lands in the `uniforms` mapping
/// and is the only custom uniform the element shader declares.
pub struct ElementOptions<'a> {
    pub shader: &'a str,
    pub id: u32,
    pub z_index: i32,
    pub replace: bool,
}

impl ElementOptions<'_> {
    pub fn to_object(&self) -> Result<Object, JsValue> {
        let uniforms = Object::new();
        Reflect::set(
            &uniforms,
            &JsValue::from_str("id"),
            &JsValue::from_f64(f64::from(self.id)),
        )?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("shader"),
            &JsValue::from_str(self.shader),
        )?;
        Reflect::set(&options, &JsValue::from_str("uniforms"), &uniforms)?;
        Reflect::set(
            &options,
            &JsValue::from_str("zIndex"),
            &JsValue::from_f64(f64::from(self.z_index)),
        )?;
        Reflect::set(
            &options,
            &JsValue::from_str("replace"),
            &JsValue::from_bool(self.replace),
        )?;
        Ok(options)
    }
}
