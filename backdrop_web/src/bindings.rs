// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript entry points.
//!
//! Options arrive as a plain object with the camelCase keys of
//! [`InteractiveBgOptions`]. Values are coerced the way script arithmetic
//! would coerce them, so a non-numeric `strength` becomes `NaN` and the
//! background simply does not move.

use alloc::string::String;

use backdrop_core::options::InteractiveBgOptions;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::bootstrap::{self, DEFAULT_SELECTOR};
use crate::controller::InteractiveBackground;

/// Reads options from a JS value. `undefined` and `null` mean "all
/// defaults"; absent or `undefined` keys stay unset.
pub fn options_from_js(value: &JsValue) -> Result<InteractiveBgOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(InteractiveBgOptions::new());
    }
    let get = |key: &str| -> Result<Option<JsValue>, JsValue> {
        let v = js_sys::Reflect::get(value, &JsValue::from_str(key))?;
        Ok((!v.is_undefined()).then_some(v))
    };
    let number = |v: JsValue| js_sys::Number::new(&v).value_of();
    Ok(InteractiveBgOptions {
        strength: get("strength")?.map(number),
        scale: get("scale")?.map(number),
        animation_speed: get("animationSpeed")?.map(|v| {
            v.as_string()
                .unwrap_or_else(|| String::from(js_sys::Object::from(v).to_string()))
        }),
        contain: get("contain")?.map(|v| v.is_truthy()),
        wrap_content: get("wrapContent")?.map(|v| v.is_truthy()),
    })
}

/// Attaches the effect to one element for the lifetime of the page.
#[wasm_bindgen(js_name = "attachInteractiveBackground")]
pub fn attach_interactive_background(element: HtmlElement, options: JsValue) -> Result<(), JsValue> {
    let options = options_from_js(&options)?;
    InteractiveBackground::attach(&element, &options, None)?.forget();
    Ok(())
}

/// Attaches the effect to every element matching `selector` (default
/// `.interactive-bg`) and returns how many were attached.
#[wasm_bindgen(js_name = "attachAllInteractiveBackgrounds")]
pub fn attach_all_interactive_backgrounds(
    selector: Option<String>,
    options: JsValue,
) -> Result<u32, JsValue> {
    let options = options_from_js(&options)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let selector = selector.as_deref().unwrap_or(DEFAULT_SELECTOR);
    let attached = bootstrap::attach_all(&document, selector, &options, |_| None)?;
    let count = u32::try_from(attached.len()).unwrap_or(u32::MAX);
    for bg in attached {
        bg.forget();
    }
    Ok(count)
}
