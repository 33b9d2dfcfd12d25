// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment probing.

use backdrop_core::mode::Environment;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Reads touch support and screen width.
///
/// Touch support means the document element exposes an `ontouchstart`
/// property, whatever its value.
pub fn probe(window: &Window, document: &Document) -> Result<Environment, JsValue> {
    let has_touch = match document.document_element() {
        Some(root) => js_sys::Reflect::has(&root, &JsValue::from_str("ontouchstart"))?,
        None => false,
    };
    let screen_width = f64::from(window.screen()?.width()?);
    Ok(Environment {
        has_touch,
        screen_width,
    })
}
