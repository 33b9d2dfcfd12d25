// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: interactive backgrounds attached by an explicit bootstrap.
//!
//! Attaches to every `.interactive-bg` element on the page with
//! `strength = 30` and `scale = 1.1`, logging attachments to the console.
//!
//! Build with: `wasm-pack build --target web demos/web_backdrop`
//!
//! Then serve `demos/web_backdrop/` and open `index.html` in a browser.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;

use backdrop_core::addon::define_addon;
use backdrop_core::options::InteractiveBgOptions;
use backdrop_core::trace::TraceSink;
use backdrop_web::{ConsoleSink, DEFAULT_SELECTOR, attach_all};
use wasm_bindgen::prelude::*;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let addon = define_addon(InteractiveBgOptions::new().with_strength(30.0));
    let options = addon.options_for(InteractiveBgOptions::new().with_scale(1.1));

    let attached = attach_all(&document, DEFAULT_SELECTOR, &options, |i| {
        Some(Box::new(ConsoleSink::new(format!("ibg#{i}"), false)) as Box<dyn TraceSink>)
    })?;

    // Listeners stay registered for the life of the page.
    for bg in attached {
        bg.forget();
    }
    Ok(())
}
