// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit page bootstrap.
//!
//! Nothing attaches on load. A page (or the host framework's client entry)
//! calls [`attach_all`] once the document is ready.

use alloc::boxed::Box;
use alloc::vec::Vec;

use backdrop_core::options::InteractiveBgOptions;
use backdrop_core::trace::TraceSink;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::controller::InteractiveBackground;

/// Class selector elements use to opt in.
pub const DEFAULT_SELECTOR: &str = ".interactive-bg";

/// Attaches to every `HtmlElement` matching `selector`, in document order.
///
/// `make_sink` is called once per element. Matches that are not HTML
/// elements (e.g. SVG) are skipped. Stops at the first attachment error;
/// attachments made before it are dropped, which detaches their listeners.
pub fn attach_all(
    document: &Document,
    selector: &str,
    options: &InteractiveBgOptions,
    mut make_sink: impl FnMut(u32) -> Option<Box<dyn TraceSink>>,
) -> Result<Vec<InteractiveBackground>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut attached = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        attached.push(InteractiveBackground::attach(&el, options, make_sink(i))?);
    }
    Ok(attached)
}
