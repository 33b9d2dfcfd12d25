// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! [`DomSurface`] builds the background layer from a [`LayerPlan`] and then
//! writes [`StyleUpdate`]s to it as inline styles. Hover marks are classes on
//! the target element.

use backdrop_core::css;
use backdrop_core::layer::{LAYER_CLASS, LayerPlan, Placement};
use backdrop_core::surface::{Mark, StyleUpdate, Surface};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

/// A target element and the background layer generated inside it.
pub struct DomSurface {
    target: HtmlElement,
    layer: HtmlElement,
}

impl core::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSurface")
            .field("target", &"HtmlElement")
            .field("layer", &"HtmlElement")
            .finish()
    }
}

impl DomSurface {
    /// Executes `plan` against `target`, creating the layer element.
    pub fn build(document: &Document, target: &HtmlElement, plan: &LayerPlan) -> Result<Self, JsValue> {
        if plan.contain {
            target.style().set_property("overflow", "hidden")?;
        }

        let layer: HtmlElement = document.create_element("div")?.unchecked_into();
        layer.set_class_name(LAYER_CLASS);

        match plan.placement {
            Placement::Prepend => {
                target.insert_before(&layer, target.first_child().as_ref())?;
            }
            Placement::WrapAndAppend => {
                // Appending an attached node moves it, so this drains `target`.
                while let Some(child) = target.first_child() {
                    layer.append_child(&child)?;
                }
                target.append_child(&layer)?;
            }
        }

        let s = layer.style();
        if let Some(bg) = &plan.background {
            s.set_property("background", &bg.shorthand)?;
            s.set_property("background-size", bg.size)?;
        }
        s.set_property("width", &plan.width_css())?;
        s.set_property("height", &plan.height_css())?;

        Ok(Self {
            target: target.clone(),
            layer,
        })
    }

    /// The element the effect is attached to.
    #[must_use]
    pub fn target(&self) -> &HtmlElement {
        &self.target
    }

    /// The generated background layer.
    #[must_use]
    pub fn layer(&self) -> &HtmlElement {
        &self.layer
    }
}

impl Surface for DomSurface {
    fn apply(&mut self, update: &StyleUpdate) {
        let s = self.layer.style();
        if let Some(transition) = update.transition.css_value() {
            let _ = s.set_property("transition", &transition);
        }
        let _ = s.set_property("transform", &css::matrix(&update.transform));
    }

    fn has_mark(&self, mark: Mark) -> bool {
        self.target.class_list().contains(mark.class_name())
    }

    fn set_mark(&mut self, mark: Mark, on: bool) {
        let classes = self.target.class_list();
        let _ = if on {
            classes.add_1(mark.class_name())
        } else {
            classes.remove_1(mark.class_name())
        };
    }
}
