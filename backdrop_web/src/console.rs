// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one `console.debug`
//! line per event, prefixed with a per-attachment label.

use alloc::format;
use alloc::string::String;

use backdrop_core::css;
use backdrop_core::surface::Mark;
use backdrop_core::trace::{
    AttachEvent, MarkEvent, MotionSkippedEvent, MoveSuppressedEvent, StyleEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes trace lines to the browser console.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    label: String,
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that tags every line with `label`.
    ///
    /// Per-move style events are only written when `verbose` is set; they
    /// fire once per `mousemove`.
    #[must_use]
    pub fn new(label: impl Into<String>, verbose: bool) -> Self {
        Self {
            label: label.into(),
            verbose,
        }
    }

    fn log(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("[{}] {line}", self.label)));
    }
}

impl TraceSink for ConsoleSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.log(&format!(
            "attach mode={} size={}x{} sensitivity=({}, {}) layer={} image={}",
            e.mode.as_str(),
            css::Num(e.size.width),
            css::Num(e.size.height),
            css::Num(e.sensitivity.horizontal),
            css::Num(e.sensitivity.vertical),
            e.placement.as_str(),
            e.has_background,
        ));
        if !e.sensitivity.is_finite() {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "[{}] target has a zero dimension; the background will not move",
                self.label
            )));
        }
    }

    fn on_style(&mut self, e: &StyleEvent) {
        if !self.verbose {
            return;
        }
        self.log(&format!(
            "#{} {} transition={} {}",
            e.seq,
            e.reaction.as_str(),
            e.transition.as_str(),
            css::matrix(&e.transform),
        ));
    }

    fn on_mark(&mut self, e: &MarkEvent) {
        let mark = match e.mark {
            Mark::Entering => "entering",
            Mark::Exiting => "exiting",
        };
        let verb = if e.on { "set" } else { "clear" };
        self.log(&format!("#{} {verb} {mark}", e.seq));
    }

    fn on_move_suppressed(&mut self, e: &MoveSuppressedEvent) {
        if self.verbose {
            self.log(&format!(
                "#{} move ignored entering={} exiting={}",
                e.seq, e.entering, e.exiting
            ));
        }
    }

    fn on_motion_skipped(&mut self, e: &MotionSkippedEvent) {
        self.log(&format!("#{} motion sample without acceleration", e.seq));
    }
}
