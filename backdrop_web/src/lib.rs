// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for backdrop.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`InteractiveBackground`]: one attachment (layer plus listeners)
//! - [`DomSurface`]: DOM layer construction and inline style updates
//! - [`attach_all`]: explicit bootstrap over a class selector
//! - [`ConsoleSink`]: trace output to the browser console
//!
//! The `attachInteractiveBackground` and `attachAllInteractiveBackgrounds`
//! functions are exported to JavaScript.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod bindings;
mod bootstrap;
mod console;
mod controller;
mod env;
mod surface;

pub use backdrop_core::surface::Surface;
pub use bindings::{attach_all_interactive_backgrounds, attach_interactive_background, options_from_js};
pub use bootstrap::{DEFAULT_SELECTOR, attach_all};
pub use console::ConsoleSink;
pub use controller::InteractiveBackground;
pub use env::probe as probe_environment;
pub use surface::DomSurface;
