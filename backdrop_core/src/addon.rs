// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site-framework add-on descriptor.
//!
//! The host framework discovers theme add-ons through a small record: the
//! package name, an `enable` flag and an options object passed through
//! untouched. [`define_addon`] builds that record; the host is responsible
//! for running the add-on during its own build.

use alloc::string::String;

use crate::options::InteractiveBgOptions;

/// Package name the add-on registers under.
pub const ADDON_NAME: &str = "valaxy-addon-backgrounds";

/// Registration record handed to the host framework.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddonDescriptor {
    /// Registered add-on name.
    pub name: String,
    /// Whether the host should load the add-on.
    pub enable: bool,
    /// Site-wide options, merged under each attachment's own options.
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: InteractiveBgOptions,
}

/// Builds the descriptor for this add-on, enabled, with `options` passed
/// through.
#[must_use]
pub fn define_addon(options: InteractiveBgOptions) -> AddonDescriptor {
    AddonDescriptor {
        name: String::from(ADDON_NAME),
        enable: true,
        options,
    }
}

impl AddonDescriptor {
    /// Site options with per-attachment `overrides` layered on top.
    #[must_use]
    pub fn options_for(&self, overrides: InteractiveBgOptions) -> InteractiveBgOptions {
        overrides.merged_over(&self.options)
    }
}
