// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options for an interactive background attachment.
//!
//! [`InteractiveBgOptions`] is the partial record callers hand in: every field
//! is optional. [`Settings`] is the resolved record the controller works
//! from, produced by layering the options over [`Settings::default`].

use alloc::string::String;

/// Default displacement magnitude, in CSS pixels.
pub const DEFAULT_STRENGTH: f64 = 25.0;
/// Default zoom factor applied while the pointer hovers the target.
pub const DEFAULT_SCALE: f64 = 1.05;
/// Default duration of the hover enter/leave transition.
pub const DEFAULT_ANIMATION_SPEED: &str = "100ms";

/// Caller-supplied options. Unset fields fall back to the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct InteractiveBgOptions {
    /// Displacement magnitude.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strength: Option<f64>,
    /// Hover zoom factor.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub scale: Option<f64>,
    /// CSS duration of the hover transition, e.g. `"100ms"`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub animation_speed: Option<String>,
    /// Clip the target's overflow so the layer can move without growing it.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub contain: Option<bool>,
    /// Move the target's children into the layer instead of prepending an
    /// empty one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub wrap_content: Option<bool>,
}

impl InteractiveBgOptions {
    /// Returns options with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strength: None,
            scale: None,
            animation_speed: None,
            contain: None,
            wrap_content: None,
        }
    }

    /// Sets the displacement magnitude.
    #[must_use]
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Sets the hover zoom factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the hover transition duration.
    #[must_use]
    pub fn with_animation_speed(mut self, speed: impl Into<String>) -> Self {
        self.animation_speed = Some(speed.into());
        self
    }

    /// Sets whether the target's overflow is clipped.
    #[must_use]
    pub fn with_contain(mut self, contain: bool) -> Self {
        self.contain = Some(contain);
        self
    }

    /// Sets whether existing children are wrapped into the layer.
    #[must_use]
    pub fn with_wrap_content(mut self, wrap: bool) -> Self {
        self.wrap_content = Some(wrap);
        self
    }

    /// Layers `self` over `base`: fields set here win, the rest come from
    /// `base`.
    #[must_use]
    pub fn merged_over(self, base: &Self) -> Self {
        Self {
            strength: self.strength.or(base.strength),
            scale: self.scale.or(base.scale),
            animation_speed: self.animation_speed.or_else(|| base.animation_speed.clone()),
            contain: self.contain.or(base.contain),
            wrap_content: self.wrap_content.or(base.wrap_content),
        }
    }

    /// Resolves against the defaults.
    #[must_use]
    pub fn resolve(&self) -> Settings {
        Settings::default().merge(self)
    }
}

/// Fully resolved options.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Displacement magnitude.
    pub strength: f64,
    /// Hover zoom factor.
    pub scale: f64,
    /// CSS duration of the hover transition.
    pub animation_speed: String,
    /// Clip the target's overflow.
    pub contain: bool,
    /// Wrap existing children into the layer.
    pub wrap_content: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            scale: DEFAULT_SCALE,
            animation_speed: String::from(DEFAULT_ANIMATION_SPEED),
            contain: true,
            wrap_content: false,
        }
    }
}

impl Settings {
    /// Overrides every field that `options` sets.
    #[must_use]
    pub fn merge(self, options: &InteractiveBgOptions) -> Self {
        Self {
            strength: options.strength.unwrap_or(self.strength),
            scale: options.scale.unwrap_or(self.scale),
            animation_speed: options
                .animation_speed
                .clone()
                .unwrap_or(self.animation_speed),
            contain: options.contain.unwrap_or(self.contain),
            wrap_content: options.wrap_content.unwrap_or(self.wrap_content),
        }
    }

    /// Whether hovering changes the zoom, and therefore whether the
    /// enter/leave transitions mark the target.
    #[inline]
    #[must_use]
    pub fn zooms_on_hover(&self) -> bool {
        // Only an exact 1 disables the zoom; NaN still counts as zooming.
        self.scale != 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let s = InteractiveBgOptions::new().resolve();
        assert_eq!(s.strength, 25.0);
        assert_eq!(s.scale, 1.05);
        assert_eq!(s.animation_speed, "100ms");
        assert!(s.contain);
        assert!(!s.wrap_content);
    }

    #[test]
    fn set_options_override_defaults() {
        let opts = InteractiveBgOptions::new()
            .with_strength(30.0)
            .with_scale(1.1)
            .with_animation_speed("250ms")
            .with_contain(false)
            .with_wrap_content(true);
        let s = opts.resolve();
        assert_eq!(s.strength, 30.0);
        assert_eq!(s.scale, 1.1);
        assert_eq!(s.animation_speed, "250ms");
        assert!(!s.contain);
        assert!(s.wrap_content);
    }

    #[test]
    fn each_field_falls_back_independently() {
        for strength in [None, Some(0.0), Some(-4.0), Some(80.0)] {
            let opts = InteractiveBgOptions {
                strength,
                ..InteractiveBgOptions::new()
            };
            let s = opts.resolve();
            assert_eq!(s.strength, strength.unwrap_or(DEFAULT_STRENGTH));
            assert_eq!(s.scale, DEFAULT_SCALE);
        }
    }

    #[test]
    fn nan_strength_is_kept() {
        let s = InteractiveBgOptions::new().with_strength(f64::NAN).resolve();
        assert!(s.strength.is_nan());
    }

    #[test]
    fn merged_over_prefers_overrides() {
        let site = InteractiveBgOptions::new()
            .with_strength(30.0)
            .with_animation_speed("1s");
        let call = InteractiveBgOptions::new().with_strength(10.0).with_scale(1.0);
        let merged = call.merged_over(&site);
        assert_eq!(merged.strength, Some(10.0));
        assert_eq!(merged.scale, Some(1.0));
        assert_eq!(merged.animation_speed.as_deref(), Some("1s"));
        assert_eq!(merged.contain, None);
    }

    #[test]
    fn unit_scale_disables_hover_zoom() {
        assert!(Settings::default().zooms_on_hover());
        let s = InteractiveBgOptions::new().with_scale(1.0).resolve();
        assert!(!s.zooms_on_hover());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_keys() {
        let opts: InteractiveBgOptions =
            serde_json::from_str(r#"{"strength":30,"animationSpeed":"200ms","wrapContent":true}"#)
                .unwrap();
        assert_eq!(opts.strength, Some(30.0));
        assert_eq!(opts.animation_speed.as_deref(), Some("200ms"));
        assert_eq!(opts.wrap_content, Some(true));
        assert_eq!(opts.scale, None);
    }
}
