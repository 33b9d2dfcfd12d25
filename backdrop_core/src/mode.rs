// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability mode selection.
//!
//! An attachment reacts either to device motion or to the pointer, never
//! both. The choice is made once from an [`Environment`] snapshot taken at
//! attachment time and is not revisited when the viewport changes.

/// Screens at or below this width (logical pixels) use [`Mode::Motion`].
pub const MOBILE_MAX_WIDTH: f64 = 699.0;

/// What the host reports about the device at attachment time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// The document exposes touch events.
    pub has_touch: bool,
    /// Screen width in logical pixels.
    pub screen_width: f64,
}

/// Which reactive behaviour an attachment registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// React to `devicemotion` acceleration.
    Motion,
    /// React to `mouseenter`, `mousemove` and `mouseleave`.
    Pointer,
}

impl Mode {
    /// Selects the mode for `env`.
    #[must_use]
    pub fn detect(env: Environment) -> Self {
        if env.has_touch || env.screen_width <= MOBILE_MAX_WIDTH {
            Self::Motion
        } else {
            Self::Pointer
        }
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Pointer => "pointer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(has_touch: bool, screen_width: f64) -> Environment {
        Environment {
            has_touch,
            screen_width,
        }
    }

    #[test]
    fn wide_screen_without_touch_is_pointer() {
        assert_eq!(Mode::detect(env(false, 1440.0)), Mode::Pointer);
        assert_eq!(Mode::detect(env(false, 700.0)), Mode::Pointer);
    }

    #[test]
    fn touch_always_selects_motion() {
        assert_eq!(Mode::detect(env(true, 2560.0)), Mode::Motion);
    }

    #[test]
    fn narrow_screen_boundary_is_inclusive() {
        assert_eq!(Mode::detect(env(false, 699.0)), Mode::Motion);
        assert_eq!(Mode::detect(env(false, 320.0)), Mode::Motion);
    }
}
