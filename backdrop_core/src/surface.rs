// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation contract for platform integrations.
//!
//! The [`Controller`](crate::controller::Controller) decides *what* changes;
//! a [`Surface`] makes the change visible. The web backend implements it by
//! writing inline styles and class names on DOM elements. Tests implement it
//! with a recording double.
//!
//! Hover marks live on the surface rather than in the controller, so that a
//! stylesheet (or anything else looking at the target) sees the same state
//! the controller gates on.

use kurbo::Affine;

use crate::css::Transition;

/// Class added to the target while the hover-in transition runs.
pub const ENTERING_CLASS: &str = "ibg-entering";
/// Class added to the target while the hover-out transition runs.
pub const EXITING_CLASS: &str = "ibg-exiting";

/// A transient hover state that suppresses pointer tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The zoom-in transition is in flight.
    Entering,
    /// The zoom-out transition is in flight.
    Exiting,
}

impl Mark {
    /// Class name used to expose the mark on the target element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Entering => ENTERING_CLASS,
            Self::Exiting => EXITING_CLASS,
        }
    }
}

/// One style mutation of the background layer.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleUpdate {
    /// How the change animates.
    pub transition: Transition,
    /// The new layer transform.
    pub transform: Affine,
}

/// Applies controller output to a platform-native element pair (target and
/// layer).
pub trait Surface {
    /// Writes `update` to the layer.
    fn apply(&mut self, update: &StyleUpdate);

    /// Returns whether `mark` is currently set on the target.
    fn has_mark(&self, mark: Mark) -> bool;

    /// Sets or clears `mark` on the target.
    fn set_mark(&mut self, mark: Mark, on: bool);
}
