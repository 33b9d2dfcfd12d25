// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS value rendering.
//!
//! Numbers are printed the way a browser's script engine would print them
//! into a template string, so `-0` becomes `0` and infinities are spelled
//! out. NaN stays `NaN`, which makes the whole declaration invalid and leaves
//! the layer where it was.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::Affine;

/// A number formatted as a CSS/JS numeric literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            f.write_str("0")
        } else if v == f64::INFINITY {
            f.write_str("Infinity")
        } else if v == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else {
            write!(f, "{v}")
        }
    }
}

/// Renders `affine` as a 2-D `matrix()` transform.
///
/// kurbo's coefficient order `[a, b, c, d, e, f]` is the CSS argument order.
#[must_use]
pub fn matrix(affine: &Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        Num(a),
        Num(b),
        Num(c),
        Num(d),
        Num(e),
        Num(f),
    )
}

/// Renders a pixel length.
#[must_use]
pub fn px(v: f64) -> String {
    format!("{}px", Num(v))
}

/// Renders the `background` shorthand for a cover image.
#[must_use]
pub fn background_image(url: &str) -> String {
    format!("url('{url}') no-repeat center center")
}

/// How the layer's `transform` changes animate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Leave the current `transition` property alone.
    Unchanged,
    /// Apply the change instantly (`transition: none`).
    Instant,
    /// Animate `transform` linearly over the given CSS duration.
    Linear(String),
}

impl Transition {
    /// The `transition` property value, or `None` for [`Transition::Unchanged`].
    #[must_use]
    pub fn css_value(&self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::Instant => Some(String::from("none")),
            Self::Linear(speed) => Some(format!("transform {speed} linear")),
        }
    }
}
