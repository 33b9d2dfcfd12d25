// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax math.
//!
//! Everything here is plain arithmetic on [`kurbo`] types. Degenerate input
//! is not guarded: a zero-sized target yields infinite sensitivity factors
//! and a NaN strength yields NaN offsets, both of which flow through to the
//! rendered transform unchanged.

use kurbo::{Affine, Point, Size, Vec2};
#[cfg(not(feature = "std"))]
#[expect(
    unused_imports,
    reason = "`f64::floor` is available in `core` on current toolchains"
)]
use kurbo::common::FloatFuncs as _;

/// Displacement per pixel of pointer travel, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensitivity {
    /// `strength / width`.
    pub horizontal: f64,
    /// `strength / height`.
    pub vertical: f64,
}

impl Sensitivity {
    /// Derives the factors for a target of `size`.
    #[inline]
    #[must_use]
    pub fn new(strength: f64, size: Size) -> Self {
        Self {
            horizontal: strength / size.width,
            vertical: strength / size.height,
        }
    }

    /// Are both factors [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.horizontal.is_finite() && self.vertical.is_finite()
    }
}

/// Rounds to one decimal place, halves toward positive infinity.
#[inline]
#[must_use]
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0 + 0.5).floor() / 10.0
}

/// Translation for a pointer at `page`, given the target's top-left
/// `origin` and its attachment-time `size`.
///
/// The pointer offset is taken from the target's centre and inverted, so the
/// background drifts away from the cursor.
#[must_use]
pub fn pointer_offset(page: Point, origin: Point, size: Size, sensitivity: Sensitivity) -> Vec2 {
    let rel_x = page.x - origin.x - size.width / 2.0;
    let rel_y = page.y - origin.y - size.height / 2.0;
    Vec2::new(
        (sensitivity.horizontal * rel_x) * -1.0,
        (sensitivity.vertical * rel_y) * -1.0,
    )
}

/// Translation for a gravity-inclusive acceleration sample.
///
/// Each axis is rounded to a tenth, normalised by 10, scaled by `strength`
/// and negated, then doubled and negated again.
#[must_use]
pub fn motion_offset(acceleration: Vec2, strength: f64) -> Vec2 {
    let ax = round_tenth(acceleration.x);
    let ay = round_tenth(acceleration.y);
    let base_x = -(ax / 10.0) * strength;
    let base_y = -(ay / 10.0) * strength;
    Vec2::new(-(base_x * 2.0), -(base_y * 2.0))
}

/// Uniform `scale` followed by `offset`, i.e. `matrix(s, 0, 0, s, x, y)`.
#[inline]
#[must_use]
pub fn hover_transform(scale: f64, offset: Vec2) -> Affine {
    Affine::new([scale, 0.0, 0.0, scale, offset.x, offset.y])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected} got {actual}"
        );
    }

    #[test]
    fn sensitivity_divides_strength_by_dimensions() {
        let s = Sensitivity::new(25.0, Size::new(200.0, 100.0));
        assert_eq!(s.horizontal, 0.125);
        assert_eq!(s.vertical, 0.25);
        assert!(s.is_finite());
    }

    #[test]
    fn zero_sized_target_is_degenerate() {
        let s = Sensitivity::new(25.0, Size::new(0.0, 100.0));
        assert!(s.horizontal.is_infinite());
        assert!(!s.is_finite());
    }

    #[test]
    fn centre_pointer_has_no_offset() {
        let size = Size::new(200.0, 100.0);
        let s = Sensitivity::new(25.0, size);
        let origin = Point::new(40.0, 300.0);
        let off = pointer_offset(Point::new(140.0, 350.0), origin, size, s);
        assert_eq!(off, Vec2::ZERO);
    }

    #[test]
    fn top_left_pointer_pushes_down_right() {
        let size = Size::new(200.0, 100.0);
        let s = Sensitivity::new(25.0, size);
        let origin = Point::new(10.0, 20.0);
        let off = pointer_offset(origin, origin, size, s);
        assert_eq!(off, Vec2::new(12.5, 12.5));
    }

    #[test]
    fn bottom_right_pointer_pushes_up_left() {
        let size = Size::new(200.0, 100.0);
        let s = Sensitivity::new(25.0, size);
        let off = pointer_offset(Point::new(200.0, 100.0), Point::ZERO, size, s);
        assert_eq!(off, Vec2::new(-12.5, -12.5));
    }

    #[test]
    fn round_tenth_matches_half_up() {
        assert_close(round_tenth(9.8), 9.8);
        assert_close(round_tenth(9.84), 9.8);
        assert_close(round_tenth(0.25), 0.3);
        assert_close(round_tenth(-0.25), -0.2);
        assert_close(round_tenth(0.0), 0.0);
    }

    #[test]
    fn motion_offset_doubles_normalised_acceleration() {
        let strength = 25.0;
        let off = motion_offset(Vec2::new(9.8, 0.0), strength);
        let expected_x = -(-(0.98 * strength) * 2.0);
        assert_close(off.x, expected_x);
        assert_close(off.x, 49.0);
        assert_close(off.y, 0.0);
    }

    #[test]
    fn motion_offset_follows_sign_of_acceleration() {
        let off = motion_offset(Vec2::new(-5.0, 2.5), 10.0);
        assert_close(off.x, -10.0);
        assert_close(off.y, 5.0);
    }

    #[test]
    fn hover_transform_coefficients() {
        let a = hover_transform(1.1, Vec2::new(12.5, -3.0));
        assert_eq!(a.as_coeffs(), [1.1, 0.0, 0.0, 1.1, 12.5, -3.0]);
        assert_eq!(hover_transform(1.0, Vec2::ZERO), Affine::IDENTITY);
    }
}
