// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background layer planning.
//!
//! A [`LayerPlan`] says how the layer element is inserted into the target,
//! how big it is, and what it shows. Backends execute the plan once, at
//! attachment time.

use alloc::string::String;

use kurbo::Size;

use crate::css;
use crate::options::Settings;

/// Class name of the generated layer element.
pub const LAYER_CLASS: &str = "ibg-bg";
/// Data attribute on the target carrying the background image URL.
pub const IMAGE_ATTRIBUTE: &str = "data-ibg-bg";

/// Where the layer goes relative to the target's existing children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Insert an empty layer as the first child.
    Prepend,
    /// Move every existing child into the layer, in order, then append the
    /// layer as the last child.
    WrapAndAppend,
}

impl Placement {
    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prepend => "prepend",
            Self::WrapAndAppend => "wrap",
        }
    }
}

/// Background image styling for the layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    /// `background` shorthand value.
    pub shorthand: String,
    /// `background-size` value.
    pub size: &'static str,
}

/// How to build the layer for one attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerPlan {
    /// Insertion strategy.
    pub placement: Placement,
    /// Fixed layer size, measured from the target at attachment time.
    pub size: Size,
    /// Optional background image.
    pub background: Option<Background>,
    /// Whether the target's overflow is clipped.
    pub contain: bool,
}

impl LayerPlan {
    /// Plans the layer for a target measured at `size`, carrying the image
    /// attribute value `image_url` (if any).
    ///
    /// An empty attribute value counts as absent.
    #[must_use]
    pub fn new(settings: &Settings, size: Size, image_url: Option<&str>) -> Self {
        let placement = if settings.wrap_content {
            Placement::WrapAndAppend
        } else {
            Placement::Prepend
        };
        let background = image_url.filter(|url| !url.is_empty()).map(|url| Background {
            shorthand: css::background_image(url),
            size: "cover",
        });
        Self {
            placement,
            size,
            background,
            contain: settings.contain,
        }
    }

    /// `width` property value.
    #[must_use]
    pub fn width_css(&self) -> String {
        css::px(self.size.width)
    }

    /// `height` property value.
    #[must_use]
    pub fn height_css(&self) -> String {
        css::px(self.size.height)
    }
}
