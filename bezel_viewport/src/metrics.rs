// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bezel_device::{Orientation, VisualDensity};
use kurbo::{Insets, Rect, Size};

/// Viewport metrics as observed by hosted content.
///
/// This is the shape of both the host's ambient viewport and the simulated
/// viewport produced by [`crate::synthesize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    /// Logical size of the viewport.
    pub logical_size: Size,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
    /// Effective safe-area padding.
    pub padding: Insets,
    /// Padding reserved by the system, regardless of transient insets.
    pub view_padding: Insets,
    /// Transient insets such as an on-screen keyboard.
    pub view_insets: Insets,
    /// Orientation the viewport is presented in.
    pub orientation: Orientation,
    /// Spacing density content should use.
    pub visual_density: VisualDensity,
}

impl ViewportMetrics {
    /// Creates metrics with no padding or insets.
    ///
    /// The orientation is landscape when `logical_size` is wider than tall.
    #[must_use]
    pub fn new(logical_size: Size, device_pixel_ratio: f64) -> Self {
        let orientation = if logical_size.width > logical_size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            logical_size,
            device_pixel_ratio,
            padding: Insets::ZERO,
            view_padding: Insets::ZERO,
            view_insets: Insets::ZERO,
            orientation,
            visual_density: VisualDensity::default(),
        }
    }

    /// Returns these metrics with `padding` and `view_padding` set to `padding`.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self.view_padding = padding;
        self
    }

    /// Size of the viewport in physical pixels.
    #[must_use]
    pub fn physical_size(&self) -> Size {
        self.logical_size * self.device_pixel_ratio
    }

    /// Logical-space rectangle left after removing the safe-area padding.
    #[must_use]
    pub fn safe_rect(&self) -> Rect {
        self.logical_size.to_rect() - self.padding
    }
}
