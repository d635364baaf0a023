// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;

/// Error returned when a [`crate::DeviceDescriptorBuilder`] describes a device
/// the engine cannot simulate.
#[derive(Debug)]
pub enum DescriptorError {
    /// The screen cut-out's bounding box has a non-positive (or non-finite)
    /// width or height.
    ///
    /// The cut-out width is a scale divisor, so a degenerate cut-out can never
    /// produce a usable composition.
    DegenerateCutout {
        /// Width of the cut-out bounding box.
        width: f64,
        /// Height of the cut-out bounding box.
        height: f64,
    },
    /// The frame outline's bounding box does not enclose the cut-out's.
    ///
    /// Host fitting scales the frame bounds, so content outside them would
    /// escape the host box. An empty frame outline also lands here.
    CutoutOutsideFrame {
        /// Bounding box of the frame outline.
        frame: Rect,
        /// Bounding box of the screen cut-out.
        cutout: Rect,
    },
    /// The native screen size has a non-positive (or non-finite) dimension.
    DegenerateScreen {
        /// Native logical width.
        width: f64,
        /// Native logical height.
        height: f64,
    },
    /// The pixel ratio is not a positive finite number.
    InvalidPixelRatio(f64),
    /// One of the path strings was not valid SVG path data.
    #[cfg(feature = "std")]
    InvalidPath(kurbo::SvgParseError),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCutout { width, height } => {
                write!(f, "screen cut-out bounds are degenerate ({width} x {height})")
            }
            Self::CutoutOutsideFrame { frame, cutout } => {
                write!(f, "screen cut-out {cutout:?} is not inside frame bounds {frame:?}")
            }
            Self::DegenerateScreen { width, height } => {
                write!(f, "native screen size is degenerate ({width} x {height})")
            }
            Self::InvalidPixelRatio(ratio) => write!(f, "invalid pixel ratio {ratio}"),
            #[cfg(feature = "std")]
            Self::InvalidPath(err) => write!(f, "invalid SVG path data: {err}"),
        }
    }
}

impl core::error::Error for DescriptorError {}

#[cfg(feature = "std")]
impl From<kurbo::SvgParseError> for DescriptorError {
    fn from(err: kurbo::SvgParseError) -> Self {
        Self::InvalidPath(err)
    }
}
