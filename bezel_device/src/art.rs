// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{Brush, Color};

/// Identifier for frame artwork owned by the host renderer.
///
/// This is a small, opaque handle. Bezel never dereferences it; it is passed
/// through to the paint sink together with the transform the artwork must be
/// drawn under.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtworkId(pub u32);

/// How a device's frame is painted.
///
/// Geometry and viewport code never looks inside this value.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameArt {
    /// Fill the frame outline path with a brush.
    Fill(Brush),
    /// Draw host-owned artwork authored in frame-local units.
    External(ArtworkId),
}

impl FrameArt {
    /// Near-black frame fill.
    pub const DEFAULT_FILL: Color = Color::from_rgb8(0x1c, 0x1c, 0x1e);
}

impl Default for FrameArt {
    fn default() -> Self {
        Self::Fill(Brush::Solid(Self::DEFAULT_FILL))
    }
}
