// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use bezel_device::ArtworkId;
use kurbo::{Affine, BezPath, Rect, Shape, Size};
use peniko::Brush;

/// Identifier for the hosted content being simulated.
///
/// Like [`ArtworkId`], this is an opaque handle the sink resolves on its own.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentId(pub u32);

/// Clip region attached to a pushed layer, in the layer's local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Clip to an axis-aligned rectangle.
    Rect(Rect),
    /// Clip to the interior of a path (non-zero winding).
    Path(BezPath),
}

impl ClipShape {
    /// Returns `true` if `pt` lies inside the clip region.
    #[must_use]
    pub fn contains(&self, pt: kurbo::Point) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(pt),
            Self::Path(path) => path.contains(pt),
        }
    }

    /// Bounding box of the clip region.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Path(path) => path.bounding_box(),
        }
    }
}

/// Parameters for a pushed layer.
///
/// Layers scope clipping: everything drawn between a
/// [`StateOp::PushLayer`] and its matching [`StateOp::PopLayer`] is
/// restricted to `clip`.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerOp {
    /// Optional clip applied to this layer's contents.
    pub clip: Option<ClipShape>,
}

/// Operations that change the current paint state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform, from local coordinates to host coordinates.
    SetTransform(Affine),
    /// Push a new layer. Must be matched by a [`StateOp::PopLayer`].
    PushLayer(LayerOp),
    /// Pop the most recently pushed layer.
    PopLayer,
}

/// Operations that produce pixels under the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a path with a brush.
    FillPath {
        /// Path in its own coordinate space.
        path: BezPath,
        /// Transform from the path's space into the current local space.
        transform: Affine,
        /// Brush to fill with.
        brush: Brush,
    },
    /// Draw host-owned artwork.
    DrawArtwork {
        /// Artwork to draw.
        artwork: ArtworkId,
        /// Transform from the artwork's space into the current local space.
        transform: Affine,
    },
    /// Render the hosted content into the box `(0, 0)..size` of the current
    /// local space.
    DrawContent {
        /// Content to render.
        content: ContentId,
        /// Viewport size the content is laid out at.
        size: Size,
    },
}

/// Unified paint operation, as stored by recordings.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Consumer of paint operations.
///
/// Renderers implement this to turn Bezel's description into pixels; tests
/// use [`crate::Recorder`].
pub trait PaintSink {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);
    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

impl PaintSink for Vec<PaintOp> {
    fn state(&mut self, op: StateOp) {
        self.push(PaintOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.push(PaintOp::Draw(op));
    }
}
