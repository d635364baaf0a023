// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bezel_device::{DeviceDescriptor, Orientation};
use kurbo::{Affine, BezPath, Rect, Size, Vec2};

/// Result of composing a device frame with its screen cut-out.
///
/// A `Composition` is derived data. It is recomputed by [`compose`] whenever
/// the descriptor, the requested scale, or the orientation changes, and is
/// never updated in place.
///
/// Coordinates are in the *unrotated* composition space: the frame outline's
/// bounding box spans `(0, 0)` to [`Composition::unrotated_frame_size`].
/// Landscape presentation is a quarter turn applied on top of this space.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    uniform_scale: f64,
    requested_scale: Option<f64>,
    frame_size: Size,
    frame_transform: Affine,
    screen_path: BezPath,
    screen_bounds: Rect,
    is_rotated: bool,
}

impl Composition {
    /// Scale from frame-local units to logical pixels.
    ///
    /// Equal to `requested_scale.unwrap_or(1.0) * native_width / cutout_width`.
    #[must_use]
    pub fn uniform_scale(&self) -> f64 {
        self.uniform_scale
    }

    /// The fixed scale the composition was requested at.
    ///
    /// `None` means the composition is meant to be fitted into its host
    /// container downstream.
    #[must_use]
    pub fn requested_scale(&self) -> Option<f64> {
        self.requested_scale
    }

    /// Bounding size of the scaled frame as presented.
    ///
    /// Width and height are swapped when the composition is rotated.
    #[must_use]
    pub fn transformed_frame_size(&self) -> Size {
        if self.is_rotated {
            Size::new(self.frame_size.height, self.frame_size.width)
        } else {
            self.frame_size
        }
    }

    /// Bounding size of the scaled frame before any rotation.
    #[must_use]
    pub fn unrotated_frame_size(&self) -> Size {
        self.frame_size
    }

    /// Transform from frame-local units into the unrotated composition space.
    ///
    /// This is the uniform scale, preceded by a translation that moves the
    /// frame outline's bounding box origin to `(0, 0)`. Frame artwork is
    /// painted under this transform.
    #[must_use]
    pub fn frame_transform(&self) -> Affine {
        self.frame_transform
    }

    /// The screen cut-out scaled by [`Composition::uniform_scale`] and
    /// translated so that its bounding box origin is `(0, 0)`.
    #[must_use]
    pub fn transformed_screen_path(&self) -> &BezPath {
        &self.screen_path
    }

    /// Offset of the scaled cut-out's bounding box from the frame origin.
    #[must_use]
    pub fn screen_offset(&self) -> Vec2 {
        self.screen_bounds.origin().to_vec2()
    }

    /// Size of the scaled cut-out's bounding box.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_bounds.size()
    }

    /// Bounding box of the scaled cut-out in the unrotated composition space.
    #[must_use]
    pub fn screen_bounds(&self) -> Rect {
        self.screen_bounds
    }

    /// Whether the composition is presented on its side.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.is_rotated
    }
}

/// Composes `descriptor` at an optional fixed scale and an orientation.
///
/// The scale anchors the cut-out's width to the native screen width; the
/// same value scales the frame bounds and the cut-out path, which keeps frame
/// artwork and clip region in registration for every `requested_scale`.
///
/// `requested_scale`, when present, must be positive and finite; this is
/// checked with a debug assertion.
///
/// A landscape request on a device that does not support rotation is
/// ignored. Rotation only swaps the reported frame size; the screen path and
/// scale are identical in both orientations.
#[must_use]
pub fn compose(
    descriptor: &DeviceDescriptor,
    requested_scale: Option<f64>,
    orientation: Orientation,
) -> Composition {
    let cutout = descriptor.cutout_bounds();
    debug_assert!(
        cutout.width() > 0.0 && cutout.height() > 0.0,
        "descriptor cut-out bounds must have positive area"
    );
    debug_assert!(
        requested_scale.is_none_or(|s| s.is_finite() && s > 0.0),
        "requested scale must be positive and finite"
    );

    let uniform_scale =
        requested_scale.unwrap_or(1.0) * descriptor.native_screen_size().width / cutout.width();

    let frame = descriptor.frame_bounds();
    let frame_origin = frame.origin().to_vec2();
    let frame_transform = Affine::scale(uniform_scale) * Affine::translate(-frame_origin);

    let cutout_origin = cutout.origin().to_vec2();
    let mut screen_path = descriptor.screen_cutout().clone();
    screen_path.apply_affine(Affine::scale(uniform_scale) * Affine::translate(-cutout_origin));

    let offset = (cutout_origin - frame_origin) * uniform_scale;
    let screen_size = cutout.size() * uniform_scale;
    let screen_bounds = Rect::from_origin_size(offset.to_point(), screen_size);

    let is_rotated = descriptor.is_rotated(orientation);
    if orientation.is_landscape() && !is_rotated {
        log::debug!(
            "ignoring landscape request for `{}`: device does not rotate",
            descriptor.name()
        );
    }
    log::trace!(
        "composed `{}`: scale={uniform_scale} rotated={is_rotated}",
        descriptor.name()
    );

    Composition {
        uniform_scale,
        requested_scale,
        frame_size: frame.size() * uniform_scale,
        frame_transform,
        screen_path,
        screen_bounds,
        is_rotated,
    }
}
