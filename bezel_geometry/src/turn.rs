// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bezel_device::Orientation;
use core::f64::consts::FRAC_PI_2;
use kurbo::{Affine, Size};

/// A 90° rotation of a box anchored at the origin.
///
/// Directions are as seen on screen, with the y axis pointing down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    /// Top edge moves to the right.
    Clockwise,
    /// Top edge moves to the left.
    CounterClockwise,
}

impl QuarterTurn {
    /// Returns the turn that undoes `self`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Signed rotation angle in radians, in Kurbo's y-down convention.
    #[must_use]
    pub const fn angle(self) -> f64 {
        match self {
            Self::Clockwise => FRAC_PI_2,
            Self::CounterClockwise => -FRAC_PI_2,
        }
    }

    /// Turn used when animating from one presented orientation to another.
    ///
    /// Entering landscape turns counter-clockwise and returning to portrait
    /// turns clockwise. Returns `None` when the orientation does not change.
    #[must_use]
    pub const fn for_transition(from: Orientation, to: Orientation) -> Option<Self> {
        match (from, to) {
            (Orientation::Portrait, Orientation::Landscape) => Some(Self::CounterClockwise),
            (Orientation::Landscape, Orientation::Portrait) => Some(Self::Clockwise),
            _ => None,
        }
    }

    /// Exact transform turning the box `(0, 0)..size` by a quarter.
    ///
    /// The turned box is translated back so that it again spans from the
    /// origin, to `(size.height, size.width)`. The matrix holds only `0`,
    /// `±1`, and one edge length, so composing turns never drifts.
    #[must_use]
    pub fn to_affine(self, size: Size) -> Affine {
        match self {
            // (x, y) -> (h - y, x)
            Self::Clockwise => Affine::new([0.0, 1.0, -1.0, 0.0, size.height, 0.0]),
            // (x, y) -> (y, w - x)
            Self::CounterClockwise => Affine::new([0.0, -1.0, 1.0, 0.0, 0.0, size.width]),
        }
    }
}
