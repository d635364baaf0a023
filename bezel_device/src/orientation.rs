// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Requested presentation orientation of a simulated device.
///
/// Descriptors are always authored in portrait. Whether a landscape request
/// is honored depends on [`crate::DeviceDescriptor::supports_rotation`]; see
/// [`crate::DeviceDescriptor::is_rotated`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// The device's native orientation.
    #[default]
    Portrait,
    /// The device turned a quarter turn on its side.
    Landscape,
}

impl Orientation {
    /// Returns the other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Returns `true` for [`Orientation::Landscape`].
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}
