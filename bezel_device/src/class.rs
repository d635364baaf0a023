// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Broad category of a simulated device.
///
/// The class never influences geometry. It only selects the
/// [`VisualDensity`] that hosted content should observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Handheld phone.
    #[default]
    Phone,
    /// Tablet.
    Tablet,
    /// Wrist-worn device.
    Watch,
    /// Television or set-top screen.
    Tv,
    /// Laptop with a built-in display.
    Laptop,
    /// Desktop monitor.
    Desktop,
}

impl DeviceClass {
    /// Returns the visual density content should use on this class of device.
    ///
    /// Pointer-driven classes ([`DeviceClass::Laptop`], [`DeviceClass::Desktop`])
    /// use [`VisualDensity::Compact`]; touch-driven ones use
    /// [`VisualDensity::Standard`].
    #[must_use]
    pub const fn visual_density(self) -> VisualDensity {
        match self {
            Self::Laptop | Self::Desktop => VisualDensity::Compact,
            Self::Phone | Self::Tablet | Self::Watch | Self::Tv => VisualDensity::Standard,
        }
    }
}

/// Spacing density hint for hosted content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VisualDensity {
    /// Default spacing for touch targets.
    #[default]
    Standard,
    /// Slightly tighter than standard.
    Comfortable,
    /// Tight spacing for pointer-driven interfaces.
    Compact,
}
