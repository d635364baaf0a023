// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bezel_device::{DeviceDescriptor, Orientation};
use kurbo::Size;

use crate::ViewportMetrics;

/// Derives the viewport metrics hosted content observes.
///
/// With no descriptor, `ambient` is returned unchanged. Otherwise:
/// - The logical size is the native screen size, with width and height
///   swapped when the device is presented in landscape.
/// - Padding is the descriptor's safe-area insets for the presented
///   orientation (landscape reuses portrait insets if it has none of its own).
/// - The pixel ratio is the descriptor's, in every orientation.
/// - Transient insets are cleared and the density follows the device class.
/// - The reported orientation follows the shape of the logical size, so a
///   natively wide device reads as landscape without being rotated.
///
/// Landscape requests on devices that do not rotate are ignored, using
/// [`DeviceDescriptor::is_rotated`] as the single rotation rule.
#[must_use]
pub fn synthesize(
    descriptor: Option<&DeviceDescriptor>,
    orientation: Orientation,
    ambient: &ViewportMetrics,
) -> ViewportMetrics {
    let Some(descriptor) = descriptor else {
        return *ambient;
    };

    let native = descriptor.native_screen_size();
    let logical_size = if descriptor.is_rotated(orientation) {
        Size::new(native.height, native.width)
    } else {
        native
    };
    let padding = descriptor.safe_area_insets_for(orientation);

    log::trace!(
        "synthesized viewport for `{}`: {}x{} @{}",
        descriptor.name(),
        logical_size.width,
        logical_size.height,
        descriptor.pixel_ratio()
    );

    let mut metrics =
        ViewportMetrics::new(logical_size, descriptor.pixel_ratio()).with_padding(padding);
    metrics.visual_density = descriptor.device_class().visual_density();
    metrics
}

#[cfg(test)]
mod tests {
    use bezel_device::{DeviceClass, DeviceDescriptor, Orientation, VisualDensity};
    use kurbo::{Insets, Rect, Shape, Size};

    use super::synthesize;
    use crate::ViewportMetrics;

    fn device(supports_rotation: bool, rotated: Option<Insets>) -> DeviceDescriptor {
        DeviceDescriptor::builder(
            "Pocket",
            Rect::new(0.0, 0.0, 340.0, 690.0).to_path(0.1),
            Rect::new(20.0, 20.0, 320.0, 670.0).to_path(0.1),
            Size::new(375.0, 812.0),
        )
        .pixel_ratio(3.0)
        .safe_area_insets(Insets::new(0.0, 44.0, 0.0, 34.0))
        .rotated_safe_area_insets(rotated)
        .supports_rotation(supports_rotation)
        .build()
        .unwrap()
    }

    fn ambient() -> ViewportMetrics {
        let mut m = ViewportMetrics::new(Size::new(1280.0, 800.0), 2.0)
            .with_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        m.view_insets = Insets::new(0.0, 0.0, 0.0, 300.0);
        m.visual_density = VisualDensity::Comfortable;
        m
    }

    #[test]
    fn pass_through_without_descriptor() {
        let host = ambient();
        for o in [Orientation::Portrait, Orientation::Landscape] {
            assert_eq!(synthesize(None, o, &host), host);
        }
    }

    #[test]
    fn portrait_uses_native_metrics() {
        let d = device(true, None);
        let m = synthesize(Some(&d), Orientation::Portrait, &ambient());
        assert_eq!(m.logical_size, Size::new(375.0, 812.0));
        assert_eq!(m.device_pixel_ratio, 3.0);
        assert_eq!(m.padding, Insets::new(0.0, 44.0, 0.0, 34.0));
        assert_eq!(m.view_padding, m.padding);
        assert_eq!(m.view_insets, Insets::ZERO);
        assert_eq!(m.orientation, Orientation::Portrait);
        assert_eq!(m.visual_density, VisualDensity::Standard);
    }

    #[test]
    fn landscape_swaps_size_and_reuses_insets() {
        let d = device(true, None);
        let m = synthesize(Some(&d), Orientation::Landscape, &ambient());
        assert_eq!(m.logical_size, Size::new(812.0, 375.0));
        assert_eq!(m.padding, Insets::new(0.0, 44.0, 0.0, 34.0));
        assert_eq!(m.device_pixel_ratio, 3.0);
        assert_eq!(m.orientation, Orientation::Landscape);
    }

    #[test]
    fn landscape_prefers_rotated_insets() {
        let rotated = Insets::new(44.0, 0.0, 44.0, 21.0);
        let d = device(true, Some(rotated));
        let m = synthesize(Some(&d), Orientation::Landscape, &ambient());
        assert_eq!(m.padding, rotated);
        assert_eq!(m.view_padding, rotated);
    }

    #[test]
    fn round_trip_restores_portrait_metrics() {
        let d = device(true, Some(Insets::uniform(10.0)));
        let host = ambient();
        let before = synthesize(Some(&d), Orientation::Portrait, &host);
        let turned = synthesize(Some(&d), Orientation::Landscape, &host);
        let after = synthesize(Some(&d), turned.orientation.flipped(), &host);
        assert_ne!(before, turned);
        assert_eq!(before, after);
    }

    #[test]
    fn non_rotating_device_ignores_landscape() {
        let d = device(false, Some(Insets::uniform(10.0)));
        let host = ambient();
        assert_eq!(
            synthesize(Some(&d), Orientation::Landscape, &host),
            synthesize(Some(&d), Orientation::Portrait, &host)
        );
    }

    #[test]
    fn synthesis_is_repeatable() {
        let d = device(true, None);
        let host = ambient();
        let first = synthesize(Some(&d), Orientation::Landscape, &host);
        for _ in 0..3 {
            assert_eq!(synthesize(Some(&d), Orientation::Landscape, &host), first);
        }
    }

    #[test]
    fn density_follows_device_class() {
        let laptop = DeviceDescriptor::builder(
            "Notebook",
            Rect::new(0.0, 0.0, 1000.0, 640.0).to_path(0.1),
            Rect::new(40.0, 30.0, 960.0, 605.0).to_path(0.1),
            Size::new(1440.0, 900.0),
        )
        .device_class(DeviceClass::Laptop)
        .pixel_ratio(2.0)
        .build()
        .unwrap();
        let m = synthesize(Some(&laptop), Orientation::Landscape, &ambient());
        assert_eq!(m.visual_density, VisualDensity::Compact);
        // Laptops do not rotate by default; the native size is already wide.
        assert_eq!(m.logical_size, Size::new(1440.0, 900.0));
        assert_eq!(m.orientation, Orientation::Landscape);
    }
}
