// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use kurbo::{BezPath, Insets, Rect, Shape, Size};

use crate::{DescriptorError, DeviceClass, FrameArt, Orientation};

/// Immutable description of one physical device.
///
/// All geometry is authored in portrait. The frame outline and the screen
/// cut-out share one frame-local coordinate space, in arbitrary drawing
/// units; the engine aligns them to logical pixels by anchoring the cut-out's
/// width to [`DeviceDescriptor::native_screen_size`].
///
/// Descriptors are only produced by [`DeviceDescriptorBuilder::build`], which
/// guarantees:
/// - The cut-out's bounding box has positive, finite width and height.
/// - The native screen size has positive, finite width and height.
/// - The pixel ratio is positive and finite.
///
/// Swapping the simulated device means replacing the whole value; there are
/// no setters.
#[derive(Clone, Debug)]
pub struct DeviceDescriptor {
    name: Arc<str>,
    frame_outline: BezPath,
    screen_cutout: BezPath,
    frame_bounds: Rect,
    cutout_bounds: Rect,
    native_screen_size: Size,
    pixel_ratio: f64,
    safe_area_insets: Insets,
    rotated_safe_area_insets: Option<Insets>,
    supports_rotation: bool,
    device_class: DeviceClass,
    frame_art: FrameArt,
}

impl DeviceDescriptor {
    /// Starts building a descriptor from its required geometry.
    ///
    /// Optional properties default to:
    /// - pixel ratio `1.0`,
    /// - zero safe-area insets and no dedicated landscape insets,
    /// - [`DeviceClass::Phone`],
    /// - rotation support derived from the device class
    ///   (see [`DeviceDescriptorBuilder::supports_rotation`]),
    /// - the default [`FrameArt`] fill.
    pub fn builder(
        name: impl Into<Arc<str>>,
        frame_outline: BezPath,
        screen_cutout: BezPath,
        native_screen_size: Size,
    ) -> DeviceDescriptorBuilder {
        DeviceDescriptorBuilder {
            name: name.into(),
            frame_outline,
            screen_cutout,
            native_screen_size,
            pixel_ratio: 1.0,
            safe_area_insets: Insets::ZERO,
            rotated_safe_area_insets: None,
            supports_rotation: None,
            device_class: DeviceClass::default(),
            frame_art: FrameArt::default(),
        }
    }

    /// Starts building a descriptor from SVG path data for the frame outline
    /// and the screen cut-out.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::InvalidPath`] if either string fails to parse.
    #[cfg(feature = "std")]
    pub fn builder_from_svg(
        name: impl Into<Arc<str>>,
        frame_outline: &str,
        screen_cutout: &str,
        native_screen_size: Size,
    ) -> Result<DeviceDescriptorBuilder, DescriptorError> {
        let frame_outline = BezPath::from_svg(frame_outline)?;
        let screen_cutout = BezPath::from_svg(screen_cutout)?;
        Ok(Self::builder(
            name,
            frame_outline,
            screen_cutout,
            native_screen_size,
        ))
    }

    /// Display name of the device.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outer frame silhouette in frame-local units.
    #[must_use]
    pub fn frame_outline(&self) -> &BezPath {
        &self.frame_outline
    }

    /// Screen cut-out in frame-local units.
    #[must_use]
    pub fn screen_cutout(&self) -> &BezPath {
        &self.screen_cutout
    }

    /// Bounding box of [`DeviceDescriptor::frame_outline`].
    #[must_use]
    pub fn frame_bounds(&self) -> Rect {
        self.frame_bounds
    }

    /// Bounding box of [`DeviceDescriptor::screen_cutout`].
    ///
    /// Always has positive width and height.
    #[must_use]
    pub fn cutout_bounds(&self) -> Rect {
        self.cutout_bounds
    }

    /// Native logical screen size in portrait.
    #[must_use]
    pub fn native_screen_size(&self) -> Size {
        self.native_screen_size
    }

    /// Physical-to-logical pixel ratio.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Safe-area insets in portrait.
    #[must_use]
    pub fn safe_area_insets(&self) -> Insets {
        self.safe_area_insets
    }

    /// Safe-area insets in landscape.
    ///
    /// Falls back to [`DeviceDescriptor::safe_area_insets`] when the device
    /// was built without dedicated landscape insets.
    #[must_use]
    pub fn rotated_safe_area_insets(&self) -> Insets {
        self.rotated_safe_area_insets.unwrap_or(self.safe_area_insets)
    }

    /// Dedicated landscape insets, if the device has any.
    #[must_use]
    pub fn explicit_rotated_safe_area_insets(&self) -> Option<Insets> {
        self.rotated_safe_area_insets
    }

    /// Whether the device honors landscape requests.
    #[must_use]
    pub fn supports_rotation(&self) -> bool {
        self.supports_rotation
    }

    /// Device category.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// How the frame is painted.
    #[must_use]
    pub fn frame_art(&self) -> &FrameArt {
        &self.frame_art
    }

    /// Returns `true` if requesting `orientation` actually rotates this device.
    ///
    /// Landscape requests on devices that do not support rotation are
    /// ignored rather than rejected.
    #[must_use]
    pub fn is_rotated(&self, orientation: Orientation) -> bool {
        self.supports_rotation && orientation.is_landscape()
    }

    /// The orientation the device is actually presented in for a request.
    #[must_use]
    pub fn presented_orientation(&self, requested: Orientation) -> Orientation {
        if self.is_rotated(requested) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Safe-area insets that apply when `orientation` is requested.
    #[must_use]
    pub fn safe_area_insets_for(&self, orientation: Orientation) -> Insets {
        if self.is_rotated(orientation) {
            self.rotated_safe_area_insets()
        } else {
            self.safe_area_insets
        }
    }
}

/// Builder for [`DeviceDescriptor`].
///
/// Created by [`DeviceDescriptor::builder`].
#[derive(Clone, Debug)]
pub struct DeviceDescriptorBuilder {
    name: Arc<str>,
    frame_outline: BezPath,
    screen_cutout: BezPath,
    native_screen_size: Size,
    pixel_ratio: f64,
    safe_area_insets: Insets,
    rotated_safe_area_insets: Option<Insets>,
    supports_rotation: Option<bool>,
    device_class: DeviceClass,
    frame_art: FrameArt,
}

impl DeviceDescriptorBuilder {
    /// Sets the physical-to-logical pixel ratio.
    #[must_use]
    pub fn pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Sets the portrait safe-area insets.
    #[must_use]
    pub fn safe_area_insets(mut self, insets: Insets) -> Self {
        self.safe_area_insets = insets;
        self
    }

    /// Sets dedicated landscape safe-area insets.
    ///
    /// `None` reuses the portrait insets in landscape.
    #[must_use]
    pub fn rotated_safe_area_insets(mut self, insets: Option<Insets>) -> Self {
        self.rotated_safe_area_insets = insets;
        self
    }

    /// Sets whether the device honors landscape requests.
    ///
    /// When never called, phones and tablets rotate and every other class
    /// stays in portrait.
    #[must_use]
    pub fn supports_rotation(mut self, supports: bool) -> Self {
        self.supports_rotation = Some(supports);
        self
    }

    /// Sets the device category.
    #[must_use]
    pub fn device_class(mut self, class: DeviceClass) -> Self {
        self.device_class = class;
        self
    }

    /// Sets how the frame is painted.
    #[must_use]
    pub fn frame_art(mut self, art: FrameArt) -> Self {
        self.frame_art = art;
        self
    }

    /// Validates the description and produces the descriptor.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::DegenerateCutout`] if the cut-out's bounding box
    ///   has a non-positive or non-finite dimension.
    /// - [`DescriptorError::CutoutOutsideFrame`] if the frame outline is empty
    ///   or its bounding box does not contain the cut-out's.
    /// - [`DescriptorError::DegenerateScreen`] if the native screen size has a
    ///   non-positive or non-finite dimension.
    /// - [`DescriptorError::InvalidPixelRatio`] if the pixel ratio is not a
    ///   positive finite number.
    pub fn build(self) -> Result<DeviceDescriptor, DescriptorError> {
        let cutout_bounds = self.screen_cutout.bounding_box();
        if !is_positive(cutout_bounds.width()) || !is_positive(cutout_bounds.height()) {
            return Err(DescriptorError::DegenerateCutout {
                width: cutout_bounds.width(),
                height: cutout_bounds.height(),
            });
        }
        let frame_bounds = self.frame_outline.bounding_box();
        if self.frame_outline.elements().is_empty()
            || frame_bounds.union(cutout_bounds) != frame_bounds
        {
            return Err(DescriptorError::CutoutOutsideFrame {
                frame: frame_bounds,
                cutout: cutout_bounds,
            });
        }
        let size = self.native_screen_size;
        if !is_positive(size.width) || !is_positive(size.height) {
            return Err(DescriptorError::DegenerateScreen {
                width: size.width,
                height: size.height,
            });
        }
        if !is_positive(self.pixel_ratio) {
            return Err(DescriptorError::InvalidPixelRatio(self.pixel_ratio));
        }

        let supports_rotation = self.supports_rotation.unwrap_or(matches!(
            self.device_class,
            DeviceClass::Phone | DeviceClass::Tablet
        ));

        Ok(DeviceDescriptor {
            frame_bounds,
            cutout_bounds,
            name: self.name,
            frame_outline: self.frame_outline,
            screen_cutout: self.screen_cutout,
            native_screen_size: size,
            pixel_ratio: self.pixel_ratio,
            safe_area_insets: self.safe_area_insets,
            rotated_safe_area_insets: self.rotated_safe_area_insets,
            supports_rotation,
            device_class: self.device_class,
            frame_art: self.frame_art,
        })
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Insets, Rect, Shape, Size};

    use super::DeviceDescriptor;
    use crate::{DescriptorError, DeviceClass, Orientation};

    fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
        Rect::new(x0, y0, x1, y1).to_path(0.1)
    }

    fn phone() -> DeviceDescriptor {
        DeviceDescriptor::builder(
            "Test Phone",
            rect_path(0.0, 0.0, 340.0, 700.0),
            rect_path(20.0, 20.0, 320.0, 670.0),
            Size::new(375.0, 812.0),
        )
        .pixel_ratio(3.0)
        .safe_area_insets(Insets::new(0.0, 44.0, 0.0, 34.0))
        .build()
        .unwrap()
    }

    #[test]
    fn build_records_bounds_and_defaults() {
        let d = phone();
        assert_eq!(d.name(), "Test Phone");
        assert_eq!(d.frame_bounds(), Rect::new(0.0, 0.0, 340.0, 700.0));
        assert_eq!(d.cutout_bounds(), Rect::new(20.0, 20.0, 320.0, 670.0));
        assert_eq!(d.device_class(), DeviceClass::Phone);
        assert!(d.supports_rotation());
        assert_eq!(d.explicit_rotated_safe_area_insets(), None);
    }

    #[test]
    fn rotated_insets_fall_back_to_portrait() {
        let d = phone();
        assert_eq!(d.rotated_safe_area_insets(), d.safe_area_insets());
        assert_eq!(
            d.safe_area_insets_for(Orientation::Landscape),
            Insets::new(0.0, 44.0, 0.0, 34.0)
        );
    }

    #[test]
    fn explicit_rotated_insets_apply_only_when_rotated() {
        let landscape = Insets::new(44.0, 0.0, 44.0, 21.0);
        let d = DeviceDescriptor::builder(
            "Rotating",
            rect_path(0.0, 0.0, 100.0, 200.0),
            rect_path(10.0, 10.0, 90.0, 190.0),
            Size::new(80.0, 180.0),
        )
        .safe_area_insets(Insets::new(0.0, 44.0, 0.0, 34.0))
        .rotated_safe_area_insets(Some(landscape))
        .supports_rotation(true)
        .build()
        .unwrap();

        assert_eq!(d.safe_area_insets_for(Orientation::Landscape), landscape);
        assert_eq!(
            d.safe_area_insets_for(Orientation::Portrait),
            Insets::new(0.0, 44.0, 0.0, 34.0)
        );
    }

    #[test]
    fn non_rotating_device_ignores_landscape() {
        let d = DeviceDescriptor::builder(
            "Monitor",
            rect_path(0.0, 0.0, 1000.0, 700.0),
            rect_path(20.0, 20.0, 980.0, 560.0),
            Size::new(1920.0, 1080.0),
        )
        .device_class(DeviceClass::Desktop)
        .rotated_safe_area_insets(Some(Insets::uniform(8.0)))
        .build()
        .unwrap();

        assert!(!d.supports_rotation());
        assert!(!d.is_rotated(Orientation::Landscape));
        assert_eq!(
            d.presented_orientation(Orientation::Landscape),
            Orientation::Portrait
        );
        assert_eq!(d.safe_area_insets_for(Orientation::Landscape), Insets::ZERO);
    }

    #[test]
    fn explicit_rotation_flag_overrides_class_default() {
        let d = DeviceDescriptor::builder(
            "Convertible",
            rect_path(0.0, 0.0, 100.0, 100.0),
            rect_path(0.0, 0.0, 100.0, 100.0),
            Size::new(100.0, 100.0),
        )
        .device_class(DeviceClass::Laptop)
        .supports_rotation(true)
        .build()
        .unwrap();
        assert!(d.is_rotated(Orientation::Landscape));
    }

    #[test]
    fn degenerate_cutout_is_rejected() {
        let flat = BezPath::from_vec(alloc::vec![
            kurbo::PathEl::MoveTo((0.0, 5.0).into()),
            kurbo::PathEl::LineTo((100.0, 5.0).into()),
            kurbo::PathEl::ClosePath,
        ]);
        let err = DeviceDescriptor::builder(
            "Flat",
            rect_path(0.0, 0.0, 100.0, 100.0),
            flat,
            Size::new(100.0, 100.0),
        )
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::DegenerateCutout { height, .. } if height == 0.0
        ));

        let empty = DeviceDescriptor::builder(
            "Empty",
            rect_path(0.0, 0.0, 100.0, 100.0),
            BezPath::new(),
            Size::new(100.0, 100.0),
        )
        .build();
        assert!(matches!(
            empty,
            Err(DescriptorError::DegenerateCutout { .. })
        ));
    }

    #[test]
    fn frame_must_enclose_cutout() {
        let empty = DeviceDescriptor::builder(
            "No frame",
            BezPath::new(),
            rect_path(20.0, 20.0, 320.0, 670.0),
            Size::new(375.0, 812.0),
        )
        .build();
        assert!(matches!(
            empty,
            Err(DescriptorError::CutoutOutsideFrame { .. })
        ));

        let small = DeviceDescriptor::builder(
            "Small frame",
            rect_path(0.0, 0.0, 100.0, 100.0),
            rect_path(20.0, 20.0, 320.0, 670.0),
            Size::new(375.0, 812.0),
        )
        .build();
        assert!(matches!(
            small,
            Err(DescriptorError::CutoutOutsideFrame { frame, cutout })
                if frame == Rect::new(0.0, 0.0, 100.0, 100.0)
                    && cutout == Rect::new(20.0, 20.0, 320.0, 670.0)
        ));

        // Sharing an edge with the frame is fine.
        let flush = DeviceDescriptor::builder(
            "Edge to edge",
            rect_path(0.0, 0.0, 100.0, 200.0),
            rect_path(0.0, 10.0, 100.0, 190.0),
            Size::new(100.0, 180.0),
        )
        .build();
        assert!(flush.is_ok());
    }

    #[test]
    fn degenerate_screen_and_ratio_are_rejected() {
        let screen = DeviceDescriptor::builder(
            "No screen",
            rect_path(0.0, 0.0, 100.0, 100.0),
            rect_path(0.0, 0.0, 100.0, 100.0),
            Size::new(0.0, 100.0),
        )
        .build();
        assert!(matches!(
            screen,
            Err(DescriptorError::DegenerateScreen { .. })
        ));

        let ratio = DeviceDescriptor::builder(
            "Bad ratio",
            rect_path(0.0, 0.0, 100.0, 100.0),
            rect_path(0.0, 0.0, 100.0, 100.0),
            Size::new(100.0, 100.0),
        )
        .pixel_ratio(f64::NAN)
        .build();
        assert!(matches!(ratio, Err(DescriptorError::InvalidPixelRatio(_))));
    }

    #[cfg(feature = "std")]
    #[test]
    fn builds_from_svg_path_data() {
        let d = DeviceDescriptor::builder_from_svg(
            "Svg",
            "M0 0 H200 V400 H0 Z",
            "M10 20 H190 V380 H10 Z",
            Size::new(360.0, 720.0),
        )
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(d.cutout_bounds(), Rect::new(10.0, 20.0, 190.0, 380.0));

        let bad = DeviceDescriptor::builder_from_svg("Bad", "M0 0 Q", "M0 0", Size::new(1.0, 1.0));
        assert!(matches!(bad, Err(DescriptorError::InvalidPath(_))));
    }
}
