// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bezel_device::{DeviceDescriptor, FrameArt};
use bezel_geometry::{Composition, FitMode, QuarterTurn, contain_fit};
use kurbo::{Affine, Point, Rect, Size};

use crate::{ClipShape, ContentId, DrawOp, LayerOp, PaintSink, StateOp};

/// Host-side options for painting a simulated device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintOptions {
    /// Paint the frame artwork. When `false` only the content is shown,
    /// clipped to its own rectangle.
    pub show_frame: bool,
    /// Host box the composition is placed in.
    ///
    /// Compositions without a fixed scale are contain-fitted into this box;
    /// fixed-scale compositions are drawn at its origin and may overflow it.
    pub host: Rect,
    /// Placement of a fitted composition inside `host`.
    pub fit_mode: FitMode,
}

impl PaintOptions {
    /// Options showing the frame, centered in `host`.
    #[must_use]
    pub fn new(host: Rect) -> Self {
        Self {
            show_frame: true,
            host,
            fit_mode: FitMode::Center,
        }
    }

    /// Returns these options with frame visibility set to `show_frame`.
    #[must_use]
    pub fn with_frame(mut self, show_frame: bool) -> Self {
        self.show_frame = show_frame;
        self
    }

    /// Returns these options with the given fit mode.
    #[must_use]
    pub fn with_fit_mode(mut self, fit_mode: FitMode) -> Self {
        self.fit_mode = fit_mode;
        self
    }
}

/// Placement of a composed device and its content inside a host box.
///
/// Three coordinate spaces are involved:
/// - **Stage**: the unrotated composition. With the frame shown this is the
///   frame's bounding box; otherwise it is the portrait content box.
/// - **Clip**: the stage translated to the clip region's origin.
/// - **Content**: the viewport the hosted content is laid out in, spanning
///   `(0, 0)..content_size`.
///
/// [`DeviceLayout::outer_transform`] maps stage to host and is where the
/// landscape quarter turn and the container fit live; the clip itself is
/// never rotated. Content in landscape is turned the opposite way inside
/// the clip, so it appears upright in the host.
#[derive(Clone, Debug)]
pub struct DeviceLayout {
    show_frame: bool,
    is_rotated: bool,
    frame_transform: Affine,
    frame_size: Size,
    stage_size: Size,
    clip_origin: Point,
    clip_shape: ClipShape,
    content_size: Size,
    content_in_clip: Affine,
    outer: Affine,
}

impl DeviceLayout {
    /// Lays out `composition` for painting.
    ///
    /// `content_size` is the logical size the content is rendered at, which is
    /// the simulated viewport's `logical_size` for the same orientation.
    #[must_use]
    pub fn new(composition: &Composition, options: &PaintOptions, content_size: Size) -> Self {
        let is_rotated = composition.is_rotated();
        // Content lies in the portrait stage, so landscape content is turned
        // clockwise first.
        let (inner_turn, portrait_content) = if is_rotated {
            (
                QuarterTurn::Clockwise.to_affine(content_size),
                Size::new(content_size.height, content_size.width),
            )
        } else {
            (Affine::IDENTITY, content_size)
        };

        let (stage_size, clip_origin, clip_shape) = if options.show_frame {
            (
                composition.unrotated_frame_size(),
                composition.screen_offset().to_point(),
                ClipShape::Path(composition.transformed_screen_path().clone()),
            )
        } else {
            let stage = portrait_content * composition.requested_scale().unwrap_or(1.0);
            (stage, Point::ORIGIN, ClipShape::Rect(stage.to_rect()))
        };

        let clip_box = clip_shape.bounding_box();
        let content_in_clip = contain_fit(portrait_content, clip_box, FitMode::Center) * inner_turn;

        let (rotation, presented_size) = if is_rotated {
            (
                QuarterTurn::CounterClockwise.to_affine(stage_size),
                Size::new(stage_size.height, stage_size.width),
            )
        } else {
            (Affine::IDENTITY, stage_size)
        };
        let placement = match composition.requested_scale() {
            None => contain_fit(presented_size, options.host, options.fit_mode),
            Some(_) => Affine::translate(options.host.origin().to_vec2()),
        };

        log::trace!(
            "device layout: stage={}x{} rotated={is_rotated} frame={}",
            stage_size.width,
            stage_size.height,
            options.show_frame
        );

        Self {
            show_frame: options.show_frame,
            is_rotated,
            frame_transform: composition.frame_transform(),
            frame_size: composition.unrotated_frame_size(),
            stage_size,
            clip_origin,
            clip_shape,
            content_size,
            content_in_clip,
            outer: placement * rotation,
        }
    }

    /// Whether the layout is presented in landscape.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.is_rotated
    }

    /// Size of the unrotated stage.
    #[must_use]
    pub fn stage_size(&self) -> Size {
        self.stage_size
    }

    /// Transform from stage space to host space.
    ///
    /// This is the container fit (or the host-origin translation for fixed
    /// scales) applied after the landscape quarter turn, if any.
    #[must_use]
    pub fn outer_transform(&self) -> Affine {
        self.outer
    }

    /// Origin of the clip region in stage space.
    #[must_use]
    pub fn clip_origin(&self) -> Point {
        self.clip_origin
    }

    /// Clip region in clip space.
    #[must_use]
    pub fn clip_shape(&self) -> &ClipShape {
        &self.clip_shape
    }

    /// Transform from clip space to host space.
    #[must_use]
    pub fn clip_transform(&self) -> Affine {
        self.outer * Affine::translate(self.clip_origin.to_vec2())
    }

    /// Transform from content space to host space.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        self.clip_transform() * self.content_in_clip
    }

    /// Size the content is laid out at.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Bounding box of the whole composition in host space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.outer.transform_rect_bbox(self.stage_size.to_rect())
    }

    /// Bounding box of the content in host space.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        let content = self.content_size.to_rect();
        self.content_transform().transform_rect_bbox(content)
    }

    /// Maps a content-space point into host space.
    #[must_use]
    pub fn content_to_host(&self, pt: Point) -> Point {
        self.content_transform() * pt
    }

    /// Maps a host-space point (for example a pointer position) into content
    /// space.
    ///
    /// Returns `None` when the point is outside the visible part of the
    /// content: outside the clip region or in the letterbox around the
    /// fitted content.
    #[must_use]
    pub fn host_to_content(&self, pt: Point) -> Option<Point> {
        let in_clip = self.clip_transform().inverse() * pt;
        if !self.clip_shape.contains(in_clip) {
            return None;
        }
        let in_content = self.content_in_clip.inverse() * in_clip;
        let inside = in_content.x >= 0.0
            && in_content.y >= 0.0
            && in_content.x <= self.content_size.width
            && in_content.y <= self.content_size.height;
        inside.then_some(in_content)
    }

    /// Emits the paint operations for this layout into `sink`.
    ///
    /// `descriptor` supplies the frame artwork and must be the descriptor the
    /// composition was built from; a frame whose placed bounds disagree with
    /// the composition trips a debug assertion. The emitted sequence is:
    /// 1. the outer transform, then the frame (skipped when hidden),
    /// 2. the clip transform and a layer clipped to the screen shape,
    /// 3. the content transform and the content itself,
    /// 4. the matching layer pop.
    pub fn paint(
        &self,
        sink: &mut impl PaintSink,
        descriptor: &DeviceDescriptor,
        content: ContentId,
    ) {
        if self.show_frame {
            debug_assert!(
                self.frame_matches(descriptor),
                "descriptor does not match the composition this layout was built from"
            );
            sink.state(StateOp::SetTransform(self.outer));
            let op = match descriptor.frame_art() {
                FrameArt::Fill(brush) => DrawOp::FillPath {
                    path: descriptor.frame_outline().clone(),
                    transform: self.frame_transform,
                    brush: brush.clone(),
                },
                FrameArt::External(artwork) => DrawOp::DrawArtwork {
                    artwork: *artwork,
                    transform: self.frame_transform,
                },
            };
            sink.draw(op);
        }

        sink.state(StateOp::SetTransform(self.clip_transform()));
        sink.state(StateOp::PushLayer(LayerOp {
            clip: Some(self.clip_shape.clone()),
        }));
        sink.state(StateOp::SetTransform(self.content_transform()));
        sink.draw(DrawOp::DrawContent {
            content,
            size: self.content_size,
        });
        sink.state(StateOp::PopLayer);
    }

    fn frame_matches(&self, descriptor: &DeviceDescriptor) -> bool {
        let placed = self
            .frame_transform
            .transform_rect_bbox(descriptor.frame_bounds());
        let tolerance = 1e-9 * self.frame_size.width.max(self.frame_size.height).max(1.0);
        placed.x0.abs() <= tolerance
            && placed.y0.abs() <= tolerance
            && (placed.width() - self.frame_size.width).abs() <= tolerance
            && (placed.height() - self.frame_size.height).abs() <= tolerance
    }
}

/// Lays out `composition` and paints it into `sink` in one step.
///
/// See [`DeviceLayout::new`] and [`DeviceLayout::paint`].
pub fn paint_device(
    sink: &mut impl PaintSink,
    descriptor: &DeviceDescriptor,
    composition: &Composition,
    options: &PaintOptions,
    content: ContentId,
    content_size: Size,
) -> DeviceLayout {
    let layout = DeviceLayout::new(composition, options, content_size);
    layout.paint(sink, descriptor, content);
    layout
}
