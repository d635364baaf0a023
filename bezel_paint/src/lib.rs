// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bezel_paint --heading-base-level=0

//! Bezel Paint: describing how a simulated device is drawn.
//!
//! Given a [`Composition`](bezel_geometry::Composition) and the size the
//! hosted content is laid out at, this crate works out where everything goes
//! in a host box and describes the drawing as a short sequence of paint
//! operations:
//!
//! 1. The frame artwork, at the composition's uniform scale (skipped when the
//!    frame is hidden).
//! 2. A layer clipped to the scaled screen cut-out.
//! 3. The content, contain-fitted into the clip region.
//!
//! In landscape the whole sequence sits under a single counter-clockwise
//! quarter turn, and content is turned clockwise inside the clip so it reads
//! upright. Without a fixed scale the turned composition is finally
//! contain-fitted into the host box.
//!
//! The operations are plain data delivered to a [`PaintSink`]. Renderers
//! implement the trait; [`Recorder`] records ops together with the state they
//! ran under, for tests and debugging. Nothing here rasterizes.
//!
//! ## Example
//!
//! ```rust
//! use bezel_device::{DeviceDescriptor, Orientation};
//! use bezel_geometry::compose;
//! use bezel_paint::{ContentId, PaintOptions, Recorder, paint_device};
//! use kurbo::{Point, Rect, Shape, Size};
//!
//! let device = DeviceDescriptor::builder(
//!     "Pocket",
//!     Rect::new(0.0, 0.0, 340.0, 690.0).to_path(0.1),
//!     Rect::new(20.0, 20.0, 320.0, 670.0).to_path(0.1),
//!     Size::new(375.0, 812.0),
//! )
//! .build()
//! .unwrap();
//!
//! let composition = compose(&device, None, Orientation::Portrait);
//! let options = PaintOptions::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let mut recorder = Recorder::new();
//! let layout = paint_device(
//!     &mut recorder,
//!     &device,
//!     &composition,
//!     &options,
//!     ContentId(0),
//!     Size::new(375.0, 812.0),
//! );
//!
//! // Pointer input can be routed back into content coordinates.
//! let center = layout.content_to_host(Point::new(187.5, 406.0));
//! assert!(layout.host_to_content(center).is_some());
//! assert_eq!(recorder.draws().count(), 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod layout;
mod ops;
mod record;

pub use layout::{DeviceLayout, PaintOptions, paint_device};
pub use ops::{ClipShape, ContentId, DrawOp, LayerOp, PaintOp, PaintSink, StateOp};
pub use record::{Event, Recorder, StateSnapshot};
