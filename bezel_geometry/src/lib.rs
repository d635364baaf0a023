// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bezel_geometry --heading-base-level=0

//! Bezel Geometry: composing a device frame and its screen cut-out.
//!
//! Three transforms meet when a device is simulated on screen:
//! - The **frame-to-screen scale** ([`Composition::uniform_scale`]) maps
//!   frame-local drawing units to logical pixels by anchoring the cut-out's
//!   width to the device's native screen width.
//! - The **device rotation** ([`QuarterTurn`]) turns the whole composition on
//!   its side for landscape.
//! - The **container fit** ([`contain_fit`]) scales the rotated result into an
//!   arbitrary host box.
//!
//! This crate computes the first and provides exact building blocks for the
//! other two. [`compose`] is a pure function of a descriptor, an optional
//! fixed scale, and an orientation; callers recompute it on every layout pass
//! instead of caching it.
//!
//! ## Example
//!
//! ```rust
//! use bezel_device::{DeviceDescriptor, Orientation};
//! use bezel_geometry::compose;
//! use kurbo::{Rect, Shape, Size};
//!
//! let device = DeviceDescriptor::builder(
//!     "Pocket",
//!     Rect::new(0.0, 0.0, 340.0, 690.0).to_path(0.1),
//!     Rect::new(20.0, 20.0, 320.0, 670.0).to_path(0.1),
//!     Size::new(375.0, 812.0),
//! )
//! .supports_rotation(true)
//! .build()
//! .unwrap();
//!
//! let portrait = compose(&device, None, Orientation::Portrait);
//! assert_eq!(portrait.uniform_scale(), 1.25);
//! assert_eq!(portrait.transformed_frame_size(), Size::new(425.0, 862.5));
//!
//! let landscape = compose(&device, None, Orientation::Landscape);
//! assert!(landscape.is_rotated());
//! assert_eq!(landscape.transformed_frame_size(), Size::new(862.5, 425.0));
//! ```
//!
//! ## Design notes
//!
//! - Only the cut-out's *width* is used to derive the scale. A cut-out whose
//!   aspect ratio differs from the native screen size keeps its own aspect
//!   ratio; the mismatch is not corrected here.
//! - Rotation never re-derives paths. It only swaps the reported bounding
//!   size and is applied downstream as one quarter turn wrapping everything.
//! - Quarter turns are built from exact matrix coefficients, so turning back
//!   and forth never accumulates trigonometric error.
//!
//! This crate is `no_std`.

#![no_std]

mod compose;
mod fit;
mod turn;

pub use compose::{Composition, compose};
pub use fit::{FitMode, contain_fit, contain_scale};
pub use turn::QuarterTurn;
