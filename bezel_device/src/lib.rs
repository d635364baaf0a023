// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bezel_device --heading-base-level=0

//! Bezel Device: immutable descriptions of physical devices.
//!
//! A [`DeviceDescriptor`] captures everything the Bezel engine needs to know
//! about one device in order to simulate its display:
//! - The outer frame silhouette and the screen cut-out, as Kurbo paths in a
//!   shared frame-local coordinate space.
//! - The native (portrait) logical screen size and the pixel ratio.
//! - Safe-area insets for portrait and, optionally, landscape presentation.
//! - Whether the device can rotate, and which [`DeviceClass`] it belongs to.
//! - How its frame is painted ([`FrameArt`]).
//!
//! Descriptors are validated once, when they are built. Everything
//! downstream (composition, viewport synthesis, painting) relies on the
//! guarantees established by [`DeviceDescriptorBuilder::build`] and does not
//! re-validate.
//!
//! This crate does not load, list, or filter device catalogs. Callers bring
//! their own storage and construct descriptors from it.
//!
//! ## Example
//!
//! ```rust
//! use bezel_device::{DeviceClass, DeviceDescriptor};
//! use kurbo::{Insets, Rect, RoundedRect, Shape, Size};
//!
//! let frame = RoundedRect::new(0.0, 0.0, 420.0, 860.0, 60.0).to_path(0.1);
//! let screen = Rect::new(20.0, 20.0, 400.0, 840.0).to_path(0.1);
//!
//! let phone = DeviceDescriptor::builder("Pocket", frame, screen, Size::new(375.0, 812.0))
//!     .pixel_ratio(3.0)
//!     .safe_area_insets(Insets::new(0.0, 44.0, 0.0, 34.0))
//!     .supports_rotation(true)
//!     .device_class(DeviceClass::Phone)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(phone.cutout_bounds(), Rect::new(20.0, 20.0, 400.0, 840.0));
//! assert_eq!(phone.rotated_safe_area_insets(), phone.safe_area_insets());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod art;
mod class;
mod descriptor;
mod error;
mod orientation;

pub use art::{ArtworkId, FrameArt};
pub use class::{DeviceClass, VisualDensity};
pub use descriptor::{DeviceDescriptor, DeviceDescriptorBuilder};
pub use error::DescriptorError;
pub use orientation::Orientation;
