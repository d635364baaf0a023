// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bezel_viewport --heading-base-level=0

//! Bezel Viewport: the metrics hosted content observes.
//!
//! Content running inside a simulated device should see the device's
//! viewport, not the host's: its logical size, its pixel ratio, and its
//! safe-area padding, all adjusted for the orientation the device is
//! presented in. [`synthesize`] derives those [`ViewportMetrics`] from a
//! [`DeviceDescriptor`](bezel_device::DeviceDescriptor).
//!
//! The host's own metrics are passed in explicitly as the *ambient* viewport.
//! When no device is being simulated, they are returned untouched.
//!
//! ## Example
//!
//! ```rust
//! use bezel_device::{DeviceDescriptor, Orientation};
//! use bezel_viewport::{ViewportMetrics, synthesize};
//! use kurbo::{Insets, Rect, Shape, Size};
//!
//! let device = DeviceDescriptor::builder(
//!     "Pocket",
//!     Rect::new(0.0, 0.0, 340.0, 690.0).to_path(0.1),
//!     Rect::new(20.0, 20.0, 320.0, 670.0).to_path(0.1),
//!     Size::new(375.0, 812.0),
//! )
//! .pixel_ratio(3.0)
//! .safe_area_insets(Insets::new(0.0, 44.0, 0.0, 34.0))
//! .supports_rotation(true)
//! .build()
//! .unwrap();
//!
//! let host = ViewportMetrics::new(Size::new(1440.0, 900.0), 2.0);
//!
//! let metrics = synthesize(Some(&device), Orientation::Landscape, &host);
//! assert_eq!(metrics.logical_size, Size::new(812.0, 375.0));
//! assert_eq!(metrics.device_pixel_ratio, 3.0);
//!
//! assert_eq!(synthesize(None, Orientation::Landscape, &host), host);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod metrics;
mod synthesize;

pub use metrics::ViewportMetrics;
pub use synthesize::synthesize;
