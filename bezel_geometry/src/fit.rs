// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};

/// How fitted content should be positioned inside its host box.
///
/// Consulted by [`contain_fit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted content within the host box.
    #[default]
    Center,
    /// Align the content's origin with the host box origin.
    AlignMin,
}

/// Largest uniform scale at which `content` fits inside `host`.
///
/// Returns `1.0` if either size has a non-positive dimension.
#[must_use]
pub fn contain_scale(content: Size, host: Size) -> f64 {
    if content.width <= 0.0 || content.height <= 0.0 || host.width <= 0.0 || host.height <= 0.0 {
        return 1.0;
    }
    let sx = host.width / content.width;
    let sy = host.height / content.height;
    sx.min(sy)
}

/// Transform that fits a box `(0, 0)..content` inside `host`, preserving
/// aspect ratio.
///
/// The result never exceeds `host` along either axis; along the other axis
/// it is positioned according to `mode`. When either box is degenerate the
/// content is only translated to the host origin.
#[must_use]
pub fn contain_fit(content: Size, host: Rect, mode: FitMode) -> Affine {
    let host_origin = host.origin().to_vec2();
    if content.width <= 0.0 || content.height <= 0.0 || host.width() <= 0.0 || host.height() <= 0.0
    {
        return Affine::translate(host_origin);
    }

    let scale = contain_scale(content, host.size());
    let offset = match mode {
        FitMode::Center => {
            let fitted = content.to_vec2() * scale;
            host.center().to_vec2() - fitted * 0.5
        }
        FitMode::AlignMin => host_origin,
    };
    Affine::translate(offset) * Affine::scale(scale)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{FitMode, contain_fit, contain_scale};

    #[test]
    fn contain_scale_uses_the_tighter_axis() {
        assert_eq!(contain_scale(Size::new(100.0, 50.0), Size::new(200.0, 200.0)), 2.0);
        assert_eq!(contain_scale(Size::new(100.0, 400.0), Size::new(200.0, 200.0)), 0.5);
        assert_eq!(contain_scale(Size::ZERO, Size::new(200.0, 200.0)), 1.0);
    }

    #[test]
    fn center_fit_letterboxes_wide_content() {
        let host = Rect::new(10.0, 20.0, 210.0, 220.0);
        let t = contain_fit(Size::new(100.0, 50.0), host, FitMode::Center);
        // Scaled to 200x100 and centered vertically.
        assert_eq!(t * Point::ORIGIN, Point::new(10.0, 70.0));
        assert_eq!(t * Point::new(100.0, 50.0), Point::new(210.0, 170.0));
    }

    #[test]
    fn align_min_fit_pins_origin() {
        let host = Rect::new(10.0, 20.0, 210.0, 220.0);
        let t = contain_fit(Size::new(100.0, 400.0), host, FitMode::AlignMin);
        assert_eq!(t * Point::ORIGIN, Point::new(10.0, 20.0));
        assert_eq!(t * Point::new(100.0, 400.0), Point::new(60.0, 220.0));
    }

    #[test]
    fn fitted_content_stays_inside_host() {
        let host = Rect::new(0.0, 0.0, 640.0, 480.0);
        for content in [
            Size::new(862.5, 425.0),
            Size::new(425.0, 862.5),
            Size::new(1.0, 1.0),
            Size::new(3000.0, 10.0),
        ] {
            let t = contain_fit(content, host, FitMode::Center);
            let min = t * Point::ORIGIN;
            let max = t * content.to_vec2().to_point();
            assert!(min.x >= host.x0 - 1e-9 && min.y >= host.y0 - 1e-9);
            assert!(max.x <= host.x1 + 1e-9 && max.y <= host.y1 + 1e-9);
            // One axis is always filled exactly.
            let filled_x = (max.x - min.x - host.width()).abs() < 1e-9;
            let filled_y = (max.y - min.y - host.height()).abs() < 1e-9;
            assert!(filled_x || filled_y);
        }
    }

    #[test]
    fn degenerate_host_only_translates() {
        let host = Rect::new(5.0, 6.0, 5.0, 100.0);
        let t = contain_fit(Size::new(10.0, 10.0), host, FitMode::Center);
        assert_eq!(t * Point::ORIGIN, Point::new(5.0, 6.0));
        assert_eq!(t * Point::new(10.0, 10.0), Point::new(15.0, 16.0));
    }
}
