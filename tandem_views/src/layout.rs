// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Point, Rect, Vec2};

/// Space reserved around the plot area for axes and labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (x axis and label).
    pub bottom: f64,
    /// Left margin (y axis and label).
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 40.0,
            left: 45.0,
        }
    }
}

/// Outer size and margins of one chart view.
///
/// Everything a view does with pointer input happens in *plot-local*
/// coordinates: the origin is the top-left corner of the plot area, X grows
/// right and Y grows down. [`PlotLayout::to_plot_local`] converts from the
/// outer (viewBox) coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Margins around the plot area.
    pub margins: Margins,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 360.0,
            margins: Margins::default(),
        }
    }
}

impl PlotLayout {
    /// Creates a layout with default margins.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    /// Width of the plot area, never negative.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// Height of the plot area, never negative.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// The plot area in plot-local coordinates; also the brush bounds.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.inner_width(), self.inner_height())
    }

    /// Pixel range for horizontal scales (left to right).
    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        0.0..self.inner_width()
    }

    /// Pixel range for vertical scales (bottom to top, so values grow upward).
    #[must_use]
    pub fn y_range(&self) -> Range<f64> {
        self.inner_height()..0.0
    }

    /// Converts an outer point to plot-local coordinates.
    #[must_use]
    pub fn to_plot_local(&self, outer: Point) -> Point {
        outer - self.origin_offset()
    }

    /// Converts a plot-local point to outer coordinates.
    #[must_use]
    pub fn to_outer(&self, local: Point) -> Point {
        local + self.origin_offset()
    }

    fn origin_offset(&self) -> Vec2 {
        Vec2::new(self.margins.left, self.margins.top)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::PlotLayout;

    #[test]
    fn default_layout_plot_area() {
        let layout = PlotLayout::default();
        assert_eq!(layout.plot_area(), Rect::new(0.0, 0.0, 465.0, 310.0));
        assert_eq!(layout.x_range(), 0.0..465.0);
        assert_eq!(layout.y_range(), 310.0..0.0);
    }

    #[test]
    fn outer_and_local_points_round_trip() {
        let layout = PlotLayout::default();
        let local = layout.to_plot_local(Point::new(45.0, 10.0));
        assert_eq!(local, Point::ZERO);
        assert_eq!(layout.to_outer(local), Point::new(45.0, 10.0));
    }

    #[test]
    fn tiny_layout_never_goes_negative() {
        let layout = PlotLayout::new(20.0, 20.0);
        assert_eq!(layout.inner_width(), 0.0);
        assert_eq!(layout.inner_height(), 0.0);
    }
}
