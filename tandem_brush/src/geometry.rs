// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;

use kurbo::{Point, Rect};

/// Dimension-specific operations a [`Brush`](crate::Brush) needs.
///
/// Implementations define what a pointer position and a selection extent are,
/// and how to clamp, span and translate them. Extents produced by
/// [`BrushGeometry::span`] must be normalized (min before max on every axis);
/// all other methods may assume normalized extents.
pub trait BrushGeometry {
    /// Pointer position type.
    type Pos: Copy + Debug + PartialEq;
    /// Selection extent type.
    type Extent: Clone + Debug + PartialEq;

    /// Clamps `pos` into `bounds`.
    fn clamp(bounds: &Self::Extent, pos: Self::Pos) -> Self::Pos;

    /// Returns `true` if `pos` lies inside `extent`, edges included.
    fn contains(extent: &Self::Extent, pos: Self::Pos) -> bool;

    /// Returns the normalized extent spanned by two positions.
    fn span(a: Self::Pos, b: Self::Pos) -> Self::Extent;

    /// Returns `true` if the extent has zero width (1D) or zero area (2D).
    fn is_degenerate(extent: &Self::Extent) -> bool;

    /// Moves `extent` by the pointer delta `to - from`, keeping it inside
    /// `bounds` without changing its size.
    fn translate(
        extent: &Self::Extent,
        from: Self::Pos,
        to: Self::Pos,
        bounds: &Self::Extent,
    ) -> Self::Extent;

    /// Clamps both corners of `extent` into `bounds`.
    fn clamp_extent(extent: &Self::Extent, bounds: &Self::Extent) -> Self::Extent;
}

/// Horizontal 1D brush geometry over `Range<f64>` pixel spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisX;

/// Rectangular 2D brush geometry over [`Rect`] pixel regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaneXY;

impl BrushGeometry for AxisX {
    type Pos = f64;
    type Extent = Range<f64>;

    fn clamp(bounds: &Range<f64>, pos: f64) -> f64 {
        pos.max(bounds.start).min(bounds.end)
    }

    fn contains(extent: &Range<f64>, pos: f64) -> bool {
        pos >= extent.start && pos <= extent.end
    }

    fn span(a: f64, b: f64) -> Range<f64> {
        if a <= b { a..b } else { b..a }
    }

    fn is_degenerate(extent: &Range<f64>) -> bool {
        let width = extent.end - extent.start;
        width.is_nan() || width <= 0.0
    }

    fn translate(extent: &Range<f64>, from: f64, to: f64, bounds: &Range<f64>) -> Range<f64> {
        let (start, end) = shift_within(
            extent.start,
            extent.end,
            to - from,
            bounds.start,
            bounds.end,
        );
        start..end
    }

    fn clamp_extent(extent: &Range<f64>, bounds: &Range<f64>) -> Range<f64> {
        Self::span(Self::clamp(bounds, extent.start), Self::clamp(bounds, extent.end))
    }
}

impl BrushGeometry for PlaneXY {
    type Pos = Point;
    type Extent = Rect;

    fn clamp(bounds: &Rect, pos: Point) -> Point {
        Point::new(
            pos.x.max(bounds.x0).min(bounds.x1),
            pos.y.max(bounds.y0).min(bounds.y1),
        )
    }

    fn contains(extent: &Rect, pos: Point) -> bool {
        pos.x >= extent.x0 && pos.x <= extent.x1 && pos.y >= extent.y0 && pos.y <= extent.y1
    }

    fn span(a: Point, b: Point) -> Rect {
        Rect::from_points(a, b)
    }

    fn is_degenerate(extent: &Rect) -> bool {
        let area = extent.width() * extent.height();
        area.is_nan() || extent.width() <= 0.0 || extent.height() <= 0.0
    }

    fn translate(extent: &Rect, from: Point, to: Point, bounds: &Rect) -> Rect {
        let delta = to - from;
        let (x0, x1) = shift_within(extent.x0, extent.x1, delta.x, bounds.x0, bounds.x1);
        let (y0, y1) = shift_within(extent.y0, extent.y1, delta.y, bounds.y0, bounds.y1);
        Rect::new(x0, y0, x1, y1)
    }

    fn clamp_extent(extent: &Rect, bounds: &Rect) -> Rect {
        Self::span(
            Self::clamp(bounds, extent.origin()),
            Self::clamp(bounds, Point::new(extent.x1, extent.y1)),
        )
    }
}

/// Shifts `[start, end]` by `delta` without leaving `[min, max]`.
fn shift_within(start: f64, end: f64, delta: f64, min: f64, max: f64) -> (f64, f64) {
    let width = end - start;
    let shifted = (start + delta).min(max - width).max(min);
    (shifted, shifted + width)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{AxisX, BrushGeometry, PlaneXY};

    #[test]
    fn axis_span_is_normalized() {
        assert_eq!(AxisX::span(30.0, 10.0), 10.0..30.0);
        assert_eq!(AxisX::span(10.0, 30.0), 10.0..30.0);
    }

    #[test]
    fn axis_contains_includes_edges() {
        let r = 10.0..30.0;
        assert!(AxisX::contains(&r, 10.0));
        assert!(AxisX::contains(&r, 30.0));
        assert!(!AxisX::contains(&r, 30.5));
    }

    #[test]
    fn axis_translate_stops_at_bounds() {
        let moved = AxisX::translate(&(10.0..30.0), 20.0, 120.0, &(0.0..100.0));
        assert_eq!(moved, 80.0..100.0);
        let moved = AxisX::translate(&(10.0..30.0), 20.0, -50.0, &(0.0..100.0));
        assert_eq!(moved, 0.0..20.0);
    }

    #[test]
    fn plane_span_from_any_corner_pair_matches() {
        let a = Point::new(40.0, 10.0);
        let b = Point::new(5.0, 70.0);
        assert_eq!(PlaneXY::span(a, b), PlaneXY::span(b, a));
        assert_eq!(PlaneXY::span(a, b), Rect::new(5.0, 10.0, 40.0, 70.0));
    }

    #[test]
    fn plane_degenerate_when_flat() {
        assert!(PlaneXY::is_degenerate(&Rect::new(0.0, 5.0, 10.0, 5.0)));
        assert!(PlaneXY::is_degenerate(&Rect::new(3.0, 0.0, 3.0, 10.0)));
        assert!(!PlaneXY::is_degenerate(&Rect::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn plane_clamp_extent_trims_overhang() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let clamped = PlaneXY::clamp_extent(&Rect::new(-10.0, 20.0, 120.0, 80.0), &bounds);
        assert_eq!(clamped, Rect::new(0.0, 20.0, 100.0, 50.0));
    }
}
