// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pointer drags built from data-space requests.
//!
//! Requests are converted to plot-local pixels and replayed as a
//! press/move/release sequence, so they take the same path as a real user.

use std::ops::Range;

use kurbo::Point;
use tandem_gamelog::WeekRange;
use tandem_link::{LinkChanges, LinkCoordinator, ViewTarget};

/// Drags across `weeks` on the line chart.
pub(crate) fn drag_weeks(link: &mut LinkCoordinator, weeks: WeekRange) -> LinkChanges {
    let view = link.range();
    let x = view.x_scale().linear();
    let bounds = view.layout().x_range();
    let to_px = |week: f64| x.to_pixel(week).clamp(bounds.start, bounds.end);

    // A quarter week of slack on each side keeps a single week from
    // collapsing to zero width; the edges still snap back to `weeks`.
    let from = Point::new(to_px(f64::from(weeks.lo()) - 0.25), 0.0);
    let to = Point::new(to_px(f64::from(weeks.hi()) + 0.25), 0.0);
    drag(link, ViewTarget::Range, from, to)
}

/// Drags a rectangle on the scatter. A missing interval spans its whole axis.
pub(crate) fn drag_region(
    link: &mut LinkCoordinator,
    x_interval: Option<Range<f64>>,
    y_interval: Option<Range<f64>>,
) -> LinkChanges {
    let view = link.region();
    let (x, y) = (view.x_scale(), view.y_scale());
    let area = view.layout().plot_area();
    let xs = x_interval.unwrap_or_else(|| x.domain());
    let ys = y_interval.unwrap_or_else(|| y.domain());

    let corner = |dx: f64, dy: f64| {
        Point::new(
            x.to_pixel(dx).clamp(area.x0, area.x1),
            y.to_pixel(dy).clamp(area.y0, area.y1),
        )
    };
    let from = corner(xs.start, ys.start);
    let to = corner(xs.end, ys.end);
    drag(link, ViewTarget::Region, from, to)
}

fn drag(link: &mut LinkCoordinator, target: ViewTarget, from: Point, to: Point) -> LinkChanges {
    link.pointer_down(target, from) | link.pointer_move(target, to) | link.pointer_up(target, to)
}
