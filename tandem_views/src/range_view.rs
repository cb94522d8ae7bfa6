// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{BezPath, Point};
use tandem_brush::{BrushEvent, BrushPhase, BrushX};
use tandem_gamelog::{Metric, RecordStore, WeekRange, WeekSet};
use tandem_scale::{DiscreteScale, LinearScale};

use crate::layout::PlotLayout;
use crate::marks::{JoinStats, MarkSet};
use crate::observer::{ObserverId, Observers, SelectionSink};

/// A week-by-metric line chart with a horizontal brush.
///
/// Brushing selects a contiguous [`WeekRange`]; the brush edges snap to the
/// nearest week. Marks whose week is outside a highlight set are
/// de-emphasized.
///
/// Pointer positions are plot-local (see [`PlotLayout`]).
#[derive(Debug)]
pub struct RangeView {
    layout: PlotLayout,
    metric: Metric,
    x: DiscreteScale,
    y: LinearScale,
    brush: BrushX,
    marks: MarkSet,
    observers: Observers<WeekRange>,
}

impl RangeView {
    /// Creates an empty view plotting `metric` by week.
    #[must_use]
    pub fn new(layout: PlotLayout, metric: Metric) -> Self {
        Self {
            layout,
            metric,
            x: DiscreteScale::from_keys(core::iter::empty(), layout.x_range()),
            y: LinearScale::from_values(core::iter::empty(), layout.y_range()),
            brush: BrushX::new(layout.x_range()),
            marks: MarkSet::new(),
            observers: Observers::new(),
        }
    }

    /// Returns the layout.
    #[must_use]
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Returns the plotted metric.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the week scale.
    #[must_use]
    pub fn x_scale(&self) -> &DiscreteScale {
        &self.x
    }

    /// Returns the metric scale.
    #[must_use]
    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    /// Returns the marks from the last render.
    #[must_use]
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// Returns the brush.
    #[must_use]
    pub fn brush(&self) -> &BrushX {
        &self.brush
    }

    /// The week range the brush currently covers, if any.
    #[must_use]
    pub fn selection(&self) -> Option<WeekRange> {
        self.brush.selection().map(|px| self.invert(px))
    }

    /// Adds a long-lived listener for week range changes.
    pub fn subscribe(&mut self, sink: impl SelectionSink<WeekRange> + 'static) -> ObserverId {
        self.observers.subscribe(sink)
    }

    /// Removes a listener added with [`RangeView::subscribe`].
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Fits both scales to `records` and joins one mark per record.
    ///
    /// Records whose metric value is not finite get no mark.
    pub fn render(&mut self, records: &RecordStore) -> JoinStats {
        self.x = DiscreteScale::from_keys(records.weeks(), self.layout.x_range());
        self.y = LinearScale::from_values(
            records.iter().map(|r| self.metric.value(r)),
            self.layout.y_range(),
        );
        let (x, y, metric) = (&self.x, &self.y, self.metric);
        self.marks.join(records.iter().filter_map(|r| {
            let value = metric.value(r);
            value
                .is_finite()
                .then(|| (r.week, Point::new(x.to_pixel(r.week), y.to_pixel(value))))
        }))
    }

    /// The polyline through the marks in week order.
    #[must_use]
    pub fn line_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.marks.iter().map(|m| m.position);
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
        }
        path
    }

    /// Forwards a press to the brush.
    pub fn pointer_down(
        &mut self,
        pos: Point,
        sink: &mut (impl SelectionSink<WeekRange> + ?Sized),
    ) {
        let event = self.brush.pointer_down(pos.x);
        self.publish(event, sink);
    }

    /// Forwards a drag to the brush.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        sink: &mut (impl SelectionSink<WeekRange> + ?Sized),
    ) {
        let event = self.brush.pointer_move(pos.x);
        self.publish(event, sink);
    }

    /// Forwards a release to the brush.
    pub fn pointer_up(&mut self, pos: Point, sink: &mut (impl SelectionSink<WeekRange> + ?Sized)) {
        let event = self.brush.pointer_up(pos.x);
        self.publish(event, sink);
    }

    /// Clears the brush and reports `None`, even if it was already empty.
    pub fn clear(&mut self, sink: &mut (impl SelectionSink<WeekRange> + ?Sized)) {
        let event = self.brush.clear();
        self.publish(Some(event), sink);
    }

    /// Moves the brush to cover `weeks` and reports the resulting range.
    ///
    /// The brush edges are placed a quarter week outside the bounds so they
    /// snap back to exactly `weeks`. A range outside the plotted weeks is
    /// clamped to the plot.
    pub fn set_week_selection(
        &mut self,
        weeks: Option<WeekRange>,
        sink: &mut (impl SelectionSink<WeekRange> + ?Sized),
    ) {
        let extent = weeks.map(|w| self.week_span(w));
        let event = self.brush.set_selection(extent);
        self.publish(Some(event), sink);
    }

    /// Restyles marks: with a set, weeks not in it are de-emphasized; with
    /// `None`, nothing is.
    ///
    /// Returns `true` if any mark changed.
    pub fn apply_highlight(&mut self, weeks: Option<&WeekSet>) -> bool {
        self.marks
            .restyle(|m| weeks.is_some_and(|set| !set.contains(m.week)))
    }

    fn publish(
        &mut self,
        event: Option<BrushEvent<Range<f64>>>,
        sink: &mut (impl SelectionSink<WeekRange> + ?Sized),
    ) {
        let Some(event) = event else {
            return;
        };
        if event.phase == BrushPhase::Start {
            return;
        }
        let selection = event.selection.map(|px| self.invert(&px));
        sink.selection_changed(selection.as_ref());
        self.observers.notify(selection.as_ref());
    }

    /// Weeks start at 1, but a nice week domain may start at 0.
    fn invert(&self, px: &Range<f64>) -> WeekRange {
        let week = |pixel: f64| self.x.to_domain(pixel).max(1);
        WeekRange::new(week(px.start), week(px.end))
    }

    fn week_span(&self, weeks: WeekRange) -> Range<f64> {
        let linear = self.x.linear();
        let a = linear.to_pixel(f64::from(weeks.lo()) - 0.25);
        let b = linear.to_pixel(f64::from(weeks.hi()) + 0.25);
        a.min(b)..a.max(b)
    }
}
