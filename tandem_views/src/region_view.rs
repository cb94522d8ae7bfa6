// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect};
use tandem_brush::{BrushEvent, BrushPhase, BrushXY};
use tandem_gamelog::{GameRecord, Metric, RecordStore, WeekSet};
use tandem_scale::LinearScale;

use crate::layout::PlotLayout;
use crate::marks::{JoinStats, MarkSet};
use crate::observer::{ObserverId, Observers, SelectionSink};

/// Relative slack applied to each axis when testing region membership.
///
/// Brush edges round-trip through pixels, so a point exactly on an edge can
/// land a few ulps outside. The slack is this fraction of the axis domain.
pub const MEMBERSHIP_TOLERANCE: f64 = 1e-9;

/// An axis-aligned rectangle in data (domain) space, edges included.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainRect {
    /// Horizontal interval, `start <= end`.
    pub x: Range<f64>,
    /// Vertical interval, `start <= end`.
    pub y: Range<f64>,
}

impl DomainRect {
    /// Creates a rectangle from two intervals given in any order.
    #[must_use]
    pub fn new(x: Range<f64>, y: Range<f64>) -> Self {
        Self {
            x: ordered(x),
            y: ordered(y),
        }
    }

    /// Returns `true` if `(x, y)` lies inside, edges included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x.start && x <= self.x.end && y >= self.y.start && y <= self.y.end
    }

    /// Grows each side by `dx` horizontally and `dy` vertically.
    #[must_use]
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x.start - dx..self.x.end + dx,
            y: self.y.start - dy..self.y.end + dy,
        }
    }

    /// Weeks of the records whose `(x_metric, y_metric)` point lies inside.
    pub fn select_weeks<'a, I>(&self, records: I, x_metric: Metric, y_metric: Metric) -> WeekSet
    where
        I: IntoIterator<Item = &'a GameRecord>,
    {
        WeekSet::from_matching(records, |r| {
            self.contains(x_metric.value(r), y_metric.value(r))
        })
    }
}

fn ordered(r: Range<f64>) -> Range<f64> {
    if r.end < r.start { r.end..r.start } else { r }
}

#[derive(Clone, Copy, Debug)]
struct DomainPoint {
    week: u32,
    x: f64,
    y: f64,
}

/// A scatter of one metric against another with a rectangular brush.
///
/// Brushing selects the [`WeekSet`] of records whose point falls inside the
/// brushed region. Marks can be faded with any record predicate.
///
/// Pointer positions are plot-local (see [`PlotLayout`]).
#[derive(Debug)]
pub struct RegionView {
    layout: PlotLayout,
    x_metric: Metric,
    y_metric: Metric,
    x: LinearScale,
    y: LinearScale,
    brush: BrushXY,
    marks: MarkSet,
    points: Vec<DomainPoint>,
    observers: Observers<WeekSet>,
}

impl RegionView {
    /// Creates an empty view plotting `y_metric` against `x_metric`.
    #[must_use]
    pub fn new(layout: PlotLayout, x_metric: Metric, y_metric: Metric) -> Self {
        Self {
            layout,
            x_metric,
            y_metric,
            x: LinearScale::from_values(core::iter::empty(), layout.x_range()),
            y: LinearScale::from_values(core::iter::empty(), layout.y_range()),
            brush: BrushXY::new(layout.plot_area()),
            marks: MarkSet::new(),
            points: Vec::new(),
            observers: Observers::new(),
        }
    }

    /// Returns the layout.
    #[must_use]
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Returns the horizontal and vertical metrics.
    #[must_use]
    pub fn metrics(&self) -> (Metric, Metric) {
        (self.x_metric, self.y_metric)
    }

    /// Returns the horizontal scale.
    #[must_use]
    pub fn x_scale(&self) -> &LinearScale {
        &self.x
    }

    /// Returns the vertical scale.
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
    pub fn brush(&self) -> &BrushXY {
        &self.brush
    }

    /// The data-space region the brush currently covers, if any.
    #[must_use]
    pub fn selection(&self) -> Option<DomainRect> {
        self.brush.selection().map(|px| self.invert(px))
    }

    /// Adds a long-lived listener for week set changes.
    pub fn subscribe(&mut self, sink: impl SelectionSink<WeekSet> + 'static) -> ObserverId {
        self.observers.subscribe(sink)
    }

    /// Removes a listener added with [`RegionView::subscribe`].
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Fits both scales to `records` and joins one mark per record.
    ///
    /// Records with a non-finite value on either axis get no mark and can
    /// never be selected.
    pub fn render(&mut self, records: &RecordStore) -> JoinStats {
        let (xm, ym) = (self.x_metric, self.y_metric);
        self.x =
            LinearScale::from_values(records.iter().map(|r| xm.value(r)), self.layout.x_range());
        self.y =
            LinearScale::from_values(records.iter().map(|r| ym.value(r)), self.layout.y_range());
        self.points = records
            .iter()
            .map(|r| DomainPoint {
                week: r.week,
                x: xm.value(r),
                y: ym.value(r),
            })
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();
        let (x, y) = (&self.x, &self.y);
        self.marks.join(
            self.points
                .iter()
                .map(|p| (p.week, Point::new(x.to_pixel(p.x), y.to_pixel(p.y)))),
        )
    }

    /// Weeks whose plotted point lies inside `rect`.
    ///
    /// Membership allows [`MEMBERSHIP_TOLERANCE`] of each axis domain as slack.
    #[must_use]
    pub fn weeks_within(&self, rect: &DomainRect) -> WeekSet {
        let rect = rect.inflate(
            span(&self.x.domain()) * MEMBERSHIP_TOLERANCE,
            span(&self.y.domain()) * MEMBERSHIP_TOLERANCE,
        );
        self.points
            .iter()
            .filter(|p| rect.contains(p.x, p.y))
            .map(|p| p.week)
            .collect()
    }

    /// Forwards a press to the brush.
    pub fn pointer_down(&mut self, pos: Point, sink: &mut (impl SelectionSink<WeekSet> + ?Sized)) {
        let event = self.brush.pointer_down(pos);
        self.publish(event, sink);
    }

    /// Forwards a drag to the brush.
    pub fn pointer_move(&mut self, pos: Point, sink: &mut (impl SelectionSink<WeekSet> + ?Sized)) {
        let event = self.brush.pointer_move(pos);
        self.publish(event, sink);
    }

    /// Forwards a release to the brush.
    pub fn pointer_up(&mut self, pos: Point, sink: &mut (impl SelectionSink<WeekSet> + ?Sized)) {
        let event = self.brush.pointer_up(pos);
        self.publish(event, sink);
    }

    /// Clears the brush and reports `None`, even if it was already empty.
    pub fn clear(&mut self, sink: &mut (impl SelectionSink<WeekSet> + ?Sized)) {
        let event = self.brush.clear();
        self.publish(Some(event), sink);
    }

    /// Moves the brush to cover `region` and reports the selected weeks.
    ///
    /// The region is clamped to the plot. A region with zero width or height
    /// in pixels becomes no selection.
    pub fn set_domain_selection(
        &mut self,
        region: Option<DomainRect>,
        sink: &mut (impl SelectionSink<WeekSet> + ?Sized),
    ) {
        let extent = region.map(|r| {
            Rect::new(
                self.x.to_pixel(r.x.start),
                self.y.to_pixel(r.y.start),
                self.x.to_pixel(r.x.end),
                self.y.to_pixel(r.y.end),
            )
            .abs()
        });
        let event = self.brush.set_selection(extent);
        self.publish(Some(event), sink);
    }

    /// Restyles marks: records failing `keep` are de-emphasized.
    ///
    /// Marks whose week is missing from `records` are left alone. Returns
    /// `true` if any mark changed.
    pub fn apply_fade<F>(&mut self, records: &RecordStore, keep: F) -> bool
    where
        F: Fn(&GameRecord) -> bool,
    {
        self.marks.restyle(|m| match records.get(m.week) {
            Some(record) => !keep(record),
            None => m.de_emphasized,
        })
    }

    fn publish(
        &mut self,
        event: Option<BrushEvent<Rect>>,
        sink: &mut (impl SelectionSink<WeekSet> + ?Sized),
    ) {
        let Some(event) = event else {
            return;
        };
        if event.phase == BrushPhase::Start {
            return;
        }
        let selection = event
            .selection
            .map(|px| self.weeks_within(&self.invert(&px)));
        sink.selection_changed(selection.as_ref());
        self.observers.notify(selection.as_ref());
    }

    fn invert(&self, px: &Rect) -> DomainRect {
        DomainRect::new(
            self.x.to_domain(px.x0)..self.x.to_domain(px.x1),
            self.y.to_domain(px.y0)..self.y.to_domain(px.y1),
        )
    }
}

fn span(r: &Range<f64>) -> f64 {
    (r.end - r.start).abs()
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use tandem_gamelog::{GameRecord, Metric, RecordStore, WeekSet, week_range_filter};

    use super::{DomainRect, RegionView};
    use crate::layout::PlotLayout;
    use crate::observer::Recorder;

    fn store() -> RecordStore {
        RecordStore::new([
            GameRecord::new(1, 100.0, 1.0, 40.0),
            GameRecord::new(2, 250.0, 3.0, 72.5),
            GameRecord::new(3, 300.0, 2.0, 61.0),
        ])
        .unwrap()
    }

    fn rendered() -> RegionView {
        let mut view = RegionView::new(
            PlotLayout::default(),
            Metric::PassYards,
            Metric::PassTouchdowns,
        );
        view.render(&store());
        view
    }

    fn at(view: &RegionView, yds: f64, td: f64) -> Point {
        Point::new(view.x_scale().to_pixel(yds), view.y_scale().to_pixel(td))
    }

    #[test]
    fn domains_fit_the_data() {
        let view = rendered();
        assert_eq!(view.x_scale().domain(), 100.0..300.0);
        assert_eq!(view.y_scale().domain(), 1.0..3.0);
        assert_eq!(view.marks().len(), 3);
    }

    #[test]
    fn domain_rect_orders_and_includes_edges() {
        let rect = DomainRect::new(350.0..200.0, 3.0..2.0);
        assert_eq!(rect.x, 200.0..350.0);
        assert!(rect.contains(200.0, 2.0));
        assert!(rect.contains(350.0, 3.0));
        assert!(!rect.contains(199.0, 2.5));
    }

    #[test]
    fn select_weeks_is_pure_over_records() {
        let rect = DomainRect::new(200.0..350.0, 2.0..3.0);
        let weeks = rect.select_weeks(&store(), Metric::PassYards, Metric::PassTouchdowns);
        assert_eq!(weeks.to_sorted_vec(), [2, 3]);
    }

    #[test]
    fn drag_reports_weeks_inside_the_region() {
        let mut view = rendered();
        let mut rec = Recorder::new();
        view.pointer_down(at(&view, 200.0, 3.0), &mut rec);
        view.pointer_move(at(&view, 350.0, 2.0), &mut rec);
        view.pointer_up(at(&view, 300.0, 2.0), &mut rec);
        let events = rec.take();
        assert_eq!(events.len(), 2);
        let expected: WeekSet = [2, 3].into_iter().collect();
        assert_eq!(events[0].as_ref(), Some(&expected));
        assert_eq!(events[1].as_ref(), Some(&expected));
    }

    #[test]
    fn empty_region_is_some_empty_set() {
        let mut view = rendered();
        let mut rec = Recorder::new();
        view.set_domain_selection(Some(DomainRect::new(110.0..120.0, 2.0..2.5)), &mut rec);
        assert_eq!(rec.take(), [Some(WeekSet::new())]);
    }

    #[test]
    fn release_outside_the_plot_aborts() {
        let mut view = rendered();
        let mut rec = Recorder::new();
        view.pointer_down(at(&view, 200.0, 3.0), &mut rec);
        view.pointer_move(at(&view, 300.0, 1.0), &mut rec);
        view.pointer_up(Point::new(-5.0, 50.0), &mut rec);
        assert_eq!(rec.last(), Some(&None));
        assert!(view.selection().is_none());
    }

    #[test]
    fn set_domain_selection_clamps_to_the_plot() {
        let mut view = rendered();
        let mut rec = Recorder::new();
        view.set_domain_selection(Some(DomainRect::new(200.0..350.0, 2.0..3.0)), &mut rec);
        let expected: WeekSet = [2, 3].into_iter().collect();
        assert_eq!(rec.take(), [Some(expected)]);
        let sel = view.selection().unwrap();
        assert_eq!(sel.x.end, 300.0);
    }

    #[test]
    fn fade_follows_the_predicate() {
        let mut view = rendered();
        let records = store();
        let range = tandem_gamelog::WeekRange::new(1, 2);
        assert!(view.apply_fade(&records, week_range_filter(Some(&range))));
        assert_eq!(view.marks().de_emphasized_weeks(), [3]);
        assert!(view.apply_fade(&records, |_: &GameRecord| true));
        assert!(view.marks().de_emphasized_weeks().is_empty());
    }
}
