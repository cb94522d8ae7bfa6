// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use tandem_gamelog::{Metric, RecordStore, WeekRange, WeekSet, week_range_filter};
use tandem_views::{
    DomainRect, ObserverId, PlotLayout, RangeView, RegionView, SelectionSink,
};
use tracing::{debug, trace};

bitflags::bitflags! {
    /// What an entry point changed.
    ///
    /// The state bits report that a stored selection now holds a different
    /// value; the mark bits report that a view restyled at least one mark.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LinkChanges: u8 {
        /// The stored week range changed.
        const WEEK_RANGE     = 0b0000_0001;
        /// The stored week set changed.
        const SELECTED_WEEKS = 0b0000_0010;
        /// The range view restyled marks.
        const RANGE_MARKS    = 0b0000_0100;
        /// The region view restyled marks.
        const REGION_MARKS   = 0b0000_1000;
    }
}

impl LinkChanges {
    /// Returns `true` if either view needs repainting.
    #[must_use]
    pub fn marks_changed(self) -> bool {
        self.intersects(Self::RANGE_MARKS | Self::REGION_MARKS)
    }
}

/// Which view a gesture is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewTarget {
    /// The week-by-metric line chart.
    Range,
    /// The metric-against-metric scatter.
    Region,
}

/// Layout and metric choices for both views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkConfig {
    /// Layout of the range view.
    pub range_layout: PlotLayout,
    /// Layout of the region view.
    pub region_layout: PlotLayout,
    /// Metric on the range view's vertical axis.
    pub range_metric: Metric,
    /// Metric on the region view's horizontal axis.
    pub region_x: Metric,
    /// Metric on the region view's vertical axis.
    pub region_y: Metric,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            range_layout: PlotLayout::default(),
            region_layout: PlotLayout::default(),
            range_metric: Metric::Qbr,
            region_x: Metric::PassYards,
            region_y: Metric::PassTouchdowns,
        }
    }
}

/// The two selections shared between the views.
///
/// Both start absent. `None` means "no selection", which de-emphasizes
/// nothing; `Some` of an empty set means "nothing matched", which
/// de-emphasizes everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkState {
    /// Last range reported by the range view.
    pub week_range: Option<WeekRange>,
    /// Last week set reported by the region view.
    pub selected_weeks: Option<WeekSet>,
}

/// Owns the records and both views, and cross-filters them.
///
/// A week range from the range view fades region marks outside it. A week
/// set from the region view de-emphasizes range marks not in it. Every entry
/// point takes `&mut self` and finishes propagating before it returns.
#[derive(Debug)]
pub struct LinkCoordinator {
    records: RecordStore,
    range: RangeView,
    region: RegionView,
    state: LinkState,
}

#[derive(Clone, Copy, Debug)]
enum Gesture {
    Down(Point),
    Move(Point),
    Up(Point),
    Clear,
}

impl LinkCoordinator {
    /// Renders both views over `records` and applies the empty selections.
    #[must_use]
    pub fn new(records: RecordStore, config: LinkConfig) -> Self {
        let mut range = RangeView::new(config.range_layout, config.range_metric);
        let mut region = RegionView::new(config.region_layout, config.region_x, config.region_y);
        let range_join = range.render(&records);
        let region_join = region.render(&records);
        debug!(
            records = records.len(),
            ?range_join,
            ?region_join,
            "linked views rendered"
        );
        let mut link = Self {
            records,
            range,
            region,
            state: LinkState::default(),
        };
        link.refresh();
        link
    }

    /// Returns the records both views plot.
    #[must_use]
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Returns the range view.
    #[must_use]
    pub fn range(&self) -> &RangeView {
        &self.range
    }

    /// Returns the region view.
    #[must_use]
    pub fn region(&self) -> &RegionView {
        &self.region
    }

    /// Returns the stored selections.
    #[must_use]
    pub fn state(&self) -> &LinkState {
        &self.state
    }

    /// Adds a listener to the range view's selection changes.
    pub fn subscribe_range(&mut self, sink: impl SelectionSink<WeekRange> + 'static) -> ObserverId {
        self.range.subscribe(sink)
    }

    /// Adds a listener to the region view's selection changes.
    pub fn subscribe_region(&mut self, sink: impl SelectionSink<WeekSet> + 'static) -> ObserverId {
        self.region.subscribe(sink)
    }

    /// Stores a week range and fades region marks outside it.
    ///
    /// This is what a range view gesture ends up calling; the range view's
    /// brush itself is not moved.
    pub fn set_week_range(&mut self, week_range: Option<WeekRange>) -> LinkChanges {
        propagate_week_range(
            &mut self.state,
            &mut self.region,
            &self.records,
            week_range.as_ref(),
        )
    }

    /// Stores a week set and de-emphasizes range marks not in it.
    ///
    /// This is what a region view gesture ends up calling; the region view's
    /// brush itself is not moved.
    pub fn set_selected_weeks(&mut self, weeks: Option<WeekSet>) -> LinkChanges {
        propagate_selected_weeks(&mut self.state, &mut self.range, weeks.as_ref())
    }

    /// Re-runs both propagations with the stored state.
    ///
    /// With unchanged records and state this changes nothing.
    pub fn refresh(&mut self) -> LinkChanges {
        let week_range = self.state.week_range;
        let weeks = self.state.selected_weeks.clone();
        propagate_week_range(
            &mut self.state,
            &mut self.region,
            &self.records,
            week_range.as_ref(),
        ) | propagate_selected_weeks(&mut self.state, &mut self.range, weeks.as_ref())
    }

    /// Replaces the records, re-renders both views and re-applies the stored
    /// selections.
    ///
    /// Brushes keep their pixel extents; the stored selections are not
    /// recomputed from them.
    pub fn set_records(&mut self, records: RecordStore) -> LinkChanges {
        self.records = records;
        let range_join = self.range.render(&self.records);
        let region_join = self.region.render(&self.records);
        debug!(
            records = self.records.len(),
            ?range_join,
            ?region_join,
            "linked views re-rendered"
        );
        self.refresh()
    }

    /// Forwards a press to `target`.
    pub fn pointer_down(&mut self, target: ViewTarget, pos: Point) -> LinkChanges {
        self.dispatch(target, Gesture::Down(pos))
    }

    /// Forwards a drag to `target`.
    pub fn pointer_move(&mut self, target: ViewTarget, pos: Point) -> LinkChanges {
        self.dispatch(target, Gesture::Move(pos))
    }

    /// Forwards a release to `target`.
    pub fn pointer_up(&mut self, target: ViewTarget, pos: Point) -> LinkChanges {
        self.dispatch(target, Gesture::Up(pos))
    }

    /// Clears the brush of `target`, which resets its stored selection and
    /// restores the other view.
    pub fn clear(&mut self, target: ViewTarget) -> LinkChanges {
        self.dispatch(target, Gesture::Clear)
    }

    /// Moves the range view's brush to `weeks` and propagates the result.
    pub fn brush_weeks(&mut self, weeks: Option<WeekRange>) -> LinkChanges {
        trace!(?weeks, "brush range view");
        let (view, mut sink) = self.range_route();
        view.set_week_selection(weeks, &mut sink);
        sink.changes
    }

    /// Moves the region view's brush to `region` and propagates the result.
    pub fn brush_region(&mut self, region: Option<DomainRect>) -> LinkChanges {
        trace!(?region, "brush region view");
        let (view, mut sink) = self.region_route();
        view.set_domain_selection(region, &mut sink);
        sink.changes
    }

    fn dispatch(&mut self, target: ViewTarget, gesture: Gesture) -> LinkChanges {
        trace!(?target, ?gesture, "gesture");
        match target {
            ViewTarget::Range => {
                let (view, mut sink) = self.range_route();
                match gesture {
                    Gesture::Down(pos) => view.pointer_down(pos, &mut sink),
                    Gesture::Move(pos) => view.pointer_move(pos, &mut sink),
                    Gesture::Up(pos) => view.pointer_up(pos, &mut sink),
                    Gesture::Clear => view.clear(&mut sink),
                }
                sink.changes
            }
            ViewTarget::Region => {
                let (view, mut sink) = self.region_route();
                match gesture {
                    Gesture::Down(pos) => view.pointer_down(pos, &mut sink),
                    Gesture::Move(pos) => view.pointer_move(pos, &mut sink),
                    Gesture::Up(pos) => view.pointer_up(pos, &mut sink),
                    Gesture::Clear => view.clear(&mut sink),
                }
                sink.changes
            }
        }
    }

    fn range_route(&mut self) -> (&mut RangeView, ToRegion<'_>) {
        (
            &mut self.range,
            ToRegion {
                state: &mut self.state,
                region: &mut self.region,
                records: &self.records,
                changes: LinkChanges::empty(),
            },
        )
    }

    fn region_route(&mut self) -> (&mut RegionView, ToRange<'_>) {
        (
            &mut self.region,
            ToRange {
                state: &mut self.state,
                range: &mut self.range,
                changes: LinkChanges::empty(),
            },
        )
    }
}

/// Carries range view reports over to the region view.
struct ToRegion<'a> {
    state: &'a mut LinkState,
    region: &'a mut RegionView,
    records: &'a RecordStore,
    changes: LinkChanges,
}

impl SelectionSink<WeekRange> for ToRegion<'_> {
    fn selection_changed(&mut self, selection: Option<&WeekRange>) {
        self.changes |= propagate_week_range(self.state, self.region, self.records, selection);
    }
}

/// Carries region view reports over to the range view.
struct ToRange<'a> {
    state: &'a mut LinkState,
    range: &'a mut RangeView,
    changes: LinkChanges,
}

impl SelectionSink<WeekSet> for ToRange<'_> {
    fn selection_changed(&mut self, selection: Option<&WeekSet>) {
        self.changes |= propagate_selected_weeks(self.state, self.range, selection);
    }
}

fn propagate_week_range(
    state: &mut LinkState,
    region: &mut RegionView,
    records: &RecordStore,
    week_range: Option<&WeekRange>,
) -> LinkChanges {
    let mut changes = LinkChanges::empty();
    if state.week_range.as_ref() != week_range {
        state.week_range = week_range.copied();
        changes |= LinkChanges::WEEK_RANGE;
    }
    if region.apply_fade(records, week_range_filter(week_range)) {
        changes |= LinkChanges::REGION_MARKS;
    }
    debug!(week_range = ?state.week_range, ?changes, "week range propagated");
    changes
}

fn propagate_selected_weeks(
    state: &mut LinkState,
    range: &mut RangeView,
    weeks: Option<&WeekSet>,
) -> LinkChanges {
    let mut changes = LinkChanges::empty();
    if state.selected_weeks.as_ref() != weeks {
        state.selected_weeks = weeks.cloned();
        changes |= LinkChanges::SELECTED_WEEKS;
    }
    if range.apply_highlight(weeks) {
        changes |= LinkChanges::RANGE_MARKS;
    }
    debug!(
        selected = weeks.map(WeekSet::len),
        ?changes,
        "selected weeks propagated"
    );
    changes
}

#[cfg(test)]
mod tests {
    use super::{LinkChanges, LinkConfig, LinkCoordinator};
    use tandem_gamelog::{GameRecord, RecordStore, WeekRange, WeekSet};

    fn link() -> LinkCoordinator {
        let records = RecordStore::new([
            GameRecord::new(1, 100.0, 1.0, 40.0),
            GameRecord::new(2, 250.0, 3.0, 72.5),
        ])
        .unwrap();
        LinkCoordinator::new(records, LinkConfig::default())
    }

    #[test]
    fn fresh_link_has_no_state_and_nothing_faded() {
        let link = link();
        assert_eq!(link.state().week_range, None);
        assert_eq!(link.state().selected_weeks, None);
        assert!(link.range().marks().de_emphasized_weeks().is_empty());
        assert!(link.region().marks().de_emphasized_weeks().is_empty());
    }

    #[test]
    fn changes_report_state_and_marks_separately() {
        let mut link = link();
        let changes = link.set_week_range(Some(WeekRange::single(1)));
        assert_eq!(changes, LinkChanges::WEEK_RANGE | LinkChanges::REGION_MARKS);
        assert!(changes.marks_changed());

        let changes = link.set_week_range(Some(WeekRange::new(1, 2)));
        assert_eq!(changes, LinkChanges::WEEK_RANGE | LinkChanges::REGION_MARKS);

        // A wider range that still keeps every record changes state only.
        let changes = link.set_week_range(Some(WeekRange::new(1, 5)));
        assert_eq!(changes, LinkChanges::WEEK_RANGE);
        assert!(!changes.marks_changed());
    }

    #[test]
    fn refresh_with_unchanged_state_is_a_no_op() {
        let mut link = link();
        link.set_selected_weeks(Some(WeekSet::from_iter([2])));
        assert_eq!(link.refresh(), LinkChanges::empty());
    }
}
