// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tandem_views --heading-base-level=0

//! Tandem Views: headless chart views that turn brushes into selections.
//!
//! Two views share the same [`RecordStore`]:
//!
//! - [`RangeView`]: a metric-by-week line chart with a horizontal brush. It
//!   reports a [`WeekRange`] and de-emphasizes marks outside a highlighted
//!   [`WeekSet`].
//! - [`RegionView`]: a scatter of one metric against another with a
//!   rectangular brush. It reports the [`WeekSet`] of records inside the
//!   brushed region and fades marks that fail a record predicate.
//!
//! Views never talk to each other. Each gesture method takes a
//! [`SelectionSink`] that receives the resulting selection (`None` for "no
//! selection"), and each view also notifies its own [`Observers`]. Wiring the
//! two together is the job of a coordinator.
//!
//! Nothing here draws. A view exposes its scales, its [`MarkSet`] (positions
//! plus a de-emphasis flag per week) and, for the line chart, a
//! [`kurbo::BezPath`]. A renderer repaints when [`MarkSet::revision`] moves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tandem_gamelog::{GameRecord, Metric, RecordStore, WeekRange};
//! use tandem_views::{PlotLayout, RangeView, Recorder};
//!
//! let records = RecordStore::new([
//!     GameRecord::new(1, 100.0, 1.0, 40.0),
//!     GameRecord::new(2, 250.0, 3.0, 72.5),
//!     GameRecord::new(3, 300.0, 2.0, 61.0),
//! ])
//! .unwrap();
//!
//! let mut view = RangeView::new(PlotLayout::default(), Metric::Qbr);
//! view.render(&records);
//!
//! // Weeks 1..3 span the 465px plot width.
//! let mut sink = Recorder::new();
//! view.pointer_down(Point::new(0.0, 50.0), &mut sink);
//! view.pointer_up(Point::new(240.0, 50.0), &mut sink);
//! assert_eq!(sink.last(), Some(&Some(WeekRange::new(1, 2))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod marks;
pub mod observer;
mod range_view;
mod region_view;

pub use layout::{Margins, PlotLayout};
pub use marks::{JoinStats, Mark, MarkSet};
pub use observer::{ObserverId, Observers, Recorder, SelectionSink};
pub use range_view::RangeView;
pub use region_view::{DomainRect, MEMBERSHIP_TOLERANCE, RegionView};

#[doc(no_inline)]
pub use tandem_gamelog::{RecordStore, WeekRange, WeekSet};
