// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tandem_link --heading-base-level=0

//! Tandem Link: cross-filtering between a range view and a region view.
//!
//! [`LinkCoordinator`] owns a [`RecordStore`](tandem_gamelog::RecordStore),
//! a [`RangeView`](tandem_views::RangeView) and a
//! [`RegionView`](tandem_views::RegionView), plus the two selections they
//! share ([`LinkState`]):
//!
//! - brushing weeks on the range view stores a week range and fades every
//!   region mark whose week is outside it;
//! - brushing a region on the scatter stores the set of weeks inside it and
//!   de-emphasizes every range mark not in that set.
//!
//! Clearing either brush stores `None` and restores the other view. Each
//! entry point returns [`LinkChanges`] so an embedder knows which view to
//! repaint.
//!
//! Gestures are routed in plot-local coordinates (see
//! [`PlotLayout`](tandem_views::PlotLayout)).
//!
//! ## Minimal example
//!
//! ```rust
//! use tandem_gamelog::{GameRecord, RecordStore, WeekRange};
//! use tandem_link::{LinkChanges, LinkConfig, LinkCoordinator};
//! use tandem_views::DomainRect;
//!
//! let records = RecordStore::new([
//!     GameRecord::new(1, 100.0, 1.0, 40.0),
//!     GameRecord::new(2, 250.0, 3.0, 72.5),
//!     GameRecord::new(3, 300.0, 2.0, 61.0),
//! ])
//! .unwrap();
//! let mut link = LinkCoordinator::new(records, LinkConfig::default());
//!
//! // Select passing yards 200..350 and touchdowns 2..3 on the scatter.
//! let changes = link.brush_region(Some(DomainRect::new(200.0..350.0, 2.0..3.0)));
//! assert!(changes.contains(LinkChanges::SELECTED_WEEKS | LinkChanges::RANGE_MARKS));
//! assert_eq!(link.range().marks().de_emphasized_weeks(), [1]);
//!
//! // Brush weeks 1..2 on the line chart.
//! link.brush_weeks(Some(WeekRange::new(1, 2)));
//! assert_eq!(link.region().marks().de_emphasized_weeks(), [3]);
//! ```
//!
//! Propagation is logged with [`tracing`] at `debug` level; individual
//! gestures at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod coordinator;

pub use coordinator::{LinkChanges, LinkConfig, LinkCoordinator, LinkState, ViewTarget};
