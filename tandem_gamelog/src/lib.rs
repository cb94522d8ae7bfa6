// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tandem_gamelog --heading-base-level=0

//! Tandem Gamelog: the records and selection values linked views share.
//!
//! This crate holds everything both sides of a linked chart agree on, and
//! nothing about how either side draws:
//!
//! - [`GameRecord`]: one played game (week, opponent, passing numbers).
//! - [`RecordStore`]: an immutable sequence of records sorted by week, with
//!   unique weeks. Weeks are the join key between views.
//! - [`WeekRange`] / [`WeekSet`]: the two kinds of cross-view selection (a
//!   contiguous inclusive interval of weeks, and an arbitrary set of weeks).
//! - [`Metric`]: which numeric column an axis plots.
//! - [`week_range_filter`]: the record predicate a week range induces.
//!
//! With the `csv` feature, [`load`] reads the delimited game log
//! (`week,date,opponent,result,pass_yds,pass_td,int,qbr`), dropping rows with
//! missing or non-finite required fields.
//!
//! ## Minimal example
//!
//! ```rust
//! use tandem_gamelog::{GameRecord, RecordStore, WeekRange, week_range_filter};
//!
//! let store = RecordStore::new([
//!     GameRecord::new(3, 300.0, 2.0, 61.0),
//!     GameRecord::new(1, 100.0, 1.0, 40.0),
//!     GameRecord::new(2, 250.0, 3.0, 72.5),
//! ])
//! .unwrap();
//!
//! // Records come back sorted by week.
//! assert_eq!(store.weeks().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! let range = WeekRange::new(2, 1);
//! assert_eq!((range.lo(), range.hi()), (1, 2));
//!
//! let keep = week_range_filter(Some(&range));
//! let kept: Vec<u32> = store.iter().filter(|r| keep(r)).map(|r| r.week).collect();
//! assert_eq!(kept, [1, 2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "csv")]
pub mod load;
mod record;
mod selection;
mod store;

pub use record::{GameRecord, Metric};
pub use selection::{WeekRange, WeekSet, week_range_filter};
pub use store::{RecordError, RecordStore};
