// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tandem_brush --heading-base-level=0

//! Tandem Brush: brush gesture state machines.
//!
//! A *brush* is the rubber-band selection found on charts: press inside the
//! plot, drag, and a highlighted extent follows the pointer. This crate tracks
//! that interaction and reports the live extent in pixel coordinates. It does
//! not know what the pixels mean; chart views invert the extent through their
//! own scales.
//!
//! - [`BrushX`]: horizontal brush over a `Range<f64>` (for example a timeline).
//! - [`BrushXY`]: rectangular brush over a [`kurbo::Rect`] (for example a
//!   scatter plot).
//!
//! Both are instances of the generic [`Brush`] driven by a [`BrushGeometry`].
//!
//! ## Gesture rules
//!
//! - Pressing outside the bounds is ignored.
//! - Pressing inside the current selection starts a *translate* gesture: the
//!   selection moves with the pointer and stays inside the bounds.
//! - Pressing anywhere else starts a *create* gesture and drops the previous
//!   selection.
//! - Pointer positions are clamped to the bounds while dragging.
//! - Releasing outside the bounds aborts the gesture and clears the selection.
//! - Zero-width (1D) and zero-area (2D) extents are reported as `None`, the
//!   same as having no selection at all.
//! - Extents are always normalized; dragging right-to-left or bottom-to-top
//!   yields the same extent as the opposite direction.
//!
//! ## Minimal example
//!
//! ```rust
//! use tandem_brush::{BrushPhase, BrushX};
//!
//! let mut brush = BrushX::new(0.0..400.0);
//!
//! brush.pointer_down(300.0);
//! let ev = brush.pointer_move(120.0).unwrap();
//! assert_eq!(ev.phase, BrushPhase::Move);
//! assert_eq!(ev.selection, Some(120.0..300.0));
//!
//! let ev = brush.pointer_up(120.0).unwrap();
//! assert_eq!(ev.phase, BrushPhase::End);
//! assert_eq!(brush.selection(), Some(&(120.0..300.0)));
//!
//! // A double-click (or any explicit clear gesture).
//! let ev = brush.clear();
//! assert_eq!(ev.selection, None);
//! ```
//!
//! ## 2D example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tandem_brush::BrushXY;
//!
//! let mut brush = BrushXY::new(Rect::new(0.0, 0.0, 400.0, 300.0));
//! brush.pointer_down(Point::new(350.0, 250.0));
//! let ev = brush.pointer_move(Point::new(500.0, 100.0)).unwrap();
//! // The pointer left the plot; the extent is clamped to the bounds.
//! assert_eq!(ev.selection, Some(Rect::new(350.0, 100.0, 400.0, 250.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod brush;
mod geometry;

pub use brush::{Brush, BrushEvent, BrushPhase, BrushX, BrushXY, GestureKind};
pub use geometry::{AxisX, BrushGeometry, PlaneXY};
