// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush state machine: pointer gestures in, normalized extents out.
//!
//! ## Usage
//!
//! 1) Create a brush over the plot area with [`Brush::new`].
//! 2) Forward pointer presses, moves and releases to [`Brush::pointer_down`],
//!    [`Brush::pointer_move`] and [`Brush::pointer_up`].
//! 3) Forward explicit clear gestures (double-click, Escape) to [`Brush::clear`].
//! 4) React to the returned [`BrushEvent`]s. Chart views typically ignore
//!    [`BrushPhase::Start`] and publish a domain selection on every
//!    [`BrushPhase::Move`] and [`BrushPhase::End`].

use core::marker::PhantomData;
use core::ops::Range;

use kurbo::Rect;

use crate::geometry::{AxisX, BrushGeometry, PlaneXY};

/// Horizontal brush over a pixel span.
pub type BrushX = Brush<AxisX>;

/// Rectangular brush over a pixel region.
pub type BrushXY = Brush<PlaneXY>;

/// Where in its lifecycle a brush event was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushPhase {
    /// A gesture began.
    Start,
    /// The pointer moved during a gesture.
    Move,
    /// The gesture finished, was aborted, or the selection was set or cleared.
    End,
}

/// A brush state change.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushEvent<E> {
    /// Lifecycle phase.
    pub phase: BrushPhase,
    /// Selection after the change; `None` when empty or degenerate.
    pub selection: Option<E>,
}

/// Kind of gesture currently in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Drawing a fresh extent from the press position.
    Create,
    /// Dragging the existing extent around.
    Translate,
}

#[derive(Clone, Debug)]
enum Gesture<P, E> {
    Create { origin: P },
    Translate { origin: P, initial: E },
}

/// A brush confined to fixed bounds.
///
/// See the [crate docs](crate) for the gesture rules.
#[derive(Clone, Debug)]
pub struct Brush<G: BrushGeometry> {
    bounds: G::Extent,
    selection: Option<G::Extent>,
    gesture: Option<Gesture<G::Pos, G::Extent>>,
    geometry: PhantomData<G>,
}

impl<G: BrushGeometry> Brush<G> {
    /// Creates an idle brush with no selection.
    #[must_use]
    pub fn new(bounds: G::Extent) -> Self {
        Self {
            bounds,
            selection: None,
            gesture: None,
            geometry: PhantomData,
        }
    }

    /// Returns the bounds the brush is confined to.
    #[must_use]
    pub fn bounds(&self) -> &G::Extent {
        &self.bounds
    }

    /// Replaces the bounds.
    ///
    /// Any gesture in progress is dropped and the current selection is
    /// clamped into the new bounds (and dropped if that leaves it degenerate).
    pub fn set_bounds(&mut self, bounds: G::Extent) {
        self.gesture = None;
        self.selection = self
            .selection
            .take()
            .map(|sel| G::clamp_extent(&sel, &bounds))
            .filter(|sel| !G::is_degenerate(sel));
        self.bounds = bounds;
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&G::Extent> {
        self.selection.as_ref()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_brushing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Returns the kind of gesture in progress, if any.
    #[must_use]
    pub fn gesture_kind(&self) -> Option<GestureKind> {
        self.gesture.as_ref().map(|g| match g {
            Gesture::Create { .. } => GestureKind::Create,
            Gesture::Translate { .. } => GestureKind::Translate,
        })
    }

    /// Begins a gesture at `pos`.
    ///
    /// Returns `None` (and does nothing) if `pos` is outside the bounds.
    pub fn pointer_down(&mut self, pos: G::Pos) -> Option<BrushEvent<G::Extent>> {
        if !G::contains(&self.bounds, pos) {
            return None;
        }
        match &self.selection {
            Some(sel) if G::contains(sel, pos) => {
                self.gesture = Some(Gesture::Translate {
                    origin: pos,
                    initial: sel.clone(),
                });
            }
            _ => {
                self.selection = None;
                self.gesture = Some(Gesture::Create { origin: pos });
            }
        }
        Some(self.event(BrushPhase::Start))
    }

    /// Updates the gesture with a new pointer position.
    ///
    /// Returns `None` if no gesture is in progress.
    pub fn pointer_move(&mut self, pos: G::Pos) -> Option<BrushEvent<G::Extent>> {
        if !self.track(pos) {
            return None;
        }
        Some(self.event(BrushPhase::Move))
    }

    /// Finishes the gesture at `pos`.
    ///
    /// Releasing outside the bounds aborts the gesture and clears the
    /// selection. Returns `None` if no gesture is in progress.
    pub fn pointer_up(&mut self, pos: G::Pos) -> Option<BrushEvent<G::Extent>> {
        self.gesture.as_ref()?;
        if G::contains(&self.bounds, pos) {
            self.track(pos);
        } else {
            self.selection = None;
        }
        self.gesture = None;
        Some(self.event(BrushPhase::End))
    }

    /// Drops any gesture and selection.
    ///
    /// Always returns a [`BrushPhase::End`] event with no selection, so an
    /// explicit clear gesture is reported even when the brush was already
    /// empty.
    pub fn clear(&mut self) -> BrushEvent<G::Extent> {
        self.gesture = None;
        self.selection = None;
        self.event(BrushPhase::End)
    }

    /// Programmatically sets the selection, clamped into the bounds.
    ///
    /// Any gesture in progress is dropped.
    pub fn set_selection(&mut self, extent: Option<G::Extent>) -> BrushEvent<G::Extent> {
        self.gesture = None;
        self.selection = extent
            .map(|e| G::clamp_extent(&e, &self.bounds))
            .filter(|e| !G::is_degenerate(e));
        self.event(BrushPhase::End)
    }

    /// Applies `pos` to the active gesture. Returns `false` when idle.
    fn track(&mut self, pos: G::Pos) -> bool {
        let Some(gesture) = &self.gesture else {
            return false;
        };
        let pos = G::clamp(&self.bounds, pos);
        self.selection = match gesture {
            Gesture::Create { origin } => {
                Some(G::span(*origin, pos)).filter(|e| !G::is_degenerate(e))
            }
            Gesture::Translate { origin, initial } => {
                Some(G::translate(initial, *origin, pos, &self.bounds))
            }
        };
        true
    }

    fn event(&self, phase: BrushPhase) -> BrushEvent<G::Extent> {
        BrushEvent {
            phase,
            selection: self.selection.clone(),
        }
    }
}

impl BrushX {
    /// Returns the selection width in pixels, or zero without a selection.
    #[must_use]
    pub fn selection_width(&self) -> f64 {
        self.selection
            .as_ref()
            .map_or(0.0, |r: &Range<f64>| r.end - r.start)
    }
}

impl BrushXY {
    /// Returns the selection area in square pixels, or zero without a selection.
    #[must_use]
    pub fn selection_area(&self) -> f64 {
        self.selection.as_ref().map_or(0.0, Rect::area)
    }
}
