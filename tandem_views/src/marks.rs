// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

/// One drawn data point, keyed by week.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mark {
    /// Week of the record this mark shows.
    pub week: u32,
    /// Position in plot-local pixels.
    pub position: Point,
    /// Whether the mark is outside the active cross-filter.
    pub de_emphasized: bool,
}

/// Counts from a [`MarkSet::join`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoinStats {
    /// Marks created for weeks that had none.
    pub entered: usize,
    /// Existing marks kept (and repositioned if needed).
    pub updated: usize,
    /// Marks removed because their week disappeared.
    pub exited: usize,
}

/// Marks sorted by week, with a revision counter for renderers.
///
/// [`MarkSet::join`] diffs by key so an existing mark keeps its identity (and
/// its de-emphasis flag) across renders. [`MarkSet::restyle`] recomputes every
/// flag from scratch. The revision bumps only when something visible changed,
/// so a renderer can skip repainting after an idempotent update.
#[derive(Clone, Debug, Default)]
pub struct MarkSet {
    marks: Vec<Mark>,
    revision: u64,
}

impl MarkSet {
    /// Creates an empty mark set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marks: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if there are no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the number of marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns the marks in week order.
    #[must_use]
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns an iterator over the marks in week order.
    pub fn iter(&self) -> core::slice::Iter<'_, Mark> {
        self.marks.iter()
    }

    /// Looks up the mark for `week`.
    #[must_use]
    pub fn get(&self, week: u32) -> Option<&Mark> {
        self.marks
            .binary_search_by_key(&week, |m| m.week)
            .ok()
            .map(|idx| &self.marks[idx])
    }

    /// Returns the current revision.
    ///
    /// Bumped whenever a join or restyle changes a mark.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Weeks of the de-emphasized marks, ascending.
    #[must_use]
    pub fn de_emphasized_weeks(&self) -> Vec<u32> {
        self.marks
            .iter()
            .filter(|m| m.de_emphasized)
            .map(|m| m.week)
            .collect()
    }

    /// Replaces the mark set with `placements`, diffing by week.
    ///
    /// - Weeks present before and after keep their de-emphasis flag and move
    ///   to the new position.
    /// - New weeks enter without de-emphasis.
    /// - Missing weeks exit.
    ///
    /// If `placements` repeats a week, the first occurrence wins.
    pub fn join<I>(&mut self, placements: I) -> JoinStats
    where
        I: IntoIterator<Item = (u32, Point)>,
    {
        let mut incoming: Vec<(u32, Point)> = placements.into_iter().collect();
        incoming.sort_by_key(|(week, _)| *week);
        incoming.dedup_by_key(|(week, _)| *week);

        let mut stats = JoinStats::default();
        let mut changed = false;
        let mut next = Vec::with_capacity(incoming.len());
        let mut old = self.marks.iter().peekable();

        for (week, position) in incoming {
            while let Some(stale) = old.next_if(|m| m.week < week) {
                debug_assert!(stale.week < week, "marks must stay sorted");
                stats.exited += 1;
            }
            match old.next_if(|m| m.week == week) {
                Some(existing) => {
                    stats.updated += 1;
                    changed |= existing.position != position;
                    next.push(Mark {
                        position,
                        ..*existing
                    });
                }
                None => {
                    stats.entered += 1;
                    next.push(Mark {
                        week,
                        position,
                        de_emphasized: false,
                    });
                }
            }
        }
        stats.exited += old.count();

        changed |= stats.entered > 0 || stats.exited > 0;
        self.marks = next;
        if changed {
            self.bump_revision();
        }
        stats
    }

    /// Recomputes every mark's de-emphasis flag with `de_emphasize`.
    ///
    /// Returns `true` if any flag changed.
    pub fn restyle<F>(&mut self, mut de_emphasize: F) -> bool
    where
        F: FnMut(&Mark) -> bool,
    {
        let mut changed = false;
        for mark in &mut self.marks {
            let flag = de_emphasize(mark);
            if mark.de_emphasized != flag {
                mark.de_emphasized = flag;
                changed = true;
            }
        }
        if changed {
            self.bump_revision();
        }
        changed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
