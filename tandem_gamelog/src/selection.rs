// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::record::GameRecord;

/// A contiguous, inclusive interval of weeks with `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekRange {
    lo: u32,
    hi: u32,
}

impl WeekRange {
    /// Creates the range spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// A range covering exactly one week.
    #[must_use]
    pub fn single(week: u32) -> Self {
        Self { lo: week, hi: week }
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub fn lo(&self) -> u32 {
        self.lo
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Returns `true` if `week` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, week: u32) -> bool {
        (self.lo..=self.hi).contains(&week)
    }
}

impl core::fmt::Display for WeekRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..={}", self.lo, self.hi)
    }
}

/// An unordered set of weeks.
///
/// An empty set is a meaningful selection ("nothing matched") and is distinct
/// from having no selection at all, which callers express as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekSet {
    weeks: HashSet<u32>,
}

impl WeekSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the weeks of the records matching `pred`.
    pub fn from_matching<'a, I, F>(records: I, mut pred: F) -> Self
    where
        I: IntoIterator<Item = &'a GameRecord>,
        F: FnMut(&GameRecord) -> bool,
    {
        records
            .into_iter()
            .filter(|r| pred(r))
            .map(|r| r.week)
            .collect()
    }

    /// Returns `true` if `week` is in the set.
    #[must_use]
    pub fn contains(&self, week: u32) -> bool {
        self.weeks.contains(&week)
    }

    /// Adds a week; returns `true` if it was not present.
    pub fn insert(&mut self, week: u32) -> bool {
        self.weeks.insert(week)
    }

    /// Number of weeks in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates the weeks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().copied()
    }

    /// Returns the weeks in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<u32> {
        let mut weeks: Vec<u32> = self.iter().collect();
        weeks.sort_unstable();
        weeks
    }
}

impl FromIterator<u32> for WeekSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            weeks: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for WeekSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.weeks.extend(iter);
    }
}

/// Returns the predicate a week range induces on records.
///
/// With no range every record is kept; otherwise a record is kept when its
/// week lies within the range.
pub fn week_range_filter(range: Option<&WeekRange>) -> impl Fn(&GameRecord) -> bool + '_ {
    move |record: &GameRecord| range.is_none_or(|r| r.contains(record.week))
}
