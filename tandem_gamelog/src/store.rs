// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::record::GameRecord;

/// Why a sequence of records cannot form a [`RecordStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Two records share a week, so the week cannot serve as a key.
    #[error("week {week} appears more than once")]
    DuplicateWeek {
        /// The repeated week.
        week: u32,
    },
    /// Weeks start at 1.
    #[error("week 0 is not a valid week")]
    ZeroWeek,
    /// A required numeric field is `NaN` or infinite.
    #[error("week {week} has a non-finite `{field}`")]
    NonFinite {
        /// Week of the offending record.
        week: u32,
        /// Column name of the offending field.
        field: &'static str,
    },
}

/// Immutable, validated records sorted ascending by week.
///
/// Construction is the only place records are checked. Everything downstream
/// (scales, views, the link coordinator) can assume unique positive weeks and
/// finite required fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<GameRecord>,
}

impl RecordStore {
    /// Sorts and validates `records`.
    ///
    /// # Errors
    ///
    /// - [`RecordError::ZeroWeek`] if a record has week 0.
    /// - [`RecordError::NonFinite`] if a required field is not finite.
    /// - [`RecordError::DuplicateWeek`] if two records share a week.
    pub fn new<I>(records: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = GameRecord>,
    {
        let mut records: Vec<GameRecord> = records.into_iter().collect();
        for r in &records {
            if r.week == 0 {
                return Err(RecordError::ZeroWeek);
            }
            if let Some(field) = r.non_finite_field() {
                return Err(RecordError::NonFinite {
                    week: r.week,
                    field,
                });
            }
        }
        records.sort_by_key(|r| r.week);
        if let Some(pair) = records.windows(2).find(|w| w[0].week == w[1].week) {
            return Err(RecordError::DuplicateWeek { week: pair[0].week });
        }
        Ok(Self { records })
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the records in week order.
    #[must_use]
    pub fn as_slice(&self) -> &[GameRecord] {
        &self.records
    }

    /// Returns an iterator over the records in week order.
    pub fn iter(&self) -> core::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }

    /// Returns an iterator over the weeks in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|r| r.week)
    }

    /// Looks up the record for `week`.
    #[must_use]
    pub fn get(&self, week: u32) -> Option<&GameRecord> {
        self.records
            .binary_search_by_key(&week, |r| r.week)
            .ok()
            .map(|idx| &self.records[idx])
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a GameRecord;
    type IntoIter = core::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{RecordError, RecordStore};
    use crate::GameRecord;

    #[test]
    fn sorts_by_week() {
        let store = RecordStore::new([
            GameRecord::new(5, 1.0, 0.0, 1.0),
            GameRecord::new(2, 1.0, 0.0, 1.0),
            GameRecord::new(9, 1.0, 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(store.weeks().collect::<Vec<_>>(), [2, 5, 9]);
    }

    #[test]
    fn rejects_duplicate_weeks() {
        let err = RecordStore::new([
            GameRecord::new(3, 1.0, 0.0, 1.0),
            GameRecord::new(1, 1.0, 0.0, 1.0),
            GameRecord::new(3, 2.0, 0.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, RecordError::DuplicateWeek { week: 3 });
    }

    #[test]
    fn rejects_week_zero_and_non_finite_fields() {
        assert_eq!(
            RecordStore::new([GameRecord::new(0, 1.0, 0.0, 1.0)]).unwrap_err(),
            RecordError::ZeroWeek
        );
        assert_eq!(
            RecordStore::new([GameRecord::new(4, f64::NAN, 0.0, 1.0)]).unwrap_err(),
            RecordError::NonFinite {
                week: 4,
                field: "pass_yds"
            }
        );
    }

    #[test]
    fn get_finds_by_week() {
        let store = RecordStore::new([
            GameRecord::new(1, 100.0, 1.0, 40.0),
            GameRecord::new(7, 250.0, 3.0, 70.0),
        ])
        .unwrap();
        assert_eq!(store.get(7).map(|r| r.pass_yds), Some(250.0));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn empty_store_is_valid() {
        let store = RecordStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
