// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading the delimited game log.
//!
//! The file has a header row and the columns
//! `week,date,opponent,result,pass_yds,pass_td,int,qbr`. Rows whose `week`,
//! `pass_yds`, `pass_td` or `qbr` is missing, unparsable or non-finite are
//! skipped and counted in the [`LoadReport`]; `int` is optional. The
//! remaining records are sorted by week and validated by
//! [`RecordStore::new`].
//!
//! ```rust
//! use tandem_gamelog::load::read_records;
//!
//! let data = "\
//! week,date,opponent,result,pass_yds,pass_td,int,qbr
//! 2,9/14,@MIA,W 33-27,230,2,0,79.1
//! 1,9/7,LV,L 13-20,287,1,1,51.4
//! 3,9/21,PIT,,--,,,
//! ";
//! let (store, report) = read_records(data.as_bytes()).unwrap();
//! assert_eq!(store.len(), 2);
//! assert_eq!(report.skipped, 1);
//! assert_eq!(store.as_slice()[0].opponent, "LV");
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use crate::record::GameRecord;
use crate::store::{RecordError, RecordStore};

/// Errors from [`read_records`] and [`load_records`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read game log: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not well-formed delimited text.
    #[error("malformed game log: {0}")]
    Csv(#[from] csv::Error),
    /// The surviving rows do not form a valid record store.
    #[error("invalid game log: {0}")]
    Record(#[from] RecordError),
}

/// Row counts from a load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Rows dropped for missing or non-finite required fields.
    pub skipped: usize,
}

/// One row as written in the file, before validation.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct RawGameRow {
    /// Week column; may be blank or non-numeric.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub week: Option<f64>,
    /// Date column.
    #[serde(default)]
    pub date: String,
    /// Opponent column.
    #[serde(default)]
    pub opponent: String,
    /// Result column.
    #[serde(default)]
    pub result: String,
    /// Passing yards column.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub pass_yds: Option<f64>,
    /// Passing touchdowns column.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub pass_td: Option<f64>,
    /// Interceptions column.
    #[serde(default, rename = "int", deserialize_with = "csv::invalid_option")]
    pub interceptions: Option<f64>,
    /// QBR column.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub qbr: Option<f64>,
}

impl RawGameRow {
    /// Converts to a record, or `None` if a required field is unusable.
    ///
    /// The week must be a positive whole number.
    #[must_use]
    pub fn into_record(self) -> Option<GameRecord> {
        let week = whole_week(self.week?)?;
        let pass_yds = finite(self.pass_yds?)?;
        let pass_td = finite(self.pass_td?)?;
        let qbr = finite(self.qbr?)?;
        Some(
            GameRecord::new(week, pass_yds, pass_td, qbr)
                .with_details(self.date, self.opponent, self.result)
                .with_interceptions(self.interceptions.unwrap_or(f64::NAN)),
        )
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "checked to be a whole number within the u32 range first"
)]
fn whole_week(v: f64) -> Option<u32> {
    let in_range = v.is_finite() && v >= 1.0 && v <= f64::from(u32::MAX);
    (in_range && v % 1.0 == 0.0).then_some(v as u32)
}

/// Reads records from delimited text with a header row.
///
/// # Errors
///
/// Returns [`LoadError::Csv`] for structurally malformed input and
/// [`LoadError::Record`] if two surviving rows share a week.
pub fn read_records<R: Read>(reader: R) -> Result<(RecordStore, LoadReport), LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();
    let mut records = Vec::new();
    for row in rdr.deserialize::<RawGameRow>() {
        let row = row?;
        report.rows += 1;
        match row.into_record() {
            Some(record) => records.push(record),
            None => report.skipped += 1,
        }
    }
    let store = RecordStore::new(records)?;
    Ok((store, report))
}

/// Opens `path` and reads it with [`read_records`].
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened, otherwise the
/// errors of [`read_records`].
pub fn load_records(path: impl AsRef<Path>) -> Result<(RecordStore, LoadReport), LoadError> {
    let file = File::open(path)?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::{LoadError, RawGameRow, read_records, whole_week};

    const HEADER: &str = "week,date,opponent,result,pass_yds,pass_td,int,qbr\n";

    #[test]
    fn rows_are_sorted_and_incomplete_rows_skipped() {
        let data = std::format!(
            "{HEADER}3,9/21,PIT,W 21-14,300,2,0,61\n1,9/7,LV,L 13-20,100,1,1,40\n\
             2,9/14,@MIA,W 33-27,250,3,0,72.5\n4,9/28,CAR,,,,,\n"
        );
        let (store, report) = read_records(data.as_bytes()).unwrap();
        assert_eq!(report.rows, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(store.weeks().collect::<std::vec::Vec<_>>(), [1, 2, 3]);
        assert_eq!(store.get(2).unwrap().opponent, "@MIA");
    }

    #[test]
    fn blank_interceptions_are_kept_as_nan() {
        let data = std::format!("{HEADER}1,9/7,LV,L,100,1,,40\n");
        let (store, report) = read_records(data.as_bytes()).unwrap();
        assert_eq!(report.skipped, 0);
        assert!(store.get(1).unwrap().interceptions.is_nan());
    }

    #[test]
    fn duplicate_weeks_fail_the_load() {
        let data = std::format!("{HEADER}1,a,b,c,1,1,0,1\n1,a,b,c,2,2,0,2\n");
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Record(_)), "unexpected error: {err}");
    }

    #[test]
    fn week_must_be_positive_whole_number() {
        assert_eq!(whole_week(3.0), Some(3));
        assert_eq!(whole_week(0.0), None);
        assert_eq!(whole_week(2.5), None);
        assert_eq!(whole_week(f64::NAN), None);
        assert_eq!(whole_week(f64::from(u32::MAX) + 1.0), None);
    }

    #[test]
    fn raw_row_without_qbr_is_rejected() {
        let row = RawGameRow {
            week: Some(1.0),
            pass_yds: Some(100.0),
            pass_td: Some(1.0),
            ..RawGameRow::default()
        };
        assert_eq!(row.into_record(), None);
    }
}
