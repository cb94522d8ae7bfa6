// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// One played game.
///
/// `week` is the join key between views and must be unique within a
/// [`RecordStore`](crate::RecordStore). `date`, `opponent` and `result` are
/// display-only. `pass_yds`, `pass_td` and `qbr` are required to be finite;
/// `interceptions` may be `NaN` when the source left it blank.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    /// Week of the season, starting at 1.
    pub week: u32,
    /// Game date as written in the source.
    pub date: String,
    /// Opponent label as written in the source.
    pub opponent: String,
    /// Result label (for example `W 27-20`).
    pub result: String,
    /// Passing yards.
    pub pass_yds: f64,
    /// Passing touchdowns.
    pub pass_td: f64,
    /// Interceptions thrown.
    #[cfg_attr(feature = "serde", serde(rename = "int"))]
    pub interceptions: f64,
    /// Total quarterback rating.
    pub qbr: f64,
}

impl GameRecord {
    /// Creates a record with the numeric fields the views plot.
    ///
    /// Descriptive fields start empty and `interceptions` starts at zero.
    #[must_use]
    pub fn new(week: u32, pass_yds: f64, pass_td: f64, qbr: f64) -> Self {
        Self {
            week,
            date: String::new(),
            opponent: String::new(),
            result: String::new(),
            pass_yds,
            pass_td,
            interceptions: 0.0,
            qbr,
        }
    }

    /// Sets the display-only fields.
    #[must_use]
    pub fn with_details(
        mut self,
        date: impl Into<String>,
        opponent: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        self.date = date.into();
        self.opponent = opponent.into();
        self.result = result.into();
        self
    }

    /// Sets the interception count.
    #[must_use]
    pub fn with_interceptions(mut self, interceptions: f64) -> Self {
        self.interceptions = interceptions;
        self
    }

    /// Returns the first required numeric field that is not finite, if any.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            (Metric::PassYards, self.pass_yds),
            (Metric::PassTouchdowns, self.pass_td),
            (Metric::Qbr, self.qbr),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(m, _)| m.column())
    }
}

/// A numeric column of [`GameRecord`] that an axis can plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// [`GameRecord::pass_yds`].
    PassYards,
    /// [`GameRecord::pass_td`].
    PassTouchdowns,
    /// [`GameRecord::interceptions`].
    Interceptions,
    /// [`GameRecord::qbr`].
    #[default]
    Qbr,
}

impl Metric {
    /// Every metric, in column order.
    pub const ALL: [Self; 4] = [
        Self::PassYards,
        Self::PassTouchdowns,
        Self::Interceptions,
        Self::Qbr,
    ];

    /// Reads this metric from a record.
    #[must_use]
    pub fn value(self, record: &GameRecord) -> f64 {
        match self {
            Self::PassYards => record.pass_yds,
            Self::PassTouchdowns => record.pass_td,
            Self::Interceptions => record.interceptions,
            Self::Qbr => record.qbr,
        }
    }

    /// Column name in the delimited game log.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::PassYards => "pass_yds",
            Self::PassTouchdowns => "pass_td",
            Self::Interceptions => "int",
            Self::Qbr => "qbr",
        }
    }

    /// Looks a metric up by its [column name](Metric::column).
    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.column() == name)
    }

    /// Human-readable axis label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PassYards => "Passing Yards",
            Self::PassTouchdowns => "Passing TD",
            Self::Interceptions => "Interceptions",
            Self::Qbr => "QBR",
        }
    }

    /// Whether the metric only takes whole values (axis ticks format as integers).
    #[must_use]
    pub fn is_count(self) -> bool {
        matches!(self, Self::PassTouchdowns | Self::Interceptions)
    }
}
