// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tandem_gamelog::{Metric, WeekRange};

#[derive(Debug, Parser)]
#[command(
    name = "tandem-demo",
    version,
    about = "Cross-filter a season game log between a week range and a yards/touchdowns region"
)]
pub(crate) struct Args {
    /// Game log with columns `week,date,opponent,result,pass_yds,pass_td,int,qbr`.
    /// A bundled sample season is used when omitted.
    #[arg(long, value_name = "CSV")]
    pub(crate) data: Option<PathBuf>,

    /// Column plotted by the line chart: `pass_yds`, `pass_td`, `int` or `qbr`.
    #[arg(long, value_name = "COLUMN", default_value = "qbr", value_parser = parse_metric)]
    pub(crate) line: Metric,

    /// Brush this week range on the line chart, e.g. `3..7` or `5`.
    #[arg(long, value_name = "LO..HI", value_parser = parse_weeks)]
    pub(crate) weeks: Option<WeekRange>,

    /// Passing yards interval of the scatter brush, e.g. `200..350`.
    #[arg(long, value_name = "A..B", value_parser = parse_interval)]
    pub(crate) yards: Option<Range<f64>>,

    /// Passing touchdowns interval of the scatter brush, e.g. `2..3`.
    #[arg(long, value_name = "C..D", value_parser = parse_interval)]
    pub(crate) touchdowns: Option<Range<f64>>,

    /// Clear both brushes at the end and print the restored marks.
    #[arg(long)]
    pub(crate) clear_after: bool,

    /// Increase log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` wins when
    /// no flag is given.
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

fn split_interval(s: &str) -> Result<(&str, &str), String> {
    s.split_once("..")
        .map(|(a, b)| (a.trim(), b.trim().trim_start_matches('=')))
        .ok_or_else(|| format!("expected `LO..HI`, got `{s}`"))
}

fn parse_weeks(s: &str) -> Result<WeekRange, String> {
    let week = |part: &str| {
        part.parse::<u32>()
            .map_err(|e| format!("invalid week `{part}`: {e}"))
    };
    if !s.contains("..") {
        return week(s.trim()).map(WeekRange::single);
    }
    let (lo, hi) = split_interval(s)?;
    Ok(WeekRange::new(week(lo)?, week(hi)?))
}

fn parse_metric(s: &str) -> Result<Metric, String> {
    Metric::from_column(s.trim()).ok_or_else(|| {
        let known: Vec<_> = Metric::ALL.iter().map(|m| m.column()).collect();
        format!("unknown column `{s}`, expected one of {}", known.join(", "))
    })
}

fn parse_interval(s: &str) -> Result<Range<f64>, String> {
    let (a, b) = split_interval(s)?;
    let value = |part: &str| {
        part.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid number `{part}`"))
    };
    Ok(value(a)?..value(b)?)
}
