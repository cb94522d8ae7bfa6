// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{self, Write};

use tandem_link::LinkCoordinator;

/// Tick count requested for value axes; the week axis uses the scale default.
const VALUE_TICK_COUNT: usize = 6;

/// Formats the current selections, each view's axes, and one row per week
/// with both views' de-emphasis flags (`x` means de-emphasized).
pub(crate) fn render(link: &LinkCoordinator) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let state = link.state();
    let range = state
        .week_range
        .map_or_else(|| "none".to_owned(), |r| r.to_string());
    let weeks = state.selected_weeks.as_ref().map_or_else(
        || "none".to_owned(),
        |set| format!("{:?}", set.to_sorted_vec()),
    );
    writeln!(out, "week range: {range}")?;
    writeln!(out, "selected weeks: {weeks}")?;

    let line_metric = link.range().metric();
    let (x_metric, y_metric) = link.region().metrics();
    let week_ticks: Vec<f64> = link
        .range()
        .x_scale()
        .default_ticks()
        .into_iter()
        .map(f64::from)
        .collect();

    writeln!(out, "axes:")?;
    axis_row(&mut out, "line", 'x', "Week", &week_ticks, true)?;
    axis_row(
        &mut out,
        "line",
        'y',
        line_metric.label(),
        &link.range().y_scale().ticks(VALUE_TICK_COUNT),
        line_metric.is_count(),
    )?;
    axis_row(
        &mut out,
        "points",
        'x',
        x_metric.label(),
        &link.region().x_scale().ticks(VALUE_TICK_COUNT),
        x_metric.is_count(),
    )?;
    axis_row(
        &mut out,
        "points",
        'y',
        y_metric.label(),
        &link.region().y_scale().ticks(VALUE_TICK_COUNT),
        y_metric.is_count(),
    )?;

    writeln!(
        out,
        "{:>4}  {:<8} {:>8} {:>8} {:>8}  {:>5} {:>6}",
        "week",
        "opp",
        line_metric.column(),
        x_metric.column(),
        y_metric.column(),
        "line",
        "points",
    )?;
    for record in link.records() {
        let flag = |dim: Option<bool>| match dim {
            Some(true) => "x",
            Some(false) => "",
            None => "-",
        };
        let line = link.range().marks().get(record.week).map(|m| m.de_emphasized);
        let points = link.region().marks().get(record.week).map(|m| m.de_emphasized);
        writeln!(
            out,
            "{:>4}  {:<8} {:>8.1} {:>8.1} {:>8.1}  {:>5} {:>6}",
            record.week,
            record.opponent,
            line_metric.value(record),
            x_metric.value(record),
            y_metric.value(record),
            flag(line),
            flag(points),
        )?;
    }
    Ok(out)
}

/// Writes one axis line. Counting axes only keep whole-number ticks.
fn axis_row(
    out: &mut String,
    view: &str,
    axis: char,
    label: &str,
    ticks: &[f64],
    integral: bool,
) -> fmt::Result {
    write!(out, "  {view:<6} {axis}  {label:<14}")?;
    for tick in ticks {
        if integral {
            if tick.fract() == 0.0 {
                write!(out, " {tick:.0}")?;
            }
        } else {
            write!(out, " {tick}")?;
        }
    }
    writeln!(out)
}
