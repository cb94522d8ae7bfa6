// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loads a game log, replays brush gestures on the linked views and prints
//! which marks each view de-emphasizes.
//!
//! ```text
//! tandem-demo --weeks 3..7
//! tandem-demo --data season.csv --yards 200..350 --touchdowns 2..3 -v
//! ```

mod cli;
mod gestures;
mod logging;
mod report;

use anyhow::Context;
use clap::Parser;
use tandem_gamelog::RecordStore;
use tandem_gamelog::load::{LoadReport, load_records, read_records};
use tandem_link::{LinkConfig, LinkCoordinator, ViewTarget};
use tracing::{info, warn};

const SAMPLE_SEASON: &str = include_str!("../data/season.csv");

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbose)?;

    let (records, counts) = load(&args)?;
    info!(
        records = records.len(),
        rows = counts.rows,
        skipped = counts.skipped,
        "game log loaded"
    );
    if records.is_empty() {
        warn!("no usable rows; both views are empty");
    }

    let config = LinkConfig {
        range_metric: args.line,
        ..LinkConfig::default()
    };
    let mut link = LinkCoordinator::new(records, config);

    if let Some(weeks) = args.weeks {
        let changes = gestures::drag_weeks(&mut link, weeks);
        info!(%weeks, ?changes, "brushed weeks on the line chart");
    }
    if args.yards.is_some() || args.touchdowns.is_some() {
        let changes = gestures::drag_region(&mut link, args.yards.clone(), args.touchdowns.clone());
        info!(
            yards = ?args.yards,
            touchdowns = ?args.touchdowns,
            ?changes,
            "brushed a region on the scatter"
        );
    }
    print!("{}", report::render(&link)?);

    if args.clear_after {
        let changes = link.clear(ViewTarget::Range) | link.clear(ViewTarget::Region);
        info!(?changes, "cleared both brushes");
        println!();
        print!("{}", report::render(&link)?);
    }
    Ok(())
}

fn load(args: &cli::Args) -> anyhow::Result<(RecordStore, LoadReport)> {
    match &args.data {
        Some(path) => {
            load_records(path).with_context(|| format!("failed to load {}", path.display()))
        }
        None => read_records(SAMPLE_SEASON.as_bytes()).context("bundled sample season is invalid"),
    }
}
