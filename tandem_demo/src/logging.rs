// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log output for the demo: a `fmt` layer on stderr filtered by `EnvFilter`.

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps the `-v` count to a level: none is `info`, one is `debug`, more is
/// `trace`.
pub(crate) fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber.
///
/// Without `-v`, `RUST_LOG` is honored when set; otherwise the level from
/// [`level_for`] applies to every target.
pub(crate) fn init(verbosity: u8) -> anyhow::Result<()> {
    let default = EnvFilter::new(level_for(verbosity).as_str());
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or(default)
    } else {
        default
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("failed to install the log subscriber")
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::level_for;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(0), Level::INFO);
        assert_eq!(level_for(1), Level::DEBUG);
        assert_eq!(level_for(4), Level::TRACE);
    }
}
