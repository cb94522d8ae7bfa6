// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::linear::{DEFAULT_TICK_COUNT, LinearScale};

/// A linear scale over integer keys, such as week numbers.
///
/// Forward mapping is the plain linear map. The inverse rounds to the nearest
/// key (halves round up) and saturates at zero, so any pixel inside the plot
/// resolves to a concrete key.
///
/// ```rust
/// use tandem_scale::DiscreteScale;
///
/// let weeks = DiscreteScale::from_keys([1, 2, 3, 4], 0.0..300.0);
/// let px = weeks.to_pixel(3);
/// assert_eq!(weeks.to_domain(px), 3);
/// assert_eq!(weeks.to_domain(px + 10.0), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteScale {
    linear: LinearScale,
}

impl DiscreteScale {
    /// Creates a scale covering the given keys, snapped to nice bounds.
    #[must_use]
    pub fn from_keys<I>(keys: I, range: Range<f64>) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            linear: LinearScale::from_values(keys.into_iter().map(f64::from), range),
        }
    }

    /// Returns the underlying continuous scale.
    #[must_use]
    pub fn linear(&self) -> &LinearScale {
        &self.linear
    }

    /// Maps a key to a pixel coordinate.
    #[must_use]
    pub fn to_pixel(&self, key: u32) -> f64 {
        self.linear.to_pixel(f64::from(key))
    }

    /// Maps a pixel coordinate to the nearest key.
    #[must_use]
    pub fn to_domain(&self, pixel: f64) -> u32 {
        round_key(self.linear.to_domain(pixel))
    }

    /// Integral tick values inside the domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<u32> {
        self.linear
            .ticks(count)
            .into_iter()
            .filter(|t| libm::floor(*t) == *t)
            .map(round_key)
            .collect()
    }

    /// Integral tick values using [`DEFAULT_TICK_COUNT`].
    #[must_use]
    pub fn default_ticks(&self) -> Vec<u32> {
        self.ticks(DEFAULT_TICK_COUNT)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is rounded and clamped to the u32 range first"
)]
fn round_key(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let rounded = libm::floor(value + 0.5);
    rounded.clamp(0.0, f64::from(u32::MAX)) as u32
}
