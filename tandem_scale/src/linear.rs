// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::nice::{nice, ticks};

/// Tick count used when snapping a freshly observed domain to nice bounds.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Half-width added on each side of a zero-width domain.
///
/// A domain built from identical observations (every game with two
/// touchdowns, say) has no width to divide by. It is widened to
/// `[v - DEGENERATE_PADDING, v + DEGENERATE_PADDING]` instead.
pub const DEGENERATE_PADDING: f64 = 1.0;

/// Returns the `min..max` extent of the finite values, or `None` if there are
/// none.
///
/// Non-finite values (`NaN`, infinities) are skipped.
#[must_use]
pub fn extent<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<Range<f64>>, v| match acc {
            None => Some(v..v),
            Some(r) => Some(r.start.min(v)..r.end.max(v)),
        })
}

/// Affine mapping between a continuous domain and a pixel range.
///
/// The domain is always ascending and never zero-width. The pixel range may
/// be ascending or descending, and may be zero-width (a collapsed plot), in
/// which case [`LinearScale::to_domain`] returns the domain start.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: Range<f64>,
    range: Range<f64>,
}

impl LinearScale {
    /// Creates a scale with an explicit domain and pixel range.
    ///
    /// The domain is normalized so that `start <= end` and widened by
    /// [`DEGENERATE_PADDING`] if it has zero width. No nice snapping is
    /// applied; see [`LinearScale::nice`].
    #[must_use]
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self {
            domain: normalize_domain(domain),
            range,
        }
    }

    /// Creates a scale whose domain covers the observed `values`, snapped to
    /// nice bounds with [`DEFAULT_TICK_COUNT`].
    ///
    /// An empty (or entirely non-finite) input yields the domain `0..1`.
    #[must_use]
    pub fn from_values<I>(values: I, range: Range<f64>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let domain = extent(values).unwrap_or(0.0..1.0);
        let mut scale = Self::new(domain, range);
        scale.nice(DEFAULT_TICK_COUNT);
        scale
    }

    /// Returns the current domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Returns the current pixel range.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Extends the domain outward to round bounds for roughly `count` ticks.
    pub fn nice(&mut self, count: usize) {
        let (start, end) = nice(self.domain.start, self.domain.end, count);
        self.domain = start..end;
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f64 {
        let t = (value - self.domain.start) / (self.domain.end - self.domain.start);
        self.range.start + t * (self.range.end - self.range.start)
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// This is the exact inverse of [`LinearScale::to_pixel`] up to floating
    /// point rounding.
    #[must_use]
    pub fn to_domain(&self, pixel: f64) -> f64 {
        let span = self.range.end - self.range.start;
        if span == 0.0 {
            return self.domain.start;
        }
        let t = (pixel - self.range.start) / span;
        self.domain.start + t * (self.domain.end - self.domain.start)
    }

    /// Returns round tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.start, self.domain.end, count)
    }
}

fn normalize_domain(domain: Range<f64>) -> Range<f64> {
    let (lo, hi) = if domain.end < domain.start {
        (domain.end, domain.start)
    } else {
        (domain.start, domain.end)
    };
    if lo == hi {
        (lo - DEGENERATE_PADDING)..(hi + DEGENERATE_PADDING)
    } else {
        lo..hi
    }
}

#[cfg(test)]
mod tests {
    use super::{DEGENERATE_PADDING, LinearScale, extent};

    #[test]
    fn extent_skips_non_finite_values() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, f64::INFINITY, 2.0]), Some(-1.0..3.0));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent(core::iter::empty()), None);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let scale = LinearScale::from_values([100.0, 250.0, 300.0], 0.0..465.0);
        for v in [100.0, 133.3, 250.0, 299.99, 300.0] {
            let back = scale.to_domain(scale.to_pixel(v));
            assert!((back - v).abs() < 1e-6, "{v} came back as {back}");
        }
    }

    #[test]
    fn descending_range_round_trips() {
        let scale = LinearScale::from_values([1.0, 3.0, 2.0], 310.0..0.0);
        assert_eq!(scale.domain(), 1.0..3.0);
        assert_eq!(scale.to_pixel(3.0), 0.0);
        assert_eq!(scale.to_pixel(1.0), 310.0);
        let back = scale.to_domain(scale.to_pixel(2.5));
        assert!((back - 2.5).abs() < 1e-6, "descending inverse drifted: {back}");
    }

    #[test]
    fn identical_values_still_produce_width() {
        let scale = LinearScale::from_values([2.0, 2.0, 2.0], 0.0..100.0);
        let domain = scale.domain();
        assert!(domain.end > domain.start, "domain must not be degenerate");
        assert!(domain.start <= 2.0 - DEGENERATE_PADDING);
        assert!(domain.end >= 2.0 + DEGENERATE_PADDING);
        assert!((scale.to_domain(scale.to_pixel(2.0)) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_values_use_unit_domain() {
        let scale = LinearScale::from_values(core::iter::empty(), 0.0..10.0);
        assert_eq!(scale.domain(), 0.0..1.0);
    }

    #[test]
    fn collapsed_pixel_range_inverts_to_domain_start() {
        let scale = LinearScale::new(5.0..10.0, 40.0..40.0);
        assert_eq!(scale.to_domain(40.0), 5.0);
        assert_eq!(scale.to_domain(123.0), 5.0);
    }

    #[test]
    fn reversed_domain_is_normalized() {
        let scale = LinearScale::new(10.0..0.0, 0.0..100.0);
        assert_eq!(scale.domain(), 0.0..10.0);
        assert_eq!(scale.to_pixel(2.5), 25.0);
    }
}
