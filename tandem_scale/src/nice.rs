// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 1-2-5 step ladder behind nice bounds and tick values.

use alloc::vec::Vec;
use core::f64::consts::SQRT_2;

// Thresholds between ladder rungs: sqrt(50), sqrt(10), sqrt(2).
const E10: f64 = 7.071_067_811_865_475_5;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = SQRT_2;

/// Maximum number of snapping passes performed by [`nice`].
const MAX_NICE_PASSES: usize = 10;

/// Returns a round step for dividing `start..stop` into roughly `count` parts.
///
/// The step is taken from a 1-2-5 ladder (`1, 2, 5, 10, 20, 50, ...`).
///
/// - A positive result is the step itself.
/// - A negative result `-k` encodes the fractional step `1 / k`. Keeping the
///   reciprocal integral avoids accumulating error for steps like `0.1`.
/// - Zero means no usable step exists (empty, inverted or non-finite span).
///
/// ```rust
/// use tandem_scale::tick_increment;
///
/// assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
/// assert_eq!(tick_increment(100.0, 300.0, 10), 20.0);
/// // 0.2 is encoded as -5.
/// assert_eq!(tick_increment(1.0, 3.0, 10), -5.0);
/// ```
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step.is_nan() || step <= 0.0 || step.is_infinite() {
        return 0.0;
    }
    let power = libm::floor(libm::log10(step));
    let error = step / libm::pow(10.0, power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * libm::pow(10.0, power)
    } else {
        -libm::pow(10.0, -power) / factor
    }
}

/// Extends `start..stop` outward so both ends land on a round step.
///
/// Snapping is repeated until the step chosen by [`tick_increment`] stops
/// changing (widening the span can move it to the next rung). Reversed input
/// is handled and returned reversed.
///
/// ```rust
/// use tandem_scale::nice;
///
/// assert_eq!(nice(187.0, 301.0, 10), (180.0, 310.0));
/// assert_eq!(nice(1.0, 18.0, 10), (0.0, 18.0));
/// ```
#[must_use]
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed { (stop, start) } else { (start, stop) };

    let mut previous = None;
    for _ in 0..MAX_NICE_PASSES {
        let step = tick_increment(lo, hi, count);
        if previous == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = libm::floor(lo / step) * step;
            hi = libm::ceil(hi / step) * step;
        } else if step < 0.0 {
            lo = libm::ceil(lo * step) / step;
            hi = libm::floor(hi * step) / step;
        } else {
            break;
        }
        previous = Some(step);
    }

    if reversed { (hi, lo) } else { (lo, hi) }
}

/// Returns round tick values inside `start..=stop`, roughly `count` of them.
///
/// Values are ascending regardless of the argument order. A zero-width span
/// yields that single value.
///
/// ```rust
/// use tandem_scale::ticks;
///
/// assert_eq!(ticks(0.0, 18.0, 10), [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0]);
/// assert_eq!(ticks(1.0, 2.0, 5), [1.0, 1.2, 1.4, 1.6, 1.8, 2.0]);
/// ```
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let mut out = Vec::new();
    if lo == hi && lo.is_finite() {
        out.push(lo);
        return out;
    }

    let step = tick_increment(lo, hi, count);
    if step > 0.0 {
        let mut i = libm::ceil(lo / step);
        let last = libm::floor(hi / step);
        while i <= last {
            out.push(i * step);
            i += 1.0;
        }
    } else if step < 0.0 {
        let inv = -step;
        let mut i = libm::ceil(lo * inv);
        let last = libm::floor(hi * inv);
        while i <= last {
            out.push(i / inv);
            i += 1.0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{nice, tick_increment, ticks};

    #[test]
    fn increment_follows_one_two_five_ladder() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 17.0, 10), 2.0);
        assert_eq!(tick_increment(0.0, 40.0, 10), 5.0);
        assert_eq!(tick_increment(0.0, 80.0, 10), 10.0);
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
    }

    #[test]
    fn increment_moves_to_two_above_root_two() {
        assert_eq!(tick_increment(0.0, 14.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 14.2, 10), 2.0);
    }

    #[test]
    fn increment_rejects_unusable_spans() {
        assert_eq!(tick_increment(5.0, 5.0, 10), 0.0);
        assert_eq!(tick_increment(5.0, 1.0, 10), 0.0);
        assert_eq!(tick_increment(0.0, f64::INFINITY, 10), 0.0);
        assert_eq!(tick_increment(f64::NAN, 1.0, 10), 0.0);
    }

    #[test]
    fn nice_keeps_already_round_bounds() {
        assert_eq!(nice(100.0, 300.0, 10), (100.0, 300.0));
        assert_eq!(nice(1.0, 3.0, 10), (1.0, 3.0));
    }

    #[test]
    fn nice_snaps_fractional_bounds_without_drift() {
        let (lo, hi) = nice(0.13, 0.87, 10);
        assert_eq!((lo, hi), (0.1, 0.9));
    }

    #[test]
    fn nice_preserves_reversed_order() {
        assert_eq!(nice(301.0, 187.0, 10), (310.0, 180.0));
    }

    #[test]
    fn ticks_cover_span_inclusively() {
        let t = ticks(100.0, 300.0, 6);
        assert_eq!(t.first(), Some(&100.0));
        assert_eq!(t.last(), Some(&300.0));
        assert!(t.windows(2).all(|w| w[0] < w[1]), "ticks must ascend");
    }

    #[test]
    fn ticks_of_point_span_is_single_value() {
        assert_eq!(ticks(4.0, 4.0, 10), [4.0]);
    }
}
