// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tandem_scale --heading-base-level=0

//! Tandem Scale: domain/pixel mapping for linked chart views.
//!
//! This crate provides the small amount of math a chart view needs to turn
//! observed data values into pixel positions and, more importantly for
//! brushing, to turn pixel positions back into data values:
//!
//! - [`LinearScale`]: an affine map from a continuous domain onto a pixel
//!   range, with "nice" round domain bounds and an exact inverse.
//! - [`DiscreteScale`]: a [`LinearScale`] over integer keys (for example week
//!   numbers) whose inverse rounds to the nearest key.
//! - [`tick_increment`], [`nice`], [`ticks`]: the 1-2-5 step ladder used to
//!   pick round bounds and axis tick values.
//!
//! It does **not** draw axes or own any scene. Renderers ask a scale for
//! positions and tick values and draw however they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use tandem_scale::LinearScale;
//!
//! // Passing yards observed across a season, mapped onto a 465px wide plot.
//! let x = LinearScale::from_values([212.0, 187.0, 301.0], 0.0..465.0);
//!
//! // The domain snaps outward to round numbers.
//! assert_eq!(x.domain(), 180.0..310.0);
//!
//! let px = x.to_pixel(250.0);
//! assert!((x.to_domain(px) - 250.0).abs() < 1e-9);
//! ```
//!
//! ## Descending pixel ranges
//!
//! Screen Y grows downward, so vertical scales are usually built with a
//! descending range such as `310.0..0.0`. Both directions are supported; the
//! inverse is exact either way.
//!
//! ```rust
//! use tandem_scale::LinearScale;
//!
//! let y = LinearScale::new(0.0..4.0, 310.0..0.0);
//! assert_eq!(y.to_pixel(0.0), 310.0);
//! assert_eq!(y.to_pixel(4.0), 0.0);
//! assert_eq!(y.to_domain(155.0), 2.0);
//! ```
//!
//! ## Degenerate domains
//!
//! When every observed value is identical, the domain is widened by
//! [`DEGENERATE_PADDING`] on each side before snapping, so inversion stays
//! well defined. An empty set of values produces the unit domain `0..1`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod discrete;
mod linear;
mod nice;

pub use discrete::DiscreteScale;
pub use linear::{DEFAULT_TICK_COUNT, DEGENERATE_PADDING, LinearScale, extent};
pub use nice::{nice, tick_increment, ticks};
