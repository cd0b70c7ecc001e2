#![no_std]
//! Peak reduction for waveform bar charts.
//!
//! Raw per-window peak magnitudes are rescaled onto `0..=100` by
//! [`normalize`], then averaged down to a fixed number of bar heights by
//! [`draw_data`] / [`reduce`].
extern crate alloc;

#[cfg(feature = "logging")]
use defmt_rtt as _;

#[allow(unused_imports)]
use micromath::F32Ext;

mod error;
mod interleaved;
mod normalize;
mod reduce;

pub use error::{NormalizeError, PeaksError};
pub use interleaved::InterleavedPeaks;
pub use normalize::{normalize, NORMALIZED_MAX};
pub use reduce::{bar_amplitudes, draw_data, reduce, DEFAULT_BAR_COUNT, MIN_AMPLITUDE};

/// Rounds to the nearest integer, with halves going towards positive infinity.
///
/// `2.5` becomes `3.0` and `-2.5` becomes `-2.0`. Every rounding step in the
/// pipeline goes through here so bar geometry stays stable for negative
/// offsets too.
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
