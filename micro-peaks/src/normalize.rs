use alloc::vec::Vec;

#[cfg(feature = "logging")]
use defmt::debug;

use crate::error::NormalizeError;
use crate::round_half_up;

/// Upper bound of a normalized peak.
pub const NORMALIZED_MAX: u8 = 100;

/// Rescales raw peak magnitudes onto `0..=100` against the series' own maximum.
///
/// Negative entries are sentinels from the decoder and are dropped, as are
/// NaN and infinities. The output therefore has one value per valid input,
/// in input order.
///
/// # Errors
/// - [`NormalizeError::NoValidPeaks`] if nothing survives the filter
/// - [`NormalizeError::Silent`] if the largest valid peak is zero
pub fn normalize(raw: &[f32]) -> Result<Vec<u8>, NormalizeError> {
    let peaks: Vec<f32> = raw
        .iter()
        .copied()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .collect();

    if peaks.is_empty() {
        return Err(NormalizeError::NoValidPeaks(raw.len()));
    }

    let max = peaks.iter().copied().fold(0.0f32, f32::max);
    if max <= 0.0 {
        return Err(NormalizeError::Silent(peaks.len()));
    }

    #[cfg(feature = "logging")]
    debug!(
        "normalize: kept {} of {} peaks, max {}",
        peaks.len(),
        raw.len(),
        max
    );

    Ok(peaks
        .iter()
        // divide by max first: `max / 100` underflows to zero for subnormal peaks
        .map(|&value| {
            round_half_up(value / max * NORMALIZED_MAX as f32).min(NORMALIZED_MAX as f32) as u8
        })
        .collect())
}
