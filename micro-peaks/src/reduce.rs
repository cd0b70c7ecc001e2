use alloc::vec::Vec;

#[cfg(feature = "logging")]
use defmt::{debug, warn};

use crate::error::NormalizeError;
use crate::normalize::normalize;
use crate::round_half_up;

/// Bars drawn when the host does not ask for a specific count.
pub const DEFAULT_BAR_COUNT: usize = 170;

/// Floor added to every chunk mean so silent stretches still get a sliver.
pub const MIN_AMPLITUDE: f32 = 0.1;

// Largest even value a bar can carry.
const MAX_BAR_AMPLITUDE: f32 = (u16::MAX - 1) as f32;

/// Averages `data` down to at most `of_bars` bar amplitudes.
///
/// Bar `i` averages the next `chunk_size` samples. The last bar
/// (`i == of_bars - 1`) takes whatever remains, so trailing samples that do
/// not fill a whole chunk are not lost. The loop stops early once the data
/// runs out, in which case fewer than `of_bars` values come back.
///
/// Each amplitude is `round(mean + min_amp)` bumped up to the next even
/// number when odd, never below zero. A `chunk_size` of zero reads one
/// sample per bar.
pub fn reduce(data: &[u8], chunk_size: usize, of_bars: usize, min_amp: f32) -> Vec<u16> {
    let chunk_size = chunk_size.max(1);
    let min_amp = if min_amp.is_finite() { min_amp } else { 0.0 };

    let mut result = Vec::with_capacity(of_bars.min(data.len()));
    let mut j = 0;

    for i in 0..of_bars {
        if j >= data.len() {
            #[cfg(feature = "logging")]
            debug!("reduce: data exhausted after {} of {} bars", i, of_bars);
            break;
        }

        let end = if i == of_bars - 1 {
            data.len()
        } else {
            (j + chunk_size).min(data.len())
        };
        let chunk = &data[j..end];
        j = end;

        result.push(even_amplitude(chunk_mean(chunk) + min_amp));
    }

    result
}

/// Splits a normalized series into `of_bars` equal chunks and averages each.
///
/// A series shorter than `of_bars` gets one bar per sample.
pub fn draw_data(data: &[u8], of_bars: usize) -> Vec<u16> {
    if of_bars == 0 || data.is_empty() {
        return Vec::new();
    }

    let items_in_chunk = data.len() / of_bars;

    #[cfg(feature = "logging")]
    {
        if items_in_chunk == 0 {
            warn!(
                "draw_data: {} samples for {} bars, using one sample per bar",
                data.len(),
                of_bars
            );
        }
    }

    reduce(data, items_in_chunk, of_bars, MIN_AMPLITUDE)
}

/// Normalizes raw peaks and reduces them to `of_bars` bar amplitudes.
pub fn bar_amplitudes(raw: &[f32], of_bars: usize) -> Result<Vec<u16>, NormalizeError> {
    let normalized = normalize(raw)?;
    Ok(draw_data(&normalized, of_bars))
}

fn chunk_mean(chunk: &[u8]) -> f32 {
    if chunk.is_empty() {
        return 0.0;
    }
    let sum: u64 = chunk.iter().map(|&value| value as u64).sum();
    sum as f32 / chunk.len() as f32
}

fn even_amplitude(value: f32) -> u16 {
    let amplitude = round_half_up(value).clamp(0.0, MAX_BAR_AMPLITUDE) as u16;
    if amplitude % 2 == 0 {
        amplitude
    } else {
        amplitude + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reduce_documented_chunks() {
        // [0, 0] [0, 50] [100, 75] -> 0.1, 25.1, 87.6 -> 0, 25, 88 -> 0, 26, 88
        let bars = reduce(&[0, 0, 0, 50, 100, 75], 2, 3, MIN_AMPLITUDE);
        assert_eq!(bars, vec![0, 26, 88]);
    }

    #[test]
    fn test_reduce_last_bar_takes_remainder() {
        // 7 samples, 3 bars of 2: the last bar averages [60, 80, 100]
        let bars = reduce(&[10, 10, 30, 30, 60, 80, 100], 2, 3, 0.0);
        assert_eq!(bars, vec![10, 30, 80]);
    }

    #[test]
    fn test_reduce_stops_when_data_runs_out() {
        let bars = reduce(&[20, 40, 60], 2, 5, 0.0);
        assert_eq!(bars, vec![30, 60]);
    }

    #[test]
    fn test_reduce_zero_chunk_size_reads_one_per_bar() {
        let bars = reduce(&[1, 2, 3], 0, 10, 0.0);
        assert_eq!(bars, vec![2, 2, 4]);
    }

    #[test]
    fn test_reduce_odd_rounds_up_to_even() {
        assert_eq!(reduce(&[41], 1, 1, 0.1), vec![42]);
        assert_eq!(reduce(&[42], 1, 1, 0.1), vec![42]);
        // 42.5 + 0.1 rounds to 43, then 44
        assert_eq!(reduce(&[42, 43], 2, 1, 0.1), vec![44]);
    }

    #[test]
    fn test_reduce_ignores_non_finite_min_amp() {
        assert_eq!(reduce(&[10], 1, 1, f32::NAN), vec![10]);
        assert_eq!(reduce(&[10], 1, 1, f32::INFINITY), vec![10]);
    }

    #[test]
    fn test_reduce_negative_min_amp_lowers_bars() {
        assert_eq!(reduce(&[11], 1, 1, -1.0), vec![10]);
        assert_eq!(reduce(&[10], 1, 1, -5.0), vec![6]);
        // never below zero
        assert_eq!(reduce(&[2], 1, 1, -50.0), vec![0]);
    }

    #[test]
    fn test_chunk_mean() {
        assert_abs_diff_eq!(chunk_mean(&[0, 50, 100, 75]), 56.25);
        assert_abs_diff_eq!(chunk_mean(&[255; 3]), 255.0);
        assert_abs_diff_eq!(chunk_mean(&[]), 0.0);
    }

    #[test]
    fn test_reduce_no_bars() {
        assert!(reduce(&[1, 2, 3], 1, 0, 0.1).is_empty());
        assert!(reduce(&[], 4, 3, 0.1).is_empty());
    }

    #[test]
    fn test_draw_data_even_split() {
        let data: Vec<u8> = (0..10).map(|i| i * 10).collect();
        // chunks of 2: means 5, 25, 45, 65, 85 (+0.1) -> 6, 26, 46, 66, 86
        assert_eq!(draw_data(&data, 5), vec![6, 26, 46, 66, 86]);
    }

    #[test]
    fn test_draw_data_short_series() {
        assert_eq!(draw_data(&[3, 4], DEFAULT_BAR_COUNT), vec![4, 4]);
        assert!(draw_data(&[3, 4], 0).is_empty());
        assert!(draw_data(&[], DEFAULT_BAR_COUNT).is_empty());
    }

    #[test]
    fn test_bar_amplitudes_composes() {
        let bars = bar_amplitudes(&[0.0, 0.0, 0.0, 50.0, 100.0, 75.0], 3).unwrap();
        assert_eq!(bars, vec![0, 26, 88]);
        assert_eq!(
            bar_amplitudes(&[-1.0], 3),
            Err(NormalizeError::NoValidPeaks(1))
        );
    }
}
