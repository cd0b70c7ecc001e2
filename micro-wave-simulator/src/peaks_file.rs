//! Loading peak data for the simulator.
//!
//! Accepts the JSON written by audio analysis tools (interleaved min/max
//! pairs per channel) or a bare JSON array of peak magnitudes.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use micro_peaks::InterleavedPeaks;
use serde::Deserialize;

use crate::config::{DEMO_BEAT_FRAMES, DEMO_FRAMES};

/// Audio analysis JSON. Version 1 files carry no `channels` field and are mono.
#[derive(Debug, Deserialize)]
pub struct AnalysisFile {
    pub version: Option<u32>,
    #[serde(default = "mono")]
    pub channels: usize,
    pub sample_rate: Option<u32>,
    pub samples_per_pixel: Option<u32>,
    pub bits: u8,
    pub length: Option<usize>,
    pub data: Vec<i32>,
}

fn mono() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PeaksFile {
    Analysis(AnalysisFile),
    Raw(Vec<f32>),
}

/// Signed min/max columns of one channel, for the detailed view.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub min: Vec<i32>,
    pub max: Vec<i32>,
    pub bits: u8,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.max.len()
    }
}

/// Peaks ready for the bar pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Peaks {
    /// Positive peak per column, fed to the normalizer.
    pub raw: Vec<f32>,
    /// Only present when the source had min/max pairs.
    pub outline: Option<Outline>,
}

impl PeaksFile {
    pub fn parse(json: &str) -> Result<Self, anyhow::Error> {
        serde_json::from_str(json).context("Peak file is neither analysis JSON nor an array of numbers")
    }

    /// Extracts the first channel.
    pub fn into_peaks(self) -> Result<Peaks, anyhow::Error> {
        match self {
            PeaksFile::Raw(raw) => Ok(Peaks { raw, outline: None }),
            PeaksFile::Analysis(file) => {
                let interleaved = InterleavedPeaks::new(&file.data, file.channels)
                    .map_err(|e| anyhow!("Invalid analysis data: {e}"))?;

                if let Some(length) = file.length {
                    if length != interleaved.len() {
                        tracing::warn!(
                            "Analysis header says {} columns but data holds {}",
                            length,
                            interleaved.len()
                        );
                    }
                }
                tracing::debug!(
                    "Analysis v{:?}: {} channels, {} bits, {:?} Hz, {:?} samples per pixel",
                    file.version,
                    file.channels,
                    file.bits,
                    file.sample_rate,
                    file.samples_per_pixel
                );

                let max = interleaved
                    .max_array(0)
                    .map_err(|e| anyhow!("Invalid analysis data: {e}"))?;
                let min = interleaved
                    .min_array(0)
                    .map_err(|e| anyhow!("Invalid analysis data: {e}"))?;

                Ok(Peaks {
                    raw: max.iter().map(|&v| v as f32).collect(),
                    outline: Some(Outline {
                        min,
                        max,
                        bits: file.bits,
                    }),
                })
            }
        }
    }
}

/// Reads and parses a peak file.
///
/// # Errors
/// - If the file cannot be read
/// - If the JSON matches neither accepted shape
/// - If the interleaved data is malformed
pub fn load(path: &Path) -> Result<Peaks, anyhow::Error> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read peak file {}", path.display()))?;
    let peaks = PeaksFile::parse(&json)
        .with_context(|| format!("Failed to parse peak file {}", path.display()))?
        .into_peaks()?;

    tracing::info!("Loaded {} peak columns from {}", peaks.raw.len(), path.display());
    Ok(peaks)
}

/// A deterministic 8-bit analysis: decaying kicks over a slow swell.
pub fn demo() -> Peaks {
    let mut min = Vec::with_capacity(DEMO_FRAMES);
    let mut max = Vec::with_capacity(DEMO_FRAMES);

    for i in 0..DEMO_FRAMES {
        let t = i as f32 / DEMO_FRAMES as f32;
        let beat = (i % DEMO_BEAT_FRAMES) as f32 / DEMO_BEAT_FRAMES as f32;
        let swell = 0.35 + 0.3 * (t * std::f32::consts::PI * 3.0).sin().abs();
        let kick = (1.0 - beat).powi(3) * 0.5;
        let ripple = 0.85 + 0.15 * (i as f32 * 0.7).sin();

        let peak = (127.0 * (swell + kick).min(1.0) * ripple) as i32;
        max.push(peak);
        min.push(-(peak * 9 / 10) - 1);
    }

    Peaks {
        raw: max.iter().map(|&v| v as f32).collect(),
        outline: Some(Outline { min, max, bits: 8 }),
    }
}
