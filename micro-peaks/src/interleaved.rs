use alloc::vec::Vec;

use crate::error::PeaksError;

/// Read-only view over interleaved min/max peak data.
///
/// Audio analysis files store one frame per pixel column. A frame holds a
/// `[min, max]` pair for every channel, so a stereo file reads
/// `l_min, l_max, r_min, r_max, l_min, ...`.
pub struct InterleavedPeaks<'a> {
    data: &'a [i32],
    channels: usize,
}

impl<'a> InterleavedPeaks<'a> {
    pub fn new(data: &'a [i32], channels: usize) -> Result<Self, PeaksError> {
        if channels == 0 {
            return Err(PeaksError::NoChannels);
        }
        if data.len() % (channels * 2) != 0 {
            return Err(PeaksError::RaggedData {
                len: data.len(),
                channels,
            });
        }
        Ok(Self { data, channels })
    }

    /// Number of frames (pixel columns) per channel.
    pub fn len(&self) -> usize {
        self.data.len() / (self.channels * 2)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn min_array(&self, channel: usize) -> Result<Vec<i32>, PeaksError> {
        self.column(channel, 0)
    }

    pub fn max_array(&self, channel: usize) -> Result<Vec<i32>, PeaksError> {
        self.column(channel, 1)
    }

    fn column(&self, channel: usize, offset: usize) -> Result<Vec<i32>, PeaksError> {
        if channel >= self.channels {
            return Err(PeaksError::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        Ok(self
            .data
            .chunks_exact(self.channels * 2)
            .map(|frame| frame[channel * 2 + offset])
            .collect())
    }
}
