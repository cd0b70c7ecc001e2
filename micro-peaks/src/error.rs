use thiserror::Error;

/// Reasons a raw peak series cannot be rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Every entry was negative or not a finite number.
    #[error("no valid peaks: all {0} entries were negative or not finite")]
    NoValidPeaks(usize),

    /// The loudest valid peak is zero, so there is nothing to scale against.
    #[error("peak series is silent: maximum of {0} valid entries is zero")]
    Silent(usize),
}

/// Problems with interleaved min/max peak data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeaksError {
    #[error("channel count must be at least 1")]
    NoChannels,

    /// The data does not hold a whole number of `[min, max]` frames.
    #[error("{len} values cannot be split into frames of {channels} min/max pairs")]
    RaggedData { len: usize, channels: usize },

    #[error("channel {channel} out of range for {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },
}
