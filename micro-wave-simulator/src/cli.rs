use std::path::PathBuf;

use clap::Parser;
use micro_peaks::DEFAULT_BAR_COUNT;
use micro_wave::LayoutConfig;

use crate::config;

/// Scrubbable waveform bars rendered through the embedded-graphics simulator
#[derive(Debug, Parser)]
#[command(name = "micro-wave-simulator")]
#[command(version)]
#[command(
    after_help = "EXAMPLES:\n    # Render the demo waveform to a PNG with the first third played\n    $ micro-wave-simulator --progress 0.33 --snapshot bars.png\n\n    # Click at canvas x = 400, then snapshot\n    $ micro-wave-simulator -p song-data.json --pointer-x 400 --snapshot bars.png"
)]
pub struct Args {
    /// Peak file: audio analysis JSON or a bare JSON array of peaks.
    /// A synthesized demo waveform is used when omitted.
    #[arg(short, long)]
    pub peaks: Option<PathBuf>,

    /// Number of bars to reduce the peaks to
    #[arg(short, long, default_value_t = DEFAULT_BAR_COUNT)]
    pub bars: usize,

    /// Bar width in pixels
    #[arg(long, default_value_t = config::BAR_WIDTH)]
    pub bar_width: f32,

    /// Gap between bars in pixels
    #[arg(long, default_value_t = config::GAP)]
    pub gap: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = config::CANVAS_HEIGHT)]
    pub height: f32,

    /// Initial progress, 0.0 to 1.0
    #[arg(long, default_value_t = 0.0)]
    pub progress: f32,

    /// Replay a click at this canvas x position before rendering
    #[arg(long)]
    pub pointer_x: Option<i32>,

    /// Draw the filled min/max outline instead of bars
    #[arg(long)]
    pub detailed: bool,

    /// Render once and write a PNG instead of opening a window
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,
}

impl Args {
    pub fn layout(&self) -> Result<LayoutConfig, anyhow::Error> {
        LayoutConfig::new(self.bar_width, self.gap, self.height)
            .map_err(|e| anyhow::anyhow!("Invalid layout: {e}"))
    }
}
