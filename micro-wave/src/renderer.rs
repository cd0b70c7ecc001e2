use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use micro_peaks::round_half_up;

#[cfg(feature = "logging")]
use defmt::debug;

use crate::layout::{bar_rect, LayoutConfig};

pub const BACKGROUND: Rgb888 = Rgb888::BLACK;
/// Bars before the progress cursor.
pub const PLAYED: Rgb888 = Rgb888::new(0xf7, 0x3e, 0x00);
/// Bars at or after the progress cursor.
pub const UNPLAYED: Rgb888 = Rgb888::new(0x4a, 0x4a, 0x4a);

pub trait Renderer {
    fn draw<D: DrawTarget<Color = Rgb888>>(
        &self,
        target: &mut D,
        bars: &[u16],
    ) -> Result<(), D::Error>;
}

/// Number of bars drawn in the played color for `progress` in `[0, 1]`.
///
/// Values outside that range saturate at zero or `bar_count`.
pub fn played_count(progress: f32, bar_count: usize) -> usize {
    let cut = round_half_up(progress * bar_count as f32);
    if cut.is_nan() || cut <= 0.0 {
        0
    } else {
        (cut as usize).min(bar_count)
    }
}

/// Bar chart split into played and unplayed halves at `progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBars {
    layout: LayoutConfig,
    progress: f32,
}

impl ProgressBars {
    pub fn new(layout: LayoutConfig, progress: f32) -> Self {
        Self { layout, progress }
    }
}

impl Renderer for ProgressBars {
    /// Clears the whole target, then paints every bar.
    fn draw<D>(&self, target: &mut D, bars: &[u16]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(BACKGROUND)?;

        let played = played_count(self.progress, bars.len());
        let clip = target.bounding_box();

        for (i, &amplitude) in bars.iter().enumerate() {
            let rect = bar_rect(i, amplitude, &self.layout)
                .to_rectangle()
                .intersection(&clip);
            let color = if i < played { PLAYED } else { UNPLAYED };
            target.fill_solid(&rect, color)?;
        }
        Ok(())
    }
}

/// Draws `bars` onto `surface` with the played/unplayed split at `progress`.
///
/// A missing surface is not an error: nothing is drawn and the next call
/// with a surface catches up, since every call repaints from scratch.
pub fn render<D>(
    surface: Option<&mut D>,
    bars: &[u16],
    progress: f32,
    layout: &LayoutConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let Some(target) = surface else {
        #[cfg(feature = "logging")]
        debug!("render: surface unavailable, skipping {} bars", bars.len());
        return Ok(());
    };

    ProgressBars::new(*layout, progress).draw(target, bars)
}
