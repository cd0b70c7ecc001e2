use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};
use micro_peaks::round_half_up;

use crate::layout::LayoutError;
use crate::renderer::BACKGROUND;

pub const DETAIL: Rgb888 = Rgb888::new(0xff, 0x73, 0x00);

/// Filled min/max outline of the raw peaks, one column per peak frame.
///
/// Unlike the bar chart this draws the signed peaks directly: the area
/// between each frame's max and min sample is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedWaveform {
    bits: u8,
}

impl DetailedWaveform {
    /// `bits` is the sample depth of the peak data, 8 or 16.
    pub fn new(bits: u8) -> Result<Self, LayoutError> {
        match bits {
            8 | 16 => Ok(Self { bits }),
            other => Err(LayoutError::BitDepth(other)),
        }
    }

    /// Maps a signed sample onto a row; full scale positive lands near the top.
    pub fn scale_y(&self, amplitude: i32, height: u32) -> i32 {
        let range = (1u32 << self.bits) as f32;
        let offset = range / 2.0;
        let height = height as f32;
        round_half_up(height - ((amplitude as f32 + offset) * height) / range) as i32
    }

    pub fn draw<D>(&self, target: &mut D, min: &[i32], max: &[i32]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(BACKGROUND)?;

        let clip = target.bounding_box();
        let height = clip.size.height;

        for (x, (&low, &high)) in min.iter().zip(max.iter()).enumerate() {
            let a = self.scale_y(high, height);
            let b = self.scale_y(low, height);
            let (top, bottom) = if a <= b { (a, b) } else { (b, a) };

            let column = Rectangle::new(
                Point::new(x as i32, top),
                Size::new(1, (bottom - top) as u32 + 1),
            )
            .intersection(&clip);
            target.fill_solid(&column, DETAIL)?;
        }
        Ok(())
    }
}
