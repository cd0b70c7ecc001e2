use anyhow::anyhow;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
};
use micro_peaks::bar_amplitudes;
use micro_wave::{played_count, render, DetailedWaveform, LayoutConfig, Scrubber, PLAYED};

use crate::config::MARGIN;
use crate::peaks_file::{Outline, Peaks};

const PAGE: Rgb888 = Rgb888::new(0x1a, 0x1a, 0x1a);
const BORDER: Rgb888 = Rgb888::new(0x60, 0x60, 0x60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bars,
    Detailed,
}

/// The page: one waveform widget with a margin around it.
#[derive(Debug)]
pub struct Scene {
    bars: Vec<u16>,
    outline: Option<Outline>,
    detailed: Option<DetailedWaveform>,
    layout: LayoutConfig,
    mode: Mode,
    scrubber: Scrubber,
}

impl Scene {
    /// Reduces `peaks` to `bar_count` bars once; later draws reuse them.
    pub fn new(
        peaks: Peaks,
        bar_count: usize,
        layout: LayoutConfig,
        mode: Mode,
    ) -> Result<Self, anyhow::Error> {
        let bars = bar_amplitudes(&peaks.raw, bar_count)
            .map_err(|e| anyhow!("Cannot draw this waveform: {e}"))?;

        let detailed = match (&peaks.outline, mode) {
            (Some(outline), Mode::Detailed) => Some(
                DetailedWaveform::new(outline.bits)
                    .map_err(|e| anyhow!("Cannot draw the outline: {e}"))?,
            ),
            (None, Mode::Detailed) => {
                return Err(anyhow!(
                    "Detailed view needs an analysis file with min/max pairs"
                ))
            }
            (_, Mode::Bars) => None,
        };

        let canvas_size = match mode {
            Mode::Bars => layout.canvas_size(bars.len()),
            Mode::Detailed => Size::new(
                peaks.outline.as_ref().map_or(0, Outline::len) as u32,
                layout.canvas_size(0).height,
            ),
        };
        let canvas = Rectangle::new(Point::new(MARGIN as i32, MARGIN as i32), canvas_size);

        tracing::info!(
            "Scene: {} bars, canvas {}x{}, {:?} view",
            bars.len(),
            canvas_size.width,
            canvas_size.height,
            mode
        );

        Ok(Self {
            bars,
            outline: peaks.outline,
            detailed,
            layout,
            mode,
            scrubber: Scrubber::new(canvas),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bars(&self) -> &[u16] {
        &self.bars
    }

    pub fn canvas(&self) -> Rectangle {
        self.scrubber.bounds()
    }

    pub fn display_size(&self) -> Size {
        self.canvas().size + Size::new(MARGIN * 2, MARGIN * 2)
    }

    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }

    pub fn scrubber_mut(&mut self) -> &mut Scrubber {
        &mut self.scrubber
    }

    /// Repaints the whole page for the current progress.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        display.clear(PAGE)?;

        let canvas = self.canvas();
        let progress = self.scrubber.progress();
        {
            let mut target = display.cropped(&canvas);
            match (&self.detailed, &self.outline) {
                (Some(detailed), Some(outline)) => {
                    detailed.draw(&mut target, &outline.min, &outline.max)?;

                    // cropped targets do not clip, keep the cursor on the last column
                    let last = outline.len().saturating_sub(1);
                    let x = played_count(progress, outline.len()).min(last) as i32;
                    let bottom = canvas.size.height.saturating_sub(1) as i32;
                    Line::new(Point::new(x, 0), Point::new(x, bottom))
                        .into_styled(PrimitiveStyle::with_stroke(PLAYED, 1))
                        .draw(&mut target)?;
                }
                _ => render(Some(&mut target), &self.bars, progress, &self.layout)?,
            }
        }

        Rectangle::new(
            canvas.top_left - Point::new(2, 2),
            canvas.size + Size::new(4, 4),
        )
        .into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_color(BORDER)
                .stroke_width(1)
                .build(),
        )
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peaks_file::demo;
    use embedded_graphics_simulator::SimulatorDisplay;
    use micro_wave::{bar_rect, UNPLAYED};

    fn bars_scene() -> Scene {
        Scene::new(demo(), 40, LayoutConfig::default(), Mode::Bars).unwrap()
    }

    #[test]
    fn test_display_size_includes_margin() {
        let scene = bars_scene();
        assert_eq!(scene.bars().len(), 40);
        assert_eq!(scene.canvas().size, Size::new(360, 120));
        assert_eq!(scene.display_size(), Size::new(420, 180));
    }

    #[test]
    fn test_click_recolors_bars() {
        let mut scene = bars_scene();
        let canvas = scene.canvas();
        let click = canvas.top_left + Point::new(canvas.size.width as i32 / 2, 10);
        assert_eq!(scene.scrubber_mut().pointer_down(click), Some(0.5));
        scene.scrubber_mut().pointer_up();

        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(scene.display_size());
        scene.draw(&mut display).unwrap();

        let mid = canvas.top_left.y + canvas.size.height as i32 / 2;
        let layout = LayoutConfig::default();
        let first = bar_rect(0, scene.bars()[0], &layout);
        let last = bar_rect(39, scene.bars()[39], &layout);
        assert_eq!(
            display.get_pixel(Point::new(canvas.top_left.x + first.x, mid)),
            PLAYED
        );
        assert_eq!(
            display.get_pixel(Point::new(canvas.top_left.x + last.x, mid)),
            UNPLAYED
        );
        assert_eq!(display.get_pixel(Point::zero()), PAGE);
    }

    #[test]
    fn test_detailed_needs_outline() {
        let peaks = Peaks {
            raw: vec![1.0, 2.0],
            outline: None,
        };
        assert!(Scene::new(peaks, 10, LayoutConfig::default(), Mode::Detailed).is_err());
    }

    #[test]
    fn test_silent_peaks_are_rejected() {
        let peaks = Peaks {
            raw: vec![0.0; 64],
            outline: None,
        };
        let err = Scene::new(peaks, 10, LayoutConfig::default(), Mode::Bars).unwrap_err();
        assert!(err.to_string().contains("silent"));
    }

    #[test]
    fn test_detailed_canvas_is_one_column_per_frame() {
        let scene = Scene::new(demo(), 10, LayoutConfig::default(), Mode::Detailed).unwrap();
        assert_eq!(scene.canvas().size, Size::new(crate::config::DEMO_FRAMES as u32, 120));

        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(scene.display_size());
        scene.draw(&mut display).unwrap();
    }
}
