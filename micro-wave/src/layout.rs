use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use micro_peaks::round_half_up;
#[allow(unused_imports)]
use micromath::F32Ext;
use thiserror::Error;

/// Amplitude that maps to a full canvas height is `2 * HEIGHT_DIVISOR`,
/// so a normalized amplitude of 100 exactly fills the canvas.
pub const HEIGHT_DIVISOR: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("bar width must be a positive finite number, got {0}")]
    BarWidth(f32),

    #[error("gap must be a non-negative finite number, got {0}")]
    Gap(f32),

    #[error("canvas height must be a positive finite number, got {0}")]
    CanvasHeight(f32),

    #[error("peak bit depth must be 8 or 16, got {0}")]
    BitDepth(u8),
}

/// Bar geometry shared by layout and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    bar_width: f32,
    gap: f32,
    canvas_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bar_width: 3.0,
            gap: 6.0,
            canvas_height: 120.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(bar_width: f32, gap: f32, canvas_height: f32) -> Result<Self, LayoutError> {
        if !(bar_width.is_finite() && bar_width > 0.0) {
            return Err(LayoutError::BarWidth(bar_width));
        }
        if !(gap.is_finite() && gap >= 0.0) {
            return Err(LayoutError::Gap(gap));
        }
        if !(canvas_height.is_finite() && canvas_height > 0.0) {
            return Err(LayoutError::CanvasHeight(canvas_height));
        }
        Ok(Self {
            bar_width,
            gap,
            canvas_height,
        })
    }

    pub fn bar_width(&self) -> f32 {
        self.bar_width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    /// Horizontal distance from one bar's left edge to the next.
    pub fn pitch(&self) -> f32 {
        self.bar_width + self.gap
    }

    /// Surface size that fits `bar_count` bars.
    pub fn canvas_size(&self, bar_count: usize) -> Size {
        Size::new(
            (bar_count as f32 * self.pitch()).floor() as u32,
            self.canvas_height.floor() as u32,
        )
    }
}

/// Where one bar lands on the canvas.
///
/// `y` may be negative and `height` may exceed the canvas for amplitudes
/// above 100; painting clips to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: i32,
    pub y: i32,
    pub width: f32,
    pub height: u32,
}

impl BarRect {
    /// Snaps the bar to whole pixels.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x, self.y),
            Size::new(round_half_up(self.width) as u32, self.height),
        )
    }
}

/// Lays out bar `index` with the given amplitude, vertically centered.
pub fn bar_rect(index: usize, amplitude: u16, layout: &LayoutConfig) -> BarRect {
    let height = round_half_up(amplitude as f32 * (layout.canvas_height / HEIGHT_DIVISOR));
    let x = round_half_up(index as f32 * layout.pitch());
    let y = round_half_up((layout.canvas_height - height) / 2.0);

    BarRect {
        x: x as i32,
        y: y as i32,
        width: layout.bar_width,
        height: height as u32,
    }
}
