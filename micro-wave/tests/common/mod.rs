use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// Heap-backed Rgb888 surface. Pixels outside the buffer are dropped, like a
/// real display driver would.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::WHITE; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        self.index(point).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    pub fn count(&self, color: Rgb888) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x >= self.size.width as i32 || y >= self.size.height as i32 {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

/// A display whose bus has gone away.
pub struct Unplugged;

impl OriginDimensions for Unplugged {
    fn size(&self) -> Size {
        Size::new(64, 64)
    }
}

impl DrawTarget for Unplugged {
    type Color = Rgb888;
    type Error = &'static str;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Err("display unplugged")
    }
}
