/*
 *  panel.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  In-memory RGB565 panel. The headless daemon renders into one of these,
 *  and the emulator blits it to the window surface each frame.
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// A plain width x height RGB565 pixel buffer implementing `DrawTarget`.
pub struct PanelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl PanelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the panel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Expands the panel into an RGBA8 byte frame (e.g. a `pixels` surface).
    /// `frame` must hold exactly width * height * 4 bytes.
    pub fn write_rgba(&self, frame: &mut [u8]) {
        for (dst, src) in frame.chunks_exact_mut(4).zip(self.pixels.iter()) {
            // widen 5/6/5 channels to 8 bits
            let r = src.r() << 3 | src.r() >> 2;
            let g = src.g() << 2 | src.g() >> 4;
            let b = src.b() << 3 | src.b() >> 2;
            dst.copy_from_slice(&[r, g, b, 0xFF]);
        }
    }
}

impl OriginDimensions for PanelBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PanelBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
            {
                self.pixels[(point.y as u32 * self.width + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_in_bounds_and_clips_the_rest() {
        let mut panel = PanelBuffer::new(4, 3);
        panel
            .draw_iter([
                Pixel(Point::new(1, 1), Rgb565::RED),
                Pixel(Point::new(-1, 0), Rgb565::GREEN),
                Pixel(Point::new(4, 0), Rgb565::GREEN),
                Pixel(Point::new(0, 3), Rgb565::GREEN),
            ])
            .unwrap();
        assert_eq!(panel.pixel(1, 1), Some(Rgb565::RED));
        assert_eq!(panel.pixel(0, 0), Some(Rgb565::BLACK));
        assert_eq!(panel.pixel(4, 0), None);
    }

    #[test]
    fn rgba_export_widens_channels() {
        let mut panel = PanelBuffer::new(2, 1);
        panel.draw_iter([Pixel(Point::new(0, 0), Rgb565::WHITE)]).unwrap();
        let mut frame = [0u8; 8];
        panel.write_rgba(&mut frame);
        assert_eq!(&frame[0..4], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&frame[4..8], &[0x00, 0x00, 0x00, 0xFF]);
    }
}
