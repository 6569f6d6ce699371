/*
 *  matrix.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Packed 32x16 virtual LED framebuffer.
 *
 *  The matrix is stored as 64 bytes: 32 columns by 2 byte-rows. Byte
 *  `x + 32 * row` holds the 8 pixels of column `x` in logical row band
 *  `row`, least significant bit on top. All writes outside the matrix
 *  are silently dropped so callers can clip by simply drawing.
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

use crate::constants::{BUF_LEN, DISPLAY_ROWS, LINE_WIDTH, TOTAL_HEIGHT, TOTAL_WIDTH};

/// The in-memory 32x16 one-bit framebuffer every frame is composed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBuffer {
    bytes: [u8; BUF_LEN],
}

impl Default for MatrixBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixBuffer {
    pub fn new() -> Self {
        Self { bytes: [0; BUF_LEN] }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Flips every pixel.
    pub fn invert(&mut self) {
        for b in self.bytes.iter_mut() {
            *b = !*b;
        }
    }

    /// Shifts the packed buffer one byte to the left. The shift is flat
    /// across both byte-rows, so column 0 of the bottom band carries
    /// into column 31 of the top band and the final column blanks.
    pub fn scroll_left(&mut self) {
        self.bytes.copy_within(1.., 0);
        self.bytes[BUF_LEN - 1] = 0;
    }

    /// Sets or clears a single pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= TOTAL_WIDTH as i32 || y >= TOTAL_HEIGHT as i32 {
            return;
        }
        let idx = x as usize + LINE_WIDTH * (y as usize / 8);
        let mask = 1u8 << (y as usize % 8);
        if on {
            self.bytes[idx] |= mask;
        } else {
            self.bytes[idx] &= !mask;
        }
    }

    /// Reads a single pixel. Out-of-range coordinates read as off.
    pub fn test_pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= TOTAL_WIDTH as i32 || y >= TOTAL_HEIGHT as i32 {
            return false;
        }
        let idx = x as usize + LINE_WIDTH * (y as usize / 8);
        self.bytes[idx] & (1u8 << (y as usize % 8)) != 0
    }

    /// Overwrites one packed column byte. Used by the glyph rasterizer;
    /// out-of-range columns or byte-rows are dropped.
    pub fn store_column(&mut self, x: i32, byte_row: i32, bits: u8) {
        if x < 0 || byte_row < 0 || x >= LINE_WIDTH as i32 || byte_row >= DISPLAY_ROWS as i32 {
            return;
        }
        self.bytes[x as usize + LINE_WIDTH * byte_row as usize] = bits;
    }

    /// Raw packed bytes, column-major within each byte-row.
    pub fn as_bytes(&self) -> &[u8; BUF_LEN] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_covers_every_pixel_exactly_once() {
        for y in 0..TOTAL_HEIGHT as i32 {
            for x in 0..TOTAL_WIDTH as i32 {
                let mut fb = MatrixBuffer::new();
                fb.set_pixel(x, y, true);
                let idx = x as usize + LINE_WIDTH * (y as usize / 8);
                let expect = 1u8 << (y as usize % 8);
                for (i, b) in fb.as_bytes().iter().enumerate() {
                    if i == idx {
                        assert_eq!(*b, expect, "pixel ({x},{y})");
                    } else {
                        assert_eq!(*b, 0, "pixel ({x},{y}) leaked into byte {i}");
                    }
                }
                assert!(fb.test_pixel(x, y));
                fb.set_pixel(x, y, false);
                assert!(!fb.test_pixel(x, y));
            }
        }
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, -1, true);
        fb.set_pixel(32, 0, true);
        fb.set_pixel(0, 16, true);
        fb.store_column(-1, 0, 0xFF);
        fb.store_column(32, 1, 0xFF);
        fb.store_column(0, 2, 0xFF);
        assert_eq!(fb.as_bytes(), &[0u8; BUF_LEN]);
        assert!(!fb.test_pixel(32, 0));
        assert!(!fb.test_pixel(0, 16));
    }

    #[test]
    fn invert_is_an_involution() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(3, 5, true);
        fb.set_pixel(31, 15, true);
        let before = fb.clone();
        fb.invert();
        assert!(!fb.test_pixel(3, 5));
        assert!(fb.test_pixel(0, 0));
        fb.invert();
        assert_eq!(fb, before);
    }

    #[test]
    fn scroll_left_moves_columns_and_blanks_the_last() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(5, 2, true);
        fb.set_pixel(31, 12, true);
        fb.scroll_left();
        assert!(fb.test_pixel(4, 2));
        assert!(!fb.test_pixel(5, 2));
        assert!(fb.test_pixel(30, 12));
        assert!(!fb.test_pixel(31, 12));
        fb.scroll_left();
        assert!(!fb.test_pixel(31, 12));
    }

    #[test]
    fn scroll_left_carries_the_bottom_band_into_the_top() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 8, true);
        fb.scroll_left();
        assert!(fb.test_pixel(31, 0));
        assert!(!fb.test_pixel(0, 8));
        fb.scroll_left();
        assert!(fb.test_pixel(30, 0));
        assert!(!fb.test_pixel(31, 0));
    }

    #[test]
    fn clear_blanks_everything() {
        let mut fb = MatrixBuffer::new();
        fb.invert();
        fb.clear();
        assert_eq!(fb.as_bytes(), &[0u8; BUF_LEN]);
    }
}
