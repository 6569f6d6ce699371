/*
 *  text.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Glyph rasterizer: draws packed font columns into the matrix buffer.
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

use crate::fonts::Font;
use crate::matrix::MatrixBuffer;

/// Draws `c` with its left edge at column `x`, top at byte-row `row`.
///
/// Columns falling outside the matrix are clipped silently. One zero
/// column is written past the glyph as the inter-character eraser, so
/// redrawing text over stale pixels needs no explicit clear. Returns the
/// glyph's advance width even when every column was clipped; returns 0
/// for characters the font does not cover.
pub fn draw_char(fb: &mut MatrixBuffer, x: i32, row: i32, c: char, font: &Font) -> i32 {
    let Some(glyph) = font.glyph(c) else {
        return 0;
    };
    let hb = font.height_bytes() as i32;
    let w = glyph.width as i32;
    for j in 0..hb {
        for i in 0..w {
            let bits = glyph.data[(i * hb + j) as usize];
            fb.store_column(x + i, row + j, bits);
        }
        // eraser column between characters
        fb.store_column(x + w, row + j, 0);
    }
    w
}

/// Pixel width of `s` with 1px inter-character gaps, trailing gap
/// excluded. The empty string yields -1; callers centering text must
/// guard for it.
pub fn string_width(s: &str, font: &Font) -> i32 {
    let mut width = -1i32;
    for c in s.chars() {
        width += font.glyph_width(c) as i32 + 1;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{DIGITS_5X16, FONT_3X7};

    #[test]
    fn draws_columns_with_lsb_on_top() {
        let mut fb = MatrixBuffer::new();
        let w = draw_char(&mut fb, 0, 0, '7', &FONT_3X7);
        assert_eq!(w, 3);
        // '7' columns are [0x01, 0x01, 0x7F]
        assert!(fb.test_pixel(0, 0));
        assert!(!fb.test_pixel(0, 1));
        assert!(fb.test_pixel(2, 0));
        assert!(fb.test_pixel(2, 6));
        assert!(!fb.test_pixel(2, 7));
        // eraser column
        assert!(!fb.test_pixel(3, 0));
    }

    #[test]
    fn tall_glyphs_span_both_byte_rows() {
        let mut fb = MatrixBuffer::new();
        let w = draw_char(&mut fb, 0, 0, '0', &DIGITS_5X16);
        assert_eq!(w, 5);
        for y in 0..16 {
            assert!(fb.test_pixel(0, y), "left bar y={y}");
            assert!(fb.test_pixel(4, y), "right bar y={y}");
        }
        assert!(fb.test_pixel(2, 0));
        assert!(fb.test_pixel(2, 15));
        assert!(!fb.test_pixel(2, 7));
    }

    #[test]
    fn eraser_column_clears_stale_pixels() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(3, 2, true);
        draw_char(&mut fb, 0, 0, '1', &FONT_3X7);
        assert!(!fb.test_pixel(3, 2));
    }

    #[test]
    fn clipped_draw_still_returns_the_advance_width() {
        let mut fb = MatrixBuffer::new();
        assert_eq!(draw_char(&mut fb, 40, 0, '8', &FONT_3X7), 3);
        assert_eq!(fb.as_bytes(), &[0u8; 64]);
        // partial clip at the right edge keeps the visible columns
        assert_eq!(draw_char(&mut fb, 30, 0, '8', &FONT_3X7), 3);
        assert!(fb.test_pixel(30, 0));
        assert!(fb.test_pixel(31, 0));
    }

    #[test]
    fn unknown_characters_draw_nothing_and_advance_zero() {
        let mut fb = MatrixBuffer::new();
        assert_eq!(draw_char(&mut fb, 0, 0, 'x', &FONT_3X7), 0);
        assert_eq!(fb.as_bytes(), &[0u8; 64]);
    }

    #[test]
    fn string_width_sums_glyphs_and_gaps() {
        // '1','2' are 3 wide: 3 + 1 + 3
        assert_eq!(string_width("12", &FONT_3X7), 7);
        // ':' is 1 wide
        assert_eq!(string_width("1:2", &FONT_3X7), 9);
        assert_eq!(string_width("", &FONT_3X7), -1);
    }
}
