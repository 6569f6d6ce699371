/*
 *  fonts.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Typed access to the packed font blobs in `font_data`.
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

use crate::font_data;

/// A packed column-major bitmap font.
///
/// Records are variable length, so glyph lookup walks the blob from the
/// first character. The fonts are small enough that the scan is free in
/// practice and it keeps proportional and fixed-width blobs on one path.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    data: &'static [u8],
}

/// One located glyph: its advance width and packed column bytes.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub width: u32,
    pub data: &'static [u8],
}

impl Font {
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Nominal cell width from the blob header.
    pub fn cell_width(&self) -> u32 {
        self.data[0] as u32
    }

    /// Glyph height in pixels.
    pub fn height_px(&self) -> u32 {
        self.data[1] as u32
    }

    /// Number of byte-rows each column occupies.
    pub fn height_bytes(&self) -> usize {
        self.data[1].div_ceil(8) as usize
    }

    pub fn first_char(&self) -> u32 {
        self.data[2] as u32
    }

    pub fn last_char(&self) -> u32 {
        self.data[3] as u32
    }

    /// Locates the record for `c`, or `None` when outside the font range.
    pub fn glyph(&self, c: char) -> Option<Glyph> {
        let code = c as u32;
        if code < self.first_char() || code > self.last_char() {
            return None;
        }
        let hb = self.height_bytes();
        let mut off = 4usize;
        for _ in self.first_char()..code {
            let w = self.data[off] as usize;
            off += w * hb + 1;
        }
        let w = self.data[off] as usize;
        Some(Glyph {
            width: w as u32,
            data: &self.data[off + 1..off + 1 + w * hb],
        })
    }

    /// Advance width of `c`, 0 when the font has no glyph for it.
    pub fn glyph_width(&self, c: char) -> u32 {
        self.glyph(c).map(|g| g.width).unwrap_or(0)
    }
}

pub const FONT_3X7: Font = Font::new(font_data::FONT_3X7);
pub const DIGITS_5X16: Font = Font::new(font_data::DIGITS_5X16);
pub const DIGITS_5X8: Font = Font::new(font_data::DIGITS_5X8);
pub const DIGITS_3X5: Font = Font::new(font_data::DIGITS_3X5);
