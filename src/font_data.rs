/*
 *  font_data.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Packed column-major bitmap fonts.
 *
 *  Blob layout: [cell_width, height_px, first_char, last_char] followed by
 *  one record per character: a width byte, then width * height_bytes data
 *  bytes. Data is column-major; within each byte the least significant bit
 *  is the topmost row of that byte-row. Glyphs taller than 8 pixels store
 *  the top byte-row first, then the bottom.
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

/// Proportional 3x7 text font covering ' ' through 'Z'.
pub static FONT_3X7: &[u8] = &[
    3, 7, 32, 90,
    // ' '
    2, 0x00, 0x00,
    // '!'
    1, 0x5F,
    // '"'
    3, 0x03, 0x00, 0x03,
    // '#'
    3, 0x7F, 0x14, 0x7F,
    // '$'
    3, 0x2E, 0x6B, 0x3A,
    // '%'
    3, 0x23, 0x1C, 0x62,
    // '&'
    3, 0x36, 0x49, 0x76,
    // '\''
    1, 0x03,
    // '('
    2, 0x3E, 0x41,
    // ')'
    2, 0x41, 0x3E,
    // '*'
    3, 0x2A, 0x1C, 0x2A,
    // '+'
    3, 0x08, 0x3E, 0x08,
    // ','
    1, 0x60,
    // '-'
    3, 0x08, 0x08, 0x08,
    // '.'
    1, 0x40,
    // '/'
    3, 0x70, 0x0C, 0x03,
    // '0'
    3, 0x7F, 0x41, 0x7F,
    // '1'
    3, 0x42, 0x7F, 0x40,
    // '2'
    3, 0x79, 0x49, 0x4F,
    // '3'
    3, 0x49, 0x49, 0x7F,
    // '4'
    3, 0x0F, 0x08, 0x7F,
    // '5'
    3, 0x4F, 0x49, 0x79,
    // '6'
    3, 0x7F, 0x49, 0x79,
    // '7'
    3, 0x01, 0x01, 0x7F,
    // '8'
    3, 0x7F, 0x49, 0x7F,
    // '9'
    3, 0x4F, 0x49, 0x7F,
    // ':'
    1, 0x36,
    // ';'
    1, 0x66,
    // '<'
    3, 0x08, 0x14, 0x22,
    // '='
    3, 0x14, 0x14, 0x14,
    // '>'
    3, 0x22, 0x14, 0x08,
    // '?'
    3, 0x01, 0x59, 0x07,
    // '@'
    3, 0x3E, 0x41, 0x5D,
    // 'A'
    3, 0x7E, 0x09, 0x7E,
    // 'B'
    3, 0x7F, 0x49, 0x36,
    // 'C'
    3, 0x3E, 0x41, 0x41,
    // 'D'
    3, 0x7F, 0x41, 0x3E,
    // 'E'
    3, 0x7F, 0x49, 0x41,
    // 'F'
    3, 0x7F, 0x09, 0x01,
    // 'G'
    3, 0x3E, 0x41, 0x79,
    // 'H'
    3, 0x7F, 0x08, 0x7F,
    // 'I'
    3, 0x41, 0x7F, 0x41,
    // 'J'
    3, 0x30, 0x40, 0x3F,
    // 'K'
    3, 0x7F, 0x1C, 0x63,
    // 'L'
    3, 0x7F, 0x40, 0x40,
    // 'M'
    3, 0x7F, 0x06, 0x7F,
    // 'N'
    3, 0x7F, 0x1C, 0x7F,
    // 'O'
    3, 0x3E, 0x41, 0x3E,
    // 'P'
    3, 0x7F, 0x09, 0x0F,
    // 'Q'
    3, 0x3E, 0x61, 0x5E,
    // 'R'
    3, 0x7F, 0x09, 0x77,
    // 'S'
    3, 0x4F, 0x49, 0x79,
    // 'T'
    3, 0x01, 0x7F, 0x01,
    // 'U'
    3, 0x3F, 0x40, 0x3F,
    // 'V'
    3, 0x1F, 0x60, 0x1F,
    // 'W'
    3, 0x7F, 0x30, 0x7F,
    // 'X'
    3, 0x63, 0x1C, 0x63,
    // 'Y'
    3, 0x07, 0x78, 0x07,
    // 'Z'
    3, 0x71, 0x49, 0x47,
];

/// Tall 5x16 seven-segment style digits plus ':'.
pub static DIGITS_5X16: &[u8] = &[
    5, 16, 48, 58,
    // '0'
    5, 0xFF, 0xFF, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0xFF, 0xFF,
    // '1'
    5, 0x04, 0x80, 0x02, 0x80, 0xFF, 0xFF, 0x00, 0x80, 0x00, 0x80,
    // '2'
    5, 0x81, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0x81,
    // '3'
    5, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0xFF,
    // '4'
    5, 0xFF, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0xFF, 0xFF,
    // '5'
    5, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF,
    // '6'
    5, 0xFF, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF,
    // '7'
    5, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0xFF, 0xFF,
    // '8'
    5, 0xFF, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0xFF,
    // '9'
    5, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0xFF,
    // ':'
    2, 0x30, 0x0C, 0x30, 0x0C,
];

/// Medium 5x8 digits plus ':'.
pub static DIGITS_5X8: &[u8] = &[
    5, 8, 48, 58,
    // '0'
    5, 0xFF, 0x81, 0x81, 0x81, 0xFF,
    // '1'
    5, 0x84, 0x82, 0xFF, 0x80, 0x80,
    // '2'
    5, 0xF9, 0x99, 0x99, 0x99, 0x9F,
    // '3'
    5, 0x99, 0x99, 0x99, 0x99, 0xFF,
    // '4'
    5, 0x1F, 0x18, 0x18, 0x18, 0xFF,
    // '5'
    5, 0x9F, 0x99, 0x99, 0x99, 0xF9,
    // '6'
    5, 0xFF, 0x99, 0x99, 0x99, 0xF9,
    // '7'
    5, 0x01, 0x01, 0x01, 0x01, 0xFF,
    // '8'
    5, 0xFF, 0x99, 0x99, 0x99, 0xFF,
    // '9'
    5, 0x9F, 0x99, 0x99, 0x99, 0xFF,
    // ':'
    2, 0x24, 0x24,
];

/// Tiny 3x5 digits plus ':' used for the seconds readout.
pub static DIGITS_3X5: &[u8] = &[
    3, 5, 48, 58,
    // '0'
    3, 0x1F, 0x11, 0x1F,
    // '1'
    3, 0x02, 0x1F, 0x00,
    // '2'
    3, 0x1D, 0x15, 0x17,
    // '3'
    3, 0x15, 0x15, 0x1F,
    // '4'
    3, 0x07, 0x04, 0x1F,
    // '5'
    3, 0x17, 0x15, 0x1D,
    // '6'
    3, 0x1F, 0x15, 0x1D,
    // '7'
    3, 0x01, 0x01, 0x1F,
    // '8'
    3, 0x1F, 0x15, 0x1F,
    // '9'
    3, 0x17, 0x15, 0x1F,
    // ':'
    1, 0x0A,
];
