/*
 *  constants.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Global constants shared across the matrix, composer and renderer modules.
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

/// Number of logical LED columns on the virtual matrix.
pub const LINE_WIDTH: usize = 32;
/// Number of byte-rows (each byte-row is 8 pixels tall).
pub const DISPLAY_ROWS: usize = 2;
/// Total logical width in pixels.
pub const TOTAL_WIDTH: usize = 32;
/// Total logical height in pixels.
pub const TOTAL_HEIGHT: usize = 16;
/// Length of the packed framebuffer in bytes.
pub const BUF_LEN: usize = LINE_WIDTH * DISPLAY_ROWS;

/// Extra physical pixels between the two logical matrix rows, mimicking the
/// seam of a stacked two-board LED matrix.
pub const MATRIX_ROW_GAP: i32 = 4;

// Color presets (RGB565 format)
pub const COLOR_RED: u16 = 0xF800;
pub const COLOR_GREEN: u16 = 0x07E0;
pub const COLOR_BLUE: u16 = 0x001F;
pub const COLOR_YELLOW: u16 = 0xFFE0;
pub const COLOR_CYAN: u16 = 0x07FF;
pub const COLOR_MAGENTA: u16 = 0xF81F;
pub const COLOR_WHITE: u16 = 0xFFFF;
pub const COLOR_ORANGE: u16 = 0xFD20;
pub const COLOR_DARK_GRAY: u16 = 0x7BEF;
pub const COLOR_LIGHT_GRAY: u16 = 0xC618;
pub const COLOR_BLACK: u16 = 0x0000;

/// Background fill behind and around the simulated LEDs.
pub const BG_COLOR: u16 = COLOR_BLACK;
/// Core tint of a circular LED in its off state.
pub const LED_OFF_CORE_COLOR: u16 = 0x1800;

/// Allowed bounds for the simulated LED pixel size.
pub const LED_SIZE_MIN: u32 = 4;
pub const LED_SIZE_MAX: u32 = 12;
/// Allowed bounds for the spacing between simulated LEDs.
pub const LED_SPACING_MIN: u32 = 0;
pub const LED_SPACING_MAX: u32 = 3;
/// Allowed bounds for the automatic mode-switch interval, in seconds.
pub const MODE_INTERVAL_MIN: u64 = 1;
pub const MODE_INTERVAL_MAX: u64 = 60;

/// Default simulated LED pixel size.
pub const DEFAULT_LED_SIZE: u32 = 9;
/// Default spacing between simulated LEDs.
pub const DEFAULT_LED_SPACING: u32 = 1;
/// Default mode-switch interval in seconds.
pub const DEFAULT_MODE_INTERVAL: u64 = 5;
