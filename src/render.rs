/*
 *  render.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Diffing physical renderer: paints the 32x16 matrix as simulated LEDs
 *  onto any RGB565 DrawTarget, redrawing only the byte columns that
 *  changed since the previous frame.
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

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::constants::{
    BG_COLOR, BUF_LEN, DISPLAY_ROWS, LED_OFF_CORE_COLOR, LINE_WIDTH, MATRIX_ROW_GAP, TOTAL_HEIGHT,
    TOTAL_WIDTH,
};
use crate::matrix::MatrixBuffer;
use crate::theme::{DisplayStyle, DisplayTheme, Rotation};

/// Per-byte shadow of the last frame pushed to the panel.
#[derive(Debug)]
pub struct RenderCache {
    last: [u8; BUF_LEN],
    full_redraw: bool,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCache {
    /// Starts invalidated so the first refresh paints everything.
    pub fn new() -> Self {
        Self {
            last: [0xFF; BUF_LEN],
            full_redraw: true,
        }
    }

    /// Forces the next refresh to clear the panel and repaint every cell.
    /// Raised by any accepted settings change.
    pub fn invalidate(&mut self) {
        self.last.fill(0xFF);
        self.full_redraw = true;
    }
}

/// Dims an RGB565 color by dividing each channel by `factor + 1`.
pub fn dim_rgb565(color: u16, factor: u16) -> u16 {
    let r = (color >> 11) & 0x1F;
    let g = (color >> 5) & 0x3F;
    let b = color & 0x1F;
    ((r / (factor + 1)) << 11) | ((g / (factor + 1)) << 5) | (b / (factor + 1))
}

fn rgb(c: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(c))
}

/// Physical pixel extent of the whole matrix for a theme, row gap included.
pub fn panel_extent(theme: &DisplayTheme) -> (u32, u32) {
    let pitch = theme.led_size + theme.led_spacing;
    let w = pitch * TOTAL_WIDTH as u32 - theme.led_spacing;
    let h = pitch * TOTAL_HEIGHT as u32 - theme.led_spacing + MATRIX_ROW_GAP as u32;
    (w, h)
}

struct Geometry {
    pitch: i32,
    offset_x: i32,
    offset_y: i32,
}

impl Geometry {
    fn new(theme: &DisplayTheme, target: Size) -> Self {
        let pitch = (theme.led_size + theme.led_spacing) as i32;
        let (w, h) = panel_extent(theme);
        Self {
            pitch,
            offset_x: ((target.width as i32 - w as i32) / 2).max(0),
            offset_y: ((target.height as i32 - h as i32) / 2).max(0),
        }
    }
}

/// Pushes `fb` to the panel. Unchanged byte columns are skipped unless
/// the cache is invalidated, in which case the target is cleared to the
/// background first and all 512 cells repaint. Returns the number of
/// logical LED cells drawn.
pub fn refresh<D>(
    target: &mut D,
    fb: &MatrixBuffer,
    cache: &mut RenderCache,
    theme: &DisplayTheme,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let full = cache.full_redraw;
    if full {
        target.clear(rgb(BG_COLOR))?;
    }
    let geom = Geometry::new(theme, target.bounding_box().size);
    let bytes = fb.as_bytes();
    let mut drawn = 0usize;
    for row in 0..DISPLAY_ROWS {
        for x in 0..LINE_WIDTH {
            let idx = x + LINE_WIDTH * row;
            let bits = bytes[idx];
            if !full && bits == cache.last[idx] {
                continue;
            }
            cache.last[idx] = bits;
            for bit in 0..8 {
                let y = (row * 8 + bit) as i32;
                let lit = bits & (1 << bit) != 0;
                draw_led(target, theme, &geom, x as i32, y, lit)?;
                drawn += 1;
            }
        }
    }
    cache.full_redraw = false;
    Ok(drawn)
}

fn draw_led<D>(
    target: &mut D,
    theme: &DisplayTheme,
    geom: &Geometry,
    x: i32,
    y: i32,
    lit: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (cx, cy) = match theme.rotation {
        Rotation::Normal => (x, y),
        Rotation::Flipped => (TOTAL_WIDTH as i32 - 1 - x, TOTAL_HEIGHT as i32 - 1 - y),
    };
    let gap = if cy >= 8 { MATRIX_ROW_GAP } else { 0 };
    let sx = geom.offset_x + cx * geom.pitch;
    let sy = geom.offset_y + cy * geom.pitch + gap;
    let s = theme.led_size as i32;
    let cell = Rectangle::new(Point::new(sx, sy), Size::new(s as u32, s as u32));

    match theme.style {
        DisplayStyle::Blocks => {
            let color = if lit { theme.on_color } else { BG_COLOR };
            cell.into_styled(PrimitiveStyle::with_fill(rgb(color))).draw(target)
        }
        DisplayStyle::Led if lit => {
            // concentric squared-distance rings, no floats
            let body = (s - 2) * (s - 2);
            let ring = s * s;
            let pixels = (0..s).flat_map(|py| (0..s).map(move |px| (px, py))).map(|(px, py)| {
                let dx = px * 2 - s + 1;
                let dy = py * 2 - s + 1;
                let d = dx * dx + dy * dy;
                let c = if d <= body {
                    theme.on_color
                } else if d <= ring {
                    theme.surround_color
                } else {
                    BG_COLOR
                };
                Pixel(Point::new(sx + px, sy + py), rgb(c))
            });
            target.draw_iter(pixels)
        }
        DisplayStyle::Led => {
            cell.into_styled(PrimitiveStyle::with_fill(rgb(BG_COLOR))).draw(target)?;
            let core = (s - 4) * (s - 4);
            let housing = (s - 2) * (s - 2);
            let dimmed = dim_rgb565(theme.surround_color, 7);
            let pixels = (1..s - 1)
                .flat_map(|py| (1..s - 1).map(move |px| (px, py)))
                .filter_map(|(px, py)| {
                    let dx = px * 2 - s + 1;
                    let dy = py * 2 - s + 1;
                    let d = dx * dx + dy * dy;
                    let c = if d <= core {
                        LED_OFF_CORE_COLOR
                    } else if d <= housing {
                        dimmed
                    } else {
                        return None;
                    };
                    Some(Pixel(Point::new(sx + px, sy + py), rgb(c)))
                });
            target.draw_iter(pixels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// DrawTarget that records pixel writes per physical coordinate.
    struct CountingPanel {
        size: Size,
        writes: usize,
        lit: std::collections::HashMap<(i32, i32), u16>,
    }

    impl CountingPanel {
        fn new(w: u32, h: u32) -> Self {
            Self {
                size: Size::new(w, h),
                writes: 0,
                lit: std::collections::HashMap::new(),
            }
        }
    }

    impl OriginDimensions for CountingPanel {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for CountingPanel {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                self.writes += 1;
                self.lit.insert((p.x, p.y), RawU16::from(c).into_inner());
            }
            Ok(())
        }
    }

    fn theme() -> DisplayTheme {
        DisplayTheme::default()
    }

    fn sized_panel(theme: &DisplayTheme) -> CountingPanel {
        let (w, h) = panel_extent(theme);
        CountingPanel::new(w, h)
    }

    #[test]
    fn dim_divides_each_channel() {
        assert_eq!(dim_rgb565(0xFFFF, 7), ((31 / 8) << 11 | (63 / 8) << 5 | 31 / 8) as u16);
        assert_eq!(dim_rgb565(0x0000, 7), 0);
        assert_eq!(dim_rgb565(0xF800, 0), 0xF800);
    }

    #[test]
    fn first_refresh_draws_all_512_cells() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let fb = MatrixBuffer::new();
        let drawn = refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        assert_eq!(drawn, 512);
    }

    #[test]
    fn steady_state_draws_nothing() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(4, 4, true);
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let before = panel.writes;
        let drawn = refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        assert_eq!(drawn, 0);
        assert_eq!(panel.writes, before);
    }

    #[test]
    fn single_byte_change_redraws_one_column_of_eight() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        fb.set_pixel(10, 3, true);
        let drawn = refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        assert_eq!(drawn, 8);
    }

    #[test]
    fn invalidation_forces_a_full_repaint() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let fb = MatrixBuffer::new();
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        cache.invalidate();
        let drawn = refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        assert_eq!(drawn, 512);
    }

    #[test]
    fn blocks_style_paints_squares_in_the_on_color() {
        let mut theme = theme();
        theme.style = DisplayStyle::Blocks;
        theme.led_spacing = 1;
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 0, true);
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let s = theme.led_size as i32;
        for py in 0..s {
            for px in 0..s {
                assert_eq!(panel.lit.get(&(px, py)), Some(&theme.on_color), "({px},{py})");
            }
        }
        // spacing column between cells stays background
        assert_eq!(panel.lit.get(&(s, 0)), Some(&BG_COLOR));
    }

    #[test]
    fn circular_lit_led_has_colored_core_and_surround() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 0, true);
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let s = theme.led_size as i32;
        let mid = s / 2;
        assert_eq!(panel.lit.get(&(mid, mid)), Some(&theme.on_color));
        // cell corner falls outside the surround ring
        assert_eq!(panel.lit.get(&(0, 0)), Some(&BG_COLOR));
    }

    #[test]
    fn circular_unlit_led_shows_a_dark_core() {
        let theme = theme();
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let fb = MatrixBuffer::new();
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let s = theme.led_size as i32;
        let mid = s / 2;
        assert_eq!(panel.lit.get(&(mid, mid)), Some(&LED_OFF_CORE_COLOR));
        assert_eq!(panel.lit.get(&(0, 0)), Some(&BG_COLOR));
    }

    #[test]
    fn bottom_band_is_offset_by_the_row_gap() {
        let mut theme = theme();
        theme.style = DisplayStyle::Blocks;
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 8, true);
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let pitch = (theme.led_size + theme.led_spacing) as i32;
        let expect_y = 8 * pitch + MATRIX_ROW_GAP;
        assert_eq!(panel.lit.get(&(0, expect_y)), Some(&theme.on_color));
        assert_eq!(panel.lit.get(&(0, 8 * pitch)), Some(&BG_COLOR));
    }

    #[test]
    fn flipped_rotation_mirrors_both_axes() {
        let mut theme = theme();
        theme.style = DisplayStyle::Blocks;
        theme.rotation = Rotation::Flipped;
        let mut panel = sized_panel(&theme);
        let mut cache = RenderCache::new();
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 0, true);
        refresh(&mut panel, &fb, &mut cache, &theme).unwrap();
        let pitch = (theme.led_size + theme.led_spacing) as i32;
        // logical (0,0) lands at physical cell (31,15)
        let sx = 31 * pitch;
        let sy = 15 * pitch + MATRIX_ROW_GAP;
        assert_eq!(panel.lit.get(&(sx, sy)), Some(&theme.on_color));
        assert_eq!(panel.lit.get(&(0, 0)), Some(&BG_COLOR));
    }

    #[test]
    fn panel_extent_accounts_for_pitch_and_gap() {
        let theme = theme(); // size 9, spacing 1
        assert_eq!(panel_extent(&theme), (10 * 32 - 1, 10 * 16 - 1 + 4));
    }
}
