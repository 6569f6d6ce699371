/*
 *  compose.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Frame composition: turns clock and sensor state into matrix pixels for
 *  the current display mode. Each compose starts from a cleared buffer, so
 *  hidden elements (the blinking colon) simply stay dark while every x
 *  advance stays identical between blink phases.
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

use crate::clock::ClockState;
use crate::constants::LINE_WIDTH;
use crate::fonts::{DIGITS_3X5, DIGITS_5X8, DIGITS_5X16, FONT_3X7, Font};
use crate::matrix::MatrixBuffer;
use crate::modes::DisplayMode;
use crate::sensor::SensorReading;
use crate::text::{draw_char, string_width};
use crate::theme::{DateFormat, Settings};

const WIDTH: i32 = LINE_WIDTH as i32;

/// Composes one frame for `mode` into `fb`.
pub fn compose(
    fb: &mut MatrixBuffer,
    mode: DisplayMode,
    clock: &ClockState,
    sensor: &SensorReading,
    settings: &Settings,
) {
    fb.clear();
    match mode {
        DisplayMode::TimeAndEnvironment => time_and_environment(fb, clock, sensor, settings),
        DisplayMode::TimeLarge => time_large(fb, clock, settings),
        DisplayMode::TimeAndDate => time_and_date(fb, clock, settings),
    }
}

fn display_hours(clock: &ClockState, settings: &Settings) -> u32 {
    if settings.use_24h { clock.hours24 } else { clock.hours12 }
}

fn hours_string(clock: &ClockState, settings: &Settings) -> String {
    let h = display_hours(clock, settings);
    if settings.leading_zero {
        format!("{h:02}")
    } else {
        format!("{h}")
    }
}

/// Draws `s` starting at `x`, leaving a 1px gap after every glyph.
/// Returns the x past the trailing gap. No clipping guard; `draw_char`
/// clips per column.
fn draw_run(fb: &mut MatrixBuffer, mut x: i32, row: i32, s: &str, font: &Font) -> i32 {
    for c in s.chars() {
        x += draw_char(fb, x, row, c, font) + 1;
    }
    x
}

/// Advances over the colon cell. When hidden the columns stay dark but
/// the advance matches the drawn case exactly.
fn draw_colon(fb: &mut MatrixBuffer, x: i32, row: i32, shown: bool, font: &Font) -> i32 {
    if shown {
        x + draw_char(fb, x, row, ':', font) + 1
    } else {
        x + font.glyph_width(':') as i32 + 1
    }
}

/// Mode 0: H:MM (or HH:MM) on top, environment line below.
fn time_and_environment(
    fb: &mut MatrixBuffer,
    clock: &ClockState,
    sensor: &SensorReading,
    settings: &Settings,
) {
    let shown = clock.seconds % 2 == 0;
    let mut x = draw_run(fb, 0, 0, &hours_string(clock, settings), &FONT_3X7);
    x = draw_colon(fb, x, 0, shown, &FONT_3X7);
    x = draw_run(fb, x, 0, &format!("{:02}", clock.minutes), &FONT_3X7);

    if !settings.use_24h {
        let suffix = if clock.hours24 >= 12 { "PM" } else { "AM" };
        for c in suffix.chars() {
            if x < WIDTH {
                x += draw_char(fb, x, 0, c, &FONT_3X7) + 1;
            }
        }
    }

    let line = if sensor.available {
        let (temp, unit) = sensor.display_temperature(settings.fahrenheit);
        format!("T{temp}{unit} H{}%", sensor.humidity)
    } else {
        "NO SENSOR".to_string()
    };
    let mut x = 0;
    for c in line.chars() {
        if x < WIDTH - 3 {
            x += draw_char(fb, x, 1, c, &FONT_3X7);
            if x < WIDTH {
                x += 1;
            }
        }
    }
}

/// Mode 1: full-height HH:MM, small seconds in the top band on the
/// right. With 24-hour double-digit hours the seconds run off the edge;
/// they clip, by design of the face, rather than wrap.
fn time_large(fb: &mut MatrixBuffer, clock: &ClockState, settings: &Settings) {
    let shown = clock.seconds % 2 == 0;
    let start = if display_hours(clock, settings) > 9 || settings.leading_zero {
        0
    } else {
        3
    };
    let mut x = draw_run(fb, start, 0, &hours_string(clock, settings), &DIGITS_5X16);
    x = draw_colon(fb, x, 0, shown, &DIGITS_5X16);
    x = draw_run(fb, x, 0, &format!("{:02}", clock.minutes), &DIGITS_5X16);

    for c in format!("{:02}", clock.seconds).chars() {
        if x < WIDTH {
            x += draw_char(fb, x, 0, c, &FONT_3X7) + 1;
        }
    }
}

/// Mode 2: medium HH:MM with tiny seconds on top, date below.
fn time_and_date(fb: &mut MatrixBuffer, clock: &ClockState, settings: &Settings) {
    let shown = clock.seconds % 2 == 0;
    let mut x = draw_run(fb, 0, 0, &hours_string(clock, settings), &DIGITS_5X8);
    x = draw_colon(fb, x, 0, shown, &DIGITS_5X8);
    x = draw_run(fb, x, 0, &format!("{:02}", clock.minutes), &DIGITS_5X8);

    for c in format!("{:02}", clock.seconds).chars() {
        if x < WIDTH {
            x += draw_char(fb, x, 0, c, &DIGITS_3X5) + 1;
        }
    }

    let date = format_date(clock.day, clock.month, clock.year, settings.date_format);
    draw_run(fb, 2, 1, &date, &FONT_3X7);
}

/// Renders a calendar date in the configured format.
pub fn format_date(day: u32, month: u32, year: i32, fmt: DateFormat) -> String {
    let y2 = (year % 100).rem_euclid(100);
    match fmt {
        DateFormat::DayMonthYear2 => format!("{day:02}/{month:02}/{y2:02}"),
        DateFormat::MonthDayYear2 => format!("{month:02}/{day:02}/{y2:02}"),
        DateFormat::IsoYearMonthDay => format!("{year:04}-{month:02}-{day:02}"),
        DateFormat::DayMonthYear4 => format!("{day:02}.{month:02}.{year:04}"),
        DateFormat::MonthDayYear4 => format!("{month:02}.{day:02}.{year:04}"),
    }
}

fn draw_centered(fb: &mut MatrixBuffer, row: i32, s: &str) {
    let width = string_width(s, &FONT_3X7);
    if width < 0 {
        return;
    }
    let x = ((WIDTH - width) / 2).max(0);
    draw_run(fb, x, row, s, &FONT_3X7);
}

/// Replaces the frame with a centered status message on the top row.
pub fn show_message(fb: &mut MatrixBuffer, msg: &str) {
    fb.clear();
    draw_centered(fb, 0, msg);
}

/// Replaces the frame with an IP address split across both rows at its
/// second dot, so a dotted quad fits the 32 columns.
pub fn show_ip(fb: &mut MatrixBuffer, ip: &str) {
    fb.clear();
    let second_dot = ip
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map(|(i, _)| i);
    match second_dot {
        Some(i) => {
            draw_centered(fb, 0, &ip[..=i]);
            draw_centered(fb, 1, &ip[i + 1..]);
        }
        None => draw_centered(fb, 0, ip),
    }
}
