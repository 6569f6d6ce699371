/*
 *  theme.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Display styling and user-facing settings, plus the validated update
 *  surface the runtime queue delivers.
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

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    COLOR_BLUE, COLOR_CYAN, COLOR_DARK_GRAY, COLOR_GREEN, COLOR_LIGHT_GRAY, COLOR_MAGENTA,
    COLOR_ORANGE, COLOR_RED, COLOR_WHITE, COLOR_YELLOW, DEFAULT_LED_SIZE, DEFAULT_LED_SPACING,
    DEFAULT_MODE_INTERVAL, LED_SIZE_MAX, LED_SIZE_MIN, LED_SPACING_MAX, MODE_INTERVAL_MAX,
    MODE_INTERVAL_MIN,
};

/// How each logical LED is rendered on the physical panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Flat filled squares.
    Blocks,
    /// Round LEDs with a lit core and a dark housing when off.
    Led,
}

impl DisplayStyle {
    pub fn as_index(self) -> u8 {
        match self {
            DisplayStyle::Blocks => 0,
            DisplayStyle::Led => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayStyle::Blocks => DisplayStyle::Led,
            DisplayStyle::Led => DisplayStyle::Blocks,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "blocks" | "block" => Some(DisplayStyle::Blocks),
            "led" | "circular" => Some(DisplayStyle::Led),
            _ => None,
        }
    }
}

/// Preset colors for the lit LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
    Orange,
}

impl LedColor {
    pub fn rgb565(self) -> u16 {
        match self {
            LedColor::Red => COLOR_RED,
            LedColor::Green => COLOR_GREEN,
            LedColor::Blue => COLOR_BLUE,
            LedColor::Yellow => COLOR_YELLOW,
            LedColor::Cyan => COLOR_CYAN,
            LedColor::Magenta => COLOR_MAGENTA,
            LedColor::White => COLOR_WHITE,
            LedColor::Orange => COLOR_ORANGE,
        }
    }

    pub fn next(self) -> Self {
        match self {
            LedColor::Red => LedColor::Green,
            LedColor::Green => LedColor::Blue,
            LedColor::Blue => LedColor::Yellow,
            LedColor::Yellow => LedColor::Cyan,
            LedColor::Cyan => LedColor::Magenta,
            LedColor::Magenta => LedColor::White,
            LedColor::White => LedColor::Orange,
            LedColor::Orange => LedColor::Red,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(LedColor::Red),
            "green" => Some(LedColor::Green),
            "blue" => Some(LedColor::Blue),
            "yellow" => Some(LedColor::Yellow),
            "cyan" => Some(LedColor::Cyan),
            "magenta" => Some(LedColor::Magenta),
            "white" => Some(LedColor::White),
            "orange" => Some(LedColor::Orange),
            _ => None,
        }
    }
}

/// Preset colors for the LED surround ring in the circular style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurroundColor {
    White,
    LightGray,
    DarkGray,
    Red,
    Green,
    Blue,
    Yellow,
    /// Follow the LED color.
    MatchLed,
}

impl SurroundColor {
    pub fn rgb565(self, led: u16) -> u16 {
        match self {
            SurroundColor::White => COLOR_WHITE,
            SurroundColor::LightGray => COLOR_LIGHT_GRAY,
            SurroundColor::DarkGray => COLOR_DARK_GRAY,
            SurroundColor::Red => COLOR_RED,
            SurroundColor::Green => COLOR_GREEN,
            SurroundColor::Blue => COLOR_BLUE,
            SurroundColor::Yellow => COLOR_YELLOW,
            SurroundColor::MatchLed => led,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SurroundColor::White => SurroundColor::LightGray,
            SurroundColor::LightGray => SurroundColor::DarkGray,
            SurroundColor::DarkGray => SurroundColor::Red,
            SurroundColor::Red => SurroundColor::Green,
            SurroundColor::Green => SurroundColor::Blue,
            SurroundColor::Blue => SurroundColor::Yellow,
            SurroundColor::Yellow => SurroundColor::MatchLed,
            SurroundColor::MatchLed => SurroundColor::White,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(SurroundColor::White),
            "lightgray" | "light_gray" | "lightgrey" => Some(SurroundColor::LightGray),
            "darkgray" | "dark_gray" | "darkgrey" => Some(SurroundColor::DarkGray),
            "red" => Some(SurroundColor::Red),
            "green" => Some(SurroundColor::Green),
            "blue" => Some(SurroundColor::Blue),
            "yellow" => Some(SurroundColor::Yellow),
            "match" | "matchled" | "match_led" => Some(SurroundColor::MatchLed),
            _ => None,
        }
    }
}

/// Panel orientation, applied as a logical coordinate flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Normal,
    Flipped,
}

impl Rotation {
    pub fn toggled(self) -> Self {
        match self {
            Rotation::Normal => Rotation::Flipped,
            Rotation::Flipped => Rotation::Normal,
        }
    }
}

/// Date rendering formats for the Time+Date mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    DayMonthYear2,
    MonthDayYear2,
    IsoYearMonthDay,
    DayMonthYear4,
    MonthDayYear4,
}

impl DateFormat {
    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(DateFormat::DayMonthYear2),
            1 => Some(DateFormat::MonthDayYear2),
            2 => Some(DateFormat::IsoYearMonthDay),
            3 => Some(DateFormat::DayMonthYear4),
            4 => Some(DateFormat::MonthDayYear4),
            _ => None,
        }
    }

    pub fn as_index(self) -> u8 {
        match self {
            DateFormat::DayMonthYear2 => 0,
            DateFormat::MonthDayYear2 => 1,
            DateFormat::IsoYearMonthDay => 2,
            DateFormat::DayMonthYear4 => 3,
            DateFormat::MonthDayYear4 => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index((self.as_index() + 1) % 5).unwrap_or(DateFormat::DayMonthYear2)
    }
}

/// Resolved rendering parameters the physical renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTheme {
    pub style: DisplayStyle,
    pub led_color: LedColor,
    pub surround: SurroundColor,
    /// RGB565 color of a lit LED.
    pub on_color: u16,
    /// RGB565 color of an unlit LED, derived as `on >> 3`.
    pub off_color: u16,
    /// RGB565 surround color, resolved against the LED color.
    pub surround_color: u16,
    pub led_size: u32,
    pub led_spacing: u32,
    pub rotation: Rotation,
}

impl Default for DisplayTheme {
    fn default() -> Self {
        let led = LedColor::Red;
        let surround = SurroundColor::DarkGray;
        Self {
            style: DisplayStyle::Led,
            led_color: led,
            surround,
            on_color: led.rgb565(),
            off_color: led.rgb565() >> 3,
            surround_color: surround.rgb565(led.rgb565()),
            led_size: DEFAULT_LED_SIZE,
            led_spacing: DEFAULT_LED_SPACING,
            rotation: Rotation::Normal,
        }
    }
}

impl DisplayTheme {
    fn resolve_colors(&mut self) {
        self.on_color = self.led_color.rgb565();
        self.off_color = self.on_color >> 3;
        self.surround_color = self.surround.rgb565(self.on_color);
    }
}

/// Full user-facing configuration of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: DisplayTheme,
    pub use_24h: bool,
    pub leading_zero: bool,
    pub fahrenheit: bool,
    pub date_format: DateFormat,
    pub mode_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DisplayTheme::default(),
            use_24h: false,
            leading_zero: false,
            fahrenheit: false,
            date_format: DateFormat::DayMonthYear2,
            mode_interval_secs: DEFAULT_MODE_INTERVAL,
        }
    }
}

/// One atomic settings change, delivered between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdate {
    Style(DisplayStyle),
    LedColor(LedColor),
    SurroundColor(SurroundColor),
    LedSize(u32),
    LedSpacing(u32),
    Rotation(Rotation),
    Use24Hour(bool),
    LeadingZero(bool),
    Fahrenheit(bool),
    DateFormat(u8),
    ModeInterval(u64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("led size {0} outside {LED_SIZE_MIN}..={LED_SIZE_MAX}")]
    LedSize(u32),
    #[error("led spacing {0} outside 0..={LED_SPACING_MAX}")]
    LedSpacing(u32),
    #[error("mode interval {0}s outside {MODE_INTERVAL_MIN}..={MODE_INTERVAL_MAX}")]
    ModeInterval(u64),
    #[error("date format index {0} outside 0..=4")]
    DateFormat(u8),
}

impl Settings {
    /// Applies one update. Invalid values leave the settings untouched;
    /// the caller raises a full redraw after any `Ok`.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        match update {
            SettingsUpdate::Style(style) => self.theme.style = style,
            SettingsUpdate::LedColor(color) => {
                self.theme.led_color = color;
                self.theme.resolve_colors();
            }
            SettingsUpdate::SurroundColor(surround) => {
                self.theme.surround = surround;
                self.theme.resolve_colors();
            }
            SettingsUpdate::LedSize(size) => {
                if !(LED_SIZE_MIN..=LED_SIZE_MAX).contains(&size) {
                    return Err(SettingsError::LedSize(size));
                }
                self.theme.led_size = size;
            }
            SettingsUpdate::LedSpacing(spacing) => {
                if spacing > LED_SPACING_MAX {
                    return Err(SettingsError::LedSpacing(spacing));
                }
                self.theme.led_spacing = spacing;
            }
            SettingsUpdate::Rotation(rotation) => self.theme.rotation = rotation,
            SettingsUpdate::Use24Hour(v) => self.use_24h = v,
            SettingsUpdate::LeadingZero(v) => self.leading_zero = v,
            SettingsUpdate::Fahrenheit(v) => self.fahrenheit = v,
            SettingsUpdate::DateFormat(idx) => {
                self.date_format =
                    DateFormat::from_index(idx).ok_or(SettingsError::DateFormat(idx))?;
            }
            SettingsUpdate::ModeInterval(secs) => {
                if !(MODE_INTERVAL_MIN..=MODE_INTERVAL_MAX).contains(&secs) {
                    return Err(SettingsError::ModeInterval(secs));
                }
                self.mode_interval_secs = secs;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_color_drives_off_and_matching_surround() {
        let mut s = Settings::default();
        s.apply(SettingsUpdate::SurroundColor(SurroundColor::MatchLed))
            .unwrap();
        s.apply(SettingsUpdate::LedColor(LedColor::Cyan)).unwrap();
        assert_eq!(s.theme.on_color, COLOR_CYAN);
        assert_eq!(s.theme.off_color, COLOR_CYAN >> 3);
        assert_eq!(s.theme.surround_color, COLOR_CYAN);

        s.apply(SettingsUpdate::SurroundColor(SurroundColor::White))
            .unwrap();
        assert_eq!(s.theme.surround_color, COLOR_WHITE);
    }

    #[test]
    fn out_of_range_values_are_rejected_unapplied() {
        let mut s = Settings::default();
        let before = s.clone();
        assert_eq!(
            s.apply(SettingsUpdate::LedSize(3)),
            Err(SettingsError::LedSize(3))
        );
        assert_eq!(
            s.apply(SettingsUpdate::LedSize(13)),
            Err(SettingsError::LedSize(13))
        );
        assert_eq!(
            s.apply(SettingsUpdate::LedSpacing(4)),
            Err(SettingsError::LedSpacing(4))
        );
        assert_eq!(
            s.apply(SettingsUpdate::ModeInterval(0)),
            Err(SettingsError::ModeInterval(0))
        );
        assert_eq!(
            s.apply(SettingsUpdate::ModeInterval(61)),
            Err(SettingsError::ModeInterval(61))
        );
        assert_eq!(
            s.apply(SettingsUpdate::DateFormat(5)),
            Err(SettingsError::DateFormat(5))
        );
        assert_eq!(s, before);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut s = Settings::default();
        s.apply(SettingsUpdate::LedSize(4)).unwrap();
        s.apply(SettingsUpdate::LedSize(12)).unwrap();
        s.apply(SettingsUpdate::LedSpacing(0)).unwrap();
        s.apply(SettingsUpdate::LedSpacing(3)).unwrap();
        s.apply(SettingsUpdate::ModeInterval(1)).unwrap();
        s.apply(SettingsUpdate::ModeInterval(60)).unwrap();
        s.apply(SettingsUpdate::DateFormat(4)).unwrap();
        assert_eq!(s.date_format, DateFormat::MonthDayYear4);
    }

    #[test]
    fn cycles_wrap_around() {
        let mut c = LedColor::Red;
        for _ in 0..8 {
            c = c.next();
        }
        assert_eq!(c, LedColor::Red);
        let mut f = DateFormat::DayMonthYear2;
        for _ in 0..5 {
            f = f.next();
        }
        assert_eq!(f, DateFormat::DayMonthYear2);
        assert_eq!(DisplayStyle::Blocks.toggled().toggled(), DisplayStyle::Blocks);
    }
}
