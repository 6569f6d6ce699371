/*
 *  clock.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Wall-clock state sampled once per tick.
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

use chrono::{DateTime, Datelike, Local, Timelike};

/// Broken-down local time the composer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub hours24: u32,
    pub hours12: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    last_second: Option<u32>,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            hours24: 0,
            hours12: 12,
            minutes: 0,
            seconds: 0,
            day: 1,
            month: 1,
            year: 1970,
            last_second: None,
        }
    }
}

/// 12-hour clock face value: 0 and 12 both read as 12.
pub fn to_hours12(hours24: u32) -> u32 {
    match hours24 % 12 {
        0 => 12,
        h => h,
    }
}

impl ClockState {
    /// Refreshes from a wall-clock sample. Returns true when the second
    /// changed since the previous refresh, which drives recomposition.
    pub fn update_from(&mut self, now: DateTime<Local>) -> bool {
        self.set(
            now.hour(),
            now.minute(),
            now.second(),
            now.day(),
            now.month(),
            now.year(),
        )
    }

    /// Direct field update, shared by `update_from` and tests.
    pub fn set(
        &mut self,
        hours24: u32,
        minutes: u32,
        seconds: u32,
        day: u32,
        month: u32,
        year: i32,
    ) -> bool {
        self.hours24 = hours24;
        self.hours12 = to_hours12(hours24);
        self.minutes = minutes;
        self.seconds = seconds;
        self.day = day;
        self.month = month;
        self.year = year;
        let changed = self.last_second != Some(seconds);
        self.last_second = Some(seconds);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_conversion() {
        assert_eq!(to_hours12(0), 12);
        assert_eq!(to_hours12(1), 1);
        assert_eq!(to_hours12(11), 11);
        assert_eq!(to_hours12(12), 12);
        assert_eq!(to_hours12(13), 1);
        assert_eq!(to_hours12(23), 11);
    }

    #[test]
    fn second_change_detection() {
        let mut clock = ClockState::default();
        assert!(clock.set(10, 30, 15, 5, 6, 2026));
        assert!(!clock.set(10, 30, 15, 5, 6, 2026));
        assert!(clock.set(10, 30, 16, 5, 6, 2026));
        assert_eq!(clock.hours12, 10);
        clock.set(13, 0, 0, 5, 6, 2026);
        assert_eq!(clock.hours12, 1);
    }
}
