/*
 *  modes.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Display mode enumeration and the interval-driven cycle between them.
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

use std::time::{Duration, Instant};

use log::debug;

/// The three rotating faces of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Small time on the top row, temperature/humidity below.
    TimeAndEnvironment,
    /// Full-height HH:MM digits with small seconds.
    TimeLarge,
    /// Medium time with seconds on top, date below.
    TimeAndDate,
}

impl DisplayMode {
    pub fn next(self) -> Self {
        match self {
            DisplayMode::TimeAndEnvironment => DisplayMode::TimeLarge,
            DisplayMode::TimeLarge => DisplayMode::TimeAndDate,
            DisplayMode::TimeAndDate => DisplayMode::TimeAndEnvironment,
        }
    }
}

/// Advances the current mode whenever the configured dwell time elapses.
#[derive(Debug)]
pub struct ModeCycle {
    current: DisplayMode,
    last_switch: Instant,
    interval: Duration,
}

impl ModeCycle {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            current: DisplayMode::TimeAndEnvironment,
            last_switch: Instant::now(),
            interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn current(&self) -> DisplayMode {
        self.current
    }

    /// Takes effect from the next switch; the running dwell is not cut short.
    pub fn set_interval(&mut self, secs: u64) {
        self.interval = Duration::from_secs(secs);
    }

    /// Moves to the next mode if the dwell expired at `now`. Returns true
    /// when the mode changed.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_switch) < self.interval {
            return false;
        }
        self.current = self.current.next();
        self.last_switch = now;
        debug!("display mode -> {:?}", self.current);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_cycle_in_order() {
        let m = DisplayMode::TimeAndEnvironment;
        assert_eq!(m.next(), DisplayMode::TimeLarge);
        assert_eq!(m.next().next(), DisplayMode::TimeAndDate);
        assert_eq!(m.next().next().next(), DisplayMode::TimeAndEnvironment);
    }

    #[test]
    fn cycle_waits_for_the_interval() {
        let mut cycle = ModeCycle::new(5);
        let start = Instant::now();
        assert!(!cycle.advance_if_due(start + Duration::from_secs(4)));
        assert_eq!(cycle.current(), DisplayMode::TimeAndEnvironment);
    }

    #[test]
    fn cycle_advances_and_rearms() {
        let mut cycle = ModeCycle::new(5);
        let due = Instant::now() + Duration::from_secs(6);
        assert!(cycle.advance_if_due(due));
        assert_eq!(cycle.current(), DisplayMode::TimeLarge);
        // dwell restarts at the switch instant
        assert!(!cycle.advance_if_due(due + Duration::from_secs(4)));
        assert!(cycle.advance_if_due(due + Duration::from_secs(5)));
        assert_eq!(cycle.current(), DisplayMode::TimeAndDate);
    }

    #[test]
    fn interval_change_applies_to_the_next_dwell() {
        let mut cycle = ModeCycle::new(30);
        let t = Instant::now() + Duration::from_secs(2);
        assert!(!cycle.advance_if_due(t));
        cycle.set_interval(1);
        assert!(cycle.advance_if_due(t));
    }
}
