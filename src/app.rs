/*
 *  app.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  The assembled clock: buffer, render cache, settings, mode cycle and
 *  input state behind one small API the binaries drive.
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

use std::time::Instant;

use chrono::{DateTime, Local};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use log::info;

use crate::compose;
use crate::matrix::MatrixBuffer;
use crate::modes::ModeCycle;
use crate::render::{RenderCache, refresh};
use crate::sensor::SensorReading;
use crate::snapshot::DisplaySnapshot;
use crate::theme::{Settings, SettingsError, SettingsUpdate};

pub struct MatrixClock {
    buffer: MatrixBuffer,
    cache: RenderCache,
    settings: Settings,
    cycle: ModeCycle,
    clock: crate::clock::ClockState,
    sensor: SensorReading,
}

impl MatrixClock {
    pub fn new(settings: Settings) -> Self {
        let cycle = ModeCycle::new(settings.mode_interval_secs);
        Self {
            buffer: MatrixBuffer::new(),
            cache: RenderCache::new(),
            settings,
            cycle,
            clock: crate::clock::ClockState::default(),
            sensor: SensorReading::unavailable(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn buffer(&self) -> &MatrixBuffer {
        &self.buffer
    }

    /// Applies one settings update. Accepted updates recompose the frame
    /// and force the next render to repaint everything.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        self.settings.apply(update)?;
        self.cycle.set_interval(self.settings.mode_interval_secs);
        self.cache.invalidate();
        self.recompose();
        info!("settings updated: {update:?}");
        Ok(())
    }

    pub fn set_sensor(&mut self, reading: SensorReading) {
        self.sensor = reading;
    }

    /// One scheduler tick. Recomposes when the mode rotated or the wall
    /// second changed; returns true when the frame may differ.
    pub fn tick(&mut self, wall: DateTime<Local>, now: Instant) -> bool {
        let second_changed = self.clock.update_from(wall);
        let mode_changed = self.cycle.advance_if_due(now);
        if second_changed || mode_changed {
            self.recompose();
            return true;
        }
        false
    }

    fn recompose(&mut self) {
        compose::compose(
            &mut self.buffer,
            self.cycle.current(),
            &self.clock,
            &self.sensor,
            &self.settings,
        );
    }

    /// Pushes the frame to a panel; returns the cells drawn.
    pub fn render<D>(&mut self, target: &mut D) -> Result<usize, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        refresh(target, &self.buffer, &mut self.cache, &self.settings.theme)
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::capture(&self.buffer, &self.settings.theme)
    }

    /// Displays a centered status message until the next recompose.
    pub fn show_message(&mut self, msg: &str) {
        compose::show_message(&mut self.buffer, msg);
    }

    /// Displays an IP address split across both rows.
    pub fn show_ip(&mut self, ip: &str) {
        compose::show_ip(&mut self.buffer, ip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelBuffer;
    use crate::render::panel_extent;
    use crate::theme::{DisplayStyle, LedColor};
    use std::time::Duration;

    fn panel_for(clock: &MatrixClock) -> PanelBuffer {
        let (w, h) = panel_extent(&clock.settings().theme);
        PanelBuffer::new(w, h)
    }

    #[test]
    fn second_change_marks_the_frame_dirty() {
        let mut app = MatrixClock::new(Settings::default());
        let t0 = Instant::now();
        let wall = Local::now();
        assert!(app.tick(wall, t0));
        assert!(!app.tick(wall, t0));
        assert!(app.tick(wall + chrono::Duration::seconds(1), t0));
    }

    #[test]
    fn mode_rotation_marks_the_frame_dirty() {
        let mut app = MatrixClock::new(Settings::default());
        let t0 = Instant::now();
        let wall = Local::now();
        app.tick(wall, t0);
        assert!(app.tick(wall, t0 + Duration::from_secs(6)));
    }

    #[test]
    fn accepted_update_forces_a_full_repaint() {
        let mut app = MatrixClock::new(Settings::default());
        let mut panel = panel_for(&app);
        app.tick(Local::now(), Instant::now());
        app.render(&mut panel).unwrap();
        assert_eq!(app.render(&mut panel).unwrap(), 0);
        app.apply(SettingsUpdate::LedColor(LedColor::Green)).unwrap();
        assert_eq!(app.render(&mut panel).unwrap(), 512);
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let mut app = MatrixClock::new(Settings::default());
        let mut panel = panel_for(&app);
        app.render(&mut panel).unwrap();
        assert!(app.apply(SettingsUpdate::LedSize(99)).is_err());
        assert_eq!(app.render(&mut panel).unwrap(), 0);
        assert_eq!(app.settings().theme.led_size, 9);
    }

    #[test]
    fn snapshot_reflects_the_style() {
        let mut app = MatrixClock::new(Settings::default());
        app.apply(SettingsUpdate::Style(DisplayStyle::Blocks)).unwrap();
        assert_eq!(app.snapshot().style, 0);
        assert_eq!(app.snapshot().buffer.len(), 64);
    }
}
