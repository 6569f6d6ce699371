/*
 *  lib.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  A 32x16 virtual LED matrix clock engine: packed bitmap fonts, a
 *  one-bit framebuffer, mode composition, and a diffing renderer that
 *  paints simulated LEDs onto any RGB565 panel.
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

pub mod app;
pub mod clock;
pub mod compose;
pub mod config;
pub mod constants;
pub mod font_data;
pub mod fonts;
pub mod matrix;
pub mod modes;
pub mod panel;
pub mod render;
pub mod sensor;
pub mod snapshot;
pub mod text;
pub mod theme;

#[cfg(feature = "emulator")]
pub mod emulator;

pub use app::MatrixClock;
pub use matrix::MatrixBuffer;
pub use modes::DisplayMode;
pub use panel::PanelBuffer;
pub use sensor::{EnvironmentSensor, NullSensor, SensorReading, SimulatedSensor};
pub use snapshot::DisplaySnapshot;
pub use theme::{DisplayStyle, DisplayTheme, LedColor, Rotation, Settings, SettingsUpdate, SurroundColor};
