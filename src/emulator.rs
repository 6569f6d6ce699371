/*
 *  emulator.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Desktop emulator window: renders the simulated panel with pixels/winit
 *  and maps the keyboard onto the live settings surface.
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

use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::PhysicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

use chrono::Local;
use log::warn;
use std::time::{Duration, Instant};

use crate::app::MatrixClock;
use crate::panel::PanelBuffer;
use crate::sensor::EnvironmentSensor;
use crate::theme::{Rotation, SettingsUpdate};

/// Logical surface the emulated panel mimics (the 320x240 TFT class).
pub const SURFACE_WIDTH: u32 = 320;
pub const SURFACE_HEIGHT: u32 = 240;

const MODE_INTERVALS: [u64; 5] = [1, 5, 10, 30, 60];
const SENSOR_POLL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct EmulatorWindowConfig {
    /// Panel pixel to screen pixel scale factor.
    pub scale: u32,
}

impl Default for EmulatorWindowConfig {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

pub struct EmulatorWindow {
    app: MatrixClock,
    sensor: Box<dyn EnvironmentSensor>,
    panel: PanelBuffer,
    config: EmulatorWindowConfig,
}

impl EmulatorWindow {
    pub fn new(
        app: MatrixClock,
        sensor: Box<dyn EnvironmentSensor>,
        config: EmulatorWindowConfig,
    ) -> Self {
        Self {
            app,
            sensor,
            panel: PanelBuffer::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            config,
        }
    }

    /// Run the emulator window event loop. Never returns on success.
    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new();
        let mut input = WinitInputHelper::new();

        let window = WindowBuilder::new()
            .with_title("RetroClock Emulator")
            .with_inner_size(PhysicalSize::new(
                SURFACE_WIDTH * self.config.scale,
                SURFACE_HEIGHT * self.config.scale,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let mut pixels = Pixels::new(SURFACE_WIDTH, SURFACE_HEIGHT, surface_texture)?;

        println!("═══════════════════════════════════════════════════");
        println!("  RetroClock Emulator ({}x{})", SURFACE_WIDTH, SURFACE_HEIGHT);
        println!("═══════════════════════════════════════════════════");
        println!("  Keyboard Shortcuts:");
        println!("  ─────────────────────────────────────────────────");
        println!("    ESC / Q   - Quit");
        println!("    S         - Toggle blocks/LED style");
        println!("    C         - Cycle LED color");
        println!("    U         - Cycle surround color");
        println!("    = / -     - Grow / shrink LED size");
        println!("    ] / [     - Widen / tighten LED spacing");
        println!("    R         - Rotate 180°");
        println!("    T         - Toggle 12/24 hour time");
        println!("    Z         - Toggle leading zero");
        println!("    F         - Toggle Celsius/Fahrenheit");
        println!("    D         - Cycle date format");
        println!("    M         - Cycle mode interval");
        println!("═══════════════════════════════════════════════════");

        let mut last_sensor_poll = Instant::now() - SENSOR_POLL;

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            if let Event::RedrawRequested(_) = event {
                let now = Instant::now();
                if now.duration_since(last_sensor_poll) >= SENSOR_POLL {
                    self.app.set_sensor(self.sensor.read());
                    last_sensor_poll = now;
                }
                self.app.tick(Local::now(), now);
                if let Ok(_drawn) = self.app.render(&mut self.panel) {
                    self.panel.write_rgba(pixels.frame_mut());
                }

                if let Err(err) = pixels.render() {
                    eprintln!("pixels.render() failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            if input.update(&event) {
                if input.key_pressed(VirtualKeyCode::Escape) || input.key_pressed(VirtualKeyCode::Q)
                {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                if input.key_pressed(VirtualKeyCode::S) {
                    let style = self.app.settings().theme.style.toggled();
                    self.apply(SettingsUpdate::Style(style));
                }
                if input.key_pressed(VirtualKeyCode::C) {
                    let color = self.app.settings().theme.led_color.next();
                    self.apply(SettingsUpdate::LedColor(color));
                }
                if input.key_pressed(VirtualKeyCode::U) {
                    let surround = self.app.settings().theme.surround.next();
                    self.apply(SettingsUpdate::SurroundColor(surround));
                }
                if input.key_pressed(VirtualKeyCode::Equals) {
                    let size = self.app.settings().theme.led_size + 1;
                    self.apply(SettingsUpdate::LedSize(size));
                }
                if input.key_pressed(VirtualKeyCode::Minus) {
                    let size = self.app.settings().theme.led_size.saturating_sub(1);
                    self.apply(SettingsUpdate::LedSize(size));
                }
                if input.key_pressed(VirtualKeyCode::RBracket) {
                    let spacing = self.app.settings().theme.led_spacing + 1;
                    self.apply(SettingsUpdate::LedSpacing(spacing));
                }
                if input.key_pressed(VirtualKeyCode::LBracket) {
                    let spacing = self.app.settings().theme.led_spacing.saturating_sub(1);
                    self.apply(SettingsUpdate::LedSpacing(spacing));
                }
                if input.key_pressed(VirtualKeyCode::R) {
                    let rotation = self.app.settings().theme.rotation.toggled();
                    self.apply(SettingsUpdate::Rotation(rotation));
                    println!(
                        "Rotation: {}",
                        if rotation == Rotation::Flipped { "180°" } else { "normal" }
                    );
                }
                if input.key_pressed(VirtualKeyCode::T) {
                    let use_24h = !self.app.settings().use_24h;
                    self.apply(SettingsUpdate::Use24Hour(use_24h));
                }
                if input.key_pressed(VirtualKeyCode::Z) {
                    let zero = !self.app.settings().leading_zero;
                    self.apply(SettingsUpdate::LeadingZero(zero));
                }
                if input.key_pressed(VirtualKeyCode::F) {
                    let fahrenheit = !self.app.settings().fahrenheit;
                    self.apply(SettingsUpdate::Fahrenheit(fahrenheit));
                }
                if input.key_pressed(VirtualKeyCode::D) {
                    let fmt = self.app.settings().date_format.next();
                    self.apply(SettingsUpdate::DateFormat(fmt.as_index()));
                }
                if input.key_pressed(VirtualKeyCode::M) {
                    let current = self.app.settings().mode_interval_secs;
                    let pos = MODE_INTERVALS.iter().position(|v| *v == current).unwrap_or(0);
                    let next = MODE_INTERVALS[(pos + 1) % MODE_INTERVALS.len()];
                    self.apply(SettingsUpdate::ModeInterval(next));
                    println!("Mode interval: {}s", next);
                }
            }

            window.request_redraw();
        });
    }

    fn apply(&mut self, update: SettingsUpdate) {
        if let Err(e) = self.app.apply(update) {
            warn!("{e}");
        }
    }
}
