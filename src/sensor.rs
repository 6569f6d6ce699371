/*
 *  sensor.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Environment sensor input surface. Real I2C drivers live outside this
 *  crate; the runtime talks to anything implementing `EnvironmentSensor`.
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

/// One environment sample, already rounded to display precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    pub temperature_c: i32,
    pub humidity: i32,
    pub pressure_hpa: Option<i32>,
    pub available: bool,
}

impl SensorReading {
    pub fn unavailable() -> Self {
        Self {
            temperature_c: 0,
            humidity: 0,
            pressure_hpa: None,
            available: false,
        }
    }

    /// Temperature value and unit letter for the display, honoring the
    /// Fahrenheit toggle.
    pub fn display_temperature(&self, fahrenheit: bool) -> (i32, char) {
        if fahrenheit {
            (self.temperature_c * 9 / 5 + 32, 'F')
        } else {
            (self.temperature_c, 'C')
        }
    }
}

pub trait EnvironmentSensor: Send {
    fn read(&mut self) -> SensorReading;
    fn kind(&self) -> &'static str;
}

/// Sensor stand-in for boards with nothing attached.
pub struct NullSensor;

impl EnvironmentSensor for NullSensor {
    fn read(&mut self) -> SensorReading {
        SensorReading::unavailable()
    }

    fn kind(&self) -> &'static str {
        "none"
    }
}

/// Deterministic fake that drifts slowly, for demos and the emulator.
pub struct SimulatedSensor {
    started: Instant,
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentSensor for SimulatedSensor {
    fn read(&mut self) -> SensorReading {
        let minutes = self.started.elapsed().as_secs() / 60;
        // wander a couple of degrees over a ten minute cycle
        let phase = (minutes % 10) as i32;
        let drift = if phase < 5 { phase } else { 10 - phase };
        SensorReading {
            temperature_c: 21 + drift / 2,
            humidity: 52 + drift,
            pressure_hpa: Some(1013),
            available: true,
        }
    }

    fn kind(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_conversion_is_integer() {
        let r = SensorReading {
            temperature_c: 22,
            humidity: 55,
            pressure_hpa: None,
            available: true,
        };
        assert_eq!(r.display_temperature(false), (22, 'C'));
        assert_eq!(r.display_temperature(true), (71, 'F'));
        let cold = SensorReading { temperature_c: -10, ..r };
        assert_eq!(cold.display_temperature(true), (14, 'F'));
    }

    #[test]
    fn null_sensor_reports_unavailable() {
        let mut s = NullSensor;
        let r = s.read();
        assert!(!r.available);
        assert!(r.pressure_hpa.is_none());
    }

    #[test]
    fn simulated_sensor_reports_available() {
        let mut s = SimulatedSensor::new();
        let r = s.read();
        assert!(r.available);
        assert!(r.temperature_c >= 21 && r.temperature_c <= 24);
        assert!(r.humidity >= 52 && r.humidity <= 58);
    }
}
