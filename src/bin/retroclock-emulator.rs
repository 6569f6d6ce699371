/*
 *  bin/retroclock-emulator.rs
 *
 *  RetroClock Emulator - Desktop testing tool
 *
 *  (c) 2024-26 RetroClock contributors
 *
 *  Runs the matrix clock in a desktop window without hardware.
 *
 *  Usage:
 *    cargo run --bin retroclock-emulator --features emulator
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 */

#[cfg(feature = "emulator")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use env_logger::Env;
    use log::info;
    use retroclock::app::MatrixClock;
    use retroclock::config::{self, SensorKind};
    use retroclock::emulator::{EmulatorWindow, EmulatorWindowConfig};
    use retroclock::sensor::{EnvironmentSensor, NullSensor, SimulatedSensor};

    let cfg = config::load()?;
    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .format_timestamp_secs()
    .init();

    let settings = config::to_settings(&cfg)?;
    let mut app = MatrixClock::new(settings);
    // the window has no wall to mount a sensor on, so simulate by default
    let mut sensor: Box<dyn EnvironmentSensor> = match cfg.sensor {
        Some(SensorKind::None) => Box::new(NullSensor),
        _ => Box::new(SimulatedSensor::new()),
    };
    info!("environment sensor: {}", sensor.kind());
    app.set_sensor(sensor.read());

    let window = EmulatorWindow::new(app, sensor, EmulatorWindowConfig::default());
    window.run()
}

#[cfg(not(feature = "emulator"))]
fn main() {
    eprintln!("ERROR: This binary requires the 'emulator' feature.");
    eprintln!();
    eprintln!("Please compile with:");
    eprintln!("  cargo run --bin retroclock-emulator --features emulator");
    std::process::exit(1);
}
