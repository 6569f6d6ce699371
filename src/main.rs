/*
 *  main.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Headless daemon: ticks the clock engine, renders into an in-memory
 *  panel, and serves frame snapshots over a settings/update queue.
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

use chrono::Local;
use env_logger::Env;
use local_ip_address::local_ip;
use log::{debug, info, warn};
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::mpsc;

use retroclock::app::MatrixClock;
use retroclock::config::{self, SensorKind};
use retroclock::panel::PanelBuffer;
use retroclock::sensor::{EnvironmentSensor, NullSensor, SimulatedSensor};
use retroclock::theme::SettingsUpdate;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Tick cadence: fast enough to catch every wall-clock second change.
const TICK: Duration = Duration::from_millis(100);
const SENSOR_POLL: Duration = Duration::from_secs(60);

/// Waits for SIGINT, SIGTERM, or SIGHUP.
async fn signal_handler() -> Result<(), Box<dyn std::error::Error>> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .format_timestamp_secs()
    .init();

    info!("{} starting", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let settings = config::to_settings(&cfg)?;
    let mut app = MatrixClock::new(settings);
    let mut sensor: Box<dyn EnvironmentSensor> = match cfg.sensor {
        Some(SensorKind::Simulated) => Box::new(SimulatedSensor::new()),
        _ => Box::new(NullSensor),
    };
    info!("environment sensor: {}", sensor.kind());

    let mut panel = PanelBuffer::new(320, 240);

    // Single-writer settings queue. The sender half is where a control
    // surface (RPC, web UI) plugs in; updates land between ticks only.
    let (update_tx, mut update_rx) = mpsc::channel::<SettingsUpdate>(16);
    let _update_tx = update_tx;

    // greeting and address, same as power-on
    app.show_message("INIT");
    let drawn = app.render(&mut panel).unwrap_or_default();
    debug!("splash painted {drawn} cells");
    match local_ip() {
        Ok(inet) => {
            info!("local address {inet}");
            app.show_ip(&inet.to_string());
            let _ = app.render(&mut panel);
            tokio::time::sleep(Duration::from_millis(2500)).await;
        }
        Err(e) => warn!("no local address: {e}"),
    }

    let mut ticker = tokio::time::interval(TICK);
    let mut last_sensor_poll = Instant::now() - SENSOR_POLL;

    tokio::select! {
        _ = signal_handler() => {}
        _ = async {
            loop {
                ticker.tick().await;

                while let Ok(update) = update_rx.try_recv() {
                    if let Err(e) = app.apply(update) {
                        warn!("rejected settings update: {e}");
                    }
                }

                let now = Instant::now();
                if now.duration_since(last_sensor_poll) >= SENSOR_POLL {
                    app.set_sensor(sensor.read());
                    last_sensor_poll = now;
                }

                if app.tick(Local::now(), now) {
                    match app.render(&mut panel) {
                        Ok(drawn) if drawn > 0 => debug!("frame: {drawn} cells redrawn"),
                        _ => {}
                    }
                }
            }
        } => {}
    }

    info!("Main application exiting.");
    Ok(())
}
