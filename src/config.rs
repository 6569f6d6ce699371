/*
 *  config.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Configuration: clap CLI plus YAML file, merged and validated.
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

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::theme::{DisplayStyle, LedColor, Rotation, Settings, SettingsUpdate, SurroundColor};

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>, // e.g., "info" | "debug"
    pub display: Option<DisplayConfig>,
    pub clock: Option<ClockConfig>,
    pub sensor: Option<SensorKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub style: Option<String>,          // "blocks" | "led"
    pub led_color: Option<String>,      // "red", "green", ...
    pub surround_color: Option<String>, // "darkgray", "match", ...
    pub led_size: Option<u32>,          // 4..=12
    pub led_spacing: Option<u32>,       // 0..=3
    pub rotate_deg: Option<u16>,        // 0 | 180
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClockConfig {
    pub use_24h: Option<bool>,
    pub leading_zero: Option<bool>,
    pub fahrenheit: Option<bool>,
    pub date_format: Option<u8>, // 0..=4
    pub mode_interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    None,
    Simulated,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "retroclock", about = "Retro LED matrix clock", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub style: Option<String>,
    #[arg(long)]
    pub led_color: Option<String>,
    #[arg(long)]
    pub surround_color: Option<String>,
    #[arg(long)]
    pub led_size: Option<u32>,
    #[arg(long)]
    pub led_spacing: Option<u32>,
    #[arg(long)]
    pub rotate_deg: Option<u16>,
    #[arg(long, action = ArgAction::Set)]
    pub use_24h: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub leading_zero: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub fahrenheit: Option<bool>,
    #[arg(long)]
    pub date_format: Option<u8>,
    #[arg(long)]
    pub mode_interval_secs: Option<u64>,
    #[arg(long)]
    pub sensor: Option<String>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    load_from(Cli::parse())
}

pub fn load_from(cli: Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/retroclock/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/retroclock/config.yaml");
        if p.exists() {
            return Some(p);
        }
        let p = home.join(".config/retroclock.yaml");
        if p.exists() {
            return Some(p);
        }
    }
    // project local
    for candidate in &["retroclock.yaml", "config.yaml", "config/retroclock.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() {
        dst.log_level = src.log_level;
    }
    if src.sensor.is_some() {
        dst.sensor = src.sensor;
    }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    match (&mut dst.clock, src.clock) {
        (None, Some(c)) => dst.clock = Some(c),
        (Some(d), Some(s)) => merge_clock(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.style.is_some() {
        dst.style = src.style;
    }
    if src.led_color.is_some() {
        dst.led_color = src.led_color;
    }
    if src.surround_color.is_some() {
        dst.surround_color = src.surround_color;
    }
    if src.led_size.is_some() {
        dst.led_size = src.led_size;
    }
    if src.led_spacing.is_some() {
        dst.led_spacing = src.led_spacing;
    }
    if src.rotate_deg.is_some() {
        dst.rotate_deg = src.rotate_deg;
    }
}

fn merge_clock(dst: &mut ClockConfig, src: ClockConfig) {
    if src.use_24h.is_some() {
        dst.use_24h = src.use_24h;
    }
    if src.leading_zero.is_some() {
        dst.leading_zero = src.leading_zero;
    }
    if src.fahrenheit.is_some() {
        dst.fahrenheit = src.fahrenheit;
    }
    if src.date_format.is_some() {
        dst.date_format = src.date_format;
    }
    if src.mode_interval_secs.is_some() {
        dst.mode_interval_secs = src.mode_interval_secs;
    }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() {
        cfg.log_level = cli.log_level.clone();
    }
    if let Some(sensor) = cli.sensor.as_deref() {
        cfg.sensor = match sensor {
            "simulated" => Some(SensorKind::Simulated),
            _ => Some(SensorKind::None),
        };
    }

    let any_display = cli.style.is_some()
        || cli.led_color.is_some()
        || cli.surround_color.is_some()
        || cli.led_size.is_some()
        || cli.led_spacing.is_some()
        || cli.rotate_deg.is_some();
    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.style.is_some() {
            display.style = cli.style.clone();
        }
        if cli.led_color.is_some() {
            display.led_color = cli.led_color.clone();
        }
        if cli.surround_color.is_some() {
            display.surround_color = cli.surround_color.clone();
        }
        if cli.led_size.is_some() {
            display.led_size = cli.led_size;
        }
        if cli.led_spacing.is_some() {
            display.led_spacing = cli.led_spacing;
        }
        if cli.rotate_deg.is_some() {
            display.rotate_deg = cli.rotate_deg;
        }
    }

    let any_clock = cli.use_24h.is_some()
        || cli.leading_zero.is_some()
        || cli.fahrenheit.is_some()
        || cli.date_format.is_some()
        || cli.mode_interval_secs.is_some();
    if any_clock && cfg.clock.is_none() {
        cfg.clock = Some(ClockConfig::default());
    }
    if let Some(clock) = cfg.clock.as_mut() {
        if cli.use_24h.is_some() {
            clock.use_24h = cli.use_24h;
        }
        if cli.leading_zero.is_some() {
            clock.leading_zero = cli.leading_zero;
        }
        if cli.fahrenheit.is_some() {
            clock.fahrenheit = cli.fahrenheit;
        }
        if cli.date_format.is_some() {
            clock.date_format = cli.date_format;
        }
        if cli.mode_interval_secs.is_some() {
            clock.mode_interval_secs = cli.mode_interval_secs;
        }
    }
}

/// Range and name checks before the settings are ever built.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(display) = cfg.display.as_ref() {
        if let Some(s) = display.style.as_deref() {
            if DisplayStyle::from_name(s).is_none() {
                return Err(ConfigError::Validation(format!(
                    "display style must be blocks|led, got {s:?}"
                )));
            }
        }
        if let Some(c) = display.led_color.as_deref() {
            if LedColor::from_name(c).is_none() {
                return Err(ConfigError::Validation(format!("unknown led_color {c:?}")));
            }
        }
        if let Some(c) = display.surround_color.as_deref() {
            if SurroundColor::from_name(c).is_none() {
                return Err(ConfigError::Validation(format!("unknown surround_color {c:?}")));
            }
        }
        if let Some(size) = display.led_size {
            if !(4..=12).contains(&size) {
                return Err(ConfigError::Validation("display led_size must be 4..=12".into()));
            }
        }
        if let Some(spacing) = display.led_spacing {
            if spacing > 3 {
                return Err(ConfigError::Validation("display led_spacing must be 0..=3".into()));
            }
        }
        if let Some(rot) = display.rotate_deg {
            match rot {
                0 | 180 => {}
                _ => return Err(ConfigError::Validation("display rotate_deg must be 0|180".into())),
            }
        }
    }
    if let Some(clock) = cfg.clock.as_ref() {
        if let Some(fmt) = clock.date_format {
            if fmt > 4 {
                return Err(ConfigError::Validation("clock date_format must be 0..=4".into()));
            }
        }
        if let Some(secs) = clock.mode_interval_secs {
            if !(1..=60).contains(&secs) {
                return Err(ConfigError::Validation(
                    "clock mode_interval_secs must be 1..=60".into(),
                ));
            }
        }
    }
    Ok(())
}

/// Builds runtime settings from a validated config, funneling every value
/// through the same checks the live update path uses.
pub fn to_settings(cfg: &Config) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    let mut apply = |u: SettingsUpdate| -> Result<(), ConfigError> {
        settings
            .apply(u)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    };

    if let Some(display) = cfg.display.as_ref() {
        if let Some(style) = display.style.as_deref().and_then(DisplayStyle::from_name) {
            apply(SettingsUpdate::Style(style))?;
        }
        if let Some(color) = display.led_color.as_deref().and_then(LedColor::from_name) {
            apply(SettingsUpdate::LedColor(color))?;
        }
        if let Some(color) = display.surround_color.as_deref().and_then(SurroundColor::from_name) {
            apply(SettingsUpdate::SurroundColor(color))?;
        }
        if let Some(size) = display.led_size {
            apply(SettingsUpdate::LedSize(size))?;
        }
        if let Some(spacing) = display.led_spacing {
            apply(SettingsUpdate::LedSpacing(spacing))?;
        }
        if let Some(rot) = display.rotate_deg {
            let rotation = if rot == 180 { Rotation::Flipped } else { Rotation::Normal };
            apply(SettingsUpdate::Rotation(rotation))?;
        }
    }
    if let Some(clock) = cfg.clock.as_ref() {
        if let Some(v) = clock.use_24h {
            apply(SettingsUpdate::Use24Hour(v))?;
        }
        if let Some(v) = clock.leading_zero {
            apply(SettingsUpdate::LeadingZero(v))?;
        }
        if let Some(v) = clock.fahrenheit {
            apply(SettingsUpdate::Fahrenheit(v))?;
        }
        if let Some(fmt) = clock.date_format {
            apply(SettingsUpdate::DateFormat(fmt))?;
        }
        if let Some(secs) = clock.mode_interval_secs {
            apply(SettingsUpdate::ModeInterval(secs))?;
        }
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DateFormat;

    fn yaml(text: &str) -> Config {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn merge_layers_file_over_defaults() {
        let mut cfg = Config::default();
        merge(
            &mut cfg,
            yaml("display:\n  style: blocks\n  led_size: 6\nclock:\n  use_24h: false\n"),
        );
        let display = cfg.display.as_ref().unwrap();
        assert_eq!(display.style.as_deref(), Some("blocks"));
        assert_eq!(display.led_size, Some(6));
        assert_eq!(cfg.clock.as_ref().unwrap().use_24h, Some(false));
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let cfg = yaml("display:\n  led_size: 13\n");
        assert!(validate(&cfg).is_err());
        let cfg = yaml("display:\n  rotate_deg: 90\n");
        assert!(validate(&cfg).is_err());
        let cfg = yaml("clock:\n  date_format: 7\n");
        assert!(validate(&cfg).is_err());
        let cfg = yaml("display:\n  style: neon\n");
        assert!(validate(&cfg).is_err());
        let cfg = yaml("display:\n  style: led\n  rotate_deg: 180\nclock:\n  mode_interval_secs: 60\n");
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn settings_are_built_from_the_config() {
        let cfg = yaml(
            "display:\n  style: blocks\n  led_color: cyan\n  surround_color: match\n  rotate_deg: 180\nclock:\n  use_24h: false\n  date_format: 2\n  mode_interval_secs: 10\n",
        );
        let settings = to_settings(&cfg).unwrap();
        assert_eq!(settings.theme.style, DisplayStyle::Blocks);
        assert_eq!(settings.theme.on_color, crate::constants::COLOR_CYAN);
        assert_eq!(settings.theme.surround_color, crate::constants::COLOR_CYAN);
        assert_eq!(settings.theme.rotation, Rotation::Flipped);
        assert!(!settings.use_24h);
        assert_eq!(settings.date_format, DateFormat::IsoYearMonthDay);
        assert_eq!(settings.mode_interval_secs, 10);
    }
}
