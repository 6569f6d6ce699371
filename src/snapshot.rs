/*
 *  snapshot.rs
 *
 *  RetroClock - retro LED matrix clock
 *  (c) 2024-26 RetroClock contributors
 *
 *  Wire-format export of the current frame for remote viewers.
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

use crate::constants::{TOTAL_HEIGHT, TOTAL_WIDTH};
use crate::matrix::MatrixBuffer;
use crate::theme::DisplayTheme;

/// JSON-serializable picture of the frame plus the styling a remote
/// renderer needs to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    /// The 64 packed column bytes.
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Display style index: 0 blocks, 1 circular LEDs.
    pub style: u8,
    pub led_color: u16,
    pub surround_color: u16,
}

impl DisplaySnapshot {
    pub fn capture(fb: &MatrixBuffer, theme: &DisplayTheme) -> Self {
        Self {
            buffer: fb.as_bytes().to_vec(),
            width: TOTAL_WIDTH as u32,
            height: TOTAL_HEIGHT as u32,
            style: theme.style.as_index(),
            led_color: theme.on_color,
            surround_color: theme.surround_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLOR_DARK_GRAY, COLOR_RED};

    #[test]
    fn snapshot_serializes_with_the_wire_field_names() {
        let mut fb = MatrixBuffer::new();
        fb.set_pixel(0, 0, true);
        let snap = DisplaySnapshot::capture(&fb, &DisplayTheme::default());
        let json: serde_json::Value = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["width"], 32);
        assert_eq!(json["height"], 16);
        assert_eq!(json["style"], 1);
        assert_eq!(json["ledColor"], COLOR_RED);
        assert_eq!(json["surroundColor"], COLOR_DARK_GRAY);
        assert_eq!(json["buffer"].as_array().unwrap().len(), 64);
        assert_eq!(json["buffer"][0], 1);
    }

    #[test]
    fn snapshot_round_trips() {
        let snap = DisplaySnapshot::capture(&MatrixBuffer::new(), &DisplayTheme::default());
        let text = serde_json::to_string(&snap).unwrap();
        let back: DisplaySnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snap);
    }
}
