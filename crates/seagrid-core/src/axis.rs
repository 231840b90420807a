// File: crates/seagrid-core/src/axis.rs
// Summary: Grid axis kinds and degree label formatting with hemisphere suffixes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridAxis {
    /// Parallels: horizontal lines at a fixed latitude.
    Latitude,
    /// Meridians: vertical lines at a fixed longitude.
    Longitude,
}

impl GridAxis {
    pub fn label(self, deg: f64) -> String {
        match self {
            GridAxis::Latitude => lat_label(deg),
            GridAxis::Longitude => lon_label(deg),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GridAxis::Latitude => "latitude",
            GridAxis::Longitude => "longitude",
        }
    }
}

/// `5` -> "5°N", `-5` -> "5°S".
pub fn lat_label(deg: f64) -> String {
    with_hemisphere(deg, 'N', 'S')
}

/// `120` -> "120°E", `-120` -> "120°W".
pub fn lon_label(deg: f64) -> String {
    with_hemisphere(deg, 'E', 'W')
}

fn with_hemisphere(deg: f64, pos: char, neg: char) -> String {
    let r = round_micro(deg);
    let suffix = if r >= 0.0 { pos } else { neg };
    format!("{}°{}", r.abs(), suffix)
}

// Drops float noise such as 0.30000000000000004 so labels print as typed.
fn round_micro(v: f64) -> f64 {
    let r = (v * 1e6).round() / 1e6;
    if r == 0.0 { 0.0 } else { r }
}
