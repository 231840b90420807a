// File: crates/seagrid-core/src/types.rs
// Summary: Shared geographic types and constants (intervals, bounds, points, pixel offsets).

use serde::{Deserialize, Serialize};

/// Southern/northern limit of the drawn grid; avoids Mercator distortion near the poles.
pub const LAT_MIN: f64 = -85.0;
pub const LAT_MAX: f64 = 85.0;
/// Western/eastern limit of the drawn grid.
pub const LON_MIN: f64 = -180.0;
pub const LON_MAX: f64 = 180.0;

/// Closed interval of degrees, serialized as `[min, max]`.
/// Contract: well-formed when both ends are finite and `min < max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn latitude() -> Self {
        Self::new(LAT_MIN, LAT_MAX)
    }

    pub const fn longitude() -> Self {
        Self::new(LON_MIN, LON_MAX)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Whether this interval lies inside `outer` (inclusive on both ends).
    pub fn within(&self, outer: &Interval) -> bool {
        self.min >= outer.min && self.max <= outer.max
    }
}

impl From<[f64; 2]> for Interval {
    fn from(v: [f64; 2]) -> Self { Self::new(v[0], v[1]) }
}

impl From<Interval> for [f64; 2] {
    fn from(i: Interval) -> Self { [i.min, i.max] }
}

/// A geographic point in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Rectangular geographic viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat: Interval,
    pub lon: Interval,
}

impl GeoBounds {
    pub const fn new(lat: Interval, lon: Interval) -> Self {
        Self { lat, lon }
    }

    /// The whole grid area: [-85, 85] x [-180, 180].
    pub const fn world() -> Self {
        Self::new(Interval::latitude(), Interval::longitude())
    }

    pub fn contains(&self, p: LatLon) -> bool {
        self.lat.contains(p.lat) && self.lon.contains(p.lon)
    }
}

impl Default for GeoBounds {
    fn default() -> Self { Self::world() }
}

/// Screen-space displacement of a label from its anchor, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelOffset {
    pub dx: f32,
    pub dy: f32,
}

impl PixelOffset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}
