// File: crates/seagrid-core/src/heat.rs
// Summary: Weighted activity points shown as a heat layer under the grid.

use serde::Serialize;
use serde_json::Value;

use crate::theme::Rgba;
use crate::types::LatLon;

/// Blur radius of one heat point, in pixels.
pub const HEAT_RADIUS_PX: f32 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatPoint {
    pub position: LatLon,
    /// Relative weight (ship count, mean speed, ...). Never negative.
    pub intensity: f64,
}

impl HeatPoint {
    pub fn new(lat: f64, lon: f64, intensity: f64) -> Self {
        Self { position: LatLon::new(lat, lon), intensity }
    }
}

/// Parse heat points from `[{"lat", "lon", "intensity"}, ...]` or
/// `[[lat, lon, intensity], ...]`. Entries without a finite position are
/// skipped; a missing intensity counts as 1.
pub fn parse_heat_points(payload: &Value) -> Vec<HeatPoint> {
    let Some(list) = payload.as_array() else {
        log::warn!("heat payload is not an array");
        return Vec::new();
    };
    let num = |v: Option<&Value>| v.and_then(Value::as_f64).filter(|x| x.is_finite());
    let points: Vec<HeatPoint> = list
        .iter()
        .filter_map(|item| {
            let (lat, lon, w) = match item {
                Value::Object(o) => (num(o.get("lat")), num(o.get("lon")), num(o.get("intensity"))),
                Value::Array(a) => (num(a.first()), num(a.get(1)), num(a.get(2))),
                _ => return None,
            };
            Some(HeatPoint::new(lat?, lon?, w.unwrap_or(1.0).max(0.0)))
        })
        .collect();
    if points.len() < list.len() {
        log::debug!("skipped {} heat entries without a position", list.len() - points.len());
    }
    points
}

/// Largest intensity, or 1 when there is nothing positive to scale against.
pub fn max_intensity(points: &[HeatPoint]) -> f64 {
    let m = points.iter().map(|p| p.intensity).fold(0.0, f64::max);
    if m > 0.0 { m } else { 1.0 }
}

/// Colour ramp for a normalized intensity: blue at 0.4, lime at 0.65, red at 1.
/// Values are clamped into [0, 1]; below 0.4 the ramp stays blue.
pub fn heat_color(t: f64) -> Rgba {
    const STOPS: [(f64, (u8, u8, u8)); 3] = [(0.4, (0, 0, 255)), (0.65, (0, 255, 0)), (1.0, (255, 0, 0))];
    let t = t.clamp(0.0, 1.0);
    let (lo_t, lo) = STOPS[0];
    if t <= lo_t {
        return Rgba::rgb(lo.0, lo.1, lo.2);
    }
    for w in STOPS.windows(2) {
        let ((a_t, a), (b_t, b)) = (w[0], w[1]);
        if t <= b_t {
            let f = (t - a_t) / (b_t - a_t);
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
            return Rgba::rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2));
        }
    }
    Rgba::rgb(255, 0, 0)
}
