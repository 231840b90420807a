// File: crates/seagrid-core/src/projection.rs
// Summary: Web Mercator transform from geographic viewport to pixel space.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::types::{GeoBounds, LatLon};

/// Latitude where Web Mercator becomes square (EPSG:3857 limit).
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

#[inline]
fn mercator_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (FRAC_PI_4 + phi * 0.5).tan().ln()
}

#[inline]
fn inverse_mercator_y(y: f64) -> f64 {
    (2.0 * y.exp().atan() - FRAC_PI_2).to_degrees()
}

/// Maps a geographic viewport onto a `width` x `height` pixel canvas.
/// North is up; longitude is linear, latitude follows the Mercator stretch.
#[derive(Clone, Copy, Debug)]
pub struct MercatorView {
    pub width: f32,
    pub height: f32,
    pub bounds: GeoBounds,
    // cached projected endpoints of the latitude range
    y_south: f64,
    y_north: f64,
}

impl MercatorView {
    pub fn new(width: f32, height: f32, bounds: GeoBounds) -> Self {
        let y_south = mercator_y(bounds.lat.min);
        let mut y_north = mercator_y(bounds.lat.max);
        if (y_north - y_south).abs() < 1e-12 { y_north = y_south + 1e-6; }
        Self { width: width.max(1.0), height: height.max(1.0), bounds, y_south, y_north }
    }

    #[inline]
    pub fn to_px(&self, p: LatLon) -> (f32, f32) {
        let lon_span = self.bounds.lon.span().max(1e-12);
        let x = (p.lon - self.bounds.lon.min) / lon_span * self.width as f64;
        let y = (self.y_north - mercator_y(p.lat)) / (self.y_north - self.y_south) * self.height as f64;
        (x as f32, y as f32)
    }

    #[inline]
    pub fn from_px(&self, px: f32, py: f32) -> LatLon {
        let lon_span = self.bounds.lon.span().max(1e-12);
        let lon = self.bounds.lon.min + (px as f64 / self.width as f64) * lon_span;
        let y = self.y_north - (py as f64 / self.height as f64) * (self.y_north - self.y_south);
        LatLon::new(inverse_mercator_y(y), lon)
    }

    pub fn contains(&self, p: LatLon) -> bool {
        self.bounds.contains(p)
    }
}
