// File: crates/seagrid-core/src/grid.rs
// Summary: Latitude/longitude grid overlay generation (lines + edge labels).
// Notes:
// - Coordinates are computed as `k * step` for integer `k`, so there is no
//   accumulated drift from repeated addition, even at 0.1° steps.
// - Major/minor classification uses a fixed 1e-6 tolerance against 10° multiples.

use serde::{Deserialize, Serialize};

use crate::axis::GridAxis;
use crate::error::GridError;
use crate::theme::{GridTheme, LineStyle};
use crate::types::{Interval, LatLon, PixelOffset};

/// Tolerance for "is a multiple of" tests.
pub const EPSILON: f64 = 1e-6;
/// Lines on multiples of this many degrees are major.
pub const MAJOR_INTERVAL: f64 = 10.0;
/// Distance of labels from the western/northern grid edge, in degrees.
pub const LABEL_INSET_DEG: f64 = 2.0;
/// Latitude labels sit on their line, centred vertically on a 20px box.
pub const LAT_LABEL_OFFSET: PixelOffset = PixelOffset::new(0.0, -10.0);
/// Longitude labels hang below the anchor, centred horizontally on a 40px box.
pub const LON_LABEL_OFFSET: PixelOffset = PixelOffset::new(-20.0, 0.0);

// Keeps exact multiples (e.g. -85 at 0.1°) whose quotient lands a hair off an integer.
const QUOTIENT_SLACK: f64 = 1e-9;
// Relative rounding allowed between `k * step` and a bound it is meant to equal.
const PRODUCT_ROUNDING: f64 = 1e-12;

/// Grid settings. In JSON every field is optional and bounds are `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Degrees between adjacent lines; `0` disables the grid.
    pub step_degrees: f64,
    pub visible: bool,
    pub lat_bounds: Interval,
    pub lon_bounds: Interval,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step_degrees: 5.0,
            visible: true,
            lat_bounds: Interval::latitude(),
            lon_bounds: Interval::longitude(),
        }
    }
}

impl GridConfig {
    pub fn with_step(step_degrees: f64) -> Self {
        Self { step_degrees, ..Self::default() }
    }

    pub fn hidden() -> Self {
        Self { visible: false, ..Self::default() }
    }

    /// A disabled grid yields no elements and is never validated.
    pub fn is_enabled(&self) -> bool {
        self.visible && self.step_degrees != 0.0
    }

    pub fn validate(&self) -> Result<(), GridError> {
        let step = self.step_degrees;
        if !step.is_finite() || step < 0.0 {
            return Err(GridError::invalid(format!("step must be a positive number of degrees, got {step}")));
        }
        check_bounds(GridAxis::Latitude, &self.lat_bounds, &Interval::new(-90.0, 90.0))?;
        check_bounds(GridAxis::Longitude, &self.lon_bounds, &Interval::new(-180.0, 180.0))?;
        Ok(())
    }
}

fn check_bounds(axis: GridAxis, b: &Interval, limits: &Interval) -> Result<(), GridError> {
    if !b.is_well_formed() {
        return Err(GridError::invalid(format!(
            "{} bounds must satisfy min < max, got [{}, {}]",
            axis.name(), b.min, b.max
        )));
    }
    if !b.within(limits) {
        return Err(GridError::invalid(format!(
            "{} bounds [{}, {}] exceed [{}, {}]",
            axis.name(), b.min, b.max, limits.min, limits.max
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub axis: GridAxis,
    /// The fixed degree value (latitude for parallels, longitude for meridians).
    pub coordinate: f64,
    pub is_major: bool,
    pub style: LineStyle,
    /// Endpoints spanning the full opposite range.
    pub path: [LatLon; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLabel {
    pub axis: GridAxis,
    pub coordinate: f64,
    pub text: String,
    pub anchor: LatLon,
    pub pixel_offset: PixelOffset,
    pub is_major: bool,
}

/// Output of one generation pass: latitude elements first (south to north),
/// then longitude elements (west to east).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Grid {
    pub lines: Vec<GridLine>,
    pub labels: Vec<GridLabel>,
}

impl Grid {
    pub fn is_empty(&self) -> bool { self.lines.is_empty() && self.labels.is_empty() }

    pub fn lines_on(&self, axis: GridAxis) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |l| l.axis == axis)
    }

    pub fn coordinates(&self, axis: GridAxis) -> Vec<f64> {
        self.lines_on(axis).map(|l| l.coordinate).collect()
    }

    pub fn major_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_major).count()
    }
}

/// Whether `value` is within [`EPSILON`] of the nearest multiple of `step`.
pub fn is_near_multiple(value: f64, step: f64) -> bool {
    (value - (value / step).round() * step).abs() < EPSILON
}

pub fn is_major(coordinate: f64) -> bool {
    is_near_multiple(coordinate, MAJOR_INTERVAL)
}

/// Multiples of `step` inside `bounds`, ascending, starting from the smallest
/// one `>= bounds.min` and ending with the largest one `<= bounds.max`.
pub fn axis_coordinates(bounds: Interval, step: f64) -> Result<Vec<f64>, GridError> {
    if !bounds.is_well_formed() {
        return Err(GridError::invalid(format!("bounds must satisfy min < max, got [{}, {}]", bounds.min, bounds.max)));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(GridError::invalid(format!("step must be > 0, got {step}")));
    }
    let (first, last) = multiplier_range(bounds, step);
    if last < first {
        return Ok(Vec::new());
    }
    // The slack may admit one multiple just outside a bound. Keep it only when
    // it equals the bound up to rounding, and then emit the bound itself.
    let tol = bounds.min.abs().max(bounds.max.abs()).max(1.0) * PRODUCT_ROUNDING;
    let (first, last) = (first as i64, last as i64);
    Ok((first..=last)
        .filter_map(|k| {
            let v = k as f64 * step;
            if v < bounds.min {
                (bounds.min - v <= tol).then_some(bounds.min)
            } else if v > bounds.max {
                (v - bounds.max <= tol).then_some(bounds.max)
            } else {
                Some(v)
            }
        })
        .collect())
}

fn multiplier_range(bounds: Interval, step: f64) -> (f64, f64) {
    ((bounds.min / step - QUOTIENT_SLACK).ceil(), (bounds.max / step + QUOTIENT_SLACK).floor())
}

/// Upper bound on the number of lines `config` generates, computed without
/// generating them. Zero for a disabled grid.
pub fn line_estimate(config: &GridConfig) -> Result<usize, GridError> {
    if !config.is_enabled() {
        return Ok(0);
    }
    config.validate()?;
    let per_axis = |b: Interval| {
        let (first, last) = multiplier_range(b, config.step_degrees);
        if last < first { 0.0 } else { last - first + 1.0 }
    };
    let total = per_axis(config.lat_bounds) + per_axis(config.lon_bounds);
    Ok(if total >= usize::MAX as f64 { usize::MAX } else { total as usize })
}

/// Generate the grid with the default (ocean) theme.
pub fn generate_grid(config: &GridConfig) -> Result<Grid, GridError> {
    generate_grid_with_theme(config, &GridTheme::default())
}

pub fn generate_grid_with_theme(config: &GridConfig, theme: &GridTheme) -> Result<Grid, GridError> {
    if !config.is_enabled() {
        return Ok(Grid::default());
    }
    config.validate()?;

    let step = config.step_degrees;
    let lat = config.lat_bounds;
    let lon = config.lon_bounds;
    let lats = axis_coordinates(lat, step)?;
    let lons = axis_coordinates(lon, step)?;

    let mut grid = Grid {
        lines: Vec::with_capacity(lats.len() + lons.len()),
        labels: Vec::with_capacity(lats.len() + lons.len()),
    };

    for &v in &lats {
        let major = is_major(v);
        grid.lines.push(GridLine {
            axis: GridAxis::Latitude,
            coordinate: v,
            is_major: major,
            style: theme.style_for(major),
            path: [LatLon::new(v, lon.min), LatLon::new(v, lon.max)],
        });
        grid.labels.push(GridLabel {
            axis: GridAxis::Latitude,
            coordinate: v,
            text: GridAxis::Latitude.label(v),
            anchor: LatLon::new(v, lon.min + LABEL_INSET_DEG),
            pixel_offset: LAT_LABEL_OFFSET,
            is_major: major,
        });
    }

    for &v in &lons {
        let major = is_major(v);
        grid.lines.push(GridLine {
            axis: GridAxis::Longitude,
            coordinate: v,
            is_major: major,
            style: theme.style_for(major),
            path: [LatLon::new(lat.min, v), LatLon::new(lat.max, v)],
        });
        grid.labels.push(GridLabel {
            axis: GridAxis::Longitude,
            coordinate: v,
            text: GridAxis::Longitude.label(v),
            anchor: LatLon::new(lat.max - LABEL_INSET_DEG, v),
            pixel_offset: LON_LABEL_OFFSET,
            is_major: major,
        });
    }

    log::debug!(
        "grid step={}°: {} parallels, {} meridians, {} major",
        step, lats.len(), lons.len(), grid.major_count()
    );
    Ok(grid)
}
