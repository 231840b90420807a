// File: crates/seagrid-core/src/lib.rs
// Summary: Core library entry point; exports grid generation, surfaces, projection and vessel records.

pub mod types;
pub mod error;
pub mod axis;
pub mod theme;
pub mod grid;
pub mod surface;
pub mod projection;
pub mod vessel;
pub mod heat;

pub use types::{GeoBounds, Interval, LatLon, PixelOffset};
pub use error::{ColorError, GridError, RecordError};
pub use axis::{lat_label, lon_label, GridAxis};
pub use theme::{DashPattern, GridTheme, LineStyle, Rgba};
pub use grid::{generate_grid, generate_grid_with_theme, Grid, GridConfig, GridLabel, GridLine};
pub use surface::{DisplayItem, DisplayList, DrawSurface, GridLayer, Handle};
pub use projection::MercatorView;
pub use vessel::{
    normalize_payload, normalize_record, parse_timestamp, search_destinations, MarkerStyle, ShipCategory, VesselRecord,
};
pub use heat::{heat_color, max_intensity, parse_heat_points, HeatPoint};
