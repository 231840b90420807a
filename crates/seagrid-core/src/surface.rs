// File: crates/seagrid-core/src/surface.rs
// Summary: Drawable-surface contract, a retained display list, and grid layer ownership.

use std::collections::BTreeMap;

use crate::error::GridError;
use crate::heat::HeatPoint;
use crate::grid::{generate_grid_with_theme, line_estimate, Grid, GridConfig};
use crate::theme::{GridTheme, LineStyle};
use crate::types::{LatLon, PixelOffset};
use crate::vessel::{MarkerStyle, VesselRecord};

/// Opaque id of one element drawn on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub u64);

/// Anything that can show grid lines and labels and later remove them again.
pub trait DrawSurface {
    fn draw_line(&mut self, coords: &[LatLon], style: &LineStyle) -> Handle;
    fn draw_label(&mut self, anchor: LatLon, text: &str, offset: PixelOffset) -> Handle;
    /// Release the given elements. Unknown handles are ignored.
    fn clear_all(&mut self, handles: &[Handle]);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    Line { coords: Vec<LatLon>, style: LineStyle },
    Label { anchor: LatLon, text: String, offset: PixelOffset },
    Marker { position: LatLon, style: MarkerStyle, title: String },
    Heat(HeatPoint),
}

/// Retained, in-memory surface. Items keep insertion order (handles are monotonic),
/// which is also the paint order used by renderers.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    next: u64,
    items: BTreeMap<Handle, DisplayItem>,
}

impl DisplayList {
    pub fn new() -> Self { Self::default() }

    fn insert(&mut self, item: DisplayItem) -> Handle {
        let h = Handle(self.next);
        self.next += 1;
        self.items.insert(h, item);
        h
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn get(&self, handle: Handle) -> Option<&DisplayItem> { self.items.get(&handle) }

    pub fn items(&self) -> impl Iterator<Item = (Handle, &DisplayItem)> + '_ {
        self.items.iter().map(|(h, i)| (*h, i))
    }

    pub fn line_count(&self) -> usize {
        self.items.values().filter(|i| matches!(i, DisplayItem::Line { .. })).count()
    }

    pub fn label_count(&self) -> usize {
        self.items.values().filter(|i| matches!(i, DisplayItem::Label { .. })).count()
    }

    pub fn marker_count(&self) -> usize {
        self.items.values().filter(|i| matches!(i, DisplayItem::Marker { .. })).count()
    }

    pub fn add_marker(&mut self, position: LatLon, style: MarkerStyle, title: impl Into<String>) -> Handle {
        self.insert(DisplayItem::Marker { position, style, title: title.into() })
    }

    /// One marker per vessel, styled by category and heading.
    pub fn add_vessels(&mut self, vessels: &[VesselRecord]) -> Vec<Handle> {
        vessels.iter().map(|v| self.add_marker(v.position, v.marker_style(), v.title())).collect()
    }

    /// Drop every vessel marker, leaving grid elements in place.
    pub fn clear_markers(&mut self) {
        self.items.retain(|_, i| !matches!(i, DisplayItem::Marker { .. }));
    }

    pub fn heat_count(&self) -> usize {
        self.items.values().filter(|i| matches!(i, DisplayItem::Heat(_))).count()
    }

    pub fn heat_points(&self) -> impl Iterator<Item = &HeatPoint> + '_ {
        self.items.values().filter_map(|i| match i {
            DisplayItem::Heat(p) => Some(p),
            _ => None,
        })
    }

    pub fn add_heat_points(&mut self, points: &[HeatPoint]) -> Vec<Handle> {
        points.iter().map(|p| self.insert(DisplayItem::Heat(*p))).collect()
    }

    /// Drop the heat layer, leaving grid elements and markers in place.
    pub fn clear_heat(&mut self) {
        self.items.retain(|_, i| !matches!(i, DisplayItem::Heat(_)));
    }
}

impl DrawSurface for DisplayList {
    fn draw_line(&mut self, coords: &[LatLon], style: &LineStyle) -> Handle {
        self.insert(DisplayItem::Line { coords: coords.to_vec(), style: *style })
    }

    fn draw_label(&mut self, anchor: LatLon, text: &str, offset: PixelOffset) -> Handle {
        self.insert(DisplayItem::Label { anchor, text: text.to_string(), offset })
    }

    fn clear_all(&mut self, handles: &[Handle]) {
        for h in handles {
            self.items.remove(h);
        }
    }
}

/// Owns the handles of the grid currently shown on a surface.
///
/// Every [`GridLayer::rebuild`] is a scoped replace: the new grid is generated
/// first, then the old handles are released, then the new elements are drawn.
/// A failed generation leaves the surface exactly as it was.
#[derive(Debug, Default)]
pub struct GridLayer {
    theme: GridTheme,
    handles: Vec<Handle>,
    shown: Option<GridConfig>,
    max_lines: Option<usize>,
}

impl GridLayer {
    pub fn new(theme: GridTheme) -> Self {
        Self { theme, handles: Vec::new(), shown: None, max_lines: None }
    }

    /// Refuse grids with more than `limit` lines instead of drawing them.
    /// Unlimited unless set.
    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.max_lines = Some(limit);
        self
    }

    pub fn line_limit(&self) -> Option<usize> { self.max_lines }

    pub fn theme(&self) -> &GridTheme { &self.theme }

    /// Handles of the elements currently drawn by this layer.
    pub fn handles(&self) -> &[Handle] { &self.handles }

    pub fn len(&self) -> usize { self.handles.len() }

    pub fn is_empty(&self) -> bool { self.handles.is_empty() }

    /// Configuration of the grid currently drawn, if any call succeeded.
    pub fn shown(&self) -> Option<&GridConfig> { self.shown.as_ref() }

    pub fn rebuild<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, config: &GridConfig) -> Result<&[Handle], GridError> {
        if let Some(limit) = self.max_lines {
            let lines = line_estimate(config)?;
            if lines > limit {
                return Err(GridError::TooManyLines { lines, limit });
            }
        }
        let grid = generate_grid_with_theme(config, &self.theme)?;
        self.clear(surface);
        self.draw(surface, &grid);
        self.shown = Some(*config);
        Ok(&self.handles)
    }

    /// Release everything this layer drew.
    pub fn clear<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let old = std::mem::take(&mut self.handles);
        if !old.is_empty() {
            surface.clear_all(&old);
            log::debug!("released {} grid elements", old.len());
        }
        self.shown = None;
    }

    fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, grid: &Grid) {
        self.handles.reserve(grid.lines.len() + grid.labels.len());
        for line in &grid.lines {
            self.handles.push(surface.draw_line(&line.path, &line.style));
        }
        for label in &grid.labels {
            self.handles.push(surface.draw_label(label.anchor, &label.text, label.pixel_offset));
        }
    }
}
