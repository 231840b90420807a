// File: crates/seagrid-core/tests/layer.rs
// Purpose: Grid layer replace semantics against the retained display list.

use seagrid_core::{
    DisplayItem, DisplayList, DrawSurface, GridConfig, GridError, GridLayer, GridTheme, Handle, Interval, LatLon, LineStyle,
    PixelOffset, ShipCategory,
};
use seagrid_core::vessel::MarkerStyle;

/// Surface that only counts calls, to check the order of operations.
#[derive(Default)]
struct CallLog {
    next: u64,
    calls: Vec<&'static str>,
    released: usize,
}

impl DrawSurface for CallLog {
    fn draw_line(&mut self, _coords: &[LatLon], _style: &LineStyle) -> Handle {
        self.calls.push("line");
        self.next += 1;
        Handle(self.next)
    }
    fn draw_label(&mut self, _anchor: LatLon, _text: &str, _offset: PixelOffset) -> Handle {
        self.calls.push("label");
        self.next += 1;
        Handle(self.next)
    }
    fn clear_all(&mut self, handles: &[Handle]) {
        self.calls.push("clear");
        self.released += handles.len();
    }
}

#[test]
fn rebuild_draws_lines_and_labels() {
    let mut surface = DisplayList::new();
    let mut layer = GridLayer::new(GridTheme::ocean());
    let n = layer.rebuild(&mut surface, &GridConfig::with_step(10.0)).unwrap().len();

    // 17 parallels + 37 meridians, each with a label
    assert_eq!(n, 2 * (17 + 37));
    assert_eq!(surface.line_count(), 17 + 37);
    assert_eq!(surface.label_count(), 17 + 37);
    assert_eq!(layer.shown().map(|c| c.step_degrees), Some(10.0));
}

#[test]
fn rebuild_replaces_previous_grid_without_leaks() {
    let mut surface = DisplayList::new();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut surface, &GridConfig::with_step(1.0)).unwrap();
    let first: Vec<Handle> = layer.handles().to_vec();

    layer.rebuild(&mut surface, &GridConfig::with_step(5.0)).unwrap();
    assert_eq!(surface.len(), layer.len());
    assert!(first.iter().all(|h| surface.get(*h).is_none()));

    layer.rebuild(&mut surface, &GridConfig::with_step(5.0)).unwrap();
    assert_eq!(surface.len(), 2 * (35 + 73));
}

#[test]
fn hiding_the_grid_releases_everything() {
    let mut surface = DisplayList::new();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut surface, &GridConfig::with_step(2.0)).unwrap();
    assert!(!surface.is_empty());

    let drawn = layer.rebuild(&mut surface, &GridConfig::hidden()).unwrap().len();
    assert_eq!(drawn, 0);
    assert!(surface.is_empty());
    assert!(layer.is_empty());
}

#[test]
fn failed_rebuild_leaves_surface_untouched() {
    let mut surface = DisplayList::new();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut surface, &GridConfig::with_step(10.0)).unwrap();
    let before = surface.len();
    let handles = layer.handles().to_vec();

    let bad = GridConfig { lat_bounds: Interval::new(30.0, -30.0), ..GridConfig::default() };
    assert!(layer.rebuild(&mut surface, &bad).is_err());
    assert_eq!(surface.len(), before);
    assert_eq!(layer.handles(), handles.as_slice());
    assert_eq!(layer.shown().map(|c| c.step_degrees), Some(10.0));
}

#[test]
fn line_limit_refuses_dense_grids_without_touching_the_surface() {
    let mut surface = DisplayList::new();
    let mut layer = GridLayer::new(GridTheme::ocean()).with_line_limit(1_000);
    layer.rebuild(&mut surface, &GridConfig::with_step(1.0)).unwrap();
    let before = surface.len();

    let err = layer.rebuild(&mut surface, &GridConfig::with_step(0.1)).unwrap_err();
    assert_eq!(err, GridError::TooManyLines { lines: 1701 + 3601, limit: 1_000 });
    assert_eq!(surface.len(), before);
    assert_eq!(layer.shown().map(|c| c.step_degrees), Some(1.0));

    // Without a limit the same step is drawn.
    let mut open = GridLayer::default();
    assert!(open.line_limit().is_none());
    open.rebuild(&mut surface, &GridConfig::with_step(0.1)).unwrap();
    assert_eq!(open.len(), 2 * (1701 + 3601));
}

#[test]
fn old_elements_are_released_before_new_ones_are_drawn() {
    let mut surface = CallLog::default();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut surface, &GridConfig::with_step(10.0)).unwrap();
    assert!(!surface.calls.contains(&"clear"), "nothing to release on first draw");

    surface.calls.clear();
    layer.rebuild(&mut surface, &GridConfig::with_step(10.0)).unwrap();
    assert_eq!(surface.calls.first(), Some(&"clear"));
    assert_eq!(surface.calls.iter().filter(|c| **c == "clear").count(), 1);
    assert_eq!(surface.released, 2 * (17 + 37));
}

#[test]
fn grid_rebuild_keeps_vessel_markers() {
    let mut surface = DisplayList::new();
    let style = MarkerStyle { color: ShipCategory::Tanker.color(), heading: Some(90.0), radius: 8.0 };
    surface.add_marker(LatLon::new(19.0, 72.8), style, "TANKER ONE");

    let mut layer = GridLayer::default();
    layer.rebuild(&mut surface, &GridConfig::with_step(10.0)).unwrap();
    layer.rebuild(&mut surface, &GridConfig::hidden()).unwrap();
    assert_eq!(surface.len(), 1);
    assert_eq!(surface.marker_count(), 1);

    surface.clear_markers();
    assert!(surface.is_empty());
}

#[test]
fn display_list_keeps_paint_order() {
    let mut surface = DisplayList::new();
    let style = GridTheme::ocean().major;
    let a = surface.draw_line(&[LatLon::new(0.0, -10.0), LatLon::new(0.0, 10.0)], &style);
    let b = surface.draw_label(LatLon::new(0.0, -8.0), "0°N", PixelOffset::new(0.0, -10.0));
    let order: Vec<Handle> = surface.items().map(|(h, _)| h).collect();
    assert_eq!(order, vec![a, b]);
    assert!(matches!(surface.get(b), Some(DisplayItem::Label { text, .. }) if text == "0°N"));

    surface.clear_all(&[a, Handle(999)]);
    assert_eq!(surface.len(), 1);
}
