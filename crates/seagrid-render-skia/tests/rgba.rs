// File: crates/seagrid-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background fill, grid strokes, heat points and marker fill.

use seagrid_core::{DisplayList, GridConfig, GridLayer, HeatPoint, LatLon, MarkerStyle, MercatorView, ShipCategory};
use seagrid_render_skia::{render_to_rgba8, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.draw_labels = false;
    o
}

#[test]
fn buffer_shape_and_background() {
    let list = DisplayList::new();
    let o = opts();
    let (px, w, h, stride) = render_to_rgba8(&list, &o).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let bg = o.theme.background;
    assert_eq!(pixel(&px, stride, 5, 5), [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn equator_stroke_is_painted() {
    let mut list = DisplayList::new();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut list, &GridConfig::with_step(10.0)).unwrap();

    let o = opts();
    let (px, w, h, stride) = render_to_rgba8(&list, &o).unwrap();
    let bg = o.theme.background;
    // between the 0° and 10°E meridians, on the equator row
    let on_line = pixel(&px, stride, w as usize / 2 + 14, h as usize / 2);
    assert_ne!(on_line, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn hidden_grid_leaves_only_background() {
    let mut list = DisplayList::new();
    let mut layer = GridLayer::default();
    layer.rebuild(&mut list, &GridConfig::with_step(5.0)).unwrap();
    layer.rebuild(&mut list, &GridConfig::hidden()).unwrap();

    let o = opts();
    let (px, _, _, stride) = render_to_rgba8(&list, &o).unwrap();
    let bg = o.theme.background;
    let want = [bg.r, bg.g, bg.b, 255];
    assert!(px.chunks_exact(4).all(|p| p == want));
    assert_eq!(stride % 4, 0);
}

#[test]
fn marker_body_uses_category_colour() {
    let mut list = DisplayList::new();
    let style = MarkerStyle { color: ShipCategory::Fishing.color(), heading: None, radius: 8.0 };
    let at = LatLon::new(20.0, 60.0);
    list.add_marker(at, style, "FISHER");

    let o = opts();
    let (px, w, h, stride) = render_to_rgba8(&list, &o).unwrap();
    let view = MercatorView::new(w as f32, h as f32, o.view);
    let (x, y) = view.to_px(at);
    let p = pixel(&px, stride, (x + 5.0) as usize, y as usize);
    let c = style.color;
    for (got, want) in p.iter().zip([c.r, c.g, c.b]) {
        assert!((*got as i32 - want as i32).abs() <= 2, "pixel {p:?} vs {c}");
    }
}

#[test]
fn strongest_heat_point_is_red_and_fades_out() {
    let mut list = DisplayList::new();
    let hot = HeatPoint::new(10.0, 70.0, 40.0);
    list.add_heat_points(&[hot, HeatPoint::new(-30.0, -120.0, 4.0)]);

    let o = opts();
    let (px, w, h, stride) = render_to_rgba8(&list, &o).unwrap();
    let view = MercatorView::new(w as f32, h as f32, o.view);
    let (x, y) = view.to_px(hot.position);
    let centre = pixel(&px, stride, x.round() as usize, y.round() as usize);
    assert!(centre[0] > 180 && centre[2] < 80, "centre {centre:?}");

    let bg = o.theme.background;
    let outside = pixel(&px, stride, (x + 40.0) as usize, y as usize);
    assert_eq!(outside, [bg.r, bg.g, bg.b, 255]);
}
