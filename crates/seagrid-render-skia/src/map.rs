// File: crates/seagrid-render-skia/src/map.rs
// Summary: Headless map rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use seagrid_core::heat::HEAT_RADIUS_PX;
use seagrid_core::{
    heat_color, max_intensity, DisplayItem, DisplayList, GeoBounds, GridTheme, HeatPoint, LatLon, LineStyle, MarkerStyle, MercatorView,
    PixelOffset, Rgba,
};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

// Label box size, matching the grid label offsets.
const LABEL_W: f32 = 40.0;
const LABEL_H: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 11.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Geographic area shown on the canvas.
    pub view: GeoBounds,
    pub theme: GridTheme,
    /// Text rendering varies by platform fonts; tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            view: GeoBounds::world(),
            theme: GridTheme::ocean(),
            draw_labels: true,
        }
    }
}

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Paint `list` and return the raster surface.
fn paint(list: &DisplayList, opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let view = MercatorView::new(opts.width as f32, opts.height as f32, opts.view);
    let canvas = surface.canvas();

    canvas.clear(color(opts.theme.background));

    // Heat under lines under labels under vessels, regardless of insertion order.
    let heat: Vec<HeatPoint> = list.heat_points().copied().collect();
    let max = max_intensity(&heat);
    for p in &heat {
        draw_heat(canvas, &view, p, max);
    }
    for (_, item) in list.items() {
        if let DisplayItem::Line { coords, style } = item {
            draw_polyline(canvas, &view, coords, style);
        }
    }
    if opts.draw_labels {
        let mut font = skia::Font::default();
        font.set_size(LABEL_FONT_SIZE);
        for (_, item) in list.items() {
            if let DisplayItem::Label { anchor, text, offset } = item {
                draw_label(canvas, &view, &font, &opts.theme, *anchor, text, *offset);
            }
        }
    }
    let mut markers = 0usize;
    for (_, item) in list.items() {
        if let DisplayItem::Marker { position, style, .. } = item {
            if view.contains(*position) {
                draw_marker(canvas, &view, *position, style);
                markers += 1;
            }
        }
    }

    log::debug!(
        "painted {} heat points, {} lines, {} labels, {} of {} markers at {}x{}",
        heat.len(), list.line_count(), list.label_count(), markers, list.marker_count(), opts.width, opts.height
    );
    Ok(surface)
}

/// Render to PNG bytes in memory.
pub fn render_to_png_bytes(list: &DisplayList, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = paint(list, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(list: &DisplayList, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(list, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Render to unpremultiplied RGBA8. Returns (pixels, width, height, row stride in bytes).
pub fn render_to_rgba8(list: &DisplayList, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = paint(list, opts)?;
    let (w, h) = (opts.width, opts.height);
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((px, w, h, stride))
}

// ---- helpers ----------------------------------------------------------------

fn draw_heat(canvas: &skia::Canvas, view: &MercatorView, point: &HeatPoint, max: f64) {
    let (x, y) = view.to_px(point.position);
    let t = point.intensity / max;
    let c = heat_color(t);
    // Weak points fade out rather than shrink.
    let alpha = (255.0 * t.clamp(0.05, 1.0)).round() as u8;
    let colors = [color(c.with_opacity(alpha as f32 / 255.0)), color(Rgba::rgba(c.r, c.g, c.b, 0))];
    let Some(shader) = skia::Shader::radial_gradient(
        (x, y),
        HEAT_RADIUS_PX,
        &colors[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    ) else {
        return;
    };
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_shader(shader);
    canvas.draw_circle((x, y), HEAT_RADIUS_PX, &paint);
}

fn draw_polyline(canvas: &skia::Canvas, view: &MercatorView, coords: &[LatLon], style: &LineStyle) {
    if coords.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let (x0, y0) = view.to_px(coords[0]);
    path.move_to((x0, y0));
    for &p in coords.iter().skip(1) {
        path.line_to(view.to_px(p));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.weight);
    stroke.set_color(color(style.color.with_opacity(style.opacity)));
    if let Some(dash) = style.dash {
        stroke.set_path_effect(skia::PathEffect::dash(&dash.intervals(), 0.0));
    }
    canvas.draw_path(&path, &stroke);
}

fn draw_label(
    canvas: &skia::Canvas,
    view: &MercatorView,
    font: &skia::Font,
    theme: &GridTheme,
    anchor: LatLon,
    text: &str,
    offset: PixelOffset,
) {
    let (ax, ay) = view.to_px(anchor);
    let left = ax + offset.dx;
    let top = ay + offset.dy;

    let mut halo = skia::Paint::default();
    halo.set_anti_alias(true);
    halo.set_color(color(theme.label_halo));
    let rect = skia::Rect::from_xywh(left, top, LABEL_W, LABEL_H);
    canvas.draw_round_rect(rect, 3.0, 3.0, &halo);

    let mut ink = skia::Paint::default();
    ink.set_anti_alias(true);
    ink.set_color(color(theme.label));
    canvas.draw_str(text, (left + 3.0, top + LABEL_H * 0.7), font, &ink);
}

fn draw_marker(canvas: &skia::Canvas, view: &MercatorView, position: LatLon, style: &MarkerStyle) {
    let (x, y) = view.to_px(position);
    let r = style.radius;

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color(style.color));
    canvas.draw_circle((x, y), r, &body);

    let mut rim = skia::Paint::default();
    rim.set_anti_alias(true);
    rim.set_style(skia::paint::Style::Stroke);
    rim.set_stroke_width(1.0);
    rim.set_color(skia::Color::from_argb(77, 0, 0, 0));
    canvas.draw_circle((x, y), r, &rim);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(skia::Color::WHITE);
    canvas.draw_circle((x, y), r * 0.25, &dot);

    if let Some(h) = style.heading {
        let rad = (h as f32).to_radians();
        let (dx, dy) = (rad.sin(), -rad.cos());
        let mut tick = skia::Paint::default();
        tick.set_anti_alias(true);
        tick.set_style(skia::paint::Style::Stroke);
        tick.set_stroke_width(2.0);
        tick.set_color(color(style.color));
        canvas.draw_line((x + dx * r, y + dy * r), (x + dx * r * 1.75, y + dy * r * 1.75), &tick);
    }
}
