// File: crates/seagrid-render-skia/src/lib.rs
// Summary: Skia raster backend; paints a seagrid display list onto a Mercator map canvas.

pub mod map;

pub use map::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions, HEIGHT, WIDTH};
