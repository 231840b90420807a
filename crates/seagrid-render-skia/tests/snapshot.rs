// File: crates/seagrid-render-skia/tests/snapshot.rs
// Purpose: Golden map snapshots with bless flow.
// Behavior:
// - Renders deterministic grids (labels off) to PNG bytes and always checks
//   that two renders decode to identical pixels of the expected size.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else writes it as the new golden; with REQUIRE_SNAPSHOTS=1 a missing file fails.

use seagrid_core::{DisplayList, GeoBounds, GridConfig, GridLayer, GridTheme, HeatPoint, Interval};
use seagrid_render_skia::{render_to_png_bytes, RenderOptions};

const W: u32 = 512;
const H: u32 = 320;

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn write_snapshot(path: &std::path::Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).expect("snapshot dir"); }
    std::fs::write(path, bytes).expect("write snapshot");
    eprintln!("[snapshot] Wrote {} ({} bytes)", path.display(), bytes.len());
}

fn check(path: &std::path::Path, bytes: &[u8]) {
    if env_flag("UPDATE_SNAPSHOTS") {
        write_snapshot(path, bytes);
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        assert_eq!(decode(bytes).as_raw(), decode(&want).as_raw(), "Pixels differ: {}", path.display());
    } else {
        assert!(!env_flag("REQUIRE_SNAPSHOTS"), "missing snapshot {}", path.display());
        write_snapshot(path, bytes);
        let stored = std::fs::read(path).expect("reread snapshot");
        assert_eq!(decode(&stored).as_raw(), decode(bytes).as_raw());
    }
}

fn render(list: &DisplayList, theme: GridTheme, view: GeoBounds) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.width = W as i32;
    opts.height = H as i32;
    opts.view = view;
    opts.theme = theme;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let a = render_to_png_bytes(list, &opts).expect("render bytes");
    let b = render_to_png_bytes(list, &opts).expect("render bytes");

    let (ia, ib) = (decode(&a), decode(&b));
    assert_eq!(ia.dimensions(), (W, H));
    assert_eq!(ia.as_raw(), ib.as_raw(), "rendering is not deterministic");
    // Top-left corner is never under a line at these views.
    let bg = theme.background;
    assert_eq!(ia.get_pixel(2, 2).0, [bg.r, bg.g, bg.b, 255]);
    a
}

fn grid_list(config: GridConfig, theme: GridTheme) -> DisplayList {
    let mut list = DisplayList::new();
    GridLayer::new(theme).rebuild(&mut list, &config).expect("grid");
    list
}

fn snap(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_world_ten_degree() {
    let theme = GridTheme::ocean();
    let bytes = render(&grid_list(GridConfig::with_step(10.0), theme), theme, GeoBounds::world());
    check(&snap("world_10deg.png"), &bytes);
}

#[test]
fn golden_indian_ocean_two_degree_light() {
    let theme = GridTheme::light();
    let view = GeoBounds::new(Interval::new(-10.0, 30.0), Interval::new(40.0, 100.0));
    let bytes = render(&grid_list(GridConfig::with_step(2.0), theme), theme, view);
    check(&snap("indian_ocean_2deg_light.png"), &bytes);
}

#[test]
fn golden_heat_under_five_degree_grid() {
    let theme = GridTheme::ocean();
    let view = GeoBounds::new(Interval::new(-10.0, 30.0), Interval::new(40.0, 100.0));
    let mut list = grid_list(GridConfig::with_step(5.0), theme);
    list.add_heat_points(&[
        HeatPoint::new(18.95, 72.84, 40.0),
        HeatPoint::new(13.1, 80.3, 20.0),
        HeatPoint::new(6.93, 79.84, 8.0),
    ]);
    let bytes = render(&list, theme, view);
    check(&snap("indian_ocean_heat_5deg.png"), &bytes);
}
