// File: crates/demo/src/main.rs
// Summary: Demo loads a map config and vessel positions, then renders one grid map PNG per step.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use clap::Parser;
use seagrid_core::{generate_grid_with_theme, search_destinations, DisplayList, GridConfig, ShipCategory};
use seagrid_demo::{load_heat_points, load_vessels, Args, MapConfig};
use seagrid_render_skia::render_to_png;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(p) => MapConfig::load(p)?,
        None => MapConfig::default(),
    };
    args.apply(&mut config);
    let opts = config.render_options();
    log::info!("theme {}, {}x{} px", opts.theme.name, opts.width, opts.height);

    let mut list = DisplayList::new();
    if let Some(p) = &args.vessels {
        let vessels = load_vessels(p).with_context(|| format!("failed to load vessels from '{}'", p.display()))?;
        println!("Loaded {} vessels", vessels.len());
        for cat in ShipCategory::ALL {
            let n = vessels.iter().filter(|v| v.category() == cat).count();
            if n > 0 {
                log::info!("  {:<20} {n}", cat.label());
            }
        }
        if let Some(term) = &args.find_destination {
            let hits = search_destinations(&vessels, term);
            println!("Destinations matching {term:?}: {}", if hits.is_empty() { "none".to_string() } else { hits.join(", ") });
        }
        list.add_vessels(&vessels);
    }

    if let Some(p) = &args.heat {
        let points = load_heat_points(p).with_context(|| format!("failed to load heat points from '{}'", p.display()))?;
        println!("Loaded {} heat points", points.len());
        list.add_heat_points(&points);
    }

    if let Some(p) = &args.dump_grid {
        let grid = generate_grid_with_theme(&config.grid, &opts.theme)?;
        let json = serde_json::to_string_pretty(&grid)?;
        std::fs::write(p, json).with_context(|| format!("writing {}", p.display()))?;
        println!("Wrote grid ({} lines, {} labels) to {}", grid.lines.len(), grid.labels.len(), p.display());
    }

    // One layer reused across steps: each rebuild replaces the previous grid.
    let mut layer = config.grid_layer();
    for grid_cfg in config.grid_configs() {
        layer
            .rebuild(&mut list, &grid_cfg)
            .with_context(|| format!("grid step {}°", grid_cfg.step_degrees))?;
        let out = out_name(&args.out_dir, &grid_cfg);
        render_to_png(&list, &opts, &out)?;
        println!("Wrote {} ({} grid elements, {} vessels)", out.display(), layer.len(), list.marker_count());
    }

    Ok(())
}

/// Produce output file name like target/out/map_grid_5deg.png
fn out_name(dir: &Path, cfg: &GridConfig) -> PathBuf {
    if !cfg.is_enabled() {
        return dir.join("map_nogrid.png");
    }
    let step = format!("{}", cfg.step_degrees).replace('.', "p");
    dir.join(format!("map_grid_{step}deg.png"))
}
