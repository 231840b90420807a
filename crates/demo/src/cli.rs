// File: crates/demo/src/cli.rs
// Summary: Command-line arguments for the demo binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::MapConfig;

/// Render grid overlay maps with vessel positions to PNG.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "seagrid-demo", version, about)]
pub struct Args {
    /// JSON map configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Vessel positions as a JSON payload or CSV export.
    #[arg(long, value_name = "FILE")]
    pub vessels: Option<PathBuf>,
    /// Heat points as JSON (`[{lat, lon, intensity}]` or `[[lat, lon, intensity]]`).
    #[arg(long, value_name = "FILE")]
    pub heat: Option<PathBuf>,
    /// Grid step in degrees; repeat to render several maps.
    #[arg(long = "step", value_name = "DEG")]
    pub steps: Vec<f64>,
    /// Render without the grid overlay.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_grid: bool,
    /// Theme preset: ocean, light or high-contrast.
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
    /// Refuse grids with more lines than this.
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,
    /// Output directory for the PNGs.
    #[arg(long = "out", value_name = "DIR", default_value = "target/out")]
    pub out_dir: PathBuf,
    /// Also write the generated grid of the config step as JSON.
    #[arg(long, value_name = "FILE")]
    pub dump_grid: Option<PathBuf>,
    /// List vessel destinations matching this text.
    #[arg(long, value_name = "TEXT")]
    pub find_destination: Option<String>,
}

impl Args {
    /// Command-line flags override the config file.
    pub fn apply(&self, config: &mut MapConfig) {
        if !self.steps.is_empty() {
            config.steps = self.steps.clone();
        }
        if self.no_grid {
            config.grid.visible = false;
        }
        if let Some(t) = &self.theme {
            config.render.theme = t.clone();
        }
        if self.max_lines.is_some() {
            config.max_lines = self.max_lines;
        }
    }
}
