// File: crates/demo/src/config.rs
// Summary: JSON map configuration (grid, render settings, steps to render).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use seagrid_core::{theme, GeoBounds, GridConfig, GridLayer};
use seagrid_render_skia::{RenderOptions, HEIGHT, WIDTH};

/// Example:
/// ```json
/// { "grid": { "step_degrees": 5 }, "render": { "theme": "light", "width": 800 }, "steps": [1, 2, 5, 10] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub grid: GridConfig,
    pub render: RenderSettings,
    /// Render one image per step; empty means just `grid.step_degrees`.
    pub steps: Vec<f64>,
    /// Line limit for the grid layer; unlimited when absent.
    pub max_lines: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub view: GeoBounds,
    pub draw_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "ocean".to_string(),
            view: GeoBounds::world(),
            draw_labels: true,
        }
    }
}

impl MapConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Grid configurations to render, in order.
    pub fn grid_configs(&self) -> Vec<GridConfig> {
        if self.steps.is_empty() {
            vec![self.grid]
        } else {
            self.steps.iter().map(|&s| GridConfig { step_degrees: s, ..self.grid }).collect()
        }
    }

    pub fn grid_layer(&self) -> GridLayer {
        let layer = GridLayer::new(theme::find(&self.render.theme));
        match self.max_lines {
            Some(n) => layer.with_line_limit(n),
            None => layer,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            view: self.render.view,
            theme: theme::find(&self.render.theme),
            draw_labels: self.render.draw_labels,
        }
    }
}
