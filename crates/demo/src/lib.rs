// File: crates/demo/src/lib.rs
// Summary: Demo support library: CLI arguments, JSON config and vessel file loading.

pub mod cli;
pub mod config;
pub mod input;

pub use cli::Args;
pub use config::{MapConfig, RenderSettings};
pub use input::{load_heat_points, load_vessels};
