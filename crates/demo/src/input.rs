// File: crates/demo/src/input.rs
// Summary: Load vessel positions from an API JSON dump or an AIS CSV export, and heat points from JSON.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use seagrid_core::vessel::normalize_record;
use seagrid_core::{normalize_payload, parse_heat_points, HeatPoint, VesselRecord};

/// Dispatch on extension: `.json` payloads or `.csv` exports.
pub fn load_vessels(path: impl AsRef<Path>) -> Result<Vec<VesselRecord>> {
    let path = path.as_ref();
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        _ => anyhow::bail!("unsupported vessel file {} (expected .json or .csv)", path.display()),
    }
}

/// Heat points from a JSON array, as served by the heatmap endpoints.
pub fn load_heat_points(path: impl AsRef<Path>) -> Result<Vec<HeatPoint>> {
    let payload = read_json(path.as_ref())?;
    Ok(parse_heat_points(&payload))
}

fn read_json(path: &Path) -> Result<Value> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file)).with_context(|| format!("parsing JSON {}", path.display()))
}

fn load_json(path: &Path) -> Result<Vec<VesselRecord>> {
    Ok(normalize_payload(&read_json(path)?))
}

/// Each row becomes a string-valued record keyed by its header, then goes
/// through the same normalization as API payloads.
fn load_csv(path: &Path) -> Result<Vec<VesselRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    log::debug!("CSV headers: {:?}", headers);

    let mut out = Vec::new();
    let mut rows = 0usize;
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading row {} of {}", rows + 1, path.display()))?;
        rows += 1;
        let obj: Map<String, Value> = headers
            .iter()
            .zip(rec.iter())
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), Value::String(v.to_string())))
            .collect();
        match normalize_record(&obj) {
            Ok(v) => out.push(v),
            Err(e) => log::debug!("row {rows}: {e}"),
        }
    }
    if out.len() < rows {
        log::warn!("kept {} of {} CSV rows from {}", out.len(), rows, path.display());
    }
    Ok(out)
}
