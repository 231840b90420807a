// File: crates/seagrid-core/src/vessel.rs
// Summary: Canonical vessel records normalized from heterogeneous API/CSV payloads, plus marker styling.
// Notes:
// - Source field names are resolved once per record through a closed alias table;
//   the first alias present with a non-empty value wins.
// - Records without an MMSI or a usable position are dropped, never invented.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::RecordError;
use crate::theme::Rgba;
use crate::types::LatLon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Field {
    Mmsi,
    Name,
    Lat,
    Lon,
    Sog,
    Cog,
    Heading,
    ShipType,
    Destination,
    Eta,
    Draught,
    Length,
    Width,
    DimBow,
    DimStern,
    DimPort,
    DimStarboard,
    LastUpdate,
}

/// Known source spellings per canonical field, in priority order.
const FIELD_ALIASES: &[(Field, &[&str])] = &[
    (Field::Mmsi, &["MMSI", "mmsi"]),
    (Field::Name, &["NAME", "shipname", "ship_name", "name"]),
    (Field::Lat, &["LATITUDE", "lat", "latitude"]),
    (Field::Lon, &["LONGITUDE", "lon", "longitude"]),
    (Field::Sog, &["SOG", "sog", "speed"]),
    (Field::Cog, &["COG", "cog", "course"]),
    (Field::Heading, &["HEADING", "heading", "true_heading"]),
    (Field::ShipType, &["SHIPTYPE", "shiptype", "ship_type", "type", "vessel_type"]),
    (Field::Destination, &["DESTINATION", "destination", "dest"]),
    (Field::Eta, &["ETA", "eta"]),
    (Field::Draught, &["DRAUGHT", "draught", "draft"]),
    (Field::Length, &["LENGTH", "length"]),
    (Field::Width, &["WIDTH", "width", "beam"]),
    (Field::DimBow, &["dim_bow", "dimbow"]),
    (Field::DimStern, &["dim_stern", "dimstern"]),
    (Field::DimPort, &["dim_port", "dimport"]),
    (Field::DimStarboard, &["dim_starboard", "dimstarboard"]),
    (Field::LastUpdate, &["TIME", "timestamp", "last_position_utc", "rec_time"]),
];

/// Envelope keys that may wrap the vessel array in an API response.
const ENVELOPE_KEYS: &[&str] = &["vessels", "data", "ships"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VesselRecord {
    pub mmsi: String,
    pub name: Option<String>,
    pub position: LatLon,
    /// Speed over ground, knots.
    pub sog: Option<f64>,
    /// Course over ground, degrees.
    pub cog: Option<f64>,
    /// Degrees clockwise from north.
    pub heading: Option<f64>,
    pub ship_type: Option<String>,
    pub destination: Option<String>,
    pub eta: Option<NaiveDateTime>,
    /// Metres.
    pub draught: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub last_update: Option<NaiveDateTime>,
}

impl VesselRecord {
    pub fn category(&self) -> ShipCategory {
        self.ship_type.as_deref().map(ShipCategory::classify).unwrap_or(ShipCategory::Other)
    }

    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle { color: self.category().color(), heading: self.heading, radius: MarkerStyle::DEFAULT_RADIUS }
    }

    /// Name for display, falling back to the MMSI.
    pub fn title(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => format!("Vessel {}", self.mmsi),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ShipCategory {
    Cargo,
    Tanker,
    Passenger,
    Fishing,
    Tug,
    Military,
    Other,
}

impl ShipCategory {
    pub const ALL: [ShipCategory; 7] = [
        ShipCategory::Cargo,
        ShipCategory::Tanker,
        ShipCategory::Passenger,
        ShipCategory::Fishing,
        ShipCategory::Tug,
        ShipCategory::Military,
        ShipCategory::Other,
    ];

    /// Classify a free-text ship type by keyword (case-insensitive).
    pub fn classify(ship_type: &str) -> Self {
        let t = ship_type.to_lowercase();
        let has = |keys: &[&str]| keys.iter().any(|k| t.contains(k));
        if has(&["cargo", "container"]) { ShipCategory::Cargo }
        else if has(&["tanker", "oil"]) { ShipCategory::Tanker }
        else if has(&["passenger", "cruise"]) { ShipCategory::Passenger }
        else if has(&["fishing"]) { ShipCategory::Fishing }
        else if has(&["tug", "service"]) { ShipCategory::Tug }
        else if has(&["military", "naval"]) { ShipCategory::Military }
        else { ShipCategory::Other }
    }

    pub fn color(self) -> Rgba {
        match self {
            ShipCategory::Cargo => Rgba::rgb(0x16, 0xa3, 0x4a),
            ShipCategory::Tanker => Rgba::rgb(0xe1, 0x1d, 0x48),
            ShipCategory::Passenger => Rgba::rgb(0xf5, 0x9e, 0x0b),
            ShipCategory::Fishing => Rgba::rgb(0x25, 0x63, 0xeb),
            ShipCategory::Tug => Rgba::rgb(0x8e, 0x24, 0xaa),
            ShipCategory::Military => Rgba::rgb(0x37, 0x47, 0x4f),
            ShipCategory::Other => Rgba::rgb(0x6b, 0x72, 0x80),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipCategory::Cargo => "Cargo / Container",
            ShipCategory::Tanker => "Tanker",
            ShipCategory::Passenger => "Passenger / Cruise",
            ShipCategory::Fishing => "Fishing",
            ShipCategory::Tug => "Tug / Service",
            ShipCategory::Military => "Military",
            ShipCategory::Other => "Other",
        }
    }
}

/// Round vessel marker with an optional heading tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: Rgba,
    pub heading: Option<f64>,
    pub radius: f32,
}

impl MarkerStyle {
    pub const DEFAULT_RADIUS: f32 = 8.0;
}

/// Most suggestions [`search_destinations`] returns.
pub const DESTINATION_RESULTS_LIMIT: usize = 10;

/// Distinct destinations containing `term` (case-insensitive), in first-seen
/// order and capped at [`DESTINATION_RESULTS_LIMIT`]. A blank term matches nothing.
pub fn search_destinations<'a>(vessels: &'a [VesselRecord], term: &str) -> Vec<&'a str> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<&str> = Vec::new();
    for d in vessels.iter().filter_map(|v| v.destination.as_deref()) {
        if out.len() == DESTINATION_RESULTS_LIMIT {
            break;
        }
        if d.to_lowercase().contains(&needle) && !out.iter().any(|o| o.eq_ignore_ascii_case(d)) {
            out.push(d);
        }
    }
    out
}

/// Normalize an API payload: a bare array, or an object wrapping the array
/// under `vessels`, `data` or `ships`. Unusable records are skipped.
pub fn normalize_payload(payload: &Value) -> Vec<VesselRecord> {
    let list = match payload {
        Value::Array(a) => Some(a),
        Value::Object(o) => ENVELOPE_KEYS.iter().find_map(|k| o.get(*k).and_then(Value::as_array)),
        _ => None,
    };
    let Some(list) = list else {
        log::warn!("vessel payload has no recognizable array");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(list.len());
    let mut dropped = 0usize;
    for v in list {
        match v.as_object().ok_or(RecordError::NotAnObject).and_then(normalize_record) {
            Ok(r) => out.push(r),
            Err(e) => {
                dropped += 1;
                log::debug!("skipping vessel record: {e}");
            }
        }
    }
    if dropped > 0 {
        log::warn!("dropped {dropped} of {} vessel records without id or position", list.len());
    }
    out
}

/// Normalize one record object into the canonical shape.
pub fn normalize_record(obj: &Map<String, Value>) -> Result<VesselRecord, RecordError> {
    let fields = resolve(obj);
    let num = |f: Field| fields.get(&f).and_then(|v| as_f64(v));
    let text = |f: Field| fields.get(&f).and_then(|v| as_text(v));
    let sum = |a: Field, b: Field| match (num(a), num(b)) {
        (Some(x), Some(y)) => Some(x + y),
        _ => None,
    };

    let mmsi = text(Field::Mmsi).ok_or(RecordError::MissingMmsi)?;
    let (lat, lon) = match (num(Field::Lat), num(Field::Lon)) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(RecordError::MissingPosition(mmsi)),
    };
    if lat == 0.0 || lon == 0.0 {
        return Err(RecordError::NoFix(mmsi));
    }

    let cog = num(Field::Cog);
    // 511 is the AIS "not available" heading
    let heading = num(Field::Heading).filter(|h| (0.0..360.0).contains(h)).or(cog);

    Ok(VesselRecord {
        mmsi,
        name: text(Field::Name),
        position: LatLon::new(lat, lon),
        sog: num(Field::Sog),
        cog,
        heading,
        ship_type: text(Field::ShipType),
        destination: text(Field::Destination),
        eta: text(Field::Eta).as_deref().and_then(parse_timestamp),
        draught: num(Field::Draught),
        length: num(Field::Length).or_else(|| sum(Field::DimBow, Field::DimStern)),
        width: num(Field::Width).or_else(|| sum(Field::DimPort, Field::DimStarboard)),
        last_update: text(Field::LastUpdate).as_deref().and_then(parse_timestamp),
    })
}

fn resolve(obj: &Map<String, Value>) -> HashMap<Field, &Value> {
    let mut out = HashMap::with_capacity(FIELD_ALIASES.len());
    for (field, aliases) in FIELD_ALIASES {
        if let Some(v) = aliases.iter().filter_map(|k| obj.get(*k)).find(|v| is_present(v)) {
            out.insert(*field, v);
        }
    }
    out
}

fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn as_f64(v: &Value) -> Option<f64> {
    let x = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    x.filter(|x| x.is_finite())
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse ISO-8601 style timestamps with or without `T`, seconds, fraction or offset.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
    FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}
