// File: crates/seagrid-core/src/theme.rs
// Summary: Colours, line styles and grid theme presets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ColorError;

/// Straight (non-premultiplied) RGBA colour. Serialized as `#rrggbb` / `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorError::BadLength(s.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::BadDigit(s.to_string()))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    /// Multiply alpha by `opacity` (clamped to [0, 1]).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Rgba::from_hex(&s) }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self { c.to_string() }
}

/// Dash pattern in pixels: `on` drawn, `off` skipped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

impl DashPattern {
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }

    pub fn intervals(&self) -> [f32; 2] { [self.on, self.off] }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.on, self.off)
    }
}

/// Stroke style for one grid line. `dash: None` is a solid stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgba,
    pub weight: f32,
    pub opacity: f32,
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    pub fn is_solid(&self) -> bool { self.dash.is_none() }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTheme {
    pub name: &'static str,
    pub background: Rgba,
    pub major: LineStyle,
    pub minor: LineStyle,
    pub label: Rgba,
    pub label_halo: Rgba,
}

impl GridTheme {
    /// Cyan major lines over dashed slate minor lines on a dark sea.
    pub fn ocean() -> Self {
        Self {
            name: "ocean",
            background: Rgba::rgb(0x0b, 0x1e, 0x2d),
            major: LineStyle { color: Rgba::rgb(0x00, 0xbc, 0xd4), weight: 1.6, opacity: 0.7, dash: None },
            minor: LineStyle {
                color: Rgba::rgb(0x90, 0xa4, 0xae),
                weight: 1.0,
                opacity: 0.5,
                dash: Some(DashPattern::new(4.0, 4.0)),
            },
            label: Rgba::rgb(0xe0, 0xf7, 0xfa),
            label_halo: Rgba::rgba(0x00, 0x00, 0x00, 0x99),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xf4, 0xf8, 0xfb),
            major: LineStyle { color: Rgba::rgb(0x00, 0x83, 0x8f), weight: 1.6, opacity: 0.8, dash: None },
            minor: LineStyle {
                color: Rgba::rgb(0x78, 0x90, 0x9c),
                weight: 1.0,
                opacity: 0.5,
                dash: Some(DashPattern::new(4.0, 4.0)),
            },
            label: Rgba::rgb(0x26, 0x32, 0x38),
            label_halo: Rgba::rgba(0xff, 0xff, 0xff, 0xb3),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            major: LineStyle { color: Rgba::rgb(0xff, 0xff, 0x00), weight: 2.0, opacity: 1.0, dash: None },
            minor: LineStyle {
                color: Rgba::rgb(0xcc, 0xcc, 0xcc),
                weight: 1.0,
                opacity: 0.8,
                dash: Some(DashPattern::new(6.0, 3.0)),
            },
            label: Rgba::rgb(0xff, 0xff, 0xff),
            label_halo: Rgba::rgb(0x00, 0x00, 0x00),
        }
    }

    pub fn style_for(&self, is_major: bool) -> LineStyle {
        if is_major { self.major } else { self.minor }
    }
}

impl Default for GridTheme {
    fn default() -> Self { Self::ocean() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<GridTheme> {
    vec![GridTheme::ocean(), GridTheme::light(), GridTheme::high_contrast()]
}

/// Find a theme by its `name`, falling back to ocean.
pub fn find(name: &str) -> GridTheme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    GridTheme::ocean()
}
