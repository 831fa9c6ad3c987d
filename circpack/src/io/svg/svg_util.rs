use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, anyhow, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry;
use crate::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the enclosing circle around the packing
    #[serde(default = "default_true")]
    pub enclosing_circle: bool,
    ///Mark the center of every circle
    #[serde(default)]
    pub centers: bool,
    ///Print the placement order inside every circle
    #[serde(default)]
    pub indices: bool,
    ///Draw dashed lines between overlapping circles
    #[serde(default = "default_true")]
    pub highlight_overlaps: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            enclosing_circle: true,
            centers: false,
            indices: false,
            highlight_overlaps: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub background_fill: Color,
    pub circle_fill: Color,
    pub circle_fill_opac: f64,
    pub circle_stroke: Color,
    pub enclosing_stroke: Color,
    pub text_fill: Color,
    pub overlap_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::MOCHA
    }
}

impl SvgLayoutTheme {
    pub const MOCHA: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0x1E, 0x1E, 0x2E), // BASE
        circle_fill: Color(0xCD, 0xD6, 0xF4), // TEXT
        circle_fill_opac: 0.4,
        circle_stroke: Color(0xF5, 0xC2, 0xE7), // PINK
        enclosing_stroke: Color(0xA6, 0xE3, 0xA1), // GREEN
        text_fill: Color(0xCD, 0xD6, 0xF4), // TEXT
        overlap_highlight_color: Color(0xF3, 0x8B, 0xA8), // RED
    };

    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xCC, 0x82, 0x4A),
        circle_fill: Color(0xFF, 0xC8, 0x79),
        circle_fill_opac: 0.5,
        circle_stroke: Color(0x00, 0x00, 0x00),
        enclosing_stroke: Color(0x2D, 0x2D, 0x2D),
        text_fill: Color(0x00, 0x00, 0x00),
        overlap_highlight_color: Color(0x00, 0xFF, 0x00), // LIME
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xD3, 0xD3, 0xD3),
        circle_fill: Color(0x7A, 0x7A, 0x7A),
        circle_fill_opac: 0.5,
        circle_stroke: Color(0x00, 0x00, 0x00),
        enclosing_stroke: Color(0x63, 0x63, 0x63),
        text_fill: Color(0x00, 0x00, 0x00),
        overlap_highlight_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected format #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| anyhow!("invalid color: {s}, {e}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

pub fn circle(circle: geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

pub fn segment_data(start: Point, end: Point) -> Data {
    Data::new()
        .move_to((start.0 as f32, start.1 as f32))
        .line_to((end.0 as f32, end.1 as f32))
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
