// File: crates/xyplot-core/src/color.rs
// Summary: Color values and their string forms (hex, single letters, C0-C9, tab: and CSS names, grays).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use skia_safe as skia;

use crate::error::PlotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// Property-cycle colors, also reachable as "tab:<name>".
const CYCLE: [(&str, u32); 10] = [
    ("blue", 0x1f77b4),
    ("orange", 0xff7f0e),
    ("green", 0x2ca02c),
    ("red", 0xd62728),
    ("purple", 0x9467bd),
    ("brown", 0x8c564b),
    ("pink", 0xe377c2),
    ("gray", 0x7f7f7f),
    ("olive", 0xbcbd22),
    ("cyan", 0x17becf),
];

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("cyan", 0x00ffff),
    ("aqua", 0x00ffff),
    ("magenta", 0xff00ff),
    ("fuchsia", 0xff00ff),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("brown", 0xa52a2a),
    ("pink", 0xffc0cb),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("darkgray", 0xa9a9a9),
    ("darkgrey", 0xa9a9a9),
    ("lightgray", 0xd3d3d3),
    ("lightgrey", 0xd3d3d3),
    ("silver", 0xc0c0c0),
    ("olive", 0x808000),
    ("lime", 0x00ff00),
    ("navy", 0x000080),
    ("teal", 0x008080),
    ("maroon", 0x800000),
    ("gold", 0xffd700),
    ("indigo", 0x4b0082),
    ("violet", 0xee82ee),
    ("coral", 0xff7f50),
    ("salmon", 0xfa8072),
    ("crimson", 0xdc143c),
    ("turquoise", 0x40e0d0),
    ("skyblue", 0x87ceeb),
    ("steelblue", 0x4682b4),
    ("royalblue", 0x4169e1),
    ("darkblue", 0x00008b),
    ("lightblue", 0xadd8e6),
    ("darkred", 0x8b0000),
    ("darkgreen", 0x006400),
    ("lightgreen", 0x90ee90),
    ("forestgreen", 0x228b22),
    ("darkorange", 0xff8c00),
    ("chocolate", 0xd2691e),
    ("tomato", 0xff6347),
    ("khaki", 0xf0e68c),
];

fn from_hex24(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_letter(s: &str) -> Option<Color> {
    let c = match s {
        "b" => (0.0, 0.0, 1.0),
        "g" => (0.0, 0.5, 0.0),
        "r" => (1.0, 0.0, 0.0),
        "c" => (0.0, 0.75, 0.75),
        "m" => (0.75, 0.0, 0.75),
        "y" => (0.75, 0.75, 0.0),
        "k" => (0.0, 0.0, 0.0),
        "w" => (1.0, 1.0, 1.0),
        _ => return None,
    };
    Some(Color::rgb(unit_to_u8(c.0), unit_to_u8(c.1), unit_to_u8(c.2)))
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlotError::InvalidColor(s.to_string());
        let raw = s.trim();
        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        // Single letters are case-sensitive: "C" is not a color, "c" is cyan.
        if let Some(c) = parse_letter(raw) {
            return Ok(c);
        }
        // Property-cycle codes are "C" plus exactly one digit.
        if let Some(idx) = raw.strip_prefix('C').filter(|d| d.len() == 1).and_then(|d| d.parse::<usize>().ok()) {
            return CYCLE.get(idx).map(|&(_, v)| from_hex24(v)).ok_or_else(invalid);
        }
        let key = raw.to_ascii_lowercase();
        if let Some(name) = key.strip_prefix("tab:") {
            return CYCLE
                .iter()
                .find(|(n, _)| *n == name || (name == "grey" && *n == "gray"))
                .map(|&(_, v)| from_hex24(v))
                .ok_or_else(invalid);
        }
        if let Some(&(_, v)) = NAMED.iter().find(|(n, _)| *n == key) {
            return Ok(from_hex24(v));
        }
        // Gray level as a decimal string in [0, 1].
        if let Ok(level) = key.parse::<f32>() {
            if (0.0..=1.0).contains(&level) {
                let g = unit_to_u8(level);
                return Ok(Color::rgb(g, g, g));
            }
        }
        Err(invalid())
    }
}

impl TryFrom<String> for Color {
    type Error = PlotError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
