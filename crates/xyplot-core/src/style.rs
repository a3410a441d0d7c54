// File: crates/xyplot-core/src/style.rs
// Summary: Styling vocabulary (line styles, markers, legend locations, font sizes) and resolved series styles.

use std::str::FromStr;

use serde::Deserialize;

use crate::color::Color;
use crate::error::PlotError;
use crate::types::{DEFAULT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_SIZE};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// No connecting line; only markers are drawn.
    None,
}

impl LineStyle {
    /// On/off dash pattern in units of the line width, or `None` for a continuous stroke.
    pub fn dash_pattern(self) -> Option<&'static [f32]> {
        match self {
            LineStyle::Solid | LineStyle::None => None,
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
        }
    }

    pub fn draws_line(self) -> bool {
        self != LineStyle::None
    }
}

impl FromStr for LineStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            "" | " " | "None" | "none" => Ok(LineStyle::None),
            _ => Err(PlotError::InvalidLineStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for LineStyle {
    type Error = PlotError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Marker {
    #[default]
    None,
    Point,
    Pixel,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Plus,
    Cross,
    Star,
}

impl Marker {
    /// Markers drawn as a filled shape with an edge; the rest are strokes only.
    pub fn is_filled(self) -> bool {
        !matches!(self, Marker::None | Marker::Plus | Marker::Cross)
    }

    /// Scale applied to the nominal marker size. Points are drawn smaller than circles.
    pub fn size_factor(self) -> f32 {
        if self == Marker::Point { 0.5 } else { 1.0 }
    }
}

impl FromStr for Marker {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | " " | "None" | "none" => Ok(Marker::None),
            "." => Ok(Marker::Point),
            "," => Ok(Marker::Pixel),
            "o" => Ok(Marker::Circle),
            "s" => Ok(Marker::Square),
            "^" => Ok(Marker::TriangleUp),
            "v" => Ok(Marker::TriangleDown),
            "<" => Ok(Marker::TriangleLeft),
            ">" => Ok(Marker::TriangleRight),
            "D" => Ok(Marker::Diamond),
            "d" => Ok(Marker::ThinDiamond),
            "+" => Ok(Marker::Plus),
            "x" => Ok(Marker::Cross),
            "*" => Ok(Marker::Star),
            _ => Err(PlotError::InvalidMarker(s.to_string())),
        }
    }
}

impl TryFrom<String> for Marker {
    type Error = PlotError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LegendLoc {
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendLoc {
    /// Fixed locations tried, in order, when placing a `Best` legend.
    pub const CANDIDATES: [LegendLoc; 10] = [
        LegendLoc::UpperRight,
        LegendLoc::UpperLeft,
        LegendLoc::LowerLeft,
        LegendLoc::LowerRight,
        LegendLoc::Right,
        LegendLoc::CenterLeft,
        LegendLoc::CenterRight,
        LegendLoc::LowerCenter,
        LegendLoc::UpperCenter,
        LegendLoc::Center,
    ];
}

impl FromStr for LegendLoc {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let loc = match key.as_str() {
            "best" | "0" => LegendLoc::Best,
            "upper right" | "1" => LegendLoc::UpperRight,
            "upper left" | "2" => LegendLoc::UpperLeft,
            "lower left" | "3" => LegendLoc::LowerLeft,
            "lower right" | "4" => LegendLoc::LowerRight,
            "right" | "5" => LegendLoc::Right,
            "center left" | "6" => LegendLoc::CenterLeft,
            "center right" | "7" => LegendLoc::CenterRight,
            "lower center" | "8" => LegendLoc::LowerCenter,
            "upper center" | "9" => LegendLoc::UpperCenter,
            "center" | "10" => LegendLoc::Center,
            _ => return Err(PlotError::InvalidLegendLoc(s.to_string())),
        };
        Ok(loc)
    }
}

impl TryFrom<String> for LegendLoc {
    type Error = PlotError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Font sizes in points; omitted entries fall back to `DEFAULT_FONT_SIZE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: Option<f32>,
    pub xlabel: Option<f32>,
    pub ylabel: Option<f32>,
    pub xticks: Option<f32>,
    pub yticks: Option<f32>,
    #[serde(alias = "legends")]
    pub legend: Option<f32>,
}

impl FontSizes {
    /// Same size for every text element.
    pub fn all(size: f32) -> Self {
        Self {
            title: Some(size),
            xlabel: Some(size),
            ylabel: Some(size),
            xticks: Some(size),
            yticks: Some(size),
            legend: Some(size),
        }
    }

    pub fn resolve(&self) -> Fonts {
        let or_default = |v: Option<f32>| v.unwrap_or(DEFAULT_FONT_SIZE);
        Fonts {
            title: or_default(self.title),
            xlabel: or_default(self.xlabel),
            ylabel: or_default(self.ylabel),
            xticks: or_default(self.xticks),
            yticks: or_default(self.yticks),
            legend: or_default(self.legend),
        }
    }
}

/// Resolved font sizes in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fonts {
    pub title: f32,
    pub xlabel: f32,
    pub ylabel: f32,
    pub xticks: f32,
    pub yticks: f32,
    pub legend: f32,
}

impl Default for Fonts {
    fn default() -> Self {
        FontSizes::default().resolve()
    }
}

/// Fully resolved visual style of one series. Widths and sizes are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub marker: Marker,
    pub marker_size: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
            line_style: LineStyle::Solid,
            marker: Marker::None,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}
