// File: crates/xyplot-core/src/types.rs
// Summary: Shared constants (documented defaults, units) and small value types.

use crate::color::Color;

/// Default figure size in inches (width, height).
pub const DEFAULT_FIGURE_SIZE: (f32, f32) = (12.0, 8.0);
/// Default output resolution, pixels per inch.
pub const DEFAULT_DPI: f32 = 100.0;

/// Default series color, "blue".
pub const DEFAULT_COLOR: Color = Color::rgb(0, 0, 255);
/// Default line width in points.
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
/// Default marker size in points, used when a marker is set without a size.
pub const DEFAULT_MARKER_SIZE: f32 = 6.0;
/// Default font size in points for every text element.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Base font size (points) that layout padding is expressed in.
pub const BASE_FONT_SIZE: f32 = 10.0;
/// Padding around the figure edge, as a multiple of `BASE_FONT_SIZE`.
pub const DEFAULT_LAYOUT_PAD: f32 = 3.0;

/// Frame (spine) and tick stroke width in points.
pub const FRAME_WIDTH: f32 = 0.8;
/// Tick mark length in points.
pub const TICK_LENGTH: f32 = 3.5;
/// Gap between tick mark and tick label in points.
pub const TICK_PAD: f32 = 3.5;
/// Gap between tick labels and axis label in points.
pub const LABEL_PAD: f32 = 4.0;
/// Gap between the plot frame and the title in points.
pub const TITLE_PAD: f32 = 6.0;
/// Edge width of marker outlines and unfilled markers in points.
pub const MARKER_EDGE_WIDTH: f32 = 1.0;

/// Fraction of the data span added on each side when autoscaling.
pub const AXIS_MARGIN: f64 = 0.05;
/// Upper bound on automatically chosen ticks per axis.
pub const MAX_AUTO_TICKS: usize = 9;

/// Convert points (1/72 inch) to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}
