// File: crates/xyplot-core/src/legend.rs
// Summary: Frameless legend: entry layout, anchoring at fixed locations and "best" placement.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::marks::{draw_marker, draw_polyline, line_paint};
use crate::series::Series;
use crate::style::{LegendLoc, Marker};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::types::{pt_to_px, MARKER_EDGE_WIDTH};

// Spacing, in units of the legend font size.
const BORDER_PAD: f32 = 0.4;
const LABEL_SPACING: f32 = 0.5;
const HANDLE_LENGTH: f32 = 2.0;
const HANDLE_TEXT_PAD: f32 = 0.8;
const BORDER_AXES_PAD: f32 = 0.5;

struct Entry<'a> {
    series: &'a Series,
    label: &'a str,
    text_width: f32,
    row_height: f32,
}

pub struct Legend<'a> {
    entries: Vec<Entry<'a>>,
    font_px: f32,
    dpi: f32,
}

impl<'a> Legend<'a> {
    /// Legend over the labelled series, in series order; `None` when nothing is labelled.
    /// Without a shaper the labels take no space and are not drawn.
    pub fn new(series: &'a [Series], shaper: Option<&TextShaper>, font_pt: f32, dpi: f32) -> Option<Self> {
        let font_px = pt_to_px(font_pt, dpi);
        let entries: Vec<Entry<'a>> = series
            .iter()
            .filter_map(|s| {
                let label = s.label.as_deref()?;
                let (text_width, text_height) = match shaper {
                    Some(sh) => sh.measure(label, font_px),
                    None => (0.0, font_px),
                };
                let marker_px = match s.style.marker {
                    Marker::None => 0.0,
                    m => pt_to_px(s.style.marker_size, dpi) * m.size_factor(),
                };
                Some(Entry { series: s, label, text_width, row_height: text_height.max(marker_px) })
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, font_px, dpi })
    }

    /// Outer (width, height) in pixels.
    pub fn size(&self) -> (f32, f32) {
        let f = self.font_px;
        let text = self.entries.iter().fold(0.0f32, |m, e| m.max(e.text_width));
        let rows: f32 = self.entries.iter().map(|e| e.row_height).sum();
        let gaps = LABEL_SPACING * f * (self.entries.len() as f32 - 1.0);
        let width = 2.0 * BORDER_PAD * f + HANDLE_LENGTH * f + HANDLE_TEXT_PAD * f + text;
        let height = 2.0 * BORDER_PAD * f + rows + gaps;
        (width, height)
    }

    /// Final legend rectangle inside `plot`. `points` are the plotted data in pixels,
    /// consulted only for `LegendLoc::Best`.
    pub fn place(&self, loc: LegendLoc, plot: RectF, points: &[(f32, f32)]) -> RectF {
        let size = self.size();
        let pad = BORDER_AXES_PAD * self.font_px;
        let loc = match loc {
            LegendLoc::Best => best_location(plot, size, pad, points),
            other => other,
        };
        log::debug!("legend at {:?}, {} entries", loc, self.entries.len());
        anchor(loc, plot, size, pad)
    }

    pub fn draw(&self, canvas: &skia::Canvas, shaper: Option<&TextShaper>, rect: RectF, text_color: skia::Color) {
        let f = self.font_px;
        let x0 = rect.left + BORDER_PAD * f;
        let x1 = x0 + HANDLE_LENGTH * f;
        let text_x = x1 + HANDLE_TEXT_PAD * f;
        let mut top = rect.top + BORDER_PAD * f;
        for e in &self.entries {
            let cy = top + e.row_height * 0.5;
            let style = &e.series.style;
            if style.line_style.draws_line() && style.line_width > 0.0 {
                let paint = line_paint(style.color, pt_to_px(style.line_width, self.dpi), style.line_style);
                draw_polyline(canvas, &[(x0, cy), (x1, cy)], &paint);
            }
            draw_marker(
                canvas,
                style.marker,
                (x0 + x1) * 0.5,
                cy,
                pt_to_px(style.marker_size, self.dpi),
                style.color,
                pt_to_px(MARKER_EDGE_WIDTH, self.dpi),
            );
            if let Some(sh) = shaper {
                sh.draw(canvas, e.label, text_x, cy, f, text_color, HAlign::Left, VAlign::Center);
            }
            top += e.row_height + LABEL_SPACING * f;
        }
    }
}

/// Rectangle of `size` at a fixed location, inset `pad` pixels from the plot edges.
pub fn anchor(loc: LegendLoc, plot: RectF, size: (f32, f32), pad: f32) -> RectF {
    let (w, h) = size;
    let left = plot.left + pad;
    let right = plot.right - pad - w;
    let center_x = plot.center_x() - w * 0.5;
    let top = plot.top + pad;
    let bottom = plot.bottom - pad - h;
    let center_y = plot.center_y() - h * 0.5;
    let (x, y) = match loc {
        LegendLoc::Best | LegendLoc::UpperRight => (right, top),
        LegendLoc::UpperLeft => (left, top),
        LegendLoc::LowerLeft => (left, bottom),
        LegendLoc::LowerRight => (right, bottom),
        LegendLoc::Right | LegendLoc::CenterRight => (right, center_y),
        LegendLoc::CenterLeft => (left, center_y),
        LegendLoc::LowerCenter => (center_x, bottom),
        LegendLoc::UpperCenter => (center_x, top),
        LegendLoc::Center => (center_x, center_y),
    };
    RectF::from_xywh(x, y, w, h)
}

/// Candidate location covering the fewest data points; ties keep the earlier candidate.
pub fn best_location(plot: RectF, size: (f32, f32), pad: f32, points: &[(f32, f32)]) -> LegendLoc {
    LegendLoc::CANDIDATES
        .iter()
        .copied()
        .min_by_key(|&loc| {
            let r = anchor(loc, plot, size, pad);
            points.iter().filter(|&&(x, y)| r.contains(x, y)).count()
        })
        .unwrap_or(LegendLoc::UpperRight)
}
