// File: crates/xyplot-core/src/marks.rs
// Summary: Stroke paints for line styles and marker glyph drawing on a Skia canvas.

use skia_safe as skia;

use crate::color::Color;
use crate::style::{LineStyle, Marker};

/// Stroke paint for a series line `width` pixels wide.
pub fn line_paint(color: Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color.to_skia());
    stroke.set_stroke_join(skia::paint::Join::Round);
    match style.dash_pattern() {
        Some(pattern) => {
            // Dash lengths scale with the line width.
            let intervals: Vec<f32> = pattern.iter().map(|d| d * width.max(0.1)).collect();
            stroke.set_stroke_cap(skia::paint::Cap::Butt);
            stroke.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        None => {
            stroke.set_stroke_cap(skia::paint::Cap::Square);
        }
    }
    stroke
}

/// Stroke a polyline through `points` (pixel coordinates).
pub fn draw_polyline(canvas: &skia::Canvas, points: &[(f32, f32)], paint: &skia::Paint) {
    if points.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    canvas.draw_path(&path, paint);
}

fn polygon(points: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((&first, rest)) = points.split_first() {
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close();
    }
    path
}

/// Outline of `marker` with radius `r` centered on (cx, cy). Plus and cross are open strokes.
fn marker_path(marker: Marker, cx: f32, cy: f32, r: f32) -> Option<skia::Path> {
    let path = match marker {
        Marker::None => return None,
        Marker::Pixel => {
            let mut p = skia::Path::new();
            p.add_rect(skia::Rect::from_xywh(cx - 0.5, cy - 0.5, 1.0, 1.0), None);
            p
        }
        Marker::Point | Marker::Circle => {
            let mut p = skia::Path::new();
            p.add_circle((cx, cy), r, None);
            p
        }
        Marker::Square => polygon(&[(cx - r, cy - r), (cx + r, cy - r), (cx + r, cy + r), (cx - r, cy + r)]),
        Marker::TriangleUp => polygon(&[(cx, cy - r), (cx + r, cy + r), (cx - r, cy + r)]),
        Marker::TriangleDown => polygon(&[(cx, cy + r), (cx - r, cy - r), (cx + r, cy - r)]),
        Marker::TriangleLeft => polygon(&[(cx - r, cy), (cx + r, cy - r), (cx + r, cy + r)]),
        Marker::TriangleRight => polygon(&[(cx + r, cy), (cx - r, cy + r), (cx - r, cy - r)]),
        Marker::Diamond => polygon(&[(cx, cy - r), (cx + r, cy), (cx, cy + r), (cx - r, cy)]),
        Marker::ThinDiamond => {
            let w = r * 0.6;
            polygon(&[(cx, cy - r), (cx + w, cy), (cx, cy + r), (cx - w, cy)])
        }
        Marker::Star => {
            let inner = r * 0.381_966;
            let pts: Vec<(f32, f32)> = (0..10)
                .map(|i| {
                    let rad = if i % 2 == 0 { r } else { inner };
                    let a = std::f32::consts::FRAC_PI_2 - i as f32 * std::f32::consts::PI / 5.0;
                    (cx + rad * a.cos(), cy - rad * a.sin())
                })
                .collect();
            polygon(&pts)
        }
        Marker::Plus => {
            let mut p = skia::Path::new();
            p.move_to((cx - r, cy)).line_to((cx + r, cy));
            p.move_to((cx, cy - r)).line_to((cx, cy + r));
            p
        }
        Marker::Cross => {
            let mut p = skia::Path::new();
            p.move_to((cx - r, cy - r)).line_to((cx + r, cy + r));
            p.move_to((cx - r, cy + r)).line_to((cx + r, cy - r));
            p
        }
    };
    Some(path)
}

/// Draw one marker glyph. `size` is the nominal diameter and `edge` the outline width, in pixels.
/// Filled markers get a fill and an edge in `color`; the others are stroked only.
pub fn draw_marker(canvas: &skia::Canvas, marker: Marker, cx: f32, cy: f32, size: f32, color: Color, edge: f32) {
    let r = size * marker.size_factor() * 0.5;
    let Some(path) = marker_path(marker, cx, cy, r) else {
        return;
    };

    if marker.is_filled() {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color.to_skia());
        canvas.draw_path(&path, &fill);
    }
    // A pixel marker is exactly one pixel, no edge.
    if marker != Marker::Pixel {
        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(edge);
        outline.set_color(color.to_skia());
        canvas.draw_path(&path, &outline);
    }
}
