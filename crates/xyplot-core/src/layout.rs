// File: crates/xyplot-core/src/layout.rs
// Summary: Tight layout: shrink the plot area so title, axis labels and tick labels fit inside the padded figure.

use crate::geometry::{clamp, RectF};
use crate::types::{pt_to_px, Insets, LABEL_PAD, TICK_LENGTH, TICK_PAD, TITLE_PAD};

/// Measured text extents in pixels. All zero when labels are not drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub title_height: f32,
    pub x_label_height: f32,
    /// Height of the unrotated y label, i.e. its on-screen width.
    pub y_label_height: f32,
    pub x_tick_height: f32,
    pub y_tick_width: f32,
    /// How far the rightmost x tick label reaches past its tick.
    pub x_tick_overhang: f32,
}

/// Space reserved on each side of the plot area, `pad` pixels of border included.
pub fn margins(pad: f32, ext: &TextExtents, dpi: f32) -> Insets {
    let px = |pt: f32| pt_to_px(pt, dpi);
    let gap = |h: f32, pt: f32| if h > 0.0 { h + px(pt) } else { 0.0 };

    let ticks = px(TICK_LENGTH) + px(TICK_PAD);
    Insets {
        left: pad + gap(ext.y_label_height, LABEL_PAD) + ext.y_tick_width + ticks,
        right: pad + ext.x_tick_overhang,
        top: pad + gap(ext.title_height, TITLE_PAD),
        bottom: pad + gap(ext.x_label_height, LABEL_PAD) + ext.x_tick_height + ticks,
    }
}

/// Plot rectangle for a `width` x `height` figure with `pad` pixels of border.
pub fn plot_area(width: f32, height: f32, pad: f32, ext: &TextExtents, dpi: f32) -> RectF {
    let m = margins(pad, ext, dpi);
    if m.hsum() >= width || m.vsum() >= height {
        log::warn!("figure {}x{} px is too small for its text; plot area squeezed", width, height);
    }

    // Keep at least a one pixel plot area on tiny figures.
    let l = clamp(m.left, 0.0, (width - 1.0).max(0.0));
    let r = clamp(width - m.right, l + 1.0, width.max(l + 1.0));
    let t = clamp(m.top, 0.0, (height - 1.0).max(0.0));
    let b = clamp(height - m.bottom, t + 1.0, height.max(t + 1.0));
    RectF::from_ltrb(l, t, r, b)
}
