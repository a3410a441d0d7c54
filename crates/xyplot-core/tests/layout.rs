// File: crates/xyplot-core/tests/layout.rs
// Purpose: Tight layout margins with and without measured text.

use xyplot_core::layout::{margins, plot_area, TextExtents};
use xyplot_core::types::pt_to_px;

#[test]
fn no_text_leaves_pad_plus_ticks() {
    let pad = 30.0;
    let ticks = pt_to_px(7.0, 72.0);
    let rect = plot_area(600.0, 400.0, pad, &TextExtents::default(), 72.0);
    assert_eq!(rect.left, pad + ticks);
    assert_eq!(rect.top, pad);
    assert_eq!(rect.right, 600.0 - pad);
    assert_eq!(rect.bottom, 400.0 - pad - ticks);
}

#[test]
fn text_extents_grow_the_margins() {
    let ext = TextExtents {
        title_height: 20.0,
        x_label_height: 16.0,
        y_label_height: 16.0,
        x_tick_height: 14.0,
        y_tick_width: 30.0,
        x_tick_overhang: 8.0,
    };
    let m = margins(10.0, &ext, 72.0);
    // 3.5 pt tick + 3.5 pt pad, 4 pt label pad, 6 pt title pad at 72 dpi
    assert_eq!(m.left, 10.0 + 16.0 + 4.0 + 30.0 + 7.0);
    assert_eq!(m.bottom, 10.0 + 16.0 + 4.0 + 14.0 + 7.0);
    assert_eq!(m.top, 10.0 + 20.0 + 6.0);
    assert_eq!(m.right, 18.0);
    assert_eq!(m.hsum(), m.left + m.right);
}

#[test]
fn tiny_figure_keeps_a_pixel() {
    let rect = plot_area(10.0, 10.0, 30.0, &TextExtents::default(), 72.0);
    assert!(rect.width() >= 1.0);
    assert!(rect.height() >= 1.0);
}
