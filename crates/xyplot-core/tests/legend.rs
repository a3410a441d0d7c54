// File: crates/xyplot-core/tests/legend.rs
// Purpose: Legend sizing, fixed anchors and "best" placement away from the data.

use xyplot_core::geometry::RectF;
use xyplot_core::legend::{anchor, best_location, Legend};
use xyplot_core::{LegendLoc, Series};

fn plot() -> RectF {
    RectF::from_ltrb(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn fixed_anchors_hug_the_plot_edges() {
    let size = (20.0, 10.0);
    assert_eq!(anchor(LegendLoc::UpperRight, plot(), size, 5.0), RectF::from_xywh(75.0, 5.0, 20.0, 10.0));
    assert_eq!(anchor(LegendLoc::LowerLeft, plot(), size, 5.0), RectF::from_xywh(5.0, 85.0, 20.0, 10.0));
    assert_eq!(anchor(LegendLoc::LowerCenter, plot(), size, 5.0), RectF::from_xywh(40.0, 85.0, 20.0, 10.0));
    assert_eq!(anchor(LegendLoc::Center, plot(), size, 0.0), RectF::from_xywh(40.0, 45.0, 20.0, 10.0));
    // "right" is an alias of "center right"
    assert_eq!(
        anchor(LegendLoc::Right, plot(), size, 5.0),
        anchor(LegendLoc::CenterRight, plot(), size, 5.0)
    );
}

#[test]
fn best_avoids_data() {
    let size = (20.0, 10.0);
    // Data crowding the upper right corner pushes the legend to the upper left.
    let points = [(95.0, 5.0), (90.0, 8.0), (85.0, 2.0)];
    assert_eq!(best_location(plot(), size, 0.0, &points), LegendLoc::UpperLeft);

    // Rising diagonal: both upper-left and lower-right are free, first candidate wins.
    let diagonal: Vec<(f32, f32)> = (0..=100).map(|i| (i as f32, 100.0 - i as f32)).collect();
    let best = best_location(plot(), size, 0.0, &diagonal);
    assert_eq!(best, LegendLoc::UpperLeft);
}

#[test]
fn best_without_data_is_upper_right() {
    assert_eq!(best_location(plot(), (20.0, 10.0), 0.0, &[]), LegendLoc::UpperRight);
}

#[test]
fn legend_lists_only_labelled_series() {
    let series = vec![
        Series::new("a", vec![(0.0, 0.0)]).with_label("first"),
        Series::new("b", vec![(0.0, 0.0)]),
        Series::new("c", vec![(0.0, 0.0)]).with_label("third"),
    ];
    // 72 dpi makes points and pixels coincide.
    let legend = Legend::new(&series, None, 16.0, 72.0).expect("labelled series");

    let (w, h) = legend.size();
    // border 0.4 + handle 2.0 + text pad 0.8 + border 0.4 font sizes, no measured text
    assert!((w - 57.6).abs() < 1e-3, "{w}");
    // two 16 px rows, one 0.5 gap, 0.4 border each side
    assert!((h - 52.8).abs() < 1e-3, "{h}");

    assert!(Legend::new(&series[1..2], None, 16.0, 72.0).is_none());
}

#[test]
fn placed_legend_uses_border_axes_pad() {
    let series = vec![Series::new("a", vec![(0.0, 0.0)]).with_label("a")];
    let legend = Legend::new(&series, None, 10.0, 72.0).unwrap();
    let rect = legend.place(LegendLoc::UpperLeft, plot(), &[]);
    assert!((rect.left - 5.0).abs() < 1e-4);
    assert!((rect.top - 5.0).abs() < 1e-4);
}
