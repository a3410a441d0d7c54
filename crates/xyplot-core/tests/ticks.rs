// File: crates/xyplot-core/tests/ticks.rs
// Purpose: Automatic tick selection, tick label formatting and explicit tick labels.

use xyplot_core::grid::{format_ticks, nice_step, nice_ticks};
use xyplot_core::Axis;

#[test]
fn nice_ticks_on_round_ranges() {
    assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(nice_step(0.0, 100.0, 9), 20.0);
    assert!((nice_step(0.0, 1.0, 9) - 0.2).abs() < 1e-12);
}

#[test]
fn nice_ticks_stay_inside_padded_range() {
    let ticks = nice_ticks(-0.05, 1.05, 9);
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0], 0.0);
    assert!((ticks[5] - 1.0).abs() < 1e-12);
    assert!(ticks.iter().all(|&t| (-0.05..=1.05).contains(&t)));
    assert_eq!(format_ticks(&ticks), ["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
}

#[test]
fn nice_ticks_across_zero_snap_to_zero() {
    let ticks = nice_ticks(-2.6, 2.6, 9);
    assert!(ticks.contains(&0.0));
    assert_eq!(format_ticks(&ticks), ["\u{2212}2", "\u{2212}1", "0", "1", "2"]);
}

#[test]
fn degenerate_or_bad_ranges() {
    assert_eq!(nice_ticks(5.0, 5.0, 9), vec![5.0]);
    assert!(nice_ticks(f64::NAN, 1.0, 9).is_empty());
}

#[test]
fn labels_share_decimals() {
    assert_eq!(format_ticks(&[0.25, 0.5, 0.75]), ["0.25", "0.50", "0.75"]);
    assert_eq!(format_ticks(&[1000.0, 2000.0]), ["1000", "2000"]);
    assert_eq!(format_ticks(&[-0.0]), ["0"]);
}

#[test]
fn explicit_ticks_and_labels() {
    let axis = Axis::new("x", 0.0, 3.0)
        .with_ticks(vec![0.0, f64::NAN, 3.0])
        .with_tick_labels(vec!["start".into(), "skip".into(), "end".into()]);
    assert!(axis.validate("x").is_ok());
    assert_eq!(axis.tick_marks(), vec![(0.0, "start".to_string()), (3.0, "end".to_string())]);

    let numeric = Axis::new("x", 0.0, 1.0).with_ticks(vec![0.0, 0.5]);
    assert_eq!(numeric.tick_marks(), vec![(0.0, "0.0".to_string()), (0.5, "0.5".to_string())]);
}

#[test]
fn automatic_ticks_follow_range() {
    let axis = Axis::new("y", -0.5, 10.5);
    let values: Vec<f64> = axis.tick_marks().into_iter().map(|(v, _)| v).collect();
    assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}
