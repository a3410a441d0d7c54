// File: crates/xyplot-core/src/view.rs
// Summary: View ranges computed from series data with margins, widened to include explicit ticks.

use crate::series::Series;
use crate::types::AXIS_MARGIN;

/// Visible data ranges of the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Inclusive min/max over finite values, or `None` when there are none.
fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Pad a data extent by `AXIS_MARGIN` per side; degenerate spans widen to +/-0.5.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-12 {
        return (lo - 0.5, hi + 0.5);
    }
    // Scale before subtracting so spans near f64::MAX stay finite.
    let m = hi * AXIS_MARGIN - lo * AXIS_MARGIN;
    let (plo, phi) = (lo - m, hi + m);
    (if plo.is_finite() { plo } else { lo }, if phi.is_finite() { phi } else { hi })
}

/// Data extent padded with margins, then widened so every explicit tick is visible.
fn axis_range(data: Option<(f64, f64)>, ticks: Option<&[f64]>) -> (f64, f64) {
    let ticks = ticks.and_then(|t| extent(t.iter().copied()));
    match (data, ticks) {
        (Some((lo, hi)), None) => padded(lo, hi),
        (Some((lo, hi)), Some((tlo, thi))) => {
            let (lo, hi) = padded(lo, hi);
            (lo.min(tlo), hi.max(thi))
        }
        (None, Some((tlo, thi))) => {
            if (thi - tlo).abs() < 1e-12 { padded(tlo, thi) } else { (tlo, thi) }
        }
        (None, None) => (0.0, 1.0),
    }
}

impl ViewState {
    pub fn from_series(series: &[Series], x_ticks: Option<&[f64]>, y_ticks: Option<&[f64]>) -> Self {
        let finite = || series.iter().flat_map(|s| s.finite_points());
        let x = extent(finite().map(|(x, _)| x));
        let y = extent(finite().map(|(_, y)| y));
        let (x_min, x_max) = axis_range(x, x_ticks);
        let (y_min, y_max) = axis_range(y, y_ticks);
        Self { x_min, x_max, y_min, y_max }
    }
}
