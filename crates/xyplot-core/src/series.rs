// File: crates/xyplot-core/src/series.rs
// Summary: Resolved series model: named (x, y) points with a concrete style and optional legend label.

use crate::error::PlotError;
use crate::style::SeriesStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    /// Legend text; series without one are left out of the legend.
    pub label: Option<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, data_xy: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy, style: SeriesStyle::default(), label: None }
    }

    /// Pair separate x and y vectors, rejecting length mismatches.
    pub fn try_from_xy(name: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Self, PlotError> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch { series: name, x_len: x.len(), y_len: y.len() });
        }
        let data = x.iter().copied().zip(y.iter().copied()).collect();
        Ok(Self::new(name, data))
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Runs of consecutive finite points; a non-finite point ends the current run.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}
