// File: crates/xyplot-core/src/axis.rs
// Summary: Axis model with label, view range, and explicit or automatic ticks.

use crate::error::PlotError;
use crate::grid::{format_ticks, nice_ticks};
use crate::types::MAX_AUTO_TICKS;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit tick values; `None` selects automatic ticks.
    pub ticks: Option<Vec<f64>>,
    /// Explicit tick labels, paired with `ticks`.
    pub tick_labels: Option<Vec<String>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: None, tick_labels: None }
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn with_tick_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = Some(labels);
        self
    }

    /// Check that explicit tick labels pair one-to-one with explicit tick values.
    pub fn validate(&self, name: &'static str) -> Result<(), PlotError> {
        match (&self.ticks, &self.tick_labels) {
            (None, Some(_)) => Err(PlotError::TickLabelsWithoutValues(name)),
            (Some(t), Some(l)) if t.len() != l.len() => Err(PlotError::TickLabelMismatch {
                axis: name,
                ticks: t.len(),
                labels: l.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Tick positions paired with their label text.
    pub fn tick_marks(&self) -> Vec<(f64, String)> {
        let values = match &self.ticks {
            Some(t) => t.iter().copied().filter(|v| v.is_finite()).collect::<Vec<_>>(),
            None => nice_ticks(self.min, self.max, MAX_AUTO_TICKS),
        };
        let labels = match (&self.ticks, &self.tick_labels) {
            (Some(t), Some(l)) => t
                .iter()
                .zip(l)
                .filter(|(v, _)| v.is_finite())
                .map(|(_, s)| s.clone())
                .collect(),
            _ => format_ticks(&values),
        };
        values.into_iter().zip(labels).collect()
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
