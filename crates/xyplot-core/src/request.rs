// File: crates/xyplot-core/src/request.rs
// Summary: Chart request (data plus optional styling), default substitution, and the one-call plot operation.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::axis::Axis;
use crate::chart::{Chart, RenderOptions};
use crate::color::Color;
use crate::error::PlotError;
use crate::series::Series;
use crate::style::{FontSizes, LegendLoc, LineStyle, Marker, SeriesStyle};
use crate::theme::{self, Theme};
use crate::types::{DEFAULT_DPI, DEFAULT_FIGURE_SIZE, DEFAULT_LAYOUT_PAD};

/// One named series with optional styling; `None` fields take the documented defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesSpec {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Option<Color>,
    /// Legend label.
    pub legend: Option<String>,
    pub line_width: Option<f32>,
    pub line_style: Option<LineStyle>,
    pub marker: Option<Marker>,
    pub marker_size: Option<f32>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { name: name.into(), x, y, ..Self::default() }
    }

    /// Concrete style with every omitted option replaced by its default.
    pub fn style(&self) -> SeriesStyle {
        let d = SeriesStyle::default();
        SeriesStyle {
            color: self.color.unwrap_or(d.color),
            line_width: self.line_width.unwrap_or(d.line_width),
            line_style: self.line_style.unwrap_or(d.line_style),
            marker: self.marker.unwrap_or(d.marker),
            marker_size: self.marker_size.unwrap_or(d.marker_size),
        }
    }

    pub fn resolve(&self) -> Result<Series, PlotError> {
        let mut series = Series::try_from_xy(self.name.clone(), &self.x, &self.y)?.with_style(self.style());
        series.label = self.legend.clone();
        Ok(series)
    }
}

/// Build ordered series from `(name, x values)` pairs and a name-to-y-values table.
/// Drawing order follows `xs`.
pub fn series_from_maps<I, K>(xs: I, ys: &HashMap<String, Vec<f64>>) -> Result<Vec<SeriesSpec>, PlotError>
where
    I: IntoIterator<Item = (K, Vec<f64>)>,
    K: Into<String>,
{
    xs.into_iter()
        .map(|(name, x)| {
            let name = name.into();
            let y = ys.get(&name).cloned().ok_or_else(|| PlotError::MissingY(name.clone()))?;
            Ok(SeriesSpec::new(name, x, y))
        })
        .collect()
}

/// Per-option styling tables keyed by series name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleMaps {
    pub colors: HashMap<String, Color>,
    pub legends: HashMap<String, String>,
    pub line_widths: HashMap<String, f32>,
    pub line_styles: HashMap<String, LineStyle>,
    pub markers: HashMap<String, Marker>,
    pub marker_sizes: HashMap<String, f32>,
}

impl StyleMaps {
    /// Copy table entries onto the series of the same name. Unknown names are ignored.
    pub fn apply(&self, series: &mut [SeriesSpec]) {
        for s in series.iter_mut() {
            let key = s.name.as_str();
            if let Some(c) = self.colors.get(key) { s.color = Some(*c); }
            if let Some(l) = self.legends.get(key) { s.legend = Some(l.clone()); }
            if let Some(w) = self.line_widths.get(key) { s.line_width = Some(*w); }
            if let Some(ls) = self.line_styles.get(key) { s.line_style = Some(*ls); }
            if let Some(m) = self.markers.get(key) { s.marker = Some(*m); }
            if let Some(ms) = self.marker_sizes.get(key) { s.marker_size = Some(*ms); }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartRequest {
    #[serde(alias = "figure_title")]
    pub title: String,
    #[serde(alias = "xlabel")]
    pub x_label: String,
    #[serde(alias = "ylabel")]
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
    pub font_sizes: FontSizes,
    /// Figure size in inches (width, height).
    pub figure_size: Option<(f32, f32)>,
    pub dpi: Option<f32>,
    #[serde(alias = "xticks_values")]
    pub x_ticks: Option<Vec<f64>>,
    #[serde(alias = "yticks_values")]
    pub y_ticks: Option<Vec<f64>>,
    #[serde(alias = "xticks_labels")]
    pub x_tick_labels: Option<Vec<String>>,
    #[serde(alias = "yticks_labels")]
    pub y_tick_labels: Option<Vec<String>>,
    pub legend_loc: LegendLoc,
    pub theme: Option<String>,
    pub grid: bool,
}

impl ChartRequest {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { title: title.into(), x_label: x_label.into(), y_label: y_label.into(), ..Self::default() }
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Validate the request and substitute defaults, producing a drawable chart.
    pub fn resolve(&self) -> Result<Chart, PlotError> {
        let mut seen = HashSet::new();
        let mut series = Vec::with_capacity(self.series.len());
        for spec in &self.series {
            if !seen.insert(spec.name.as_str()) {
                return Err(PlotError::DuplicateSeries(spec.name.clone()));
            }
            let s = spec.resolve()?;
            if s.finite_points().next().is_none() {
                warn!("series '{}' has no finite points to draw", s.name);
            }
            series.push(s);
        }

        let mut x_axis = Axis::new(self.x_label.clone(), 0.0, 1.0);
        x_axis.ticks = self.x_ticks.clone();
        x_axis.tick_labels = self.x_tick_labels.clone();
        x_axis.validate("x")?;

        let mut y_axis = Axis::new(self.y_label.clone(), 0.0, 1.0);
        y_axis.ticks = self.y_ticks.clone();
        y_axis.tick_labels = self.y_tick_labels.clone();
        y_axis.validate("y")?;

        let legend = series.iter().any(|s| s.label.is_some()).then_some(self.legend_loc);
        let theme = self.theme.as_deref().map(theme::find).unwrap_or_else(Theme::classic);

        let mut chart = Chart {
            title: self.title.clone(),
            series,
            x_axis,
            y_axis,
            fonts: self.font_sizes.resolve(),
            legend,
            theme,
            grid: self.grid,
        };
        chart.autoscale_axes();
        debug!(
            "resolved {} series, x [{}, {}], y [{}, {}], legend {:?}",
            chart.series.len(),
            chart.x_axis.min,
            chart.x_axis.max,
            chart.y_axis.min,
            chart.y_axis.max,
            chart.legend
        );
        Ok(chart)
    }

    /// Figure size and dpi with defaults applied.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            figure_size: self.figure_size.unwrap_or(DEFAULT_FIGURE_SIZE),
            dpi: self.dpi.unwrap_or(DEFAULT_DPI),
            pad: DEFAULT_LAYOUT_PAD,
            draw_labels: true,
        }
    }
}

/// Resolve `request`, render it and write the image to `output`; the extension picks the format.
pub fn plot_xy(request: &ChartRequest, output: impl AsRef<Path>) -> Result<(), PlotError> {
    let chart = request.resolve()?;
    chart.save(&request.render_options(), output)
}
