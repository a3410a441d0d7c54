// File: crates/xyplot-core/src/error.rs
// Summary: Error type shared by request resolution, rendering and saving.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("series '{series}': x has {x_len} values but y has {y_len}")]
    LengthMismatch { series: String, x_len: usize, y_len: usize },

    #[error("series '{0}' has no y values")]
    MissingY(String),

    #[error("duplicate series name '{0}'")]
    DuplicateSeries(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid line style '{0}'")]
    InvalidLineStyle(String),

    #[error("invalid marker '{0}'")]
    InvalidMarker(String),

    #[error("invalid legend location '{0}'")]
    InvalidLegendLoc(String),

    #[error("{axis} axis has {labels} tick labels for {ticks} tick values")]
    TickLabelMismatch { axis: &'static str, ticks: usize, labels: usize },

    #[error("{0} axis tick labels were given without tick values")]
    TickLabelsWithoutValues(&'static str),

    #[error("invalid figure size {width}x{height} in at {dpi} dpi")]
    InvalidFigureSize { width: f32, height: f32, dpi: f32 },

    #[error("unsupported output format '{0}' (expected png, jpg, jpeg, webp or svg)")]
    UnsupportedFormat(String),

    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),

    #[error("failed to encode {0}")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
