// File: crates/xyplot-core/src/lib.rs
// Summary: Core library entry point; exports the chart request API, styling vocabulary and rendering.

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod marks;
pub mod request;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use color::Color;
pub use error::PlotError;
pub use format::OutputFormat;
pub use request::{plot_xy, series_from_maps, ChartRequest, SeriesSpec, StyleMaps};
pub use series::Series;
pub use style::{FontSizes, Fonts, LegendLoc, LineStyle, Marker, SeriesStyle};
pub use theme::Theme;
pub use text::TextShaper;
pub use view::ViewState;
