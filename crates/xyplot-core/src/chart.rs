// File: crates/xyplot-core/src/chart.rs
// Summary: Resolved chart model and the draw/encode/save pipeline (CPU raster surfaces and Skia's SVG canvas).

use std::path::Path;

use log::{debug, info};
use skia_safe as skia;

use crate::axis::Axis;
use crate::error::PlotError;
use crate::format::OutputFormat;
use crate::geometry::RectF;
use crate::layout::{plot_area, TextExtents};
use crate::legend::Legend;
use crate::marks::{draw_marker, draw_polyline, line_paint};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::style::{Fonts, LegendLoc, Marker};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{
    pt_to_px, BASE_FONT_SIZE, DEFAULT_DPI, DEFAULT_FIGURE_SIZE, DEFAULT_LAYOUT_PAD, FRAME_WIDTH, LABEL_PAD,
    MARKER_EDGE_WIDTH, TICK_LENGTH, TICK_PAD, TITLE_PAD,
};
use crate::view::ViewState;

/// Largest accepted surface edge in pixels.
const MAX_PIXELS: f32 = 65_536.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Figure size in inches (width, height).
    pub figure_size: (f32, f32),
    pub dpi: f32,
    /// Border padding, in multiples of the base font size.
    pub pad: f32,
    /// Draw text (title, labels, tick labels, legend labels). Off gives font-independent pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure_size: DEFAULT_FIGURE_SIZE,
            dpi: DEFAULT_DPI,
            pad: DEFAULT_LAYOUT_PAD,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Surface size in whole pixels, rejecting non-finite, non-positive or huge figures.
    pub fn pixel_size(&self) -> Result<(i32, i32), PlotError> {
        let (w, h) = self.figure_size;
        let usable = |v: f32| v.is_finite() && v > 0.0;
        let pw = (w * self.dpi).round();
        let ph = (h * self.dpi).round();
        if !(usable(w) && usable(h) && usable(self.dpi)) || !(1.0..=MAX_PIXELS).contains(&pw) || !(1.0..=MAX_PIXELS).contains(&ph) {
            return Err(PlotError::InvalidFigureSize { width: w, height: h, dpi: self.dpi });
        }
        Ok((pw as i32, ph as i32))
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub fonts: Fonts,
    /// Legend location; the legend is drawn only when some series carries a label.
    pub legend: Option<LegendLoc>,
    pub theme: Theme,
    pub grid: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            fonts: Fonts::default(),
            legend: None,
            theme: Theme::classic(),
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data (with margins) and to any explicit ticks.
    pub fn autoscale_axes(&mut self) {
        let view = ViewState::from_series(&self.series, self.x_axis.ticks.as_deref(), self.y_axis.ticks.as_deref());
        self.x_axis.min = view.x_min;
        self.x_axis.max = view.x_max;
        self.y_axis.min = view.y_min;
        self.y_axis.max = view.y_max;
    }

    /// Render and encode the chart in `format`.
    pub fn render_to_bytes(&self, opts: &RenderOptions, format: OutputFormat) -> Result<Vec<u8>, PlotError> {
        let (w, h) = opts.pixel_size()?;
        debug!("rendering {} series as {} at {}x{} px", self.series.len(), format.name(), w, h);
        match format.raster_encoding() {
            Some(encoding) => {
                let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(PlotError::Surface(w, h))?;
                self.draw(surface.canvas(), opts, w as f32, h as f32);
                let image = surface.image_snapshot();
                #[allow(deprecated)]
                let data = image.encode_to_data(encoding).ok_or(PlotError::Encode(format.name()))?;
                Ok(data.as_bytes().to_vec())
            }
            None => {
                let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w as f32, h as f32), None);
                self.draw(&canvas, opts, w as f32, h as f32);
                let data = canvas.end();
                Ok(data.as_bytes().to_vec())
            }
        }
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, PlotError> {
        self.render_to_bytes(opts, OutputFormat::Png)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), PlotError> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    /// Render the chart to an SVG document at `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<(), PlotError> {
        let bytes = self.render_to_bytes(opts, OutputFormat::Svg)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    /// Render and write to `path`, choosing the encoding from its extension.
    pub fn save(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<(), PlotError> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        let bytes = self.render_to_bytes(opts, format)?;
        write_output(path, &bytes)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, width: f32, height: f32) {
        let dpi = opts.dpi;
        let px = |pt: f32| pt_to_px(pt, dpi);
        let theme = &self.theme;

        canvas.clear(theme.background.to_skia());

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let x_ticks = visible_ticks(&self.x_axis);
        let y_ticks = visible_ticks(&self.y_axis);
        let extents = shaper
            .as_ref()
            .map(|sh| self.measure_text(sh, &x_ticks, &y_ticks, dpi))
            .unwrap_or_default();
        let plot = plot_area(width, height, px(BASE_FONT_SIZE * opts.pad), &extents, dpi);
        debug!("figure {}x{} px, plot area {:?}", width, height, plot);

        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left, plot.right);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);

        let mut bg = skia::Paint::default();
        bg.set_style(skia::paint::Style::Fill);
        bg.set_color(theme.plot_background.to_skia());
        canvas.draw_rect(plot.to_skia(), &bg);

        if self.grid {
            draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme.grid.to_skia(), px(FRAME_WIDTH));
        }

        // Series are clipped to the plot area.
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_series(canvas, s, &sx, &sy, dpi);
        }
        canvas.restore();

        draw_frame(canvas, plot, theme.frame.to_skia(), px(FRAME_WIDTH));
        draw_tick_marks(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme.tick.to_skia(), px(TICK_LENGTH), px(FRAME_WIDTH));

        if let Some(sh) = &shaper {
            self.draw_text(canvas, sh, plot, (&sx, &sy), (x_ticks.as_slice(), y_ticks.as_slice()), &extents, dpi);
        }

        if let Some(loc) = self.legend {
            if let Some(legend) = Legend::new(&self.series, shaper.as_ref(), self.fonts.legend, dpi) {
                let points: Vec<(f32, f32)> = self
                    .series
                    .iter()
                    .flat_map(|s| s.finite_points())
                    .map(|(x, y)| (sx.to_px(x), sy.to_px(y)))
                    .collect();
                let rect = legend.place(loc, plot, &points);
                legend.draw(canvas, shaper.as_ref(), rect, theme.text.to_skia());
            }
        }
    }

    fn measure_text(&self, shaper: &TextShaper, x_ticks: &[(f64, String)], y_ticks: &[(f64, String)], dpi: f32) -> TextExtents {
        let px = |pt: f32| pt_to_px(pt, dpi);
        let x_sizes: Vec<(f32, f32)> = x_ticks.iter().map(|(_, t)| shaper.measure(t, px(self.fonts.xticks))).collect();
        let y_width = y_ticks
            .iter()
            .map(|(_, t)| shaper.measure(t, px(self.fonts.yticks)).0)
            .fold(0.0f32, f32::max);
        TextExtents {
            title_height: shaper.measure(&self.title, px(self.fonts.title)).1,
            x_label_height: shaper.measure(&self.x_axis.label, px(self.fonts.xlabel)).1,
            y_label_height: shaper.measure(&self.y_axis.label, px(self.fonts.ylabel)).1,
            x_tick_height: x_sizes.iter().fold(0.0f32, |m, s| m.max(s.1)),
            y_tick_width: y_width,
            x_tick_overhang: x_sizes.last().map(|s| s.0 * 0.5).unwrap_or(0.0),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectF,
        (sx, sy): (&LinearScale, &LinearScale),
        (x_ticks, y_ticks): (&[(f64, String)], &[(f64, String)]),
        extents: &TextExtents,
        dpi: f32,
    ) {
        let px = |pt: f32| pt_to_px(pt, dpi);
        let color = self.theme.text.to_skia();
        let ticks = px(TICK_LENGTH) + px(TICK_PAD);

        for (v, text) in x_ticks {
            shaper.draw(canvas, text, sx.to_px(*v), plot.bottom + ticks, px(self.fonts.xticks), color, HAlign::Center, VAlign::Top);
        }
        for (v, text) in y_ticks {
            shaper.draw(canvas, text, plot.left - ticks, sy.to_px(*v), px(self.fonts.yticks), color, HAlign::Right, VAlign::Center);
        }

        let x_label_top = plot.bottom + ticks + extents.x_tick_height + px(LABEL_PAD);
        shaper.draw(canvas, &self.x_axis.label, plot.center_x(), x_label_top, px(self.fonts.xlabel), color, HAlign::Center, VAlign::Top);

        let y_label_x = plot.left - ticks - extents.y_tick_width - px(LABEL_PAD) - extents.y_label_height * 0.5;
        shaper.draw_vertical(canvas, &self.y_axis.label, y_label_x, plot.center_y(), px(self.fonts.ylabel), color);

        shaper.draw(canvas, &self.title, plot.center_x(), plot.top - px(TITLE_PAD), px(self.fonts.title), color, HAlign::Center, VAlign::Bottom);
    }
}

// ---- helpers ----------------------------------------------------------------

/// Tick marks that fall inside the axis range.
fn visible_ticks(axis: &Axis) -> Vec<(f64, String)> {
    let eps = (axis.max * 1e-9 - axis.min * 1e-9).abs();
    axis.tick_marks()
        .into_iter()
        .filter(|(v, _)| *v >= axis.min - eps && *v <= axis.max + eps)
        .collect()
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    color: skia::Color,
    width: f32,
) {
    let paint = stroke(color, width);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectF, color: skia::Color, width: f32) {
    let mut paint = stroke(color, width);
    paint.set_stroke_join(skia::paint::Join::Miter);
    canvas.draw_rect(plot.to_skia(), &paint);
}

/// Outward tick marks on the bottom and left edges.
#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    color: skia::Color,
    length: f32,
    width: f32,
) {
    let paint = stroke(color, width);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + length), &paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left - length, y), (plot.left, y), &paint);
    }
}

fn draw_series(canvas: &skia::Canvas, series: &Series, sx: &LinearScale, sy: &LinearScale, dpi: f32) {
    let style = &series.style;
    let width = pt_to_px(style.line_width, dpi);

    if style.line_style.draws_line() && width > 0.0 {
        let paint = line_paint(style.color, width, style.line_style);
        for run in series.segments() {
            let points: Vec<(f32, f32)> = run.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))).collect();
            draw_polyline(canvas, &points, &paint);
        }
    }

    if style.marker != Marker::None {
        let size = pt_to_px(style.marker_size, dpi);
        let edge = pt_to_px(MARKER_EDGE_WIDTH, dpi);
        for (x, y) in series.finite_points() {
            draw_marker(canvas, style.marker, sx.to_px(x), sy.to_px(y), size, style.color, edge);
        }
    }
}
