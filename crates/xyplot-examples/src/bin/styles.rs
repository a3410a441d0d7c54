// File: crates/xyplot-examples/src/bin/styles.rs
// Summary: Example that renders one figure per theme showing line styles, markers and a legend.

use anyhow::{Context, Result};
use xyplot_core::theme;
use xyplot_core::{plot_xy, ChartRequest, FontSizes, LegendLoc, SeriesSpec};

fn main() -> Result<()> {
    let x: Vec<f64> = (0..=40).map(|i| i as f64 * 0.25).collect();
    let wave = |phase: f64, amp: f64| x.iter().map(|&t| amp * (t + phase).sin()).collect::<Vec<f64>>();

    let mut gap = wave(2.0, 0.6);
    // A missing sample breaks the dotted line into two runs.
    gap[20] = f64::NAN;

    let mut request = ChartRequest::new("Line styles and markers", "Time (s)", "Amplitude");
    request.series = vec![
        SeriesSpec { legend: Some("solid".into()), ..SeriesSpec::new("solid", x.clone(), wave(0.0, 1.0)) },
        SeriesSpec {
            color: Some("C1".parse()?),
            line_style: Some("--".parse()?),
            marker: Some("o".parse()?),
            legend: Some("dashed + circles".into()),
            ..SeriesSpec::new("dashed", x.clone(), wave(1.0, 0.8))
        },
        SeriesSpec {
            color: Some("tab:green".parse()?),
            line_style: Some(":".parse()?),
            line_width: Some(3.0),
            legend: Some("dotted with gap".into()),
            ..SeriesSpec::new("dotted", x.clone(), gap)
        },
        SeriesSpec {
            color: Some("crimson".parse()?),
            line_style: Some("none".parse()?),
            marker: Some("^".parse()?),
            marker_size: Some(9.0),
            ..SeriesSpec::new("markers only", x.clone(), wave(3.0, 0.4))
        },
    ];
    request.font_sizes = FontSizes { title: Some(20.0), legend: Some(12.0), ..FontSizes::default() };
    request.figure_size = Some((10.0, 6.0));
    request.legend_loc = LegendLoc::Best;
    request.grid = true;

    for preset in theme::presets() {
        request.theme = Some(preset.name.to_string());
        let out = std::path::PathBuf::from(format!("target/out/example_styles_{}.png", preset.name));
        plot_xy(&request, &out).with_context(|| format!("render {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    let mut ticks = request.clone();
    ticks.theme = None;
    ticks.x_ticks = Some(vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    ticks.x_tick_labels = Some(["start", "¼", "½", "¾", "end"].map(String::from).to_vec());
    ticks.font_sizes.xticks = Some(12.0);
    let out = std::path::PathBuf::from("target/out/example_styles_ticks.svg");
    plot_xy(&ticks, &out).with_context(|| format!("render {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
