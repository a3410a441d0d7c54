use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use xyplot_core::{Chart, LineStyle, Marker, RenderOptions, Series, SeriesStyle};

fn build_chart_xy(n: usize, style: SeriesStyle) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        data.push((x, y));
    }
    ch.add_series(Series::new("wave", data).with_style(style));
    ch.autoscale_axes();
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let opts = RenderOptions { figure_size: (8.0, 5.0), dpi: 100.0, draw_labels: false, ..RenderOptions::default() };
    let styles = [
        ("solid", SeriesStyle::default()),
        ("dashed", SeriesStyle { line_style: LineStyle::Dashed, ..SeriesStyle::default() }),
        ("markers", SeriesStyle { line_style: LineStyle::None, marker: Marker::Circle, ..SeriesStyle::default() }),
    ];
    for &n in &[10_000usize, 50_000usize] {
        for (name, style) in styles {
            group.bench_function(format!("{name}_{n}"), |b| {
                let ch = build_chart_xy(n, style);
                b.iter(|| -> Result<()> {
                    let bytes = ch.render_to_png_bytes(&opts)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
