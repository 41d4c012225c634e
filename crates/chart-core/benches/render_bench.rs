use anyhow::Result;
use chart_core::{Axis, Chart, Dataset, Figure, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_figure(n: usize) -> Figure {
    let labels: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).sin() * 10.0 + 12.0).collect();
    let data = Dataset::new(labels, &values).expect("dataset");
    let chart = Chart::new()
        .with_y_axis(Axis::new("Y"))
        .with_series(Series::bar("bars", data.clone()))
        .with_series(Series::line("line", data));
    Figure::new(14.0, 8.0).with_panel(chart)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[12usize, 120usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let fig = build_figure(n);
            let opts = RenderOptions { dpi: 100.0, draw_labels: false, ..Default::default() };
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let fig = build_figure(120);
    let opts = RenderOptions::default();
    c.bench_function("render_svg_bytes", |b| {
        b.iter(|| black_box(fig.render_to_svg_bytes(&opts).expect("svg")));
    });
}

criterion_group!(benches, bench_render, bench_svg);
criterion_main!(benches);
