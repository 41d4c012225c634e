// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic render smoke tests for PNG, SVG and trimming.

use chart_core::{Axis, Chart, Dataset, Figure, PieChart, RenderOptions, Series};

fn bar_chart() -> Chart {
    let data = Dataset::new(["Jan", "Feb", "Mar", "Apr"], &[228_000.0, 195_000.0, 185_000.0, 175_000.0]).unwrap();
    Chart::new()
        .with_title("New IT jobs")
        .with_y_axis(Axis::new("Openings"))
        .with_series(Series::bar("Jobs", data))
}

#[test]
fn render_png_has_signature() {
    let fig = Figure::single(bar_chart());
    let opts = RenderOptions { dpi: 72.0, ..Default::default() };
    let bytes = fig.render_to_png_bytes(&opts).expect("png render");
    assert!(bytes.len() > 8);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn render_png_to_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("01_chart.png");
    let opts = RenderOptions { dpi: 72.0, ..Default::default() };
    Figure::single(bar_chart()).render_to_png(&opts, &path).expect("write png");
    let meta = std::fs::metadata(&path).expect("png exists");
    assert!(meta.len() > 0);
}

#[test]
fn untrimmed_size_follows_inches_and_dpi() {
    let fig = Figure::new(14.0, 8.0).with_panel(bar_chart());
    let opts = RenderOptions { dpi: 72.0, trim: false, draw_labels: false, ..Default::default() };
    let (_, w, h, _) = fig.render_to_rgba8(&opts).unwrap();
    assert_eq!((w, h), (1008, 576));

    let opts = RenderOptions { dpi: 144.0, ..opts };
    let (_, w, h, _) = fig.render_to_rgba8(&opts).unwrap();
    assert_eq!((w, h), (2016, 1152));
}

#[test]
fn trimming_never_grows_the_image() {
    let fig = Figure::new(14.0, 8.0).with_panel(bar_chart());
    let base = RenderOptions { dpi: 72.0, draw_labels: false, ..Default::default() };
    let (_, tw, th, _) = fig.render_to_rgba8(&base).unwrap();
    let (_, fw, fh, _) = fig.render_to_rgba8(&RenderOptions { trim: false, ..base }).unwrap();
    assert!(tw <= fw && th <= fh, "trimmed {tw}x{th} vs full {fw}x{fh}");
}

#[test]
fn svg_output_is_a_document() {
    let pie = PieChart::new(["Office", "Hybrid", "Remote"], &[56.0, 29.0, 15.0]).unwrap().with_title("Arrangements");
    let fig = Figure::new(6.0, 6.0).with_panel(pie);
    let svg = fig.render_to_svg_bytes(&RenderOptions::default()).unwrap();
    let text = String::from_utf8(svg).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("</svg>"));
}

#[test]
fn mismatched_dataset_is_rejected() {
    let err = Dataset::new(["a", "b"], &[1.0]).unwrap_err();
    assert!(err.to_string().contains('2'));
}
