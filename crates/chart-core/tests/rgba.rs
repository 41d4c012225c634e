// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, Dataset, Figure, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let data = Dataset::new(["a", "b", "c", "d", "e"], &[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
    let chart = Chart::new()
        .with_x_axis(Axis::new("X"))
        .with_y_axis(Axis::new("Y").with_range(0.0, 4.0))
        .with_series(Series::line("up", data));

    let opts = RenderOptions { dpi: 72.0, draw_labels: false, ..Default::default() };
    let (px, w, h, stride) = Figure::new(4.0, 3.0).with_panel(chart).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Opaque white background in the top-left pixel (RGBA)
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn trimmed_buffer_keeps_a_background_border() {
    let data = Dataset::new(["a", "b"], &[3.0, 5.0]).unwrap();
    let chart = Chart::new().with_series(Series::bar("", data));
    let opts = RenderOptions { dpi: 72.0, draw_labels: false, ..Default::default() };
    let (px, w, h, stride) = Figure::new(4.0, 3.0).with_panel(chart).render_to_rgba8(&opts).unwrap();
    // 0.1in pad at 72 dpi is 7 px of untouched background on every edge.
    for y in 0..h as usize {
        for x in 0..w as usize {
            if x < 7 || y < 7 || x >= w as usize - 7 || y >= h as usize - 7 {
                let i = y * stride + x * 4;
                assert_eq!(&px[i..i + 4], &[255, 255, 255, 255], "pixel ({x},{y})");
            }
        }
    }
}

#[test]
fn bands_shade_their_span_only() {
    use chart_core::{Band, Color, LegendPos};

    let data = Dataset::new(["a", "b", "c"], &[1.0, 2.0, 3.0]).unwrap();
    let chart = Chart::new()
        .with_y_axis(Axis::new("").with_range(0.0, 10.0).without_grid())
        .with_x_axis(Axis::new("").without_grid())
        .with_legend(LegendPos::Hidden)
        .with_band(Band::horizontal(6.0, 9.0).with_color(Color::from_rgb(255, 0, 0)).with_alpha(1.0))
        .with_series(Series::line("", data).with_color(Color::from_rgb(0, 0, 255)));
    let opts = RenderOptions { dpi: 72.0, draw_labels: false, ..Default::default() };
    let (px, w, h, stride) = Figure::new(4.0, 3.0).with_panel(chart).render_to_rgba8(&opts).unwrap();

    let rows_with_red: Vec<usize> = (0..h as usize)
        .filter(|&y| (0..w as usize).any(|x| px[y * stride + x * 4..y * stride + x * 4 + 4] == [255, 0, 0, 255]))
        .collect();
    assert!(!rows_with_red.is_empty(), "band not drawn");
    // 3 of 10 y units, far from the 1..3 line.
    let (top, bottom) = (rows_with_red[0], *rows_with_red.last().unwrap());
    assert_eq!(rows_with_red.len(), bottom - top + 1, "band is not one contiguous span");
    assert!(bottom < h as usize / 2, "band should sit in the upper half");
}
