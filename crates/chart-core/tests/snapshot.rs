// File: crates/chart-core/tests/snapshot.rs
// Summary: Pixel checks on label-free figures, plus optional golden PNG snapshots.
// Run with UPDATE_SNAPSHOTS=1 to (re)bless goldens; without one only the pixel checks apply.

use std::path::PathBuf;

use chart_core::{Axis, Chart, Color, Dataset, Figure, Fill, LegendPos, PieChart, RefLine, RenderOptions, Series};
use image::RgbaImage;

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const PLOT_BG: [u8; 4] = [0xEA, 0xEA, 0xF2, 255];

fn png(figure: &Figure) -> Vec<u8> {
    // Labels off: glyph rasterization differs between font stacks.
    let opts = RenderOptions { dpi: 72.0, draw_labels: false, ..Default::default() };
    figure.render_to_png_bytes(&opts).expect("render png")
}

fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).expect("decode rendered").to_rgba8()
}

fn count(img: &RgbaImage, rgba: [u8; 4]) -> usize {
    img.pixels().filter(|p| p.0 == rgba).count()
}

/// Topmost row and horizontal span of the pixels with exactly this color.
fn extent(img: &RgbaImage, rgba: [u8; 4]) -> Option<(u32, u32, u32)> {
    let mut out: Option<(u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0 != rgba { continue; }
        out = Some(match out {
            None => (y, x, x),
            Some((top, left, right)) => (top.min(y), left.min(x), right.max(x)),
        });
    }
    out
}

fn blessing() -> bool {
    matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1") | Ok("true") | Ok("TRUE"))
}

fn check_snapshot(name: &str, bytes: &[u8]) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(format!("{name}.png"));
    if blessing() {
        std::fs::create_dir_all(path.parent().unwrap()).expect("snapshot dir");
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] blessed {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    let Ok(want) = std::fs::read(&path) else {
        eprintln!("[snapshot] no golden at {}; run with UPDATE_SNAPSHOTS=1", path.display());
        return;
    };
    // Pixels, not bytes: encoder settings may change between Skia releases.
    let got = decode(bytes);
    let want = decode(&want);
    assert_eq!(got.dimensions(), want.dimensions(), "{name}: size changed");
    assert!(got.as_raw() == want.as_raw(), "{name}: pixels differ from {}", path.display());
}

fn grouped_bars_with_band() -> Figure {
    let quarters = ["Q1", "Q2", "Q3", "Q4"];
    let wages = [3.8, 3.9, 4.0, 4.1];
    let inflation = [3.2, 3.0, 2.9, 2.8];
    let bars = Chart::new()
        .with_y_axis(Axis::new("").with_range(0.0, 5.0))
        .with_series(
            Series::bar("wages", Dataset::new(quarters, &wages).unwrap())
                .with_color(Color::from_rgb(255, 0, 0))
                .with_alpha(1.0),
        )
        .with_series(
            Series::bar("inflation", Dataset::new(quarters, &inflation).unwrap())
                .with_color(Color::from_rgb(0, 0, 255))
                .with_alpha(1.0),
        )
        .with_ref_line(RefLine::horizontal(2.5).dashed())
        .with_legend(LegendPos::Hidden);
    let band = Chart::new().with_series(
        Series::line("wages", Dataset::new(quarters, &wages).unwrap()).with_fill(Fill::Between(inflation.to_vec()), 0.2),
    );
    Figure::new(6.0, 3.0).with_grid(1, 2).with_panel(bars).with_panel(band)
}

#[test]
fn grouped_bars_land_in_the_left_panel_at_their_heights() {
    let bytes = png(&grouped_bars_with_band());
    let img = decode(&bytes);
    let (w, h) = img.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(img.get_pixel(x, y).0, WHITE, "corner ({x},{y})");
    }
    assert!(count(&img, PLOT_BG) > (w * h / 10) as usize, "plot background missing");

    let (red_top, red_left, red_right) = extent(&img, RED).expect("red bars drawn");
    let (blue_top, blue_left, blue_right) = extent(&img, BLUE).expect("blue bars drawn");
    assert!(red_right < w / 2 && blue_right < w / 2, "bars leaked into the right panel");
    // Wages peak at 4.1, inflation at 3.2; y grows downward.
    assert!(red_top < blue_top);
    // Each group puts the first series left of the second.
    assert!(red_left < blue_left);
    assert!(count(&img, RED) > 200 && count(&img, BLUE) > 200);

    check_snapshot("grouped_bars_with_band", &bytes);
}

#[test]
fn pie_wedges_cover_area_by_share() {
    let pie = PieChart::new(["a", "b", "c"], &[50.0, 30.0, 20.0])
        .unwrap()
        .with_colors(vec![Color::from_rgb(255, 0, 0), Color::from_rgb(0, 255, 0), Color::from_rgb(0, 0, 255)]);
    let bytes = png(&Figure::new(3.0, 3.0).with_panel(pie));
    let img = decode(&bytes);

    let (r, g, b) = (count(&img, RED), count(&img, GREEN), count(&img, BLUE));
    let total = (r + g + b) as f64;
    assert!(total > 1000.0, "pie too small: {total} px");
    for (got, want) in [(r, 0.5), (g, 0.3), (b, 0.2)] {
        let share = got as f64 / total;
        assert!((share - want).abs() < 0.03, "share {share:.3}, expected {want}");
    }

    check_snapshot("pie", &bytes);
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(png(&grouped_bars_with_band()), png(&grouped_bars_with_band()));
}
