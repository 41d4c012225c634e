// File: crates/chart-core/tests/html.rs
// Purpose: Interactive HTML export: inline SVG, hover regions and data tables.

use chart_core::{Chart, Dataset, Figure, PieChart, RenderOptions, Series, Sunburst, Table};

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..Default::default() }
}

#[test]
fn html_contains_svg_regions_and_tables() {
    let data = Dataset::new(["Python", "Rust"], &[49.0, 13.0]).unwrap();
    let chart = Chart::new()
        .with_title("Language usage")
        .with_series(Series::bar("Share", data).with_hover("<b>{x}</b><br>{y}%"));
    let fig = Figure::new(8.0, 5.0).with_suptitle("Languages 2025").with_panel(chart);
    let html = fig.render_to_html_string(&opts()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Languages 2025</title>"));
    assert!(html.contains("<svg viewBox="));
    assert!(html.contains("\"shape\":\"rect\""));
    assert!(html.contains("<td>Python</td>"));
    // Hover markup stays inside the script payload without closing tags.
    assert!(html.contains("<b>Python<\\/b>"));
}

#[test]
fn pie_and_sunburst_emit_wedges() {
    let pie = PieChart::new(["Office", "Hybrid", "Remote"], &[56.0, 29.0, 15.0]).unwrap();
    let sb = Sunburst::new()
        .with_node("AI", "", 60.0)
        .with_node("LLM", "AI", 40.0)
        .with_node("Vision", "AI", 20.0);
    let fig = Figure::new(12.0, 6.0).with_grid(1, 2).with_panel(pie).with_panel(sb);
    let html = fig.render_to_html_string(&opts()).unwrap();
    assert_eq!(html.matches("\"shape\":\"wedge\"").count(), 6);
}

#[test]
fn html_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/dashboard.html");
    let fig = Figure::single(Table::new(["Year", "Layoffs"]).with_row(["2025", "122,549"]));
    fig.render_to_html(&opts(), &path).unwrap();
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("<th>Year</th>"));
}

#[test]
fn unknown_sunburst_parent_fails_render() {
    let sb = Sunburst::new().with_node("LLM", "AI", 40.0);
    let err = Figure::single(sb).render_to_html_string(&opts()).unwrap_err();
    assert!(err.to_string().contains("unknown parent"));
}
