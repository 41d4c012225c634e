// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over categorical, horizontal and scatter series.

use chart_core::{Axis, Chart, Dataset, RefLine, Series, ViewState};

#[test]
fn autoscale_bars_start_at_zero() {
    let data = Dataset::new(["Jan", "Feb", "Mar"], &[2403.0, 16234.0, 8834.0]).unwrap();
    let mut chart = Chart::new().with_series(Series::bar("Layoffs", data));
    chart.autoscale_axes();

    assert_eq!(chart.x_axis.min, Some(-0.5));
    assert_eq!(chart.x_axis.max, Some(2.5));
    assert_eq!(chart.y_axis.min, Some(0.0));
    assert!(chart.y_axis.max.unwrap() > 16234.0);
}

#[test]
fn autoscale_hbar_puts_categories_on_y() {
    let data = Dataset::new(["US", "UK", "DE", "PL"], &[44.0, 50.0, 55.0, 65.0]).unwrap();
    let chart = Chart::new()
        .with_series(Series::hbar("Days", data))
        .with_ref_line(RefLine::vertical(80.0));
    let v = ViewState::from_chart(&chart);

    assert_eq!((v.y_min, v.y_max), (-0.5, 3.5));
    assert_eq!(v.x_min, 0.0);
    // Reference lines are part of the data extent.
    assert!(v.x_max > 80.0);
}

#[test]
fn autoscale_keeps_fixed_limits() {
    let data = Dataset::new(["a", "b"], &[26.0, 87.0]).unwrap();
    let mut chart = Chart::new()
        .with_y_axis(Axis::new("%").with_range(0.0, 100.0))
        .with_series(Series::bar("", data));
    chart.autoscale_axes();
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (Some(0.0), Some(100.0)));
}

#[test]
fn autoscale_scatter_spans_both_axes() {
    let chart = Chart::new().with_series(Series::scatter("hubs", vec![(1.0, -2.0), (5.0, 3.0)]));
    let v = ViewState::from_chart(&chart);
    assert!(v.x_min < 1.0 && v.x_max > 5.0);
    assert!(v.y_min < -2.0 && v.y_max > 3.0);
}
