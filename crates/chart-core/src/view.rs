// File: crates/chart-core/src/view.rs
// Visible data ranges of a chart panel and the autoscale rules that produce them.

use crate::chart::{CategoryAxis, RefOrientation};
use crate::series::{Fill, LabelPlacement, SeriesKind};
use crate::Chart;

/// Relative padding added around the data on numeric axes.
const MARGIN: f64 = 0.05;
/// Extra room past the extreme values when labels are drawn outside them.
const LABEL_HEADROOM: f64 = 0.10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Running min/max along one axis plus the autoscale flags for it.
#[derive(Clone, Copy, Debug)]
struct Extent {
    lo: f64,
    hi: f64,
    /// Bars start at zero: no margin below a zero minimum (or above a zero maximum).
    sticky_zero: bool,
    headroom: bool,
}

impl Extent {
    fn new() -> Self {
        Self { lo: f64::INFINITY, hi: f64::NEG_INFINITY, sticky_zero: false, headroom: false }
    }

    fn push(&mut self, v: f64) {
        if v.is_finite() {
            self.lo = self.lo.min(v);
            self.hi = self.hi.max(v);
        }
    }

    fn resolve(self, fixed_min: Option<f64>, fixed_max: Option<f64>) -> (f64, f64) {
        let (mut lo, mut hi) = if self.lo.is_finite() { (self.lo, self.hi) } else { (0.0, 1.0) };
        if (hi - lo).abs() < 1e-9 {
            hi = lo + 1.0;
        }
        let span = hi - lo;
        let extra = if self.headroom { LABEL_HEADROOM } else { 0.0 };
        let below = if self.sticky_zero && lo == 0.0 { 0.0 } else { span * (MARGIN + if lo < 0.0 { extra } else { 0.0 }) };
        let above = if self.sticky_zero && hi == 0.0 { 0.0 } else { span * (MARGIN + if hi > 0.0 { extra } else { 0.0 }) };
        lo -= below;
        hi += above;
        (fixed_min.unwrap_or(lo), fixed_max.unwrap_or(hi))
    }
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x = Extent::new();
        let mut y = Extent::new();
        let cat_axis = chart.categories().map(|(a, labels)| (a, labels.len()));
        let (value, category_span) = match cat_axis {
            Some((CategoryAxis::Y, n)) => (&mut x, Some((CategoryAxis::Y, n))),
            Some((CategoryAxis::X, n)) => (&mut y, Some((CategoryAxis::X, n))),
            None => (&mut y, None),
        };

        // Value axis of categorical series.
        for s in chart.series.iter().filter(|s| s.kind.is_categorical()) {
            for &v in s.data.values() {
                value.push(v);
            }
            match &s.fill {
                Some(Fill::ToValue(v)) => value.push(*v),
                Some(Fill::Between(other)) => other.iter().for_each(|v| value.push(*v)),
                None => {}
            }
            if s.kind.is_bar() {
                value.push(0.0);
                value.sticky_zero = true;
            }
            if s.value_labels.is_some() && s.label_placement == LabelPlacement::Outside {
                value.headroom = true;
            }
        }

        // Scatter series are numeric on both axes.
        for s in chart.series.iter().filter(|s| s.kind == SeriesKind::Scatter) {
            for &(px, py) in &s.data_xy {
                x.push(px);
                y.push(py);
            }
            if !s.sizes.is_empty() || s.value_labels.is_some() {
                x.headroom = true;
                y.headroom = true;
            }
        }

        for r in &chart.ref_lines {
            match r.orientation {
                RefOrientation::Horizontal => y.push(r.value),
                RefOrientation::Vertical => x.push(r.value),
            }
        }
        for a in &chart.annotations {
            x.push(a.at.0);
            y.push(a.at.1);
        }

        let (mut x_min, mut x_max) = x.resolve(chart.x_axis.min, chart.x_axis.max);
        let (mut y_min, mut y_max) = y.resolve(chart.y_axis.min, chart.y_axis.max);
        match category_span {
            Some((CategoryAxis::X, n)) => {
                x_min = chart.x_axis.min.unwrap_or(-0.5);
                x_max = chart.x_axis.max.unwrap_or(n as f64 - 0.5);
            }
            Some((CategoryAxis::Y, n)) => {
                y_min = chart.y_axis.min.unwrap_or(-0.5);
                y_max = chart.y_axis.max.unwrap_or(n as f64 - 0.5);
            }
            None => {}
        }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Write the ranges into the chart's axes as fixed limits.
    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = Some(self.x_min);
        chart.x_axis.max = Some(self.x_max);
        chart.y_axis.min = Some(self.y_min);
        chart.y_axis.max = Some(self.y_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Dataset, Series};

    #[test]
    fn extent_widens_degenerate_span() {
        let mut e = Extent::new();
        e.push(5.0);
        let (lo, hi) = e.resolve(None, None);
        assert!(lo < 5.0 && hi > 6.0);
    }

    #[test]
    fn empty_chart_defaults_to_unit_range() {
        let v = ViewState::from_chart(&Chart::new());
        assert!(v.y_min < 0.0 && v.y_max > 1.0);
    }

    #[test]
    fn line_fill_to_value_is_included() {
        let d = Dataset::new(["a", "b"], &[110.0, 102.0]).unwrap();
        let chart = Chart::new().with_series(Series::line("idx", d).with_fill(Fill::ToValue(100.0), 0.2));
        let v = ViewState::from_chart(&chart);
        assert!(v.y_min < 100.0);
        assert_eq!((v.x_min, v.x_max), (-0.5, 1.5));
    }
}
