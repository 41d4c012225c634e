// File: crates/chart-core/src/series.rs
// Summary: Dataset and series model for bar, horizontal bar, line and scatter data.
// Notes:
// - Categorical series (Bar, HBar, Line) place category `i` at coordinate `i`
//   on the category axis; Scatter uses numeric x/y directly.

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::format::{dollars, plain, thousands, ValueFormat};

/// Ordered (label, value) pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Dataset {
    /// Pair labels with values; both sequences must have the same length.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>, values: &[f64]) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        Ok(Self { labels, values: values.to_vec() })
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Index and value of the maximum; first one wins on ties.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })
    }

    /// Running sum, same length as the dataset.
    pub fn cumulative(&self) -> Vec<f64> {
        self.values
            .iter()
            .scan(0.0, |acc, v| {
                *acc += v;
                Some(*acc)
            })
            .collect()
    }

    /// Same labels with new values (e.g. a cumulative line over monthly bars).
    pub fn with_values(&self, values: &[f64]) -> Result<Self> {
        Dataset::new(self.labels.iter().cloned(), values)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// Vertical bars; several bar series in one chart are grouped.
    Bar,
    /// Horizontal bars; first category on top.
    HBar,
    /// Categorical polyline.
    Line,
    /// Numeric x/y markers, optionally sized as bubbles.
    Scatter,
}

impl SeriesKind {
    pub fn is_categorical(self) -> bool { !matches!(self, SeriesKind::Scatter) }
    pub fn is_bar(self) -> bool { matches!(self, SeriesKind::Bar | SeriesKind::HBar) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    Triangle,
    TriangleDown,
    Diamond,
    Cross,
}

/// Stroke pattern for lines and reference lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// On/off intervals for a stroke of width `w`; empty when solid.
    pub fn intervals(self, w: f32) -> Vec<f32> {
        let w = w.max(1.0);
        match self {
            LineStyle::Solid => Vec::new(),
            LineStyle::Dashed => vec![w * 3.0, w * 1.5],
            LineStyle::Dotted => vec![w, w * 1.5],
            LineStyle::DashDot => vec![w * 3.0, w * 1.5, w, w * 1.5],
        }
    }

    pub fn path_effect(self, w: f32) -> Option<skia::PathEffect> {
        let intervals = self.intervals(w);
        if intervals.is_empty() { None } else { skia::PathEffect::dash(&intervals, 0.0) }
    }
}

/// Area fill under a line series.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// Fill between the line and a constant value.
    ToValue(f64),
    /// Fill between the line and another value sequence of the same length.
    Between(Vec<f64>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Past the bar end (or above the point).
    Outside,
    /// Inside the bar near its end, in white.
    Inside,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    /// Categorical data (Bar, HBar, Line).
    pub data: Dataset,
    /// Numeric points (Scatter).
    pub data_xy: Vec<(f64, f64)>,
    /// Bubble sizes in data units; empty means fixed marker size.
    pub sizes: Vec<f64>,
    /// Per-point names shown as scatter labels and in hover text.
    pub point_labels: Vec<String>,
    pub color: Option<skia::Color>,
    pub point_colors: Vec<skia::Color>,
    pub alpha: Option<f32>,
    pub marker: Marker,
    pub marker_size: f32,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub fill: Option<Fill>,
    pub fill_alpha: Option<f32>,
    /// Legend entry for the filled area.
    pub fill_label: Option<String>,
    pub edge: bool,
    pub value_labels: Option<ValueFormat>,
    pub label_placement: LabelPlacement,
    /// Hover template with `{x}`, `{y}` and `{name}` placeholders; `{y:,}` and
    /// `{y:$}` force separator or dollar formatting of the value.
    pub hover: Option<String>,
    pub in_legend: bool,
}

impl Series {
    fn base(name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            name: name.into(),
            kind,
            data: Dataset::default(),
            data_xy: Vec::new(),
            sizes: Vec::new(),
            point_labels: Vec::new(),
            color: None,
            point_colors: Vec::new(),
            alpha: None,
            marker: Marker::None,
            marker_size: 6.0,
            line_width: 2.0,
            line_style: LineStyle::Solid,
            fill: None,
            fill_alpha: None,
            fill_label: None,
            edge: kind.is_bar(),
            value_labels: None,
            label_placement: LabelPlacement::Outside,
            hover: None,
            in_legend: true,
        }
    }

    pub fn bar(name: impl Into<String>, data: Dataset) -> Self {
        Self { data, ..Self::base(name, SeriesKind::Bar) }
    }

    pub fn hbar(name: impl Into<String>, data: Dataset) -> Self {
        Self { data, ..Self::base(name, SeriesKind::HBar) }
    }

    pub fn line(name: impl Into<String>, data: Dataset) -> Self {
        Self { data, marker: Marker::Circle, line_width: 3.0, ..Self::base(name, SeriesKind::Line) }
    }

    pub fn scatter(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { data_xy: points, marker: Marker::Circle, marker_size: 8.0, ..Self::base(name, SeriesKind::Scatter) }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_colors = colors;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_marker(mut self, marker: Marker, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_fill(mut self, fill: Fill, alpha: f32) -> Self {
        self.fill = Some(fill);
        self.fill_alpha = Some(alpha);
        self
    }

    pub fn with_fill_label(mut self, label: impl Into<String>) -> Self {
        self.fill_label = Some(label.into());
        self
    }

    pub fn without_edge(mut self) -> Self {
        self.edge = false;
        self
    }

    pub fn with_value_labels(mut self, format: ValueFormat) -> Self {
        self.value_labels = Some(format);
        self
    }

    pub fn labels_inside(mut self) -> Self {
        self.label_placement = LabelPlacement::Inside;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<f64>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_point_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.point_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hover(mut self, template: impl Into<String>) -> Self {
        self.hover = Some(template.into());
        self
    }

    pub fn hidden_from_legend(mut self) -> Self {
        self.in_legend = false;
        self
    }

    /// Number of drawable points.
    pub fn len(&self) -> usize {
        match self.kind {
            SeriesKind::Scatter => self.data_xy.len(),
            _ => self.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// `(category_or_x, value)` of point `i`.
    pub fn point(&self, i: usize) -> (f64, f64) {
        match self.kind {
            SeriesKind::Scatter => self.data_xy[i],
            _ => (i as f64, self.data.values()[i]),
        }
    }

    /// Color for point `i`: per-point override, series color, then palette slot.
    pub fn color_at(&self, i: usize, fallback: skia::Color) -> skia::Color {
        self.point_colors.get(i).copied().or(self.color).unwrap_or(fallback)
    }

    /// Expand the hover template for point `i`; `x_format` formats numeric x.
    pub fn hover_text(&self, i: usize, x_format: &ValueFormat) -> String {
        let (x, y) = self.point(i);
        let x_text = match self.kind {
            SeriesKind::Scatter => x_format.format_at(i, x),
            _ => self.data.labels().get(i).cloned().unwrap_or_default().replace('\n', " "),
        };
        let y_text = self.value_labels.as_ref().map_or_else(|| plain(y), |f| f.format_at(i, y));
        let name = self.point_labels.get(i).cloned().unwrap_or_else(|| self.name.clone());
        match &self.hover {
            Some(t) => t
                .replace("{x}", &x_text)
                .replace("{y:,}", &thousands(y.round() as i64))
                .replace("{y:$}", &dollars(y))
                .replace("{y}", &y_text)
                .replace("{name}", &name),
            None if name.is_empty() => format!("{x_text}: {y_text}"),
            None => format!("{name}<br>{x_text}: {y_text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Dataset {
        Dataset::new(["Jan", "Feb", "Mar"], &[2403.0, 16234.0, 8834.0]).unwrap()
    }

    #[test]
    fn line_styles_scale_with_width() {
        assert!(LineStyle::Solid.intervals(2.0).is_empty());
        assert!(LineStyle::Solid.path_effect(2.0).is_none());
        assert_eq!(LineStyle::Dashed.intervals(2.0), [6.0, 3.0]);
        assert_eq!(LineStyle::Dotted.intervals(2.0), [2.0, 3.0]);
        assert_eq!(LineStyle::DashDot.intervals(0.5), [3.0, 1.5, 1.0, 1.5]);
        assert_eq!(Series::line("", months()).dashed().line_style, LineStyle::Dashed);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = Dataset::new(["a", "b"], &[1.0]).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { labels: 2, values: 1 }));
    }

    #[test]
    fn peak_and_cumulative() {
        let d = months();
        assert_eq!(d.peak(), Some((1, 16234.0)));
        assert_eq!(d.cumulative(), vec![2403.0, 18637.0, 27471.0]);
        assert_eq!(Dataset::default().peak(), None);
    }

    #[test]
    fn hover_template_expands_placeholders() {
        let s = Series::bar("Layoffs", months())
            .with_value_labels(ValueFormat::Thousands)
            .with_hover("{name} in {x}: {y}");
        assert_eq!(s.hover_text(1, &ValueFormat::Plain), "Layoffs in Feb: 16,234");
    }

    #[test]
    fn hover_template_value_formats() {
        let s = Series::line("Openings", months()).with_hover("{x}<br>{y:,} / {y:$}");
        assert_eq!(s.hover_text(1, &ValueFormat::Plain), "Feb<br>16,234 / $16,234");
    }

    #[test]
    fn default_hover_for_scatter_uses_point_names() {
        let s = Series::scatter("", vec![(120.0, 168000.0)]).with_point_labels(["SF"]);
        assert_eq!(s.hover_text(0, &ValueFormat::Plain), "SF<br>120: 168000");
    }

    #[test]
    fn per_point_colors_override_series_color() {
        let s = Series::bar("x", months())
            .with_color(skia::Color::BLUE)
            .with_point_colors(vec![skia::Color::RED]);
        assert_eq!(s.color_at(0, skia::Color::BLACK), skia::Color::RED);
        assert_eq!(s.color_at(2, skia::Color::BLACK), skia::Color::BLUE);
    }
}
