// File: crates/chart-core/src/chart.rs
// Summary: Axes panel (series, reference lines, annotations, legend) drawn onto a Skia canvas.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::grid::nice_ticks;
use crate::hit::{HitRegion, HitShape};
use crate::scale::ValueScale;
use crate::series::{Fill, LabelPlacement, LineStyle, Marker, Series, SeriesKind};
use crate::text::{Anchor, Font, HAlign, TextShaper, VAlign};
use crate::theme::{with_alpha, Theme};
use crate::view::ViewState;
use crate::Axis;

/// Fraction of a category slot taken by a group of bars.
const GROUP_WIDTH: f64 = 0.8;

/// Which axis carries the category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryAxis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPos {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefOrientation {
    Horizontal,
    Vertical,
}

/// Straight reference line across the plot at a data value.
#[derive(Clone, Debug)]
pub struct RefLine {
    pub orientation: RefOrientation,
    pub value: f64,
    pub color: skia::Color,
    pub width: f32,
    pub style: LineStyle,
    pub alpha: f32,
    pub label: Option<String>,
}

impl RefLine {
    pub fn horizontal(value: f64) -> Self {
        Self { orientation: RefOrientation::Horizontal, ..Self::vertical(value) }
    }

    pub fn vertical(value: f64) -> Self {
        Self {
            orientation: RefOrientation::Vertical,
            value,
            color: skia::Color::BLACK,
            width: 1.0,
            style: LineStyle::Solid,
            alpha: 1.0,
            label: None,
        }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style = LineStyle::Dashed;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Shaded span across the plot between two data values.
#[derive(Clone, Debug)]
pub struct Band {
    pub orientation: RefOrientation,
    pub from: f64,
    pub to: f64,
    pub color: skia::Color,
    pub alpha: f32,
}

impl Band {
    /// Span of y values from `from` to `to`.
    pub fn horizontal(from: f64, to: f64) -> Self {
        Self { orientation: RefOrientation::Horizontal, ..Self::vertical(from, to) }
    }

    /// Span of x values; on a category axis category `i` sits at `i`.
    pub fn vertical(from: f64, to: f64) -> Self {
        Self { orientation: RefOrientation::Vertical, from, to, color: skia::Color::GRAY, alpha: 0.1 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Text placed at a data point, optionally boxed and with an arrow back to the point.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub text: String,
    /// Data coordinates; categories are addressed by index.
    pub at: (f64, f64),
    /// Offset of the text from `at` in points, y pointing up.
    pub offset: (f32, f32),
    pub anchor: Anchor,
    pub box_fill: Option<(skia::Color, f32)>,
    pub arrow: bool,
    pub color: Option<skia::Color>,
    pub size: Option<f32>,
    pub bold: bool,
}

impl Annotation {
    /// Plain text at a data point.
    pub fn text(text: impl Into<String>, at: (f64, f64)) -> Self {
        Self {
            text: text.into(),
            at,
            offset: (0.0, 0.0),
            anchor: Anchor::CENTER,
            box_fill: None,
            arrow: false,
            color: None,
            size: None,
            bold: true,
        }
    }

    /// Boxed text offset from the point with an arrow pointing back at it.
    pub fn callout(text: impl Into<String>, at: (f64, f64), offset: (f32, f32), fill: skia::Color) -> Self {
        Self {
            offset,
            anchor: Anchor::new(HAlign::Left, VAlign::Bottom),
            box_fill: Some((fill, 0.7)),
            arrow: true,
            bold: false,
            ..Self::text(text, at)
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = (dx, dy);
        self
    }

    pub fn with_box(mut self, fill: skia::Color, alpha: f32) -> Self {
        self.box_fill = Some((fill, alpha));
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub ref_lines: Vec<RefLine>,
    pub bands: Vec<Band>,
    pub annotations: Vec<Annotation>,
    pub legend: LegendPos,
    /// Extra legend entries drawn as color patches.
    pub legend_patches: Vec<(String, skia::Color)>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::new(""),
            y_axis: Axis::new(""),
            ref_lines: Vec::new(),
            bands: Vec::new(),
            annotations: Vec::new(),
            legend: LegendPos::default(),
            legend_patches: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_ref_line(mut self, line: RefLine) -> Self {
        self.ref_lines.push(line);
        self
    }

    pub fn with_band(mut self, band: Band) -> Self {
        self.bands.push(band);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_legend(mut self, pos: LegendPos) -> Self {
        self.legend = pos;
        self
    }

    pub fn with_legend_patch(mut self, label: impl Into<String>, color: skia::Color) -> Self {
        self.legend_patches.push((label.into(), color));
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Category labels and the axis carrying them, taken from the longest
    /// categorical series. Horizontal bars put categories on Y.
    pub fn categories(&self) -> Option<(CategoryAxis, &[String])> {
        let longest = self
            .series
            .iter()
            .filter(|s| s.kind.is_categorical())
            .max_by_key(|s| s.data.len())?;
        let axis = if self.series.iter().any(|s| s.kind == SeriesKind::HBar) { CategoryAxis::Y } else { CategoryAxis::X };
        Some((axis, longest.data.labels()))
    }

    /// Fill in any axis limit that is not fixed.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Draw into `rect` (figure points), appending hover regions to `hits`.
    pub fn draw(&self, canvas: &skia::Canvas, rect: RectF, theme: &Theme, text: &TextShaper, hits: &mut Vec<HitRegion>) {
        let fonts = theme.fonts;
        let tick_font = Font::new(fonts.tick, theme.tick);
        let label_font = Font::new(fonts.axis_label, theme.axis_label);
        let mut area = rect.inset(6.0, 6.0, 6.0, 6.0);

        if let Some(title) = &self.title {
            let title_font = Font::new(fonts.title, theme.axis_label).bold();
            let (_, th) = text.measure(title, title_font);
            text.draw(canvas, title, (area.center_x(), area.top), title_font, Anchor::TOP);
            area = area.inset(0.0, th + 10.0, 0.0, 0.0);
        }

        let view = ViewState::from_chart(self);
        let cats = self.categories();
        let x_ticks = ticks(&self.x_axis, view.x_min, view.x_max, cats.filter(|(a, _)| *a == CategoryAxis::X).map(|(_, l)| l));
        let y_ticks = ticks(&self.y_axis, view.y_min, view.y_max, cats.filter(|(a, _)| *a == CategoryAxis::Y).map(|(_, l)| l));

        let ytick_w = y_ticks.iter().map(|(_, s)| text.measure(s, tick_font).0).fold(0.0, f32::max);
        let xtick_h = x_ticks
            .iter()
            .map(|(_, s)| rotated_height(text.measure(s, tick_font), self.x_axis.tick_rotation))
            .fold(0.0, f32::max);
        let ylabel_w = if self.y_axis.label.is_empty() { 0.0 } else { text.measure(&self.y_axis.label, label_font).1 + 6.0 };
        let xlabel_h = if self.x_axis.label.is_empty() { 0.0 } else { text.measure(&self.x_axis.label, label_font).1 + 6.0 };

        let plot = RectF::from_ltrb(
            area.left + ylabel_w + ytick_w + 6.0,
            area.top,
            area.right - 4.0,
            area.bottom - xlabel_h - xtick_h - 6.0,
        );

        let sx = ValueScale::new(plot.left, plot.right, view.x_min, view.x_max);
        let sy = match cats {
            // First category on top.
            Some((CategoryAxis::Y, _)) => ValueScale::new(plot.top, plot.bottom, view.y_min, view.y_max),
            _ => ValueScale::new(plot.bottom, plot.top, view.y_min, view.y_max),
        };
        let scales = Scales { x: sx, y: sy, cat: cats.map(|(a, _)| a) };

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);
        draw_grid(canvas, plot, theme, &scales, &x_ticks, &y_ticks, self.x_axis.grid, self.y_axis.grid);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        for band in &self.bands {
            draw_band(canvas, band, plot, &scales);
        }
        for (i, s) in self.series.iter().enumerate() {
            if s.kind == SeriesKind::Line {
                draw_line_fill(canvas, s, theme.palette.cycle(i), theme, &scales);
            }
        }
        let bar_groups = self.bar_slots();
        for (i, s) in self.series.iter().enumerate() {
            let fallback = theme.palette.cycle(i);
            match s.kind {
                SeriesKind::Bar | SeriesKind::HBar => {
                    let (slot, count) = bar_groups[i];
                    draw_bars(canvas, s, fallback, theme, &scales, slot, count, &self.x_axis, hits);
                }
                SeriesKind::Line => draw_line(canvas, s, fallback, &scales, &self.x_axis, hits),
                SeriesKind::Scatter => draw_scatter(canvas, s, fallback, &scales, &self.x_axis, hits),
            }
        }
        for line in &self.ref_lines {
            draw_ref_line(canvas, line, plot, &scales);
        }
        canvas.restore();

        for (i, s) in self.series.iter().enumerate() {
            let (slot, count) = bar_groups[i];
            draw_value_labels(canvas, s, theme, text, &scales, slot, count);
        }
        for a in &self.annotations {
            draw_annotation(canvas, a, theme, text, &scales);
        }

        // Spines (invisible on the market theme, whose axis color matches the plot).
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
        canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);

        for (v, s) in &x_ticks {
            let x = scales.x.to_px(*v);
            if self.x_axis.tick_rotation == 0.0 {
                text.draw(canvas, s, (x, plot.bottom + 4.0), tick_font, Anchor::TOP);
            } else {
                let anchor = Anchor::new(HAlign::Right, VAlign::Top);
                text.draw_rotated(canvas, s, (x, plot.bottom + 4.0), tick_font, anchor, self.x_axis.tick_rotation);
            }
        }
        for (v, s) in &y_ticks {
            text.draw(canvas, s, (plot.left - 4.0, scales.y.to_px(*v)), tick_font, Anchor::RIGHT);
        }
        if !self.x_axis.label.is_empty() {
            let y = plot.bottom + xtick_h + 8.0;
            text.draw(canvas, &self.x_axis.label, (plot.center_x(), y), label_font, Anchor::TOP);
        }
        if !self.y_axis.label.is_empty() {
            text.draw_rotated(canvas, &self.y_axis.label, (area.left, plot.center_y()), label_font, Anchor::TOP, -90.0);
        }

        self.draw_legend(canvas, plot, theme, text);
    }

    /// `(slot, count)` per series: position inside its bar group.
    fn bar_slots(&self) -> Vec<(usize, usize)> {
        let count = self.series.iter().filter(|s| s.kind.is_bar()).count();
        let mut next = 0;
        self.series
            .iter()
            .map(|s| {
                if s.kind.is_bar() {
                    next += 1;
                    (next - 1, count)
                } else {
                    (0, 1)
                }
            })
            .collect()
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: RectF, theme: &Theme, text: &TextShaper) {
        if self.legend == LegendPos::Hidden { return; }
        let mut entries: Vec<(String, skia::Color, Swatch)> = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            if !s.in_legend || s.name.is_empty() { continue; }
            let color = s.color.unwrap_or_else(|| theme.palette.cycle(i));
            let swatch = match s.kind {
                SeriesKind::Bar | SeriesKind::HBar => Swatch::Patch(s.alpha.unwrap_or(theme.bar_alpha)),
                SeriesKind::Line => Swatch::Line { style: s.line_style, marker: s.marker },
                SeriesKind::Scatter => Swatch::Dot,
            };
            entries.push((s.name.clone(), color, swatch));
            if let (Some(_), Some(label)) = (&s.fill, &s.fill_label) {
                entries.push((label.clone(), color, Swatch::Patch(s.fill_alpha.unwrap_or(theme.fill_alpha))));
            }
        }
        for r in &self.ref_lines {
            if let Some(label) = &r.label {
                entries.push((label.clone(), r.color, Swatch::Line { style: r.style, marker: Marker::None }));
            }
        }
        for (label, color) in &self.legend_patches {
            entries.push((label.clone(), *color, Swatch::Patch(theme.bar_alpha)));
        }
        if entries.is_empty() { return; }

        let font = Font::new(theme.fonts.legend, theme.axis_label);
        let sizes: Vec<(f32, f32)> = entries.iter().map(|(l, _, _)| text.measure(l, font)).collect();
        let row_h = sizes.iter().map(|s| s.1).fold(font.size, f32::max) + 4.0;
        let text_w = sizes.iter().map(|s| s.0).fold(0.0, f32::max);
        let w = text_w + 18.0 + 18.0;
        let h = row_h * entries.len() as f32 + 8.0;
        let (left, top) = match self.legend {
            LegendPos::UpperLeft => (plot.left + 8.0, plot.top + 8.0),
            LegendPos::LowerLeft => (plot.left + 8.0, plot.bottom - 8.0 - h),
            LegendPos::LowerRight => (plot.right - 8.0 - w, plot.bottom - 8.0 - h),
            _ => (plot.right - 8.0 - w, plot.top + 8.0),
        };
        let frame = skia::Rect::from_xywh(left, top, w, h);
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(with_alpha(theme.background, 0.8));
        canvas.draw_round_rect(frame, 3.0, 3.0, &bg);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_color(with_alpha(theme.tick, 0.3));
        canvas.draw_round_rect(frame, 3.0, 3.0, &border);

        for (row, (label, color, swatch)) in entries.iter().enumerate() {
            let cy = top + 4.0 + row_h * (row as f32 + 0.5);
            let sx = left + 6.0;
            let mut p = skia::Paint::default();
            p.set_anti_alias(true);
            p.set_color(*color);
            match swatch {
                Swatch::Patch(alpha) => {
                    p.set_alpha_f(*alpha);
                    canvas.draw_rect(skia::Rect::from_xywh(sx, cy - 4.0, 16.0, 8.0), &p);
                }
                Swatch::Line { style, marker } => {
                    p.set_style(skia::paint::Style::Stroke);
                    p.set_stroke_width(2.0);
                    if let Some(effect) = style.path_effect(1.0) {
                        p.set_path_effect(effect);
                    }
                    canvas.draw_line((sx, cy), (sx + 16.0, cy), &p);
                    let mut m = skia::Paint::default();
                    m.set_anti_alias(true);
                    m.set_color(*color);
                    draw_marker(canvas, *marker, (sx + 8.0, cy), 3.0, &m);
                }
                Swatch::Dot => {
                    canvas.draw_circle((sx + 8.0, cy), 4.0, &p);
                }
            }
            text.draw(canvas, label, (sx + 22.0, cy), font, Anchor::LEFT);
        }
    }
}

#[derive(Clone, Copy)]
enum Swatch {
    Patch(f32),
    Line { style: LineStyle, marker: Marker },
    Dot,
}

struct Scales {
    x: ValueScale,
    y: ValueScale,
    cat: Option<CategoryAxis>,
}

impl Scales {
    /// Point position of data coordinate (x, y).
    fn at(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    /// Point position of (category slot, value) honoring orientation.
    fn cat_value(&self, cat: f64, value: f64) -> (f32, f32) {
        match self.cat {
            Some(CategoryAxis::Y) => self.at(value, cat),
            _ => self.at(cat, value),
        }
    }
}

fn ticks(axis: &Axis, min: f64, max: f64, categories: Option<&[String]>) -> Vec<(f64, String)> {
    match categories {
        Some(labels) => labels.iter().enumerate().map(|(i, l)| (i as f64, l.clone())).collect(),
        None => nice_ticks(min, max, 6).into_iter().map(|v| (v, axis.format.format_tick(v))).collect(),
    }
}

fn rotated_height((w, h): (f32, f32), degrees: f32) -> f32 {
    let r = degrees.to_radians();
    w * r.sin().abs() + h * r.cos().abs()
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    theme: &Theme,
    scales: &Scales,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    x_grid: bool,
    y_grid: bool,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    if x_grid {
        for (v, _) in x_ticks {
            let x = scales.x.to_px(*v);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    if y_grid {
        for (v, _) in y_ticks {
            let y = scales.y.to_px(*v);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_bars(
    canvas: &skia::Canvas,
    series: &Series,
    fallback: skia::Color,
    theme: &Theme,
    scales: &Scales,
    slot: usize,
    count: usize,
    x_axis: &Axis,
    hits: &mut Vec<HitRegion>,
) {
    let width = GROUP_WIDTH / count.max(1) as f64;
    let alpha = series.alpha.unwrap_or(theme.bar_alpha);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.edge);

    for (i, &v) in series.data.values().iter().enumerate() {
        let rect = bar_rect(scales, i, v, slot, width);
        fill.set_color(series.color_at(i, fallback));
        fill.set_alpha_f(alpha);
        canvas.draw_rect(rect.to_skia(), &fill);
        if series.edge {
            canvas.draw_rect(rect.to_skia(), &edge);
        }
        hits.push(HitRegion::new(
            HitShape::Rect { x: rect.left, y: rect.top, w: rect.width(), h: rect.height() },
            series.hover_text(i, &x_axis.format),
        ));
    }
}

/// Bar `i` of the series in group slot `slot`, normalized so left <= right, top <= bottom.
fn bar_rect(scales: &Scales, i: usize, value: f64, slot: usize, width: f64) -> RectF {
    let center = i as f64 - GROUP_WIDTH / 2.0 + width * (slot as f64 + 0.5);
    let (x0, y0) = scales.cat_value(center - width / 2.0, 0.0);
    let (x1, y1) = scales.cat_value(center + width / 2.0, value);
    RectF::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

fn line_points(series: &Series, scales: &Scales) -> Vec<(f32, f32)> {
    (0..series.len())
        .map(|i| {
            let (x, y) = series.point(i);
            scales.cat_value(x, y)
        })
        .collect()
}

fn draw_line_fill(canvas: &skia::Canvas, series: &Series, fallback: skia::Color, theme: &Theme, scales: &Scales) {
    let Some(fill) = &series.fill else { return };
    let pts = line_points(series, scales);
    if pts.len() < 2 { return; }
    let other: Vec<(f32, f32)> = match fill {
        Fill::ToValue(v) => (0..pts.len()).rev().map(|i| scales.cat_value(i as f64, *v)).collect(),
        Fill::Between(values) => values
            .iter()
            .enumerate()
            .take(pts.len())
            .rev()
            .map(|(i, v)| scales.cat_value(i as f64, *v))
            .collect(),
    };
    let mut path = skia::Path::new();
    path.move_to(pts[0]);
    for p in pts.iter().skip(1).chain(other.iter()) {
        path.line_to(*p);
    }
    path.close();

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(series.color.unwrap_or(fallback));
    paint.set_alpha_f(series.fill_alpha.unwrap_or(theme.fill_alpha));
    canvas.draw_path(&path, &paint);
}

fn draw_line(canvas: &skia::Canvas, series: &Series, fallback: skia::Color, scales: &Scales, x_axis: &Axis, hits: &mut Vec<HitRegion>) {
    let pts = line_points(series, scales);
    if pts.is_empty() { return; }
    let color = series.color.unwrap_or(fallback);

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for p in pts.iter().skip(1) {
            path.line_to(*p);
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(series.line_width);
        stroke.set_color(color);
        if let Some(a) = series.alpha { stroke.set_alpha_f(a); }
        if let Some(effect) = series.line_style.path_effect(series.line_width) {
            stroke.set_path_effect(effect);
        }
        canvas.draw_path(&path, &stroke);
    }

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    let r = series.marker_size * 0.5;
    for (i, p) in pts.iter().enumerate() {
        marker.set_color(series.color_at(i, color));
        draw_marker(canvas, series.marker, *p, r, &marker);
        hits.push(HitRegion::new(HitShape::Circle { cx: p.0, cy: p.1, r: r.max(5.0) }, series.hover_text(i, &x_axis.format)));
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), r: f32, paint: &skia::Paint) {
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), r, paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), paint);
        }
        Marker::Cross => {
            let mut stroke = paint.clone();
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width((r * 0.4).max(1.0));
            canvas.draw_line((x - r, y - r), (x + r, y + r), &stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &stroke);
        }
        Marker::Triangle | Marker::TriangleDown | Marker::Diamond => {
            let mut path = skia::Path::new();
            if marker == Marker::Triangle {
                path.move_to((x, y - r));
                path.line_to((x + r, y + r * 0.8));
                path.line_to((x - r, y + r * 0.8));
            } else if marker == Marker::TriangleDown {
                path.move_to((x, y + r));
                path.line_to((x + r, y - r * 0.8));
                path.line_to((x - r, y - r * 0.8));
            } else {
                path.move_to((x, y - r));
                path.line_to((x + r, y));
                path.line_to((x, y + r));
                path.line_to((x - r, y));
            }
            path.close();
            canvas.draw_path(&path, paint);
        }
    }
}

/// Bubble radius in points; sizes scale by area up to `MAX_BUBBLE`.
fn bubble_radius(series: &Series, i: usize) -> f32 {
    const MAX_BUBBLE: f32 = 24.0;
    let max = series.sizes.iter().copied().fold(0.0, f64::max);
    match series.sizes.get(i) {
        Some(&s) if max > 0.0 => (MAX_BUBBLE * (s.max(0.0) / max).sqrt() as f32).max(3.0),
        _ => series.marker_size * 0.5,
    }
}

fn draw_scatter(canvas: &skia::Canvas, series: &Series, fallback: skia::Color, scales: &Scales, x_axis: &Axis, hits: &mut Vec<HitRegion>) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_color(skia::Color::WHITE);

    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        let (px, py) = scales.at(x, y);
        let r = bubble_radius(series, i);
        fill.set_color(series.color_at(i, fallback));
        fill.set_alpha_f(series.alpha.unwrap_or(0.7));
        canvas.draw_circle((px, py), r, &fill);
        canvas.draw_circle((px, py), r, &edge);
        hits.push(HitRegion::new(HitShape::Circle { cx: px, cy: py, r: r.max(5.0) }, series.hover_text(i, &x_axis.format)));
    }
}

fn draw_ref_line(canvas: &skia::Canvas, line: &RefLine, plot: RectF, scales: &Scales) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(line.width);
    paint.set_color(line.color);
    paint.set_alpha_f(line.alpha);
    if let Some(effect) = line.style.path_effect(line.width) {
        paint.set_path_effect(effect);
    }
    match line.orientation {
        RefOrientation::Horizontal => {
            let y = scales.y.to_px(line.value);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
        RefOrientation::Vertical => {
            let x = scales.x.to_px(line.value);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
}

fn draw_band(canvas: &skia::Canvas, band: &Band, plot: RectF, scales: &Scales) {
    let mut paint = skia::Paint::default();
    paint.set_color(band.color);
    paint.set_alpha_f(band.alpha);
    let rect = match band.orientation {
        RefOrientation::Horizontal => {
            let (a, b) = (scales.y.to_px(band.from), scales.y.to_px(band.to));
            RectF::from_ltrb(plot.left, a.min(b), plot.right, a.max(b))
        }
        RefOrientation::Vertical => {
            let (a, b) = (scales.x.to_px(band.from), scales.x.to_px(band.to));
            RectF::from_ltrb(a.min(b), plot.top, a.max(b), plot.bottom)
        }
    };
    canvas.draw_rect(rect.to_skia(), &paint);
}

fn draw_value_labels(canvas: &skia::Canvas, series: &Series, theme: &Theme, text: &TextShaper, scales: &Scales, slot: usize, count: usize) {
    let Some(format) = &series.value_labels else { return };
    let font = Font::new(theme.fonts.annotation, theme.axis_label).bold();
    let inside = series.label_placement == LabelPlacement::Inside;
    let inside_font = Font { color: skia::Color::WHITE, ..font };

    for i in 0..series.len() {
        let (x, v) = series.point(i);
        let label = format.format_at(i, v);
        match series.kind {
            SeriesKind::Bar | SeriesKind::HBar => {
                let r = bar_rect(scales, i, v, slot, GROUP_WIDTH / count.max(1) as f64);
                let horizontal = series.kind == SeriesKind::HBar;
                let (at, anchor) = match (horizontal, v >= 0.0, inside) {
                    (false, true, false) => ((r.center_x(), r.top - 3.0), Anchor::BOTTOM),
                    (false, false, false) => ((r.center_x(), r.bottom + 3.0), Anchor::TOP),
                    (false, true, true) => ((r.center_x(), r.top + 4.0), Anchor::TOP),
                    (false, false, true) => ((r.center_x(), r.bottom - 4.0), Anchor::BOTTOM),
                    (true, true, false) => ((r.right + 4.0, r.center_y()), Anchor::LEFT),
                    (true, false, false) => ((r.left - 4.0, r.center_y()), Anchor::RIGHT),
                    (true, true, true) => ((r.right - 4.0, r.center_y()), Anchor::RIGHT),
                    (true, false, true) => ((r.left + 4.0, r.center_y()), Anchor::LEFT),
                };
                text.draw(canvas, &label, at, if inside { inside_font } else { font }, anchor);
            }
            SeriesKind::Line | SeriesKind::Scatter => {
                let (px, py) = scales.cat_value(x, v);
                let r = if series.kind == SeriesKind::Scatter { bubble_radius(series, i) } else { series.marker_size * 0.5 };
                text.draw(canvas, &label, (px, py - r - 3.0), font, Anchor::BOTTOM);
            }
        }
    }
}

fn draw_annotation(canvas: &skia::Canvas, a: &Annotation, theme: &Theme, text: &TextShaper, scales: &Scales) {
    let target = scales.at(a.at.0, a.at.1);
    let pos = (target.0 + a.offset.0, target.1 - a.offset.1);
    let mut font = Font::new(a.size.unwrap_or(theme.fonts.annotation), a.color.unwrap_or(theme.axis_label));
    font.bold = a.bold;

    let (w, h) = text.measure(&a.text, font);
    let left = match a.anchor.h { HAlign::Left => pos.0, HAlign::Center => pos.0 - w * 0.5, HAlign::Right => pos.0 - w };
    let top = match a.anchor.v { VAlign::Top => pos.1, VAlign::Middle => pos.1 - h * 0.5, VAlign::Bottom => pos.1 - h };
    let frame = skia::Rect::from_xywh(left - 5.0, top - 4.0, w + 10.0, h + 8.0);

    if a.arrow {
        // From the nearest point of the box to the target.
        let start = (target.0.clamp(frame.left, frame.right), target.1.clamp(frame.top, frame.bottom));
        draw_arrow(canvas, start, target, theme.annotation_arrow);
    }
    if let Some((fill, alpha)) = a.box_fill {
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(fill);
        bg.set_alpha_f(alpha);
        canvas.draw_round_rect(frame, 5.0, 5.0, &bg);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_color(skia::Color::BLACK);
        canvas.draw_round_rect(frame, 5.0, 5.0, &border);
    }
    text.draw(canvas, &a.text, pos, font, a.anchor);
}

fn draw_arrow(canvas: &skia::Canvas, from: (f32, f32), to: (f32, f32), color: skia::Color) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1.0 { return; }
    let (ux, uy) = (dx / len, dy / len);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_line(from, to, &paint);

    let head = 7.0;
    let mut path = skia::Path::new();
    path.move_to(to);
    path.line_to((to.0 - ux * head - uy * head * 0.4, to.1 - uy * head + ux * head * 0.4));
    path.line_to((to.0 - ux * head + uy * head * 0.4, to.1 - uy * head - ux * head * 0.4));
    path.close();
    paint.set_style(skia::paint::Style::Fill);
    canvas.draw_path(&path, &paint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Dataset;

    fn regions() -> Dataset {
        Dataset::new(["US", "EU", "India"], &[356_700.0, 800_000.0, 500_000.0]).unwrap()
    }

    #[test]
    fn horizontal_bars_put_categories_on_y() {
        let chart = Chart::new().with_series(Series::hbar("", regions()));
        let (axis, labels) = chart.categories().unwrap();
        assert_eq!(axis, CategoryAxis::Y);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn bar_series_share_group_slots() {
        let chart = Chart::new()
            .with_series(Series::bar("base", regions()))
            .with_series(Series::line("trend", regions()))
            .with_series(Series::bar("total", regions()));
        assert_eq!(chart.bar_slots(), vec![(0, 2), (0, 1), (1, 2)]);
    }

    #[test]
    fn scatter_only_chart_has_no_categories() {
        let chart = Chart::new().with_series(Series::scatter("cities", vec![(1.0, 2.0)]));
        assert!(chart.categories().is_none());
    }
}
