// File: crates/chart-core/src/pie.rs
// Summary: Pie and sunburst panels: wedge geometry, hierarchy validation and drawing.

use std::collections::HashMap;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::format::plain;
use crate::geometry::RectF;
use crate::hit::{HitRegion, HitShape};
use crate::text::{Anchor, Font, TextShaper};
use crate::theme::{with_alpha, Theme};

/// Skia angle of 12 o'clock.
const TOP_DEG: f32 = -90.0;

#[derive(Clone, Debug, Default)]
pub struct PieChart {
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<skia::Color>,
    /// Radial offset per wedge as a fraction of the radius.
    pub explode: Vec<f32>,
    pub percent_labels: bool,
    pub hover: Option<String>,
}

/// One wedge in Skia angles (degrees clockwise from 3 o'clock).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub start: f32,
    pub sweep: f32,
    pub fraction: f64,
}

impl Wedge {
    pub fn mid(&self) -> f32 { self.start + self.sweep * 0.5 }
}

impl PieChart {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>, values: &[f64]) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        Ok(Self { labels, values: values.to_vec(), percent_labels: true, ..Default::default() })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Same explode offset for every wedge.
    pub fn exploded(mut self, offset: f32) -> Self {
        self.explode = vec![offset; self.values.len()];
        self
    }

    pub fn with_hover(mut self, template: impl Into<String>) -> Self {
        self.hover = Some(template.into());
        self
    }

    /// Wedges counter-clockwise from 12 o'clock; negative values count as zero.
    pub fn wedges(&self) -> Vec<Wedge> {
        let total: f64 = self.values.iter().map(|v| v.max(0.0)).sum();
        let mut acc = 0.0;
        self.values
            .iter()
            .map(|v| {
                let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
                let w = Wedge { start: TOP_DEG - (acc * 360.0) as f32, sweep: -(fraction * 360.0) as f32, fraction };
                acc += fraction;
                w
            })
            .collect()
    }

    fn hover_text(&self, i: usize, w: &Wedge) -> String {
        let label = self.labels[i].replace('\n', " ");
        let pct = format!("{:.1}%", w.fraction * 100.0);
        match &self.hover {
            Some(t) => t.replace("{x}", &label).replace("{y}", &plain(self.values[i])).replace("{name}", &pct),
            None => format!("{label}: {} ({pct})", plain(self.values[i])),
        }
    }

    pub fn draw(&self, canvas: &skia::Canvas, rect: RectF, theme: &Theme, text: &TextShaper, hits: &mut Vec<HitRegion>) {
        let mut area = rect.inset(6.0, 6.0, 6.0, 6.0);
        if let Some(title) = &self.title {
            let font = Font::new(theme.fonts.axis_label, theme.axis_label).bold();
            let (_, th) = text.measure(title, font);
            text.draw(canvas, title, (area.center_x(), area.top), font, Anchor::TOP);
            area = area.inset(0.0, th + 8.0, 0.0, 0.0);
        }
        // Leave a ring for outside labels.
        let radius = (area.width().min(area.height()) * 0.5 / 1.35).max(1.0);
        let (cx, cy) = (area.center_x(), area.center_y());
        let label_font = Font::new(theme.fonts.base, theme.axis_label);
        let pct_font = Font::new(theme.fonts.base, theme.axis_label).bold();

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_color(theme.background);
        edge.set_stroke_width(1.0);

        for (i, w) in self.wedges().iter().enumerate() {
            if w.fraction <= 0.0 { continue; }
            let mid = w.mid().to_radians();
            let offset = self.explode.get(i).copied().unwrap_or(0.0) * radius;
            let (wx, wy) = (cx + offset * mid.cos(), cy + offset * mid.sin());
            let oval = skia::Rect::from_ltrb(wx - radius, wy - radius, wx + radius, wy + radius);

            let mut path = skia::Path::new();
            path.move_to((wx, wy));
            path.arc_to(oval, w.start, w.sweep, false);
            path.close();
            paint.set_color(self.colors.get(i).copied().unwrap_or_else(|| theme.palette.cycle(i)));
            canvas.draw_path(&path, &paint);
            canvas.draw_path(&path, &edge);

            let r_label = radius * 1.12;
            let at = (wx + r_label * mid.cos(), wy + r_label * mid.sin());
            text.draw(canvas, &self.labels[i], at, label_font, outside_anchor(mid));
            if self.percent_labels {
                let r_pct = radius * 0.6;
                let at = (wx + r_pct * mid.cos(), wy + r_pct * mid.sin());
                text.draw(canvas, &format!("{:.1}%", w.fraction * 100.0), at, pct_font, Anchor::CENTER);
            }
            hits.push(HitRegion::new(
                HitShape::Wedge { cx: wx, cy: wy, r0: 0.0, r1: radius, start: w.start, sweep: w.sweep },
                self.hover_text(i, w),
            ));
        }
    }
}

/// Anchor for a label placed outside the circle at angle `rad`.
fn outside_anchor(rad: f32) -> Anchor {
    use crate::text::{HAlign, VAlign};
    let (c, s) = (rad.cos(), rad.sin());
    let h = if c > 0.3 { HAlign::Left } else if c < -0.3 { HAlign::Right } else { HAlign::Center };
    let v = if s > 0.3 { VAlign::Top } else if s < -0.3 { VAlign::Bottom } else { VAlign::Middle };
    Anchor::new(h, v)
}

/// Hierarchical node; `parent` is empty for roots.
#[derive(Clone, Debug, PartialEq)]
pub struct SunburstNode {
    pub label: String,
    pub parent: String,
    /// Total value of the node, children included.
    pub value: f64,
}

/// Placed ring segment of a sunburst.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub node: usize,
    pub depth: usize,
    pub start: f32,
    pub sweep: f32,
    /// Index of the depth-1 ancestor (or the node itself), used for coloring.
    pub branch: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Sunburst {
    pub title: Option<String>,
    pub nodes: Vec<SunburstNode>,
}

impl Sunburst {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_node(mut self, label: impl Into<String>, parent: impl Into<String>, value: f64) -> Self {
        self.nodes.push(SunburstNode { label: label.into(), parent: parent.into(), value });
        self
    }

    /// Every non-empty parent must name a node, and parent chains must end at a root.
    pub fn validate(&self) -> Result<()> {
        let index: HashMap<&str, usize> = self.nodes.iter().enumerate().map(|(i, n)| (n.label.as_str(), i)).collect();
        for n in &self.nodes {
            if !n.parent.is_empty() && !index.contains_key(n.parent.as_str()) {
                return Err(ChartError::UnknownParent { label: n.label.clone(), parent: n.parent.clone() });
            }
        }
        for n in &self.nodes {
            let mut cur = n;
            let mut steps = 0;
            while !cur.parent.is_empty() {
                steps += 1;
                if steps > self.nodes.len() {
                    return Err(ChartError::Cycle(n.label.clone()));
                }
                cur = &self.nodes[index[cur.parent.as_str()]];
            }
        }
        Ok(())
    }

    /// Depth-first layout: roots share the full circle by value, children
    /// take their share of the parent's angle (clockwise from 12 o'clock).
    pub fn layout(&self) -> Result<Vec<Segment>> {
        self.validate()?;
        let mut out = Vec::with_capacity(self.nodes.len());
        let roots: Vec<usize> = (0..self.nodes.len()).filter(|&i| self.nodes[i].parent.is_empty()).collect();
        let total: f64 = roots.iter().map(|&i| self.nodes[i].value.max(0.0)).sum();
        let mut start = TOP_DEG;
        for &r in &roots {
            let sweep = if total > 0.0 { (self.nodes[r].value.max(0.0) / total * 360.0) as f32 } else { 0.0 };
            self.place(r, 0, start, sweep, r, &mut out);
            start += sweep;
        }
        Ok(out)
    }

    fn place(&self, node: usize, depth: usize, start: f32, sweep: f32, branch: usize, out: &mut Vec<Segment>) {
        out.push(Segment { node, depth, start, sweep, branch });
        let label = &self.nodes[node].label;
        // Children that add up to more than their parent are scaled to fit its angle.
        let children_total: f64 = self.nodes.iter().filter(|c| &c.parent == label).map(|c| c.value.max(0.0)).sum();
        let denom = self.nodes[node].value.max(children_total);
        let mut child_start = start;
        for (i, child) in self.nodes.iter().enumerate().filter(|(_, c)| &c.parent == label) {
            let share = if denom > 0.0 { (child.value.max(0.0) / denom) as f32 } else { 0.0 };
            let child_sweep = sweep * share;
            let child_branch = if depth == 0 { i } else { branch };
            self.place(i, depth + 1, child_start, child_sweep, child_branch, out);
            child_start += child_sweep;
        }
    }

    pub fn draw(&self, canvas: &skia::Canvas, rect: RectF, theme: &Theme, text: &TextShaper, hits: &mut Vec<HitRegion>) -> Result<()> {
        let segments = self.layout()?;
        let mut area = rect.inset(6.0, 6.0, 6.0, 6.0);
        if let Some(title) = &self.title {
            let font = Font::new(theme.fonts.title, theme.axis_label).bold();
            let (_, th) = text.measure(title, font);
            text.draw(canvas, title, (area.center_x(), area.top), font, Anchor::TOP);
            area = area.inset(0.0, th + 8.0, 0.0, 0.0);
        }
        let depth = segments.iter().map(|s| s.depth).max().unwrap_or(0) + 1;
        let outer = area.width().min(area.height()) * 0.5 * 0.95;
        let ring = outer / depth as f32;
        let (cx, cy) = (area.center_x(), area.center_y());

        // Depth-1 branches take palette colors in order of appearance.
        let mut branch_colors: HashMap<usize, skia::Color> = HashMap::new();
        for s in segments.iter().filter(|s| s.depth == 1) {
            let next = branch_colors.len();
            branch_colors.entry(s.node).or_insert_with(|| theme.palette.cycle(next));
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_color(theme.background);
        edge.set_stroke_width(1.5);
        let font = Font::new(theme.fonts.tick, theme.axis_label);

        for s in &segments {
            let node = &self.nodes[s.node];
            let (r0, r1) = (ring * s.depth as f32, ring * (s.depth as f32 + 1.0));
            let color = match s.depth {
                0 => with_alpha(theme.palette.neutral, 0.35),
                d => {
                    let base = branch_colors.get(&s.branch).copied().unwrap_or(theme.palette.neutral);
                    with_alpha(base, (1.0 - 0.22 * (d as f32 - 1.0)).max(0.35))
                }
            };
            fill.set_color(color);
            let path = ring_segment(cx, cy, r0, r1, s.start, s.sweep);
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &edge);

            let arc_len = (s.sweep.abs().to_radians()) * (r0 + r1) * 0.5;
            let (tw, _) = text.measure(&node.label, font);
            if s.depth == 0 || tw <= arc_len.max(ring) * 0.95 {
                let mid = (s.start + s.sweep * 0.5).to_radians();
                let r_mid = if s.depth == 0 && s.sweep >= 359.0 { 0.0 } else { (r0 + r1) * 0.5 };
                text.draw(canvas, &node.label, (cx + r_mid * mid.cos(), cy + r_mid * mid.sin()), font, Anchor::CENTER);
            }
            hits.push(HitRegion::new(
                HitShape::Wedge { cx, cy, r0, r1, start: s.start, sweep: s.sweep },
                format!("<b>{}</b><br>Value: {}<br>Percent: {:.1}%", node.label, plain(node.value), s.sweep.abs() / 3.6),
            ));
        }
        Ok(())
    }
}

/// Closed annulus segment; a zero inner radius yields a pie wedge.
fn ring_segment(cx: f32, cy: f32, r0: f32, r1: f32, start: f32, sweep: f32) -> skia::Path {
    let outer = skia::Rect::from_ltrb(cx - r1, cy - r1, cx + r1, cy + r1);
    let mut path = skia::Path::new();
    if sweep >= 359.99 && r0 <= 0.0 {
        path.add_circle((cx, cy), r1, None);
        return path;
    }
    if r0 <= 0.0 {
        path.move_to((cx, cy));
        path.arc_to(outer, start, sweep, false);
    } else {
        let inner = skia::Rect::from_ltrb(cx - r0, cy - r0, cx + r0, cy + r0);
        path.arc_to(outer, start, sweep, true);
        path.arc_to(inner, start + sweep, -sweep, false);
    }
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedges_run_counter_clockwise_from_top() {
        let pie = PieChart::new(["On-Site", "Hybrid", "Remote"], &[56.0, 29.0, 15.0]).unwrap();
        let w = pie.wedges();
        assert_eq!(w[0].start, -90.0);
        assert!((w[0].sweep + 201.6).abs() < 1e-3);
        assert!((w[1].start - (-90.0 - 201.6)).abs() < 1e-3);
        let total: f64 = w.iter().map(|w| w.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let s = Sunburst::new().with_node("IT", "", 10.0).with_node("Rust", "Systems", 2.0);
        assert!(matches!(s.validate(), Err(ChartError::UnknownParent { .. })));
    }

    #[test]
    fn parent_cycle_is_rejected() {
        let s = Sunburst::new().with_node("A", "B", 1.0).with_node("B", "A", 1.0);
        assert!(matches!(s.validate(), Err(ChartError::Cycle(_))));
    }

    #[test]
    fn children_split_parent_angle_by_value() {
        let s = Sunburst::new()
            .with_node("IT", "", 100.0)
            .with_node("Languages", "IT", 50.0)
            .with_node("Cloud", "IT", 25.0)
            .with_node("Python", "Languages", 25.0);
        let segs = s.layout().unwrap();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0].sweep, 360.0);
        let langs = segs.iter().find(|g| g.node == 1).unwrap();
        assert_eq!(langs.sweep, 180.0);
        let python = segs.iter().find(|g| g.node == 3).unwrap();
        assert_eq!((python.depth, python.sweep, python.branch), (2, 90.0, 1));
        let cloud = segs.iter().find(|g| g.node == 2).unwrap();
        assert_eq!(cloud.start, -90.0 + 180.0);
    }

    #[test]
    fn oversized_children_are_scaled_into_parent() {
        let s = Sunburst::new()
            .with_node("IT", "", 100.0)
            .with_node("USA", "IT", 120.0)
            .with_node("APAC", "IT", 80.0);
        let segs = s.layout().unwrap();
        let total: f32 = segs.iter().filter(|g| g.depth == 1).map(|g| g.sweep).sum();
        assert!((total - 360.0).abs() < 1e-3);
        assert!((segs[1].sweep - 216.0).abs() < 1e-3);
    }
}
