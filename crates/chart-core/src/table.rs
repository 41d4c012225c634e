// File: crates/chart-core/src/table.rs
// Summary: Data table panel with a header row and optional per-row fills.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::text::{Anchor, Font, HAlign, TextShaper, VAlign};
use crate::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct Table {
    pub title: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_fills: Vec<Option<skia::Color>>,
    /// Relative column widths; equal when empty.
    pub col_widths: Vec<f32>,
    pub align_left: bool,
    /// Caption drawn centered under the table.
    pub note: Option<String>,
}

impl Table {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self { header: header.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self.row_fills.push(None);
        self
    }

    /// Fill color for the most recently added row.
    pub fn highlighted(mut self, color: skia::Color) -> Self {
        if let Some(last) = self.row_fills.last_mut() {
            *last = Some(color);
        }
        self
    }

    pub fn with_col_widths(mut self, widths: Vec<f32>) -> Self {
        self.col_widths = widths;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn left_aligned(mut self) -> Self {
        self.align_left = true;
        self
    }

    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).chain(std::iter::once(self.header.len())).max().unwrap_or(0)
    }

    /// Left edges and widths of each column spanning `width`.
    fn column_layout(&self, left: f32, width: f32) -> Vec<(f32, f32)> {
        let n = self.columns().max(1);
        let weights: Vec<f32> = (0..n).map(|i| self.col_widths.get(i).copied().unwrap_or(1.0).max(0.0)).collect();
        let total: f32 = weights.iter().sum::<f32>().max(f32::EPSILON);
        let mut x = left;
        weights
            .iter()
            .map(|w| {
                let cw = width * w / total;
                let col = (x, cw);
                x += cw;
                col
            })
            .collect()
    }

    pub fn draw(&self, canvas: &skia::Canvas, rect: RectF, theme: &Theme, text: &TextShaper) {
        let mut area = rect.inset(6.0, 6.0, 6.0, 6.0);
        if let Some(title) = &self.title {
            let font = Font::new(theme.fonts.axis_label, theme.axis_label).bold();
            let (_, th) = text.measure(title, font);
            text.draw(canvas, title, (area.center_x(), area.top), font, Anchor::TOP);
            area = area.inset(0.0, th + 6.0, 0.0, 0.0);
        }
        if let Some(note) = &self.note {
            let font = Font::new(theme.fonts.base, theme.axis_label).bold();
            let (_, nh) = text.measure(note, font);
            text.draw(canvas, note, (area.center_x(), area.bottom), font, Anchor::BOTTOM);
            area = area.inset(0.0, 0.0, 0.0, nh + 8.0);
        }

        let body_font = Font::new(theme.fonts.tick, theme.axis_label);
        let header_font = Font::new(theme.fonts.tick, skia::Color::WHITE).bold();
        let line_h = |cells: &[String], font: Font| {
            cells.iter().map(|c| text.measure(c, font).1).fold(font.size, f32::max) + 8.0
        };
        let mut heights = vec![line_h(&self.header, header_font)];
        heights.extend(self.rows.iter().map(|r| line_h(r, body_font)));
        // Shrink rows evenly when the table does not fit.
        let natural: f32 = heights.iter().sum();
        let scale = if natural > area.height() { area.height() / natural } else { 1.0 };

        let width = area.width() * 0.95;
        let cols = self.column_layout(area.center_x() - width * 0.5, width);
        let mut top = area.top + ((area.height() - natural * scale) * 0.5).max(0.0);

        let mut fill = skia::Paint::default();
        let mut grid = skia::Paint::default();
        grid.set_style(skia::paint::Style::Stroke);
        grid.set_stroke_width(0.8);
        grid.set_color(theme.tick);

        let all_rows = std::iter::once((&self.header, Some(theme.palette.primary), header_font))
            .chain(self.rows.iter().enumerate().map(|(i, r)| (r, self.row_fills.get(i).copied().flatten(), body_font)));
        for ((cells, row_fill, font), h) in all_rows.zip(heights.iter()) {
            let h = h * scale;
            for (c, &(x, w)) in cols.iter().enumerate() {
                let cell = skia::Rect::from_xywh(x, top, w, h);
                fill.set_color(row_fill.unwrap_or(theme.background));
                canvas.draw_rect(cell, &fill);
                canvas.draw_rect(cell, &grid);
                if let Some(s) = cells.get(c) {
                    let (at, anchor) = if self.align_left {
                        ((x + 5.0, top + h * 0.5), Anchor::new(HAlign::Left, VAlign::Middle))
                    } else {
                        ((x + w * 0.5, top + h * 0.5), Anchor::CENTER)
                    };
                    text.draw(canvas, s, at, font, anchor);
                }
            }
            top += h;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_widest_row() {
        let t = Table::new(["Year", "Layoffs"]).with_row(["2025", "122,549", "extra"]);
        assert_eq!(t.columns(), 3);
    }

    #[test]
    fn column_layout_uses_relative_widths() {
        let t = Table::new(["a", "b"]).with_col_widths(vec![3.0, 1.0]);
        let cols = t.column_layout(0.0, 100.0);
        assert_eq!(cols, vec![(0.0, 75.0), (75.0, 25.0)]);
    }

    #[test]
    fn highlight_applies_to_last_row() {
        let t = Table::new(["a"]).with_row(["1"]).with_row(["2"]).highlighted(skia::Color::YELLOW);
        assert_eq!(t.row_fills, vec![None, Some(skia::Color::YELLOW)]);
    }
}
