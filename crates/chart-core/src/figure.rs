// File: crates/chart-core/src/figure.rs
// Summary: Figure grid of panels and the headless PNG/RGBA/SVG rendering pipeline.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::{RectF, RectI32};
use crate::hit::HitRegion;
use crate::pie::{PieChart, Sunburst};
use crate::table::Table;
use crate::text::{Anchor, Font, TextShaper};
use crate::theme::Theme;
use crate::types::{inches_to_points, DEFAULT_DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, POINTS_PER_INCH, TRIM_PAD_IN};
use crate::Chart;

/// Gap between grid cells, in points.
const CELL_GAP: f32 = 18.0;
const FIGURE_PAD: f32 = 8.0;

#[derive(Clone, Debug)]
pub enum Panel {
    Chart(Chart),
    Pie(PieChart),
    Sunburst(Sunburst),
    Table(Table),
}

impl Panel {
    pub fn title(&self) -> Option<&str> {
        match self {
            Panel::Chart(c) => c.title.as_deref(),
            Panel::Pie(p) => p.title.as_deref(),
            Panel::Sunburst(s) => s.title.as_deref(),
            Panel::Table(t) => t.title.as_deref(),
        }
    }
}

impl From<Chart> for Panel {
    fn from(c: Chart) -> Self { Panel::Chart(c) }
}
impl From<PieChart> for Panel {
    fn from(p: PieChart) -> Self { Panel::Pie(p) }
}
impl From<Sunburst> for Panel {
    fn from(s: Sunburst) -> Self { Panel::Sunburst(s) }
}
impl From<Table> for Panel {
    fn from(t: Table) -> Self { Panel::Table(t) }
}

#[derive(Clone, Debug)]
struct Slot {
    panel: Panel,
    row: usize,
    col: usize,
    col_span: usize,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub dpi: f32,
    pub theme: Theme,
    /// Crop the raster to its content plus `pad_inches`.
    pub trim: bool,
    pub pad_inches: f32,
    /// When false, no text is shaped or drawn (deterministic pixels).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI, theme: Theme::market(), trim: true, pad_inches: TRIM_PAD_IN, draw_labels: true }
    }
}

impl RenderOptions {
    fn shaper(&self) -> TextShaper {
        if self.draw_labels { TextShaper::new() } else { TextShaper::disabled() }
    }
}

/// A page of panels laid out on a row-major grid.
#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub suptitle: Option<String>,
    pub rows: usize,
    pub cols: usize,
    /// Relative row heights; equal when empty.
    pub row_ratios: Vec<f32>,
    slots: Vec<Slot>,
    next_cell: usize,
}

impl Default for Figure {
    fn default() -> Self { Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN) }
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in, suptitle: None, rows: 1, cols: 1, row_ratios: Vec::new(), slots: Vec::new(), next_cell: 0 }
    }

    /// Default-sized figure holding one panel.
    pub fn single(panel: impl Into<Panel>) -> Self {
        Self::default().with_panel(panel)
    }

    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        self
    }

    pub fn with_row_ratios(mut self, ratios: Vec<f32>) -> Self {
        self.row_ratios = ratios;
        self
    }

    pub fn with_suptitle(mut self, title: impl Into<String>) -> Self {
        self.suptitle = Some(title.into());
        self
    }

    /// Place a panel in the next free cell.
    pub fn with_panel(mut self, panel: impl Into<Panel>) -> Self {
        self.add_panel(panel, 1);
        self
    }

    /// Place a panel spanning `col_span` columns starting at the next free cell.
    pub fn with_wide_panel(mut self, panel: impl Into<Panel>, col_span: usize) -> Self {
        self.add_panel(panel, col_span);
        self
    }

    pub fn add_panel(&mut self, panel: impl Into<Panel>, col_span: usize) {
        let row = self.next_cell / self.cols;
        let col = self.next_cell % self.cols;
        let col_span = col_span.clamp(1, self.cols - col);
        self.slots.push(Slot { panel: panel.into(), row, col, col_span });
        self.next_cell += col_span;
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.slots.iter().map(|s| &s.panel)
    }

    /// Figure size in points.
    pub fn size_points(&self) -> (f32, f32) {
        (inches_to_points(self.width_in), inches_to_points(self.height_in))
    }

    /// Cell rectangle for each slot, in points.
    fn layout(&self, content: RectF) -> Vec<RectF> {
        let rows = self.slots.iter().map(|s| s.row + 1).max().unwrap_or(1).max(self.rows);
        let ratios: Vec<f32> = (0..rows).map(|r| self.row_ratios.get(r).copied().unwrap_or(1.0).max(0.01)).collect();
        let total: f32 = ratios.iter().sum();
        let avail_h = content.height() - CELL_GAP * (rows as f32 - 1.0);
        let avail_w = content.width() - CELL_GAP * (self.cols as f32 - 1.0);
        let col_w = avail_w / self.cols as f32;

        let mut row_tops = Vec::with_capacity(rows);
        let mut y = content.top;
        for r in &ratios {
            row_tops.push(y);
            y += avail_h * r / total + CELL_GAP;
        }
        self.slots
            .iter()
            .map(|s| {
                let left = content.left + s.col as f32 * (col_w + CELL_GAP);
                let width = col_w * s.col_span as f32 + CELL_GAP * (s.col_span as f32 - 1.0);
                RectF::from_ltwh(left, row_tops[s.row], width, avail_h * ratios[s.row] / total)
            })
            .collect()
    }

    /// Draw every panel in figure points; returns hover regions.
    pub fn draw(&self, canvas: &skia::Canvas, theme: &Theme, text: &TextShaper) -> Result<Vec<HitRegion>> {
        let (w, h) = self.size_points();
        canvas.clear(theme.background);
        let mut content = RectF::from_ltrb(0.0, 0.0, w, h).inset(FIGURE_PAD, FIGURE_PAD, FIGURE_PAD, FIGURE_PAD);
        if let Some(title) = &self.suptitle {
            let font = Font::new(theme.fonts.suptitle, theme.axis_label).bold();
            let (_, th) = text.measure(title, font);
            text.draw(canvas, title, (content.center_x(), content.top), font, Anchor::TOP);
            content = content.inset(0.0, th + 12.0, 0.0, 0.0);
        }

        let mut hits = Vec::new();
        for (slot, rect) in self.slots.iter().zip(self.layout(content)) {
            match &slot.panel {
                Panel::Chart(c) => c.draw(canvas, rect, theme, text, &mut hits),
                Panel::Pie(p) => p.draw(canvas, rect, theme, text, &mut hits),
                Panel::Sunburst(s) => s.draw(canvas, rect, theme, text, &mut hits)?,
                Panel::Table(t) => t.draw(canvas, rect, theme, text),
            }
        }
        Ok(hits)
    }

    /// Render to a raster image at `opts.dpi`, trimmed when `opts.trim`.
    fn render_image(&self, opts: &RenderOptions) -> Result<skia::Image> {
        let scale = opts.dpi / POINTS_PER_INCH;
        let (pw, ph) = self.size_points();
        let (width, height) = ((pw * scale).round() as i32, (ph * scale).round() as i32);
        tracing::debug!(width, height, dpi = opts.dpi, panels = self.slots.len(), "rendering raster figure");

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        {
            let canvas = surface.canvas();
            canvas.scale((scale, scale));
            self.draw(canvas, &opts.theme, &opts.shaper())?;
        }
        let image = surface.image_snapshot();
        if !opts.trim {
            return Ok(image);
        }

        let (pixels, stride) = read_rgba(&mut surface, width, height)?;
        let Some(bounds) = content_bounds(&pixels, width, height, stride, opts.theme.background) else {
            return Ok(image);
        };
        let pad = (opts.pad_inches * opts.dpi).round() as i32;
        let (tw, th) = (bounds.width() + 2 * pad, bounds.height() + 2 * pad);
        let mut trimmed = skia::surfaces::raster_n32_premul((tw, th))
            .ok_or(ChartError::Surface { width: tw, height: th })?;
        let canvas = trimmed.canvas();
        canvas.clear(opts.theme.background);
        canvas.draw_image(&image, ((pad - bounds.left) as f32, (pad - bounds.top) as f32), None);
        tracing::debug!(from = ?(width, height), to = ?(tw, th), "trimmed raster");
        Ok(trimmed.image_snapshot())
    }

    /// Encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let image = self.render_image(opts)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode { format: "PNG" })?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG, creating missing parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(path.as_ref(), &bytes)
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let image = self.render_image(opts)?;
        let (width, height) = (image.width(), image.height());
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        surface.canvas().draw_image(&image, (0.0, 0.0), None);
        let (pixels, stride) = read_rgba(&mut surface, width, height)?;
        Ok((pixels, width, height, stride))
    }

    /// Vector rendering in points; returns the document and the hover regions.
    pub(crate) fn render_svg(&self, opts: &RenderOptions) -> Result<(Vec<u8>, Vec<HitRegion>)> {
        let (w, h) = self.size_points();
        let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(w, h), None);
        let hits = self.draw(&canvas, &opts.theme, &opts.shaper())?;
        let data = canvas.end();
        Ok((data.as_bytes().to_vec(), hits))
    }

    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        Ok(self.render_svg(opts)?.0)
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_file(path.as_ref(), &bytes)
    }
}

fn read_rgba(surface: &mut skia::Surface, width: i32, height: i32) -> Result<(Vec<u8>, usize)> {
    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::Encode { format: "RGBA" });
    }
    Ok((pixels, stride))
}

/// Smallest rectangle holding every pixel that differs from `background`.
pub(crate) fn content_bounds(pixels: &[u8], width: i32, height: i32, stride: usize, background: skia::Color) -> Option<RectI32> {
    let bg = [background.r(), background.g(), background.b(), background.a()];
    let (mut l, mut t, mut r, mut b) = (width, height, -1, -1);
    for y in 0..height {
        let row = &pixels[y as usize * stride..y as usize * stride + width as usize * 4];
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != bg {
                let x = x as i32;
                l = l.min(x);
                r = r.max(x);
                t = t.min(y);
                b = b.max(y);
            }
        }
    }
    (r >= l && b >= t).then(|| RectI32::from_ltrb(l, t, r + 1, b + 1))
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| ChartError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_bounds_finds_non_background_pixels() {
        let (w, h) = (4, 3);
        let mut px = vec![255u8; (w * h * 4) as usize];
        // pixel (2, 1) is black
        let i = (w as usize + 2) * 4;
        px[i..i + 3].copy_from_slice(&[0, 0, 0]);
        let b = content_bounds(&px, w, h, w as usize * 4, skia::Color::WHITE).unwrap();
        assert_eq!(b, RectI32::from_ltrb(2, 1, 3, 2));
        let blank = vec![255u8; (w * h * 4) as usize];
        assert!(content_bounds(&blank, w, h, w as usize * 4, skia::Color::WHITE).is_none());
    }

    #[test]
    fn wide_panels_consume_columns() {
        let fig = Figure::new(14.0, 10.0)
            .with_grid(2, 2)
            .with_wide_panel(Table::new(["a"]), 2)
            .with_panel(Table::new(["b"]))
            .with_panel(Table::new(["c"]));
        let cells: Vec<(usize, usize, usize)> = fig.slots.iter().map(|s| (s.row, s.col, s.col_span)).collect();
        assert_eq!(cells, vec![(0, 0, 2), (1, 0, 1), (1, 1, 1)]);
    }

    #[test]
    fn row_ratios_split_height() {
        let fig = Figure::new(10.0, 10.0)
            .with_grid(2, 1)
            .with_row_ratios(vec![3.0, 1.0])
            .with_panel(Table::new(["a"]))
            .with_panel(Table::new(["b"]));
        let rects = fig.layout(RectF::from_ltwh(0.0, 0.0, 100.0, 100.0 + CELL_GAP));
        assert_eq!(rects[0].height(), 75.0);
        assert_eq!(rects[1].height(), 25.0);
    }
}
