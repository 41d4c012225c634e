// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; multi-line, bold and anchored drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Where the anchor point sits relative to the text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub h: HAlign,
    pub v: VAlign,
}

impl Anchor {
    pub const fn new(h: HAlign, v: VAlign) -> Self { Self { h, v } }
    pub const CENTER: Anchor = Anchor::new(HAlign::Center, VAlign::Middle);
    pub const TOP: Anchor = Anchor::new(HAlign::Center, VAlign::Top);
    pub const BOTTOM: Anchor = Anchor::new(HAlign::Center, VAlign::Bottom);
    pub const LEFT: Anchor = Anchor::new(HAlign::Left, VAlign::Middle);
    pub const RIGHT: Anchor = Anchor::new(HAlign::Right, VAlign::Middle);

    fn offsets(self, w: f32, h: f32) -> (f32, f32) {
        let dx = match self.h { HAlign::Left => 0.0, HAlign::Center => -w * 0.5, HAlign::Right => -w };
        let dy = match self.v { VAlign::Top => 0.0, VAlign::Middle => -h * 0.5, VAlign::Bottom => -h };
        (dx, dy)
    }
}

/// Font properties of one run of text.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl Font {
    pub const fn new(size: f32, color: skia::Color) -> Self { Self { size, color, bold: false } }
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
    enabled: bool,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, enabled: true }
    }

    /// A shaper that measures zero and draws nothing (deterministic snapshots).
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::new() }
    }

    fn make_style(font: Font) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(font.color);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    fn layout(&self, text: &str, font: Font, align: HAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        if align != HAlign::Left {
            // Re-layout to the content width so centered lines align with each other.
            let w = paragraph.longest_line().ceil() + 1.0;
            paragraph.layout(w);
        }
        paragraph
    }

    /// (width, height) of `text`, honoring embedded newlines.
    pub fn measure(&self, text: &str, font: Font) -> (f32, f32) {
        if !self.enabled || text.is_empty() { return (0.0, 0.0); }
        let p = self.layout(text, font, HAlign::Left);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that `anchor` of its box lands on `at`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, at: (f32, f32), font: Font, anchor: Anchor) {
        if !self.enabled || text.is_empty() { return; }
        let mut p = self.layout(text, font, anchor.h);
        let w = if anchor.h == HAlign::Left { p.longest_line() } else { p.max_width() };
        let (dx, dy) = anchor.offsets(w, p.height());
        p.paint(canvas, (at.0 + dx, at.1 + dy));
    }

    /// Draw rotated by `degrees` (clockwise) around `at`.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, at: (f32, f32), font: Font, anchor: Anchor, degrees: f32) {
        if degrees == 0.0 {
            self.draw(canvas, text, at, font, anchor);
            return;
        }
        canvas.save();
        canvas.translate(at);
        canvas.rotate(degrees, None);
        self.draw(canvas, text, (0.0, 0.0), font, anchor);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_shaper_measures_nothing() {
        let t = TextShaper::disabled();
        assert_eq!(t.measure("Jan\nFeb", Font::new(10.0, skia::Color::BLACK)), (0.0, 0.0));
    }

    #[test]
    fn anchor_offsets() {
        assert_eq!(Anchor::CENTER.offsets(10.0, 4.0), (-5.0, -2.0));
        assert_eq!(Anchor::new(HAlign::Right, VAlign::Bottom).offsets(10.0, 4.0), (-10.0, -4.0));
    }
}
