// File: crates/chart-core/src/theme.rs
// Summary: Explicit style object (colors, palette, font sizes) passed into each render call.

use skia_safe as skia;

/// Named accent colors used by the generators for conditional coloring.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub primary: skia::Color,
    pub secondary: skia::Color,
    pub success: skia::Color,
    pub warning: skia::Color,
    pub danger: skia::Color,
    pub info: skia::Color,
    pub neutral: skia::Color,
}

impl Palette {
    pub const fn report() -> Self {
        Self {
            primary: skia::Color::from_rgb(0x2E, 0x86, 0xAB),
            secondary: skia::Color::from_rgb(0xA2, 0x3B, 0x72),
            success: skia::Color::from_rgb(0x43, 0xAA, 0x8B),
            warning: skia::Color::from_rgb(0xF1, 0x8F, 0x01),
            danger: skia::Color::from_rgb(0xC7, 0x3E, 0x1D),
            info: skia::Color::from_rgb(0x11, 0x8A, 0xB2),
            neutral: skia::Color::from_rgb(0x95, 0xA5, 0xA6),
        }
    }

    /// Cycle used when a series or wedge has no explicit color.
    pub fn cycle(&self, i: usize) -> skia::Color {
        let all = [self.primary, self.secondary, self.success, self.warning, self.danger, self.info, self.neutral];
        all[i % all.len()]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FontSizes {
    pub base: f32,
    pub tick: f32,
    pub axis_label: f32,
    pub title: f32,
    pub suptitle: f32,
    pub legend: f32,
    pub annotation: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { base: 11.0, tick: 10.0, axis_label: 12.0, title: 14.0, suptitle: 16.0, legend: 10.0, annotation: 10.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub edge: skia::Color,
    pub annotation_arrow: skia::Color,
    pub bar_alpha: f32,
    pub fill_alpha: f32,
    pub palette: Palette,
    pub fonts: FontSizes,
}

impl Theme {
    /// Gray plot area with white grid lines, white figure background.
    pub fn market() -> Self {
        Self {
            background: skia::Color::WHITE,
            plot_background: skia::Color::from_rgb(0xEA, 0xEA, 0xF2),
            grid: skia::Color::WHITE,
            axis_line: skia::Color::from_rgb(0xEA, 0xEA, 0xF2),
            axis_label: skia::Color::from_rgb(0x26, 0x26, 0x26),
            tick: skia::Color::from_rgb(0x3A, 0x3A, 0x3A),
            edge: skia::Color::BLACK,
            annotation_arrow: skia::Color::from_rgb(0x20, 0x20, 0x20),
            bar_alpha: 0.7,
            fill_alpha: 0.3,
            palette: Palette::report(),
            fonts: FontSizes::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::market() }
}

/// `#rrggbb` form used by the HTML export.
pub fn to_hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Same color with alpha scaled to `alpha` (0..=1).
pub fn with_alpha(c: skia::Color, alpha: f32) -> skia::Color {
    c.with_a((alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_of_palette_primary() {
        assert_eq!(to_hex(Palette::report().primary), "#2e86ab");
    }
}
