// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, DPI, paddings).

/// Raster resolution used for every PNG artifact.
pub const DEFAULT_DPI: f32 = 300.0;
/// Layout unit: figures are laid out in typographic points.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 14.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Whitespace kept around trimmed PNG content.
pub const TRIM_PAD_IN: f32 = 0.1;

/// Convert inches to layout points.
#[inline]
pub fn inches_to_points(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}
