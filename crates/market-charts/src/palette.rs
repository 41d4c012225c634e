// File: crates/market-charts/src/palette.rs
// Summary: Report colors and the threshold coloring rules the charts share.

use chart_core::Color;

pub const PRIMARY: Color = Color::from_rgb(0x2E, 0x86, 0xAB);
pub const SECONDARY: Color = Color::from_rgb(0xA2, 0x3B, 0x72);
pub const SUCCESS: Color = Color::from_rgb(0x43, 0xAA, 0x8B);
pub const WARNING: Color = Color::from_rgb(0xF1, 0x8F, 0x01);
pub const DANGER: Color = Color::from_rgb(0xC7, 0x3E, 0x1D);
pub const INFO: Color = Color::from_rgb(0x11, 0x8A, 0xB2);
pub const NEUTRAL: Color = Color::from_rgb(0x95, 0xA5, 0xA6);

// Named web colors used for callout boxes and highlights.
pub const RED: Color = Color::from_rgb(0xFF, 0x00, 0x00);
pub const GREEN: Color = Color::from_rgb(0x00, 0x80, 0x00);
pub const ORANGE: Color = Color::from_rgb(0xFF, 0xA5, 0x00);
pub const YELLOW: Color = Color::from_rgb(0xFF, 0xFF, 0x00);
pub const GOLD: Color = Color::from_rgb(0xFF, 0xD7, 0x00);
pub const LIGHT_GREEN: Color = Color::from_rgb(0x90, 0xEE, 0x90);
pub const LIGHT_YELLOW: Color = Color::from_rgb(0xFF, 0xFF, 0xE0);
pub const LIGHT_BLUE: Color = Color::from_rgb(0xAD, 0xD8, 0xE6);
pub const WHEAT: Color = Color::from_rgb(0xF5, 0xDE, 0xB3);
pub const LIGHT_CORAL: Color = Color::from_rgb(0xF0, 0x80, 0x80);
pub const PURPLE: Color = Color::from_rgb(0x80, 0x00, 0x80);
pub const PINK: Color = Color::from_rgb(0xFF, 0xC0, 0xCB);
pub const LAVENDER: Color = Color::from_rgb(0xE6, 0xE6, 0xFA);
pub const GRAY: Color = Color::from_rgb(0x80, 0x80, 0x80);
pub const BLACK: Color = Color::from_rgb(0x00, 0x00, 0x00);

// Table row highlights.
pub const ROW_ALERT: Color = Color::from_rgb(0xFF, 0xE5, 0xE5);
pub const ROW_WARN: Color = Color::from_rgb(0xFF, 0xF0, 0xE5);
pub const ROW_STRIPE: Color = Color::from_rgb(0xF8, 0xF8, 0xF8);

/// Color each value by the first rule whose threshold it exceeds; `otherwise` when none match.
pub fn by_threshold(values: &[f64], rules: &[(f64, Color)], otherwise: Color) -> Vec<Color> {
    values
        .iter()
        .map(|&v| rules.iter().find(|(t, _)| v > *t).map_or(otherwise, |(_, c)| *c))
        .collect()
}

/// Green for growth, red for decline.
pub fn by_sign(values: &[f64]) -> Vec<Color> {
    values.iter().map(|&v| if v >= 0.0 { SUCCESS } else { DANGER }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rules_apply_in_order() {
        let c = by_threshold(&[30.0, 20.0, 10.0], &[(25.0, SUCCESS), (15.0, WARNING)], INFO);
        assert_eq!(c, vec![SUCCESS, WARNING, INFO]);
    }

    #[test]
    fn sign_coloring() {
        assert_eq!(by_sign(&[1.5, -0.5, 0.0]), vec![SUCCESS, DANGER, SUCCESS]);
    }
}
