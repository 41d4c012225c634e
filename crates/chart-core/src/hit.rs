// File: crates/chart-core/src/hit.rs
// Summary: Hover hit regions collected while drawing, in figure point coordinates.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum HitShape {
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    /// Ring segment; angles in degrees, clockwise from 3 o'clock.
    Wedge { cx: f32, cy: f32, r0: f32, r1: f32, start: f32, sweep: f32 },
}

impl HitShape {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        match *self {
            HitShape::Rect { x, y, w, h } => px >= x && px <= x + w && py >= y && py <= y + h,
            HitShape::Circle { cx, cy, r } => (px - cx).powi(2) + (py - cy).powi(2) <= r * r,
            HitShape::Wedge { cx, cy, r0, r1, start, sweep } => {
                let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
                if d < r0 || d > r1 { return false; }
                let a = (py - cy).atan2(px - cx).to_degrees();
                let (lo, span) = if sweep < 0.0 { (start + sweep, -sweep) } else { (start, sweep) };
                (a - lo).rem_euclid(360.0) <= span
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HitRegion {
    #[serde(flatten)]
    pub shape: HitShape,
    pub text: String,
}

impl HitRegion {
    pub fn new(shape: HitShape, text: impl Into<String>) -> Self {
        Self { shape, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_contains_handles_counter_clockwise_sweep() {
        // Top-left quarter: from 12 o'clock counter-clockwise to 9 o'clock.
        let w = HitShape::Wedge { cx: 0.0, cy: 0.0, r0: 0.0, r1: 10.0, start: -90.0, sweep: -90.0 };
        assert!(w.contains(-5.0, -5.0));
        assert!(!w.contains(5.0, -5.0));
        assert!(!w.contains(-20.0, -1.0));
    }

    #[test]
    fn serializes_with_shape_tag() {
        let r = HitRegion::new(HitShape::Circle { cx: 1.0, cy: 2.0, r: 3.0 }, "Rust");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"shape\":\"circle\""));
        assert!(json.contains("\"text\":\"Rust\""));
    }
}
