// File: crates/chart-core/src/scale.rs
// Summary: Linear value scale mapping a data range onto a point span.

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`. For a vertical axis pass
/// `start_px = bottom`, `end_px = top` so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.end_px - self.start_px;
        if span.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.start_px) / span) as f64 * (self.vmax - self.vmin)
    }

    /// Length in points of a data span `dv`.
    #[inline]
    pub fn span_px(&self, dv: f64) -> f32 {
        (dv / (self.vmax - self.vmin)) as f32 * (self.end_px - self.start_px).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_puts_max_on_top() {
        let s = ValueScale::new(400.0, 100.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert!((s.from_px(250.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = ValueScale::new(0.0, 100.0, 2.0, 2.0);
        assert_eq!(s.vmax, 3.0);
        assert_eq!(s.span_px(0.5), 50.0);
    }
}
