// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, optional fixed limits and tick formatting.

use crate::format::ValueFormat;

#[derive(Clone, Debug, Default)]
pub struct Axis {
    pub label: String,
    /// Fixed lower limit; `None` means autoscaled.
    pub min: Option<f64>,
    /// Fixed upper limit; `None` means autoscaled.
    pub max: Option<f64>,
    pub format: ValueFormat,
    pub grid: bool,
    /// Category tick label rotation in degrees; negative values tilt labels counter-clockwise.
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), grid: true, ..Default::default() }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    /// Resolved limits; only meaningful after autoscale or when both are fixed.
    pub fn range(&self) -> (f64, f64) {
        (self.min.unwrap_or(0.0), self.max.unwrap_or(1.0))
    }
}
