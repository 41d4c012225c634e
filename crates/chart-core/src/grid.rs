// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions inside `[min, max]` at a nice step, aiming for about `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) { return vec![min]; }
    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0;
    loop {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        // snap values like 0.30000000000000004
        out.push((v / step).round() * step);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_rounds_up() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(17.0), 20.0);
        assert_eq!(nice_step(230.0), 250.0);
        assert_eq!(nice_step(41_000.0), 50_000.0);
    }

    #[test]
    fn ticks_cover_range() {
        let t = nice_ticks(0.0, 100.0, 5);
        assert_eq!(t, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        let t = nice_ticks(-6.5, 12.3, 6);
        assert!(t.first().copied().unwrap() >= -6.5);
        assert!(t.last().copied().unwrap() <= 12.3);
        assert!(t.contains(&0.0));
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }
}
