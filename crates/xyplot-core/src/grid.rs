// File: crates/xyplot-core/src/grid.rs
// Summary: Tick layout helpers: "nice" tick steps and tick label formatting.

/// Step multipliers tried per decade, smallest first.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Pick the smallest nice step (1, 2, 2.5, 5 x 10^n) that fits `[min, max]`
/// into at most `max_ticks` ticks.
pub fn nice_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let intervals = max_ticks.max(2) as f64 - 1.0;
    let raw = max / intervals - min / intervals;
    let magnitude = 10f64.powf(raw.log10().floor());
    for m in NICE_STEPS {
        let step = m * magnitude;
        let first = (min / step).ceil();
        let last = (max / step).floor();
        if last - first + 1.0 <= max_ticks as f64 {
            return step;
        }
    }
    10.0 * magnitude
}

/// Tick values on a nice step, all inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return if min.is_finite() { vec![min] } else { Vec::new() };
    }
    let step = nice_step(min, max, max_ticks);
    let tol = step * 1e-9;
    let first = (min / step - 1e-9).ceil() as i64;
    let mut out = Vec::new();
    let mut k = first;
    loop {
        let v = k as f64 * step;
        if v > max + tol { break; }
        // snap values like 1e-17 to an exact zero
        out.push(if v.abs() < tol { 0.0 } else { v });
        k += 1;
    }
    out
}

/// Fewest decimals that print every value exactly (to 1e-9 relative precision).
fn decimals_for(values: &[f64]) -> usize {
    let scale = values.iter().fold(0.0f64, |m, v| m.max(v.abs())).max(1e-300);
    for d in 0..=12 {
        let p = 10f64.powi(d as i32);
        if values.iter().all(|v| ((v * p).round() / p - v).abs() <= scale * 1e-9) {
            return d;
        }
    }
    12
}

/// Format tick values with a shared number of decimals, using a true minus sign.
pub fn format_ticks(values: &[f64]) -> Vec<String> {
    let d = decimals_for(values);
    values
        .iter()
        .map(|&v| {
            let s = format!("{:.*}", d, v);
            match s.strip_prefix('-') {
                // "-0.00" after rounding is zero
                Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
                Some(rest) => format!("\u{2212}{rest}"),
                None => s,
            }
        })
        .collect()
}
