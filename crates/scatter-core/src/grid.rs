// File: crates/scatter-core/src/grid.rs
// Summary: Nice tick steps and axis bounds.

/// A 1/2/5 x 10^k step giving roughly `count` intervals over `span`.
pub fn nice_step(span: f64, count: usize) -> f64 {
    if !(span > 0.0) || count == 0 { return 1.0; }
    let raw = span / count as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let err = raw / mag;
    let f = if err >= 50f64.sqrt() { 10.0 } else if err >= 10f64.sqrt() { 5.0 } else if err >= 2f64.sqrt() { 2.0 } else { 1.0 };
    f * mag
}

/// Round tick values covering `[min, max]`, about `count` of them.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !(max > min) { return vec![min]; }
    let step = nice_step(max - min, count);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Smallest multiple of a nice step that is >= `v` (axis upper bound).
pub fn nice_ceil(v: f64, count: usize) -> f64 {
    if !(v > 0.0) { return 0.0; }
    let step = nice_step(v, count);
    (v / step).ceil() * step
}
