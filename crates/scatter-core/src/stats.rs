// File: crates/scatter-core/src/stats.rs
// Summary: Per-year average salary over the filtered record set.

use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AveragePoint {
    pub year: i32,
    /// Mean salary; 0.0 when `count == 0`.
    pub avg: f64,
    pub count: usize,
}

/// One entry per year in `years` order.
pub fn yearly_averages(filtered: &[&Record], years: &[i32]) -> Vec<AveragePoint> {
    years
        .iter()
        .map(|&year| {
            let (sum, count) = filtered
                .iter()
                .filter(|r| r.year == year)
                .fold((0.0, 0usize), |(s, n), r| (s + r.salary, n + 1));
            let avg = if count == 0 { 0.0 } else { sum / count as f64 };
            AveragePoint { year, avg, count }
        })
        .collect()
}
