// File: crates/scatter-core/src/layout.rs
// Summary: Year-zone jitter layout: groups points by year and salary, spreads each
// salary group across its zone, maps salary onto an inverted vertical scale.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::nice_ceil;
use crate::record::Record;
use crate::scale::{ValueScale, ZoneScale};

/// How points of one salary group are spread horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "spacing", rename_all = "lowercase")]
pub enum SpreadMode {
    /// Zone width divided evenly by group size.
    Even,
    /// Index-centered with fixed spacing, compressed to fit the zone.
    Fixed(f64),
}

/// Order inside one salary group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Education rank ascending, then id.
    EducationRank,
    /// Keep the record set's order.
    Insertion,
}

/// Unit of `Record::salary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueUnit {
    /// Already in thousands; plotted as-is.
    Thousands,
    /// Raw rubles; plotted rounded to whole thousands.
    Rubles,
}

impl ValueUnit {
    /// Plotted value for a salary.
    pub fn display(&self, salary: f64) -> f64 {
        match self {
            ValueUnit::Thousands => salary,
            ValueUnit::Rubles => (salary / 1000.0).round(),
        }
    }

    /// Thousands, unrounded (averages and tooltips).
    pub fn in_thousands(&self, salary: f64) -> f64 {
        match self {
            ValueUnit::Thousands => salary,
            ValueUnit::Rubles => salary / 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub years: Vec<i32>,
    /// Plot coordinate space (before insets).
    pub plot_width: f64,
    pub plot_height: f64,
    /// Width of each year-zone; at most one year slot.
    pub zone_width: f64,
    pub spread: SpreadMode,
    pub group_order: GroupOrder,
    /// Fixed axis maximum; `None` derives it from the data.
    pub y_max: Option<f64>,
    pub unit: ValueUnit,
    pub point_radius: f64,
    pub average_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            years: vec![2021, 2022, 2023],
            plot_width: 600.0,
            plot_height: 400.0,
            zone_width: 160.0,
            spread: SpreadMode::Even,
            group_order: GroupOrder::EducationRank,
            y_max: None,
            unit: ValueUnit::Thousands,
            point_radius: 3.0,
            average_radius: 4.0,
        }
    }
}

impl LayoutConfig {
    pub fn zone_scale(&self) -> ZoneScale {
        ZoneScale::new(self.years.clone(), self.plot_width)
    }

    /// Zone width clamped to one year slot.
    pub fn effective_zone_width(&self) -> f64 {
        self.zone_width.clamp(0.0, self.zone_scale().slot_width())
    }

    /// Axis maximum: configured, or derived from every record (not just the
    /// filtered ones) so positions stay put when filters change.
    pub fn resolve_y_max(&self, records: &[Record], ceiling: Option<f64>) -> f64 {
        if let Some(m) = self.y_max {
            return m;
        }
        let data_max = records
            .iter()
            .map(|r| self.unit.display(r.salary))
            .fold(0.0_f64, f64::max);
        let top = match ceiling {
            Some(c) => data_max.min(self.unit.display(c)),
            None => data_max,
        };
        if top <= 0.0 { 100.0 } else { nice_ceil(top * 1.1, 10) }
    }

    pub fn value_scale(&self, y_max: f64) -> ValueScale {
        ValueScale::new_linear(0.0, self.plot_height, 0.0, y_max)
    }
}

/// One year's horizontal band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearZone {
    pub year: i32,
    pub center: f64,
    pub left: f64,
    pub right: f64,
}

pub fn year_zones(cfg: &LayoutConfig) -> Vec<YearZone> {
    let scale = cfg.zone_scale();
    let half = cfg.effective_zone_width() / 2.0;
    cfg.years
        .iter()
        .filter_map(|&year| {
            scale.center(year).map(|center| YearZone { year, center, left: center - half, right: center + half })
        })
        .collect()
}

/// Horizontal positions for `count` points sharing one salary inside a zone.
pub fn spread(center: f64, zone_width: f64, count: usize, mode: SpreadMode) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    match mode {
        SpreadMode::Even => {
            let step = zone_width / n;
            let left = center - zone_width / 2.0;
            (0..count).map(|i| left + (i as f64 + 0.5) * step).collect()
        }
        SpreadMode::Fixed(spacing) => {
            let spacing = spacing.max(0.0).min(zone_width / n);
            let mid = (n - 1.0) / 2.0;
            (0..count).map(|i| center + (i as f64 - mid) * spacing).collect()
        }
    }
}

/// A laid-out record: position in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot<'a> {
    pub record: &'a Record,
    pub x: f64,
    pub y: f64,
}

/// Place filtered records. Records whose year has no zone are skipped.
pub fn layout_points<'a>(filtered: &[&'a Record], cfg: &LayoutConfig, scale: &ValueScale) -> Vec<Slot<'a>> {
    let zones = year_zones(cfg);
    let zone_width = cfg.effective_zone_width();

    let mut by_year: BTreeMap<i32, Vec<&'a Record>> = BTreeMap::new();
    for r in filtered {
        by_year.entry(r.year).or_default().push(*r);
    }

    let mut out = Vec::with_capacity(filtered.len());
    for zone in &zones {
        let Some(mut rows) = by_year.remove(&zone.year) else { continue };
        // Stable sort: Insertion keeps input order within equal salaries.
        rows.sort_by(|a, b| {
            let primary = cfg.unit.display(a.salary).total_cmp(&cfg.unit.display(b.salary));
            match cfg.group_order {
                GroupOrder::Insertion => primary,
                GroupOrder::EducationRank => primary
                    .then(a.edu_level.cmp(&b.edu_level))
                    .then(a.id.cmp(&b.id)),
            }
        });

        let mut start = 0;
        while start < rows.len() {
            let value = cfg.unit.display(rows[start].salary);
            let mut end = start + 1;
            while end < rows.len() && cfg.unit.display(rows[end].salary).total_cmp(&value) == Ordering::Equal {
                end += 1;
            }
            let xs = spread(zone.center, zone_width, end - start, cfg.spread);
            let y = scale.to_px(value);
            for (&record, x) in rows[start..end].iter().zip(xs) {
                out.push(Slot { record, x, y });
            }
            start = end;
        }
    }
    for (year, rows) in by_year {
        tracing::debug!(year, skipped = rows.len(), "records outside configured years");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_spread_is_symmetric_and_bounded() {
        for count in 1..12 {
            let xs = spread(300.0, 160.0, count, SpreadMode::Even);
            assert_eq!(xs.len(), count);
            for (a, b) in xs.iter().zip(xs.iter().rev()) {
                assert!(((a - 300.0) + (b - 300.0)).abs() < 1e-9);
            }
            assert!(xs.iter().all(|&x| (220.0..=380.0).contains(&x)));
        }
    }

    #[test]
    fn fixed_spread_compresses_to_zone() {
        let xs = spread(100.0, 40.0, 10, SpreadMode::Fixed(8.0));
        assert!(xs.iter().all(|&x| (80.0..=120.0).contains(&x)));
        let loose = spread(100.0, 40.0, 2, SpreadMode::Fixed(8.0));
        assert_eq!(loose, vec![96.0, 104.0]);
    }

    #[test]
    fn rubles_round_to_thousands() {
        assert_eq!(ValueUnit::Rubles.display(49_600.0), 50.0);
        assert_eq!(ValueUnit::Thousands.display(49.6), 49.6);
    }

    #[test]
    fn y_max_defaults_to_headroom_over_data() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.resolve_y_max(&[], None), 100.0);
        let fixed = LayoutConfig { y_max: Some(250.0), ..LayoutConfig::default() };
        assert_eq!(fixed.resolve_y_max(&[], None), 250.0);
    }
}
