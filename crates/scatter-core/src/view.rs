// File: crates/scatter-core/src/view.rs
// View model: the pure result of (records, filters, layout) -> placed points, averages, trend.

use crate::color::{point_color, trend_color, Rgb};
use crate::filter::Filters;
use crate::layout::{layout_points, year_zones, LayoutConfig, ValueUnit, YearZone};
use crate::record::{EducationScale, Record};
use crate::stats::{yearly_averages, AveragePoint};
use crate::trend::{monotone_x, TrendPath};

/// Animatable part of a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPoint {
    pub record: Record,
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

impl PlacedPoint {
    pub fn id(&self) -> u32 {
        self.record.id
    }

    pub fn placement(&self) -> Placement {
        Placement { x: self.x, y: self.y, color: self.color }
    }

    pub fn set_placement(&mut self, p: Placement) {
        self.x = p.x;
        self.y = p.y;
        self.color = p.color;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedAverage {
    pub stat: AveragePoint,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub points: Vec<PlacedPoint>,
    pub averages: Vec<PlacedAverage>,
    pub trend: TrendPath,
    pub trend_color: Rgb,
    pub zones: Vec<YearZone>,
    pub plot_width: f64,
    pub plot_height: f64,
    pub y_max: f64,
    pub unit: ValueUnit,
    pub point_radius: f64,
    pub average_radius: f64,
}

impl ViewModel {
    /// Nothing drawn; axes and zones still known.
    pub fn empty(layout: &LayoutConfig, y_max: f64, trend_color: Rgb) -> Self {
        Self {
            points: Vec::new(),
            averages: Vec::new(),
            trend: TrendPath::empty(),
            trend_color,
            zones: year_zones(layout),
            plot_width: layout.plot_width,
            plot_height: layout.plot_height,
            y_max,
            unit: layout.unit,
            point_radius: layout.point_radius,
            average_radius: layout.average_radius,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, id: u32) -> Option<&PlacedPoint> {
        self.points.iter().find(|p| p.record.id == id)
    }

    pub fn average(&self, year: i32) -> Option<&PlacedAverage> {
        self.averages.iter().find(|a| a.stat.year == year)
    }

    /// Recompute the trend curve from the current average positions
    /// (used after averages were moved by a transition).
    pub fn rebuild_trend(&mut self) {
        let pts: Vec<(f64, f64)> = self.averages.iter().map(|a| (a.x, a.y)).collect();
        self.trend = monotone_x(&pts);
    }
}

/// Pure render pass. Derived fields are recomputed from scratch every call.
pub fn build_view(records: &[Record], filters: &Filters, layout: &LayoutConfig, scale: &EducationScale) -> ViewModel {
    let y_max = layout.resolve_y_max(records, filters.salary_ceiling);
    let mut view = ViewModel::empty(layout, y_max, trend_color(&filters.genders));

    let filtered = filters.apply(records);
    if filtered.is_empty() {
        return view;
    }

    let vscale = layout.value_scale(y_max);
    let levels = scale.levels();
    view.points = layout_points(&filtered, layout, &vscale)
        .into_iter()
        .map(|slot| PlacedPoint {
            record: slot.record.clone(),
            x: slot.x,
            y: slot.y,
            color: point_color(slot.record.gender, slot.record.edu_level, levels),
        })
        .collect();
    // Every surviving record fell outside the year zones.
    if view.points.is_empty() {
        return view;
    }

    view.averages = yearly_averages(&filtered, &layout.years)
        .into_iter()
        .filter_map(|stat| {
            let zone = view.zones.iter().find(|z| z.year == stat.year)?;
            Some(PlacedAverage { stat, x: zone.center, y: vscale.to_px(layout.unit.in_thousands(stat.avg)) })
        })
        .collect();
    view.rebuild_trend();
    view
}
