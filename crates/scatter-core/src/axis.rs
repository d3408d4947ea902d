// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with label and ticks in plot coordinates.

use crate::grid::nice_ticks;
use crate::view::ViewModel;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, plot coordinates.
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Year ticks under each zone center.
    pub fn years(label: impl Into<String>, view: &ViewModel) -> Self {
        let ticks = view
            .zones
            .iter()
            .map(|z| Tick { pos: z.center, label: z.year.to_string() })
            .collect();
        Self { label: label.into(), ticks }
    }

    /// Salary ticks (about ten) from 0 to the view's maximum.
    pub fn salary(label: impl Into<String>, view: &ViewModel) -> Self {
        let top = view.y_max;
        let ticks = nice_ticks(0.0, top, 10)
            .into_iter()
            .map(|v| Tick { pos: view.plot_height - v / top * view.plot_height, label: format_value(v) })
            .collect();
        Self { label: label.into(), ticks }
    }
}

fn format_value(v: f64) -> String {
    if v == v.trunc() { format!("{}", v as i64) } else { format!("{v:.1}") }
}
