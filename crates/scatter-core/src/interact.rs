// File: crates/scatter-core/src/interact.rs
// Summary: Hover/move/leave interaction and the floating tooltip it drives.

use crate::view::{PlacedAverage, PlacedPoint, ViewModel};

/// Tooltip offset from the pointer, in plot units.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);
/// Extra hit slop around a circle's radius.
const HIT_SLOP: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    Point(u32),
    Average(i32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    /// Top-left corner in plot coordinates.
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// Nearest element under `(px, py)`; average points win over data points.
pub fn hit_test(view: &ViewModel, px: f64, py: f64) -> Option<HoverTarget> {
    let dist2 = |x: f64, y: f64| (x - px).powi(2) + (y - py).powi(2);

    let avg_r = (view.average_radius + HIT_SLOP).powi(2);
    let avg = view
        .averages
        .iter()
        .map(|a| (dist2(a.x, a.y), a.stat.year))
        .filter(|(d, _)| *d <= avg_r)
        .min_by(|a, b| a.0.total_cmp(&b.0));
    if let Some((_, year)) = avg {
        return Some(HoverTarget::Average(year));
    }

    let pt_r = (view.point_radius + HIT_SLOP).powi(2);
    view.points
        .iter()
        .map(|p| (dist2(p.x, p.y), p.id()))
        .filter(|(d, _)| *d <= pt_r)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| HoverTarget::Point(id))
}

pub fn point_lines(p: &PlacedPoint, view: &ViewModel) -> Vec<String> {
    let r = &p.record;
    vec![
        format!("Год: {}", r.year),
        format!("Зарплата: {:.1} тыс. руб.", view.unit.in_thousands(r.salary)),
        format!("Пол: {}", r.gender.display_name()),
        format!("Образование: {}", r.education),
        format!("Образование родителей: {}", r.parental.display_name()),
    ]
}

pub fn average_lines(a: &PlacedAverage, view: &ViewModel) -> Vec<String> {
    vec![
        format!("Год: {}", a.stat.year),
        format!("Средняя зарплата: {:.1} тыс. руб.", view.unit.in_thousands(a.stat.avg)),
        format!("Записей: {}", a.stat.count),
    ]
}

/// Interaction state over the current view model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    pub hovered: Option<HoverTarget>,
    pub tooltip: Tooltip,
}

impl Interaction {
    /// Show the tooltip for `target`. Unknown targets hide it.
    pub fn hover(&mut self, view: &ViewModel, target: HoverTarget, pointer: (f64, f64)) {
        let lines = match target {
            HoverTarget::Point(id) => view.point(id).map(|p| point_lines(p, view)),
            HoverTarget::Average(year) => view.average(year).map(|a| average_lines(a, view)),
        };
        match lines {
            Some(lines) => {
                self.hovered = Some(target);
                self.tooltip.lines = lines;
                self.tooltip.visible = true;
                self.pointer_move(pointer);
            }
            None => self.leave(),
        }
    }

    /// Track the pointer while hovering.
    pub fn pointer_move(&mut self, pointer: (f64, f64)) {
        if self.tooltip.visible {
            self.tooltip.x = pointer.0 + TOOLTIP_OFFSET.0;
            self.tooltip.y = pointer.1 + TOOLTIP_OFFSET.1;
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
        self.tooltip.visible = false;
    }

    /// Dispatch a raw pointer position: hover on a new target, move on the same
    /// one, leave when nothing is under the pointer.
    pub fn pointer_at(&mut self, view: &ViewModel, px: f64, py: f64) {
        match hit_test(view, px, py) {
            Some(t) if self.hovered == Some(t) => self.pointer_move((px, py)),
            Some(t) => self.hover(view, t, (px, py)),
            None => {
                if self.hovered.is_some() {
                    self.leave();
                }
            }
        }
    }

    /// Drop the hover when its target no longer exists in `view`; refresh the text otherwise.
    pub fn revalidate(&mut self, view: &ViewModel) {
        let Some(target) = self.hovered else { return };
        let pointer = (self.tooltip.x - TOOLTIP_OFFSET.0, self.tooltip.y - TOOLTIP_OFFSET.1);
        self.hover(view, target, pointer);
    }
}
