// File: crates/scatter-core/src/reconcile.rs
// Summary: Keyed diff between two point lists (entered / updated / exited by record id).

use std::collections::HashMap;

use crate::view::{PlacedPoint, Placement};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moved {
    pub id: u32,
    pub from: Placement,
    pub to: Placement,
}

impl Moved {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderDiff {
    /// In next but not in prev, in next's order.
    pub entered: Vec<PlacedPoint>,
    /// In both; placement may or may not have changed.
    pub updated: Vec<Moved>,
    /// In prev but not in next, in prev's order.
    pub exited: Vec<PlacedPoint>,
}

impl RenderDiff {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty() && self.updated.iter().all(Moved::is_noop)
    }
}

pub fn reconcile(prev: &[PlacedPoint], next: &[PlacedPoint]) -> RenderDiff {
    let before: HashMap<u32, &PlacedPoint> = prev.iter().map(|p| (p.id(), p)).collect();
    let after: HashMap<u32, &PlacedPoint> = next.iter().map(|p| (p.id(), p)).collect();

    let mut diff = RenderDiff::default();
    for p in next {
        match before.get(&p.id()) {
            Some(old) => diff.updated.push(Moved { id: p.id(), from: old.placement(), to: p.placement() }),
            None => diff.entered.push(p.clone()),
        }
    }
    diff.exited = prev.iter().filter(|p| !after.contains_key(&p.id())).cloned().collect();
    diff
}
