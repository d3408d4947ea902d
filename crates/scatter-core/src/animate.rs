// File: crates/scatter-core/src/animate.rs
// Summary: Fixed-duration keyed transitions; retargeting restarts from the current value.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::color::Rgb;
use crate::view::Placement;

pub const TRANSITION: Duration = Duration::from_millis(500);

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Rgb {
    fn lerp(self, to: Self, t: f64) -> Self {
        Rgb::lerp(self, to, t)
    }
}

impl Lerp for Placement {
    fn lerp(self, to: Self, t: f64) -> Self {
        Placement { x: self.x.lerp(to.x, t), y: self.y.lerp(to.y, t), color: self.color.lerp(to.color, t) }
    }
}

/// Cubic in-out easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 { t * t * t / 2.0 } else { ((t - 2.0) * (t - 2.0) * (t - 2.0) + 2.0) / 2.0 }
}

#[derive(Clone, Copy, Debug)]
struct Transition<V> {
    from: V,
    to: V,
    start: Instant,
}

impl<V: Lerp> Transition<V> {
    fn progress(&self, now: Instant, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    fn sample(&self, now: Instant, duration: Duration) -> V {
        self.from.lerp(self.to, ease_cubic_in_out(self.progress(now, duration)))
    }
}

/// Transitions keyed by element identity.
#[derive(Clone, Debug)]
pub struct Animator<K, V> {
    duration: Duration,
    items: HashMap<K, Transition<V>>,
}

impl<K: Hash + Eq, V: Lerp> Default for Animator<K, V> {
    fn default() -> Self {
        Self::new(TRANSITION)
    }
}

impl<K: Hash + Eq, V: Lerp> Animator<K, V> {
    pub fn new(duration: Duration) -> Self {
        Self { duration, items: HashMap::new() }
    }

    /// Animate `key` from `from` to `to`, starting now.
    pub fn start(&mut self, key: K, from: V, to: V, now: Instant) {
        self.items.insert(key, Transition { from, to, start: now });
    }

    /// Move `key` towards `to`. An in-flight transition is interrupted and the new one
    /// starts from its current sampled value; an unknown key starts at `to`.
    pub fn retarget(&mut self, key: K, to: V, now: Instant) {
        let from = self.sample(&key, now).unwrap_or(to);
        self.start(key, from, to, now);
    }

    pub fn remove(&mut self, key: &K) {
        self.items.remove(key);
    }

    pub fn sample(&self, key: &K, now: Instant) -> Option<V> {
        self.items.get(key).map(|t| t.sample(now, self.duration))
    }

    pub fn target(&self, key: &K) -> Option<V> {
        self.items.get(key).map(|t| t.to)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.items.values().any(|t| t.progress(now, self.duration) < 1.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn transition_reaches_target_after_duration() {
        let t0 = Instant::now();
        let mut a: Animator<u32, f64> = Animator::default();
        a.start(1, 0.0, 10.0, t0);
        assert_eq!(a.sample(&1, t0), Some(0.0));
        assert_eq!(a.sample(&1, t0 + TRANSITION / 2), Some(5.0));
        assert_eq!(a.sample(&1, t0 + TRANSITION), Some(10.0));
        assert!(a.is_animating(t0 + TRANSITION / 2));
        assert!(!a.is_animating(t0 + TRANSITION * 2));
    }

    #[test]
    fn retarget_interrupts_from_current_value() {
        let t0 = Instant::now();
        let mut a: Animator<u32, f64> = Animator::default();
        a.start(7, 0.0, 10.0, t0);
        let mid = t0 + TRANSITION / 2;
        a.retarget(7, 20.0, mid);
        assert_eq!(a.sample(&7, mid), Some(5.0));
        assert_eq!(a.target(&7), Some(20.0));
        assert_eq!(a.sample(&7, mid + TRANSITION), Some(20.0));
    }

    #[test]
    fn unknown_key_snaps_to_target() {
        let t0 = Instant::now();
        let mut a: Animator<i32, f64> = Animator::default();
        a.retarget(2021, 42.0, t0);
        assert_eq!(a.sample(&2021, t0), Some(42.0));
    }
}
