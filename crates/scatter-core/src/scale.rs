// File: crates/scatter-core/src/scale.rs
// Summary: Linear value scale (salary -> vertical pixels) and year-zone horizontal scale.

/// Value Y coordinate (salary in display units).
pub type Value = f64;

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]` (inverted:
/// larger values land higher on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        let span = self.vmax - self.vmin;
        self.bottom_px - (y - self.vmin) / span * (self.bottom_px - self.top_px)
    }
}

/// Horizontal scale: each year owns one equal-width slot of the plot; the
/// slot center is the year-zone center.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneScale {
    pub years: Vec<i32>,
    pub plot_width: f64,
}

impl ZoneScale {
    pub fn new(years: Vec<i32>, plot_width: f64) -> Self {
        Self { years, plot_width }
    }

    /// Width of one year slot.
    pub fn slot_width(&self) -> f64 {
        if self.years.is_empty() { self.plot_width } else { self.plot_width / self.years.len() as f64 }
    }

    /// Center of the year's slot, `None` when the year has no zone.
    pub fn center(&self, year: i32) -> Option<f64> {
        let i = self.years.iter().position(|&y| y == year)?;
        Some(self.slot_width() * (i as f64 + 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_is_inverted() {
        let s = ValueScale::new_linear(0.0, 400.0, 0.0, 100.0);
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(100.0), 0.0);
        assert!(s.to_px(80.0) < s.to_px(20.0));
    }

    #[test]
    fn three_year_zones_center_at_100_300_500() {
        let z = ZoneScale::new(vec![2021, 2022, 2023], 600.0);
        assert_eq!(z.center(2021), Some(100.0));
        assert_eq!(z.center(2022), Some(300.0));
        assert_eq!(z.center(2023), Some(500.0));
        assert_eq!(z.center(2020), None);
        assert_eq!(z.slot_width(), 200.0);
    }
}
