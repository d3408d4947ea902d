// File: crates/scatter-core/src/geometry.rs
// Summary: Pixel math between plot coordinates and the canvas.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Maps the view model's plot space (`plot_w` x `plot_h`) onto the canvas plot rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub rect: RectF,
    pub sx: f64,
    pub sy: f64,
}

impl PlotTransform {
    pub fn new(width: i32, height: i32, insets: &Insets, plot_w: f64, plot_h: f64) -> Self {
        let rect = RectF::from_ltrb(
            insets.left as f64,
            insets.top as f64,
            (width as f64 - insets.right as f64).max(insets.left as f64 + 1.0),
            (height as f64 - insets.bottom as f64).max(insets.top as f64 + 1.0),
        );
        let sx = rect.width() / plot_w.max(1e-9);
        let sy = rect.height() / plot_h.max(1e-9);
        Self { rect, sx, sy }
    }

    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> (f32, f32) {
        ((self.rect.left + x * self.sx) as f32, (self.rect.top + y * self.sy) as f32)
    }

    #[inline]
    pub fn to_plot(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.rect.left) / self.sx, (py - self.rect.top) / self.sy)
    }

    /// Uniform scale for radii and stroke widths.
    pub fn unit(&self) -> f32 {
        self.sx.min(self.sy) as f32
    }
}
