// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels (600 plot + left/right margins).
pub const WIDTH: i32 = 750;
/// Default surface height in pixels (400 plot + top/bottom margins).
pub const HEIGHT: i32 = 450;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Room for the rotated salary label on the left and tooltips on the right.
        Self::new(50, 100, 10, 40)
    }
}
