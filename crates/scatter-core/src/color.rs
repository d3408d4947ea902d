// File: crates/scatter-core/src/color.rs
// Summary: Two-axis point coloring (gender palette x education shade) and trend-line color.

use std::collections::BTreeSet;

use crate::record::Gender;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b) }
    }
}

/// Ordered color stops; sampled by linear interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette(pub &'static [Rgb]);

impl Palette {
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = self.0;
        match stops.len() {
            0 => Rgb::new(0, 0, 0),
            1 => stops[0],
            n => {
                let pos = t.clamp(0.0, 1.0) * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                stops[i].lerp(stops[i + 1], pos - i as f64)
            }
        }
    }
}

/// Blue family, light to dark.
pub const MALE_PALETTE: Palette = Palette(&[
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
    Rgb::new(0x08, 0x30, 0x6b),
]);

/// Pink/red family, light to dark.
pub const FEMALE_PALETTE: Palette = Palette(&[
    Rgb::new(0xfd, 0xe0, 0xdd),
    Rgb::new(0xfa, 0x9f, 0xb5),
    Rgb::new(0xf7, 0x68, 0xa1),
    Rgb::new(0xdd, 0x34, 0x97),
    Rgb::new(0xae, 0x01, 0x7e),
]);

pub const TREND_BOTH: Rgb = Rgb::new(0x2e, 0xcc, 0x71);
pub const TREND_FEMALE: Rgb = Rgb::new(0xf7, 0xa4, 0xb2);
pub const TREND_MALE: Rgb = Rgb::new(0x4b, 0x9c, 0xd3);

pub fn palette_for(gender: Gender) -> Palette {
    match gender {
        Gender::Male => MALE_PALETTE,
        Gender::Female => FEMALE_PALETTE,
    }
}

/// Point color: gender picks the hue, education rank (1..=levels) picks the shade.
pub fn point_color(gender: Gender, edu_level: u8, levels: u8) -> Rgb {
    let t = if levels <= 1 {
        0.5
    } else {
        (edu_level.clamp(1, levels) - 1) as f64 / (levels - 1) as f64
    };
    palette_for(gender).sample(t)
}

/// Trend color follows the gender selection: one gender gets its own hue, otherwise green.
pub fn trend_color(selected: &BTreeSet<Gender>) -> Rgb {
    if selected.len() == 1 {
        if selected.contains(&Gender::Female) { TREND_FEMALE } else { TREND_MALE }
    } else {
        TREND_BOTH
    }
}
