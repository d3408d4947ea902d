// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, grid, axes, tooltip).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub zone_line: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub point_stroke: skia::Color,
    pub average_stroke: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 236, 236, 240),
            zone_line: skia::Color::from_argb(255, 200, 200, 208),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            point_stroke: skia::Color::from_argb(90, 0, 0, 0),
            average_stroke: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_bg: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 180, 180, 190),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            zone_line: skia::Color::from_argb(255, 70, 70, 80),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            point_stroke: skia::Color::from_argb(110, 255, 255, 255),
            average_stroke: skia::Color::from_argb(255, 18, 18, 20),
            tooltip_bg: skia::Color::from_argb(235, 32, 32, 38),
            tooltip_border: skia::Color::from_argb(255, 90, 90, 100),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            zone_line: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            point_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            average_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_bg: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            tooltip_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
