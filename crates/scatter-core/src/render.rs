// File: crates/scatter-core/src/render.rs
// Summary: Headless Skia rendering of a view model: RGBA buffer, PNG and SVG outputs.

use skia_safe as skia;
use std::path::Path;

use crate::axis::Axis;
use crate::color::Rgb;
use crate::error::RenderError;
use crate::geometry::PlotTransform;
use crate::interact::Tooltip;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::trend::{Segment, TrendPath};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewModel;

const TICK_FONT: f32 = 11.0;
const LABEL_FONT: f32 = 13.0;
const TOOLTIP_FONT: f32 = 12.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (ticks, axis labels, tooltip). Off for pixel-stable snapshots.
    pub draw_labels: bool,
    pub x_label: String,
    pub y_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            x_label: "Год".to_string(),
            y_label: "Зарплата (тыс. руб.)".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn transform(&self, view: &ViewModel) -> PlotTransform {
        PlotTransform::new(self.width, self.height, &self.insets, view.plot_width, view.plot_height)
    }
}

/// Render into an RGBA8 buffer: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(
    view: &ViewModel,
    tooltip: Option<&Tooltip>,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
    let mut surface = raster_surface(opts)?;
    draw_scene(surface.canvas(), view, tooltip, opts);

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok((pixels, opts.width, opts.height, stride))
}

pub fn render_to_png_bytes(view: &ViewModel, tooltip: Option<&Tooltip>, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = raster_surface(opts)?;
    draw_scene(surface.canvas(), view, tooltip, opts);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

pub fn render_to_png(
    view: &ViewModel,
    tooltip: Option<&Tooltip>,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(view, tooltip, opts)?;
    write_file(path.as_ref(), &bytes)
}

pub fn render_to_svg_bytes(view: &ViewModel, tooltip: Option<&Tooltip>, opts: &RenderOptions) -> Vec<u8> {
    let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
    let canvas = skia::svg::Canvas::new(bounds, None);
    draw_scene(&canvas, view, tooltip, opts);
    canvas.end().as_bytes().to_vec()
}

pub fn render_to_svg(
    view: &ViewModel,
    tooltip: Option<&Tooltip>,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let bytes = render_to_svg_bytes(view, tooltip, opts);
    write_file(path.as_ref(), &bytes)
}

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(RenderError::Surface(opts.width, opts.height))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    std::fs::write(path, bytes).map_err(write_err)
}

fn to_skia(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

// ---- scene ------------------------------------------------------------------

/// Draw the whole chart onto any Skia canvas (raster or SVG).
pub fn draw_scene(canvas: &skia::Canvas, view: &ViewModel, tooltip: Option<&Tooltip>, opts: &RenderOptions) {
    let t = opts.transform(view);
    let theme = &opts.theme;
    let shaper = opts.draw_labels.then(TextShaper::new);
    let x_axis = Axis::years(opts.x_label.as_str(), view);
    let y_axis = Axis::salary(opts.y_label.as_str(), view);

    canvas.clear(theme.background);
    draw_grid(canvas, &t, view, &y_axis, theme);
    draw_axes(canvas, &t, view, &x_axis, &y_axis, theme, shaper.as_ref());
    draw_trend(canvas, &t, &view.trend, to_skia(view.trend_color));
    draw_points(canvas, &t, view, theme);
    draw_averages(canvas, &t, view, theme);
    if let (Some(tip), Some(shaper)) = (tooltip, shaper.as_ref()) {
        if tip.visible {
            draw_tooltip(canvas, &t, tip, theme, shaper);
        }
    }
}

fn draw_grid(canvas: &skia::Canvas, t: &PlotTransform, view: &ViewModel, y_axis: &Axis, theme: &Theme) {
    let grid = stroke(theme.grid, 1.0);
    for tick in &y_axis.ticks {
        let (l, y) = t.to_canvas(0.0, tick.pos);
        let (r, _) = t.to_canvas(view.plot_width, tick.pos);
        canvas.draw_line((l, y), (r, y), &grid);
    }

    // Year-zone boundaries: midpoints between adjacent zone centers.
    let zone = stroke(theme.zone_line, 1.0);
    for pair in view.zones.windows(2) {
        let mid = (pair[0].center + pair[1].center) / 2.0;
        let (x, top) = t.to_canvas(mid, 0.0);
        let (_, bottom) = t.to_canvas(mid, view.plot_height);
        canvas.draw_line((x, top), (x, bottom), &zone);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    t: &PlotTransform,
    view: &ViewModel,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let axis = stroke(theme.axis_line, 1.0);
    let (l, b) = t.to_canvas(0.0, view.plot_height);
    let (r, top) = t.to_canvas(view.plot_width, 0.0);
    canvas.draw_line((l, b), (r, b), &axis);
    canvas.draw_line((l, top), (l, b), &axis);

    let tick = stroke(theme.tick, 1.0);
    for tk in &x_axis.ticks {
        let (x, _) = t.to_canvas(tk.pos, 0.0);
        canvas.draw_line((x, b), (x, b + 6.0), &tick);
    }
    for tk in &y_axis.ticks {
        let (_, y) = t.to_canvas(0.0, tk.pos);
        canvas.draw_line((l - 6.0, y), (l, y), &tick);
    }

    let Some(shaper) = shaper else { return };
    for tk in &x_axis.ticks {
        let (x, _) = t.to_canvas(tk.pos, 0.0);
        shaper.draw_centered(canvas, &tk.label, x, b + 18.0, TICK_FONT, theme.tick);
    }
    for tk in &y_axis.ticks {
        let (_, y) = t.to_canvas(0.0, tk.pos);
        shaper.draw_right(canvas, &tk.label, l - 8.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick);
    }
    shaper.draw_centered(canvas, &x_axis.label, (l + r) / 2.0, b + 34.0, LABEL_FONT, theme.axis_label);
    shaper.draw_vertical(canvas, &y_axis.label, l - 38.0, (top + b) / 2.0, LABEL_FONT, theme.axis_label);
}

fn trend_path(t: &PlotTransform, trend: &TrendPath) -> Option<skia::Path> {
    let (x, y) = trend.start?;
    if trend.segments.is_empty() {
        return None;
    }
    let mut path = skia::PathBuilder::new();
    path.move_to(t.to_canvas(x, y));
    for s in &trend.segments {
        match *s {
            Segment::Line { to } => {
                path.line_to(t.to_canvas(to.0, to.1));
            }
            Segment::Cubic { c1, c2, to } => {
                path.cubic_to(t.to_canvas(c1.0, c1.1), t.to_canvas(c2.0, c2.1), t.to_canvas(to.0, to.1));
            }
        }
    }
    Some(path.detach())
}

fn draw_trend(canvas: &skia::Canvas, t: &PlotTransform, trend: &TrendPath, color: skia::Color) {
    if let Some(path) = trend_path(t, trend) {
        canvas.draw_path(&path, &stroke(color, 2.0));
    }
}

fn draw_points(canvas: &skia::Canvas, t: &PlotTransform, view: &ViewModel, theme: &Theme) {
    let r = view.point_radius as f32 * t.unit();
    let edge = stroke(theme.point_stroke, 0.5);
    for p in &view.points {
        let c = t.to_canvas(p.x, p.y);
        canvas.draw_circle(c, r, &fill(to_skia(p.color)));
        canvas.draw_circle(c, r, &edge);
    }
}

fn draw_averages(canvas: &skia::Canvas, t: &PlotTransform, view: &ViewModel, theme: &Theme) {
    let r = view.average_radius as f32 * t.unit();
    let body = fill(to_skia(view.trend_color));
    let edge = stroke(theme.average_stroke, 1.5);
    for a in &view.averages {
        let c = t.to_canvas(a.x, a.y);
        canvas.draw_circle(c, r, &body);
        canvas.draw_circle(c, r, &edge);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, t: &PlotTransform, tip: &Tooltip, theme: &Theme, shaper: &TextShaper) {
    if tip.lines.is_empty() {
        return;
    }
    let pad = 6.0f32;
    let line_h = TOOLTIP_FONT * 1.35;
    let w = tip
        .lines
        .iter()
        .map(|l| shaper.measure_width(l, TOOLTIP_FONT))
        .fold(0.0f32, f32::max)
        + pad * 2.0;
    let h = line_h * tip.lines.len() as f32 + pad * 2.0;
    let (x, y) = t.to_canvas(tip.x, tip.y);

    let rect = skia::Rect::from_xywh(x, y, w, h);
    let rrect = skia::RRect::new_rect_xy(rect, 4.0, 4.0);
    canvas.draw_rrect(&rrect, &fill(theme.tooltip_bg));
    canvas.draw_rrect(&rrect, &stroke(theme.tooltip_border, 1.0));
    for (i, line) in tip.lines.iter().enumerate() {
        let baseline = y + pad + line_h * i as f32 + TOOLTIP_FONT;
        shaper.draw_left(canvas, line, x + pad, baseline, TOOLTIP_FONT, theme.tooltip_text);
    }
}
