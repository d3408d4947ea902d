// File: crates/scatter-core/tests/render.rs
// Purpose: Render smoke tests: PNG file/bytes, RGBA buffer shape, SVG output, tooltip drawing.

use scatter_core::{AppConfig, ChartRenderer, SynthesisMode, Synthesizer};
use scatter_core::source::DataSource;

fn loaded_chart() -> ChartRenderer {
    let mut chart = ChartRenderer::from_config(&AppConfig::default());
    let source = DataSource::Generate(Synthesizer::new(SynthesisMode::Uniform, 60, Some(2)));
    chart.load(&source).expect("synthesis");
    chart.update_chart();
    chart
}

#[test]
fn render_smoke_png() {
    let chart = loaded_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = loaded_chart();
    chart.options.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (750, 450));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // Opaque white background in the top-left corner.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn render_svg_contains_markup() {
    let chart = loaded_chart();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&out).expect("svg render");
    let text = std::fs::read_to_string(&out).expect("svg written");
    assert!(text.contains("<svg"));
}

#[test]
fn tooltip_changes_pixels() {
    let mut chart = loaded_chart();
    let before = chart.render_to_rgba8().expect("rgba").0;
    let avg = *chart.view().average(2022).expect("average");
    chart.pointer_at(avg.x, avg.y);
    assert!(chart.tooltip().is_some());
    let after = chart.render_to_rgba8().expect("rgba").0;
    assert_ne!(before, after);
}

#[test]
fn empty_view_still_renders_axes() {
    let mut chart = ChartRenderer::from_config(&AppConfig::default());
    chart.update_chart();
    let bytes = chart.render_to_png_bytes().expect("empty chart renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
