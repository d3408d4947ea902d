// File: crates/window-demo/src/main.rs
// Summary: Interactive viewer: renders the chart to a window via RGBA blit (CPU) using winit + softbuffer,
// with keyboard filter toggles, hover tooltips and 500 ms transitions between filter states.

use anyhow::{anyhow, Context, Result};
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use scatter_core::render::render_to_rgba8;
use scatter_core::{
    AppConfig, Animator, ChartRenderer, FilterGroup, Gender, Parental, Placement, RenderDiff, ViewModel,
};

/// Animated positions layered over the chart's target view.
#[derive(Default)]
struct Motion {
    points: Animator<u32, Placement>,
    averages: Animator<i32, Placement>,
}

impl Motion {
    /// Entered points rise from the x-axis; survivors glide; exited points vanish.
    fn apply(&mut self, diff: &RenderDiff, view: &ViewModel, now: Instant) {
        for p in &diff.exited {
            self.points.remove(&p.id());
        }
        for m in &diff.updated {
            if !m.is_noop() {
                self.points.retarget(m.id, m.to, now);
            }
        }
        for p in &diff.entered {
            let to = p.placement();
            let from = Placement { y: view.plot_height, ..to };
            self.points.start(p.id(), from, to, now);
        }
        for a in &view.averages {
            let to = Placement { x: a.x, y: a.y, color: view.trend_color };
            self.averages.retarget(a.stat.year, to, now);
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.points.is_animating(now) || self.averages.is_animating(now)
    }

    /// Copy of `target` with every element at its sampled position.
    fn frame(&self, target: &ViewModel, now: Instant) -> ViewModel {
        let mut view = target.clone();
        for p in &mut view.points {
            if let Some(pl) = self.points.sample(&p.id(), now) {
                p.set_placement(pl);
            }
        }
        for a in &mut view.averages {
            if let Some(pl) = self.averages.sample(&a.stat.year, now) {
                a.x = pl.x;
                a.y = pl.y;
            }
        }
        view.rebuild_trend();
        view
    }
}

/// Keys 1-2 gender, 3-7 education (by rank), 8-0 parental education.
fn toggle_for(key: VirtualKeyCode, chart: &ChartRenderer) -> Option<(FilterGroup, String)> {
    let education = |rank: usize| chart.scale().labels().get(rank).map(|l| (FilterGroup::Education, l.clone()));
    match key {
        VirtualKeyCode::Key1 => Some((FilterGroup::Gender, Gender::Male.as_str().to_string())),
        VirtualKeyCode::Key2 => Some((FilterGroup::Gender, Gender::Female.as_str().to_string())),
        VirtualKeyCode::Key3 => education(0),
        VirtualKeyCode::Key4 => education(1),
        VirtualKeyCode::Key5 => education(2),
        VirtualKeyCode::Key6 => education(3),
        VirtualKeyCode::Key7 => education(4),
        VirtualKeyCode::Key8 => Some((FilterGroup::Parental, Parental::He.as_str().to_string())),
        VirtualKeyCode::Key9 => Some((FilterGroup::Parental, Parental::NoHe.as_str().to_string())),
        VirtualKeyCode::Key0 => Some((FilterGroup::Parental, Parental::NoInfo.as_str().to_string())),
        _ => None,
    }
}

fn main() -> Result<()> {
    // Arg: optional TOML config path
    let cfg = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => AppConfig::default(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut chart = ChartRenderer::from_config(&cfg);
    chart.load(&cfg.source())?;
    let mut motion = Motion::default();
    let initial = chart.update_chart();
    motion.apply(&initial, chart.view(), Instant::now());
    info!("keys: 1-2 gender, 3-7 education, 8-0 parental, Esc quits");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Зарплата по годам")
        .with_inner_size(winit::dpi::LogicalSize::new(chart.options.width as f64, chart.options.height as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    chart.options.width = size.width.max(1) as i32;
                    chart.options.height = size.height.max(1) as i32;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let t = chart.options.transform(chart.view());
                    let before = chart.interaction().clone();
                    if t.rect.contains(position.x, position.y) {
                        let (px, py) = t.to_plot(position.x, position.y);
                        chart.pointer_at(px, py);
                    } else {
                        chart.leave();
                    }
                    if *chart.interaction() != before {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.leave();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    let Some((group, value)) = toggle_for(key, &chart) else { return };
                    match chart.toggle(group, &value) {
                        Ok((checked, diff)) => {
                            debug!(group = group.as_str(), value = %value, checked, "toggle");
                            motion.apply(&diff, chart.view(), Instant::now());
                            window.request_redraw();
                        }
                        Err(e) => error!(error = %e, "toggle failed"),
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if motion.is_animating(Instant::now()) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (
                    NonZeroU32::new(chart.options.width as u32),
                    NonZeroU32::new(chart.options.height as u32),
                ) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!(error = %e, "surface resize");
                    return;
                }
                let frame_view = motion.frame(chart.view(), Instant::now());
                let rgba = match render_to_rgba8(&frame_view, chart.tooltip(), &chart.options) {
                    Ok((rgba, _, _, _)) => rgba,
                    Err(e) => {
                        error!(error = %e, "render");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!(error = %e, "frame buffer");
                        return;
                    }
                };
                // Softbuffer takes 0RGB u32 pixels.
                for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                }
                if let Err(e) = frame.present() {
                    error!(error = %e, "present");
                }
            }
            _ => {}
        }
    });
}
