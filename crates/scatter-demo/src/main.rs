// File: crates/scatter-demo/src/main.rs
// Summary: Headless demo: renders the all-categories chart and, with --exclude, a filtered one to PNG/SVG.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Format};
use scatter_core::source::save_json;
use scatter_core::{parse_toggle, AppConfig, ChartRenderer, Filters};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    init_logging(cli.log_level.as_deref(), &cfg.logging.level);
    apply_overrides(&mut cfg, &cli);
    cfg.validate().context("invalid configuration after CLI overrides")?;

    let mut chart = ChartRenderer::from_config(&cfg);
    let excluded = exclude_all(chart.filters(), &cli.exclude)?;
    chart.load(&cfg.source()).context("failed to load records")?;

    if let Some(path) = &cli.export_data {
        save_json(path, chart.records())?;
        info!(path = %path.display(), "exported records");
    }

    let diff = chart.update_chart();
    info!(points = diff.entered.len(), averages = chart.view().averages.len(), "initial render");
    write_outputs(&chart, &cli.out, "chart_all", cli.format)?;

    if cli.exclude.is_empty() {
        return Ok(());
    }
    *chart.filters_mut() = excluded;
    let diff = chart.update_chart();
    info!(
        entered = diff.entered.len(),
        updated = diff.updated.len(),
        exited = diff.exited.len(),
        "filtered render"
    );
    if chart.view().is_empty() {
        warn!("no records pass the selected filters");
    }
    write_outputs(&chart, &cli.out, "chart_filtered", cli.format)?;
    Ok(())
}

/// Uncheck every `group=value` pair. A malformed pair and an unknown value both fail.
fn exclude_all(base: &Filters, pairs: &[String]) -> Result<Filters> {
    let mut filters = base.clone();
    for pair in pairs {
        let (group, value) = parse_toggle(pair).with_context(|| format!("invalid --exclude '{pair}'"))?;
        filters.set(group, &value, false).with_context(|| format!("invalid --exclude '{pair}'"))?;
    }
    Ok(filters)
}

/// `--log-level` wins over RUST_LOG, which wins over the config file.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn apply_overrides(cfg: &mut AppConfig, cli: &Cli) {
    if let Some(path) = &cli.data {
        cfg.data.path = Some(path.clone());
    }
    if let Some(mode) = cli.mode {
        cfg.data.mode = mode.into();
    }
    if let Some(n) = cli.count {
        cfg.data.count = n;
    }
    if cli.seed.is_some() {
        cfg.data.seed = cli.seed;
    }
    if cli.ceiling.is_some() {
        cfg.filters.salary_ceiling = cli.ceiling;
    }
}

fn write_outputs(chart: &ChartRenderer, dir: &Path, stem: &str, format: Format) -> Result<()> {
    let out = |ext: &str| -> PathBuf { dir.join(format!("{stem}.{ext}")) };
    if matches!(format, Format::Png | Format::Both) {
        let path = out("png");
        chart.render_to_png(&path)?;
        info!(path = %path.display(), "wrote");
    }
    if matches!(format, Format::Svg | Format::Both) {
        let path = out("svg");
        chart.render_to_svg(&path)?;
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}
