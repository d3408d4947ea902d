// File: crates/scatter-core/src/chart.rs
// Summary: ChartRenderer: owns records, filter state and the current view; drives update and render.

use std::path::Path;

use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::{FilterError, LoadError, RenderError};
use crate::filter::{FilterGroup, Filters};
use crate::interact::{Interaction, Tooltip};
use crate::layout::LayoutConfig;
use crate::reconcile::{reconcile, RenderDiff};
use crate::record::{EducationScale, Record};
use crate::render::{self, RenderOptions};
use crate::source::DataSource;
use crate::view::{build_view, ViewModel};

/// Chart state. Records are fixed after `load`; everything drawn is rebuilt
/// from `(records, filters, layout)` by `update_chart`.
pub struct ChartRenderer {
    records: Vec<Record>,
    filters: Filters,
    layout: LayoutConfig,
    scale: EducationScale,
    view: ViewModel,
    interaction: Interaction,
    pub options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(layout: LayoutConfig, scale: EducationScale, options: RenderOptions) -> Self {
        let filters = Filters::all(&scale);
        let view = build_view(&[], &filters, &layout, &scale);
        Self { records: Vec::new(), filters, layout, scale, view, interaction: Interaction::default(), options }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        let mut chart = Self::new(cfg.layout.clone(), cfg.data.education_scale(), cfg.render_options());
        chart.filters.salary_ceiling = cfg.filters.salary_ceiling;
        chart
    }

    /// Replace the record set. On failure the previous records stay in place
    /// and nothing is redrawn.
    pub fn load(&mut self, source: &DataSource) -> Result<usize, LoadError> {
        match source.load(&self.scale, &self.layout.years) {
            Ok(records) => {
                info!(count = records.len(), "records loaded");
                self.records = records;
                Ok(self.records.len())
            }
            Err(e) => {
                error!(error = %e, "failed to load records");
                Err(e)
            }
        }
    }

    /// Install records directly (already validated by the caller).
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Rebuild the view from the current filters and report what changed by record id.
    pub fn update_chart(&mut self) -> RenderDiff {
        let next = build_view(&self.records, &self.filters, &self.layout, &self.scale);
        let diff = reconcile(&self.view.points, &next.points);
        debug!(
            entered = diff.entered.len(),
            updated = diff.updated.len(),
            exited = diff.exited.len(),
            averages = next.averages.len(),
            "chart updated"
        );
        self.view = next;
        self.interaction.revalidate(&self.view);
        diff
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Direct access to the filter state. Call `update_chart` afterwards.
    pub fn filters_mut(&mut self) -> &mut Filters {
        &mut self.filters
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn scale(&self) -> &EducationScale {
        &self.scale
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Flip one checkbox and update. Returns the new checked state and the diff.
    pub fn toggle(&mut self, group: FilterGroup, value: &str) -> Result<(bool, RenderDiff), FilterError> {
        let checked = self.filters.toggle(group, value)?;
        debug!(group = group.as_str(), value, checked, "filter toggled");
        Ok((checked, self.update_chart()))
    }

    /// Pointer position in plot coordinates.
    pub fn pointer_at(&mut self, px: f64, py: f64) {
        self.interaction.pointer_at(&self.view, px, py);
    }

    pub fn leave(&mut self) {
        self.interaction.leave();
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.tooltip.visible.then_some(&self.interaction.tooltip)
    }

    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        render::render_to_rgba8(&self.view, self.tooltip(), &self.options)
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        render::render_to_png_bytes(&self.view, self.tooltip(), &self.options)
    }

    pub fn render_to_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        render::render_to_png(&self.view, self.tooltip(), &self.options, path)
    }

    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        render::render_to_svg(&self.view, self.tooltip(), &self.options, path)
    }
}
