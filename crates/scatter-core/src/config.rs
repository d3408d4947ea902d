// File: crates/scatter-core/src/config.rs
//! Application configuration.
//!
//! Loaded from TOML; every section and field has a default, so an empty file
//! (or no file at all) yields the stock 600x400 three-year chart over 300
//! uniformly generated records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;
use crate::generate::{SynthesisMode, Synthesizer, UniformSalary};
use crate::layout::LayoutConfig;
use crate::record::EducationScale;
use crate::render::RenderOptions;
use crate::source::DataSource;
use crate::theme;
use crate::types::Insets;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub layout: LayoutConfig,
    pub filters: FilterConfig,
    pub data: DataConfig,
    pub labels: LabelConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub insets: Insets,
    pub theme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Records above this salary are dropped before layout and averaging.
    pub salary_ceiling: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Load from this file instead of synthesizing.
    pub path: Option<PathBuf>,
    pub mode: SynthesisMode,
    pub count: usize,
    pub seed: Option<u64>,
    pub salary_min: f64,
    pub salary_max: f64,
    /// 3 or 5 built-in education levels.
    pub education_levels: u8,
    /// Custom education labels, lowest rank first; overrides `education_levels`.
    pub education_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub x_axis: String,
    pub y_axis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { insets: Insets::default(), theme: "light".to_string() }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            mode: SynthesisMode::Uniform,
            count: 300,
            seed: None,
            salary_min: 5.0,
            salary_max: 100.0,
            education_levels: 3,
            education_labels: None,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { x_axis: "Год".to_string(), y_axis: "Зарплата (тыс. руб.)".to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl DataConfig {
    pub fn education_scale(&self) -> EducationScale {
        match &self.education_labels {
            Some(labels) => EducationScale::new(labels.iter().cloned()),
            None => EducationScale::with_levels(self.education_levels),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, message: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        };
        let l = &self.layout;
        if l.years.is_empty() {
            return Err(invalid("layout.years", "must list at least one year"));
        }
        let mut seen = BTreeSet::new();
        if let Some(dup) = l.years.iter().find(|y| !seen.insert(**y)) {
            return Err(invalid("layout.years", &format!("year {dup} listed more than once")));
        }
        if !(l.plot_width > 0.0) || !(l.plot_height > 0.0) {
            return Err(invalid("layout.plot_width/plot_height", "must be greater than 0"));
        }
        if !(l.zone_width > 0.0) {
            return Err(invalid("layout.zone_width", "must be greater than 0"));
        }
        if l.zone_width > l.zone_scale().slot_width() {
            return Err(invalid("layout.zone_width", "wider than one year slot; zones would overlap"));
        }
        if let Some(m) = l.y_max {
            if !(m > 0.0) {
                return Err(invalid("layout.y_max", "must be greater than 0"));
            }
        }
        if let Some(c) = self.filters.salary_ceiling {
            if c < 0.0 {
                return Err(invalid("filters.salary_ceiling", "must be non-negative"));
            }
        }
        if self.data.salary_max < self.data.salary_min || self.data.salary_min < 0.0 {
            return Err(invalid("data.salary_min/salary_max", "need 0 <= salary_min <= salary_max"));
        }
        if self.data.education_scale().is_empty() {
            return Err(invalid("data.education_labels", "must not be empty"));
        }
        if self.data.education_labels.is_none() && !matches!(self.data.education_levels, 3 | 5) {
            warn!(levels = self.data.education_levels, "unsupported education_levels, using 3");
        }
        Ok(())
    }

    pub fn source(&self) -> DataSource {
        match &self.data.path {
            Some(p) => DataSource::File(p.clone()),
            None => DataSource::Generate(
                Synthesizer::new(self.data.mode, self.data.count, self.data.seed)
                    .with_years(self.layout.years.clone())
                    .with_scale(self.data.education_scale())
                    .with_uniform(UniformSalary { min: self.data.salary_min, max: self.data.salary_max }),
            ),
        }
    }

    /// Canvas size follows the plot size plus insets.
    pub fn render_options(&self) -> RenderOptions {
        let insets = self.canvas.insets;
        RenderOptions {
            width: self.layout.plot_width.round() as i32 + insets.hsum() as i32,
            height: self.layout.plot_height.round() as i32 + insets.vsum() as i32,
            insets,
            theme: theme::find(&self.canvas.theme),
            draw_labels: true,
            x_label: self.labels.x_axis.clone(),
            y_label: self.labels.y_axis.clone(),
        }
    }
}
