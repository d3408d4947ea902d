// File: crates/scatter-core/src/source.rs
// Summary: Record sources: in-process synthesis or a one-shot JSON/CSV file load.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::generate::Synthesizer;
use crate::record::{EducationScale, Gender, Parental, Record};

/// Where the record set comes from. Loaded once at startup.
#[derive(Clone, Debug)]
pub enum DataSource {
    Generate(Synthesizer),
    File(PathBuf),
}

impl DataSource {
    /// Load records for the given education scale and year set.
    pub fn load(&self, scale: &EducationScale, years: &[i32]) -> Result<Vec<Record>, LoadError> {
        match self {
            DataSource::Generate(synth) => {
                let records = synth.generate()?;
                info!(count = records.len(), mode = ?synth.mode, seed = ?synth.seed, "synthesized records");
                Ok(records)
            }
            DataSource::File(path) => load_file(path, scale, years),
        }
    }
}

/// Wire shape; `eduLevel` may be omitted and is then resolved through the scale.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: u32,
    year: i32,
    salary: f64,
    gender: Gender,
    education: String,
    #[serde(rename = "eduLevel", default)]
    edu_level: Option<u8>,
    parental: Parental,
}

impl RawRecord {
    fn resolve(self, scale: &EducationScale, years: &[i32]) -> Result<Record, LoadError> {
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(LoadError::InvalidRecord {
                id: self.id,
                message: format!("salary must be non-negative, got {}", self.salary),
            });
        }
        if !years.contains(&self.year) {
            return Err(LoadError::InvalidRecord {
                id: self.id,
                message: format!("year {} is not one of {:?}", self.year, years),
            });
        }
        let edu_level = match self.edu_level.or_else(|| scale.rank_of(&self.education)) {
            Some(level) if (1..=scale.levels()).contains(&level) => level,
            Some(level) => {
                return Err(LoadError::InvalidRecord {
                    id: self.id,
                    message: format!("eduLevel {level} outside 1..={}", scale.levels()),
                })
            }
            None => {
                return Err(LoadError::InvalidRecord {
                    id: self.id,
                    message: format!("no education rank for '{}'", self.education),
                })
            }
        };
        Ok(Record {
            id: self.id,
            year: self.year,
            salary: self.salary,
            gender: self.gender,
            education: self.education,
            edu_level,
            parental: self.parental,
        })
    }
}

/// Load a JSON array (`.json`) or a headed CSV (`.csv`) of records.
/// Every record's year must be in `years` and its rank within the scale.
pub fn load_file(path: &Path, scale: &EducationScale, years: &[i32]) -> Result<Vec<Record>, LoadError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let raw = match ext.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), rows = raw.len(), "parsed data file");

    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        if !seen.insert(r.id) {
            return Err(LoadError::DuplicateId(r.id));
        }
        out.push(r.resolve(scale, years)?);
    }
    info!(path = %path.display(), count = out.len(), "loaded records");
    Ok(out)
}

fn read_json(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json { path: path.to_path_buf(), source })
}

fn read_csv(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let csv_err = |source| LoadError::Csv { path: path.to_path_buf(), source };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<RawRecord>() {
        out.push(row.map_err(csv_err)?);
    }
    Ok(out)
}

/// Write records as a pretty JSON array (the format `load_file` reads back).
pub fn save_json(path: &Path, records: &[Record]) -> Result<(), LoadError> {
    let io_err = |source| LoadError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let text = serde_json::to_string_pretty(records)
        .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;
    std::fs::write(path, text).map_err(io_err)
}
