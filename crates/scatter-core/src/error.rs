// File: crates/scatter-core/src/error.rs
// Summary: Error types for loading, filtering, configuration and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce the record set (file load or synthesis).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported data file extension: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("record {id}: {message}")]
    InvalidRecord { id: u32, message: String },

    #[error("duplicate record id {0}")]
    DuplicateId(u32),

    #[error("cannot synthesize records: {0}")]
    Generator(String),
}

/// A filter toggle carried a value that does not match the group's encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter group '{0}' (expected gender, education or parental)")]
    UnknownGroup(String),

    #[error("unknown {group} value '{value}'")]
    UnknownValue { group: &'static str, value: String },

    #[error("malformed filter '{0}' (expected group=value)")]
    Malformed(String),
}

/// Configuration file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Rendering backend failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("PNG encode failed")]
    Encode,

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

