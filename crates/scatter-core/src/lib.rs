// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the record model, view pipeline and rendering API.

pub mod animate;
pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod geometry;
pub mod grid;
pub mod interact;
pub mod layout;
pub mod reconcile;
pub mod record;
pub mod render;
pub mod scale;
pub mod source;
pub mod stats;
pub mod text;
pub mod theme;
pub mod trend;
pub mod types;
pub mod view;

pub use animate::{Animator, Lerp, TRANSITION};
pub use chart::ChartRenderer;
pub use color::Rgb;
pub use config::AppConfig;
pub use error::{ConfigError, FilterError, LoadError, RenderError};
pub use filter::{parse_toggle, FilterGroup, Filters};
pub use generate::{SynthesisMode, Synthesizer};
pub use interact::{HoverTarget, Interaction, Tooltip};
pub use layout::{LayoutConfig, SpreadMode, ValueUnit};
pub use reconcile::{reconcile, RenderDiff};
pub use record::{EducationScale, Gender, Parental, Record};
pub use render::RenderOptions;
pub use source::DataSource;
pub use theme::Theme;
pub use view::{build_view, PlacedPoint, Placement, ViewModel};
