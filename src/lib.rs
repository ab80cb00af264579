pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::InlineSource;
pub use config::{OutputFormat, ReportConfig};
pub use core::{etl::ReportEngine, pipeline::ReportPipeline};
pub use utils::error::{ReportError, Result};
