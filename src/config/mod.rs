#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Configuration for library callers that don't go through the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_format: OutputFormat,
}

impl ReportConfig {
    pub fn new(output_format: OutputFormat) -> Self {
        Self { output_format }
    }
}

impl ConfigProvider for ReportConfig {
    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}
