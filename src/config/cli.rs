use crate::config::OutputFormat;
use crate::core::ConfigProvider;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "build-report")]
#[command(about = "Aggregate build records into per-contract and per-geozone reports")]
pub struct CliConfig {
    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
