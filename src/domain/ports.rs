use crate::config::OutputFormat;
use crate::domain::model::{BuildAggregates, BuildRecord};
use crate::utils::error::Result;

/// Supplies the raw input lines, in order.
pub trait RecordSource {
    fn lines(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<BuildRecord>>;
    fn transform(&self, records: Vec<BuildRecord>) -> Result<BuildAggregates>;
    fn load(&self, aggregates: BuildAggregates) -> Result<String>;
}
