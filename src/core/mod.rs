pub mod aggregator;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{BuildAggregates, BuildRecord, ReportSection};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RecordSource};
pub use crate::utils::error::Result;
