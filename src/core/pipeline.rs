use crate::core::aggregator::aggregate;
use crate::core::parser::parse_records;
use crate::core::report::{build_sections, render};
use crate::core::{BuildAggregates, BuildRecord, ConfigProvider, Pipeline, RecordSource};
use crate::utils::error::Result;

pub struct ReportPipeline<S: RecordSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: RecordSource, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: RecordSource, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<BuildRecord>> {
        let lines = self.source.lines()?;
        tracing::debug!("Read {} input lines", lines.len());

        parse_records(lines.as_slice()).inspect_err(|e| {
            tracing::warn!("Rejecting input: {}", e);
        })
    }

    fn transform(&self, records: Vec<BuildRecord>) -> Result<BuildAggregates> {
        Ok(aggregate(&records))
    }

    fn load(&self, aggregates: BuildAggregates) -> Result<String> {
        let format = self.config.output_format();
        tracing::debug!("Rendering reports as {:?}", format);

        let sections = build_sections(&aggregates);
        render(&sections, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, ReportConfig};
    use crate::utils::error::ReportError;

    struct MockSource {
        lines: Vec<String>,
    }

    impl MockSource {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
            }
        }
    }

    impl RecordSource for MockSource {
        fn lines(&self) -> Result<Vec<String>> {
            Ok(self.lines.clone())
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn lines(&self) -> Result<Vec<String>> {
            Err(ReportError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "source closed",
            )))
        }
    }

    #[test]
    fn test_extract_parses_source_lines() {
        let pipeline = ReportPipeline::new(
            MockSource::new(&["1,2345,us_east,Red,Apple,3445s", "2,2345,us_east,Red,Apple,5s"]),
            ReportConfig::default(),
        );
        let records = pipeline.extract().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].customer_id, "2");
    }

    #[test]
    fn test_extract_rejects_malformed_line() {
        let pipeline = ReportPipeline::new(
            MockSource::new(&["1,2345,us_east,Red,Apple,3445s", "1,2345,us_east"]),
            ReportConfig::default(),
        );
        assert!(matches!(
            pipeline.extract(),
            Err(ReportError::MalformedRecord { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_extract_propagates_source_error() {
        let pipeline = ReportPipeline::new(FailingSource, ReportConfig::default());
        assert!(matches!(pipeline.extract(), Err(ReportError::IoError(_))));
    }

    #[test]
    fn test_load_uses_configured_format() {
        let pipeline = ReportPipeline::new(
            MockSource::new(&["1,2345,us_east,Red,Apple,3445s"]),
            ReportConfig::new(OutputFormat::Csv),
        );
        let records = pipeline.extract().unwrap();
        let aggregates = pipeline.transform(records).unwrap();
        let output = pipeline.load(aggregates).unwrap();
        assert!(output.starts_with("report,key,value"));
    }
}
