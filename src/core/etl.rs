use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs parse, aggregate and render in order. The first failing stage aborts the run.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting build report");

        tracing::debug!("Parsing records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Parsed {} records", records.len());

        tracing::debug!("Aggregating records...");
        let aggregates = self.pipeline.transform(records)?;
        tracing::info!(
            "Aggregated {} contracts and {} geozones",
            aggregates.contract_customers.len(),
            aggregates.zone_customers.len()
        );

        tracing::debug!("Rendering reports...");
        let output = self.pipeline.load(aggregates)?;
        tracing::debug!("Rendered {} bytes", output.len());

        Ok(output)
    }
}
