use build_report::utils::logger;
use build_report::{CliConfig, InlineSource, ReportEngine, ReportPipeline};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting build-report CLI");
    tracing::debug!("CLI config: {:?}", config);

    let pipeline = ReportPipeline::new(InlineSource::sample(), config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                writeln!(stdout)?;
            }
            stdout.flush()?;
            tracing::info!("Build report completed");
        }
        Err(e) => {
            tracing::error!(
                "Build report failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
