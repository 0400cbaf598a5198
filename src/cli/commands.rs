use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands, DatasetArgs};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::ProcessedDataset;
use crate::processors::{IngestReport, TemperaturePipeline};
use crate::readers::{load_rows_with, CsvRowReader};
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use tracing::info;

impl DatasetArgs {
    /// Defaults, config file and environment first, then `--level`, then
    /// explicit year flags.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = PipelineConfig::load(self.config.as_deref())?;
        if let Some(level) = self.level {
            config = PipelineConfig::for_level(level);
        }
        config.with_overrides(self.start_year, self.end_year)
    }
}

async fn build_dataset(
    args: &DatasetArgs,
    progress: &ProgressReporter,
) -> Result<(ProcessedDataset, IngestReport)> {
    let config = args.resolve_config()?;
    info!(
        input = %args.input.display(),
        start_year = config.start_year(),
        end_year = config.end_year(),
        "building dataset"
    );

    progress.set_message("Loading temperature table...");
    let reader = CsvRowReader::new().with_delimiter(args.delimiter);
    let rows = load_rows_with(&args.input, reader).await?;

    let pipeline = TemperaturePipeline::new(config);
    Ok(pipeline.process_with_report(&rows, Some(progress)))
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Process {
            dataset,
            output,
            compact,
        } => {
            // Progress and reports go to stderr; stdout may carry the dataset
            let silent = cli.quiet || output.is_none();
            let progress = ProgressReporter::new_spinner("Processing data...", silent);

            let (processed, report) = build_dataset(&dataset, &progress).await?;
            if !cli.quiet {
                eprintln!("\n{}", report.summary());
            }

            let writer = JsonWriter::new().with_pretty(!compact);
            match output {
                Some(path) => {
                    writer.write_to_path(&processed, &path)?;
                    if !cli.quiet {
                        eprintln!("Wrote {} month cells to {}", processed.len(), path.display());
                    }
                }
                None => writer.write(&processed, std::io::stdout().lock())?,
            }
        }

        Commands::Info { dataset } => {
            println!("Analyzing temperature table: {}", dataset.input.display());

            let progress = ProgressReporter::new_spinner("Processing data...", cli.quiet);
            let (processed, report) = build_dataset(&dataset, &progress).await?;
            progress.finish();

            println!("\n{}", report.summary());

            let stats = DatasetAnalyzer::new().analyze(&processed);
            println!("{}", stats.detailed_summary());
        }
    }

    Ok(())
}
