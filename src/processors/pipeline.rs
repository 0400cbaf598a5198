use crate::config::PipelineConfig;
use crate::models::{ProcessedDataset, RawRow};
use crate::processors::{
    DatasetAssembler, GridBuilder, RejectionCounts, RowNormalizer, SummaryCalculator,
};
use crate::utils::progress::ProgressReporter;
use tracing::{info, warn};

/// What happened to the input rows during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub total_rows: usize,
    pub accepted_readings: usize,
    pub duplicate_days: usize,
    pub rejections: RejectionCounts,
    pub cells: usize,
}

impl IngestReport {
    pub fn rejected_rows(&self) -> usize {
        self.rejections.total()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Ingest Report ===\n");
        summary.push_str(&format!("Total Rows: {}\n", self.total_rows));
        summary.push_str(&format!("Accepted Readings: {}\n", self.accepted_readings));
        summary.push_str(&format!("Duplicate Days Replaced: {}\n", self.duplicate_days));
        summary.push_str(&format!("Rejected Rows: {}\n", self.rejected_rows()));

        if self.rejected_rows() > 0 {
            let counts = [
                ("missing date", self.rejections.missing_date),
                ("malformed date", self.rejections.malformed_date),
                ("missing temperature", self.rejections.missing_temperature),
                ("malformed temperature", self.rejections.malformed_temperature),
                ("out of range", self.rejections.out_of_range),
            ];
            for (reason, count) in counts.iter().filter(|(_, c)| *c > 0) {
                summary.push_str(&format!("  {}: {}\n", reason, count));
            }
        }

        summary.push_str(&format!("Month Cells: {}\n", self.cells));
        summary
    }
}

/// Raw rows in, gap-filled dataset out. Each call is independent and owns all
/// of its intermediate state.
pub struct TemperaturePipeline {
    config: PipelineConfig,
    assembler: DatasetAssembler,
}

impl TemperaturePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            assembler: DatasetAssembler::new(),
        }
    }

    pub fn with_assembler(mut self, assembler: DatasetAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn process(&self, rows: &[RawRow]) -> ProcessedDataset {
        self.process_with_report(rows, None).0
    }

    pub fn process_with_report(
        &self,
        rows: &[RawRow],
        progress: Option<&ProgressReporter>,
    ) -> (ProcessedDataset, IngestReport) {
        if let Some(p) = progress {
            p.set_message("Normalizing rows...");
        }

        let normalized = RowNormalizer::new(self.config).normalize_all(rows);
        info!(
            rows = rows.len(),
            accepted = normalized.readings.len(),
            rejected = normalized.rejections.total(),
            duplicates = normalized.duplicate_days,
            "normalized input rows"
        );
        if normalized.readings.is_empty() {
            warn!(
                start_year = self.config.start_year(),
                end_year = self.config.end_year(),
                "no readings within the configured years; every cell will be empty"
            );
        }

        if let Some(p) = progress {
            p.set_message("Building month grid...");
        }
        let grid = GridBuilder::new(self.config).build(&normalized.readings);

        if let Some(p) = progress {
            p.set_message("Summarizing months...");
        }
        let summaries = SummaryCalculator::new().summarize_grid(&grid);

        let dataset = self.assembler.assemble(&grid, &summaries);
        info!(
            years = dataset.years.len(),
            cells = dataset.len(),
            "assembled dataset"
        );

        if let Some(p) = progress {
            p.finish_with_message(&format!("Processed {} rows", rows.len()));
        }

        let report = IngestReport {
            total_rows: rows.len(),
            accepted_readings: normalized.readings.len(),
            duplicate_days: normalized.duplicate_days,
            rejections: normalized.rejections,
            cells: dataset.len(),
        };

        (dataset, report)
    }
}
