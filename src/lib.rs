pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use config::{DatasetLevel, PipelineConfig};
pub use error::{ProcessingError, Result};
pub use models::{DailyTemp, MonthCell, ProcessedDataset, RawRow, RawValue};
pub use processors::TemperaturePipeline;

/// Run the full pipeline over already-parsed rows
pub fn process_rows(rows: &[RawRow], config: PipelineConfig) -> ProcessedDataset {
    TemperaturePipeline::new(config).process(rows)
}
