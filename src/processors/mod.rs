pub mod dataset_assembler;
pub mod grid_builder;
pub mod pipeline;
pub mod row_normalizer;
pub mod summary_calculator;

pub use dataset_assembler::DatasetAssembler;
pub use grid_builder::{GridBuilder, MonthBucket, MonthGrid};
pub use pipeline::{IngestReport, TemperaturePipeline};
pub use row_normalizer::{NormalizedReadings, Rejection, RejectionCounts, RowNormalizer};
pub use summary_calculator::{round_one_decimal, SummaryCalculator};
