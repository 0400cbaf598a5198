pub mod dataset;
pub mod raw_row;
pub mod reading;

pub use dataset::{DailyTemp, MonthCell, MonthSummary, ProcessedDataset};
pub use raw_row::{RawRow, RawValue};
pub use reading::{DailyReading, DayKey};
