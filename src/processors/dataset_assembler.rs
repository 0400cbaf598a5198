use crate::models::{DailyTemp, MonthCell, MonthSummary, ProcessedDataset};
use crate::processors::grid_builder::MonthGrid;
use crate::utils::constants::{DAYS_IN_MONTH, MONTH_NAMES};
use tracing::warn;

/// Flattens the grid and its summaries into the dataset consumed by renderers.
///
/// No validation happens here; range and type checks belong upstream.
pub struct DatasetAssembler {
    month_names: [String; 12],
    days_in_month: [u32; 12],
}

impl DatasetAssembler {
    pub fn new() -> Self {
        Self::with_calendar(MONTH_NAMES.map(String::from), DAYS_IN_MONTH)
    }

    pub fn with_calendar(month_names: [String; 12], days_in_month: [u32; 12]) -> Self {
        Self {
            month_names,
            days_in_month,
        }
    }

    /// `summaries` is aligned with `grid.iter()`. Every grid cell is emitted;
    /// a cell without a matching summary gets an empty one.
    pub fn assemble(&self, grid: &MonthGrid, summaries: &[MonthSummary]) -> ProcessedDataset {
        if summaries.len() != grid.len() {
            warn!(
                cells = grid.len(),
                summaries = summaries.len(),
                "summary count does not match the grid"
            );
        }

        let data = grid
            .iter()
            .enumerate()
            .map(|(i, (year, month, _))| {
                let summary = summaries.get(i).copied().unwrap_or_default();
                self.month_cell(grid, year, month, &summary)
            })
            .collect();

        ProcessedDataset {
            years: grid.config().years().collect(),
            months: self.month_names.to_vec(),
            data,
        }
    }

    fn month_cell(
        &self,
        grid: &MonthGrid,
        year: i32,
        month: u32,
        summary: &MonthSummary,
    ) -> MonthCell {
        let days = self.days_in_month[month as usize];
        let daily_temps = (1..=days)
            .map(|day| match grid.reading(year, month, day) {
                Some(reading) => DailyTemp::observed(day, reading.max_temp, reading.min_temp),
                None => DailyTemp::missing(day),
            })
            .collect();

        MonthCell {
            year,
            month_index: month,
            month_name: self.month_names[month as usize].clone(),
            avg_max: summary.avg_max,
            avg_min: summary.avg_min,
            daily_temps,
        }
    }
}

impl Default for DatasetAssembler {
    fn default() -> Self {
        Self::new()
    }
}
