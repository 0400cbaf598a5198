use crate::models::{MonthCell, ProcessedDataset};

/// Closed interval of temperatures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureExtent {
    pub min: f64,
    pub max: f64,
}

impl TemperatureExtent {
    fn include(extent: Option<Self>, value: f64) -> Option<Self> {
        Some(match extent {
            Some(e) => Self {
                min: e.min.min(value),
                max: e.max.max(value),
            },
            None => Self {
                min: value,
                max: value,
            },
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub years: (i32, i32),
    pub years_with_data: usize,
    pub total_cells: usize,
    pub cells_with_data: usize,
    pub observed_days: usize,
    pub missing_days: usize,
    /// Range of the monthly `avgMax` values (colour domain of the max view)
    pub max_summary_extent: Option<TemperatureExtent>,
    /// Range of the monthly `avgMin` values (colour domain of the min view)
    pub min_summary_extent: Option<TemperatureExtent>,
    /// Lowest daily minimum and highest daily maximum over every observed day
    pub daily_extent: Option<TemperatureExtent>,
    pub coldest_cell: Option<String>,
    pub hottest_cell: Option<String>,
}

impl DatasetStatistics {
    pub fn coverage_percentage(&self) -> f64 {
        let total_days = self.observed_days + self.missing_days;
        if total_days == 0 {
            return 0.0;
        }
        (self.observed_days as f64 / total_days as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Years: {} to {} ({} with data)\n\
            Month Cells: {} total, {} with data\n\
            Days: {} observed, {} missing ({:.1}% coverage)",
            self.years.0,
            self.years.1,
            self.years_with_data,
            self.total_cells,
            self.cells_with_data,
            self.observed_days,
            self.missing_days,
            self.coverage_percentage()
        )
    }

    pub fn detailed_summary(&self) -> String {
        let describe = |extent: Option<TemperatureExtent>| match extent {
            Some(e) => format!("{:.1}°C to {:.1}°C (span {:.1}°C)", e.min, e.max, e.span()),
            None => "No valid measurements".to_string(),
        };

        format!(
            "{}\n\n\
            Monthly Extremes:\n\
            - Max view range: {}\n\
            - Min view range: {}\n\
            - Hottest month: {}\n\
            - Coldest month: {}\n\n\
            Daily Range: {}",
            self.summary(),
            describe(self.max_summary_extent),
            describe(self.min_summary_extent),
            self.hottest_cell.as_deref().unwrap_or("No valid measurements"),
            self.coldest_cell.as_deref().unwrap_or("No valid measurements"),
            describe(self.daily_extent),
        )
    }
}

/// Read-only statistics over a finished dataset
pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &ProcessedDataset) -> DatasetStatistics {
        let mut stats = DatasetStatistics {
            years: (
                dataset.years.first().copied().unwrap_or_default(),
                dataset.years.last().copied().unwrap_or_default(),
            ),
            years_with_data: dataset
                .years
                .iter()
                .filter(|&&year| dataset.cells_for_year(year).any(MonthCell::has_data))
                .count(),
            total_cells: dataset.len(),
            cells_with_data: 0,
            observed_days: 0,
            missing_days: 0,
            max_summary_extent: None,
            min_summary_extent: None,
            daily_extent: None,
            coldest_cell: None,
            hottest_cell: None,
        };

        for cell in &dataset.data {
            if cell.has_data() {
                stats.cells_with_data += 1;
            }
            stats.observed_days += cell.observed_days();
            stats.missing_days += cell.missing_days();

            if let Some(avg_max) = cell.avg_max {
                if stats.max_summary_extent.map_or(true, |e| avg_max > e.max) {
                    stats.hottest_cell = Some(Self::label(cell));
                }
                stats.max_summary_extent = TemperatureExtent::include(stats.max_summary_extent, avg_max);
            }

            if let Some(avg_min) = cell.avg_min {
                if stats.min_summary_extent.map_or(true, |e| avg_min < e.min) {
                    stats.coldest_cell = Some(Self::label(cell));
                }
                stats.min_summary_extent = TemperatureExtent::include(stats.min_summary_extent, avg_min);
            }

            if let Some(extent) = self.daily_extent(cell) {
                let merged = TemperatureExtent::include(stats.daily_extent, extent.min);
                stats.daily_extent = TemperatureExtent::include(merged, extent.max);
            }
        }

        stats
    }

    /// Lowest `minTemp` and highest `maxTemp` over the observed days of one cell
    pub fn daily_extent(&self, cell: &MonthCell) -> Option<TemperatureExtent> {
        cell.daily_temps.iter().fold(None, |extent, day| {
            let extent = day
                .min_temp
                .map_or(extent, |t| TemperatureExtent::include(extent, t));
            day.max_temp
                .map_or(extent, |t| TemperatureExtent::include(extent, t))
        })
    }

    fn label(cell: &MonthCell) -> String {
        format!("{} {}", cell.month_name, cell.year)
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
