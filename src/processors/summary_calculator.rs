use crate::models::MonthSummary;
use crate::processors::grid_builder::{MonthBucket, MonthGrid};

/// Round half away from zero to one decimal place. Values that round to zero
/// come out as `0.0`, never `-0.0`.
pub fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Derives the per-month summary pair from a bucket.
///
/// The pair holds extremes, not means: the highest daily maximum and the
/// lowest daily minimum of the month.
pub struct SummaryCalculator;

impl SummaryCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, bucket: &MonthBucket) -> MonthSummary {
        let highest = bucket.max_temps.iter().copied().reduce(f64::max);
        let lowest = bucket.min_temps.iter().copied().reduce(f64::min);

        MonthSummary {
            avg_max: highest.map(round_one_decimal),
            avg_min: lowest.map(round_one_decimal),
        }
    }

    /// Summaries for every bucket, in the grid's year-major order
    pub fn summarize_grid(&self, grid: &MonthGrid) -> Vec<MonthSummary> {
        grid.iter()
            .map(|(_, _, bucket)| self.summarize(bucket))
            .collect()
    }
}

impl Default for SummaryCalculator {
    fn default() -> Self {
        Self::new()
    }
}
