use crate::config::PipelineConfig;
use crate::models::{DailyReading, DayKey};
use crate::utils::constants::MONTHS_PER_YEAR;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Per-(year, month) accumulation of readings before summarization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthBucket {
    pub days_present: BTreeSet<u32>,
    pub max_temps: Vec<f64>,
    pub min_temps: Vec<f64>,
}

impl MonthBucket {
    pub fn push(&mut self, reading: &DailyReading) {
        self.days_present.insert(reading.day);
        self.max_temps.push(reading.max_temp);
        self.min_temps.push(reading.min_temp);
    }

    pub fn is_empty(&self) -> bool {
        self.days_present.is_empty()
    }
}

/// Dense year x month partition of the readings, plus a by-day index used
/// when expanding each month into its daily entries.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    config: PipelineConfig,
    buckets: Vec<MonthBucket>,
    daily: HashMap<DayKey, DailyReading>,
}

impl MonthGrid {
    fn empty(config: PipelineConfig) -> Self {
        Self {
            config,
            buckets: vec![MonthBucket::default(); config.year_count() * MONTHS_PER_YEAR],
            daily: HashMap::new(),
        }
    }

    fn index(&self, year: i32, month: u32) -> Option<usize> {
        if !self.config.contains_year(year) || month as usize >= MONTHS_PER_YEAR {
            return None;
        }
        Some((year - self.config.start_year()) as usize * MONTHS_PER_YEAR + month as usize)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn bucket(&self, year: i32, month: u32) -> Option<&MonthBucket> {
        self.index(year, month).and_then(|i| self.buckets.get(i))
    }

    /// The reading recorded for a specific day, if any
    pub fn reading(&self, year: i32, month: u32, day: u32) -> Option<&DailyReading> {
        self.daily.get(&(year, month, day))
    }

    /// Buckets in year-major, month-minor order
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32, &MonthBucket)> {
        let start_year = self.config.start_year();
        self.buckets.iter().enumerate().map(move |(i, bucket)| {
            let year = start_year + (i / MONTHS_PER_YEAR) as i32;
            let month = (i % MONTHS_PER_YEAR) as u32;
            (year, month, bucket)
        })
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn reading_count(&self) -> usize {
        self.daily.len()
    }
}

pub struct GridBuilder {
    config: PipelineConfig,
}

impl GridBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Partition readings into their month buckets. Every (year, month) of the
    /// configured range gets a bucket, even if it stays empty.
    pub fn build(&self, readings: &[DailyReading]) -> MonthGrid {
        let mut grid = MonthGrid::empty(self.config);

        for reading in readings {
            let Some(index) = grid.index(reading.year, reading.month) else {
                debug!(key = ?reading.key(), "reading outside grid, ignoring");
                continue;
            };

            // Normalization leaves one reading per day. If a caller passes repeats anyway,
            // both values feed the bucket and the day index keeps the later one.
            grid.buckets[index].push(reading);
            grid.daily.insert(reading.key(), *reading);
        }

        debug!(
            buckets = grid.len(),
            days = grid.reading_count(),
            "built month grid"
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyReading {
        DailyReading::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    #[test]
    fn test_every_bucket_initialized() {
        let config = PipelineConfig::new(2010, 2011).unwrap();
        let grid = GridBuilder::new(config).build(&[]);

        assert_eq!(grid.len(), 24);
        assert!(grid.iter().all(|(_, _, b)| b.is_empty()));

        let order: Vec<(i32, u32)> = grid.iter().map(|(y, m, _)| (y, m)).collect();
        assert_eq!(order[0], (2010, 0));
        assert_eq!(order[11], (2010, 11));
        assert_eq!(order[12], (2011, 0));
        assert_eq!(order[23], (2011, 11));
    }

    #[test]
    fn test_readings_partitioned_by_month() {
        let config = PipelineConfig::new(2010, 2010).unwrap();
        let readings = vec![
            reading(2010, 1, 1, 5.0, -2.0),
            reading(2010, 1, 3, 7.0, 0.0),
            reading(2010, 6, 15, 25.0, 14.0),
        ];

        let grid = GridBuilder::new(config).build(&readings);

        let january = grid.bucket(2010, 0).unwrap();
        assert_eq!(january.days_present.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(january.max_temps, vec![5.0, 7.0]);
        assert_eq!(january.min_temps, vec![-2.0, 0.0]);

        let june = grid.bucket(2010, 5).unwrap();
        assert!(june.days_present.contains(&15));
        assert!(grid.bucket(2010, 1).unwrap().is_empty());

        assert_eq!(grid.reading(2010, 0, 3).map(|r| r.max_temp), Some(7.0));
        assert!(grid.reading(2010, 0, 2).is_none());
        assert_eq!(grid.reading_count(), 3);
    }

    #[test]
    fn test_out_of_grid_readings_ignored() {
        let config = PipelineConfig::new(2010, 2010).unwrap();
        let grid = GridBuilder::new(config).build(&[reading(2011, 1, 1, 5.0, -2.0)]);

        assert_eq!(grid.reading_count(), 0);
        assert!(grid.bucket(2011, 0).is_none());
    }

    #[test]
    fn test_repeated_day_recorded_once_in_days_present() {
        let config = PipelineConfig::new(2010, 2010).unwrap();
        let grid = GridBuilder::new(config).build(&[
            reading(2010, 1, 1, 5.0, -2.0),
            reading(2010, 1, 1, 6.0, -1.0),
        ]);

        let january = grid.bucket(2010, 0).unwrap();
        assert_eq!(january.days_present.len(), 1);
        assert_eq!(january.max_temps, vec![5.0, 6.0]);
        assert_eq!(grid.reading(2010, 0, 1).map(|r| r.max_temp), Some(6.0));
    }
}
