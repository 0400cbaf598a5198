use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar key of a reading: (year, zero-based month, day of month)
pub type DayKey = (i32, u32, u32);

/// One validated day of observations.
///
/// `month` is zero-based (January = 0) to match the grid layout; `day` is the
/// one-based day of month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReading {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl DailyReading {
    pub fn new(date: NaiveDate, max_temp: f64, min_temp: f64) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            max_temp,
            min_temp,
        }
    }

    pub fn key(&self) -> DayKey {
        (self.year, self.month, self.day)
    }
}
