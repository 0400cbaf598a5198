use crate::config::PipelineConfig;
use crate::models::{DailyReading, DayKey, RawRow, RawValue};
use crate::utils::constants::{DATE_COLUMN, MAX_TEMPERATURE_COLUMN, MIN_TEMPERATURE_COLUMN};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Why a raw row did not become a reading. Rejections are never errors: the
/// row is dropped and ingestion continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    MissingDate,
    MalformedDate,
    MissingTemperature,
    MalformedTemperature,
    OutOfRange { year: i32 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingDate => write!(f, "missing date"),
            Rejection::MalformedDate => write!(f, "malformed date"),
            Rejection::MissingTemperature => write!(f, "missing temperature"),
            Rejection::MalformedTemperature => write!(f, "malformed temperature"),
            Rejection::OutOfRange { year } => write!(f, "year {} outside configured range", year),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub missing_date: usize,
    pub malformed_date: usize,
    pub missing_temperature: usize,
    pub malformed_temperature: usize,
    pub out_of_range: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MissingDate => self.missing_date += 1,
            Rejection::MalformedDate => self.malformed_date += 1,
            Rejection::MissingTemperature => self.missing_temperature += 1,
            Rejection::MalformedTemperature => self.malformed_temperature += 1,
            Rejection::OutOfRange { .. } => self.out_of_range += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_date
            + self.malformed_date
            + self.missing_temperature
            + self.malformed_temperature
            + self.out_of_range
    }
}

/// Readings after duplicate resolution, ordered by date
#[derive(Debug, Clone, Default)]
pub struct NormalizedReadings {
    pub readings: Vec<DailyReading>,
    pub rejections: RejectionCounts,
    /// Rows that replaced an earlier row for the same day
    pub duplicate_days: usize,
}

pub struct RowNormalizer {
    config: PipelineConfig,
}

impl RowNormalizer {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Convert one raw row into a typed reading.
    ///
    /// Presence of all three fields is checked first, then the date, then the
    /// year bounds, and only then the temperature values.
    pub fn normalize(&self, row: &RawRow) -> Result<DailyReading, Rejection> {
        let date_value = row
            .get(DATE_COLUMN)
            .filter(|v| !v.is_null())
            .ok_or(Rejection::MissingDate)?;

        let max_value = Self::present(row, MAX_TEMPERATURE_COLUMN)?;
        let min_value = Self::present(row, MIN_TEMPERATURE_COLUMN)?;

        let date = Self::parse_date(date_value)?;

        if !self.config.contains_year(date.year()) {
            return Err(Rejection::OutOfRange { year: date.year() });
        }

        let max_temp = max_value.as_f64().ok_or(Rejection::MalformedTemperature)?;
        let min_temp = min_value.as_f64().ok_or(Rejection::MalformedTemperature)?;

        Ok(DailyReading::new(date, max_temp, min_temp))
    }

    /// Normalize every row, dropping rejections and letting a later row for the
    /// same day replace an earlier one.
    pub fn normalize_all(&self, rows: &[RawRow]) -> NormalizedReadings {
        let mut by_day: BTreeMap<DayKey, DailyReading> = BTreeMap::new();
        let mut rejections = RejectionCounts::default();
        let mut duplicate_days = 0;

        for (index, row) in rows.iter().enumerate() {
            match self.normalize(row) {
                Ok(reading) => {
                    if by_day.insert(reading.key(), reading).is_some() {
                        duplicate_days += 1;
                        debug!(row = index, key = ?reading.key(), "later row replaces earlier reading");
                    }
                }
                Err(rejection) => {
                    debug!(row = index, reason = %rejection, "skipping row");
                    rejections.record(&rejection);
                }
            }
        }

        NormalizedReadings {
            readings: by_day.into_values().collect(),
            rejections,
            duplicate_days,
        }
    }

    fn present<'a>(row: &'a RawRow, column: &str) -> Result<&'a RawValue, Rejection> {
        row.get(column)
            .filter(|v| !v.is_null())
            .ok_or(Rejection::MissingTemperature)
    }

    /// Parse a `YEAR-MONTH-DAY` date leniently: each part contributes its
    /// leading integer, so `2010-01-06 00:00:00` is 6 January. Month and day
    /// overflow rolls forward (`2010-02-30` is 2 March) and zero or negative
    /// values roll back.
    fn parse_date(value: &RawValue) -> Result<NaiveDate, Rejection> {
        let text = value.as_str().ok_or(Rejection::MalformedDate)?;
        let mut parts = text.trim().split('-');
        let mut next = || {
            parts
                .next()
                .and_then(leading_integer)
                .ok_or(Rejection::MalformedDate)
        };
        let (year, month, day) = (next()?, next()?, next()?);

        let month_index = year
            .checked_mul(12)
            .and_then(|m| m.checked_add(month))
            .and_then(|m| m.checked_sub(1))
            .ok_or(Rejection::MalformedDate)?;
        let year = i32::try_from(month_index.div_euclid(12)).map_err(|_| Rejection::MalformedDate)?;
        let first_of_month = NaiveDate::from_ymd_opt(year, month_index.rem_euclid(12) as u32 + 1, 1)
            .ok_or(Rejection::MalformedDate)?;

        let offset = day.checked_sub(1).ok_or(Rejection::MalformedDate)?;
        let date = if offset >= 0 {
            first_of_month.checked_add_days(Days::new(offset as u64))
        } else {
            first_of_month.checked_sub_days(Days::new(offset.unsigned_abs()))
        };
        date.ok_or(Rejection::MalformedDate)
    }
}

/// Optional sign followed by digits at the start of `part`, ignoring leading
/// whitespace and anything after the digits. `None` when there are no digits.
fn leading_integer(part: &str) -> Option<i64> {
    let part = part.trim_start();
    let sign_len = usize::from(part.starts_with(['+', '-']));
    let digits = part[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len() - sign_len);
    if digits == 0 {
        return None;
    }
    part[..sign_len + digits].parse().ok()
}
