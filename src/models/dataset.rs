use serde::{Deserialize, Serialize};

/// One calendar day inside a month cell. Both temperatures are `None` when no
/// reading exists for the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTemp {
    pub day: u32,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

impl DailyTemp {
    pub fn missing(day: u32) -> Self {
        Self {
            day,
            max_temp: None,
            min_temp: None,
        }
    }

    pub fn observed(day: u32, max_temp: f64, min_temp: f64) -> Self {
        Self {
            day,
            max_temp: Some(max_temp),
            min_temp: Some(min_temp),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.max_temp.is_none() && self.min_temp.is_none()
    }
}

/// Per-month summary pair.
///
/// Despite the `avg` names these hold extremes: `avg_max` is the highest daily
/// maximum of the month and `avg_min` the lowest daily minimum, both rounded to
/// one decimal. Consumers key on these field names, so they are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub avg_max: Option<f64>,
    pub avg_min: Option<f64>,
}

/// One (year, month) cell of the heatmap grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub year: i32,
    #[serde(rename = "month")]
    pub month_index: u32,
    pub month_name: String,
    /// Highest daily maximum of the month, see [`MonthSummary`]
    pub avg_max: Option<f64>,
    /// Lowest daily minimum of the month, see [`MonthSummary`]
    pub avg_min: Option<f64>,
    pub daily_temps: Vec<DailyTemp>,
}

impl MonthCell {
    pub fn summary(&self) -> MonthSummary {
        MonthSummary {
            avg_max: self.avg_max,
            avg_min: self.avg_min,
        }
    }

    pub fn has_data(&self) -> bool {
        self.avg_max.is_some() || self.avg_min.is_some()
    }

    pub fn observed_days(&self) -> usize {
        self.daily_temps.iter().filter(|d| !d.is_missing()).count()
    }

    pub fn missing_days(&self) -> usize {
        self.daily_temps.len() - self.observed_days()
    }
}

/// The gap-filled grid handed to rendering collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDataset {
    pub years: Vec<i32>,
    pub months: Vec<String>,
    pub data: Vec<MonthCell>,
}

impl ProcessedDataset {
    /// Look up the cell for `year` and zero-based `month_index`
    pub fn cell(&self, year: i32, month_index: u32) -> Option<&MonthCell> {
        let first_year = *self.years.first()?;
        if year < first_year || month_index as usize >= self.months.len() {
            return None;
        }

        let offset = (year - first_year) as usize * self.months.len() + month_index as usize;
        self.data
            .get(offset)
            .filter(|c| c.year == year && c.month_index == month_index)
    }

    pub fn cells_for_year(&self, year: i32) -> impl Iterator<Item = &MonthCell> {
        self.data.iter().filter(move |c| c.year == year)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
