use crate::error::Result;
use crate::utils::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_END_YEAR, DEFAULT_START_YEAR, LEVEL2_START_YEAR,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

/// Preset year ranges for the two dataset views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatasetLevel {
    /// Full history, 1997 through 2017
    #[default]
    Level1,
    /// Recent decade, 2008 through 2017
    Level2,
}

impl DatasetLevel {
    pub fn year_bounds(&self) -> (i32, i32) {
        match self {
            DatasetLevel::Level1 => (DEFAULT_START_YEAR, DEFAULT_END_YEAR),
            DatasetLevel::Level2 => (LEVEL2_START_YEAR, DEFAULT_END_YEAR),
        }
    }
}

/// Inclusive year bounds for one pipeline run. Only constructed through
/// validated paths, so `start_year <= end_year` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_year_order"))]
pub struct PipelineConfig {
    #[validate(range(min = 1, max = 9999))]
    start_year: i32,

    #[validate(range(min = 1, max = 9999))]
    end_year: i32,
}

/// Unvalidated shape of the configuration sources
#[derive(Debug, Deserialize)]
struct YearBounds {
    start_year: i32,
    end_year: i32,
}

fn validate_year_order(config: &PipelineConfig) -> std::result::Result<(), ValidationError> {
    if config.start_year > config.end_year {
        let mut error = ValidationError::new("year_order");
        error.message = Some(
            format!(
                "start_year {} is after end_year {}",
                config.start_year, config.end_year
            )
            .into(),
        );
        return Err(error);
    }

    Ok(())
}

impl PipelineConfig {
    pub fn new(start_year: i32, end_year: i32) -> Result<Self> {
        let config = Self {
            start_year,
            end_year,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn for_level(level: DatasetLevel) -> Self {
        let (start_year, end_year) = level.year_bounds();
        Self {
            start_year,
            end_year,
        }
    }

    /// Layered load: level 1 defaults, then the optional file, then
    /// `TEMPERATURE_GRID_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("start_year", i64::from(defaults.start_year))?
            .set_default("end_year", i64::from(defaults.end_year))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true))
            .build()?;

        let bounds: YearBounds = settings.try_deserialize()?;
        Self::new(bounds.start_year, bounds.end_year)
    }

    /// Apply explicit overrides, re-validating the result
    pub fn with_overrides(self, start_year: Option<i32>, end_year: Option<i32>) -> Result<Self> {
        Self::new(
            start_year.unwrap_or(self.start_year),
            end_year.unwrap_or(self.end_year),
        )
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    pub fn year_count(&self) -> usize {
        (i64::from(self.end_year) - i64::from(self.start_year) + 1).max(0) as usize
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_level(DatasetLevel::default())
    }
}
