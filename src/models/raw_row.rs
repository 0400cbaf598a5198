use crate::utils::constants::{DATE_COLUMN, MAX_TEMPERATURE_COLUMN, MIN_TEMPERATURE_COLUMN};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single untyped cell value as delivered by the table parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Null,
}

impl RawValue {
    /// Dynamic typing of a CSV field: empty becomes `Null`, numeric text becomes
    /// `Number`, anything else stays `Text`.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return RawValue::Null;
        }

        match trimmed.parse::<f64>() {
            Ok(value) => RawValue::Number(value),
            Err(_) => RawValue::Text(trimmed.to_string()),
        }
    }

    /// Numeric value, coercing numeric strings. Non-finite values are refused.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RawValue::Null => return None,
        };

        value.is_finite().then_some(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Column name to value mapping for one input row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    fields: HashMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the three columns the pipeline reads
    pub fn daily(
        date: impl Into<RawValue>,
        max_temperature: impl Into<RawValue>,
        min_temperature: impl Into<RawValue>,
    ) -> Self {
        Self::new()
            .with(DATE_COLUMN, date)
            .with(MAX_TEMPERATURE_COLUMN, max_temperature)
            .with(MIN_TEMPERATURE_COLUMN, min_temperature)
    }

    pub fn with(mut self, column: &str, value: impl Into<RawValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<RawValue>) {
        self.fields.insert(column.to_string(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.fields.get(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
