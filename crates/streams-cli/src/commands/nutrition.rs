//! External nutrition provider interface.
//!
//! The import command consumes a read-only provider of per-day nutrition
//! totals. A day with no "calories" total counts as having no data and is
//! skipped without error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use streams_core::Value;

/// Named numeric totals for one day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayTotals {
    pub calories: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub protein: Option<f64>,
    pub sugar: Option<f64>,
}

impl DayTotals {
    /// Entry contents for this day, keyed by field name.
    ///
    /// `None` when there is no calories total - the provider has no data
    /// for the day.
    #[must_use]
    pub fn contents(&self) -> Option<BTreeMap<String, Value>> {
        let calories = self.calories?;
        let mut contents = BTreeMap::from([("calories".to_string(), Value::from(calories))]);
        if let Some(carbs) = self.carbohydrates {
            contents.insert("carbs".to_string(), Value::from(carbs));
        }
        if let Some(fat) = self.fat {
            contents.insert("fat".to_string(), Value::from(fat));
        }
        if let Some(protein) = self.protein {
            contents.insert("protein".to_string(), Value::from(protein));
        }
        if let Some(sugar) = self.sugar {
            contents.insert("sugar".to_string(), Value::from(sugar));
        }
        Some(contents)
    }
}

/// A read-only source of per-day nutrition totals.
pub trait NutritionProvider {
    /// Totals for one day; `None` when the provider has nothing for it.
    fn day_totals(&self, day: NaiveDate) -> Result<Option<DayTotals>>;
}

/// Provider backed by a JSON export file keyed by calendar date.
#[derive(Debug)]
pub struct FileProvider {
    days: BTreeMap<NaiveDate, DayTotals>,
}

impl FileProvider {
    /// Loads a `{"YYYY-MM-DD": {"calories": ..., ...}, ...}` export.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let days = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Self { days })
    }
}

impl NutritionProvider for FileProvider {
    fn day_totals(&self, day: NaiveDate) -> Result<Option<DayTotals>> {
        Ok(self.days.get(&day).cloned())
    }
}
