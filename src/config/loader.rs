//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate plan
//! and its holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::compute_event_surcharges;
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayList;
use crate::models::{Event, RatePlan, Segment};

use super::types::SurchargeConfig;

/// Loads and provides access to surcharge configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rate_plan.yaml        # Daily and hourly premiums
/// └── public_holidays.yaml  # Optional list of { date, name }
/// ```
///
/// # Example
///
/// ```no_run
/// use surcharge_engine::config::ConfigLoader;
/// use surcharge_engine::models::Event;
/// use chrono::NaiveDateTime;
///
/// let loader = ConfigLoader::load("./config/default")?;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let event = Event::new(at("2022-07-14 08:00"), at("2022-07-14 12:00"))?;
///
/// for segment in loader.compute_event_surcharges(&event)? {
///     println!("{} {}% {} -> {}", segment.label, segment.percentage, segment.start, segment.end);
/// }
/// # Ok::<(), surcharge_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SurchargeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `rate_plan.yaml` is missing
    /// - Any file contains invalid YAML or an invalid `HH:MM` time
    ///
    /// A missing `public_holidays.yaml` yields an empty holiday list.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let plan = Self::load_yaml::<RatePlan>(&path.join("rate_plan.yaml"))?;

        let holidays_path = path.join("public_holidays.yaml");
        let holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidayList>(&holidays_path)?
        } else {
            HolidayList::default()
        };

        info!(
            path = %path.display(),
            public_holidays = holidays.holidays().len(),
            "Loaded surcharge configuration"
        );

        Ok(Self::from_parts(plan, holidays))
    }

    /// Builds a loader from an in-memory plan and holiday list.
    pub fn from_parts(plan: RatePlan, holidays: HolidayList) -> Self {
        Self {
            config: SurchargeConfig::new(plan, holidays),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying surcharge configuration.
    pub fn config(&self) -> &SurchargeConfig {
        &self.config
    }

    /// Returns the rate plan.
    pub fn plan(&self) -> &RatePlan {
        self.config.plan()
    }

    /// Returns the public holiday list.
    pub fn holidays(&self) -> &HolidayList {
        self.config.holidays()
    }

    /// Computes the surcharges of `event` with the loaded plan and holidays.
    pub fn compute_event_surcharges(&self, event: &Event) -> EngineResult<Vec<Segment>> {
        compute_event_surcharges(event, self.plan(), self.holidays())
    }
}
