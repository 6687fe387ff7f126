//! Configuration types for surcharge computation.

use crate::holidays::HolidayList;
use crate::models::RatePlan;

/// The complete surcharge configuration loaded from YAML files.
///
/// Aggregates the rate plan with the public holiday list used as the
/// holiday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurchargeConfig {
    /// The rate plan events are evaluated against.
    plan: RatePlan,
    /// Public holidays recognised by the daily premium selector.
    holidays: HolidayList,
}

impl SurchargeConfig {
    /// Creates a new SurchargeConfig from its component parts.
    pub fn new(plan: RatePlan, holidays: HolidayList) -> Self {
        Self { plan, holidays }
    }

    /// Returns the rate plan.
    pub fn plan(&self) -> &RatePlan {
        &self.plan
    }

    /// Returns the public holiday list.
    pub fn holidays(&self) -> &HolidayList {
        &self.holidays
    }
}
