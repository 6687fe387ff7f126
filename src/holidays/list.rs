//! Explicit public holiday lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PublicHoliday;

use super::HolidayCalendar;

/// A calendar backed by an explicit list of holidays, as loaded from
/// `public_holidays.yaml`.
///
/// # Example
///
/// ```
/// use surcharge_engine::holidays::{HolidayCalendar, HolidayList};
/// use surcharge_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let list = HolidayList::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2022, 4, 18).unwrap(),
///     name: "Lundi de Pâques".to_string(),
/// }]);
///
/// assert!(list.is_public_holiday(NaiveDate::from_ymd_opt(2022, 4, 18).unwrap()));
/// assert!(!list.is_public_holiday(NaiveDate::from_ymd_opt(2022, 4, 19).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayList {
    holidays: Vec<PublicHoliday>,
}

impl HolidayList {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self { holidays }
    }

    /// The holidays in this calendar.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Finds the holiday falling on `date`, if any.
    pub fn find(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        self.holidays.iter().find(|h| h.date == date)
    }
}

impl HolidayCalendar for HolidayList {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.find(date).is_some()
    }
}
