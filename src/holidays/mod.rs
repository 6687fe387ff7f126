//! Public holiday calendars.
//!
//! The daily premium selector needs a single answer from its host: is this
//! date a public holiday? That question is modelled by [`HolidayCalendar`]
//! and always passed in explicitly, so surcharge computation never depends
//! on ambient state.
//!
//! # Example
//!
//! ```
//! use surcharge_engine::holidays::{FrenchPublicHolidays, HolidayCalendar, NoPublicHolidays};
//! use chrono::NaiveDate;
//!
//! let bastille_day = NaiveDate::from_ymd_opt(2022, 7, 14).unwrap();
//! assert!(FrenchPublicHolidays.is_public_holiday(bastille_day));
//! assert!(!NoPublicHolidays.is_public_holiday(bastille_day));
//!
//! // Any predicate works as a calendar.
//! let only_bastille_day = |date: NaiveDate| date == bastille_day;
//! assert!(only_bastille_day.is_public_holiday(bastille_day));
//! ```

mod french;
mod list;

use chrono::NaiveDate;

pub use french::{FrenchPublicHolidays, easter_sunday};
pub use list::HolidayList;

/// Answers whether a calendar date is a public holiday.
///
/// Implementations must be read-only and side-effect free.
pub trait HolidayCalendar {
    /// Returns `true` if `date` is a public holiday.
    fn is_public_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// A calendar without any public holidays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPublicHolidays;

impl HolidayCalendar for NoPublicHolidays {
    fn is_public_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
