//! Core data models for the surcharge engine.
//!
//! This module contains the value types exchanged with callers: the event
//! being priced, the rate plan it is evaluated against, and the segments
//! produced.

mod event;
mod public_holiday;
mod rate_plan;
mod segment;
mod time_of_day;

pub use event::Event;
pub use public_holiday::PublicHoliday;
pub use rate_plan::{DailyCategory, HourlyCategory, HourlyWindow, RatePlan};
pub use segment::Segment;
pub use time_of_day::TimeOfDay;
