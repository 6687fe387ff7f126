//! Event model.
//!
//! An [`Event`] is the scheduled span (a care visit, a billable slot) for
//! which surcharges are computed.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A scheduled time-bounded event, half-open `[start, end)`.
///
/// Events are expected to end strictly after they start and to last at most
/// 24 hours. Use [`Event::new`] to get the first condition checked up front;
/// [`compute_event_surcharges`](crate::calculation::compute_event_surcharges)
/// checks it again because the fields are public.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::Event;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2022-06-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2022-06-01 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let event = Event::new(start, end).unwrap();
/// assert_eq!(event.duration().num_hours(), 3);
/// assert!(Event::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The start of the event (inclusive).
    pub start: NaiveDateTime,
    /// The end of the event (exclusive).
    pub end: NaiveDateTime,
}

impl Event {
    /// Creates an event, rejecting spans that do not end after they start.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        let event = Self { start, end };
        event.validate()?;
        Ok(event)
    }

    /// Checks that the event ends strictly after it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidEvent {
                start: self.start,
                end: self.end,
                message: "end must be after start".to_string(),
            });
        }
        Ok(())
    }

    /// The length of the event.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The calendar date the event starts on, which drives daily premiums.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// The day of the week the event starts on.
    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }
}
