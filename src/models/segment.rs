//! Output segment model.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One contiguous, percentage-tagged slice of an event.
///
/// The output of a surcharge computation is a list of segments that never
/// overlap. Whenever a daily premium applies, the segments also cover the
/// whole event with no gaps.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::Segment;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let segment = Segment {
///     percentage: Decimal::new(10, 0),
///     label: "Soirée".to_string(),
///     start: NaiveDateTime::parse_from_str("2022-06-01 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2022-06-01 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(segment.hours(), Decimal::new(35, 1)); // 3.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The markup applied to the base rate over this slice, in percent.
    pub percentage: Decimal,
    /// Human readable name of the premium (e.g. "Samedi", "Soirée").
    pub label: String,
    /// The start of the slice (inclusive).
    pub start: NaiveDateTime,
    /// The end of the slice (exclusive).
    pub end: NaiveDateTime,
}

impl Segment {
    /// The length of the slice.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The length of the slice in hours, at minute precision.
    pub fn hours(&self) -> Decimal {
        Decimal::new(self.duration().num_minutes(), 0) / Decimal::new(60, 0)
    }
}
