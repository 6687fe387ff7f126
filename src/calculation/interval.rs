//! Half-open time interval primitives.
//!
//! The hourly segmenter intersects events with clock windows and the merger
//! subtracts winning hourly slices from the daily span. Both are built on
//! the [`Interval`] type defined here.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Event, Segment};

/// A half-open time interval `[start, end)`.
///
/// Intervals where `start >= end` are empty. Empty intervals are never
/// returned by [`intersect`] or [`subtract_all`].
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::{Interval, intersect};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let morning = Interval::new(at("2022-06-01 08:00"), at("2022-06-01 12:00"));
/// let lunch = Interval::new(at("2022-06-01 11:00"), at("2022-06-01 14:00"));
/// let afternoon = Interval::new(at("2022-06-01 12:00"), at("2022-06-01 17:00"));
///
/// assert_eq!(
///     intersect(morning, lunch),
///     Some(Interval::new(at("2022-06-01 11:00"), at("2022-06-01 12:00")))
/// );
/// // Touching intervals do not intersect.
/// assert_eq!(intersect(morning, afternoon), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// The start of the interval (inclusive).
    pub start: NaiveDateTime,
    /// The end of the interval (exclusive).
    pub end: NaiveDateTime,
}

impl Interval {
    /// Creates an interval from its bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the interval contains no instant.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The length of the interval, zero when empty.
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }

    /// Returns `true` if `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<Event> for Interval {
    fn from(event: Event) -> Self {
        Self::new(event.start, event.end)
    }
}

impl From<&Segment> for Interval {
    fn from(segment: &Segment) -> Self {
        Self::new(segment.start, segment.end)
    }
}

/// Intersects two intervals.
///
/// Returns `None` when the overlap is empty, including when the intervals
/// only touch at a boundary.
pub fn intersect(a: Interval, b: Interval) -> Option<Interval> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (start < end).then_some(Interval { start, end })
}

/// Subtracts a set of cuts from `base`, returning what remains in order.
///
/// `cuts` must be sorted by ascending start and lie within `base`. The
/// cursor only ever moves forward, so overlapping cuts are tolerated and
/// simply merged. Returns between zero and `cuts.len() + 1` non-empty
/// intervals.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::{Interval, subtract_all};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let day = Interval::new(at("2022-06-01 10:00"), at("2022-06-01 23:00"));
/// let cuts = [
///     Interval::new(at("2022-06-01 12:00"), at("2022-06-01 14:00")),
///     Interval::new(at("2022-06-01 20:00"), at("2022-06-01 22:00")),
/// ];
///
/// let remainder = subtract_all(day, &cuts);
/// assert_eq!(remainder.len(), 3);
/// assert_eq!(remainder[1], Interval::new(at("2022-06-01 14:00"), at("2022-06-01 20:00")));
/// ```
pub fn subtract_all(base: Interval, cuts: &[Interval]) -> Vec<Interval> {
    let mut remainder = Vec::with_capacity(cuts.len() + 1);
    let mut cursor = base.start;

    for cut in cuts {
        if cursor < cut.start {
            remainder.push(Interval::new(cursor, cut.start));
        }
        cursor = cursor.max(cut.end);
    }

    if cursor < base.end {
        remainder.push(Interval::new(cursor, base.end));
    }

    remainder
}
