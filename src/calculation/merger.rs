//! Surcharge computation entry point.
//!
//! Combines the daily premium with the hourly segments: hourly slices that
//! pay more than the daily rate override it, and the rest of the event is
//! charged at the daily rate.

use chrono::Duration;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::holidays::HolidayCalendar;
use crate::models::{Event, RatePlan, Segment};

use super::daily_premium::select_daily;
use super::hourly_window::hourly_segments;
use super::interval::{Interval, subtract_all};

/// Merges a daily premium with hourly segments.
///
/// - Without a daily premium, the hourly segments are returned unchanged.
/// - Hourly segments strictly above the daily percentage win their slice.
///   Equal percentages go to the daily rate.
/// - Without winners the daily segment is returned alone, even at 0%.
/// - Otherwise the daily span minus the winners is returned as daily
///   segments in chronological order, followed by the winners in start order.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::merge_surcharges;
/// use surcharge_engine::models::Segment;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let segment = |pct: i64, label: &str, start: &str, end: &str| Segment {
///     percentage: Decimal::new(pct, 0),
///     label: label.to_string(),
///     start: at(start),
///     end: at(end),
/// };
///
/// let daily = segment(25, "Samedi", "2022-06-04 10:00", "2022-06-04 23:00");
/// let hourly = vec![segment(30, "Soirée", "2022-06-04 20:00", "2022-06-04 22:00")];
///
/// let merged = merge_surcharges(Some(daily), hourly);
/// let labels: Vec<&str> = merged.iter().map(|s| s.label.as_str()).collect();
/// assert_eq!(labels, ["Samedi", "Samedi", "Soirée"]);
/// ```
pub fn merge_surcharges(daily: Option<Segment>, hourly: Vec<Segment>) -> Vec<Segment> {
    let Some(daily) = daily else {
        return hourly;
    };

    let mut winners: Vec<Segment> = hourly
        .into_iter()
        .filter(|s| s.percentage > daily.percentage)
        .collect();

    if winners.is_empty() {
        return vec![daily];
    }

    winners.sort_by_key(|s| s.start);

    if winners.windows(2).any(|pair| pair[1].start < pair[0].end) {
        warn!(
            daily = %daily.label,
            winners = winners.len(),
            "Hourly windows overlap; overlapping slices are emitted as is"
        );
    }

    let cuts: Vec<Interval> = winners.iter().map(Interval::from).collect();
    let mut merged: Vec<Segment> = subtract_all(Interval::from(&daily), &cuts)
        .into_iter()
        .map(|gap| Segment {
            percentage: daily.percentage,
            label: daily.label.clone(),
            start: gap.start,
            end: gap.end,
        })
        .collect();
    merged.extend(winners);
    merged
}

/// Computes the surcharge segments of `event` under `plan`.
///
/// `holidays` answers whether the event's start date is a public holiday.
/// An empty result means no premium applies anywhere in the event.
///
/// Events are expected to last at most 24 hours. Longer events are
/// evaluated all the same, with daily premiums taken from the start date
/// and hourly windows anchored on the start date and the day before.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEvent`](crate::error::EngineError::InvalidEvent)
/// if the event does not end after it starts.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::compute_event_surcharges;
/// use surcharge_engine::holidays::FrenchPublicHolidays;
/// use surcharge_engine::models::{Event, HourlyWindow, RatePlan};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let plan = RatePlan {
///     evening: Some(HourlyWindow {
///         percentage: Some(Decimal::new(10, 0)),
///         start: "20:00".parse().unwrap(),
///         end: "07:00".parse().unwrap(),
///     }),
///     ..RatePlan::default()
/// };
/// let event = Event::new(at("2022-06-01 18:00"), at("2022-06-01 22:00")).unwrap();
///
/// let segments = compute_event_surcharges(&event, &plan, &FrenchPublicHolidays).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].label, "Soirée");
/// assert_eq!(segments[0].start, at("2022-06-01 20:00"));
/// ```
pub fn compute_event_surcharges<H>(
    event: &Event,
    plan: &RatePlan,
    holidays: &H,
) -> EngineResult<Vec<Segment>>
where
    H: HolidayCalendar + ?Sized,
{
    event.validate()?;

    if event.duration() > Duration::hours(24) {
        warn!(
            start = %event.start,
            end = %event.end,
            "Event longer than 24 hours; only the start date is used for daily premiums"
        );
    }

    let daily = select_daily(event, plan, holidays);
    let hourly = hourly_segments(event, plan);
    let segments = merge_surcharges(daily, hourly);

    debug!(
        start = %event.start,
        end = %event.end,
        segments = segments.len(),
        "Surcharges computed"
    );

    Ok(segments)
}
