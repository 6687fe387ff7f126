//! Hourly window segmentation.
//!
//! An hourly window is a clock-time range such as 20:00-07:00 that repeats
//! every day. For a given event this module finds the portions of the event
//! that fall inside the window, handling windows that cross midnight.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Event, HourlyCategory, RatePlan, Segment, TimeOfDay};

use super::interval::{Interval, intersect};

/// Instantiates the window opening on `anchor` as absolute timestamps.
fn window_on(anchor: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Option<Interval> {
    let window_start = anchor.and_time(start.to_naive_time());
    let mut window_end: NaiveDateTime = anchor.and_time(end.to_naive_time());
    if end <= start {
        window_end = window_end.checked_add_signed(Duration::days(1))?;
    }
    Some(Interval::new(window_start, window_end))
}

/// Finds the portions of `event` inside the daily window `[window_start, window_end)`.
///
/// Returns nothing when `percentage` is absent, zero or negative. Otherwise
/// the window is anchored on the event's start date and on the day before,
/// and each anchored occurrence that overlaps the event yields one segment.
/// The result holds 0, 1 or 2 segments in ascending start order.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::segment_window;
/// use surcharge_engine::models::Event;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let event = Event::new(at("2022-06-01 05:00"), at("2022-06-01 23:00")).unwrap();
/// let segments = segment_window(
///     &event,
///     "20:00".parse().unwrap(),
///     "07:00".parse().unwrap(),
///     Some(Decimal::new(10, 0)),
///     "Soirée",
/// );
///
/// // The tail of last night's window and the head of tonight's.
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].start, at("2022-06-01 05:00"));
/// assert_eq!(segments[0].end, at("2022-06-01 07:00"));
/// assert_eq!(segments[1].start, at("2022-06-01 20:00"));
/// assert_eq!(segments[1].end, at("2022-06-01 23:00"));
/// ```
pub fn segment_window(
    event: &Event,
    window_start: TimeOfDay,
    window_end: TimeOfDay,
    percentage: Option<Decimal>,
    label: &str,
) -> Vec<Segment> {
    let Some(percentage) = percentage.filter(|p| *p > Decimal::ZERO) else {
        return Vec::new();
    };

    let event_span = Interval::from(*event);
    let same_day = event.start_date();
    let anchors = [Some(same_day), same_day.pred_opt()];

    let mut segments: Vec<Segment> = anchors
        .into_iter()
        .flatten()
        .filter_map(|anchor| window_on(anchor, window_start, window_end))
        .filter_map(|window| intersect(event_span, window))
        .map(|overlap| Segment {
            percentage,
            label: label.to_string(),
            start: overlap.start,
            end: overlap.end,
        })
        .collect();

    segments.sort_by_key(|s| s.start);
    segments
}

/// Segments `event` against every hourly window of `plan`.
///
/// Evening segments come first, then custom ones. Each group is in start
/// order but the groups are not interleaved.
pub fn hourly_segments(event: &Event, plan: &RatePlan) -> Vec<Segment> {
    HourlyCategory::ALL
        .into_iter()
        .filter_map(|category| category.window(plan).map(|window| (category, window)))
        .flat_map(|(category, window)| {
            segment_window(
                event,
                window.start,
                window.end,
                window.percentage,
                category.label(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourlyWindow;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn event(start: (&str, &str), end: (&str, &str)) -> Event {
        Event::new(make_datetime(start.0, start.1), make_datetime(end.0, end.1)).unwrap()
    }

    fn bounds(segments: &[Segment]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        segments.iter().map(|s| (s.start, s.end)).collect()
    }

    // ==========================================================================
    // HW-001: overnight window yields the tail of last night and head of tonight
    // ==========================================================================
    #[test]
    fn test_hw_001_overnight_window_two_segments() {
        let e = event(("2022-06-01", "05:00:00"), ("2022-06-01", "23:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("07:00"), Some(dec("10")), "Soirée");

        assert_eq!(
            bounds(&segments),
            vec![
                (
                    make_datetime("2022-06-01", "05:00:00"),
                    make_datetime("2022-06-01", "07:00:00")
                ),
                (
                    make_datetime("2022-06-01", "20:00:00"),
                    make_datetime("2022-06-01", "23:00:00")
                ),
            ]
        );
        assert!(segments.iter().all(|s| s.percentage == dec("10") && s.label == "Soirée"));
    }

    // ==========================================================================
    // HW-002: disabled windows produce nothing
    // ==========================================================================
    #[test]
    fn test_hw_002_disabled_percentages() {
        let e = event(("2022-06-01", "05:00:00"), ("2022-06-01", "23:00:00"));
        for percentage in [None, Some(dec("0")), Some(dec("-10"))] {
            let segments = segment_window(&e, tod("20:00"), tod("07:00"), percentage, "Soirée");
            assert!(segments.is_empty(), "{percentage:?} should disable the window");
        }
    }

    #[test]
    fn test_event_inside_daytime_window() {
        let e = event(("2022-06-01", "12:30:00"), ("2022-06-01", "13:30:00"));
        let segments = segment_window(&e, tod("12:00"), tod("14:00"), Some(dec("40")), "Personnalisée");
        assert_eq!(
            bounds(&segments),
            vec![(
                make_datetime("2022-06-01", "12:30:00"),
                make_datetime("2022-06-01", "13:30:00")
            )]
        );
    }

    #[test]
    fn test_event_outside_window() {
        let e = event(("2022-06-01", "09:00:00"), ("2022-06-01", "17:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("07:00"), Some(dec("10")), "Soirée");
        assert!(segments.is_empty());
    }

    #[test]
    fn test_event_touching_window_boundary() {
        let e = event(("2022-06-01", "07:00:00"), ("2022-06-01", "20:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("07:00"), Some(dec("10")), "Soirée");
        assert!(segments.is_empty());
    }

    #[test]
    fn test_overnight_event_inside_overnight_window() {
        let e = event(("2022-06-01", "22:00:00"), ("2022-06-02", "06:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("07:00"), Some(dec("10")), "Soirée");
        assert_eq!(
            bounds(&segments),
            vec![(
                make_datetime("2022-06-01", "22:00:00"),
                make_datetime("2022-06-02", "06:00:00")
            )]
        );
    }

    #[test]
    fn test_early_morning_event_uses_previous_day_anchor() {
        let e = event(("2022-06-01", "02:00:00"), ("2022-06-01", "09:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("07:00"), Some(dec("10")), "Soirée");
        assert_eq!(
            bounds(&segments),
            vec![(
                make_datetime("2022-06-01", "02:00:00"),
                make_datetime("2022-06-01", "07:00:00")
            )]
        );
    }

    #[test]
    fn test_equal_bounds_cover_the_whole_day() {
        let e = event(("2022-06-01", "09:00:00"), ("2022-06-01", "17:00:00"));
        let segments = segment_window(&e, tod("00:00"), tod("00:00"), Some(dec("5")), "Personnalisée");
        assert_eq!(
            bounds(&segments),
            vec![(
                make_datetime("2022-06-01", "09:00:00"),
                make_datetime("2022-06-01", "17:00:00")
            )]
        );
    }

    #[test]
    fn test_window_ending_at_midnight() {
        let e = event(("2022-06-01", "21:00:00"), ("2022-06-02", "01:00:00"));
        let segments = segment_window(&e, tod("20:00"), tod("00:00"), Some(dec("10")), "Soirée");
        assert_eq!(
            bounds(&segments),
            vec![(
                make_datetime("2022-06-01", "21:00:00"),
                make_datetime("2022-06-02", "00:00:00")
            )]
        );
    }

    // ==========================================================================
    // hourly_segments: evening first, then custom
    // ==========================================================================
    #[test]
    fn test_hourly_segments_keeps_category_order() {
        let plan = RatePlan {
            evening: Some(HourlyWindow {
                percentage: Some(dec("30")),
                start: tod("20:00"),
                end: tod("22:00"),
            }),
            custom: Some(HourlyWindow {
                percentage: Some(dec("40")),
                start: tod("12:00"),
                end: tod("14:00"),
            }),
            ..RatePlan::default()
        };
        let e = event(("2022-06-01", "10:00:00"), ("2022-06-01", "23:00:00"));
        let segments = hourly_segments(&e, &plan);

        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Soirée", "Personnalisée"]);
        assert_eq!(segments[0].start, make_datetime("2022-06-01", "20:00:00"));
        assert_eq!(segments[1].start, make_datetime("2022-06-01", "12:00:00"));
    }

    #[test]
    fn test_hourly_segments_without_windows() {
        let e = event(("2022-06-01", "10:00:00"), ("2022-06-01", "23:00:00"));
        assert!(hourly_segments(&e, &RatePlan::default()).is_empty());
    }
}
