//! Daily premium selection.
//!
//! Day-level premiums (specific dates, public holidays, weekends) never vary
//! within a day, so at most one of them applies and it covers the whole
//! event. This module decides which one.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::debug;

use crate::holidays::HolidayCalendar;
use crate::models::{DailyCategory, Event, RatePlan, Segment};

/// Specific dates, in priority order. Any of them outranks a generic public
/// holiday falling on the same date, whatever the percentages.
const SPECIFIC_DATES: [(u32, u32, DailyCategory); 3] = [
    (12, 25, DailyCategory::TwentyFifthOfDecember),
    (5, 1, DailyCategory::FirstOfMay),
    (1, 1, DailyCategory::FirstOfJanuary),
];

/// A daily category together with its configured percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    category: DailyCategory,
    percentage: Decimal,
}

impl Candidate {
    fn configured(category: DailyCategory, plan: &RatePlan) -> Option<Self> {
        category
            .percentage(plan)
            .map(|percentage| Self { category, percentage })
    }
}

/// Finds the holiday candidate for `date`.
///
/// Specific dates are checked first, then the public holiday calendar.
/// Categories the plan leaves unset are skipped.
fn holiday_candidate<H>(date: NaiveDate, plan: &RatePlan, holidays: &H) -> Option<Candidate>
where
    H: HolidayCalendar + ?Sized,
{
    let specific = SPECIFIC_DATES
        .iter()
        .filter(|(month, day, _)| date.month() == *month && date.day() == *day)
        .find_map(|&(_, _, category)| Candidate::configured(category, plan));

    specific.or_else(|| {
        if holidays.is_public_holiday(date) {
            Candidate::configured(DailyCategory::PublicHoliday, plan)
        } else {
            None
        }
    })
}

fn weekend_candidate(weekday: Weekday, plan: &RatePlan) -> Option<Candidate> {
    match weekday {
        Weekday::Sat => Candidate::configured(DailyCategory::Saturday, plan),
        Weekday::Sun => Candidate::configured(DailyCategory::Sunday, plan),
        _ => None,
    }
}

/// Selects the single calendar-based premium applying to `event`, if any.
///
/// The event's start date drives the decision:
/// 1. The holiday candidate is the first configured match among December 25,
///    May 1, January 1 and then a public holiday according to `holidays`.
/// 2. The weekend candidate is Saturday or Sunday.
/// 3. When both exist the higher percentage wins; the holiday wins ties.
///
/// The winner always spans the whole event. Its percentage may be zero and
/// is still reported.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::select_daily;
/// use surcharge_engine::holidays::NoPublicHolidays;
/// use surcharge_engine::models::{Event, RatePlan};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// // 2022-01-01 is a Saturday
/// let event = Event::new(at("2022-01-01 12:00"), at("2022-01-01 14:00")).unwrap();
/// let plan = RatePlan {
///     first_of_january: Some(Decimal::new(90, 0)),
///     saturday: Some(Decimal::new(12, 0)),
///     public_holiday: Some(Decimal::new(100, 0)),
///     ..RatePlan::default()
/// };
///
/// let daily = select_daily(&event, &plan, &NoPublicHolidays).unwrap();
/// assert_eq!(daily.label, "1er Janvier");
/// assert_eq!(daily.percentage, Decimal::new(90, 0));
/// ```
pub fn select_daily<H>(event: &Event, plan: &RatePlan, holidays: &H) -> Option<Segment>
where
    H: HolidayCalendar + ?Sized,
{
    let date = event.start_date();
    let holiday = holiday_candidate(date, plan, holidays);
    let weekend = weekend_candidate(event.weekday(), plan);

    let winner = match (holiday, weekend) {
        (Some(holiday), Some(weekend)) => {
            if weekend.percentage > holiday.percentage {
                weekend
            } else {
                holiday
            }
        }
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return None,
    };

    debug!(
        date = %date,
        category = %winner.category,
        percentage = %winner.percentage,
        "Daily premium selected"
    );

    Some(Segment {
        percentage: winner.percentage,
        label: winner.category.label().to_string(),
        start: event.start,
        end: event.end,
    })
}
