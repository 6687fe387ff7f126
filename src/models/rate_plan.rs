//! Rate plan model and surcharge categories.
//!
//! A [`RatePlan`] lists which calendar conditions and clock-time windows
//! command a markup. Every field is optional. Categories are exposed as
//! [`DailyCategory`] and [`HourlyCategory`] so that the selection rules can
//! match on them exhaustively.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A clock-time window with its markup, e.g. evenings from 20:00 to 07:00.
///
/// When `end <= start` the window crosses midnight and ends on the next day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyWindow {
    /// The markup in percent. Absent, zero or negative disables the window.
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// Clock time the window opens.
    pub start: TimeOfDay,
    /// Clock time the window closes.
    pub end: TimeOfDay,
}

impl HourlyWindow {
    /// Whether the window wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// The markup if the window is enabled (strictly positive percentage).
    pub fn active_percentage(&self) -> Option<Decimal> {
        self.percentage.filter(|p| *p > Decimal::ZERO)
    }
}

/// The surcharge configuration an event is evaluated against.
///
/// Daily percentages may be zero and are still reported when their date
/// matches. Hourly windows only produce segments with a positive percentage.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::RatePlan;
/// use rust_decimal::Decimal;
///
/// let plan: RatePlan = serde_json::from_str(r#"{
///     "saturday": 25,
///     "firstOfMay": 100,
///     "evening": { "percentage": 10, "start": "20:00", "end": "07:00" }
/// }"#).unwrap();
///
/// assert_eq!(plan.saturday, Some(Decimal::new(25, 0)));
/// assert!(plan.evening.unwrap().crosses_midnight());
/// assert!(plan.custom.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    /// Saturday premium.
    #[serde(default)]
    pub saturday: Option<Decimal>,
    /// Sunday premium.
    #[serde(default)]
    pub sunday: Option<Decimal>,
    /// Generic public holiday premium.
    #[serde(default)]
    pub public_holiday: Option<Decimal>,
    /// December 25 premium.
    #[serde(default)]
    pub twenty_fifth_of_december: Option<Decimal>,
    /// May 1 premium.
    #[serde(default)]
    pub first_of_may: Option<Decimal>,
    /// January 1 premium.
    #[serde(default)]
    pub first_of_january: Option<Decimal>,
    /// Evening window ("Soirée").
    #[serde(default)]
    pub evening: Option<HourlyWindow>,
    /// Free-form window ("Personnalisée").
    #[serde(default)]
    pub custom: Option<HourlyWindow>,
}

/// A premium selected by calendar date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyCategory {
    /// ISO weekday 6.
    Saturday,
    /// ISO weekday 7.
    Sunday,
    /// Any date the holiday calendar recognises.
    PublicHoliday,
    /// December 25.
    TwentyFifthOfDecember,
    /// May 1.
    FirstOfMay,
    /// January 1.
    FirstOfJanuary,
}

impl DailyCategory {
    /// The label carried by segments of this category.
    pub fn label(self) -> &'static str {
        match self {
            DailyCategory::Saturday => "Samedi",
            DailyCategory::Sunday => "Dimanche",
            DailyCategory::PublicHoliday => "Jours fériés",
            DailyCategory::TwentyFifthOfDecember => "25 Décembre",
            DailyCategory::FirstOfMay => "1er Mai",
            DailyCategory::FirstOfJanuary => "1er Janvier",
        }
    }

    /// The configured percentage for this category, if any.
    pub fn percentage(self, plan: &RatePlan) -> Option<Decimal> {
        match self {
            DailyCategory::Saturday => plan.saturday,
            DailyCategory::Sunday => plan.sunday,
            DailyCategory::PublicHoliday => plan.public_holiday,
            DailyCategory::TwentyFifthOfDecember => plan.twenty_fifth_of_december,
            DailyCategory::FirstOfMay => plan.first_of_may,
            DailyCategory::FirstOfJanuary => plan.first_of_january,
        }
    }
}

impl fmt::Display for DailyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A premium selected by clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyCategory {
    /// The evening window.
    Evening,
    /// The custom window.
    Custom,
}

impl HourlyCategory {
    /// Hourly categories in evaluation order.
    pub const ALL: [HourlyCategory; 2] = [HourlyCategory::Evening, HourlyCategory::Custom];

    /// The label carried by segments of this category.
    pub fn label(self) -> &'static str {
        match self {
            HourlyCategory::Evening => "Soirée",
            HourlyCategory::Custom => "Personnalisée",
        }
    }

    /// The configured window for this category, if any.
    pub fn window(self, plan: &RatePlan) -> Option<&HourlyWindow> {
        match self {
            HourlyCategory::Evening => plan.evening.as_ref(),
            HourlyCategory::Custom => plan.custom.as_ref(),
        }
    }
}

impl fmt::Display for HourlyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
