//! French public holidays (metropolitan France).

use chrono::{Datelike, Duration, NaiveDate};

use super::HolidayCalendar;

/// The eleven public holidays observed in metropolitan France.
///
/// Fixed dates are Jan 1, May 1, May 8, Jul 14, Aug 15, Nov 1, Nov 11 and
/// Dec 25. Movable dates follow Easter: Easter Monday (+1), Ascension (+39)
/// and Whit Monday (+50).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchPublicHolidays;

impl FrenchPublicHolidays {
    /// Lists the public holidays of `year` in chronological order.
    ///
    /// Returns an empty list for years chrono cannot represent.
    pub fn holidays_in(year: i32) -> Vec<(NaiveDate, &'static str)> {
        let Some(easter) = easter_sunday(year) else {
            return Vec::new();
        };

        let fixed = [
            (1, 1, "Jour de l'an"),
            (5, 1, "Fête du travail"),
            (5, 8, "Victoire 1945"),
            (7, 14, "Fête nationale"),
            (8, 15, "Assomption"),
            (11, 1, "Toussaint"),
            (11, 11, "Armistice 1918"),
            (12, 25, "Noël"),
        ];
        let movable = [
            (1, "Lundi de Pâques"),
            (39, "Ascension"),
            (50, "Lundi de Pentecôte"),
        ];

        let mut holidays: Vec<(NaiveDate, &'static str)> = fixed
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, name))
            })
            .chain(
                movable
                    .iter()
                    .map(|&(offset, name)| (easter + Duration::days(offset), name)),
            )
            .collect();
        holidays.sort_by_key(|(date, _)| *date);
        holidays
    }
}

impl HolidayCalendar for FrenchPublicHolidays {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        Self::holidays_in(date.year())
            .iter()
            .any(|(holiday, _)| *holiday == date)
    }
}

/// Computes Easter Sunday for a Gregorian year (anonymous Gregorian algorithm).
///
/// # Example
///
/// ```
/// use surcharge_engine::holidays::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2022), NaiveDate::from_ymd_opt(2022, 4, 17));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}
