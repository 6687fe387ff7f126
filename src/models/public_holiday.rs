//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named public holiday on a given date.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2022, 7, 14).unwrap(),
///     name: "Fête nationale".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Lundi de Pâques").
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_holiday_deserialization() {
        let yaml = "date: 2022-04-18\nname: Lundi de Pâques\n";
        let holiday: PublicHoliday = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2022, 4, 18).unwrap());
        assert_eq!(holiday.name, "Lundi de Pâques");
    }
}
