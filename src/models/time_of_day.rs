//! Clock time model used by hourly surcharge windows.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A wall-clock time with minute precision, written as `"HH:MM"`.
///
/// Ordering is by hour, then minute. Values outside 00:00-23:59 cannot be
/// constructed, so a rate plan holding a `TimeOfDay` is always well formed.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::TimeOfDay;
///
/// let evening: TimeOfDay = "20:00".parse().unwrap();
/// let morning: TimeOfDay = "07:00".parse().unwrap();
/// assert!(morning < evening);
/// assert_eq!(evening.to_string(), "20:00");
/// assert!("24:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Creates a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::InvalidTimeOfDay {
                value: format!("{:02}:{:02}", hour, minute),
                message: "hour must be between 00 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(EngineError::InvalidTimeOfDay {
                value: format!("{:02}:{:02}", hour, minute),
                message: "minute must be between 00 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Converts to a [`NaiveTime`] with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        // Components are range checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || EngineError::InvalidTimeOfDay {
            value: value.to_string(),
            message: "expected HH:MM".to_string(),
        };

        let (hour, minute) = value.trim().split_once(':').ok_or_else(malformed)?;
        let is_component = |part: &str| {
            !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_component(hour) || minute.len() != 2 || !is_component(minute) {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;

        Self::new(hour, minute).map_err(|err| match err {
            EngineError::InvalidTimeOfDay { message, .. } => EngineError::InvalidTimeOfDay {
                value: value.to_string(),
                message,
            },
            other => other,
        })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
