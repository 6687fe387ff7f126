//! Surcharge (rate premium) computation engine.
//!
//! Given a scheduled event and a rate plan, this crate splits the event into
//! non-overlapping segments, each tagged with the percentage markup that
//! applies to it: calendar premiums (specific dates, public holidays,
//! weekends) and clock-time windows (evening, custom) that may cross midnight.
//!
//! # Example
//!
//! ```
//! use surcharge_engine::calculation::compute_event_surcharges;
//! use surcharge_engine::holidays::FrenchPublicHolidays;
//! use surcharge_engine::models::{Event, HourlyWindow, RatePlan};
//! use chrono::NaiveDateTime;
//! use rust_decimal::Decimal;
//!
//! let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
//!
//! let plan = RatePlan {
//!     saturday: Some(Decimal::new(25, 0)),
//!     evening: Some(HourlyWindow {
//!         percentage: Some(Decimal::new(40, 0)),
//!         start: "20:00".parse().unwrap(),
//!         end: "07:00".parse().unwrap(),
//!     }),
//!     ..RatePlan::default()
//! };
//!
//! // 2022-06-04 is a Saturday
//! let event = Event::new(at("2022-06-04 17:00"), at("2022-06-04 22:00")).unwrap();
//! let segments = compute_event_surcharges(&event, &plan, &FrenchPublicHolidays).unwrap();
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].label, "Samedi");
//! assert_eq!(segments[1].label, "Soirée");
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
