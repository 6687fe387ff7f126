//! Calculation logic for the surcharge engine.
//!
//! This module contains the four stages of a surcharge computation: interval
//! primitives, daily premium selection, hourly window segmentation, and the
//! merge of daily and hourly premiums into the final list of segments.

mod daily_premium;
mod hourly_window;
mod interval;
mod merger;

pub use daily_premium::select_daily;
pub use hourly_window::{hourly_segments, segment_window};
pub use interval::{Interval, intersect, subtract_all};
pub use merger::{compute_event_surcharges, merge_surcharges};
