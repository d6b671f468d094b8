//! # pc-features
//!
//! Enriched daily calendar tables.
//!
//! A table is built in stages, each taking the table by value and returning
//! it with more columns filled in:
//!
//! 1. [`axis`]: one row per day with the date parts.
//! 2. [`fiscal_year`]: fiscal-year labels.
//! 3. [`holidays`]: holiday names from a [`HolidayProvider`](pc_time::HolidayProvider).
//! 4. [`payday`]: paydays, pay months and the distance since payday.
//! 5. [`special_days`]: Black Friday and friends, the Christmas countdown,
//!    and the day after Easter.
//!
//! [`assembler`] runs the stages over a padded range and trims the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarBuilder` and `create_calendar`.
pub mod assembler;

/// Date axis builder.
pub mod axis;

/// `CalendarConfig`.
pub mod config;

/// Financial year assigner.
pub mod fiscal_year;

/// Holiday join.
pub mod holidays;

/// Payday engine.
pub mod payday;

/// Special-day engine.
pub mod special_days;

/// `CalendarRow`, `CalendarTable` and related types.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{create_calendar, CalendarBuilder};
pub use axis::build_axis;
pub use config::CalendarConfig;
pub use fiscal_year::{assign_fiscal_years, fiscal_year_label};
pub use holidays::apply_holidays;
pub use payday::{compute_paydays, payday_schedule, paydays_between, PaydaySchedule};
pub use special_days::{
    black_friday, black_weekend, christmas_eve, compute_special_days, cyber_monday,
};
pub use table::{CalendarRow, CalendarTable, CalendarWarning, SpecialDay};
