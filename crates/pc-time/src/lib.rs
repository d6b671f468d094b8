//! # pc-time
//!
//! Date, weekday, month, business-day calendar and country holiday types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day calendar trait and the holiday-set calendar.
pub mod calendar;

/// `Date` type and ISO week dates.
pub mod date;

/// Easter Sunday computus.
pub mod easter;

/// Country holiday rules and holiday providers.
pub mod holidays;

/// Month of the year.
pub mod month;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, HolidaySetCalendar};
pub use date::{Date, DateRange, IsoWeek};
pub use easter::easter_sunday;
pub use holidays::{
    BuiltinHolidays, Country, Holiday, HolidayMap, HolidayProvider, HolidayRules, StaticHolidays,
};
pub use month::Month;
pub use weekday::Weekday;
