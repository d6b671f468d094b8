//! # paycal
//!
//! Enriched daily calendar tables for forecasting features: holidays,
//! paydays and pay months, fiscal years, and retail special days.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! paycal = "0.1"
//! ```
//!
//! ```rust
//! use paycal::prelude::*;
//!
//! let day = Date::from_ymd(2022, 11, 25)?;
//! let table = create_calendar(day, day, "Denmark", 4)?;
//! assert_eq!(table.rows()[0].special_day, Some(SpecialDay::BlackFriday));
//! # Ok::<(), paycal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pc_core as core;

/// Date, weekday, month, business-day calendar and holiday types.
pub use pc_time as time;

/// Calendar tables and the stages that build them.
pub use pc_features as features;

/// The types most callers need.
pub mod prelude {
    pub use pc_core::{Error, Result};
    pub use pc_features::{
        create_calendar, CalendarBuilder, CalendarConfig, CalendarRow, CalendarTable,
        CalendarWarning, SpecialDay,
    };
    pub use pc_time::{BuiltinHolidays, Country, Date, HolidayProvider, StaticHolidays};
}
