//! Country holiday rules and the holiday provider interface.
//!
//! Each supported country implements [`HolidayRules`], listing its public
//! holidays for a year with their names in the country's own language. The
//! [`Country`] table maps user-facing names to rule sets, and
//! [`HolidayProvider`] is the seam through which the calendar assembler asks
//! for holidays, so an external dataset can replace the built-in rules.

use crate::date::Date;
use crate::easter::easter_offset;
use crate::weekday::Weekday;
use pc_core::errors::Result;

/// Country name ↔ rule set lookup table.
pub mod country;

/// `HolidayProvider` trait and built-in implementations.
pub mod provider;

/// Danish public holidays.
pub mod denmark;

/// Finnish public holidays.
pub mod finland;

/// German nationwide public holidays.
pub mod germany;

/// Norwegian public holidays.
pub mod norway;

/// Swedish public holidays.
pub mod sweden;

pub use country::Country;
pub use provider::{BuiltinHolidays, HolidayMap, HolidayProvider, StaticHolidays};

/// A single observed holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Holiday {
    /// Date on which the holiday is observed.
    pub date: Date,
    /// Localised holiday name.
    pub name: &'static str,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: Date, name: &'static str) -> Self {
        Self { date, name }
    }

    /// A holiday on a fixed day of the year.
    pub fn fixed(year: u16, month: u8, day: u8, name: &'static str) -> Result<Self> {
        Ok(Self::new(Date::from_ymd(year, month, day)?, name))
    }

    /// A holiday `offset` days from Easter Sunday.
    pub fn easter(year: u16, offset: i32, name: &'static str) -> Result<Self> {
        Ok(Self::new(easter_offset(year, offset)?, name))
    }

    /// A holiday on the first `weekday` on or after `month`/`day`.
    pub fn floating(
        year: u16,
        month: u8,
        day: u8,
        weekday: Weekday,
        name: &'static str,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?.on_or_after(weekday)?,
            name,
        ))
    }
}

/// The public holidays of one country.
pub trait HolidayRules: std::fmt::Debug + Send + Sync {
    /// English country name (e.g. `"Denmark"`).
    fn name(&self) -> &'static str;

    /// Public holidays observed in `year`, in rule order.
    ///
    /// When two rules land on the same date the earlier one in the list is
    /// the one reported by [`HolidayProvider`].
    fn holidays(&self, year: u16) -> Result<Vec<Holiday>>;

    /// Localised name of the Easter Sunday holiday, if the country observes
    /// it as a public holiday.
    fn easter_sunday_label(&self) -> Option<&'static str> {
        None
    }
}
