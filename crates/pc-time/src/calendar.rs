//! `Calendar` trait and the holiday-set calendar used for payday schedules.
//!
//! A calendar knows which dates are business days. Weekends (Saturday and
//! Sunday) are never business days; concrete calendars add their holidays on
//! top.

use std::collections::BTreeSet;

use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Denmark"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return the last business day of the month containing `date`.
    ///
    /// Scans backward from the last calendar day of the month and stops at
    /// the first of the month; returns `None` if the whole month is
    /// non-business.
    fn last_business_day_of_month(&self, date: Date) -> Option<Date> {
        let first = date.start_of_month();
        let mut d = date.end_of_month();
        loop {
            if self.is_business_day(d) {
                return Some(d);
            }
            if d == first {
                return None;
            }
            d = Date::from_serial(d.serial() - 1).ok()?;
        }
    }

    /// Count the business days in `from..=to`.
    fn business_days_in(&self, from: Date, to: Date) -> usize {
        Date::range_inclusive(from, to)
            .filter(|&d| self.is_business_day(d))
            .count()
    }
}

/// A calendar whose non-business days are the weekends plus an explicit set
/// of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct HolidaySetCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidaySetCalendar {
    /// Create a calendar with the given name and holiday dates.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Add a holiday. Weekends are already non-business days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if `date` is one of the explicit holidays.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl Calendar for HolidaySetCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
